//! EXIFタグ抽出
//!
//! パーサーは `TagParser` として差し替え可能。本番は kamadak-exif。
//! タグ名は "GPS GPSLatitude" のように "<IFD> <タグ>" 形式に揃える。

use crate::error::{PhotoJsonLdError, Result};
use photo_jsonld_common::{Rational, TagMap, TagValue};
use std::io::Cursor;
use std::path::Path;
use tracing::debug;

/// 画像バイト列 → タグマップ
pub trait TagParser: Sync {
    fn parse_tags(&self, bytes: &[u8]) -> Result<TagMap>;
}

/// kamadak-exif によるパーサー（JPEG / TIFF / HEIF / PNG / WebP）
#[derive(Debug, Clone, Copy, Default)]
pub struct KamadakExif;

impl TagParser for KamadakExif {
    fn parse_tags(&self, bytes: &[u8]) -> Result<TagMap> {
        let mut cursor = Cursor::new(bytes);
        // 壊れたフィールドがあっても読めた分は使う
        let exif = exif::Reader::new()
            .continue_on_error(true)
            .read_from_container(&mut cursor)
            .or_else(|e| {
                e.distill_partial_result(|errors| {
                    for err in &errors {
                        debug!(error = %err, "EXIFフィールドを読み飛ばしました");
                    }
                })
            })?;

        let mut tags = TagMap::new();
        for field in exif.fields() {
            let name = format!("{} {}", ifd_name(field), field.tag);
            // 同名タグはPRIMARYを優先
            if tags.contains_key(&name) && field.ifd_num != exif::In::PRIMARY {
                continue;
            }
            tags.insert(name, tag_value(field));
        }

        Ok(tags)
    }
}

/// ファイルを読んでタグを取り出す
pub fn read_tags(parser: &dyn TagParser, path: &Path) -> Result<TagMap> {
    let bytes = std::fs::read(path)?;
    parser.parse_tags(&bytes)
}

/// EXIFを持たないだけの画像か（壊れたファイルとは区別する）
pub fn is_missing_exif(err: &PhotoJsonLdError) -> bool {
    matches!(err, PhotoJsonLdError::Exif(exif::Error::NotFound(_)))
}

#[allow(unreachable_patterns)]
fn ifd_name(field: &exif::Field) -> &'static str {
    match field.tag.context() {
        exif::Context::Gps => "GPS",
        exif::Context::Exif => "EXIF",
        exif::Context::Interop => "Interoperability",
        exif::Context::Tiff if field.ifd_num == exif::In::PRIMARY => "Image",
        exif::Context::Tiff => "Thumbnail",
        _ => "Unknown",
    }
}

fn tag_value(field: &exif::Field) -> TagValue {
    match &field.value {
        exif::Value::Rational(values) => TagValue::Rationals(
            values
                .iter()
                .map(|r| Rational::new(i64::from(r.num), i64::from(r.denom)))
                .collect(),
        ),
        exif::Value::SRational(values) => TagValue::Rationals(
            values
                .iter()
                .map(|r| Rational::new(i64::from(r.num), i64::from(r.denom)))
                .collect(),
        ),
        exif::Value::Ascii(parts) => {
            let text: Vec<String> = parts
                .iter()
                .map(|p| String::from_utf8_lossy(p).trim_end_matches('\0').to_string())
                .collect();
            TagValue::Text(text.join(" "))
        }
        _ => TagValue::Text(field.display_value().to_string()),
    }
}
