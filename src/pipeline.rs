//! 生成パイプライン
//!
//! metadata読み込み → 画像列挙 → EXIF抽出（並列）→ 場所の畳み込み（走査順）→ 書き出し
//!
//! EXIF抽出は画像ごとに独立なので並列に行うが、場所の引き継ぎは
//! 走査順に依存するため、結果を順序どおり集めてから逐次に畳み込む。

use crate::config::Config;
use crate::error::Result;
use crate::metadata::load_directory_metadata;
use crate::scanner::{self, ImageInfo, TagParser};
use crate::writer;
use photo_jsonld_common::{
    build_record, extract_coordinates, resolve_in_order, Coordinates, HemispherePolicy,
    LinkedDataRecord, RunningLocation,
};
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info, warn};

/// 1回の実行オプション
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// contentUrlの相対パスの基準
    pub url_root: PathBuf,
    /// 書き出さずにレコードだけ作る
    pub dry_run: bool,
}

#[derive(Debug, Clone)]
pub struct ProcessedImage {
    pub image: ImageInfo,
    pub has_own_coordinates: bool,
    pub record: LinkedDataRecord,
}

#[derive(Debug, Default)]
pub struct RunSummary {
    pub processed: usize,
    pub with_coordinates: usize,
    pub written: Vec<PathBuf>,
    pub failed: Vec<(PathBuf, String)>,
    /// dry-run時の出力先パスと整形済みJSON
    pub previews: Vec<(PathBuf, String)>,
}

/// 各画像の座標を抽出する。戻り値は入力と同じ順序。
///
/// EXIFを持たない画像は「座標なし」。読めない・解析できない画像は警告を出して同じく「座標なし」とする。
pub fn extract_all(
    images: &[ImageInfo],
    parser: &dyn TagParser,
    policy: HemispherePolicy,
) -> Vec<Option<Coordinates>> {
    images
        .par_iter()
        .map(|img| match scanner::read_tags(parser, &img.path) {
            Ok(tags) => {
                let coords = extract_coordinates(&tags, policy);
                debug!(file = %img.path.display(), ?coords, "EXIF座標");
                coords
            }
            Err(e) if scanner::is_missing_exif(&e) => {
                debug!(file = %img.path.display(), "EXIFなし");
                None
            }
            Err(e) => {
                warn!(file = %img.path.display(), error = %e, "EXIFを読み込めません。座標なしとして扱います");
                None
            }
        })
        .collect()
}

/// contentUrl用の相対パス
///
/// 基準の外にある画像は与えられたパスをそのまま使う。
pub fn relative_path(image: &Path, root: &Path) -> String {
    let image_abs = std::path::absolute(image).unwrap_or_else(|_| image.to_path_buf());
    let root_abs = std::path::absolute(root).unwrap_or_else(|_| root.to_path_buf());

    match image_abs.strip_prefix(&root_abs) {
        Ok(rel) => rel.to_string_lossy().to_string(),
        Err(_) => image.to_string_lossy().to_string(),
    }
}

/// フォルダ内の全画像のレコードを走査順に組み立てる（書き出しはしない）
pub fn build_records(
    folder: &Path,
    config: &Config,
    parser: &dyn TagParser,
    url_root: &Path,
) -> Result<Vec<ProcessedImage>> {
    let metadata = load_directory_metadata(&folder.join(&config.metadata_file_name));
    let images = scanner::scan_folder(folder, &config.extensions, config.order)?;
    info!(folder = %folder.display(), count = images.len(), order = ?config.order, "画像を検出");

    let coords = extract_all(&images, parser, config.hemisphere);
    let own: Vec<bool> = coords.iter().map(Option::is_some).collect();
    let locations = resolve_in_order(RunningLocation::seed(&metadata), coords);
    let template = config.record_template();

    let processed = images
        .into_iter()
        .zip(own)
        .zip(locations)
        .map(|((image, has_own_coordinates), location)| {
            let rel = relative_path(&image.path, url_root);
            let record = build_record(&template, &rel, &location);
            ProcessedImage {
                image,
                has_own_coordinates,
                record,
            }
        })
        .collect();

    Ok(processed)
}

/// パイプラインを実行する
///
/// 書き出しの失敗は画像ごとに記録し、残りの画像の処理は続ける。
/// フォルダが存在しない・列挙できない場合のみエラーを返す。
pub fn generate(
    folder: &Path,
    config: &Config,
    parser: &dyn TagParser,
    options: &RunOptions,
) -> Result<RunSummary> {
    let processed = build_records(folder, config, parser, &options.url_root)?;

    let mut summary = RunSummary {
        processed: processed.len(),
        with_coordinates: processed.iter().filter(|p| p.has_own_coordinates).count(),
        ..Default::default()
    };

    for item in &processed {
        let target = writer::json_path_for(&item.image.path);

        if options.dry_run {
            match writer::to_pretty_json(&item.record) {
                Ok(bytes) => {
                    let json = String::from_utf8_lossy(&bytes).into_owned();
                    info!(file = %target.display(), "dry-run: 書き出しをスキップ");
                    summary.previews.push((target, json));
                }
                Err(e) => {
                    error!(file = %target.display(), error = %e, "JSON-LDの整形に失敗");
                    summary.failed.push((target, e.to_string()));
                }
            }
            continue;
        }

        match writer::write_record(&item.image.path, &item.record) {
            Ok(json_path) => {
                info!(file = %json_path.display(), "JSON-LDを書き出しました");
                summary.written.push(json_path);
            }
            Err(e) => {
                error!(file = %target.display(), error = %e, "JSON-LDの書き出しに失敗");
                summary.failed.push((target, e.to_string()));
            }
        }
    }

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_path_under_root() {
        let rel = relative_path(Path::new("/repo/data/img/a.jpg"), Path::new("/repo"));
        assert_eq!(rel.replace('\\', "/"), "data/img/a.jpg");
    }

    #[test]
    fn test_relative_path_outside_root() {
        let rel = relative_path(Path::new("/elsewhere/a.jpg"), Path::new("/repo"));
        assert_eq!(rel, "/elsewhere/a.jpg");
    }

    #[test]
    fn test_relative_path_relative_image_against_cwd() {
        let cwd = std::env::current_dir().unwrap();
        let rel = relative_path(Path::new("data/a.jpg"), &cwd);
        assert_eq!(rel.replace('\\', "/"), "data/a.jpg");
    }
}
