//! 入出力の型定義
//!
//! - DirectoryMetadata: ディレクトリ単位の既定値（metadata.json）
//! - TagMap: EXIFパーサーが返すタグ名 → 値のマップ
//! - LinkedDataRecord: 画像ごとに出力するJSON-LD（schema.org ImageObject）

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// ディレクトリ既定値（metadata.json）
///
/// すべてのフィールドは省略可能。欠けている場合は空文字 / 座標なし。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DirectoryMetadata {
    pub location_created: LocationCreated,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocationCreated {
    pub name: String,
    pub geo: GeoPoint,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeoPoint {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

/// EXIFの有理数値（RATIONAL / SRATIONAL 両対応のため符号付き）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rational {
    pub num: i64,
    pub den: i64,
}

impl Rational {
    pub fn new(num: i64, den: i64) -> Self {
        Self { num, den }
    }

    /// 浮動小数点で割る。分母が1でも整数除算にはしない。
    pub fn to_f64(self) -> Result<f64> {
        if self.den == 0 {
            return Err(Error::InvalidRational {
                num: self.num,
                den: self.den,
            });
        }
        Ok(self.num as f64 / self.den as f64)
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.num, self.den)
    }
}

/// EXIFタグの値
#[derive(Debug, Clone, PartialEq)]
pub enum TagValue {
    Rationals(Vec<Rational>),
    Text(String),
}

impl TagValue {
    pub fn as_rationals(&self) -> Option<&[Rational]> {
        match self {
            TagValue::Rationals(values) => Some(values),
            TagValue::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            TagValue::Text(text) => Some(text),
            TagValue::Rationals(_) => None,
        }
    }
}

impl fmt::Display for TagValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TagValue::Rationals(values) => {
                let parts: Vec<String> = values.iter().map(|r| r.to_string()).collect();
                write!(f, "[{}]", parts.join(", "))
            }
            TagValue::Text(text) => write!(f, "{}", text),
        }
    }
}

/// タグ名（"GPS GPSLatitude" 形式）→ 値
pub type TagMap = BTreeMap<String, TagValue>;

/// 10進度の座標。緯度・経度は必ず両方そろう。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// 出力JSON-LD
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkedDataRecord {
    #[serde(rename = "@context")]
    pub context: String,
    #[serde(rename = "@type")]
    pub kind: String,
    #[serde(rename = "contentUrl")]
    pub content_url: String,
    #[serde(rename = "locationCreated")]
    pub location_created: Place,
    pub keywords: Vec<String>,
    pub about: About,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    #[serde(rename = "@type")]
    pub kind: String,
    pub name: String,
    pub geo: GeoCoordinates,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoCoordinates {
    #[serde(rename = "@type")]
    pub kind: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct About {
    #[serde(rename = "@id")]
    pub id: String,
    #[serde(rename = "@type")]
    pub kind: String,
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directory_metadata_deserialize() {
        let json = r#"{
            "locationCreated": {
                "name": "Trondheimsfjord",
                "geo": { "latitude": 63.44, "longitude": 10.39 }
            }
        }"#;

        let meta: DirectoryMetadata = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert_eq!(meta.location_created.name, "Trondheimsfjord");
        assert_eq!(meta.location_created.geo.latitude, Some(63.44));
        assert_eq!(meta.location_created.geo.longitude, Some(10.39));
    }

    #[test]
    fn test_directory_metadata_missing_fields() {
        let meta: DirectoryMetadata =
            serde_json::from_str(r#"{"locationCreated": {"name": "Fjord"}}"#).expect("デシリアライズ失敗");
        assert_eq!(meta.location_created.name, "Fjord");
        assert_eq!(meta.location_created.geo, GeoPoint::default());

        let empty: DirectoryMetadata = serde_json::from_str("{}").expect("デシリアライズ失敗");
        assert_eq!(empty, DirectoryMetadata::default());
    }

    #[test]
    fn test_rational_float_division() {
        assert_eq!(Rational::new(1234, 100).to_f64().unwrap(), 12.34);
        assert_eq!(Rational::new(1, 2).to_f64().unwrap(), 0.5);
    }

    #[test]
    fn test_rational_zero_denominator() {
        let err = Rational::new(5, 0).to_f64().unwrap_err();
        assert!(matches!(err, Error::InvalidRational { num: 5, den: 0 }));
    }

    #[test]
    fn test_tag_value_display() {
        let value = TagValue::Rationals(vec![Rational::new(63, 1), Rational::new(25, 1)]);
        assert_eq!(value.to_string(), "[63/1, 25/1]");
        assert_eq!(TagValue::Text("N".into()).to_string(), "N");
    }

    #[test]
    fn test_geo_coordinates_null_serialization() {
        let geo = GeoCoordinates {
            kind: "GeoCoordinates".into(),
            latitude: None,
            longitude: Some(1.5),
        };
        let json = serde_json::to_string(&geo).unwrap();
        assert_eq!(json, r#"{"@type":"GeoCoordinates","latitude":null,"longitude":1.5}"#);
    }
}
