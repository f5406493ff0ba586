//! JSON-LDレコード組み立て

use crate::location::ResolvedLocation;
use crate::types::{About, GeoCoordinates, LinkedDataRecord, Place};

pub const SCHEMA_CONTEXT: &str = "http://schema.org";
pub const DEFAULT_BASE_URL: &str = "https://raw.githubusercontent.com/jsimonclark/FjordHealthDashboard/main/";
pub const DEFAULT_ABOUT_ID: &str = "https://www.wikidata.org/wiki/Q45701";
pub const DEFAULT_ABOUT_NAME: &str = "trash";
pub const DEFAULT_KEYWORD: &str = "trash";

/// 全画像で共通のレコード要素
#[derive(Debug, Clone, PartialEq)]
pub struct RecordTemplate {
    pub base_url: String,
    pub keywords: Vec<String>,
    pub about_id: String,
    pub about_name: String,
}

impl Default for RecordTemplate {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.into(),
            keywords: vec![DEFAULT_KEYWORD.into()],
            about_id: DEFAULT_ABOUT_ID.into(),
            about_name: DEFAULT_ABOUT_NAME.into(),
        }
    }
}

/// contentUrl = ベースURL + 相対パス（区切り文字は `/` に統一）
pub fn content_url(base_url: &str, relative_path: &str) -> String {
    format!("{}{}", base_url, relative_path.replace('\\', "/"))
}

/// 1画像分のレコードを組み立てる
pub fn build_record(
    template: &RecordTemplate,
    relative_path: &str,
    location: &ResolvedLocation,
) -> LinkedDataRecord {
    LinkedDataRecord {
        context: SCHEMA_CONTEXT.into(),
        kind: "ImageObject".into(),
        content_url: content_url(&template.base_url, relative_path),
        location_created: Place {
            kind: "Place".into(),
            name: location.name.clone(),
            geo: GeoCoordinates {
                kind: "GeoCoordinates".into(),
                latitude: location.latitude,
                longitude: location.longitude,
            },
        },
        keywords: template.keywords.clone(),
        about: About {
            id: template.about_id.clone(),
            kind: "Thing".into(),
            name: template.about_name.clone(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn location() -> ResolvedLocation {
        ResolvedLocation {
            name: "Trondheimsfjord".into(),
            latitude: Some(63.44),
            longitude: Some(10.39),
        }
    }

    #[test]
    fn test_content_url_normalizes_backslashes() {
        let url = content_url("https://example.org/", "data\\img\\fjord\\a.jpg");
        assert_eq!(url, "https://example.org/data/img/fjord/a.jpg");
        assert!(!url.contains('\\'));
    }

    #[test]
    fn test_content_url_keeps_forward_slashes() {
        assert_eq!(content_url("https://example.org/", "data/img/a.jpg"), "https://example.org/data/img/a.jpg");
    }

    #[test]
    fn test_build_record_shape() {
        let record = build_record(&RecordTemplate::default(), "data/img/a.jpg", &location());

        assert_eq!(record.context, "http://schema.org");
        assert_eq!(record.kind, "ImageObject");
        assert_eq!(record.content_url, format!("{}data/img/a.jpg", DEFAULT_BASE_URL));
        assert_eq!(record.location_created.name, "Trondheimsfjord");
        assert_eq!(record.location_created.geo.latitude, Some(63.44));
        assert_eq!(record.keywords, vec!["trash".to_string()]);
        assert_eq!(record.about.id, DEFAULT_ABOUT_ID);
        assert_eq!(record.about.kind, "Thing");
    }

    #[test]
    fn test_build_record_key_order() {
        let record = build_record(&RecordTemplate::default(), "a.jpg", &ResolvedLocation::default());
        let json = serde_json::to_string(&record).unwrap();

        let keys = ["\"@context\"", "\"@type\"", "\"contentUrl\"", "\"locationCreated\"", "\"keywords\"", "\"about\""];
        let positions: Vec<usize> = keys.iter().map(|k| json.find(k).expect(k)).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "キー順序が不正: {}", json);
        assert!(json.contains(r#""latitude":null,"longitude":null"#));
    }
}
