use crate::error::{PhotoJsonLdError, Result};
use crate::scanner::ScanOrder;
use photo_jsonld_common::record::{DEFAULT_ABOUT_ID, DEFAULT_ABOUT_NAME, DEFAULT_BASE_URL, DEFAULT_KEYWORD};
use photo_jsonld_common::{HemispherePolicy, RecordTemplate};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::warn;

pub const DEFAULT_METADATA_FILE: &str = "metadata.json";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub base_url: String,
    pub keywords: Vec<String>,
    pub about_id: String,
    pub about_name: String,
    pub metadata_file_name: String,
    pub extensions: Vec<String>,
    pub order: ScanOrder,
    pub hemisphere: HemispherePolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_config()
    }
}

impl Config {
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default_config())
        }
    }

    /// 読めない・壊れた設定ファイルは警告を出して既定値にする
    ///
    /// `config --set-base-url` で壊れた設定を上書きできるようにするため、起動時はこちらを使う。
    pub fn load_or_default() -> Self {
        match Self::config_path() {
            Ok(path) => Self::load_or_default_from(&path),
            Err(e) => {
                warn!(error = %e, "設定ファイルの場所を決められません。既定値で続行します");
                Self::default_config()
            }
        }
    }

    pub fn load_or_default_from(config_path: &Path) -> Self {
        Self::load_from(config_path).unwrap_or_else(|e| {
            warn!(file = %config_path.display(), error = %e, "設定ファイルを読み込めません。既定値で続行します");
            Self::default_config()
        })
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| PhotoJsonLdError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("photo-jsonld").join("config.json"))
    }

    fn default_config() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.into(),
            keywords: vec![DEFAULT_KEYWORD.into()],
            about_id: DEFAULT_ABOUT_ID.into(),
            about_name: DEFAULT_ABOUT_NAME.into(),
            metadata_file_name: DEFAULT_METADATA_FILE.into(),
            // 大文字小文字は区別する
            extensions: vec!["jpg".into(), "jpeg".into()],
            order: ScanOrder::Name,
            hemisphere: HemispherePolicy::Ignore,
        }
    }

    pub fn set_base_url(&mut self, url: String) -> Result<()> {
        if url.trim().is_empty() {
            return Err(PhotoJsonLdError::Config("base_urlが空です".into()));
        }
        self.base_url = url;
        self.save()
    }

    pub fn record_template(&self) -> RecordTemplate {
        RecordTemplate {
            base_url: self.base_url.clone(),
            keywords: self.keywords.clone(),
            about_id: self.about_id.clone(),
            about_name: self.about_name.clone(),
        }
    }
}
