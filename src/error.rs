use thiserror::Error;

#[derive(Error, Debug)]
pub enum PhotoJsonLdError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("フォルダが見つかりません: {0}")]
    FolderNotFound(String),

    #[error("EXIF読み込みエラー: {0}")]
    Exif(#[from] exif::Error),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PhotoJsonLdError>;
