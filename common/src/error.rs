//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid rational: {num}/{den}")]
    InvalidRational { num: i64, den: i64 },
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
