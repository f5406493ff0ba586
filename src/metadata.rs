//! ディレクトリ既定値（metadata.json）の読み込み
//!
//! ファイルがない・読めない・壊れている場合も処理は止めない。
//! 警告を出して空の既定値（場所名なし・座標なし）で続行する。

use crate::error::Result;
use photo_jsonld_common::DirectoryMetadata;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::warn;

pub fn load_directory_metadata(path: &Path) -> DirectoryMetadata {
    match try_load(path) {
        Ok(metadata) => metadata,
        Err(e) => {
            warn!(file = %path.display(), error = %e, "metadataファイルを読み込めません。既定値で続行します");
            DirectoryMetadata::default()
        }
    }
}

fn try_load(path: &Path) -> Result<DirectoryMetadata> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let metadata = serde_json::from_reader(reader)?;
    Ok(metadata)
}
