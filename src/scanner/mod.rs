pub mod exif;

use crate::error::{PhotoJsonLdError, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

pub use self::exif::{is_missing_exif, read_tags, KamadakExif, TagParser};

#[derive(Debug, Clone)]
pub struct ImageInfo {
    pub path: PathBuf,
}

/// 走査順序
///
/// 直前の画像の座標を引き継ぐため、順序によって出力が変わる。
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ScanOrder {
    /// ファイル名の辞書順（再現性あり）
    #[default]
    Name,
    /// OSが返すディレクトリ列挙順（旧来の挙動）
    Listing,
}

/// フォルダ直下の画像を列挙する（再帰しない）
///
/// 拡張子は大文字小文字を区別して比較する。
pub fn scan_folder(folder: &Path, extensions: &[String], order: ScanOrder) -> Result<Vec<ImageInfo>> {
    if !folder.is_dir() {
        return Err(PhotoJsonLdError::FolderNotFound(folder.display().to_string()));
    }

    let mut walker = WalkDir::new(folder).min_depth(1).max_depth(1);
    if order == ScanOrder::Name {
        walker = walker.sort_by_file_name();
    }

    let mut images = Vec::new();

    for entry in walker {
        // 列挙できないフォルダは致命的エラー
        let entry = entry.map_err(std::io::Error::from)?;
        let path = entry.path();

        if !path.is_file() || !has_extension(path, extensions) {
            continue;
        }

        images.push(ImageInfo {
            path: path.to_path_buf(),
        });
    }

    Ok(images)
}

fn has_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|ext| extensions.iter().any(|e| e == ext))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{self, File};
    use std::io::Write;
    use tempfile::tempdir;

    fn jpeg_extensions() -> Vec<String> {
        vec!["jpg".into(), "jpeg".into()]
    }

    fn names(images: &[ImageInfo]) -> Vec<String> {
        images
            .iter()
            .map(|i| i.path.file_name().unwrap().to_string_lossy().to_string())
            .collect()
    }

    #[test]
    fn test_has_extension_is_case_sensitive() {
        let exts = jpeg_extensions();
        assert!(has_extension(Path::new("a.jpg"), &exts));
        assert!(has_extension(Path::new("a.jpeg"), &exts));
        assert!(!has_extension(Path::new("a.JPG"), &exts));
        assert!(!has_extension(Path::new("a.png"), &exts));
        assert!(!has_extension(Path::new("jpg"), &exts));
    }

    #[test]
    fn test_scan_folder_not_found() {
        let result = scan_folder(Path::new("/nonexistent/folder"), &jpeg_extensions(), ScanOrder::Name);
        assert!(matches!(result, Err(PhotoJsonLdError::FolderNotFound(_))));
    }

    #[test]
    fn test_scan_folder_with_images() {
        let dir = tempdir().unwrap();

        File::create(dir.path().join("test1.jpg")).unwrap().write_all(b"dummy").unwrap();
        File::create(dir.path().join("test2.jpeg")).unwrap().write_all(b"dummy").unwrap();
        File::create(dir.path().join("test3.JPG")).unwrap().write_all(b"dummy").unwrap();
        File::create(dir.path().join("metadata.json")).unwrap().write_all(b"{}").unwrap();

        let result = scan_folder(dir.path(), &jpeg_extensions(), ScanOrder::Name).unwrap();
        assert_eq!(names(&result), vec!["test1.jpg", "test2.jpeg"]);
    }

    #[test]
    fn test_scan_is_not_recursive() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        File::create(dir.path().join("sub").join("nested.jpg")).unwrap();
        // ディレクトリ名が拡張子に一致しても対象外
        fs::create_dir(dir.path().join("folder.jpg")).unwrap();
        File::create(dir.path().join("top.jpg")).unwrap();

        let result = scan_folder(dir.path(), &jpeg_extensions(), ScanOrder::Name).unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].path, dir.path().join("top.jpg"));
    }

    #[test]
    fn test_images_sorted_by_filename() {
        let dir = tempdir().unwrap();

        File::create(dir.path().join("c.jpg")).unwrap();
        File::create(dir.path().join("a.jpg")).unwrap();
        File::create(dir.path().join("b.jpeg")).unwrap();

        let result = scan_folder(dir.path(), &jpeg_extensions(), ScanOrder::Name).unwrap();
        assert_eq!(names(&result), vec!["a.jpg", "b.jpeg", "c.jpg"]);
    }

    #[test]
    fn test_listing_order_returns_same_set() {
        let dir = tempdir().unwrap();
        for name in ["c.jpg", "a.jpg", "b.jpg"] {
            File::create(dir.path().join(name)).unwrap();
        }

        let result = scan_folder(dir.path(), &jpeg_extensions(), ScanOrder::Listing).unwrap();
        let mut listed = names(&result);
        listed.sort();
        assert_eq!(listed, vec!["a.jpg", "b.jpg", "c.jpg"]);
    }
}
