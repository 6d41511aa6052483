//! Directory listing for batch runs

use crate::error::Result;
use crate::input::file_detector::FileType;
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

/// List regular files directly inside `dir`, sorted by path.
///
/// Subdirectories are skipped, not descended into.
pub fn list_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if path.is_file() {
            files.push(path);
        }
    }

    files.sort();
    debug!("Found {} files in {}", files.len(), dir.display());
    Ok(files)
}

/// Like [`list_files`], keeping only PDFs.
pub fn list_pdf_files(dir: &Path) -> Result<Vec<PathBuf>> {
    Ok(list_files(dir)?
        .into_iter()
        .filter(|path| FileType::from_path(path) == FileType::Pdf)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use tempfile::TempDir;

    #[test]
    fn test_empty_directory() {
        let temp_dir = TempDir::new().unwrap();
        assert!(list_files(temp_dir.path()).unwrap().is_empty());
    }

    #[test]
    fn test_skips_subdirectories() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("b.pdf"), b"x").unwrap();
        fs::write(temp_dir.path().join("a.txt"), b"x").unwrap();
        fs::create_dir(temp_dir.path().join("nested")).unwrap();
        fs::write(temp_dir.path().join("nested").join("c.pdf"), b"x").unwrap();

        let files = list_files(temp_dir.path()).unwrap();
        assert_eq!(
            files,
            vec![temp_dir.path().join("a.txt"), temp_dir.path().join("b.pdf")]
        );

        let pdfs = list_pdf_files(temp_dir.path()).unwrap();
        assert_eq!(pdfs, vec![temp_dir.path().join("b.pdf")]);
    }

    #[test]
    fn test_missing_directory() {
        let temp_dir = TempDir::new().unwrap();
        let err = list_files(&temp_dir.path().join("absent")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Filesystem);
    }
}
