//! File type detection

use std::path::Path;

#[derive(Debug, Clone, PartialEq)]
pub enum FileType {
    Pdf,
    Csv,
    Unknown,
}

impl FileType {
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_lowercase().as_str() {
            "pdf" => FileType::Pdf,
            "csv" => FileType::Csv,
            _ => FileType::Unknown,
        }
    }

    pub fn from_path(path: &Path) -> Self {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(Self::from_extension)
            .unwrap_or(FileType::Unknown)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detection_is_case_insensitive() {
        assert_eq!(FileType::from_path(Path::new("cvs/Acme.PDF")), FileType::Pdf);
        assert_eq!(FileType::from_path(Path::new("keywords.csv")), FileType::Csv);
        assert_eq!(FileType::from_path(Path::new("notes")), FileType::Unknown);
        assert_eq!(FileType::from_extension("docx"), FileType::Unknown);
    }
}
