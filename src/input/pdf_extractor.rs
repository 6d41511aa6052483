//! Text extraction and normalization for PDF resumes

use crate::config::DEFAULT_NOISE_TOKENS;
use crate::error::{ProfilerError, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Normalized text of one source file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractedDocument {
    pub source: PathBuf,
    pub text: String,
    pub page_count: usize,
}

pub trait TextExtractor {
    fn extract(&self, path: &Path) -> Result<ExtractedDocument>;
}

/// Extracts page text with `pdf-extract` and strips noise substrings.
#[derive(Debug, Clone)]
pub struct PdfExtractor {
    noise_tokens: Vec<String>,
}

impl Default for PdfExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfExtractor {
    pub fn new() -> Self {
        Self::with_noise_tokens(DEFAULT_NOISE_TOKENS.iter().map(|s| s.to_string()).collect())
    }

    pub fn with_noise_tokens(noise_tokens: Vec<String>) -> Self {
        let noise_tokens = noise_tokens.into_iter().filter(|t| !t.is_empty()).collect();
        Self { noise_tokens }
    }

    pub fn noise_tokens(&self) -> &[String] {
        &self.noise_tokens
    }

    /// Lowercase, then remove every noise substring literally.
    pub fn normalize_page(&self, page: &str) -> String {
        let mut words = page.to_lowercase();
        for token in &self.noise_tokens {
            words = words.replace(token.to_lowercase().as_str(), "");
        }
        words
    }

    /// Normalize each page and concatenate in page order.
    pub fn normalize_pages<S: AsRef<str>>(&self, pages: &[S]) -> String {
        pages
            .iter()
            .map(|page| self.normalize_page(page.as_ref()))
            .collect()
    }

    pub fn extract_from_mem(&self, bytes: &[u8], source: &Path) -> Result<ExtractedDocument> {
        let pages = pdf_extract::extract_text_from_mem_by_pages(bytes).map_err(|e| {
            ProfilerError::PdfExtraction(format!(
                "Failed to extract text from PDF '{}': {}",
                source.display(),
                e
            ))
        })?;

        let text = self.normalize_pages(&pages);
        debug!(
            "Extracted {} pages ({} chars) from {}",
            pages.len(),
            text.len(),
            source.display()
        );

        Ok(ExtractedDocument {
            source: source.to_path_buf(),
            text,
            page_count: pages.len(),
        })
    }
}

impl TextExtractor for PdfExtractor {
    fn extract(&self, path: &Path) -> Result<ExtractedDocument> {
        info!("Extracting text from PDF: {}", path.display());
        let bytes = fs::read(path)?;
        self.extract_from_mem(&bytes, path)
    }
}
