//! Input processing module
//! Handles directory listing, file detection and PDF text extraction

pub mod file_detector;
pub mod file_lister;
pub mod pdf_extractor;

pub use file_lister::{list_files, list_pdf_files};
pub use pdf_extractor::{ExtractedDocument, PdfExtractor, TextExtractor};
