//! Error handling for the CV profiler

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProfilerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PDF extraction error: {0}")]
    PdfExtraction(String),

    #[error("Keyword catalog error: {0}")]
    Catalog(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Phrase matcher error: {0}")]
    Matcher(String),

    #[error("No catalog keywords detected in {0}")]
    NoMatches(String),

    #[error("Cannot derive candidate identifier from {0}")]
    InvalidIdentifier(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Output formatting error: {0}")]
    OutputFormatting(String),
}

/// Coarse classification of a [`ProfilerError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Directory or file missing or unreadable
    Filesystem,
    /// PDF cannot be parsed or catalog is malformed
    Format,
    /// Nothing detectable in a document, or no identifier
    Data,
    /// Bad configuration, arguments or output
    Usage,
}

impl ProfilerError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ProfilerError::Io(_) => ErrorKind::Filesystem,
            ProfilerError::Csv(e) if e.is_io_error() => ErrorKind::Filesystem,
            ProfilerError::PdfExtraction(_)
            | ProfilerError::Catalog(_)
            | ProfilerError::Csv(_)
            | ProfilerError::Matcher(_) => ErrorKind::Format,
            ProfilerError::NoMatches(_) | ProfilerError::InvalidIdentifier(_) => ErrorKind::Data,
            ProfilerError::Configuration(_)
            | ProfilerError::InvalidInput(_)
            | ProfilerError::Serialization(_)
            | ProfilerError::OutputFormatting(_) => ErrorKind::Usage,
        }
    }

    /// True when the document simply had nothing to report.
    pub fn is_no_matches(&self) -> bool {
        matches!(self, ProfilerError::NoMatches(_))
    }
}

pub type Result<T> = std::result::Result<T, ProfilerError>;
