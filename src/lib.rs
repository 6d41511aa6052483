//! CV profiler library: PDF resume text extraction and skill keyword tallies

pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod pipeline;
pub mod processing;

pub use catalog::{Category, KeywordCatalog};
pub use config::Config;
pub use error::{ErrorKind, ProfilerError, Result};
pub use pipeline::{candidate_profile, ProfilePipeline};
pub use processing::profile::{CandidateProfile, ProfileRow};
