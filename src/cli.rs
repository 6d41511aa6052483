//! CLI interface for the CV profiler

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "cv-profiler")]
#[command(about = "Keyword profiling of PDF resumes against a skill taxonomy")]
#[command(long_about = "Extract text from PDF CVs and count mentions of statistics, machine learning, deep learning, R, Python, data engineering and data analysis keywords")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build keyword profiles for one CV or a directory of CVs
    Profile {
        /// Directory of PDF files (not searched recursively)
        #[arg(short, long, conflicts_with = "file", required_unless_present = "file")]
        dir: Option<PathBuf>,

        /// Single PDF file
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Keyword catalog CSV (falls back to the configured default)
        #[arg(short, long)]
        keywords: Option<PathBuf>,

        /// Output format: console, json, csv, markdown
        #[arg(short, long)]
        output: Option<String>,

        /// Save output to file
        #[arg(short, long)]
        save: Option<PathBuf>,

        /// Abort on the first file that fails or has no keywords
        #[arg(long)]
        fail_fast: bool,
    },

    /// Summarize a keyword catalog
    Catalog {
        /// Keyword catalog CSV
        #[arg(short, long)]
        keywords: Option<PathBuf>,
    },

    /// Show or reset configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Print the configuration file location
    Path,

    /// Reset configuration to defaults
    Reset,
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<crate::config::OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(crate::config::OutputFormat::Console),
        "json" => Ok(crate::config::OutputFormat::Json),
        "csv" => Ok(crate::config::OutputFormat::Csv),
        "markdown" | "md" => Ok(crate::config::OutputFormat::Markdown),
        _ => Err(format!("Invalid output format: {}. Supported: console, json, csv, markdown", format)),
    }
}

/// Validate file extension
pub fn validate_file_extension(path: &Path, allowed_extensions: &[&str]) -> Result<(), String> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => {
            if allowed_extensions.contains(&ext.to_lowercase().as_str()) {
                Ok(())
            } else {
                Err(format!(
                    "Unsupported file extension: .{}. Allowed: {}",
                    ext,
                    allowed_extensions.join(", ")
                ))
            }
        }
        None => Err("File has no extension".to_string()),
    }
}
