//! Configuration management for the CV profiler

use crate::error::{ProfilerError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Substrings stripped from every page of extracted text, in removal order.
pub const DEFAULT_NOISE_TOKENS: &[&str] = &["\n", "â€¢", "(", ")", "\"", "'s", ";", ",", ".", "!"];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub catalog: CatalogConfig,
    pub extraction: ExtractionConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Keyword CSV used when `--keywords` is not given
    pub default_path: Option<PathBuf>,
    pub lowercase_phrases: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionConfig {
    pub noise_tokens: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub color_output: bool,
    pub show_domain_totals: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    Console,
    Json,
    Csv,
    Markdown,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog: CatalogConfig {
                default_path: None,
                lowercase_phrases: true,
            },
            extraction: ExtractionConfig {
                noise_tokens: DEFAULT_NOISE_TOKENS.iter().map(|s| s.to_string()).collect(),
            },
            output: OutputConfig {
                format: OutputFormat::Console,
                color_output: true,
                show_domain_totals: true,
            },
        }
    }
}

impl Config {
    /// Load from the given path, or from the default location.
    ///
    /// A missing file yields the defaults; nothing is written.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = path.map(Path::to_path_buf).unwrap_or_else(Self::config_path);

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            Self::from_toml(&content)
        } else {
            if path.is_some() {
                return Err(ProfilerError::Configuration(format!(
                    "Config file not found: {}",
                    config_path.display()
                )));
            }
            Ok(Self::default())
        }
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| ProfilerError::Configuration(format!("Failed to parse config: {}", e)))
    }

    pub fn save(&self, path: Option<&Path>) -> Result<PathBuf> {
        let config_path = path.map(Path::to_path_buf).unwrap_or_else(Self::config_path);

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| ProfilerError::Configuration(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(&config_path, content)?;
        Ok(config_path)
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("cv-profiler")
            .join("config.toml")
    }
}
