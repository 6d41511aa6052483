//! Keyword catalog: the skill taxonomy loaded from a CSV file

use crate::error::{ProfilerError, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// One of the fixed skill domains. Each maps to a CSV column of the same name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Statistics,
    MachineLearning,
    DeepLearning,
    Rstats,
    Python,
    DataEngineering,
    DataAnalysis,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::Statistics,
        Category::MachineLearning,
        Category::DeepLearning,
        Category::Rstats,
        Category::Python,
        Category::DataEngineering,
        Category::DataAnalysis,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Statistics => "statistics",
            Category::MachineLearning => "machine_learning",
            Category::DeepLearning => "deep_learning",
            Category::Rstats => "rstats",
            Category::Python => "python",
            Category::DataEngineering => "data_engineering",
            Category::DataAnalysis => "data_analysis",
        }
    }

    /// Exact column-name lookup.
    pub fn from_column(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == name)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Category to phrase-list mapping. Immutable once loaded.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KeywordCatalog {
    phrases: BTreeMap<Category, Vec<String>>,
}

impl KeywordCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from in-memory lists. Blank phrases are dropped.
    pub fn from_lists<I, P, S>(lists: I) -> Self
    where
        I: IntoIterator<Item = (Category, P)>,
        P: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut catalog = Self::new();
        for (category, phrases) in lists {
            let entry = catalog.phrases.entry(category).or_default();
            for phrase in phrases {
                let phrase: String = phrase.into();
                let phrase = phrase.trim();
                if !phrase.is_empty() {
                    entry.push(phrase.to_string());
                }
            }
        }
        catalog
    }

    pub fn from_csv_path(path: &Path) -> Result<Self> {
        info!("Loading keyword catalog: {}", path.display());
        let file = File::open(path)?;
        Self::from_reader(file).map_err(|e| match e {
            ProfilerError::Catalog(msg) => {
                ProfilerError::Catalog(format!("{}: {}", path.display(), msg))
            }
            other => other,
        })
    }

    /// Read a CSV with a header row. Only the category columns are used;
    /// a missing column yields an empty phrase list.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let headers = csv_reader.headers()?.clone();
        if headers.is_empty() || headers.iter().all(|h| h.trim().is_empty()) {
            return Err(ProfilerError::Catalog("missing header row".to_string()));
        }

        let columns: Vec<(usize, Category)> = headers
            .iter()
            .enumerate()
            .filter_map(|(idx, name)| Category::from_column(name.trim()).map(|c| (idx, c)))
            .collect();

        if columns.is_empty() {
            debug!("Catalog header has no category columns: {:?}", headers);
        }

        let mut phrases: BTreeMap<Category, Vec<String>> =
            Category::ALL.iter().map(|c| (*c, Vec::new())).collect();

        for record in csv_reader.records() {
            let record = record?;
            for (idx, category) in &columns {
                if let Some(cell) = record.get(*idx) {
                    let cell = cell.trim();
                    if !cell.is_empty() {
                        phrases.entry(*category).or_default().push(cell.to_string());
                    }
                }
            }
        }

        let catalog = Self { phrases };
        info!(
            "Loaded {} phrases across {} categories",
            catalog.len(),
            catalog.iter().filter(|(_, p)| !p.is_empty()).count()
        );
        Ok(catalog)
    }

    pub fn phrases(&self, category: Category) -> &[String] {
        self.phrases.get(&category).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Categories in fixed order, each with its phrases.
    pub fn iter(&self) -> impl Iterator<Item = (Category, &[String])> + '_ {
        Category::ALL.into_iter().map(move |c| (c, self.phrases(c)))
    }

    /// Total number of phrases across all categories.
    pub fn len(&self) -> usize {
        self.phrases.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn lowercased(&self) -> Self {
        let phrases = self
            .phrases
            .iter()
            .map(|(c, list)| (*c, list.iter().map(|p| p.to_lowercase()).collect()))
            .collect();
        Self { phrases }
    }
}
