//! Report structure collecting the profiles of one run

use crate::catalog::Category;
use crate::pipeline::FileOutcome;
use crate::processing::profile::{CandidateProfile, ProfileRow};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileReport {
    pub metadata: ReportMetadata,
    pub profiles: Vec<CandidateProfile>,
    pub skipped: Vec<SkippedFile>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    pub generated_at: chrono::DateTime<chrono::Utc>,
    pub catalog_path: Option<PathBuf>,
    pub catalog_phrases: usize,
    pub files_processed: usize,
    pub version: String,
}

/// A file that produced no profile, and why.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkippedFile {
    pub path: PathBuf,
    pub reason: String,
    pub no_keywords: bool,
}

impl ProfileReport {
    pub fn new(catalog_path: Option<PathBuf>, catalog_phrases: usize) -> Self {
        Self {
            metadata: ReportMetadata {
                generated_at: chrono::Utc::now(),
                catalog_path,
                catalog_phrases,
                files_processed: 0,
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            profiles: Vec::new(),
            skipped: Vec::new(),
        }
    }

    pub fn push_outcome(&mut self, (path, outcome): FileOutcome) {
        self.metadata.files_processed += 1;
        match outcome {
            Ok(profile) => self.profiles.push(profile),
            Err(e) => self.skipped.push(SkippedFile {
                path,
                no_keywords: e.is_no_matches(),
                reason: e.to_string(),
            }),
        }
    }

    pub fn extend_outcomes<I: IntoIterator<Item = FileOutcome>>(&mut self, outcomes: I) {
        for outcome in outcomes {
            self.push_outcome(outcome);
        }
    }

    /// All rows of all profiles, in file order.
    pub fn rows(&self) -> impl Iterator<Item = &ProfileRow> {
        self.profiles.iter().flat_map(|p| p.rows.iter())
    }

    /// Mentions per category summed over every profile.
    pub fn domain_totals(&self) -> Vec<(Category, usize)> {
        Category::ALL
            .into_iter()
            .filter_map(|category| {
                let total: usize = self.rows().filter(|r| r.domain == category).map(|r| r.count).sum();
                (total > 0).then_some((category, total))
            })
            .collect()
    }
}
