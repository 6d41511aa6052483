//! Candidate profile tables built from phrase matches

use crate::catalog::Category;
use crate::error::{ProfilerError, Result};
use crate::processing::phrase_matcher::PhraseMatch;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileRow {
    pub company: String,
    pub domain: Category,
    pub buzzword: String,
    pub count: usize,
}

/// Keyword frequency table for one source file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateProfile {
    pub identifier: String,
    pub source: PathBuf,
    pub rows: Vec<ProfileRow>,
}

impl CandidateProfile {
    pub fn total_mentions(&self) -> usize {
        self.rows.iter().map(|r| r.count).sum()
    }

    /// Summed counts per category, in fixed category order. Categories
    /// without any mention are omitted.
    pub fn domain_totals(&self) -> Vec<(Category, usize)> {
        Category::ALL
            .into_iter()
            .filter_map(|category| {
                let total: usize = self
                    .rows
                    .iter()
                    .filter(|r| r.domain == category)
                    .map(|r| r.count)
                    .sum();
                (total > 0).then_some((category, total))
            })
            .collect()
    }
}

/// File stem, lowercased.
pub fn derive_identifier(path: &Path) -> Result<String> {
    let identifier = path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .map(|stem| stem.trim().to_lowercase())
        .unwrap_or_default();

    if identifier.is_empty() {
        return Err(ProfilerError::InvalidIdentifier(path.display().to_string()));
    }
    Ok(identifier)
}

/// Tally matches by (category, phrase) in first-occurrence order.
pub fn tally_matches(matches: &[PhraseMatch]) -> Vec<(Category, String, usize)> {
    let mut counts: IndexMap<(Category, &str), usize> = IndexMap::new();
    for m in matches {
        *counts.entry((m.category, m.text.as_str())).or_insert(0) += 1;
    }
    counts
        .into_iter()
        .map(|((category, text), count)| (category, text.to_string(), count))
        .collect()
}

pub fn build_profile(matches: &[PhraseMatch], path: &Path) -> Result<CandidateProfile> {
    if matches.is_empty() {
        return Err(ProfilerError::NoMatches(path.display().to_string()));
    }

    let identifier = derive_identifier(path)?;
    let rows = tally_matches(matches)
        .into_iter()
        .map(|(domain, buzzword, count)| ProfileRow {
            company: identifier.clone(),
            domain,
            buzzword,
            count,
        })
        .collect();

    Ok(CandidateProfile {
        identifier,
        source: path.to_path_buf(),
        rows,
    })
}
