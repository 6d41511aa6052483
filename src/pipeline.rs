//! End-to-end profiling: extraction, matching and tabulation

use crate::catalog::KeywordCatalog;
use crate::config::Config;
use crate::error::Result;
use crate::input::file_lister::list_pdf_files;
use crate::input::pdf_extractor::{PdfExtractor, TextExtractor};
use crate::processing::phrase_matcher::{PhraseMatch, PhraseMatcher};
use crate::processing::profile::{build_profile, CandidateProfile};
use crate::processing::tokenizer::{Tokenizer, WordBoundaryTokenizer};
use log::{debug, info, warn};
use std::path::{Path, PathBuf};

/// Outcome of profiling one file in a batch.
pub type FileOutcome = (PathBuf, Result<CandidateProfile>);

/// Holds the extractor and a matcher built once from the catalog, so a
/// batch pays the matcher setup cost a single time.
pub struct ProfilePipeline<E: TextExtractor = PdfExtractor, T: Tokenizer = WordBoundaryTokenizer> {
    extractor: E,
    matcher: PhraseMatcher<T>,
}

impl ProfilePipeline<PdfExtractor, WordBoundaryTokenizer> {
    pub fn from_config(config: &Config, catalog: &KeywordCatalog) -> Result<Self> {
        let extractor = PdfExtractor::with_noise_tokens(config.extraction.noise_tokens.clone());
        let matcher = PhraseMatcher::with_case(
            WordBoundaryTokenizer,
            catalog,
            config.catalog.lowercase_phrases,
        )?;
        Ok(Self::new(extractor, matcher))
    }
}

impl<E: TextExtractor, T: Tokenizer> ProfilePipeline<E, T> {
    pub fn new(extractor: E, matcher: PhraseMatcher<T>) -> Self {
        Self { extractor, matcher }
    }

    pub fn find_matches(&self, path: &Path) -> Result<Vec<PhraseMatch>> {
        let document = self.extractor.extract(path)?;
        let matches = self.matcher.find_matches(&document.text);
        debug!("{} keyword hits in {}", matches.len(), path.display());
        Ok(matches)
    }

    pub fn profile_file(&self, path: &Path) -> Result<CandidateProfile> {
        let matches = self.find_matches(path)?;
        build_profile(&matches, path)
    }

    /// Profile every PDF directly inside `dir`. Per-file failures are
    /// returned alongside successes; skipping or aborting is up to the caller.
    pub fn profile_directory(&self, dir: &Path) -> Result<Vec<FileOutcome>> {
        let files = list_pdf_files(dir)?;
        info!("Profiling {} PDF files in {}", files.len(), dir.display());
        Ok(self.profile_files(&files))
    }

    pub fn profile_files(&self, files: &[PathBuf]) -> Vec<FileOutcome> {
        self.profile_files_with(files, |_, _| true)
    }

    /// Like [`profile_files`](Self::profile_files), calling `on_outcome`
    /// after each file. Returning `false` stops the batch; the outcome that
    /// triggered the stop is the last element of the result.
    pub fn profile_files_with<F>(&self, files: &[PathBuf], mut on_outcome: F) -> Vec<FileOutcome>
    where
        F: FnMut(&Path, &Result<CandidateProfile>) -> bool,
    {
        let mut outcomes = Vec::with_capacity(files.len());
        for path in files {
            let outcome = self.profile_file(path);
            if let Err(e) = &outcome {
                warn!("{}: {}", path.display(), e);
            }
            let keep_going = on_outcome(path, &outcome);
            outcomes.push((path.clone(), outcome));
            if !keep_going {
                debug!("Batch stopped at {}", path.display());
                break;
            }
        }
        outcomes
    }
}

/// One-shot profile of a single file against a catalog CSV.
pub fn candidate_profile(file: &Path, catalog_path: &Path) -> Result<CandidateProfile> {
    let catalog = KeywordCatalog::from_csv_path(catalog_path)?;
    let pipeline = ProfilePipeline::from_config(&Config::default(), &catalog)?;
    pipeline.profile_file(file)
}
