//! Exact phrase matching of catalog keywords against document text

use crate::catalog::{Category, KeywordCatalog};
use crate::error::{ProfilerError, Result};
use crate::processing::tokenizer::{Tokenizer, WordBoundaryTokenizer};
use aho_corasick::{AhoCorasick, MatchKind};
use indexmap::IndexMap;
use log::debug;
use serde::{Deserialize, Serialize};

/// One occurrence of a catalog phrase in a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhraseMatch {
    pub category: Category,
    pub text: String,
    /// Token span `[start, end)` in the document
    pub start: usize,
    pub end: usize,
}

/// Multi-pattern matcher over token sequences.
///
/// Phrases and documents are tokenized the same way and joined with single
/// spaces; Aho-Corasick then runs over the joined stream and only hits that
/// begin and end on a token boundary are kept. Reported text is the
/// matching slice of the original document.
pub struct PhraseMatcher<T: Tokenizer = WordBoundaryTokenizer> {
    tokenizer: T,
    automaton: AhoCorasick,
    patterns: Vec<String>,
    categories: Vec<Vec<Category>>,
}

impl PhraseMatcher<WordBoundaryTokenizer> {
    pub fn from_catalog(catalog: &KeywordCatalog) -> Result<Self> {
        Self::new(WordBoundaryTokenizer, catalog)
    }
}

impl<T: Tokenizer> PhraseMatcher<T> {
    /// Build a matcher with catalog phrases lowercased, matching the
    /// lowercase text produced by extraction.
    pub fn new(tokenizer: T, catalog: &KeywordCatalog) -> Result<Self> {
        Self::with_case(tokenizer, catalog, true)
    }

    pub fn with_case(tokenizer: T, catalog: &KeywordCatalog, lowercase_phrases: bool) -> Result<Self> {
        let lowered;
        let catalog = if lowercase_phrases {
            lowered = catalog.lowercased();
            &lowered
        } else {
            catalog
        };

        // Normalized pattern -> categories that list it, first-seen order
        let mut table: IndexMap<String, Vec<Category>> = IndexMap::new();
        for (category, phrases) in catalog.iter() {
            for phrase in phrases {
                let normalized = tokenizer.tokenize(phrase).join(" ");
                if normalized.is_empty() {
                    continue;
                }
                let entry = table.entry(normalized).or_default();
                if !entry.contains(&category) {
                    entry.push(category);
                }
            }
        }

        let (patterns, categories): (Vec<String>, Vec<Vec<Category>>) = table.into_iter().unzip();

        let automaton = AhoCorasick::builder()
            .match_kind(MatchKind::Standard)
            .build(&patterns)
            .map_err(|e| ProfilerError::Matcher(format!("Failed to build phrase matcher: {}", e)))?;

        debug!("Built phrase matcher with {} distinct patterns", patterns.len());

        Ok(Self {
            tokenizer,
            automaton,
            patterns,
            categories,
        })
    }

    pub fn pattern_count(&self) -> usize {
        self.patterns.len()
    }

    /// Every occurrence of every phrase, ordered by token start then end.
    /// Overlapping phrases all match.
    pub fn find_matches(&self, text: &str) -> Vec<PhraseMatch> {
        let spans = self.tokenizer.tokenize_indices(text);
        let stream = spans.iter().map(|(_, token)| *token).collect::<Vec<_>>().join(" ");

        // Byte offset of each token in `stream`
        let mut offsets = Vec::with_capacity(spans.len());
        let mut pos = 0;
        for (_, token) in &spans {
            offsets.push(pos);
            pos += token.len() + 1;
        }

        let bytes = stream.as_bytes();
        let mut hits: Vec<(usize, usize, usize)> = Vec::new();
        for mat in self.automaton.find_overlapping_iter(&stream) {
            let (start, end) = (mat.start(), mat.end());
            let starts_on_token = start == 0 || bytes[start - 1] == b' ';
            let ends_on_token = end == bytes.len() || bytes[end] == b' ';
            if starts_on_token && ends_on_token {
                hits.push((start, end, mat.pattern().as_usize()));
            }
        }
        hits.sort_unstable();

        let mut matches = Vec::new();
        for (start, end, pattern) in hits {
            let first = offsets.partition_point(|&o| o < start);
            let last = offsets.partition_point(|&o| o < end);
            // Report the document's own text, not the space-joined tokens
            let doc_start = spans[first].0;
            let (last_offset, last_token) = spans[last - 1];
            let phrase = &text[doc_start..last_offset + last_token.len()];
            for category in &self.categories[pattern] {
                matches.push(PhraseMatch {
                    category: *category,
                    text: phrase.to_string(),
                    start: first,
                    end: last,
                });
            }
        }

        matches
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn python_catalog() -> KeywordCatalog {
        KeywordCatalog::from_lists([(Category::Python, vec!["python", "pandas"])])
    }

    #[test]
    fn test_repeated_phrase_yields_each_occurrence() {
        let matcher = PhraseMatcher::from_catalog(&python_catalog()).unwrap();
        let matches = matcher.find_matches("expert in python and pandas and more python work");

        let found: Vec<&str> = matches.iter().map(|m| m.text.as_str()).collect();
        assert_eq!(found, vec!["python", "pandas", "python"]);
        assert!(matches.iter().all(|m| m.category == Category::Python));
        assert_eq!((matches[0].start, matches[0].end), (2, 3));
        assert_eq!((matches[2].start, matches[2].end), (7, 8));
    }

    #[test]
    fn test_whole_tokens_only() {
        let catalog = KeywordCatalog::from_lists([(Category::Rstats, vec!["r"]), (Category::Python, vec!["py"])]);
        let matcher = PhraseMatcher::from_catalog(&catalog).unwrap();

        assert!(matcher.find_matches("rust programmer happy").is_empty());
        let matches = matcher.find_matches("r and shiny");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].category, Category::Rstats);
    }

    #[test]
    fn test_multi_token_and_overlapping_phrases() {
        let catalog = KeywordCatalog::from_lists([
            (Category::MachineLearning, vec!["machine learning"]),
            (Category::DeepLearning, vec!["deep learning", "learning"]),
        ]);
        let matcher = PhraseMatcher::from_catalog(&catalog).unwrap();
        let matches = matcher.find_matches("applied machine learning and deep learning");

        let found: Vec<(Category, &str)> = matches.iter().map(|m| (m.category, m.text.as_str())).collect();
        assert_eq!(
            found,
            vec![
                (Category::MachineLearning, "machine learning"),
                (Category::DeepLearning, "learning"),
                (Category::DeepLearning, "deep learning"),
                (Category::DeepLearning, "learning"),
            ]
        );
    }

    #[test]
    fn test_catalog_case_is_normalized() {
        let catalog = KeywordCatalog::from_lists([(Category::DeepLearning, vec!["PyTorch", "TensorFlow"])]);

        let matcher = PhraseMatcher::from_catalog(&catalog).unwrap();
        assert_eq!(matcher.find_matches("pytorch and tensorflow").len(), 2);

        let strict = PhraseMatcher::with_case(WordBoundaryTokenizer, &catalog, false).unwrap();
        assert!(strict.find_matches("pytorch and tensorflow").is_empty());
    }

    #[test]
    fn test_phrase_in_two_categories() {
        let catalog = KeywordCatalog::from_lists([
            (Category::DataEngineering, vec!["sql", "sql"]),
            (Category::DataAnalysis, vec!["sql"]),
        ]);
        let matcher = PhraseMatcher::from_catalog(&catalog).unwrap();
        assert_eq!(matcher.pattern_count(), 1);

        let matches = matcher.find_matches("advanced sql");
        let categories: Vec<Category> = matches.iter().map(|m| m.category).collect();
        assert_eq!(categories, vec![Category::DataEngineering, Category::DataAnalysis]);
    }

    #[test]
    fn test_punctuated_phrase() {
        let catalog = KeywordCatalog::from_lists([(Category::MachineLearning, vec!["scikit-learn"])]);
        let matcher = PhraseMatcher::from_catalog(&catalog).unwrap();

        let matches = matcher.find_matches("used scikit-learn daily");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].text, "scikit-learn");
    }

    #[test]
    fn test_matched_text_is_document_slice() {
        let catalog = KeywordCatalog::from_lists([(Category::DataAnalysis, vec!["scikit-learn", "a/b testing"])]);
        let matcher = PhraseMatcher::from_catalog(&catalog).unwrap();

        let text = "used scikit-learn and a/b testing";
        let matches = matcher.find_matches(text);
        let found: Vec<&str> = matches.iter().map(|m| m.text.as_str()).collect();
        assert_eq!(found, vec!["scikit-learn", "a/b testing"]);
        assert!(found.iter().all(|phrase| text.contains(phrase)));

        // Irregular spacing inside a phrase is kept as written
        let matches = matcher.find_matches("a/b  testing");
        assert_eq!(matches[0].text, "a/b  testing");
    }

    #[test]
    fn test_empty_catalog_matches_nothing() {
        let matcher = PhraseMatcher::from_catalog(&KeywordCatalog::new()).unwrap();
        assert_eq!(matcher.pattern_count(), 0);
        assert!(matcher.find_matches("python everywhere").is_empty());
    }
}
