//! Tokenization shared by documents and catalog phrases

use unicode_segmentation::UnicodeSegmentation;

/// Splits text into the token sequence phrase matching runs on.
///
/// Documents and phrases must go through the same implementation,
/// otherwise multi-token phrases silently stop matching.
pub trait Tokenizer {
    /// Tokens paired with their byte offset in `text`.
    fn tokenize_indices<'a>(&self, text: &'a str) -> Vec<(usize, &'a str)>;

    fn tokenize<'a>(&self, text: &'a str) -> Vec<&'a str> {
        self.tokenize_indices(text).into_iter().map(|(_, token)| token).collect()
    }
}

/// Unicode word-boundary tokenizer (UAX #29).
///
/// Whitespace is dropped; punctuation becomes its own token, so
/// `"scikit-learn"` yields `["scikit", "-", "learn"]`.
#[derive(Debug, Clone, Copy, Default)]
pub struct WordBoundaryTokenizer;

impl Tokenizer for WordBoundaryTokenizer {
    fn tokenize_indices<'a>(&self, text: &'a str) -> Vec<(usize, &'a str)> {
        text.split_word_bound_indices()
            .filter(|(_, segment)| !segment.trim().is_empty())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whitespace_dropped() {
        let tokens = WordBoundaryTokenizer.tokenize("  machine   learning\tand\u{a0}stats ");
        assert_eq!(tokens, vec!["machine", "learning", "and", "stats"]);
    }

    #[test]
    fn test_punctuation_split() {
        let tokens = WordBoundaryTokenizer.tokenize("scikit-learn/pandas");
        assert_eq!(tokens, vec!["scikit", "-", "learn", "/", "pandas"]);
    }

    #[test]
    fn test_indices_point_into_text() {
        let text = "used  a/b testing";
        let spans = WordBoundaryTokenizer.tokenize_indices(text);
        assert_eq!(spans[0], (0, "used"));
        assert_eq!(spans[1], (6, "a"));
        for (offset, token) in spans {
            assert_eq!(&text[offset..offset + token.len()], token);
        }
    }

    #[test]
    fn test_empty_input() {
        assert!(WordBoundaryTokenizer.tokenize("").is_empty());
        assert!(WordBoundaryTokenizer.tokenize("   ").is_empty());
    }
}
