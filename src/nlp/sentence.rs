//! Sentence splitter
//!
//! Splits transcript text on sentence-terminator runs (`.`, `!`, `?`)
//! followed by whitespace or end of text. A short abbreviation list stops
//! the common false breaks (`Mr. Smith`, `e.g. this`).

use regex::Regex;
use std::sync::LazyLock;

/// A terminator run plus the whitespace (or EOF) after it
static BOUNDARY_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]+(\s+|$)").unwrap());

/// Abbreviations whose trailing period does not end a sentence
const ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "sr", "jr", "st", "vs", "etc", "e.g", "i.e",
];

/// Sentence splitter for transcript text
#[derive(Debug, Clone, Default)]
pub struct SentenceSplitter;

impl SentenceSplitter {
    pub fn new() -> Self {
        Self
    }

    /// Split text into sentences
    ///
    /// Returned slices are trimmed and non-empty; text with no terminator
    /// at all yields a single sentence, empty text yields none.
    pub fn split<'a>(&self, text: &'a str) -> Vec<&'a str> {
        let mut sentences = Vec::new();
        let mut start = 0;

        for m in BOUNDARY_REGEX.find_iter(text) {
            let candidate = text[start..m.start()].trim();
            if candidate.is_empty() {
                start = m.end();
                continue;
            }
            if ends_with_abbreviation(candidate) {
                continue;
            }
            sentences.push(candidate);
            start = m.end();
        }

        let tail = text[start..].trim();
        if !tail.is_empty() {
            sentences.push(tail);
        }

        sentences
    }

    /// Number of sentences in the text
    pub fn count(&self, text: &str) -> usize {
        self.split(text).len()
    }
}

/// Does the candidate sentence end in a known abbreviation?
fn ends_with_abbreviation(candidate: &str) -> bool {
    let last_word = candidate
        .rsplit(|c: char| c.is_whitespace())
        .next()
        .unwrap_or("")
        .trim_end_matches('.')
        .to_lowercase();

    ABBREVIATIONS.contains(&last_word.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_split() {
        let splitter = SentenceSplitter::new();
        let sentences = splitter.split("The water is running. The boy takes a cookie.");

        assert_eq!(sentences.len(), 2);
        assert_eq!(sentences[0], "The water is running");
    }

    #[test]
    fn test_terminator_runs() {
        let splitter = SentenceSplitter::new();
        let sentences = splitter.split("What is that?! I don't know... Maybe a jar.");

        assert_eq!(sentences.len(), 3);
    }

    #[test]
    fn test_abbreviation_no_split() {
        let splitter = SentenceSplitter::new();
        let sentences = splitter.split("I saw Dr. Smith yesterday. He was fine.");

        assert_eq!(sentences.len(), 2);
        assert!(sentences[0].contains("Smith"));
    }

    #[test]
    fn test_no_terminator() {
        let splitter = SentenceSplitter::new();
        assert_eq!(splitter.count("the mother is drying dishes"), 1);
    }

    #[test]
    fn test_empty_text() {
        let splitter = SentenceSplitter::new();
        assert_eq!(splitter.count(""), 0);
        assert_eq!(splitter.count("   "), 0);
    }
}
