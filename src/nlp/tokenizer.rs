//! Word tokenizer for speech transcripts
//!
//! Splits raw text into word tokens, keeping each token's surface form and
//! a normalized (lowercased, edge-punctuation-stripped) form. One-character
//! tokens are kept: transcripts of spontaneous speech are full of `I` and `a`.

use unicode_segmentation::UnicodeSegmentation;

/// A single word token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Surface form as it appears in the text
    pub surface: String,
    /// Lowercased form used for lookups and uniqueness
    pub normalized: String,
}

/// Tokenizer for transcript text
#[derive(Debug, Clone)]
pub struct Tokenizer {
    preserve_case: bool,
}

impl Tokenizer {
    pub fn new() -> Self {
        Self {
            preserve_case: false,
        }
    }

    /// Keep the surface casing in the normalized form
    pub fn preserve_case(mut self, preserve: bool) -> Self {
        self.preserve_case = preserve;
        self
    }

    /// Tokenize text into word tokens
    ///
    /// Whitespace-separated chunks are trimmed of leading/trailing
    /// punctuation; internal apostrophes and hyphens survive (`don't`,
    /// `well-known`). Chunks that are pure punctuation produce no token.
    pub fn tokenize(&self, text: &str) -> Vec<Token> {
        text.split_whitespace()
            .filter_map(|chunk| self.make_token(chunk))
            .collect()
    }

    /// Tokenize and return only the normalized forms
    pub fn tokenize_to_strings(&self, text: &str) -> Vec<String> {
        self.tokenize(text)
            .into_iter()
            .map(|t| t.normalized)
            .collect()
    }

    fn make_token(&self, chunk: &str) -> Option<Token> {
        let cleaned = trim_edge_punctuation(chunk);
        if cleaned.is_empty() {
            return None;
        }

        let surface = cleaned.to_string();
        let normalized = if self.preserve_case {
            surface.clone()
        } else {
            surface.to_lowercase()
        };

        Some(Token {
            surface,
            normalized,
        })
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Strip non-alphanumeric graphemes from both ends of a chunk
fn trim_edge_punctuation(chunk: &str) -> &str {
    let graphemes: Vec<(usize, &str)> = chunk.grapheme_indices(true).collect();

    let is_word_grapheme = |g: &str| g.chars().any(|c| c.is_alphanumeric());

    let start = graphemes.iter().position(|(_, g)| is_word_grapheme(g));
    let Some(start) = start else {
        return "";
    };
    let end = graphemes
        .iter()
        .rposition(|(_, g)| is_word_grapheme(g))
        .unwrap();

    let begin = graphemes[start].0;
    let finish = graphemes[end].0 + graphemes[end].1.len();
    &chunk[begin..finish]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_tokenization() {
        let tokenizer = Tokenizer::new();
        let tokens = tokenizer.tokenize("The boy is stealing cookies.");

        assert_eq!(tokens.len(), 5);
        assert_eq!(tokens[0].normalized, "the");
        assert_eq!(tokens[4].normalized, "cookies");
    }

    #[test]
    fn test_edge_punctuation_stripped() {
        let tokenizer = Tokenizer::new();
        let tokens = tokenizer.tokenize("well, (yes) \"okay.\"");

        let words: Vec<&str> = tokens.iter().map(|t| t.normalized.as_str()).collect();
        assert_eq!(words, vec!["well", "yes", "okay"]);
    }

    #[test]
    fn test_internal_apostrophe_kept() {
        let tokenizer = Tokenizer::new();
        let tokens = tokenizer.tokenize("she doesn't know");

        assert_eq!(tokens[1].normalized, "doesn't");
    }

    #[test]
    fn test_one_char_tokens_kept() {
        let tokenizer = Tokenizer::new();
        let tokens = tokenizer.tokenize("I saw a dog");

        assert_eq!(tokens.len(), 4);
        assert_eq!(tokens[0].normalized, "i");
    }

    #[test]
    fn test_pure_punctuation_dropped() {
        let tokenizer = Tokenizer::new();
        let tokens = tokenizer.tokenize("um ... well --");

        let words: Vec<&str> = tokens.iter().map(|t| t.normalized.as_str()).collect();
        assert_eq!(words, vec!["um", "well"]);
    }

    #[test]
    fn test_empty_input() {
        let tokenizer = Tokenizer::new();
        assert!(tokenizer.tokenize("").is_empty());
        assert!(tokenizer.tokenize("   \n\t").is_empty());
    }
}
