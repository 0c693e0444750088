//! Linguistic feature extraction
//!
//! Computes the per-transcript statistics used to separate healthy from
//! dementia speech: fluency (fillers, sentence length), lexical diversity
//! (type-token ratio), and part-of-speech composition.

use crate::nlp::{syllable, PosTag, PosTagger, SentenceSplitter, Tokenizer};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Features computed for every transcript, in dataset column order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinguisticFeature {
    WordCount,
    SentenceCount,
    AvgSentenceLength,
    TypeTokenRatio,
    NounRate,
    PronounRate,
    AdjectiveRate,
    VerbRate,
    FillerCount,
    SyllableCount,
}

impl LinguisticFeature {
    /// All features in column order
    pub const ALL: [LinguisticFeature; 10] = [
        LinguisticFeature::WordCount,
        LinguisticFeature::SentenceCount,
        LinguisticFeature::AvgSentenceLength,
        LinguisticFeature::TypeTokenRatio,
        LinguisticFeature::NounRate,
        LinguisticFeature::PronounRate,
        LinguisticFeature::AdjectiveRate,
        LinguisticFeature::VerbRate,
        LinguisticFeature::FillerCount,
        LinguisticFeature::SyllableCount,
    ];

    /// Column name for this feature
    pub fn name(&self) -> &'static str {
        match self {
            LinguisticFeature::WordCount => "word_count",
            LinguisticFeature::SentenceCount => "sentence_count",
            LinguisticFeature::AvgSentenceLength => "avg_sentence_length",
            LinguisticFeature::TypeTokenRatio => "type_token_ratio",
            LinguisticFeature::NounRate => "noun_rate",
            LinguisticFeature::PronounRate => "pronoun_rate",
            LinguisticFeature::AdjectiveRate => "adjective_rate",
            LinguisticFeature::VerbRate => "verb_rate",
            LinguisticFeature::FillerCount => "filler_count",
            LinguisticFeature::SyllableCount => "syllable_count",
        }
    }

    /// Column names in column order
    pub fn names() -> Vec<String> {
        Self::ALL.iter().map(|f| f.name().to_string()).collect()
    }
}

/// Hesitation markers counted as single tokens
const FILLER_WORDS: &[&str] = &["uh", "um", "like"];

/// Hesitation markers counted as adjacent token pairs
const FILLER_BIGRAMS: &[(&str, &str)] = &[("you", "know")];

/// Feature values for one transcript, in [`LinguisticFeature::ALL`] order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    values: Vec<f64>,
}

impl FeatureVector {
    /// Value of a single feature
    pub fn get(&self, feature: LinguisticFeature) -> f64 {
        let idx = LinguisticFeature::ALL
            .iter()
            .position(|f| *f == feature)
            .unwrap();
        self.values[idx]
    }

    /// All values in column order
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Consume into the raw column vector
    pub fn into_values(self) -> Vec<f64> {
        self.values
    }
}

/// Extracts the linguistic feature vector from transcript text
#[derive(Debug, Clone)]
pub struct FeatureExtractor {
    tokenizer: Tokenizer,
    splitter: SentenceSplitter,
    tagger: PosTagger,
}

impl FeatureExtractor {
    pub fn new() -> Self {
        Self {
            tokenizer: Tokenizer::new(),
            splitter: SentenceSplitter::new(),
            tagger: PosTagger::new(),
        }
    }

    /// Compute all features for one transcript
    pub fn extract(&self, text: &str) -> FeatureVector {
        let tokens = self.tokenizer.tokenize(text);
        let words: Vec<&str> = tokens.iter().map(|t| t.normalized.as_str()).collect();

        let word_count = words.len();
        let sentence_count = self.splitter.count(text);

        let avg_sentence_length = if sentence_count > 0 {
            word_count as f64 / sentence_count as f64
        } else {
            0.0
        };

        let unique_words: HashSet<&str> = words.iter().copied().collect();
        let type_token_ratio = if word_count > 0 {
            unique_words.len() as f64 / word_count as f64
        } else {
            0.0
        };

        let mut noun_count = 0usize;
        let mut pronoun_count = 0usize;
        let mut adjective_count = 0usize;
        let mut verb_count = 0usize;
        for word in &words {
            match self.tagger.tag(word) {
                PosTag::Noun => noun_count += 1,
                PosTag::Pronoun => pronoun_count += 1,
                PosTag::Adjective => adjective_count += 1,
                PosTag::Verb => verb_count += 1,
                _ => {}
            }
        }

        let rate = |count: usize| {
            if word_count > 0 {
                count as f64 / word_count as f64
            } else {
                0.0
            }
        };

        let filler_count = count_fillers(&words);
        let syllable_count = syllable::count_all(&words);

        FeatureVector {
            values: vec![
                word_count as f64,
                sentence_count as f64,
                avg_sentence_length,
                type_token_ratio,
                rate(noun_count),
                rate(pronoun_count),
                rate(adjective_count),
                rate(verb_count),
                filler_count as f64,
                syllable_count as f64,
            ],
        }
    }
}

impl Default for FeatureExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Count filler occurrences over normalized tokens
///
/// Unigrams match single tokens; `you know` matches adjacent token pairs.
fn count_fillers(words: &[&str]) -> usize {
    let unigrams = words
        .iter()
        .filter(|w| FILLER_WORDS.contains(w))
        .count();

    let bigrams = words
        .windows(2)
        .filter(|pair| FILLER_BIGRAMS.contains(&(pair[0], pair[1])))
        .count();

    unigrams + bigrams
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feature_names_order() {
        let names = LinguisticFeature::names();
        assert_eq!(names.len(), 10);
        assert_eq!(names[0], "word_count");
        assert_eq!(names[3], "type_token_ratio");
        assert_eq!(names[9], "syllable_count");
    }

    #[test]
    fn test_counts_and_ratios() {
        let extractor = FeatureExtractor::new();
        let fv = extractor.extract("The boy is stealing cookies. The water is running.");

        assert_eq!(fv.get(LinguisticFeature::WordCount), 9.0);
        assert_eq!(fv.get(LinguisticFeature::SentenceCount), 2.0);
        assert!((fv.get(LinguisticFeature::AvgSentenceLength) - 4.5).abs() < 1e-10);

        // "the" and "is" repeat: 7 unique over 9 tokens
        assert!((fv.get(LinguisticFeature::TypeTokenRatio) - 7.0 / 9.0).abs() < 1e-10);
    }

    #[test]
    fn test_pos_rates() {
        let extractor = FeatureExtractor::new();
        let fv = extractor.extract("She went home.");

        // she = pronoun, went = verb, home = noun (silent-e default)
        assert!((fv.get(LinguisticFeature::PronounRate) - 1.0 / 3.0).abs() < 1e-10);
        assert!((fv.get(LinguisticFeature::VerbRate) - 1.0 / 3.0).abs() < 1e-10);
        assert!((fv.get(LinguisticFeature::NounRate) - 1.0 / 3.0).abs() < 1e-10);
    }

    #[test]
    fn test_filler_counting() {
        let extractor = FeatureExtractor::new();
        let fv = extractor.extract("um the boy uh you know took it like that");

        // um, uh, like, plus the "you know" bigram
        assert_eq!(fv.get(LinguisticFeature::FillerCount), 4.0);
    }

    #[test]
    fn test_syllable_total() {
        let extractor = FeatureExtractor::new();
        let fv = extractor.extract("the little banana");

        assert_eq!(fv.get(LinguisticFeature::SyllableCount), 6.0);
    }

    #[test]
    fn test_empty_transcript() {
        let extractor = FeatureExtractor::new();
        let fv = extractor.extract("");

        for &value in fv.values() {
            assert_eq!(value, 0.0);
        }
    }
}
