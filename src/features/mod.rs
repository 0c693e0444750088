//! Linguistic feature extraction module
//!
//! Turns a raw transcript into the fixed vector of counts and ratios the
//! classifiers train on.

mod extractor;

pub use extractor::{FeatureExtractor, FeatureVector, LinguisticFeature};
