//! # Speech ML - Linguistic Markers of Cognitive Decline
//!
//! This library extracts linguistic features from transcripts of spontaneous
//! speech (healthy controls vs. dementia subjects), trains classifiers on
//! them, and reports which features carry the signal.
//!
//! ## Modules
//!
//! - `corpus` - Transcript loading, labeling, and corpus preparation
//! - `nlp` - Tokenization, sentence splitting, POS tagging, syllable counting
//! - `features` - Per-transcript linguistic feature extraction
//! - `data` - Dataset structure and train/test splitting
//! - `models` - Logistic Regression and Random Forest implementations
//! - `metrics` - Classification report and confusion matrix
//! - `report` - Terminal bar charts for coefficients and importances

pub mod corpus;
pub mod data;
pub mod features;
pub mod metrics;
pub mod models;
pub mod nlp;
pub mod report;

pub use corpus::{CorpusLoader, Label, Transcript};
pub use data::Dataset;
pub use features::{FeatureExtractor, LinguisticFeature};
pub use models::{LogisticRegression, RandomForest};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::corpus::{CorpusLoader, Label, Transcript};
    pub use crate::data::{Dataset, Split};
    pub use crate::features::{FeatureExtractor, FeatureVector, LinguisticFeature};
    pub use crate::metrics::{ClassificationReport, ConfusionMatrix};
    pub use crate::models::{DecisionTree, ForestConfig, LogisticRegression, RandomForest, TreeConfig};
    pub use crate::report::BarChart;
}
