//! Model evaluation module
//!
//! Confusion matrix and per-class classification report.

mod classification;

pub use classification::{ClassMetrics, ClassificationReport, ConfusionMatrix};
