//! Data structures for model training
//!
//! Provides the labeled feature dataset and train/test splitting.

mod dataset;

pub use dataset::{bootstrap_indices, Dataset, Split};
