//! Dataset structure for classifier training

use crate::corpus::Transcript;
use crate::features::{FeatureExtractor, LinguisticFeature};
use anyhow::{Context, Result};
use ndarray::{Array1, Array2};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

/// Labeled feature dataset
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dataset {
    /// Feature matrix (n_samples x n_features)
    pub features: Vec<Vec<f64>>,
    /// Class labels (healthy = 0, dementia = 1)
    pub labels: Vec<f64>,
    /// Feature column names
    pub feature_names: Vec<String>,
    /// Transcript file stem for each sample
    pub sources: Vec<String>,
}

/// Train/test split result
pub struct Split {
    pub train: Dataset,
    pub test: Dataset,
}

impl Dataset {
    /// Create a new empty dataset
    pub fn new(feature_names: Vec<String>) -> Self {
        Self {
            features: Vec::new(),
            labels: Vec::new(),
            feature_names,
            sources: Vec::new(),
        }
    }

    /// Build a dataset by running the extractor over a corpus
    pub fn from_transcripts(transcripts: &[Transcript], extractor: &FeatureExtractor) -> Self {
        let mut dataset = Self::new(LinguisticFeature::names());
        for t in transcripts {
            let fv = extractor.extract(&t.text);
            dataset.add_sample(fv.into_values(), t.label.as_f64(), t.source.clone());
        }
        dataset
    }

    /// Number of samples
    pub fn n_samples(&self) -> usize {
        self.features.len()
    }

    /// Number of features
    pub fn n_features(&self) -> usize {
        self.feature_names.len()
    }

    /// Add a sample
    pub fn add_sample(&mut self, features: Vec<f64>, label: f64, source: String) {
        assert_eq!(features.len(), self.feature_names.len());
        self.features.push(features);
        self.labels.push(label);
        self.sources.push(source);
    }

    /// Samples per class as (healthy, dementia)
    pub fn class_counts(&self) -> (usize, usize) {
        let dementia = self.labels.iter().filter(|&&l| l > 0.5).count();
        (self.labels.len() - dementia, dementia)
    }

    /// Feature matrix as ndarray
    pub fn features_array(&self) -> Array2<f64> {
        let n_samples = self.n_samples();
        let n_features = self.n_features();

        if n_samples == 0 {
            return Array2::zeros((0, n_features));
        }

        Array2::from_shape_fn((n_samples, n_features), |(i, j)| self.features[i][j])
    }

    /// Labels as ndarray
    pub fn labels_array(&self) -> Array1<f64> {
        Array1::from_vec(self.labels.clone())
    }

    /// Seeded shuffle split into train and test sets
    pub fn random_split(&self, test_ratio: f64, seed: u64) -> Split {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let n = self.n_samples();

        let mut indices: Vec<usize> = (0..n).collect();
        indices.shuffle(&mut rng);

        let test_size = (test_ratio * n as f64).round() as usize;
        let (test_indices, train_indices) = indices.split_at(test_size.min(n));

        Split {
            train: self.subset(train_indices),
            test: self.subset(test_indices),
        }
    }

    /// Create a subset of the dataset by indices
    pub fn subset(&self, indices: &[usize]) -> Dataset {
        Dataset {
            features: indices.iter().map(|&i| self.features[i].clone()).collect(),
            labels: indices.iter().map(|&i| self.labels[i]).collect(),
            feature_names: self.feature_names.clone(),
            sources: indices.iter().map(|&i| self.sources[i].clone()).collect(),
        }
    }

    /// Bootstrap sample (random sample with replacement)
    pub fn bootstrap_sample(&self, seed: u64) -> Dataset {
        self.subset(&bootstrap_indices(self.n_samples(), seed))
    }

    /// Standardize features in place (z-score per column)
    ///
    /// Columns with near-zero variance are left untouched.
    pub fn standardize(&mut self) {
        let n_features = self.n_features();
        let n_samples = self.n_samples();

        if n_samples == 0 {
            return;
        }

        for j in 0..n_features {
            let values: Vec<f64> = self.features.iter().map(|row| row[j]).collect();
            let mean: f64 = values.iter().sum::<f64>() / n_samples as f64;
            let variance: f64 =
                values.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n_samples as f64;
            let std = variance.sqrt();

            if std > 1e-10 {
                for row in &mut self.features {
                    row[j] = (row[j] - mean) / std;
                }
            }
        }
    }

    /// Save dataset to JSON file
    pub fn save_json(&self, path: &Path) -> Result<()> {
        let file = File::create(path)
            .with_context(|| format!("Failed to create file: {}", path.display()))?;
        let writer = BufWriter::new(file);
        serde_json::to_writer(writer, self).context("Failed to serialize dataset")?;
        Ok(())
    }

    /// Load dataset from JSON file
    pub fn load_json(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("Failed to open file: {}", path.display()))?;
        let reader = BufReader::new(file);
        let dataset = serde_json::from_reader(reader).context("Failed to deserialize dataset")?;
        Ok(dataset)
    }

    /// Save to CSV file (features, then label and source columns)
    pub fn save_csv(&self, path: &Path) -> Result<()> {
        let mut writer = csv::Writer::from_path(path)
            .with_context(|| format!("Failed to create file: {}", path.display()))?;

        let mut header = self.feature_names.clone();
        header.push("label".to_string());
        header.push("source".to_string());
        writer.write_record(&header)?;

        for i in 0..self.n_samples() {
            let mut row: Vec<String> = self.features[i].iter().map(|v| v.to_string()).collect();
            row.push(self.labels[i].to_string());
            row.push(self.sources[i].clone());
            writer.write_record(&row)?;
        }

        writer.flush()?;
        Ok(())
    }

    /// Load from CSV file written by [`Dataset::save_csv`]
    pub fn load_csv(path: &Path) -> Result<Self> {
        let mut reader = csv::Reader::from_path(path)
            .with_context(|| format!("Failed to open file: {}", path.display()))?;

        let headers: Vec<String> = reader.headers()?.iter().map(|s| s.to_string()).collect();
        anyhow::ensure!(headers.len() >= 2, "CSV has no feature columns");

        let n_features = headers.len() - 2;
        let feature_names: Vec<String> = headers[..n_features].to_vec();

        let mut dataset = Dataset::new(feature_names);

        for result in reader.records() {
            let record = result?;
            let row: Vec<f64> = record
                .iter()
                .take(n_features)
                .map(|s| s.parse::<f64>())
                .collect::<std::result::Result<_, _>>()
                .context("Failed to parse feature value")?;

            let label: f64 = record
                .get(n_features)
                .context("Missing label column")?
                .parse()
                .context("Failed to parse label")?;
            let source = record.get(n_features + 1).unwrap_or("").to_string();

            dataset.add_sample(row, label, source);
        }

        Ok(dataset)
    }
}

/// Seeded bootstrap index sample (n draws with replacement from 0..n)
///
/// Shared by [`Dataset::bootstrap_sample`] and the forest's out-of-bag
/// bookkeeping, which must reproduce the same draws from the same seed.
pub fn bootstrap_indices(n: usize, seed: u64) -> Vec<usize> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..n).map(|_| rng.gen_range(0..n)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_dataset(n: usize) -> Dataset {
        let mut dataset = Dataset::new(vec!["f1".to_string(), "f2".to_string()]);
        for i in 0..n {
            let label = if i % 2 == 0 { 0.0 } else { 1.0 };
            dataset.add_sample(vec![i as f64, (i * 2) as f64], label, format!("doc_{}", i));
        }
        dataset
    }

    #[test]
    fn test_dataset_shape() {
        let dataset = sample_dataset(10);
        assert_eq!(dataset.n_samples(), 10);
        assert_eq!(dataset.n_features(), 2);
        assert_eq!(dataset.class_counts(), (5, 5));
    }

    #[test]
    fn test_random_split_sizes() {
        let dataset = sample_dataset(20);
        let split = dataset.random_split(0.2, 42);

        assert_eq!(split.test.n_samples(), 4);
        assert_eq!(split.train.n_samples(), 16);
        assert_eq!(split.train.sources.len(), 16);
    }

    #[test]
    fn test_random_split_reproducible() {
        let dataset = sample_dataset(20);
        let a = dataset.random_split(0.2, 42);
        let b = dataset.random_split(0.2, 42);

        assert_eq!(a.test.sources, b.test.sources);
    }

    #[test]
    fn test_bootstrap_sample_size() {
        let dataset = sample_dataset(15);
        let sample = dataset.bootstrap_sample(7);
        assert_eq!(sample.n_samples(), 15);
    }

    #[test]
    fn test_standardize() {
        let mut dataset = sample_dataset(10);
        dataset.standardize();

        for j in 0..dataset.n_features() {
            let mean: f64 =
                dataset.features.iter().map(|r| r[j]).sum::<f64>() / dataset.n_samples() as f64;
            assert!(mean.abs() < 1e-10);
        }
    }
}
