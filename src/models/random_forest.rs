//! Random Forest classifier
//!
//! Bagged decision trees with majority voting. Trees are built in parallel;
//! each gets a seed offset from the forest seed so runs reproduce exactly.

use super::decision_tree::{DecisionTree, TreeConfig};
use crate::data::{bootstrap_indices, Dataset};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Random Forest configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForestConfig {
    /// Number of trees in the forest
    pub n_trees: usize,
    /// Maximum depth of each tree
    pub max_depth: usize,
    /// Minimum samples to split
    pub min_samples_split: usize,
    /// Minimum samples in leaf
    pub min_samples_leaf: usize,
    /// Max features per split (sqrt of total if None)
    pub max_features: Option<usize>,
    /// Bootstrap sampling
    pub bootstrap: bool,
    /// Random seed
    pub seed: u64,
    /// Out-of-bag score calculation
    pub oob_score: bool,
}

impl Default for ForestConfig {
    fn default() -> Self {
        Self {
            n_trees: 100,
            max_depth: 10,
            min_samples_split: 5,
            min_samples_leaf: 2,
            max_features: None,
            bootstrap: true,
            seed: 42,
            oob_score: true,
        }
    }
}

/// Random Forest classifier
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RandomForest {
    config: ForestConfig,
    trees: Vec<DecisionTree>,
    feature_names: Vec<String>,
    feature_importances: Vec<f64>,
    oob_score_value: Option<f64>,
}

impl RandomForest {
    /// Create a new random forest
    pub fn new(config: ForestConfig) -> Self {
        Self {
            config,
            trees: Vec::new(),
            feature_names: Vec::new(),
            feature_importances: Vec::new(),
            oob_score_value: None,
        }
    }

    /// Train the random forest
    pub fn fit(&mut self, dataset: &Dataset) {
        self.feature_names = dataset.feature_names.clone();
        let n_features = dataset.n_features();

        let max_features = self
            .config
            .max_features
            .unwrap_or_else(|| (n_features as f64).sqrt().ceil() as usize);

        let trees: Vec<DecisionTree> = (0..self.config.n_trees)
            .into_par_iter()
            .map(|i| {
                let tree_config = TreeConfig {
                    max_depth: self.config.max_depth,
                    min_samples_split: self.config.min_samples_split,
                    min_samples_leaf: self.config.min_samples_leaf,
                    max_features: Some(max_features),
                    seed: self.config.seed.wrapping_add(i as u64),
                };

                let mut tree = DecisionTree::new(tree_config);

                if self.config.bootstrap {
                    let sample = dataset.bootstrap_sample(self.config.seed.wrapping_add(i as u64));
                    tree.fit(&sample);
                } else {
                    tree.fit(dataset);
                }

                tree
            })
            .collect();

        self.trees = trees;

        // Aggregate and normalize feature importances
        self.feature_importances = vec![0.0; n_features];
        for tree in &self.trees {
            for (i, &imp) in tree.feature_importances().iter().enumerate() {
                self.feature_importances[i] += imp;
            }
        }
        let sum: f64 = self.feature_importances.iter().sum();
        if sum > 0.0 {
            for imp in &mut self.feature_importances {
                *imp /= sum;
            }
        }

        if self.config.oob_score && self.config.bootstrap {
            self.calculate_oob_score(dataset);
        }
    }

    /// Out-of-bag accuracy: each sample voted on only by trees that never
    /// saw it during bootstrap
    fn calculate_oob_score(&mut self, dataset: &Dataset) {
        let n_samples = dataset.n_samples();
        let mut votes: Vec<Vec<f64>> = vec![Vec::new(); n_samples];

        for (tree_idx, tree) in self.trees.iter().enumerate() {
            let seed = self.config.seed.wrapping_add(tree_idx as u64);
            let mut in_bag = vec![false; n_samples];
            for idx in bootstrap_indices(n_samples, seed) {
                in_bag[idx] = true;
            }

            for (i, bagged) in in_bag.iter().enumerate() {
                if !bagged {
                    votes[i].push(tree.predict_one(&dataset.features[i]));
                }
            }
        }

        let mut correct = 0usize;
        let mut total = 0usize;
        for (i, sample_votes) in votes.iter().enumerate() {
            if sample_votes.is_empty() {
                continue;
            }
            let avg: f64 = sample_votes.iter().sum::<f64>() / sample_votes.len() as f64;
            let predicted = if avg > 0.5 { 1.0 } else { 0.0 };
            let actual = if dataset.labels[i] > 0.5 { 1.0 } else { 0.0 };
            if predicted == actual {
                correct += 1;
            }
            total += 1;
        }

        self.oob_score_value = if total > 0 {
            Some(correct as f64 / total as f64)
        } else {
            None
        };
    }

    /// Predicted class (0 or 1) for a single sample
    pub fn predict_one(&self, features: &[f64]) -> f64 {
        if self.predict_proba_one(features) > 0.5 {
            1.0
        } else {
            0.0
        }
    }

    /// Probability of class 1: fraction of trees voting for it
    pub fn predict_proba_one(&self, features: &[f64]) -> f64 {
        if self.trees.is_empty() {
            return 0.5;
        }

        let pos_votes = self
            .trees
            .iter()
            .filter(|t| t.predict_one(features) > 0.5)
            .count();

        pos_votes as f64 / self.trees.len() as f64
    }

    /// Predicted classes for a dataset
    pub fn predict(&self, dataset: &Dataset) -> Vec<f64> {
        dataset
            .features
            .par_iter()
            .map(|f| self.predict_one(f))
            .collect()
    }

    /// Class-1 probabilities for a dataset
    pub fn predict_proba(&self, dataset: &Dataset) -> Vec<f64> {
        dataset
            .features
            .par_iter()
            .map(|f| self.predict_proba_one(f))
            .collect()
    }

    /// Fraction of correctly classified samples
    pub fn accuracy(&self, dataset: &Dataset) -> f64 {
        if dataset.n_samples() == 0 {
            return 0.0;
        }
        let correct = self
            .predict(dataset)
            .iter()
            .zip(dataset.labels.iter())
            .filter(|(&p, &l)| p == if l > 0.5 { 1.0 } else { 0.0 })
            .count();
        correct as f64 / dataset.n_samples() as f64
    }

    /// Normalized aggregate feature importances
    pub fn feature_importances(&self) -> &[f64] {
        &self.feature_importances
    }

    /// Feature names with importances, sorted descending
    pub fn feature_importance_ranking(&self) -> Vec<(&str, f64)> {
        let mut ranking: Vec<(&str, f64)> = self
            .feature_names
            .iter()
            .zip(self.feature_importances.iter())
            .map(|(n, &i)| (n.as_str(), i))
            .collect();

        ranking.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap());
        ranking
    }

    /// Out-of-bag accuracy, if computed
    pub fn oob_score(&self) -> Option<f64> {
        self.oob_score_value
    }

    /// Number of trees
    pub fn n_trees(&self) -> usize {
        self.trees.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn threshold_dataset(n: usize) -> Dataset {
        let mut dataset = Dataset::new(vec!["x".to_string(), "noise".to_string()]);
        for i in 0..n {
            let x = i as f64 / 10.0;
            let noise = ((i * 7919) % 13) as f64;
            let y = if x > 5.0 { 1.0 } else { 0.0 };
            dataset.add_sample(vec![x, noise], y, format!("doc_{}", i));
        }
        dataset
    }

    #[test]
    fn test_forest_classification() {
        let dataset = threshold_dataset(200);
        let mut forest = RandomForest::new(ForestConfig {
            n_trees: 20,
            max_depth: 5,
            ..Default::default()
        });

        forest.fit(&dataset);

        assert_eq!(forest.n_trees(), 20);
        assert!(forest.accuracy(&dataset) > 0.9);
    }

    #[test]
    fn test_importances_favor_signal() {
        let dataset = threshold_dataset(200);
        let mut forest = RandomForest::new(ForestConfig {
            n_trees: 20,
            max_depth: 5,
            ..Default::default()
        });

        forest.fit(&dataset);

        let ranking = forest.feature_importance_ranking();
        assert_eq!(ranking[0].0, "x");

        let sum: f64 = forest.feature_importances().iter().sum();
        assert!((sum - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_oob_score_present() {
        let dataset = threshold_dataset(200);
        let mut forest = RandomForest::new(ForestConfig {
            n_trees: 20,
            max_depth: 5,
            ..Default::default()
        });

        forest.fit(&dataset);

        let oob = forest.oob_score().expect("oob computed");
        assert!(oob > 0.8);
    }

    #[test]
    fn test_fit_reproducible() {
        let dataset = threshold_dataset(100);

        let mut a = RandomForest::new(ForestConfig {
            n_trees: 10,
            ..Default::default()
        });
        let mut b = RandomForest::new(ForestConfig {
            n_trees: 10,
            ..Default::default()
        });

        a.fit(&dataset);
        b.fit(&dataset);

        assert_eq!(a.predict(&dataset), b.predict(&dataset));
        assert_eq!(a.feature_importances(), b.feature_importances());
    }
}
