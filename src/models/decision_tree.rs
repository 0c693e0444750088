//! Decision Tree classifier
//!
//! CART-style binary classification tree: gini impurity, midpoint
//! thresholds, optional per-split feature subsampling (used by the forest).

use crate::data::Dataset;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Decision tree configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TreeConfig {
    /// Maximum depth of tree
    pub max_depth: usize,
    /// Minimum samples required to split
    pub min_samples_split: usize,
    /// Minimum samples in leaf node
    pub min_samples_leaf: usize,
    /// Maximum features to consider per split (None = all)
    pub max_features: Option<usize>,
    /// Random seed for feature subsampling
    pub seed: u64,
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            max_depth: 10,
            min_samples_split: 5,
            min_samples_leaf: 2,
            max_features: None,
            seed: 42,
        }
    }
}

/// Tree node
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TreeNode {
    /// Feature index for split (None for leaves)
    pub feature_idx: Option<usize>,
    /// Threshold for split
    pub threshold: Option<f64>,
    /// Probability of class 1 among samples at this node
    pub prob: f64,
    /// Number of samples in this node
    pub n_samples: usize,
    /// Gini impurity at this node
    pub impurity: f64,
    /// Left child (feature <= threshold)
    pub left: Option<Box<TreeNode>>,
    /// Right child
    pub right: Option<Box<TreeNode>>,
}

impl TreeNode {
    fn leaf(prob: f64, n_samples: usize, impurity: f64) -> Self {
        Self {
            feature_idx: None,
            threshold: None,
            prob,
            n_samples,
            impurity,
            left: None,
            right: None,
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    pub fn depth(&self) -> usize {
        if self.is_leaf() {
            1
        } else {
            1 + self
                .left
                .as_ref()
                .map(|n| n.depth())
                .unwrap_or(0)
                .max(self.right.as_ref().map(|n| n.depth()).unwrap_or(0))
        }
    }

    pub fn n_leaves(&self) -> usize {
        if self.is_leaf() {
            1
        } else {
            self.left.as_ref().map(|n| n.n_leaves()).unwrap_or(0)
                + self.right.as_ref().map(|n| n.n_leaves()).unwrap_or(0)
        }
    }
}

/// Decision Tree classifier
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecisionTree {
    config: TreeConfig,
    root: Option<TreeNode>,
    feature_names: Vec<String>,
    feature_importances: Vec<f64>,
}

impl DecisionTree {
    /// Create a new decision tree with config
    pub fn new(config: TreeConfig) -> Self {
        Self {
            config,
            root: None,
            feature_names: Vec::new(),
            feature_importances: Vec::new(),
        }
    }

    /// Train the decision tree
    pub fn fit(&mut self, dataset: &Dataset) {
        self.feature_names = dataset.feature_names.clone();
        let n_features = dataset.n_features();
        self.feature_importances = vec![0.0; n_features];

        let indices: Vec<usize> = (0..dataset.n_samples()).collect();
        let mut rng = ChaCha8Rng::seed_from_u64(self.config.seed);

        self.root = Some(self.build_tree(dataset, &indices, 0, &mut rng));

        let sum: f64 = self.feature_importances.iter().sum();
        if sum > 0.0 {
            for imp in &mut self.feature_importances {
                *imp /= sum;
            }
        }
    }

    fn build_tree(
        &mut self,
        dataset: &Dataset,
        indices: &[usize],
        depth: usize,
        rng: &mut ChaCha8Rng,
    ) -> TreeNode {
        let n = indices.len();
        let labels: Vec<f64> = indices.iter().map(|&i| dataset.labels[i]).collect();
        let impurity = gini(&labels);
        let prob = positive_fraction(&labels);

        if depth >= self.config.max_depth || n < self.config.min_samples_split || impurity < 1e-10
        {
            return TreeNode::leaf(prob, n, impurity);
        }

        match self.find_best_split(dataset, indices, rng) {
            Some(split) => {
                if split.left.len() < self.config.min_samples_leaf
                    || split.right.len() < self.config.min_samples_leaf
                {
                    return TreeNode::leaf(prob, n, impurity);
                }

                self.feature_importances[split.feature_idx] += split.importance;

                let left = self.build_tree(dataset, &split.left, depth + 1, rng);
                let right = self.build_tree(dataset, &split.right, depth + 1, rng);

                TreeNode {
                    feature_idx: Some(split.feature_idx),
                    threshold: Some(split.threshold),
                    prob,
                    n_samples: n,
                    impurity,
                    left: Some(Box::new(left)),
                    right: Some(Box::new(right)),
                }
            }
            None => TreeNode::leaf(prob, n, impurity),
        }
    }

    fn find_best_split(
        &self,
        dataset: &Dataset,
        indices: &[usize],
        rng: &mut ChaCha8Rng,
    ) -> Option<BestSplit> {
        let n_features = dataset.n_features();
        let max_features = self.config.max_features.unwrap_or(n_features);

        let mut feature_indices: Vec<usize> = (0..n_features).collect();
        feature_indices.shuffle(rng);
        feature_indices.truncate(max_features);

        let labels: Vec<f64> = indices.iter().map(|&i| dataset.labels[i]).collect();
        let parent_impurity = gini(&labels);

        let mut best_gain = 0.0;
        let mut best: Option<BestSplit> = None;

        for &feature_idx in &feature_indices {
            let mut values: Vec<f64> = indices
                .iter()
                .map(|&i| dataset.features[i][feature_idx])
                .collect();
            values.sort_by(|a, b| a.partial_cmp(b).unwrap());
            values.dedup();

            for window in values.windows(2) {
                let threshold = (window[0] + window[1]) / 2.0;

                let (left, right): (Vec<usize>, Vec<usize>) = indices
                    .iter()
                    .partition(|&&i| dataset.features[i][feature_idx] <= threshold);

                if left.is_empty() || right.is_empty() {
                    continue;
                }

                let left_labels: Vec<f64> = left.iter().map(|&i| dataset.labels[i]).collect();
                let right_labels: Vec<f64> = right.iter().map(|&i| dataset.labels[i]).collect();

                let n_left = left.len() as f64;
                let n_right = right.len() as f64;
                let weighted_impurity = (n_left * gini(&left_labels)
                    + n_right * gini(&right_labels))
                    / (n_left + n_right);

                let gain = parent_impurity - weighted_impurity;
                if gain > best_gain {
                    best_gain = gain;
                    best = Some(BestSplit {
                        feature_idx,
                        threshold,
                        importance: gain * indices.len() as f64,
                        left,
                        right,
                    });
                }
            }
        }

        best
    }

    /// Probability of class 1 for a single sample
    pub fn predict_proba_one(&self, features: &[f64]) -> f64 {
        match &self.root {
            Some(node) => traverse(node, features),
            None => 0.5,
        }
    }

    /// Predicted class (0 or 1) for a single sample
    pub fn predict_one(&self, features: &[f64]) -> f64 {
        if self.predict_proba_one(features) > 0.5 {
            1.0
        } else {
            0.0
        }
    }

    /// Predicted classes for a dataset
    pub fn predict(&self, dataset: &Dataset) -> Vec<f64> {
        dataset
            .features
            .iter()
            .map(|f| self.predict_one(f))
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

    /// Impurity-decrease feature importances (normalized)
    pub fn feature_importances(&self) -> &[f64] {
        &self.feature_importances
    }

    /// Tree depth (0 when unfitted)
    pub fn depth(&self) -> usize {
        self.root.as_ref().map(|r| r.depth()).unwrap_or(0)
    }

    /// Number of leaves (0 when unfitted)
    pub fn n_leaves(&self) -> usize {
        self.root.as_ref().map(|r| r.n_leaves()).unwrap_or(0)
    }
}

struct BestSplit {
    feature_idx: usize,
    threshold: f64,
    importance: f64,
    left: Vec<usize>,
    right: Vec<usize>,
}

fn traverse(node: &TreeNode, features: &[f64]) -> f64 {
    if node.is_leaf() {
        return node.prob;
    }

    let feature_idx = node.feature_idx.expect("split node has feature");
    let threshold = node.threshold.expect("split node has threshold");

    if features[feature_idx] <= threshold {
        traverse(node.left.as_ref().expect("split node has left child"), features)
    } else {
        traverse(node.right.as_ref().expect("split node has right child"), features)
    }
}

/// Gini impurity of a binary label set
fn gini(labels: &[f64]) -> f64 {
    if labels.is_empty() {
        return 0.0;
    }
    let p = positive_fraction(labels);
    2.0 * p * (1.0 - p)
}

/// Fraction of class-1 labels
fn positive_fraction(labels: &[f64]) -> f64 {
    if labels.is_empty() {
        return 0.0;
    }
    let positive = labels.iter().filter(|&&l| l > 0.5).count() as f64;
    positive / labels.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn threshold_dataset(n: usize) -> Dataset {
        let mut dataset = Dataset::new(vec!["x".to_string()]);
        for i in 0..n {
            let x = i as f64 / 10.0;
            let y = if x > 5.0 { 1.0 } else { 0.0 };
            dataset.add_sample(vec![x], y, format!("doc_{}", i));
        }
        dataset
    }

    #[test]
    fn test_learns_threshold() {
        let dataset = threshold_dataset(100);
        let mut tree = DecisionTree::new(TreeConfig::default());
        tree.fit(&dataset);

        assert!(tree.accuracy(&dataset) > 0.95);
        assert_eq!(tree.predict_one(&[9.0]), 1.0);
        assert_eq!(tree.predict_one(&[1.0]), 0.0);
    }

    #[test]
    fn test_importances_normalized() {
        let dataset = threshold_dataset(100);
        let mut tree = DecisionTree::new(TreeConfig::default());
        tree.fit(&dataset);

        let sum: f64 = tree.feature_importances().iter().sum();
        assert!((sum - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_pure_node_is_leaf() {
        let mut dataset = Dataset::new(vec!["x".to_string()]);
        for i in 0..20 {
            dataset.add_sample(vec![i as f64], 0.0, format!("doc_{}", i));
        }

        let mut tree = DecisionTree::new(TreeConfig::default());
        tree.fit(&dataset);

        assert_eq!(tree.n_leaves(), 1);
        assert_eq!(tree.predict_one(&[3.0]), 0.0);
    }

    #[test]
    fn test_unfitted_defaults() {
        let tree = DecisionTree::new(TreeConfig::default());
        assert_eq!(tree.depth(), 0);
        assert_eq!(tree.predict_proba_one(&[1.0]), 0.5);
    }
}
