//! Machine learning models module
//!
//! Provides Logistic Regression, Decision Tree, and Random Forest
//! implementations for binary transcript classification.

mod decision_tree;
mod logistic;
mod random_forest;

pub use decision_tree::{DecisionTree, TreeConfig, TreeNode};
pub use logistic::{LogisticRegression, ModelError, Penalty};
pub use random_forest::{ForestConfig, RandomForest};
