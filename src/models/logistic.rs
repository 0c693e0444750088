//! Logistic Regression for binary classification
//!
//! Batch gradient descent on log loss. Coefficients are exposed for the
//! feature-weight chart: with standardized inputs their sign and size say
//! which linguistic markers push a transcript toward the dementia class.

use ndarray::{Array1, Array2};
use thiserror::Error;
use tracing::debug;

/// Errors for model fitting and prediction
#[derive(Error, Debug)]
pub enum ModelError {
    #[error("Model has not been fitted yet")]
    NotFitted,

    #[error("Dimension mismatch: expected {expected} features, got {got}")]
    DimensionMismatch { expected: usize, got: usize },
}

/// Coefficient penalty
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Penalty {
    /// No regularization
    None,
    /// L2 regularization with the given strength
    L2(f64),
}

/// Logistic Regression classifier
#[derive(Debug, Clone)]
pub struct LogisticRegression {
    coefficients: Option<Array1<f64>>,
    intercept: Option<f64>,
    learning_rate: f64,
    max_iter: usize,
    tolerance: f64,
    penalty: Penalty,
    /// Log loss per iteration during the last fit
    pub cost_history: Vec<f64>,
}

impl Default for LogisticRegression {
    fn default() -> Self {
        Self::new(0.1, 1000, 1e-6, Penalty::None)
    }
}

impl LogisticRegression {
    /// Create a new logistic regression model
    pub fn new(learning_rate: f64, max_iter: usize, tolerance: f64, penalty: Penalty) -> Self {
        Self {
            coefficients: None,
            intercept: None,
            learning_rate,
            max_iter,
            tolerance,
            penalty,
            cost_history: Vec::new(),
        }
    }

    /// Create with L2 regularization
    pub fn with_l2(alpha: f64) -> Self {
        Self::new(0.1, 1000, 1e-6, Penalty::L2(alpha))
    }

    /// Numerically stable sigmoid
    fn sigmoid(z: f64) -> f64 {
        if z >= 0.0 {
            1.0 / (1.0 + (-z).exp())
        } else {
            let exp_z = z.exp();
            exp_z / (1.0 + exp_z)
        }
    }

    fn sigmoid_array(z: &Array1<f64>) -> Array1<f64> {
        z.mapv(Self::sigmoid)
    }

    /// Log loss (binary cross-entropy)
    fn log_loss(y_true: &Array1<f64>, y_pred: &Array1<f64>) -> f64 {
        let eps = 1e-15;
        let n = y_true.len() as f64;

        -y_true
            .iter()
            .zip(y_pred.iter())
            .map(|(&y, &p)| {
                let p_clipped = p.clamp(eps, 1.0 - eps);
                y * p_clipped.ln() + (1.0 - y) * (1.0 - p_clipped).ln()
            })
            .sum::<f64>()
            / n
    }

    /// Fit using gradient descent
    pub fn fit(&mut self, x: &Array2<f64>, y: &Array1<f64>) -> Result<(), ModelError> {
        let n_samples = x.nrows() as f64;
        let n_features = x.ncols();

        let mut weights = Array1::<f64>::zeros(n_features);
        let mut bias = 0.0;

        self.cost_history.clear();

        for iter in 0..self.max_iter {
            let linear = x.dot(&weights) + bias;
            let predictions = Self::sigmoid_array(&linear);

            let errors = &predictions - y;
            let mut dw = x.t().dot(&errors) / n_samples;
            let db = errors.sum() / n_samples;

            if let Penalty::L2(alpha) = self.penalty {
                dw = &dw + &(&weights * alpha);
            }

            weights = &weights - &(&dw * self.learning_rate);
            bias -= self.learning_rate * db;

            let cost = Self::log_loss(y, &predictions);
            self.cost_history.push(cost);

            if iter > 0 {
                let cost_diff = (self.cost_history[iter - 1] - cost).abs();
                if cost_diff < self.tolerance {
                    debug!("converged at iteration {}", iter);
                    break;
                }
            }
        }

        self.coefficients = Some(weights);
        self.intercept = Some(bias);

        Ok(())
    }

    /// Predict class-1 probabilities
    pub fn predict_proba(&self, x: &Array2<f64>) -> Result<Array1<f64>, ModelError> {
        let weights = self.coefficients.as_ref().ok_or(ModelError::NotFitted)?;
        let bias = self.intercept.ok_or(ModelError::NotFitted)?;

        if x.ncols() != weights.len() {
            return Err(ModelError::DimensionMismatch {
                expected: weights.len(),
                got: x.ncols(),
            });
        }

        let linear = x.dot(weights) + bias;
        Ok(Self::sigmoid_array(&linear))
    }

    /// Predict class labels (0 or 1) at the 0.5 threshold
    pub fn predict(&self, x: &Array2<f64>) -> Result<Array1<f64>, ModelError> {
        let proba = self.predict_proba(x)?;
        Ok(proba.mapv(|p| if p >= 0.5 { 1.0 } else { 0.0 }))
    }

    /// Fitted coefficients
    pub fn coefficients(&self) -> Result<&Array1<f64>, ModelError> {
        self.coefficients.as_ref().ok_or(ModelError::NotFitted)
    }

    /// Fitted intercept
    pub fn intercept(&self) -> Result<f64, ModelError> {
        self.intercept.ok_or(ModelError::NotFitted)
    }

    /// Model summary with per-feature coefficients and odds ratios
    pub fn summary(&self, feature_names: &[String]) -> String {
        let mut s = String::new();
        s.push_str("Logistic Regression Summary\n");
        s.push_str("===========================\n\n");

        match &self.coefficients {
            Some(coef) => {
                s.push_str(&format!(
                    "Intercept: {:.6}\n\n",
                    self.intercept.unwrap_or(0.0)
                ));
                s.push_str("Coefficients (log-odds):\n");

                for (name, &c) in feature_names.iter().zip(coef.iter()) {
                    let odds_ratio = c.exp();
                    s.push_str(&format!(
                        "  {:20}: {:>10.6} (OR: {:.4})\n",
                        name, c, odds_ratio
                    ));
                }

                s.push_str(&format!(
                    "\nFinal cost: {:.6}\n",
                    self.cost_history.last().unwrap_or(&0.0)
                ));
            }
            None => s.push_str("Model not fitted yet.\n"),
        }

        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_not_fitted_error() {
        let model = LogisticRegression::default();
        let x = array![[1.0, 2.0]];
        assert!(matches!(model.predict(&x), Err(ModelError::NotFitted)));
    }

    #[test]
    fn test_fit_separable() {
        // One feature, classes split at x = 0
        let n = 100;
        let x = Array2::from_shape_fn((n, 1), |(i, _)| i as f64 / n as f64 - 0.5);
        let y = Array1::from_shape_fn(n, |i| if i as f64 / n as f64 - 0.5 > 0.0 { 1.0 } else { 0.0 });

        let mut model = LogisticRegression::default();
        model.fit(&x, &y).unwrap();

        let predictions = model.predict(&x).unwrap();
        let correct = predictions
            .iter()
            .zip(y.iter())
            .filter(|(p, t)| p == t)
            .count();

        assert!(correct as f64 / n as f64 > 0.9);
        assert!(model.coefficients().unwrap()[0] > 0.0);
    }

    #[test]
    fn test_l2_shrinks_coefficients() {
        let n = 100;
        let x = Array2::from_shape_fn((n, 1), |(i, _)| i as f64 / n as f64 - 0.5);
        let y = Array1::from_shape_fn(n, |i| if i < n / 2 { 0.0 } else { 1.0 });

        let mut plain = LogisticRegression::default();
        plain.fit(&x, &y).unwrap();

        let mut penalized = LogisticRegression::with_l2(1.0);
        penalized.fit(&x, &y).unwrap();

        assert!(
            penalized.coefficients().unwrap()[0].abs() < plain.coefficients().unwrap()[0].abs()
        );
    }

    #[test]
    fn test_dimension_mismatch() {
        let x = array![[0.0, 1.0], [1.0, 0.0]];
        let y = array![0.0, 1.0];

        let mut model = LogisticRegression::default();
        model.fit(&x, &y).unwrap();

        let bad = array![[1.0, 2.0, 3.0]];
        assert!(matches!(
            model.predict(&bad),
            Err(ModelError::DimensionMismatch { .. })
        ));
    }
}
