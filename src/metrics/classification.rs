//! Classification metrics
//!
//! Confusion matrix plus the per-class precision/recall/F1 report printed
//! after training. Class 1 (dementia) is the positive class.

use std::fmt;

/// Confusion matrix for binary classification
#[derive(Debug, Clone)]
pub struct ConfusionMatrix {
    /// True positives
    pub tp: usize,
    /// True negatives
    pub tn: usize,
    /// False positives
    pub fp: usize,
    /// False negatives
    pub fn_: usize,
}

impl ConfusionMatrix {
    /// Calculate confusion matrix from predictions
    pub fn from_predictions(y_true: &[f64], y_pred: &[f64]) -> Self {
        let mut tp = 0;
        let mut tn = 0;
        let mut fp = 0;
        let mut fn_ = 0;

        for (&t, &p) in y_true.iter().zip(y_pred.iter()) {
            let t_bool = t >= 0.5;
            let p_bool = p >= 0.5;

            match (t_bool, p_bool) {
                (true, true) => tp += 1,
                (false, false) => tn += 1,
                (false, true) => fp += 1,
                (true, false) => fn_ += 1,
            }
        }

        Self { tp, tn, fp, fn_ }
    }

    /// Total samples
    pub fn total(&self) -> usize {
        self.tp + self.tn + self.fp + self.fn_
    }

    /// Formatted confusion matrix
    pub fn display(&self) -> String {
        format!(
            "Confusion Matrix:\n\
             \n\
             Predicted:    0       1\n\
             Actual 0:   {:>5}   {:>5}  (TN/FP)\n\
             Actual 1:   {:>5}   {:>5}  (FN/TP)\n",
            self.tn, self.fp, self.fn_, self.tp
        )
    }
}

/// Precision/recall/F1 for one class
#[derive(Debug, Clone, Copy)]
pub struct ClassMetrics {
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
    pub support: usize,
}

impl ClassMetrics {
    /// Metrics for one class from raw counts
    ///
    /// Zero denominators yield zero, matching the usual zero-division
    /// convention for degenerate predictions.
    fn from_counts(tp: usize, predicted: usize, actual: usize) -> Self {
        let precision = if predicted > 0 {
            tp as f64 / predicted as f64
        } else {
            0.0
        };
        let recall = if actual > 0 {
            tp as f64 / actual as f64
        } else {
            0.0
        };
        let f1 = if precision + recall > 0.0 {
            2.0 * precision * recall / (precision + recall)
        } else {
            0.0
        };

        Self {
            precision,
            recall,
            f1,
            support: actual,
        }
    }
}

/// Per-class classification report
#[derive(Debug, Clone)]
pub struct ClassificationReport {
    /// Class name and metrics, in numeric class order (0, then 1)
    pub classes: Vec<(String, ClassMetrics)>,
    pub accuracy: f64,
    pub macro_avg: ClassMetrics,
    pub weighted_avg: ClassMetrics,
    pub confusion: ConfusionMatrix,
}

impl ClassificationReport {
    /// Compute the report from binary predictions
    pub fn compute(y_true: &[f64], y_pred: &[f64], class_names: [&str; 2]) -> Self {
        assert_eq!(y_true.len(), y_pred.len());
        let cm = ConfusionMatrix::from_predictions(y_true, y_pred);
        let total = cm.total();

        // Class 0: "positive" means predicted 0
        let class0 = ClassMetrics::from_counts(cm.tn, cm.tn + cm.fn_, cm.tn + cm.fp);
        let class1 = ClassMetrics::from_counts(cm.tp, cm.tp + cm.fp, cm.tp + cm.fn_);

        let accuracy = if total > 0 {
            (cm.tp + cm.tn) as f64 / total as f64
        } else {
            0.0
        };

        let macro_avg = ClassMetrics {
            precision: (class0.precision + class1.precision) / 2.0,
            recall: (class0.recall + class1.recall) / 2.0,
            f1: (class0.f1 + class1.f1) / 2.0,
            support: total,
        };

        let weight = |m: &ClassMetrics| m.support as f64 / total.max(1) as f64;
        let weighted_avg = ClassMetrics {
            precision: class0.precision * weight(&class0) + class1.precision * weight(&class1),
            recall: class0.recall * weight(&class0) + class1.recall * weight(&class1),
            f1: class0.f1 * weight(&class0) + class1.f1 * weight(&class1),
            support: total,
        };

        Self {
            classes: vec![
                (class_names[0].to_string(), class0),
                (class_names[1].to_string(), class1),
            ],
            accuracy,
            macro_avg,
            weighted_avg,
            confusion: cm,
        }
    }
}

impl fmt::Display for ClassificationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{:>14} {:>10} {:>10} {:>10} {:>10}",
            "", "precision", "recall", "f1-score", "support"
        )?;
        writeln!(f)?;

        for (name, m) in &self.classes {
            writeln!(
                f,
                "{:>14} {:>10.2} {:>10.2} {:>10.2} {:>10}",
                name, m.precision, m.recall, m.f1, m.support
            )?;
        }

        writeln!(f)?;
        writeln!(
            f,
            "{:>14} {:>10} {:>10} {:>10.2} {:>10}",
            "accuracy", "", "", self.accuracy, self.macro_avg.support
        )?;
        writeln!(
            f,
            "{:>14} {:>10.2} {:>10.2} {:>10.2} {:>10}",
            "macro avg",
            self.macro_avg.precision,
            self.macro_avg.recall,
            self.macro_avg.f1,
            self.macro_avg.support
        )?;
        writeln!(
            f,
            "{:>14} {:>10.2} {:>10.2} {:>10.2} {:>10}",
            "weighted avg",
            self.weighted_avg.precision,
            self.weighted_avg.recall,
            self.weighted_avg.f1,
            self.weighted_avg.support
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confusion_matrix() {
        let y_true = vec![1.0, 0.0, 1.0, 1.0, 0.0, 0.0];
        let y_pred = vec![1.0, 0.0, 0.0, 1.0, 1.0, 0.0];

        let cm = ConfusionMatrix::from_predictions(&y_true, &y_pred);

        assert_eq!(cm.tp, 2);
        assert_eq!(cm.tn, 2);
        assert_eq!(cm.fp, 1);
        assert_eq!(cm.fn_, 1);
        assert_eq!(cm.total(), 6);
    }

    #[test]
    fn test_report_values() {
        let y_true = vec![1.0, 0.0, 1.0, 1.0, 0.0, 0.0];
        let y_pred = vec![1.0, 0.0, 0.0, 1.0, 1.0, 0.0];

        let report = ClassificationReport::compute(&y_true, &y_pred, ["healthy", "dementia"]);

        // Class 1: precision 2/3, recall 2/3
        let (_, dementia) = &report.classes[1];
        assert!((dementia.precision - 2.0 / 3.0).abs() < 1e-10);
        assert!((dementia.recall - 2.0 / 3.0).abs() < 1e-10);
        assert_eq!(dementia.support, 3);

        assert!((report.accuracy - 4.0 / 6.0).abs() < 1e-10);
        assert_eq!(report.macro_avg.support, 6);
    }

    #[test]
    fn test_perfect_predictions() {
        let y = vec![0.0, 1.0, 1.0, 0.0];
        let report = ClassificationReport::compute(&y, &y, ["healthy", "dementia"]);

        assert_eq!(report.accuracy, 1.0);
        for (_, m) in &report.classes {
            assert_eq!(m.precision, 1.0);
            assert_eq!(m.recall, 1.0);
            assert_eq!(m.f1, 1.0);
        }
    }

    #[test]
    fn test_degenerate_all_one_class() {
        // Model predicts everything negative; class-1 metrics must be 0
        let y_true = vec![1.0, 1.0, 0.0];
        let y_pred = vec![0.0, 0.0, 0.0];

        let report = ClassificationReport::compute(&y_true, &y_pred, ["healthy", "dementia"]);
        let (_, dementia) = &report.classes[1];

        assert_eq!(dementia.precision, 0.0);
        assert_eq!(dementia.recall, 0.0);
        assert_eq!(dementia.f1, 0.0);
    }

    #[test]
    fn test_display_layout() {
        let y_true = vec![1.0, 0.0];
        let y_pred = vec![1.0, 0.0];

        let report = ClassificationReport::compute(&y_true, &y_pred, ["healthy", "dementia"]);
        let text = report.to_string();

        assert!(text.contains("precision"));
        assert!(text.contains("healthy"));
        assert!(text.contains("dementia"));
        assert!(text.contains("macro avg"));
        assert!(text.contains("weighted avg"));
    }
}
