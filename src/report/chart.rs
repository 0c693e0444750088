//! Terminal bar charts for feature weights
//!
//! Renders logistic-regression coefficients (signed bars around a zero
//! axis) and forest importances (magnitude bars) directly in the terminal,
//! and exports the underlying values as CSV for external plotting.

use anyhow::{Context, Result};
use colored::Colorize;
use std::path::Path;

/// Bar orientation
#[derive(Debug, Clone, Copy, PartialEq)]
enum Kind {
    /// Values may be negative; bars grow left/right of a zero axis
    Signed,
    /// Non-negative values; bars grow right
    Magnitude,
}

/// Horizontal bar chart over (feature, value) entries
#[derive(Debug, Clone)]
pub struct BarChart {
    title: String,
    entries: Vec<(String, f64)>,
    kind: Kind,
    width: usize,
}

impl BarChart {
    /// Chart of signed values sorted ascending (coefficients)
    pub fn signed(title: impl Into<String>, entries: Vec<(String, f64)>) -> Self {
        let mut entries = entries;
        entries.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap());
        Self {
            title: title.into(),
            entries,
            kind: Kind::Signed,
            width: 40,
        }
    }

    /// Chart of magnitudes sorted descending (importances)
    pub fn magnitude(title: impl Into<String>, entries: Vec<(String, f64)>) -> Self {
        let mut entries = entries;
        entries.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap());
        Self {
            title: title.into(),
            entries,
            kind: Kind::Magnitude,
            width: 40,
        }
    }

    /// Total bar width in characters
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width.max(2);
        self
    }

    /// Chart values in display order
    pub fn entries(&self) -> &[(String, f64)] {
        &self.entries
    }

    /// Render the chart to a string
    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("{}\n", self.title.bold()));
        out.push_str(&format!("{}\n", "─".repeat(self.title.len().max(self.width))));

        if self.entries.is_empty() {
            out.push_str("(no data)\n");
            return out;
        }

        let name_width = self
            .entries
            .iter()
            .map(|(n, _)| n.len())
            .max()
            .unwrap_or(0);

        let max_abs = self
            .entries
            .iter()
            .map(|(_, v)| v.abs())
            .fold(0.0_f64, f64::max);

        match self.kind {
            Kind::Signed => self.render_signed(&mut out, name_width, max_abs),
            Kind::Magnitude => self.render_magnitude(&mut out, name_width, max_abs),
        }

        out
    }

    fn render_signed(&self, out: &mut String, name_width: usize, max_abs: f64) {
        let half = self.width / 2;
        let scale = if max_abs > 0.0 {
            half as f64 / max_abs
        } else {
            0.0
        };

        for (name, value) in &self.entries {
            let bar_len = (value.abs() * scale).round() as usize;

            let (left, right) = if *value < 0.0 {
                let bar = "█".repeat(bar_len).red().to_string();
                (format!("{}{}", " ".repeat(half - bar_len), bar), String::new())
            } else {
                (" ".repeat(half), "█".repeat(bar_len).green().to_string())
            };

            out.push_str(&format!(
                "{:>name_width$} {}{}{} {:>10.4}\n",
                name,
                left,
                "│".dimmed(),
                right,
                value,
            ));
        }
    }

    fn render_magnitude(&self, out: &mut String, name_width: usize, max_abs: f64) {
        let scale = if max_abs > 0.0 {
            self.width as f64 / max_abs
        } else {
            0.0
        };

        for (name, value) in &self.entries {
            let bar_len = (value.abs() * scale).round() as usize;
            out.push_str(&format!(
                "{:>name_width$} {} {:>10.4}\n",
                name,
                "█".repeat(bar_len).cyan(),
                value,
            ));
        }
    }

    /// Save chart values as `feature,value` CSV in display order
    pub fn save_csv<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let mut writer = csv::Writer::from_path(path)
            .with_context(|| format!("Failed to create file: {}", path.display()))?;

        writer.write_record(["feature", "value"])?;
        for (name, value) in &self.entries {
            writer.write_record([name.as_str(), &value.to_string()])?;
        }

        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signed_sorted_ascending() {
        let chart = BarChart::signed(
            "Coefficients",
            vec![
                ("a".to_string(), 0.5),
                ("b".to_string(), -1.2),
                ("c".to_string(), 0.1),
            ],
        );

        let order: Vec<&str> = chart.entries().iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(order, vec!["b", "c", "a"]);
    }

    #[test]
    fn test_magnitude_sorted_descending() {
        let chart = BarChart::magnitude(
            "Importances",
            vec![
                ("a".to_string(), 0.2),
                ("b".to_string(), 0.7),
                ("c".to_string(), 0.1),
            ],
        );

        let order: Vec<&str> = chart.entries().iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(order, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_render_contains_names_and_values() {
        let chart = BarChart::signed(
            "Feature Coefficients",
            vec![("noun_rate".to_string(), -0.8), ("filler_count".to_string(), 1.4)],
        );

        let text = chart.render();
        assert!(text.contains("Feature Coefficients"));
        assert!(text.contains("noun_rate"));
        assert!(text.contains("filler_count"));
        assert!(text.contains("1.4000"));
    }

    #[test]
    fn test_render_empty() {
        let chart = BarChart::magnitude("Empty", vec![]);
        assert!(chart.render().contains("(no data)"));
    }

    #[test]
    fn test_all_zero_values() {
        let chart = BarChart::magnitude(
            "Flat",
            vec![("a".to_string(), 0.0), ("b".to_string(), 0.0)],
        );

        // No panic on zero scale
        let text = chart.render();
        assert!(text.contains("0.0000"));
    }
}
