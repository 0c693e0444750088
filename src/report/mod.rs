//! Reporting module
//!
//! Terminal bar charts for feature coefficients and importances.

mod chart;

pub use chart::BarChart;
