//! Transcript and diagnosis label types

use serde::{Deserialize, Serialize};
use std::fmt;

/// Binary diagnosis label for a transcript
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Label {
    /// Healthy control subject
    Healthy,
    /// Dementia subject
    Dementia,
}

impl Label {
    /// Numeric class used by the models (healthy = 0, dementia = 1)
    pub fn as_f64(self) -> f64 {
        match self {
            Label::Healthy => 0.0,
            Label::Dementia => 1.0,
        }
    }

    /// Label from a numeric class prediction
    pub fn from_f64(value: f64) -> Self {
        if value > 0.5 {
            Label::Dementia
        } else {
            Label::Healthy
        }
    }

    /// Derive the label from a transcript filename prefix
    ///
    /// Files are expected to start with `healthy` or `dementia` after
    /// corpus preparation. Returns `None` for unprefixed files.
    pub fn from_filename(name: &str) -> Option<Self> {
        let lower = name.to_lowercase();
        if lower.starts_with("healthy") {
            Some(Label::Healthy)
        } else if lower.starts_with("dementia") {
            Some(Label::Dementia)
        } else {
            None
        }
    }

    /// Display name used in reports
    pub fn name(self) -> &'static str {
        match self {
            Label::Healthy => "healthy",
            Label::Dementia => "dementia",
        }
    }

    /// Class display names in numeric class order
    pub fn class_names() -> [&'static str; 2] {
        [Label::Healthy.name(), Label::Dementia.name()]
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single speech transcript with its label
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transcript {
    /// Source file stem, e.g. `healthy_12`
    pub source: String,
    /// Diagnosis label
    pub label: Label,
    /// Raw transcript text
    pub text: String,
}

impl Transcript {
    pub fn new(source: impl Into<String>, label: Label, text: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            label,
            text: text.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_from_filename() {
        assert_eq!(Label::from_filename("healthy_3.txt"), Some(Label::Healthy));
        assert_eq!(Label::from_filename("dementia_0.txt"), Some(Label::Dementia));
        assert_eq!(Label::from_filename("Dementia_7.txt"), Some(Label::Dementia));
        assert_eq!(Label::from_filename("subject_42.txt"), None);
    }

    #[test]
    fn test_label_class_values() {
        assert_eq!(Label::Healthy.as_f64(), 0.0);
        assert_eq!(Label::Dementia.as_f64(), 1.0);
        assert_eq!(Label::from_f64(0.9), Label::Dementia);
        assert_eq!(Label::from_f64(0.1), Label::Healthy);
    }
}
