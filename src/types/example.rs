//! Raw example records produced by dataset readers.

use serde::{Deserialize, Serialize};

/// A single training/dev/test example for sequence classification.
///
/// Immutable once constructed; produced by the [`dataset`](crate::dataset)
/// readers and consumed by the [`FeatureEncoder`](crate::FeatureEncoder).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Example {
    /// Unique id, e.g. "train-17".
    pub guid: String,
    /// First text span (premise for NLI tasks).
    pub text_a: String,
    /// Second text span (hypothesis); absent for single-sentence tasks.
    pub text_b: Option<String>,
    /// Gold label string; absent for unlabeled inference input.
    pub label: Option<String>,
}

impl Example {
    /// Create a labeled sentence-pair example.
    pub fn pair(
        guid: impl Into<String>,
        text_a: impl Into<String>,
        text_b: impl Into<String>,
        label: impl Into<String>,
    ) -> Self {
        Self {
            guid: guid.into(),
            text_a: text_a.into(),
            text_b: Some(text_b.into()),
            label: Some(label.into()),
        }
    }

    /// Create a labeled single-sentence example.
    pub fn single(
        guid: impl Into<String>,
        text_a: impl Into<String>,
        label: impl Into<String>,
    ) -> Self {
        Self {
            guid: guid.into(),
            text_a: text_a.into(),
            text_b: None,
            label: Some(label.into()),
        }
    }

    /// Strip the gold label, e.g. for blind test input.
    pub fn without_label(mut self) -> Self {
        self.label = None;
        self
    }

    /// Whether this example carries a second text span.
    pub fn is_pair(&self) -> bool {
        self.text_b.is_some()
    }
}
