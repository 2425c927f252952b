//! Closed label sets for classification tasks.

use serde::{Deserialize, Serialize};

use crate::error::{PremiseError, Result};

/// An ordered, closed set of classification label strings.
///
/// Index order is part of the contract: prediction collapsing in
/// [`ensemble`](crate::ensemble) assumes "entailment" is index 0, so the
/// stock constructors always put it first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LabelSet {
    labels: Vec<String>,
}

impl LabelSet {
    /// Build a label set from an ordered list of distinct labels.
    pub fn new<I, S>(labels: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let labels: Vec<String> = labels.into_iter().map(Into::into).collect();
        if labels.is_empty() {
            return Err(PremiseError::Configuration(
                "label set must not be empty".to_string(),
            ));
        }
        for (i, label) in labels.iter().enumerate() {
            if labels[..i].contains(label) {
                return Err(PremiseError::Configuration(format!(
                    "duplicate label '{label}' in label set"
                )));
            }
        }
        Ok(Self { labels })
    }

    /// The binary RTE label set: entailment / not_entailment.
    pub fn two_way() -> Self {
        Self {
            labels: vec!["entailment".to_string(), "not_entailment".to_string()],
        }
    }

    /// The 3-way MNLI label set: entailment / neutral / contradiction.
    pub fn three_way() -> Self {
        Self {
            labels: vec![
                "entailment".to_string(),
                "neutral".to_string(),
                "contradiction".to_string(),
            ],
        }
    }

    /// Index of a label string, if present.
    pub fn index_of(&self, label: &str) -> Option<usize> {
        self.labels.iter().position(|l| l == label)
    }

    /// Labels in index order.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Number of labels.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Whether the set is empty (never true for a constructed set).
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Comma-joined label list for error messages.
    pub(crate) fn describe(&self) -> String {
        self.labels.join(", ")
    }
}
