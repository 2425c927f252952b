//! Premise error types

/// Premise error types
#[derive(Debug, thiserror::Error)]
pub enum PremiseError {
    // Per-example data errors
    #[error("unknown label '{label}' (expected one of: {expected})")]
    UnknownLabel { label: String, expected: String },

    #[error("cannot parse regression label '{label}': {reason}")]
    LabelParse { label: String, reason: String },

    /// An encoded output sequence diverged from the configured maximum
    /// length. Always a logic defect, never a data problem; batch encoding
    /// aborts on it regardless of the skip policy.
    #[error("length invariant violated: {0}")]
    InvariantViolation(String),

    // Corpus/data errors
    #[error("data error: {0}")]
    Data(String),

    #[error("tokenizer error: {0}")]
    Tokenizer(String),

    // Configuration errors
    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl PremiseError {
    /// Whether this error is a per-example data problem that batch
    /// encoding may skip under [`InvalidExamplePolicy::Skip`].
    ///
    /// [`InvalidExamplePolicy::Skip`]: crate::encoder::InvalidExamplePolicy::Skip
    pub fn is_per_example(&self) -> bool {
        matches!(self, Self::UnknownLabel { .. } | Self::LabelParse { .. })
    }
}

/// Result type alias for Premise operations
pub type Result<T> = std::result::Result<T, PremiseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_errors_are_per_example() {
        let unknown = PremiseError::UnknownLabel {
            label: "maybe".to_string(),
            expected: "entailment, not_entailment".to_string(),
        };
        assert!(unknown.is_per_example());

        let parse = PremiseError::LabelParse {
            label: "abc".to_string(),
            reason: "invalid float literal".to_string(),
        };
        assert!(parse.is_per_example());
    }

    #[test]
    fn invariant_violation_is_not_per_example() {
        let err = PremiseError::InvariantViolation("input_ids length 11 != 12".to_string());
        assert!(!err.is_per_example());
    }

    #[test]
    fn error_messages_name_the_label() {
        let err = PremiseError::UnknownLabel {
            label: "maybe".to_string(),
            expected: "entailment, not_entailment".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("maybe"));
        assert!(msg.contains("entailment"));
    }
}
