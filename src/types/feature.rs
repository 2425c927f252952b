//! Fixed-length encoded feature records.

use serde::{Deserialize, Serialize};

/// Resolved numeric label for one example.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelId {
    /// Index into the configured label set (classification mode).
    Class(usize),
    /// Parsed floating-point target (regression mode).
    Score(f32),
}

/// A single encoded feature record, ready for batched numeric model input.
///
/// All three sequences have length exactly `max_seq_length`; the
/// [`FeatureEncoder`](crate::FeatureEncoder) enforces this
/// unconditionally. Records are immutable once produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EncodedFeature {
    /// Vocabulary ids, including special-token and padding positions.
    pub input_ids: Vec<u32>,
    /// 1 for real positions, 0 for padding.
    pub attention_mask: Vec<u8>,
    /// Segment tag per position (first span, second span, marker, pad).
    pub segment_ids: Vec<u32>,
    /// Resolved label.
    pub label: LabelId,
}

impl EncodedFeature {
    /// The fixed sequence length of this record.
    pub fn seq_len(&self) -> usize {
        self.input_ids.len()
    }

    /// Number of non-padding positions.
    pub fn real_token_count(&self) -> usize {
        self.attention_mask.iter().filter(|&&m| m == 1).count()
    }
}
