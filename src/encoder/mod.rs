//! Feature encoding: raw examples to fixed-length model input.
//!
//! The layout convention follows the BERT family:
//!
//! ```text
//! (a) pairs:   [CLS] premise tokens [SEP] hypothesis tokens [SEP]
//!     segments:  c   0 0 ... 0        0   1 1 ... 1           1
//! (b) single:  [CLS] tokens [SEP]
//! ```
//!
//! RoBERTa-style checkpoints insert a second separator between the two
//! spans (`extra_separator`), and XLNet-style checkpoints place the
//! classification marker at the end (`cls_at_end`) and pad on the left.
//! Every knob is explicit in [`EncoderConfig`]; there are no defaults
//! hidden in the encoding logic.

mod truncate;

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{PremiseError, Result};
use crate::telemetry;
use crate::tokenizer::SubwordTokenizer;
use crate::types::{EncodedFeature, Example, LabelId, LabelSet};

/// How label strings are resolved to numeric ids.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelMode {
    /// Look the label up in a closed label set; unknown labels error.
    Classification(LabelSet),
    /// Parse the label string as a floating-point target.
    Regression,
}

/// Segment-id tags for each logical region of the layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentIds {
    /// First text span and its trailing separator(s).
    pub first: u32,
    /// Second text span and its trailing separator.
    pub second: u32,
    /// The classification marker position.
    pub cls: u32,
    /// Padding positions.
    pub pad: u32,
}

impl Default for SegmentIds {
    fn default() -> Self {
        Self {
            first: 0,
            second: 1,
            cls: 0,
            pad: 0,
        }
    }
}

/// Complete layout configuration for the feature encoder.
///
/// Validated once by [`FeatureEncoder::new`] rather than checked at each
/// call site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EncoderConfig {
    /// Fixed output length `L` for all three sequences.
    pub max_seq_length: usize,
    /// Classification marker token, e.g. `[CLS]` or `<s>`.
    pub cls_token: String,
    /// Separator token, e.g. `[SEP]` or `</s>`.
    pub sep_token: String,
    /// Vocabulary id used for padding positions.
    pub pad_token_id: u32,
    /// Place the classification marker after the content (XLNet pattern)
    /// instead of before it (BERT pattern).
    #[serde(default)]
    pub cls_at_end: bool,
    /// Insert two separators between the spans (RoBERTa pattern).
    #[serde(default)]
    pub extra_separator: bool,
    /// Insert the padding block before the content instead of after it.
    #[serde(default)]
    pub pad_on_left: bool,
    #[serde(default)]
    pub segment_ids: SegmentIds,
    pub label_mode: LabelMode,
}

impl EncoderConfig {
    /// BERT-style layout: `[CLS]`/`[SEP]` markers, single separator,
    /// right padding with id 0.
    pub fn bert(max_seq_length: usize, label_mode: LabelMode) -> Self {
        Self {
            max_seq_length,
            cls_token: "[CLS]".to_string(),
            sep_token: "[SEP]".to_string(),
            pad_token_id: 0,
            cls_at_end: false,
            extra_separator: false,
            pad_on_left: false,
            segment_ids: SegmentIds::default(),
            label_mode,
        }
    }

    /// RoBERTa-style layout: `<s>`/`</s>` markers, an extra separator
    /// between the spans, right padding with id 1.
    pub fn roberta(max_seq_length: usize, label_mode: LabelMode) -> Self {
        Self {
            max_seq_length,
            cls_token: "<s>".to_string(),
            sep_token: "</s>".to_string(),
            pad_token_id: 1,
            cls_at_end: false,
            extra_separator: true,
            pad_on_left: false,
            segment_ids: SegmentIds::default(),
            label_mode,
        }
    }

    /// Special-token slots reserved for pair input
    /// (`[CLS] a [SEP] b [SEP]`, plus one with `extra_separator`).
    pub fn reserved_for_pair(&self) -> usize {
        if self.extra_separator { 4 } else { 3 }
    }

    /// Special-token slots reserved for single-sentence input.
    pub fn reserved_for_single(&self) -> usize {
        if self.extra_separator { 3 } else { 2 }
    }

    /// Check the configuration for internal consistency.
    pub fn validate(&self) -> Result<()> {
        if self.max_seq_length <= self.reserved_for_pair() {
            return Err(PremiseError::Configuration(format!(
                "max_seq_length {} leaves no room for content after {} reserved special-token slots",
                self.max_seq_length,
                self.reserved_for_pair()
            )));
        }
        if self.cls_token.is_empty() || self.sep_token.is_empty() {
            return Err(PremiseError::Configuration(
                "cls_token and sep_token must be non-empty".to_string(),
            ));
        }
        // Deserialized configs bypass LabelSet::new validation
        if let LabelMode::Classification(label_set) = &self.label_mode {
            if label_set.is_empty() {
                return Err(PremiseError::Configuration(
                    "classification label set must not be empty".to_string(),
                ));
            }
        }
        Ok(())
    }
}

/// Policy for per-example data errors during batch encoding.
///
/// The choice is explicit at every call site; there is no default. Under
/// either policy an [`InvariantViolation`](PremiseError::InvariantViolation)
/// aborts the whole batch, since it signals a defect rather than bad data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidExamplePolicy {
    /// Abort the batch on the first unencodable example.
    Fail,
    /// Drop unencodable examples with a warning and keep going; the
    /// survivors keep their input order.
    Skip,
}

/// Converts [`Example`] records into fixed-length [`EncodedFeature`]s.
///
/// Holds no mutable state; every call is independent, so a corpus may be
/// encoded from multiple threads (see `encode_all_parallel` with the
/// `parallel` feature).
pub struct FeatureEncoder {
    config: EncoderConfig,
    tokenizer: Arc<dyn SubwordTokenizer>,
}

impl std::fmt::Debug for FeatureEncoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FeatureEncoder")
            .field("config", &self.config)
            .field("tokenizer", &"Arc<dyn SubwordTokenizer>")
            .finish()
    }
}

impl FeatureEncoder {
    /// Create an encoder, validating the configuration once.
    pub fn new(config: EncoderConfig, tokenizer: Arc<dyn SubwordTokenizer>) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, tokenizer })
    }

    /// The validated configuration.
    pub fn config(&self) -> &EncoderConfig {
        &self.config
    }

    /// Encode one example into a fixed-length feature record.
    ///
    /// All three output sequences have length exactly
    /// `config.max_seq_length`; content beyond the budget is truncated
    /// (longer span first, ties shrink the second span).
    pub fn encode(&self, example: &Example) -> Result<EncodedFeature> {
        let cfg = &self.config;
        let tokens_a = self.tokenizer.tokenize(&example.text_a)?;

        let before = tokens_a.len();
        let (tokens_a, tokens_b, before) = match &example.text_b {
            Some(text_b) => {
                let tokens_b = self.tokenizer.tokenize(text_b)?;
                let before = before + tokens_b.len();
                let budget = cfg.max_seq_length - cfg.reserved_for_pair();
                let (a, b) = truncate::truncate_pair(tokens_a, tokens_b, budget);
                (a, Some(b), before)
            }
            None => {
                let budget = cfg.max_seq_length - cfg.reserved_for_single();
                (truncate::truncate_single(tokens_a, budget), None, before)
            }
        };
        let after = tokens_a.len() + tokens_b.as_ref().map_or(0, Vec::len);
        if after < before {
            metrics::counter!(telemetry::EXAMPLES_TRUNCATED_TOTAL).increment(1);
        }

        let (tokens, mut segment_ids) = self.assemble(tokens_a, tokens_b);
        let mut input_ids = self.tokenizer.tokens_to_ids(&tokens)?;
        let mut attention_mask = vec![1u8; input_ids.len()];

        // Pad all three sequences out to the fixed length.
        let pad_len = cfg.max_seq_length.saturating_sub(input_ids.len());
        if cfg.pad_on_left {
            let mut padded_ids = vec![cfg.pad_token_id; pad_len];
            padded_ids.append(&mut input_ids);
            input_ids = padded_ids;

            let mut padded_mask = vec![0u8; pad_len];
            padded_mask.append(&mut attention_mask);
            attention_mask = padded_mask;

            let mut padded_segments = vec![cfg.segment_ids.pad; pad_len];
            padded_segments.append(&mut segment_ids);
            segment_ids = padded_segments;
        } else {
            input_ids.resize(input_ids.len() + pad_len, cfg.pad_token_id);
            attention_mask.resize(attention_mask.len() + pad_len, 0);
            segment_ids.resize(segment_ids.len() + pad_len, cfg.segment_ids.pad);
        }

        // Unconditional postcondition; a mismatch here is a defect in the
        // layout logic or a tokenizer returning the wrong id count.
        let len = cfg.max_seq_length;
        if input_ids.len() != len || attention_mask.len() != len || segment_ids.len() != len {
            return Err(PremiseError::InvariantViolation(format!(
                "example {}: got lengths ids={} mask={} segments={}, expected {}",
                example.guid,
                input_ids.len(),
                attention_mask.len(),
                segment_ids.len(),
                len
            )));
        }

        let label = self.resolve_label(example)?;
        metrics::counter!(telemetry::EXAMPLES_ENCODED_TOTAL).increment(1);

        Ok(EncodedFeature {
            input_ids,
            attention_mask,
            segment_ids,
            label,
        })
    }

    /// Encode a corpus, resolving per-example errors via `policy`.
    ///
    /// Output order matches input order. Under
    /// [`InvalidExamplePolicy::Skip`] the offending examples are dropped
    /// with a warning; any non-data error still aborts.
    pub fn encode_all(
        &self,
        examples: &[Example],
        policy: InvalidExamplePolicy,
    ) -> Result<Vec<EncodedFeature>> {
        let results = examples.iter().map(|ex| (ex, self.encode(ex)));
        self.collect_features(examples.len(), results, policy)
    }

    /// Encode a corpus across worker threads.
    ///
    /// Same contract as [`encode_all`](Self::encode_all): output order
    /// matches input order, and the skip policy is applied in input order
    /// after all examples have been encoded.
    #[cfg(feature = "parallel")]
    pub fn encode_all_parallel(
        &self,
        examples: &[Example],
        policy: InvalidExamplePolicy,
    ) -> Result<Vec<EncodedFeature>> {
        use rayon::prelude::*;

        let results: Vec<Result<EncodedFeature>> =
            examples.par_iter().map(|ex| self.encode(ex)).collect();
        self.collect_features(examples.len(), examples.iter().zip(results), policy)
    }

    fn collect_features<'a>(
        &self,
        total: usize,
        results: impl Iterator<Item = (&'a Example, Result<EncodedFeature>)>,
        policy: InvalidExamplePolicy,
    ) -> Result<Vec<EncodedFeature>> {
        let mut features = Vec::with_capacity(total);
        let mut skipped = 0usize;
        for (example, result) in results {
            match result {
                Ok(feature) => features.push(feature),
                Err(err) if policy == InvalidExamplePolicy::Skip && err.is_per_example() => {
                    warn!(guid = %example.guid, error = %err, "skipping unencodable example");
                    metrics::counter!(telemetry::EXAMPLES_SKIPPED_TOTAL).increment(1);
                    skipped += 1;
                }
                Err(err) => return Err(err),
            }
        }
        if skipped > 0 {
            info!(encoded = features.len(), skipped, "encoded corpus with skips");
        }
        Ok(features)
    }

    /// Lay out content tokens and separators, returning the token sequence
    /// and its parallel segment-id sequence.
    fn assemble(
        &self,
        tokens_a: Vec<String>,
        tokens_b: Option<Vec<String>>,
    ) -> (Vec<String>, Vec<u32>) {
        let cfg = &self.config;

        let mut tokens = tokens_a;
        tokens.push(cfg.sep_token.clone());
        if cfg.extra_separator {
            tokens.push(cfg.sep_token.clone());
        }
        let mut segment_ids = vec![cfg.segment_ids.first; tokens.len()];

        if let Some(tokens_b) = tokens_b {
            let span_len = tokens_b.len() + 1;
            tokens.extend(tokens_b);
            tokens.push(cfg.sep_token.clone());
            segment_ids.extend(std::iter::repeat_n(cfg.segment_ids.second, span_len));
        }

        if cfg.cls_at_end {
            tokens.push(cfg.cls_token.clone());
            segment_ids.push(cfg.segment_ids.cls);
        } else {
            tokens.insert(0, cfg.cls_token.clone());
            segment_ids.insert(0, cfg.segment_ids.cls);
        }

        (tokens, segment_ids)
    }

    fn resolve_label(&self, example: &Example) -> Result<LabelId> {
        match &self.config.label_mode {
            LabelMode::Classification(label_set) => {
                let label = example.label.as_deref().ok_or_else(|| {
                    PremiseError::UnknownLabel {
                        label: "<missing>".to_string(),
                        expected: label_set.describe(),
                    }
                })?;
                let index =
                    label_set
                        .index_of(label)
                        .ok_or_else(|| PremiseError::UnknownLabel {
                            label: label.to_string(),
                            expected: label_set.describe(),
                        })?;
                Ok(LabelId::Class(index))
            }
            LabelMode::Regression => {
                let label = example.label.as_deref().ok_or_else(|| {
                    PremiseError::LabelParse {
                        label: "<missing>".to_string(),
                        reason: "example has no label".to_string(),
                    }
                })?;
                let value: f32 =
                    label
                        .trim()
                        .parse()
                        .map_err(|e: std::num::ParseFloatError| PremiseError::LabelParse {
                            label: label.to_string(),
                            reason: e.to_string(),
                        })?;
                Ok(LabelId::Score(value))
            }
        }
    }
}
