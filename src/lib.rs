//! Premise - few-shot NLI experiment plumbing
//!
//! This crate provides the data path around a pretrained sequence
//! classifier for few-shot natural-language-inference experiments:
//! TSV dataset readers (RTE, MNLI), a deterministic [`FeatureEncoder`]
//! that turns raw text pairs into fixed-length token/mask/segment
//! records, lexical neighbor retrieval for support-set expansion, and
//! rule-based ensembling over two models' output probabilities. The
//! numeric model itself stays external; features leave this crate as
//! plain integer sequences and predictions enter it as score matrices.
//!
//! # Encoding Example
//!
//! ```rust
//! use std::sync::Arc;
//! use premise::{
//!     EncoderConfig, Example, FeatureEncoder, LabelMode, LabelSet, WhitespaceTokenizer,
//! };
//!
//! fn main() -> premise::Result<()> {
//!     let config = EncoderConfig::bert(32, LabelMode::Classification(LabelSet::two_way()));
//!     let encoder = FeatureEncoder::new(config, Arc::new(WhitespaceTokenizer::new()))?;
//!
//!     let example = Example::pair("dev-0", "the cat sat", "a cat exists", "entailment");
//!     let feature = encoder.encode(&example)?;
//!
//!     assert_eq!(feature.input_ids.len(), 32);
//!     assert_eq!(feature.real_token_count(), 9);
//!     Ok(())
//! }
//! ```
//!
//! # Ensemble Example
//!
//! ```rust
//! use premise::ensemble::{accuracy, ensemble_predictions, softmax_rows};
//!
//! fn main() -> premise::Result<()> {
//!     let probs_a = softmax_rows(&vec![vec![2.0, 0.5], vec![0.1, 0.9]]);
//!     let probs_b = softmax_rows(&vec![vec![1.5, 0.2], vec![3.0, 0.4]]);
//!
//!     let predictions = ensemble_predictions(&probs_a, &probs_b)?;
//!     let acc = accuracy(&predictions, &[0, 0])?;
//!     assert!(acc > 0.0);
//!     Ok(())
//! }
//! ```

pub mod dataset;
pub mod encoder;
pub mod ensemble;
pub mod error;
pub mod neighbors;
pub mod telemetry;
pub mod tokenizer;
pub mod types;

// Re-export main types at crate root
pub use encoder::{EncoderConfig, FeatureEncoder, InvalidExamplePolicy, LabelMode, SegmentIds};
pub use error::{PremiseError, Result};
pub use tokenizer::{SubwordTokenizer, WhitespaceTokenizer};
pub use types::{EncodedFeature, Example, LabelId, LabelSet};

// Re-export the hub-backed tokenizer when the feature is enabled
#[cfg(feature = "huggingface")]
pub use tokenizer::HubTokenizer;
