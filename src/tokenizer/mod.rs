//! Subword tokenizer capability.
//!
//! The feature encoder needs exactly two operations from a tokenizer:
//! splitting raw text into subword token strings and mapping token strings
//! to vocabulary ids. The [`SubwordTokenizer`] trait pins that seam down so
//! the encoder stays independent of which pretrained-model family backs it.

#[cfg(feature = "huggingface")]
mod hub;
mod whitespace;

#[cfg(feature = "huggingface")]
pub use hub::HubTokenizer;
pub use whitespace::WhitespaceTokenizer;

use crate::error::Result;

/// Trait for tokenizer implementations.
///
/// Implementations must be deterministic and side-effect free: the same
/// text always yields the same tokens, and `tokens_to_ids` is total over
/// the vocabulary plus the configured special tokens.
pub trait SubwordTokenizer: Send + Sync {
    /// Split raw text into subword token strings.
    fn tokenize(&self, text: &str) -> Result<Vec<String>>;

    /// Map token strings (including special tokens) to vocabulary ids.
    fn tokens_to_ids(&self, tokens: &[String]) -> Result<Vec<u32>>;
}
