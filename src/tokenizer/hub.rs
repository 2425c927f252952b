//! HuggingFace tokenizers implementation.

use std::path::Path;

use super::SubwordTokenizer;
use crate::error::{PremiseError, Result};

/// Subword tokenizer backed by a HuggingFace `tokenizer.json`.
///
/// Special tokens are never inserted by this type; the encoder owns the
/// layout, so text is always encoded bare.
pub struct HubTokenizer {
    inner: tokenizers::Tokenizer,
}

impl HubTokenizer {
    /// Load tokenizer from HuggingFace Hub.
    ///
    /// Downloads `tokenizer.json` if not cached locally.
    pub fn from_hub(repo_id: &str) -> Result<Self> {
        let api = hf_hub::api::sync::Api::new().map_err(|e| {
            PremiseError::Configuration(format!("Failed to initialize HF API: {}", e))
        })?;

        let repo = api.model(repo_id.to_string());

        let tokenizer_path = repo.get("tokenizer.json").map_err(|e| {
            PremiseError::Configuration(format!(
                "Failed to download tokenizer from {}: {}",
                repo_id, e
            ))
        })?;

        Self::from_file(&tokenizer_path)
    }

    /// Load tokenizer from a local `tokenizer.json`.
    pub fn from_file(path: &Path) -> Result<Self> {
        let inner = tokenizers::Tokenizer::from_file(path).map_err(|e| {
            PremiseError::Configuration(format!(
                "Failed to load tokenizer from {:?}: {}",
                path, e
            ))
        })?;

        Ok(Self { inner })
    }

    /// Vocabulary id of a single token, if present.
    ///
    /// Used to derive marker-token and padding ids from the checkpoint
    /// when building an encoder configuration.
    pub fn token_id(&self, token: &str) -> Option<u32> {
        self.inner.token_to_id(token)
    }
}

impl SubwordTokenizer for HubTokenizer {
    fn tokenize(&self, text: &str) -> Result<Vec<String>> {
        let encoding = self
            .inner
            .encode(text, false)
            .map_err(|e| PremiseError::Tokenizer(format!("Tokenization failed: {}", e)))?;

        Ok(encoding.get_tokens().to_vec())
    }

    fn tokens_to_ids(&self, tokens: &[String]) -> Result<Vec<u32>> {
        tokens
            .iter()
            .map(|token| {
                self.inner.token_to_id(token).ok_or_else(|| {
                    PremiseError::Tokenizer(format!("token '{token}' not in vocabulary"))
                })
            })
            .collect()
    }
}
