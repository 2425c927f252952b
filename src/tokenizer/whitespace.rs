//! Deterministic whitespace tokenizer.

use std::collections::HashMap;

use super::SubwordTokenizer;
use crate::error::Result;

/// Ids below this value are reserved for registered special tokens.
const SPECIAL_ID_CEILING: u32 = 100;

/// A whitespace-splitting tokenizer with a hash-derived stable vocabulary.
///
/// No subword merges, no casing changes, no vocabulary file. Word ids come
/// from an FNV-1a hash folded into a fixed range, so encoding is
/// reproducible across runs and platforms. Intended as an offline fallback
/// and as a deterministic test double; real experiments should use
/// [`HubTokenizer`](crate::tokenizer::HubTokenizer).
#[derive(Debug, Clone, Default)]
pub struct WhitespaceTokenizer {
    specials: HashMap<String, u32>,
}

impl WhitespaceTokenizer {
    /// Create a tokenizer with no registered special tokens.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a special token with a fixed id.
    ///
    /// Lookups check registered specials before hashing, so marker tokens
    /// like `[CLS]` get stable, well-known ids. Ids below
    /// `SPECIAL_ID_CEILING` never collide with hashed word ids.
    pub fn with_special(mut self, token: impl Into<String>, id: u32) -> Self {
        self.specials.insert(token.into(), id);
        self
    }

    /// Id for a single token string.
    pub fn id_of(&self, token: &str) -> u32 {
        if let Some(&id) = self.specials.get(token) {
            return id;
        }
        SPECIAL_ID_CEILING + fnv1a(token) % 100_000
    }
}

/// 32-bit FNV-1a. `DefaultHasher` is not guaranteed stable across std
/// releases, and id stability is part of this tokenizer's contract.
fn fnv1a(token: &str) -> u32 {
    let mut hash: u32 = 0x811c_9dc5;
    for byte in token.bytes() {
        hash ^= u32::from(byte);
        hash = hash.wrapping_mul(0x0100_0193);
    }
    hash
}

impl SubwordTokenizer for WhitespaceTokenizer {
    fn tokenize(&self, text: &str) -> Result<Vec<String>> {
        Ok(text.split_whitespace().map(str::to_string).collect())
    }

    fn tokens_to_ids(&self, tokens: &[String]) -> Result<Vec<u32>> {
        Ok(tokens.iter().map(|t| self.id_of(t)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenize_splits_on_whitespace() {
        let tokenizer = WhitespaceTokenizer::new();
        let tokens = tokenizer.tokenize("the cat  sat\tdown").unwrap();
        assert_eq!(tokens, vec!["the", "cat", "sat", "down"]);
    }

    #[test]
    fn tokenize_empty_text_is_empty() {
        let tokenizer = WhitespaceTokenizer::new();
        assert!(tokenizer.tokenize("").unwrap().is_empty());
        assert!(tokenizer.tokenize("   ").unwrap().is_empty());
    }

    #[test]
    fn ids_are_deterministic() {
        let tokenizer = WhitespaceTokenizer::new();
        let tokens = tokenizer.tokenize("premise and hypothesis").unwrap();
        let first = tokenizer.tokens_to_ids(&tokens).unwrap();
        let second = tokenizer.tokens_to_ids(&tokens).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn special_tokens_get_reserved_ids() {
        let tokenizer = WhitespaceTokenizer::new()
            .with_special("[CLS]", 0)
            .with_special("[SEP]", 2);
        assert_eq!(tokenizer.id_of("[CLS]"), 0);
        assert_eq!(tokenizer.id_of("[SEP]"), 2);
        // Hashed ids never collide with the reserved range
        assert!(tokenizer.id_of("cat") >= SPECIAL_ID_CEILING);
    }

    #[test]
    fn distinct_words_usually_get_distinct_ids() {
        let tokenizer = WhitespaceTokenizer::new();
        assert_ne!(tokenizer.id_of("cat"), tokenizer.id_of("dog"));
    }
}
