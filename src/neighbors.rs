//! Gram-set neighbor retrieval for support-set expansion.
//!
//! Scores a large source corpus against a small k-shot target set using
//! word-overlap precision, pulling the nearest source examples in for
//! intermediate fine-tuning. Purely lexical: unigrams from both spans plus
//! ordered cross bigrams between them.

use std::collections::HashSet;

use tracing::debug;

use crate::types::Example;

/// The lexical fingerprint of an example: unigrams of both text spans and
/// cross bigrams `a||b` / `b||a` for every word pair across the spans.
pub fn gram_set(example: &Example) -> HashSet<String> {
    let words_a: Vec<&str> = example.text_a.split_whitespace().collect();
    let words_b: Vec<&str> = example
        .text_b
        .as_deref()
        .map(|t| t.split_whitespace().collect())
        .unwrap_or_default();

    let mut grams: HashSet<String> = words_a.iter().map(|w| (*w).to_string()).collect();
    grams.extend(words_b.iter().map(|w| (*w).to_string()));
    for word_a in &words_a {
        for word_b in &words_b {
            grams.insert(format!("{word_a}||{word_b}"));
            grams.insert(format!("{word_b}||{word_a}"));
        }
    }
    grams
}

/// For each target, the `top_n` source examples with the highest overlap
/// precision `|target ∩ source| / |source|`.
///
/// Per-target neighbor lists are concatenated in target order; score ties
/// keep source order. Sources with an empty gram set score zero.
pub fn retrieve_neighbors(targets: &[Example], sources: &[Example], top_n: usize) -> Vec<Example> {
    let source_grams: Vec<HashSet<String>> = sources.iter().map(gram_set).collect();

    let mut neighbors = Vec::with_capacity(targets.len() * top_n.min(sources.len()));
    for target in targets {
        let target_grams = gram_set(target);

        let mut scored: Vec<(f64, usize)> = source_grams
            .iter()
            .enumerate()
            .map(|(index, grams)| {
                let score = if grams.is_empty() {
                    0.0
                } else {
                    let overlap = target_grams.intersection(grams).count();
                    overlap as f64 / grams.len() as f64
                };
                (score, index)
            })
            .collect();
        // Stable sort: equal scores keep source order
        scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));

        neighbors.extend(
            scored
                .iter()
                .take(top_n)
                .map(|&(_, index)| sources[index].clone()),
        );
    }
    debug!(
        targets = targets.len(),
        retrieved = neighbors.len(),
        "neighbor retrieval complete"
    );
    neighbors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gram_set_contains_unigrams_and_cross_bigrams() {
        let ex = Example::pair("t-0", "a b", "c", "entailment");
        let grams = gram_set(&ex);
        for gram in ["a", "b", "c", "a||c", "c||a", "b||c", "c||b"] {
            assert!(grams.contains(gram), "missing {gram}");
        }
        assert_eq!(grams.len(), 7);
    }

    #[test]
    fn gram_set_of_single_sentence_has_no_bigrams() {
        let ex = Example::single("t-0", "a b", "positive");
        let grams = gram_set(&ex);
        assert_eq!(grams.len(), 2);
        assert!(grams.contains("a"));
    }

    #[test]
    fn retrieval_prefers_high_precision_sources() {
        let targets = vec![Example::pair("t-0", "cats chase mice", "mice flee", "entailment")];
        let sources = vec![
            // no word overlap with the target
            Example::pair("s-0", "stocks fell sharply", "markets dropped", "neutral"),
            // full overlap, small gram set
            Example::pair("s-1", "cats chase", "mice", "entailment"),
            // partial overlap diluted by extra words
            Example::pair("s-2", "cats sleep all day long", "dogs bark", "contradiction"),
        ];

        let neighbors = retrieve_neighbors(&targets, &sources, 2);
        assert_eq!(neighbors.len(), 2);
        assert_eq!(neighbors[0].guid, "s-1");
        assert_ne!(neighbors[1].guid, "s-1");
    }

    #[test]
    fn retrieval_concatenates_per_target_lists() {
        let targets = vec![
            Example::pair("t-0", "alpha", "beta", "entailment"),
            Example::pair("t-1", "gamma", "delta", "entailment"),
        ];
        let sources = vec![
            Example::pair("s-0", "alpha", "beta", "entailment"),
            Example::pair("s-1", "gamma", "delta", "entailment"),
        ];

        let neighbors = retrieve_neighbors(&targets, &sources, 1);
        assert_eq!(neighbors.len(), 2);
        assert_eq!(neighbors[0].guid, "s-0");
        assert_eq!(neighbors[1].guid, "s-1");
    }

    #[test]
    fn score_ties_keep_source_order() {
        let targets = vec![Example::pair("t-0", "x", "y", "entailment")];
        let sources = vec![
            Example::pair("s-0", "unrelated", "words", "neutral"),
            Example::pair("s-1", "other", "tokens", "neutral"),
        ];

        let neighbors = retrieve_neighbors(&targets, &sources, 2);
        assert_eq!(neighbors[0].guid, "s-0");
        assert_eq!(neighbors[1].guid, "s-1");
    }

    #[test]
    fn top_n_larger_than_corpus_returns_everything() {
        let targets = vec![Example::pair("t-0", "x", "y", "entailment")];
        let sources = vec![Example::pair("s-0", "x", "y", "entailment")];
        let neighbors = retrieve_neighbors(&targets, &sources, 10);
        assert_eq!(neighbors.len(), 1);
    }
}
