//! Truncation rules for fitting token sequences into a fixed budget.

/// Jointly truncate a sequence pair to at most `budget` total tokens.
///
/// One token is removed from the end of the currently longer sequence per
/// iteration; on length ties the second sequence shrinks. The longer
/// sequence always loses tokens first, so a short sequence keeps its
/// content intact.
///
/// Pure: returns new vectors rather than mutating shared state.
pub(crate) fn truncate_pair(
    mut tokens_a: Vec<String>,
    mut tokens_b: Vec<String>,
    budget: usize,
) -> (Vec<String>, Vec<String>) {
    while tokens_a.len() + tokens_b.len() > budget {
        if tokens_a.len() > tokens_b.len() {
            tokens_a.pop();
        } else {
            tokens_b.pop();
        }
    }
    (tokens_a, tokens_b)
}

/// Truncate a single sequence to a left-anchored prefix of `budget` tokens.
pub(crate) fn truncate_single(mut tokens: Vec<String>, budget: usize) -> Vec<String> {
    tokens.truncate(budget);
    tokens
}
