//! Softmax, prediction collapsing, and rule-based two-model ensembling.
//!
//! Works on plain row-major score matrices (`Vec<Vec<f32>>`); logits enter
//! from JSON or from an external inference loop, no tensor types involved.
//!
//! Label-space convention throughout: index 0 is "entailment". A 3-way
//! matrix collapses to the binary task by folding the non-entailment
//! columns into their max.

use crate::error::{PremiseError, Result};

/// A dense row-major matrix of per-example logits or probabilities.
pub type ScoreMatrix = Vec<Vec<f32>>;

/// Numerically stable softmax over one row.
pub fn softmax(logits: &[f32]) -> Vec<f32> {
    let max = logits.iter().cloned().fold(f32::NEG_INFINITY, f32::max);
    let exps: Vec<f32> = logits.iter().map(|x| (x - max).exp()).collect();
    let sum: f32 = exps.iter().sum();
    exps.iter().map(|x| x / sum).collect()
}

/// Softmax applied to every row of a matrix.
pub fn softmax_rows(matrix: &ScoreMatrix) -> ScoreMatrix {
    matrix.iter().map(|row| softmax(row)).collect()
}

/// Index of the row maximum; first occurrence wins on ties.
pub fn argmax(row: &[f32]) -> Option<usize> {
    let mut best: Option<(usize, f32)> = None;
    for (i, &value) in row.iter().enumerate() {
        match best {
            Some((_, best_value)) if value <= best_value => {}
            _ => best = Some((i, value)),
        }
    }
    best.map(|(i, _)| i)
}

/// Collapse an n-way matrix (entailment first) to two columns by folding
/// columns 1.. into their max.
pub fn collapse_to_two_way(matrix: &ScoreMatrix) -> Result<ScoreMatrix> {
    matrix
        .iter()
        .enumerate()
        .map(|(row_index, row)| {
            if row.len() < 2 {
                return Err(PremiseError::Data(format!(
                    "row {row_index} has {} columns, expected at least 2",
                    row.len()
                )));
            }
            let rest_max = row[1..].iter().cloned().fold(f32::NEG_INFINITY, f32::max);
            Ok(vec![row[0], rest_max])
        })
        .collect()
}

/// Map an n-way predicted index to the binary label space: entailment
/// (index 0) stays 0, every other class becomes 1.
pub fn to_two_way(prediction: usize) -> usize {
    usize::from(prediction != 0)
}

/// Per-row argmax collapsed to the binary label space.
pub fn two_way_predictions(probs: &ScoreMatrix) -> Result<Vec<usize>> {
    probs
        .iter()
        .enumerate()
        .map(|(row_index, row)| {
            argmax(row)
                .map(to_two_way)
                .ok_or_else(|| PremiseError::Data(format!("row {row_index} is empty")))
        })
        .collect()
}

/// Combine two models' probability matrices row by row.
///
/// When the models agree on the argmax, that prediction stands. On
/// disagreement, the model whose winning probability is strictly higher
/// wins; a confidence tie goes to the second model.
pub fn ensemble_predictions(probs_a: &ScoreMatrix, probs_b: &ScoreMatrix) -> Result<Vec<usize>> {
    if probs_a.len() != probs_b.len() {
        return Err(PremiseError::Data(format!(
            "matrices disagree on example count: {} vs {}",
            probs_a.len(),
            probs_b.len()
        )));
    }

    probs_a
        .iter()
        .zip(probs_b)
        .enumerate()
        .map(|(row_index, (row_a, row_b))| {
            let pred_a = argmax(row_a)
                .ok_or_else(|| PremiseError::Data(format!("model A row {row_index} is empty")))?;
            let pred_b = argmax(row_b)
                .ok_or_else(|| PremiseError::Data(format!("model B row {row_index} is empty")))?;
            if pred_a == pred_b || row_a[pred_a] > row_b[pred_b] {
                Ok(pred_a)
            } else {
                Ok(pred_b)
            }
        })
        .collect()
}

/// Fraction of predictions matching the gold labels.
pub fn accuracy(predictions: &[usize], gold: &[usize]) -> Result<f64> {
    if predictions.len() != gold.len() {
        return Err(PremiseError::Data(format!(
            "prediction count {} != gold count {}",
            predictions.len(),
            gold.len()
        )));
    }
    if predictions.is_empty() {
        return Err(PremiseError::Data(
            "cannot compute accuracy over zero examples".to_string(),
        ));
    }
    let hits = predictions
        .iter()
        .zip(gold)
        .filter(|(p, g)| p == g)
        .count();
    Ok(hits as f64 / predictions.len() as f64)
}
