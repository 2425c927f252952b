//! Tests for the two-model ensembling rules and evaluation pipeline.

use premise::PremiseError;
use premise::ensemble::{
    accuracy, collapse_to_two_way, ensemble_predictions, softmax_rows, two_way_predictions,
};

#[test]
fn agreement_stands_regardless_of_confidence() {
    let probs_a = vec![vec![0.6, 0.4]];
    let probs_b = vec![vec![0.9, 0.1]];

    let predictions = ensemble_predictions(&probs_a, &probs_b).unwrap();
    assert_eq!(predictions, vec![0]);
}

#[test]
fn disagreement_goes_to_the_more_confident_model() {
    // Model A says entailment at 0.8; model B says not_entailment at 0.6
    let probs_a = vec![vec![0.8, 0.2]];
    let probs_b = vec![vec![0.4, 0.6]];
    assert_eq!(ensemble_predictions(&probs_a, &probs_b).unwrap(), vec![0]);

    // Flip the confidences and the prediction flips too
    let probs_a = vec![vec![0.6, 0.4]];
    let probs_b = vec![vec![0.2, 0.8]];
    assert_eq!(ensemble_predictions(&probs_a, &probs_b).unwrap(), vec![1]);
}

#[test]
fn confidence_tie_goes_to_the_second_model() {
    let probs_a = vec![vec![0.7, 0.3]];
    let probs_b = vec![vec![0.3, 0.7]];

    let predictions = ensemble_predictions(&probs_a, &probs_b).unwrap();
    assert_eq!(predictions, vec![1]);
}

#[test]
fn row_count_mismatch_is_rejected() {
    let probs_a = vec![vec![0.7, 0.3], vec![0.5, 0.5]];
    let probs_b = vec![vec![0.3, 0.7]];

    let err = ensemble_predictions(&probs_a, &probs_b).unwrap_err();
    assert!(matches!(err, PremiseError::Data(_)));
}

#[test]
fn three_way_logits_evaluate_on_the_binary_task() {
    // Rows: entailment, neutral, contradiction logits
    let logits = vec![
        vec![3.0, 0.5, -1.0], // clear entailment       -> 0
        vec![0.1, 2.0, 1.5],  // neutral wins            -> 1
        vec![-0.5, 0.0, 2.5], // contradiction wins      -> 1
    ];

    let collapsed = collapse_to_two_way(&logits).unwrap();
    let probs = softmax_rows(&collapsed);
    let predictions = two_way_predictions(&probs).unwrap();
    assert_eq!(predictions, vec![0, 1, 1]);

    let acc = accuracy(&predictions, &[0, 1, 0]).unwrap();
    assert!((acc - 2.0 / 3.0).abs() < 1e-12);
}

#[test]
fn ensemble_of_collapsed_and_binary_models() {
    // Model A is a 3-way head collapsed to binary; model B is binary
    let logits_a = vec![vec![2.0, 0.1, 0.4], vec![0.2, 1.8, 0.3]];
    let probs_a = softmax_rows(&collapse_to_two_way(&logits_a).unwrap());
    let probs_b = softmax_rows(&vec![vec![1.0, 0.0], vec![2.5, 0.5]]);

    let predictions = ensemble_predictions(&probs_a, &probs_b).unwrap();

    // Row 0: both pick entailment. Row 1: A picks 1 at ~0.83 softmax
    // confidence, B picks 0 at ~0.88, so B's confidence carries it.
    assert_eq!(predictions, vec![0, 0]);
}
