//! premise-ensemble — combine two models' stored logits and score them.
//!
//! Loads two JSON logit matrices (arrays of per-example rows, entailment
//! column first) plus a JSON array of gold binary labels, reports each
//! model's solo accuracy on the binary task, then the ensembled accuracy
//! under the higher-confidence-wins rule.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;
use tracing::info;

use premise::PremiseError;
use premise::ensemble::{
    ScoreMatrix, accuracy, collapse_to_two_way, ensemble_predictions, softmax_rows,
    two_way_predictions,
};

/// Ensemble evaluation tool
#[derive(Parser)]
#[command(name = "premise-ensemble")]
#[command(version)]
#[command(about = "Ensemble two models' logits and score against gold labels")]
struct Args {
    /// JSON file with model A's logit rows
    #[arg(long)]
    logits_a: PathBuf,

    /// JSON file with model B's logit rows
    #[arg(long)]
    logits_b: PathBuf,

    /// JSON array of gold binary labels (0 = entailment)
    #[arg(long)]
    gold: PathBuf,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialise tracing (default: info for batch tools; override with RUST_LOG).
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let gold: Vec<usize> = load_json(&args.gold)?;
    let probs_a = to_binary_probabilities(&load_json::<ScoreMatrix>(&args.logits_a)?)?;
    let probs_b = to_binary_probabilities(&load_json::<ScoreMatrix>(&args.logits_b)?)?;

    let solo_a = accuracy(&two_way_predictions(&probs_a)?, &gold)?;
    let solo_b = accuracy(&two_way_predictions(&probs_b)?, &gold)?;
    info!(model = "a", accuracy = solo_a, "solo accuracy");
    info!(model = "b", accuracy = solo_b, "solo accuracy");
    println!("model a accuracy: {solo_a:.4}");
    println!("model b accuracy: {solo_b:.4}");

    let combined = ensemble_predictions(&probs_a, &probs_b)?;
    let ensembled = accuracy(&combined, &gold)?;
    println!("ensemble accuracy: {ensembled:.4}");

    Ok(())
}

fn load_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, PremiseError> {
    let content = fs::read_to_string(path)
        .map_err(|e| PremiseError::Data(format!("failed to read {}: {e}", path.display())))?;
    Ok(serde_json::from_str(&content)?)
}

/// Collapse an n-way logit matrix to binary probabilities.
///
/// Matrices wider than two columns fold the non-entailment columns into
/// their max before the softmax, so a 3-way MNLI head and a binary head
/// land in the same label space.
fn to_binary_probabilities(logits: &ScoreMatrix) -> Result<ScoreMatrix, PremiseError> {
    let needs_collapse = logits.iter().any(|row| row.len() > 2);
    let binary = if needs_collapse {
        collapse_to_two_way(logits)?
    } else {
        logits.clone()
    };
    Ok(softmax_rows(&binary))
}
