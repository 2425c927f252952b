//! RTE (GLUE) split readers and per-class k-shot sampling.
//!
//! The train and dev splits share the GLUE layout: a header row, then
//! `index \t premise \t hypothesis \t label`. Any label other than
//! "entailment" collapses to "not_entailment", so the task is binary even
//! when the source file carries a 3-way annotation. The test split is a
//! headerless 3-column file (`code \t premise \t hypothesis`) where code
//! "1" means entailment.

use std::path::Path;

use rand::SeedableRng;
use rand::seq::SliceRandom;
use tracing::info;

use super::{fields, read_lines};
use crate::error::{PremiseError, Result};
use crate::types::Example;

/// The positive RTE label.
pub const ENTAILMENT: &str = "entailment";
/// The collapsed negative RTE label.
pub const NOT_ENTAILMENT: &str = "not_entailment";

/// Read the training split.
pub fn read_train(path: &Path) -> Result<Vec<Example>> {
    read_labeled_split(path, "train")
}

/// Read the dev split.
pub fn read_dev(path: &Path) -> Result<Vec<Example>> {
    read_labeled_split(path, "dev")
}

fn read_labeled_split(path: &Path, split: &str) -> Result<Vec<Example>> {
    let lines = read_lines(path)?;
    let mut examples = Vec::new();
    // Row 0 is the header
    for (row, line) in lines.iter().enumerate().skip(1) {
        let cols = fields(line);
        if cols.len() < 4 {
            return Err(PremiseError::Data(format!(
                "{}: row {} has {} columns, expected at least 4",
                path.display(),
                row,
                cols.len()
            )));
        }
        let label = if cols[3].trim() == ENTAILMENT {
            ENTAILMENT
        } else {
            NOT_ENTAILMENT
        };
        examples.push(Example::pair(
            format!("{split}-{}", row - 1),
            cols[1].trim(),
            cols[2].trim(),
            label,
        ));
    }
    metrics::counter!(crate::telemetry::ROWS_READ_TOTAL, "split" => format!("rte-{split}"))
        .increment(examples.len() as u64);
    info!(path = %path.display(), count = examples.len(), "loaded RTE {split} split");
    Ok(examples)
}

/// Read the headerless 3-column test split.
///
/// Rows with any other column count are skipped, matching the source
/// file's mixed layout. Guids number the accepted rows only.
pub fn read_test(path: &Path) -> Result<Vec<Example>> {
    let lines = read_lines(path)?;
    let mut examples = Vec::new();
    for line in &lines {
        let cols = fields(line);
        if cols.len() != 3 {
            continue;
        }
        let label = if cols[0].trim() == "1" {
            ENTAILMENT
        } else {
            NOT_ENTAILMENT
        };
        examples.push(Example::pair(
            format!("test-{}", examples.len()),
            cols[1].trim(),
            cols[2].trim(),
            label,
        ));
    }
    metrics::counter!(crate::telemetry::ROWS_READ_TOTAL, "split" => "rte-test")
        .increment(examples.len() as u64);
    info!(path = %path.display(), count = examples.len(), "loaded RTE test split");
    Ok(examples)
}

/// Sample exactly `k` entailment and `k` non-entailment examples.
///
/// Sampling is without replacement and seeded, so a (corpus, k, seed)
/// triple always yields the same support set. Entailment examples come
/// first in the returned vector.
pub fn sample_k_shot(examples: &[Example], k: usize, seed: u64) -> Result<Vec<Example>> {
    let (entail, non_entail): (Vec<&Example>, Vec<&Example>) = examples
        .iter()
        .partition(|ex| ex.label.as_deref() == Some(ENTAILMENT));

    if k > entail.len() || k > non_entail.len() {
        return Err(PremiseError::Data(format!(
            "cannot sample {k} per class: corpus has {} entailment and {} non-entailment examples",
            entail.len(),
            non_entail.len()
        )));
    }

    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
    let mut sampled: Vec<Example> = entail
        .choose_multiple(&mut rng, k)
        .map(|ex| (*ex).clone())
        .collect();
    sampled.extend(
        non_entail
            .choose_multiple(&mut rng, k)
            .map(|ex| (*ex).clone()),
    );

    info!(k, seed, total = sampled.len(), "sampled k-shot support set");
    Ok(sampled)
}
