//! MNLI (GLUE) training-split reader.

use std::path::Path;

use tracing::info;

use super::{fields, read_lines};
use crate::error::{PremiseError, Result};
use crate::types::Example;

/// MNLI label strings in contract index order.
pub const LABELS: [&str; 3] = ["entailment", "neutral", "contradiction"];

/// Read the MNLI training split.
///
/// GLUE layout: header row, premise in column 8, hypothesis in column 9,
/// gold 3-way label in the last column.
pub fn read_train(path: &Path) -> Result<Vec<Example>> {
    let lines = read_lines(path)?;
    let mut examples = Vec::new();
    for (row, line) in lines.iter().enumerate().skip(1) {
        let cols = fields(line);
        if cols.len() < 10 {
            return Err(PremiseError::Data(format!(
                "{}: row {} has {} columns, expected at least 10",
                path.display(),
                row,
                cols.len()
            )));
        }
        let label = cols[cols.len() - 1].trim();
        examples.push(Example::pair(
            format!("train-{}", row - 1),
            cols[8].trim(),
            cols[9].trim(),
            label,
        ));
    }
    metrics::counter!(crate::telemetry::ROWS_READ_TOTAL, "split" => "mnli-train")
        .increment(examples.len() as u64);
    info!(path = %path.display(), count = examples.len(), "loaded MNLI train split");
    Ok(examples)
}
