//! TSV dataset readers producing raw [`Example`](crate::Example) records.
//!
//! GLUE-style tab-separated splits: RTE for the target task, MNLI as the
//! auxiliary large-scale NLI corpus. Readers are line-oriented and keep no
//! state; each returns examples in file order with split-prefixed guids
//! ("train-0", "dev-3", ...).

pub mod mnli;
pub mod rte;

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{PremiseError, Result};

/// Read a TSV file into trimmed, non-empty lines.
fn read_lines(path: &Path) -> Result<Vec<String>> {
    let file = File::open(path)
        .map_err(|e| PremiseError::Data(format!("failed to open {}: {e}", path.display())))?;
    let mut lines = Vec::new();
    for line in BufReader::new(file).lines() {
        let line =
            line.map_err(|e| PremiseError::Data(format!("failed to read {}: {e}", path.display())))?;
        if line.trim().is_empty() {
            continue;
        }
        lines.push(line);
    }
    Ok(lines)
}

/// Split a row into tab-separated fields.
fn fields(line: &str) -> Vec<&str> {
    line.split('\t').collect()
}
