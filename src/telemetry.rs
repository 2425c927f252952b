//! Telemetry metric name constants.
//!
//! Centralised metric names for premise operations. Consumers install
//! their own `metrics` recorder (e.g. prometheus, statsd); without a
//! recorder installed, all metric calls are no-ops.
//!
//! All metrics are prefixed with `premise_`; counters end in `_total`.

/// Examples successfully encoded into features.
pub const EXAMPLES_ENCODED_TOTAL: &str = "premise_examples_encoded_total";

/// Examples dropped by `InvalidExamplePolicy::Skip`.
pub const EXAMPLES_SKIPPED_TOTAL: &str = "premise_examples_skipped_total";

/// Examples whose content lost tokens to the sequence-length budget.
pub const EXAMPLES_TRUNCATED_TOTAL: &str = "premise_examples_truncated_total";

/// Example rows read from TSV splits.
///
/// Labels: `split` ("rte-train" | "rte-dev" | "rte-test" | "mnli-train").
pub const ROWS_READ_TOTAL: &str = "premise_rows_read_total";
