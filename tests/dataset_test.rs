//! Tests for the TSV dataset readers and k-shot sampling.

use std::fs;
use std::path::PathBuf;

use premise::PremiseError;
use premise::dataset::{mnli, rte};

fn write_fixture(dir: &tempfile::TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn rte_train_reader_collapses_labels_to_binary() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_fixture(
        &dir,
        "train.tsv",
        "index\tsentence1\tsentence2\tlabel\n\
         0\tA cat sat.\tA cat exists.\tentailment\n\
         1\tDogs bark.\tCats meow.\tnot_entailment\n\
         2\tBirds fly.\tFish swim.\tneutral\n",
    );

    let examples = rte::read_train(&path).unwrap();

    assert_eq!(examples.len(), 3);
    assert_eq!(examples[0].guid, "train-0");
    assert_eq!(examples[0].text_a, "A cat sat.");
    assert_eq!(examples[0].text_b.as_deref(), Some("A cat exists."));
    assert_eq!(examples[0].label.as_deref(), Some("entailment"));
    // Any non-entailment annotation collapses
    assert_eq!(examples[2].label.as_deref(), Some("not_entailment"));
}

#[test]
fn rte_dev_reader_uses_dev_guids() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_fixture(
        &dir,
        "dev.tsv",
        "index\tsentence1\tsentence2\tlabel\n\
         0\tA cat sat.\tA cat exists.\tentailment\n",
    );

    let examples = rte::read_dev(&path).unwrap();
    assert_eq!(examples.len(), 1);
    assert_eq!(examples[0].guid, "dev-0");
}

#[test]
fn rte_reader_rejects_short_rows() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_fixture(
        &dir,
        "train.tsv",
        "index\tsentence1\tsentence2\tlabel\n\
         0\tA cat sat.\tentailment\n",
    );

    let err = rte::read_train(&path).unwrap_err();
    match err {
        PremiseError::Data(msg) => assert!(msg.contains("row 1"), "got: {msg}"),
        other => panic!("expected Data error, got: {other}"),
    }
}

#[test]
fn rte_test_reader_keeps_only_three_column_rows() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_fixture(
        &dir,
        "test.txt",
        "1\tA cat sat.\tA cat exists.\n\
         some stray line\n\
         0\tDogs bark.\tCats meow.\n\
         2\ta\tb\tc\td\n",
    );

    let examples = rte::read_test(&path).unwrap();

    assert_eq!(examples.len(), 2);
    assert_eq!(examples[0].guid, "test-0");
    assert_eq!(examples[0].label.as_deref(), Some("entailment"));
    assert_eq!(examples[1].guid, "test-1");
    assert_eq!(examples[1].label.as_deref(), Some("not_entailment"));
}

#[test]
fn missing_file_is_a_data_error() {
    let err = rte::read_train(std::path::Path::new("/nonexistent/train.tsv")).unwrap_err();
    assert!(matches!(err, PremiseError::Data(_)));
}

#[test]
fn mnli_reader_picks_the_right_columns() {
    let dir = tempfile::tempdir().unwrap();
    // GLUE MNLI has 12 columns; premise/hypothesis sit at 8/9, gold last
    let header = (0..12).map(|i| format!("col{i}")).collect::<Vec<_>>().join("\t");
    let row = "id\tp1\tp2\tg1\tg2\tg3\tg4\tg5\tThe premise text.\tThe hypothesis text.\textra\tneutral";
    let path = write_fixture(&dir, "mnli.tsv", &format!("{header}\n{row}\n"));

    let examples = mnli::read_train(&path).unwrap();

    assert_eq!(examples.len(), 1);
    assert_eq!(examples[0].guid, "train-0");
    assert_eq!(examples[0].text_a, "The premise text.");
    assert_eq!(examples[0].text_b.as_deref(), Some("The hypothesis text."));
    assert_eq!(examples[0].label.as_deref(), Some("neutral"));
}

#[test]
fn mnli_reader_rejects_narrow_rows() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_fixture(&dir, "mnli.tsv", "header\nonly\tthree\tcolumns\n");

    assert!(mnli::read_train(&path).is_err());
}

// ============================================================================
// k-shot sampling
// ============================================================================

fn balanced_corpus() -> Vec<premise::Example> {
    (0..8)
        .map(|i| {
            let label = if i < 4 { "entailment" } else { "not_entailment" };
            premise::Example::pair(
                format!("train-{i}"),
                format!("premise {i}"),
                format!("hypothesis {i}"),
                label,
            )
        })
        .collect()
}

#[test]
fn k_shot_sampling_is_balanced() {
    let corpus = balanced_corpus();
    let sampled = rte::sample_k_shot(&corpus, 2, 42).unwrap();

    assert_eq!(sampled.len(), 4);
    let entail = sampled
        .iter()
        .filter(|ex| ex.label.as_deref() == Some("entailment"))
        .count();
    assert_eq!(entail, 2);
    // Entailment examples come first
    assert!(sampled[..2]
        .iter()
        .all(|ex| ex.label.as_deref() == Some("entailment")));
}

#[test]
fn k_shot_sampling_is_deterministic_per_seed() {
    let corpus = balanced_corpus();

    let first = rte::sample_k_shot(&corpus, 2, 7).unwrap();
    let second = rte::sample_k_shot(&corpus, 2, 7).unwrap();
    assert_eq!(first, second);
}

#[test]
fn oversized_k_is_rejected() {
    let corpus = balanced_corpus();
    let err = rte::sample_k_shot(&corpus, 5, 42).unwrap_err();
    match err {
        PremiseError::Data(msg) => assert!(msg.contains("cannot sample"), "got: {msg}"),
        other => panic!("expected Data error, got: {other}"),
    }
}
