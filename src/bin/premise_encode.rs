//! premise-encode — encode a TSV split into JSON-lines features.
//!
//! Reads an RTE or MNLI split, runs the feature encoder with a
//! HuggingFace tokenizer, and writes one JSON feature record per line.

use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};
use tracing::info;

use premise::dataset::{mnli, rte};
use premise::{
    EncoderConfig, Example, FeatureEncoder, HubTokenizer, InvalidExamplePolicy, LabelMode,
    LabelSet, PremiseError,
};

/// Feature encoding tool
#[derive(Parser)]
#[command(name = "premise-encode")]
#[command(version)]
#[command(about = "Encode a TSV split into JSON-lines feature records")]
struct Args {
    /// Input TSV file
    #[arg(long)]
    input: PathBuf,

    /// Reader to use for the input file
    #[arg(long, value_enum)]
    format: SplitFormat,

    /// HuggingFace repo id, or path to a local tokenizer.json
    #[arg(long, env = "PREMISE_TOKENIZER", default_value = "roberta-large")]
    tokenizer: String,

    /// Output JSONL path (stdout if omitted)
    #[arg(long)]
    output: Option<PathBuf>,

    /// Fixed sequence length after tokenization
    #[arg(long, default_value_t = 128)]
    max_seq_length: usize,

    /// Encoder-family layout preset
    #[arg(long, value_enum, default_value_t = Family::Roberta)]
    family: Family,

    /// TOML file overriding the full encoder configuration
    /// (falls back to ~/.premise/encoder.toml when present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Skip examples that fail label resolution instead of aborting
    #[arg(long)]
    skip_invalid: bool,

    /// Sample this many examples per class (train formats only)
    #[arg(long)]
    kshot: Option<usize>,

    /// Seed for k-shot sampling
    #[arg(long, default_value_t = 42)]
    seed: u64,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum SplitFormat {
    RteTrain,
    RteDev,
    RteTest,
    MnliTrain,
}

#[derive(Clone, Copy, ValueEnum)]
enum Family {
    Bert,
    Roberta,
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

    let examples = load_examples(&args)?;
    let config = resolve_config(&args)?;
    let encoder = FeatureEncoder::new(config, std::sync::Arc::new(load_tokenizer(&args)?))?;

    let policy = if args.skip_invalid {
        InvalidExamplePolicy::Skip
    } else {
        InvalidExamplePolicy::Fail
    };
    let features = encoder.encode_all(&examples, policy)?;

    match &args.output {
        Some(path) => {
            let file = fs::File::create(path)?;
            let mut writer = BufWriter::new(file);
            for feature in &features {
                serde_json::to_writer(&mut writer, feature)?;
                writer.write_all(b"\n")?;
            }
            writer.flush()?;
            info!(count = features.len(), path = %path.display(), "wrote features");
        }
        None => {
            let stdout = std::io::stdout();
            let mut writer = BufWriter::new(stdout.lock());
            for feature in &features {
                serde_json::to_writer(&mut writer, feature)?;
                writer.write_all(b"\n")?;
            }
            writer.flush()?;
        }
    }

    Ok(())
}

fn load_examples(args: &Args) -> Result<Vec<Example>, PremiseError> {
    let examples = match args.format {
        SplitFormat::RteTrain => rte::read_train(&args.input)?,
        SplitFormat::RteDev => rte::read_dev(&args.input)?,
        SplitFormat::RteTest => rte::read_test(&args.input)?,
        SplitFormat::MnliTrain => mnli::read_train(&args.input)?,
    };

    match args.kshot {
        None => Ok(examples),
        Some(k) => {
            if args.format != SplitFormat::RteTrain {
                return Err(PremiseError::Configuration(
                    "--kshot only applies to the rte-train format".to_string(),
                ));
            }
            rte::sample_k_shot(&examples, k, args.seed)
        }
    }
}

/// Resolve the encoder configuration.
///
/// Resolution order:
/// 1. `--config <path>` (CLI flag)
/// 2. `~/.premise/encoder.toml` (user)
/// 3. Family preset with CLI-supplied length and format-implied labels
fn resolve_config(args: &Args) -> Result<EncoderConfig, PremiseError> {
    if let Some(path) = &args.config {
        return load_config_file(path);
    }
    if let Some(home) = dirs::home_dir() {
        let user_config = home.join(".premise").join("encoder.toml");
        if user_config.exists() {
            return load_config_file(&user_config);
        }
    }

    let label_mode = LabelMode::Classification(match args.format {
        SplitFormat::MnliTrain => LabelSet::three_way(),
        _ => LabelSet::two_way(),
    });
    Ok(match args.family {
        Family::Bert => EncoderConfig::bert(args.max_seq_length, label_mode),
        Family::Roberta => EncoderConfig::roberta(args.max_seq_length, label_mode),
    })
}

fn load_config_file(path: &Path) -> Result<EncoderConfig, PremiseError> {
    let content = fs::read_to_string(path).map_err(|e| {
        PremiseError::Configuration(format!("Failed to read config file {path:?}: {e}"))
    })?;
    toml::from_str(&content).map_err(|e| {
        PremiseError::Configuration(format!("Failed to parse config file {path:?}: {e}"))
    })
}

fn load_tokenizer(args: &Args) -> Result<HubTokenizer, PremiseError> {
    let as_path = Path::new(&args.tokenizer);
    if as_path.exists() {
        HubTokenizer::from_file(as_path)
    } else {
        HubTokenizer::from_hub(&args.tokenizer)
    }
}
