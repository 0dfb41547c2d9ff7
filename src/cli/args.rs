//! Command line argument parsing for the nbsa CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::naive_bayes::TokenizerConfig;

/// nbsa - Naive Bayes text classification
#[derive(Parser, Debug, Clone)]
#[command(name = "nbsa")]
#[command(about = "Train and evaluate a multinomial Naive Bayes text classifier")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct NbsaArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Classifier configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE", env = "NBSA_CONFIG")]
    pub config: Option<PathBuf>,

    /// Tokenizer to use (overrides the configuration file)
    #[arg(short, long)]
    pub tokenizer: Option<TokenizerKind>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl NbsaArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Train on a dataset and show the learned tables
    Train(TrainArgs),

    /// Train on a dataset and predict the label of a statement
    Classify(ClassifyArgs),

    /// Train on one dataset and report accuracy on another
    Evaluate(EvaluateArgs),
}

/// Arguments for training
#[derive(Parser, Debug, Clone)]
pub struct TrainArgs {
    /// Training dataset (.csv, .tsv, .jsonl, .ndjson or .json)
    #[arg(value_name = "TRAIN_FILE")]
    pub train_file: PathBuf,

    /// Number of most frequent tokens to show per class
    #[arg(long, default_value = "0")]
    pub top_tokens: usize,
}

/// Arguments for classifying a statement
#[derive(Parser, Debug, Clone)]
pub struct ClassifyArgs {
    /// Training dataset
    #[arg(value_name = "TRAIN_FILE")]
    pub train_file: PathBuf,

    /// Statement to classify
    #[arg(value_name = "STATEMENT")]
    pub statement: String,

    /// Include the per-class scores
    #[arg(long)]
    pub scores: bool,
}

/// Arguments for evaluation
#[derive(Parser, Debug, Clone)]
pub struct EvaluateArgs {
    /// Training dataset
    #[arg(value_name = "TRAIN_FILE")]
    pub train_file: PathBuf,

    /// Test dataset
    #[arg(value_name = "TEST_FILE")]
    pub test_file: PathBuf,

    /// Classify test rows in parallel
    #[arg(long)]
    pub parallel: bool,
}

/// Tokenizers selectable from the command line
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TokenizerKind {
    /// Runs of word characters (`\w+`)
    Regex,
    /// Word characters plus standalone punctuation marks
    WordPunct,
    /// Unicode word boundaries
    UnicodeWord,
    /// Whitespace splitting
    Whitespace,
}

impl TokenizerKind {
    /// Convert to the library tokenizer configuration.
    pub fn to_config(self) -> TokenizerConfig {
        match self {
            TokenizerKind::Regex => TokenizerConfig::Regex {
                pattern: r"\w+".to_string(),
            },
            TokenizerKind::WordPunct => TokenizerConfig::WordPunct,
            TokenizerKind::UnicodeWord => TokenizerConfig::UnicodeWord,
            TokenizerKind::Whitespace => TokenizerConfig::Whitespace,
        }
    }
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_classify_command() {
        let args = NbsaArgs::try_parse_from([
            "nbsa",
            "classify",
            "data/training.csv",
            "I love cats",
            "--scores",
        ])
        .unwrap();

        if let Command::Classify(classify_args) = args.command {
            assert_eq!(classify_args.train_file, PathBuf::from("data/training.csv"));
            assert_eq!(classify_args.statement, "I love cats");
            assert!(classify_args.scores);
        } else {
            panic!("Expected Classify command");
        }
    }

    #[test]
    fn test_evaluate_command() {
        let args = NbsaArgs::try_parse_from([
            "nbsa",
            "--tokenizer",
            "unicode-word",
            "evaluate",
            "train.csv",
            "test.jsonl",
            "--parallel",
        ])
        .unwrap();

        assert_eq!(args.tokenizer, Some(TokenizerKind::UnicodeWord));
        if let Command::Evaluate(evaluate_args) = args.command {
            assert_eq!(evaluate_args.train_file, PathBuf::from("train.csv"));
            assert_eq!(evaluate_args.test_file, PathBuf::from("test.jsonl"));
            assert!(evaluate_args.parallel);
        } else {
            panic!("Expected Evaluate command");
        }
    }

    #[test]
    fn test_train_command() {
        let args =
            NbsaArgs::try_parse_from(["nbsa", "train", "train.csv", "--top-tokens", "5"]).unwrap();

        if let Command::Train(train_args) = args.command {
            assert_eq!(train_args.top_tokens, 5);
        } else {
            panic!("Expected Train command");
        }
    }

    #[test]
    fn test_verbosity_levels() {
        // Default verbosity
        let args = NbsaArgs::try_parse_from(["nbsa", "train", "t.csv"]).unwrap();
        assert_eq!(args.verbosity(), 1);

        // Multiple verbose flags
        let args = NbsaArgs::try_parse_from(["nbsa", "-vv", "train", "t.csv"]).unwrap();
        assert_eq!(args.verbosity(), 2);

        // Quiet flag
        let args = NbsaArgs::try_parse_from(["nbsa", "--quiet", "-vvv", "train", "t.csv"]).unwrap();
        assert_eq!(args.verbosity(), 0);
    }

    #[test]
    fn test_output_format() {
        let args =
            NbsaArgs::try_parse_from(["nbsa", "--format", "json", "train", "t.csv"]).unwrap();
        assert_eq!(args.output_format, OutputFormat::Json);
    }

    #[test]
    fn test_tokenizer_kind_to_config() {
        assert_eq!(
            TokenizerKind::Whitespace.to_config(),
            TokenizerConfig::Whitespace
        );
        assert!(matches!(
            TokenizerKind::Regex.to_config(),
            TokenizerConfig::Regex { .. }
        ));
    }
}
