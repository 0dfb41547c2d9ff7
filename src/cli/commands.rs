//! Command implementations for the nbsa CLI.

use std::path::Path;
use std::time::Instant;

use indexmap::IndexMap;

use crate::cli::args::*;
use crate::cli::output::*;
use crate::dataset::{LabeledExample, load_dataset};
use crate::error::Result;
use crate::naive_bayes::{NaiveBayesConfig, NaiveBayesModel};

/// Execute a CLI command.
pub fn execute_command(args: NbsaArgs) -> Result<()> {
    let config = load_config(&args)?;

    match &args.command {
        Command::Train(train_args) => train(train_args, &config, &args),
        Command::Classify(classify_args) => classify(classify_args, &config, &args),
        Command::Evaluate(evaluate_args) => evaluate(evaluate_args, &config, &args),
    }
}

/// Resolve the classifier configuration from `--config` and `--tokenizer`.
pub fn load_config(args: &NbsaArgs) -> Result<NaiveBayesConfig> {
    let mut config = match &args.config {
        Some(path) => {
            log::info!("Loading configuration from {}", path.display());
            NaiveBayesConfig::from_file(path)?
        }
        None => NaiveBayesConfig::default(),
    };

    if let Some(kind) = args.tokenizer {
        config.tokenizer = kind.to_config();
    }

    Ok(config)
}

fn load_training_set(path: &Path) -> Result<Vec<LabeledExample>> {
    let examples = load_dataset(path)?;
    log::info!("Loaded {} training examples from {}", examples.len(), path.display());
    Ok(examples)
}

/// Train a model and print its tables.
fn train(args: &TrainArgs, config: &NaiveBayesConfig, cli_args: &NbsaArgs) -> Result<()> {
    let training_set = load_training_set(&args.train_file)?;

    let start = Instant::now();
    let model = NaiveBayesModel::train_with_config(&training_set, config)?;
    let duration_ms = start.elapsed().as_millis() as u64;

    let mut class_sizes: IndexMap<&str, usize> = IndexMap::new();
    for example in &training_set {
        *class_sizes.entry(example.label.as_str()).or_insert(0) += 1;
    }

    let token_counts = model.token_counts();
    let classes = model
        .priors()
        .iter()
        .map(|(label, prior)| ClassSummary {
            label: label.to_string(),
            prior,
            examples: class_sizes.get(label).copied().unwrap_or(0),
            total_tokens: token_counts.total_tokens(label),
            distinct_tokens: token_counts.class_counts(label).map_or(0, |c| c.len()),
            top_tokens: top_tokens(model.token_counts(), label, args.top_tokens),
        })
        .collect();

    output_result(
        "Model trained successfully",
        &TrainingSummary {
            train_file: args.train_file.display().to_string(),
            examples: training_set.len(),
            tokenizer: model.tokenizer_name().to_string(),
            vocabulary_size: token_counts.vocabulary_size(),
            classes,
            duration_ms,
        },
        cli_args,
    )
}

/// Most frequent tokens of a class, ties broken alphabetically.
fn top_tokens(
    token_counts: &crate::naive_bayes::TokenCountTable,
    label: &str,
    limit: usize,
) -> Vec<(String, usize)> {
    if limit == 0 {
        return Vec::new();
    }

    let mut tokens: Vec<(String, usize)> = token_counts
        .class_counts(label)
        .map(|counts| counts.iter().map(|(t, c)| (t.clone(), *c)).collect())
        .unwrap_or_default();
    tokens.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    tokens.truncate(limit);
    tokens
}

/// Train a model and classify one statement.
fn classify(args: &ClassifyArgs, config: &NaiveBayesConfig, cli_args: &NbsaArgs) -> Result<()> {
    let training_set = load_training_set(&args.train_file)?;
    let model = NaiveBayesModel::train_with_config(&training_set, config)?;

    let result = if args.scores {
        let scores = model.scores(&args.statement)?;
        let label = scores
            .best()
            .map(|(label, _)| label.to_string())
            .ok_or(crate::error::NbsaError::NoClasses)?;
        ClassificationResult {
            statement: args.statement.clone(),
            label,
            scores: Some(
                scores
                    .iter()
                    .map(|(label, score)| ClassScore {
                        label: label.to_string(),
                        score,
                    })
                    .collect(),
            ),
        }
    } else {
        ClassificationResult {
            statement: args.statement.clone(),
            label: model.classify(&args.statement)?,
            scores: None,
        }
    };

    output_result("Statement classified", &result, cli_args)
}

/// Train on one dataset and measure accuracy on another.
fn evaluate(args: &EvaluateArgs, config: &NaiveBayesConfig, cli_args: &NbsaArgs) -> Result<()> {
    let training_set = load_training_set(&args.train_file)?;
    let test_set = load_dataset(&args.test_file)?;
    log::info!(
        "Loaded {} test examples from {}",
        test_set.len(),
        args.test_file.display()
    );

    let start = Instant::now();
    let model = NaiveBayesModel::train_with_config(&training_set, config)?
        .with_parallel_evaluation(args.parallel || config.parallel_evaluation);
    let evaluation = model.evaluate(&test_set)?;
    let duration_ms = start.elapsed().as_millis() as u64;

    output_result(
        "Evaluation finished",
        &EvaluationResult {
            train_file: args.train_file.display().to_string(),
            test_file: args.test_file.display().to_string(),
            total: evaluation.total,
            correct: evaluation.correct,
            accuracy: evaluation.accuracy,
            duration_ms,
        },
        cli_args,
    )
}
