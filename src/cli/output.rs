//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{NbsaArgs, OutputFormat};
use crate::error::Result;

/// Per-class statistics of a trained model.
#[derive(Debug, Serialize, Deserialize)]
pub struct ClassSummary {
    pub label: String,
    pub prior: f64,
    pub examples: usize,
    pub total_tokens: usize,
    pub distinct_tokens: usize,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub top_tokens: Vec<(String, usize)>,
}

/// Result structure for training.
#[derive(Debug, Serialize, Deserialize)]
pub struct TrainingSummary {
    pub train_file: String,
    pub examples: usize,
    pub tokenizer: String,
    pub vocabulary_size: usize,
    pub classes: Vec<ClassSummary>,
    pub duration_ms: u64,
}

/// Score of a single class.
#[derive(Debug, Serialize, Deserialize)]
pub struct ClassScore {
    pub label: String,
    pub score: f64,
}

/// Result structure for classification.
#[derive(Debug, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub statement: String,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub scores: Option<Vec<ClassScore>>,
}

/// Result structure for evaluation.
#[derive(Debug, Serialize, Deserialize)]
pub struct EvaluationResult {
    pub train_file: String,
    pub test_file: String,
    pub total: usize,
    pub correct: usize,
    pub accuracy: f64,
    pub duration_ms: u64,
}

/// Results that know how to print themselves for humans.
pub trait HumanOutput {
    /// Print the result to stdout.
    fn print_human(&self);
}

impl HumanOutput for TrainingSummary {
    fn print_human(&self) {
        println!("Training Summary:");
        println!("═════════════════");
        println!("Training file: {}", self.train_file);
        println!("Examples: {}", self.examples);
        println!("Tokenizer: {}", self.tokenizer);
        println!("Vocabulary size: {}", self.vocabulary_size);
        println!("Training time: {}ms", self.duration_ms);

        println!();
        println!("Classes:");
        println!("────────");
        for class in &self.classes {
            println!();
            println!("Class: {}", class.label);
            println!("  Prior: {:.4}", class.prior);
            println!("  Examples: {}", class.examples);
            println!("  Tokens: {}", class.total_tokens);
            println!("  Distinct tokens: {}", class.distinct_tokens);
            if !class.top_tokens.is_empty() {
                let top: Vec<String> = class
                    .top_tokens
                    .iter()
                    .map(|(token, count)| format!("{token} ({count})"))
                    .collect();
                println!("  Top tokens: {}", top.join(", "));
            }
        }
    }
}

impl HumanOutput for ClassificationResult {
    fn print_human(&self) {
        println!("Statement: {}", self.statement);
        println!("Predicted label: {}", self.label);

        if let Some(scores) = &self.scores {
            println!();
            println!("Scores:");
            println!("───────");
            for score in scores {
                let marker = if score.label == self.label { "*" } else { " " };
                println!("{marker} {}: {:e}", score.label, score.score);
            }
        }
    }
}

impl HumanOutput for EvaluationResult {
    fn print_human(&self) {
        println!("Evaluation Results:");
        println!("═══════════════════");
        println!("Training file: {}", self.train_file);
        println!("Test file: {}", self.test_file);
        println!("Correct: {} / {}", self.correct, self.total);
        println!("Accuracy: {}", self.accuracy);
        println!("Duration: {}ms", self.duration_ms);
    }
}

/// Output a result in the requested format.
pub fn output_result<T: Serialize + HumanOutput>(
    message: &str,
    result: &T,
    args: &NbsaArgs,
) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in human-readable format.
fn output_human<T: HumanOutput>(message: &str, result: &T, args: &NbsaArgs) -> Result<()> {
    if args.verbosity() > 1 {
        println!("{message}");
        println!();
    }

    result.print_human();
    Ok(())
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &NbsaArgs) -> Result<()> {
    println!("{}", render_json(result, args.pretty)?);
    Ok(())
}

/// Serialize a result to JSON.
pub fn render_json<T: Serialize>(result: &T, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification_json_omits_missing_scores() {
        let result = ClassificationResult {
            statement: "I love cats".to_string(),
            label: "pos".to_string(),
            scores: None,
        };

        let json = render_json(&result, false).unwrap();
        assert_eq!(json, r#"{"statement":"I love cats","label":"pos"}"#);
    }

    #[test]
    fn test_evaluation_json() {
        let result = EvaluationResult {
            train_file: "train.csv".to_string(),
            test_file: "test.csv".to_string(),
            total: 4,
            correct: 3,
            accuracy: 0.75,
            duration_ms: 1,
        };

        let value: serde_json::Value =
            serde_json::from_str(&render_json(&result, true).unwrap()).unwrap();
        assert_eq!(value["accuracy"], 0.75);
        assert_eq!(value["correct"], 3);
    }
}
