//! Multinomial Naive Bayes text classification.
//!
//! Training estimates two tables from labeled examples:
//!
//! - a [`TokenCountTable`] with per-class token frequencies
//!   ([`FeatureLikelihoodEstimator`]);
//! - a [`PriorTable`] with per-class relative frequencies ([`PriorEstimator`]).
//!
//! [`ClassScorer`] combines them into an unnormalized score per class and
//! predicts the arg-max label. [`Evaluator`] measures accuracy on a test set.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use nbsa::analysis::tokenizer::{RegexTokenizer, Tokenizer};
//! use nbsa::dataset::LabeledExample;
//! use nbsa::naive_bayes;
//!
//! # fn main() -> nbsa::error::Result<()> {
//! let tokenizer: Arc<dyn Tokenizer> = Arc::new(RegexTokenizer::word_punct()?);
//! let training_set = vec![
//!     LabeledExample::new("I love cats", "pos"),
//!     LabeledExample::new("I hate cats", "neg"),
//! ];
//!
//! let (token_counts, priors) = naive_bayes::train(&training_set, &tokenizer)?;
//! let label = naive_bayes::classify("I love cats", &token_counts, &priors, &tokenizer)?;
//! assert_eq!(label, "pos");
//!
//! let accuracy = naive_bayes::evaluate(&training_set, &token_counts, &priors, &tokenizer)?;
//! assert_eq!(accuracy, 1.0);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod evaluator;
pub mod likelihood;
pub mod model;
pub mod prior;
pub mod scorer;

use std::sync::Arc;

use crate::analysis::tokenizer::Tokenizer;
use crate::dataset::LabeledExample;
use crate::error::Result;

pub use config::{NaiveBayesConfig, TokenizerConfig};
pub use evaluator::{Evaluation, Evaluator};
pub use likelihood::{FeatureLikelihoodEstimator, TokenCountTable, TokenCounts};
pub use model::NaiveBayesModel;
pub use prior::{PriorEstimator, PriorTable};
pub use scorer::{ClassScorer, ScoreVector};

/// Estimate the token count and prior tables from a training set.
///
/// Calls [`Tokenizer::ensure_ready`] before tokenizing anything. Fails with
/// [`NbsaError::EmptyDataset`](crate::error::NbsaError::EmptyDataset) when
/// the training set is empty.
pub fn train(
    training_set: &[LabeledExample],
    tokenizer: &Arc<dyn Tokenizer>,
) -> Result<(TokenCountTable, PriorTable)> {
    tokenizer.ensure_ready()?;

    let priors = PriorEstimator::new().estimate(training_set)?;
    let token_counts =
        FeatureLikelihoodEstimator::new(Arc::clone(tokenizer)).estimate(training_set)?;

    log::info!(
        "Trained on {} examples: {} classes, vocabulary of {} tokens",
        training_set.len(),
        priors.len(),
        token_counts.vocabulary_size()
    );
    Ok((token_counts, priors))
}

/// Predict the label of a statement.
pub fn classify(
    statement: &str,
    token_counts: &TokenCountTable,
    priors: &PriorTable,
    tokenizer: &Arc<dyn Tokenizer>,
) -> Result<String> {
    tokenizer.ensure_ready()?;
    ClassScorer::new(Arc::clone(tokenizer)).classify(statement, token_counts, priors)
}

/// Fraction of `test_set` examples whose predicted label matches exactly.
pub fn evaluate(
    test_set: &[LabeledExample],
    token_counts: &TokenCountTable,
    priors: &PriorTable,
    tokenizer: &Arc<dyn Tokenizer>,
) -> Result<f64> {
    tokenizer.ensure_ready()?;
    Evaluator::new(ClassScorer::new(Arc::clone(tokenizer))).evaluate(test_set, token_counts, priors)
}
