//! A trained classifier bundling its tokenizer and tables.

use std::sync::Arc;

use crate::analysis::tokenizer::Tokenizer;
use crate::dataset::LabeledExample;
use crate::error::Result;
use crate::naive_bayes::config::NaiveBayesConfig;
use crate::naive_bayes::evaluator::{Evaluation, Evaluator};
use crate::naive_bayes::likelihood::TokenCountTable;
use crate::naive_bayes::prior::PriorTable;
use crate::naive_bayes::scorer::{ClassScorer, ScoreVector};

/// Multinomial Naive Bayes text classifier.
///
/// Tables are read-only after training; every method takes `&self`.
pub struct NaiveBayesModel {
    tokenizer: Arc<dyn Tokenizer>,
    token_counts: TokenCountTable,
    priors: PriorTable,
    parallel_evaluation: bool,
}

impl std::fmt::Debug for NaiveBayesModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NaiveBayesModel")
            .field("tokenizer", &self.tokenizer.name())
            .field("classes", &self.priors.labels().collect::<Vec<_>>())
            .field("vocabulary_size", &self.token_counts.vocabulary_size())
            .field("parallel_evaluation", &self.parallel_evaluation)
            .finish()
    }
}

impl NaiveBayesModel {
    /// Train a model with the given tokenizer.
    pub fn train(training_set: &[LabeledExample], tokenizer: Arc<dyn Tokenizer>) -> Result<Self> {
        let (token_counts, priors) = super::train(training_set, &tokenizer)?;
        Ok(Self::from_tables(token_counts, priors, tokenizer))
    }

    /// Train a model using the tokenizer and options from `config`.
    pub fn train_with_config(
        training_set: &[LabeledExample],
        config: &NaiveBayesConfig,
    ) -> Result<Self> {
        let model = Self::train(training_set, config.tokenizer.build()?)?;
        Ok(model.with_parallel_evaluation(config.parallel_evaluation))
    }

    /// Wrap already estimated tables.
    ///
    /// `tokenizer` must match the one the tables were estimated with.
    pub fn from_tables(
        token_counts: TokenCountTable,
        priors: PriorTable,
        tokenizer: Arc<dyn Tokenizer>,
    ) -> Self {
        Self {
            tokenizer,
            token_counts,
            priors,
            parallel_evaluation: false,
        }
    }

    /// Enable or disable parallel evaluation.
    pub fn with_parallel_evaluation(mut self, parallel: bool) -> Self {
        self.parallel_evaluation = parallel;
        self
    }

    fn scorer(&self) -> ClassScorer {
        ClassScorer::new(Arc::clone(&self.tokenizer))
    }

    /// Predict the label of a statement.
    pub fn classify(&self, statement: &str) -> Result<String> {
        self.scorer()
            .classify(statement, &self.token_counts, &self.priors)
    }

    /// Per-class scores of a statement.
    pub fn scores(&self, statement: &str) -> Result<ScoreVector> {
        self.scorer()
            .scores(statement, &self.token_counts, &self.priors)
    }

    /// Accuracy and counts on a labeled test set.
    pub fn evaluate(&self, test_set: &[LabeledExample]) -> Result<Evaluation> {
        Evaluator::new(self.scorer())
            .with_parallel(self.parallel_evaluation)
            .evaluate_detailed(test_set, &self.token_counts, &self.priors)
    }

    /// Token frequency table.
    pub fn token_counts(&self) -> &TokenCountTable {
        &self.token_counts
    }

    /// Class prior table.
    pub fn priors(&self) -> &PriorTable {
        &self.priors
    }

    /// Name of the tokenizer in use.
    pub fn tokenizer_name(&self) -> &'static str {
        self.tokenizer.name()
    }

    /// Give up the model and keep its tables.
    pub fn into_tables(self) -> (TokenCountTable, PriorTable) {
        (self.token_counts, self.priors)
    }
}
