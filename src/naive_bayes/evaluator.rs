//! Accuracy measurement on held-out labeled data.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::dataset::LabeledExample;
use crate::error::{NbsaError, Result};
use crate::naive_bayes::likelihood::TokenCountTable;
use crate::naive_bayes::prior::PriorTable;
use crate::naive_bayes::scorer::ClassScorer;

/// Outcome of an evaluation run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    /// Number of test examples.
    pub total: usize,
    /// Number of examples whose predicted label matched exactly.
    pub correct: usize,
    /// `correct / total`.
    pub accuracy: f64,
}

/// Classifies every row of a test set and reports accuracy.
#[derive(Debug, Clone)]
pub struct Evaluator {
    scorer: ClassScorer,
    parallel: bool,
}

impl Evaluator {
    /// Create a sequential evaluator.
    pub fn new(scorer: ClassScorer) -> Self {
        Self {
            scorer,
            parallel: false,
        }
    }

    /// Classify rows on the rayon thread pool. Results are identical to the
    /// sequential path.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Fraction of test examples classified correctly.
    pub fn evaluate(
        &self,
        test_set: &[LabeledExample],
        token_counts: &TokenCountTable,
        priors: &PriorTable,
    ) -> Result<f64> {
        Ok(self.evaluate_detailed(test_set, token_counts, priors)?.accuracy)
    }

    /// Evaluate and return the full counts.
    ///
    /// Fails with [`NbsaError::EmptyDataset`] on an empty test set and
    /// propagates a classification error.
    pub fn evaluate_detailed(
        &self,
        test_set: &[LabeledExample],
        token_counts: &TokenCountTable,
        priors: &PriorTable,
    ) -> Result<Evaluation> {
        if test_set.is_empty() {
            return Err(NbsaError::empty_dataset("test"));
        }

        let is_correct = |example: &LabeledExample| -> Result<bool> {
            let predicted = self.scorer.classify(&example.text, token_counts, priors)?;
            Ok(predicted == example.label)
        };

        let outcomes: Vec<bool> = if self.parallel {
            test_set.par_iter().map(is_correct).collect::<Result<_>>()?
        } else {
            test_set.iter().map(is_correct).collect::<Result<_>>()?
        };

        let correct = outcomes.into_iter().filter(|ok| *ok).count();
        let total = test_set.len();
        let evaluation = Evaluation {
            total,
            correct,
            accuracy: correct as f64 / total as f64,
        };

        log::info!(
            "Evaluated {} examples: {} correct (accuracy {:.4})",
            evaluation.total,
            evaluation.correct,
            evaluation.accuracy
        );
        Ok(evaluation)
    }
}
