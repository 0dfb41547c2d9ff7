//! Class scoring and arg-max prediction.
//!
//! The score of class `c` for a statement with tokens `t1..tn` is
//!
//! ```text
//! score(c) = prior(c) * (count(c, t1) + 1) * ... * (count(c, tn) + 1)
//! ```
//!
//! The `+1` keeps unseen tokens from zeroing a class, but the product is never
//! divided by a vocabulary-dependent denominator. Scores are therefore not
//! probabilities: they grow with statement length and can overflow to
//! infinity or shrink toward zero. Predictions depend on this exact formula.

use std::sync::Arc;

use indexmap::IndexMap;

use crate::analysis::tokenizer::Tokenizer;
use crate::error::{NbsaError, Result};
use crate::naive_bayes::likelihood::TokenCountTable;
use crate::naive_bayes::prior::PriorTable;

/// Unnormalized per-class scores of a single statement, in prior-table order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScoreVector {
    scores: IndexMap<String, f64>,
}

impl ScoreVector {
    /// Score of a class.
    pub fn score(&self, label: &str) -> Option<f64> {
        self.scores.get(label).copied()
    }

    /// Iterate over `(label, score)` pairs in prior-table order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.scores.iter().map(|(label, score)| (label.as_str(), *score))
    }

    /// Number of scored classes.
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    /// Check whether no class was scored.
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// The highest scoring class.
    ///
    /// Scans in order and only replaces the running best on a strictly
    /// greater score, so the first of several equal maxima wins.
    pub fn best(&self) -> Option<(&str, f64)> {
        let mut iter = self.iter();
        let (mut best_label, mut best_score) = iter.next()?;

        for (label, score) in iter {
            if score > best_score {
                best_label = label;
                best_score = score;
            }
        }

        Some((best_label, best_score))
    }
}

/// Scores statements against trained likelihood and prior tables.
#[derive(Clone)]
pub struct ClassScorer {
    tokenizer: Arc<dyn Tokenizer>,
}

impl std::fmt::Debug for ClassScorer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClassScorer")
            .field("tokenizer", &self.tokenizer.name())
            .finish()
    }
}

impl ClassScorer {
    /// Create a scorer. The tokenizer must be the one used for training.
    pub fn new(tokenizer: Arc<dyn Tokenizer>) -> Self {
        Self { tokenizer }
    }

    /// Score `statement` against every class in `priors`.
    ///
    /// Classes missing from `token_counts` behave as if they had no tokens.
    pub fn scores(
        &self,
        statement: &str,
        token_counts: &TokenCountTable,
        priors: &PriorTable,
    ) -> Result<ScoreVector> {
        if priors.is_empty() {
            return Err(NbsaError::NoClasses);
        }

        let tokens = self.tokenizer.words(statement)?;

        let scores = priors
            .iter()
            .map(|(label, prior)| {
                let score = tokens.iter().fold(prior, |score, token| {
                    score * (token_counts.count_of(label, token) + 1) as f64
                });
                (label.to_string(), score)
            })
            .collect();

        Ok(ScoreVector { scores })
    }

    /// Predict the label of `statement`.
    ///
    /// Fails with [`NbsaError::NoClasses`] when `priors` is empty.
    pub fn classify(
        &self,
        statement: &str,
        token_counts: &TokenCountTable,
        priors: &PriorTable,
    ) -> Result<String> {
        let scores = self.scores(statement, token_counts, priors)?;
        scores
            .best()
            .map(|(label, _)| label.to_string())
            .ok_or(NbsaError::NoClasses)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::tokenizer::RegexTokenizer;
    use crate::naive_bayes::likelihood::TokenCounts;

    fn scorer() -> ClassScorer {
        ClassScorer::new(Arc::new(RegexTokenizer::word_punct().unwrap()))
    }

    fn counts(pairs: &[(&str, usize)]) -> TokenCounts {
        pairs.iter().map(|(t, c)| (t.to_string(), *c)).collect()
    }

    fn cat_tables() -> (TokenCountTable, PriorTable) {
        let token_counts: TokenCountTable = vec![
            ("pos", counts(&[("I", 1), ("love", 1), ("cats", 1)])),
            ("neg", counts(&[("I", 1), ("hate", 1), ("cats", 1)])),
        ]
        .into_iter()
        .collect();
        let priors: PriorTable = vec![("pos", 0.5), ("neg", 0.5)].into_iter().collect();
        (token_counts, priors)
    }

    #[test]
    fn test_literal_scoring_formula() {
        let (token_counts, priors) = cat_tables();
        let scores = scorer().scores("I love cats", &token_counts, &priors).unwrap();

        assert_eq!(scores.score("pos"), Some(4.0));
        assert_eq!(scores.score("neg"), Some(2.0));
        assert_eq!(scores.best(), Some(("pos", 4.0)));
    }

    #[test]
    fn test_classify() {
        let (token_counts, priors) = cat_tables();
        let scorer = scorer();

        assert_eq!(
            scorer.classify("I love cats", &token_counts, &priors).unwrap(),
            "pos"
        );
        assert_eq!(
            scorer.classify("I hate cats", &token_counts, &priors).unwrap(),
            "neg"
        );
    }

    #[test]
    fn test_unknown_tokens_are_neutral() {
        let (token_counts, priors) = cat_tables();
        let scores = scorer()
            .scores("dogs bark loudly", &token_counts, &priors)
            .unwrap();

        assert_eq!(scores.score("pos"), Some(0.5));
        assert_eq!(scores.score("neg"), Some(0.5));
    }

    #[test]
    fn test_tie_goes_to_first_class() {
        let token_counts: TokenCountTable =
            vec![("b", TokenCounts::new()), ("a", TokenCounts::new())]
                .into_iter()
                .collect();
        let priors: PriorTable = vec![("b", 0.5), ("a", 0.5)].into_iter().collect();

        let label = scorer().classify("", &token_counts, &priors).unwrap();
        assert_eq!(label, "b");
    }

    #[test]
    fn test_class_missing_from_counts() {
        let token_counts: TokenCountTable =
            vec![("pos", counts(&[("great", 3)]))].into_iter().collect();
        let priors: PriorTable = vec![("neutral", 0.9), ("pos", 0.1)].into_iter().collect();
        let scores = scorer().scores("great", &token_counts, &priors).unwrap();

        assert_eq!(scores.score("neutral"), Some(0.9));
        assert!((scores.score("pos").unwrap() - 0.4).abs() < 1e-12);
        assert_eq!(scores.best().map(|(label, _)| label), Some("neutral"));
    }

    #[test]
    fn test_long_statement_overflows_without_error() {
        let token_counts: TokenCountTable =
            vec![("pos", counts(&[("w", 1_000_000)]))].into_iter().collect();
        let priors: PriorTable = vec![("pos", 1.0)].into_iter().collect();
        let statement = vec!["w"; 200].join(" ");

        let scores = scorer().scores(&statement, &token_counts, &priors).unwrap();
        assert!(scores.score("pos").unwrap().is_infinite());
    }

    #[test]
    fn test_empty_priors() {
        let result = scorer().classify("I love cats", &TokenCountTable::new(), &PriorTable::new());
        assert!(matches!(result, Err(NbsaError::NoClasses)));
    }

    #[test]
    fn test_best_of_empty_vector() {
        assert_eq!(ScoreVector::default().best(), None);
    }
}
