//! Class prior estimation.

use indexmap::IndexMap;

use crate::dataset::LabeledExample;
use crate::error::{NbsaError, Result};

/// Mapping from class label to its prior probability.
///
/// Iteration order is the order in which labels were first seen in the
/// training set. The scorer scans classes in this order, so it also decides
/// ties.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PriorTable {
    priors: IndexMap<String, f64>,
}

impl PriorTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert (or replace) the prior of a class. A new label goes to the end
    /// of the iteration order; a replaced label keeps its place.
    pub fn insert<S: Into<String>>(&mut self, label: S, prior: f64) {
        self.priors.insert(label.into(), prior);
    }

    /// Prior probability of a class.
    pub fn prior(&self, label: &str) -> Option<f64> {
        self.priors.get(label).copied()
    }

    /// Class labels in table order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.priors.keys().map(String::as_str)
    }

    /// Iterate over `(label, prior)` pairs in table order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.priors.iter().map(|(label, prior)| (label.as_str(), *prior))
    }

    /// Sum of all priors; 1.0 (within rounding) for an estimated table.
    pub fn total(&self) -> f64 {
        self.priors.values().sum()
    }

    /// Number of classes.
    pub fn len(&self) -> usize {
        self.priors.len()
    }

    /// Check whether the table has no classes.
    pub fn is_empty(&self) -> bool {
        self.priors.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, f64)> for PriorTable {
    fn from_iter<I: IntoIterator<Item = (S, f64)>>(iter: I) -> Self {
        let mut table = PriorTable::new();
        for (label, prior) in iter {
            table.insert(label, prior);
        }
        table
    }
}

/// Estimates class priors as relative class frequencies.
#[derive(Debug, Clone, Copy, Default)]
pub struct PriorEstimator;

impl PriorEstimator {
    /// Create a new prior estimator.
    pub fn new() -> Self {
        PriorEstimator
    }

    /// Compute `count(label) / total` for every label in the training set.
    ///
    /// Fails with [`NbsaError::EmptyDataset`] when the training set is empty.
    pub fn estimate(&self, training_set: &[LabeledExample]) -> Result<PriorTable> {
        if training_set.is_empty() {
            return Err(NbsaError::empty_dataset("training"));
        }

        let mut class_sizes: IndexMap<&str, usize> = IndexMap::new();
        for example in training_set {
            *class_sizes.entry(example.label.as_str()).or_insert(0) += 1;
        }

        let total = training_set.len() as f64;
        Ok(class_sizes
            .into_iter()
            .map(|(label, size)| (label, size as f64 / total))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priors_from_frequencies() {
        let training_set = vec![
            LabeledExample::new("a", "neg"),
            LabeledExample::new("b", "pos"),
            LabeledExample::new("c", "pos"),
            LabeledExample::new("d", "pos"),
        ];

        let priors = PriorEstimator::new().estimate(&training_set).unwrap();

        assert_eq!(priors.labels().collect::<Vec<_>>(), vec!["neg", "pos"]);
        assert_eq!(priors.prior("neg"), Some(0.25));
        assert_eq!(priors.prior("pos"), Some(0.75));
        assert_eq!(priors.prior("neutral"), None);
    }

    #[test]
    fn test_priors_sum_to_one() {
        let labels = ["a", "b", "c", "a", "b", "a", "d"];
        let training_set: Vec<LabeledExample> = labels
            .iter()
            .map(|label| LabeledExample::new("text", *label))
            .collect();

        let priors = PriorEstimator::new().estimate(&training_set).unwrap();

        assert_eq!(priors.len(), 4);
        assert!((priors.total() - 1.0).abs() < 1e-9);
        assert!(priors.iter().all(|(_, p)| p > 0.0 && p <= 1.0));
    }

    #[test]
    fn test_single_class() {
        let priors = PriorEstimator::new()
            .estimate(&[LabeledExample::new("only", "pos")])
            .unwrap();
        assert_eq!(priors.prior("pos"), Some(1.0));
    }

    #[test]
    fn test_labels_are_case_sensitive() {
        let training_set = vec![
            LabeledExample::new("a", "pos"),
            LabeledExample::new("b", "Pos"),
        ];
        let priors = PriorEstimator::new().estimate(&training_set).unwrap();
        assert_eq!(priors.len(), 2);
    }

    #[test]
    fn test_empty_training_set() {
        let result = PriorEstimator::new().estimate(&[]);
        match result {
            Err(NbsaError::EmptyDataset { dataset }) => assert_eq!(dataset, "training"),
            other => panic!("Expected EmptyDataset, got {other:?}"),
        }
    }
}
