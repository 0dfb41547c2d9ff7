//! Per-class token frequency estimation.

use std::sync::Arc;

use ahash::{AHashMap, AHashSet};
use indexmap::IndexMap;

use crate::analysis::tokenizer::Tokenizer;
use crate::dataset::LabeledExample;
use crate::error::Result;

/// Token frequencies of a single class.
pub type TokenCounts = AHashMap<String, usize>;

/// Mapping from class label to the token frequencies of that class.
///
/// Classes keep the order in which their label was first seen in the
/// training set.
#[derive(Debug, Clone, Default)]
pub struct TokenCountTable {
    classes: IndexMap<String, TokenCounts>,
}

impl TokenCountTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert (or replace) the token counts of a class.
    pub fn insert<S: Into<String>>(&mut self, label: S, counts: TokenCounts) {
        self.classes.insert(label.into(), counts);
    }

    /// Number of times `token` was seen in `label`'s training text.
    ///
    /// Returns 0 when either the class or the token is unknown.
    pub fn count_of(&self, label: &str, token: &str) -> usize {
        self.classes
            .get(label)
            .and_then(|counts| counts.get(token))
            .copied()
            .unwrap_or(0)
    }

    /// Token counts of a single class.
    pub fn class_counts(&self, label: &str) -> Option<&TokenCounts> {
        self.classes.get(label)
    }

    /// Total number of tokens seen for a class (0 for unknown classes).
    pub fn total_tokens(&self, label: &str) -> usize {
        self.classes
            .get(label)
            .map(|counts| counts.values().sum())
            .unwrap_or(0)
    }

    /// Number of distinct tokens across all classes.
    pub fn vocabulary_size(&self) -> usize {
        let mut vocabulary: AHashSet<&str> = AHashSet::new();
        for counts in self.classes.values() {
            for token in counts.keys() {
                vocabulary.insert(token.as_str());
            }
        }
        vocabulary.len()
    }

    /// Class labels in table order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.classes.keys().map(String::as_str)
    }

    /// Iterate over `(label, counts)` pairs in table order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &TokenCounts)> {
        self.classes.iter().map(|(label, counts)| (label.as_str(), counts))
    }

    /// Number of classes.
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// Check whether the table has no classes.
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, TokenCounts)> for TokenCountTable {
    fn from_iter<I: IntoIterator<Item = (S, TokenCounts)>>(iter: I) -> Self {
        let mut table = TokenCountTable::new();
        for (label, counts) in iter {
            table.insert(label, counts);
        }
        table
    }
}

/// Builds a [`TokenCountTable`] from labeled training examples.
pub struct FeatureLikelihoodEstimator {
    tokenizer: Arc<dyn Tokenizer>,
}

impl std::fmt::Debug for FeatureLikelihoodEstimator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FeatureLikelihoodEstimator")
            .field("tokenizer", &self.tokenizer.name())
            .finish()
    }
}

impl FeatureLikelihoodEstimator {
    /// Create a new estimator with the specified tokenizer.
    pub fn new(tokenizer: Arc<dyn Tokenizer>) -> Self {
        Self { tokenizer }
    }

    /// Count tokens per class.
    ///
    /// The texts of each class are joined with a single space and tokenized
    /// as one document. An empty training set yields an empty table.
    pub fn estimate(&self, training_set: &[LabeledExample]) -> Result<TokenCountTable> {
        let mut partitions: IndexMap<&str, Vec<&str>> = IndexMap::new();
        for example in training_set {
            partitions
                .entry(example.label.as_str())
                .or_default()
                .push(example.text.as_str());
        }

        let mut table = TokenCountTable::new();
        for (label, texts) in partitions {
            let class_text = texts.join(" ");

            let mut counts = TokenCounts::new();
            for token in self.tokenizer.tokenize(&class_text)? {
                *counts.entry(token.text).or_insert(0) += 1;
            }

            log::debug!(
                "Class '{}': {} examples, {} distinct tokens",
                label,
                texts.len(),
                counts.len()
            );
            table.insert(label, counts);
        }

        Ok(table)
    }
}
