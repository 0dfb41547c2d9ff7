//! Configuration for training and evaluation.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::analysis::tokenizer::{
    RegexTokenizer, Tokenizer, UnicodeWordTokenizer, WhitespaceTokenizer,
};
use crate::error::{NbsaError, Result};

/// Tokenizer selection.
///
/// Serialized with a `type` tag, e.g. `{"type": "regex", "pattern": "\\w+"}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TokenizerConfig {
    /// Regex tokenizer with a custom pattern.
    Regex {
        /// Pattern whose matches become tokens.
        pattern: String,
    },
    /// Word characters plus standalone punctuation marks.
    #[default]
    WordPunct,
    /// Unicode word boundaries.
    UnicodeWord,
    /// Whitespace splitting.
    Whitespace,
}

impl TokenizerConfig {
    /// Construct the configured tokenizer.
    pub fn build(&self) -> Result<Arc<dyn Tokenizer>> {
        let tokenizer: Arc<dyn Tokenizer> = match self {
            TokenizerConfig::Regex { pattern } => Arc::new(RegexTokenizer::with_pattern(pattern)?),
            TokenizerConfig::WordPunct => Arc::new(RegexTokenizer::word_punct()?),
            TokenizerConfig::UnicodeWord => Arc::new(UnicodeWordTokenizer::new()),
            TokenizerConfig::Whitespace => Arc::new(WhitespaceTokenizer::new()),
        };
        Ok(tokenizer)
    }
}

/// Configuration for [`NaiveBayesModel`](crate::naive_bayes::NaiveBayesModel).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NaiveBayesConfig {
    /// Tokenizer shared by training and inference.
    pub tokenizer: TokenizerConfig,
    /// Classify test rows in parallel during evaluation.
    pub parallel_evaluation: bool,
}

impl NaiveBayesConfig {
    /// Parse a configuration from JSON. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| NbsaError::invalid_config(format!("Failed to parse config: {e}")))
    }

    /// Load a JSON configuration file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&content)
    }
}
