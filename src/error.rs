//! Error types for the nbsa library.
//!
//! All failures are represented by the [`NbsaError`] enum. The classifier core
//! never recovers from an error locally: empty datasets and empty prior tables
//! are surfaced to the caller instead of being turned into default values.
//!
//! # Examples
//!
//! ```
//! use nbsa::error::{NbsaError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(NbsaError::empty_dataset("training"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for nbsa operations.
#[derive(Error, Debug)]
pub enum NbsaError {
    /// A training or test set has no rows.
    #[error("Empty dataset: the {dataset} set contains no examples")]
    EmptyDataset { dataset: String },

    /// The classifier was asked to score against an empty prior table.
    #[error("No classes: the prior table is empty")]
    NoClasses,

    /// Analysis-related errors (tokenizer construction, tokenization)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Malformed dataset files
    #[error("Dataset error: {0}")]
    Dataset(String),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// CSV reader errors
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),
}

/// Result type alias for operations that may fail with NbsaError.
pub type Result<T> = std::result::Result<T, NbsaError>;

impl NbsaError {
    /// Create a new empty dataset error for the given dataset kind
    /// (`"training"`, `"test"`).
    pub fn empty_dataset<S: Into<String>>(dataset: S) -> Self {
        NbsaError::EmptyDataset {
            dataset: dataset.into(),
        }
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        NbsaError::Analysis(msg.into())
    }

    /// Create a new dataset error.
    pub fn dataset<S: Into<String>>(msg: S) -> Self {
        NbsaError::Dataset(msg.into())
    }

    /// Create a new invalid config error.
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        NbsaError::InvalidConfig(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        NbsaError::Other(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = NbsaError::empty_dataset("training");
        assert_eq!(
            error.to_string(),
            "Empty dataset: the training set contains no examples"
        );

        let error = NbsaError::analysis("bad pattern");
        assert_eq!(error.to_string(), "Analysis error: bad pattern");

        let error = NbsaError::dataset("missing column 'label'");
        assert_eq!(error.to_string(), "Dataset error: missing column 'label'");

        assert_eq!(
            NbsaError::NoClasses.to_string(),
            "No classes: the prior table is empty"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let nbsa_error = NbsaError::from(io_error);

        match nbsa_error {
            NbsaError::Io(_) => {} // Expected
            _ => panic!("Expected IO error variant"),
        }
    }
}
