//! Labeled datasets and the readers that load them from disk.
//!
//! The classifier core only needs an ordered slice of [`LabeledExample`]s.
//! This module turns CSV, JSON Lines and JSON files into that shape:
//!
//! ```csv
//! text,label
//! I love cats,pos
//! I hate cats,neg
//! ```
//!
//! Rows are taken as they are. Labels and texts are not trimmed or
//! case-folded, so `"pos"` and `"pos "` are different classes.

pub mod csv;
pub mod jsonl;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{NbsaError, Result};

pub use self::csv::CsvDatasetReader;
pub use self::jsonl::JsonlDatasetReader;

/// A single training or test example.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabeledExample {
    /// Free text to classify.
    pub text: String,
    /// Class label, compared by exact string equality.
    pub label: String,
}

impl LabeledExample {
    /// Create a new labeled example.
    pub fn new<T: Into<String>, L: Into<String>>(text: T, label: L) -> Self {
        Self {
            text: text.into(),
            label: label.into(),
        }
    }
}

impl<T: Into<String>, L: Into<String>> From<(T, L)> for LabeledExample {
    fn from((text, label): (T, L)) -> Self {
        Self::new(text, label)
    }
}

/// File formats understood by [`load_dataset`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetFormat {
    /// Comma separated values with a header row.
    Csv,
    /// Tab separated values with a header row. Quotes are not special.
    Tsv,
    /// One JSON object per line.
    JsonLines,
    /// A JSON array of objects.
    Json,
}

impl DatasetFormat {
    /// Detect the format from a file extension.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());

        match extension.as_deref() {
            Some("csv") => Ok(DatasetFormat::Csv),
            Some("tsv") => Ok(DatasetFormat::Tsv),
            Some("jsonl") | Some("ndjson") => Ok(DatasetFormat::JsonLines),
            Some("json") => Ok(DatasetFormat::Json),
            _ => Err(NbsaError::dataset(format!(
                "Unsupported dataset file: {} (expected .csv, .tsv, .jsonl, .ndjson or .json)",
                path.display()
            ))),
        }
    }
}

/// Load a dataset, choosing the reader from the file extension.
pub fn load_dataset<P: AsRef<Path>>(path: P) -> Result<Vec<LabeledExample>> {
    let path = path.as_ref();
    let examples = match DatasetFormat::from_path(path)? {
        DatasetFormat::Csv => CsvDatasetReader::new().read_path(path)?,
        DatasetFormat::Tsv => CsvDatasetReader::new()
            .with_delimiter(b'\t')
            .with_quoting(false)
            .read_path(path)?,
        DatasetFormat::JsonLines => JsonlDatasetReader::new().read_path(path)?,
        DatasetFormat::Json => jsonl::read_json_array(path)?,
    };

    log::debug!("Loaded {} examples from {}", examples.len(), path.display());
    Ok(examples)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_detection() {
        assert_eq!(
            DatasetFormat::from_path("data/train.csv").unwrap(),
            DatasetFormat::Csv
        );
        assert_eq!(
            DatasetFormat::from_path("data/train.TSV").unwrap(),
            DatasetFormat::Tsv
        );
        assert_eq!(
            DatasetFormat::from_path("train.ndjson").unwrap(),
            DatasetFormat::JsonLines
        );
        assert_eq!(
            DatasetFormat::from_path("train.json").unwrap(),
            DatasetFormat::Json
        );
        assert!(matches!(
            DatasetFormat::from_path("train.parquet"),
            Err(NbsaError::Dataset(_))
        ));
        assert!(DatasetFormat::from_path("train").is_err());
    }

    #[test]
    fn test_labeled_example_from_tuple() {
        let example: LabeledExample = ("I love cats", "pos").into();
        assert_eq!(example.text, "I love cats");
        assert_eq!(example.label, "pos");
    }
}
