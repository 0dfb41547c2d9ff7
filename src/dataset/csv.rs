//! CSV dataset reader.
//!
//! The first row is the header. The text and label columns are looked up by
//! name, so their position does not matter and extra columns are ignored:
//! ```csv
//! id,label,text
//! 1,pos,I love cats
//! ```

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};

use crate::dataset::LabeledExample;
use crate::error::{NbsaError, Result};

/// Reads [`LabeledExample`]s from delimited text with a header row.
#[derive(Debug, Clone)]
pub struct CsvDatasetReader {
    /// Delimiter byte (default: `,`)
    delimiter: u8,
    /// Header name of the text column (default: `text`)
    text_column: String,
    /// Header name of the label column (default: `label`)
    label_column: String,
    /// Whether `"` starts a quoted field (default: true)
    quoting: bool,
}

impl Default for CsvDatasetReader {
    fn default() -> Self {
        Self::new()
    }
}

impl CsvDatasetReader {
    /// Create a new CSV reader with comma delimiter and `text`/`label` columns.
    pub fn new() -> Self {
        CsvDatasetReader {
            delimiter: b',',
            text_column: "text".to_string(),
            label_column: "label".to_string(),
            quoting: true,
        }
    }

    /// Set a custom delimiter byte.
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Enable or disable quoted fields. With quoting off, `"` is ordinary text.
    pub fn with_quoting(mut self, quoting: bool) -> Self {
        self.quoting = quoting;
        self
    }

    /// Set the header name of the text column.
    pub fn with_text_column<S: Into<String>>(mut self, name: S) -> Self {
        self.text_column = name.into();
        self
    }

    /// Set the header name of the label column.
    pub fn with_label_column<S: Into<String>>(mut self, name: S) -> Self {
        self.label_column = name.into();
        self
    }

    /// Read all examples from a file.
    pub fn read_path<P: AsRef<Path>>(&self, path: P) -> Result<Vec<LabeledExample>> {
        let file = File::open(path.as_ref())?;
        self.read(file)
    }

    /// Read all examples from an in-memory string.
    pub fn read_str(&self, input: &str) -> Result<Vec<LabeledExample>> {
        self.read(input.as_bytes())
    }

    /// Read all examples from any reader.
    pub fn read<R: Read>(&self, input: R) -> Result<Vec<LabeledExample>> {
        let mut reader = ReaderBuilder::new()
            .delimiter(self.delimiter)
            .quoting(self.quoting)
            .trim(csv::Trim::None)
            .from_reader(input);

        let headers = reader.headers()?.clone();
        let text_idx = Self::column_index(&headers, &self.text_column)?;
        let label_idx = Self::column_index(&headers, &self.label_column)?;

        let mut examples = Vec::new();
        for (row, record) in reader.records().enumerate() {
            let record = record?;
            let field = |idx: usize, name: &str| {
                record.get(idx).map(str::to_string).ok_or_else(|| {
                    // Header is line 1, so data row `row` sits on line `row + 2`.
                    NbsaError::dataset(format!("Line {}: missing '{}' field", row + 2, name))
                })
            };

            examples.push(LabeledExample {
                text: field(text_idx, &self.text_column)?,
                label: field(label_idx, &self.label_column)?,
            });
        }

        Ok(examples)
    }

    fn column_index(headers: &StringRecord, name: &str) -> Result<usize> {
        headers.iter().position(|h| h == name).ok_or_else(|| {
            NbsaError::dataset(format!(
                "Missing column '{}' in header [{}]",
                name,
                headers.iter().collect::<Vec<_>>().join(", ")
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csv_basic_parsing() {
        let reader = CsvDatasetReader::new();
        let csv = "text,label\nI love cats,pos\nI hate cats,neg\n";
        let examples = reader.read_str(csv).unwrap();

        assert_eq!(examples.len(), 2);
        assert_eq!(examples[0], LabeledExample::new("I love cats", "pos"));
        assert_eq!(examples[1], LabeledExample::new("I hate cats", "neg"));
    }

    #[test]
    fn test_csv_columns_by_name() {
        let reader = CsvDatasetReader::new();
        let csv = "id,label,text\n1,pos,\"Great, really great\"\n";
        let examples = reader.read_str(csv).unwrap();

        assert_eq!(examples[0].text, "Great, really great");
        assert_eq!(examples[0].label, "pos");
    }

    #[test]
    fn test_csv_does_not_trim() {
        let reader = CsvDatasetReader::new();
        let examples = reader.read_str("text,label\n cats , pos\n").unwrap();

        assert_eq!(examples[0].text, " cats ");
        assert_eq!(examples[0].label, " pos");
    }

    #[test]
    fn test_csv_custom_columns_and_delimiter() {
        let reader = CsvDatasetReader::new()
            .with_delimiter(b';')
            .with_text_column("sentence")
            .with_label_column("sentiment");
        let examples = reader.read_str("sentence;sentiment\nnice;pos\n").unwrap();

        assert_eq!(examples, vec![LabeledExample::new("nice", "pos")]);
    }

    #[test]
    fn test_csv_quotes_kept_without_quoting() {
        let reader = CsvDatasetReader::new().with_delimiter(b'\t').with_quoting(false);
        let examples = reader.read_str("text\tlabel\n\"Great\" movie\tpos\n").unwrap();

        assert_eq!(examples, vec![LabeledExample::new("\"Great\" movie", "pos")]);
    }

    #[test]
    fn test_csv_missing_column() {
        let reader = CsvDatasetReader::new();
        let result = reader.read_str("text,category\nnice,pos\n");

        match result {
            Err(NbsaError::Dataset(msg)) => assert!(msg.contains("'label'")),
            other => panic!("Expected dataset error, got {other:?}"),
        }
    }

    #[test]
    fn test_csv_header_only() {
        let reader = CsvDatasetReader::new();
        assert!(reader.read_str("text,label\n").unwrap().is_empty());
    }

    #[test]
    fn test_csv_ragged_row_is_rejected() {
        let reader = CsvDatasetReader::new();
        assert!(reader.read_str("text,label\nonly text\n").is_err());
    }
}
