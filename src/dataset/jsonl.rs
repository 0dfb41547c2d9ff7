//! JSON Lines and JSON dataset readers.
//!
//! Each line of a JSONL file is a single object with `text` and `label`
//! string fields; other fields are ignored:
//! ```jsonl
//! {"text": "I love cats", "label": "pos"}
//! {"text": "I hate cats", "label": "neg", "source": "survey"}
//! ```

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use crate::dataset::LabeledExample;
use crate::error::{NbsaError, Result};

/// Reads [`LabeledExample`]s from JSON Lines input.
#[derive(Debug, Clone, Default)]
pub struct JsonlDatasetReader;

impl JsonlDatasetReader {
    /// Create a new JSONL reader.
    pub fn new() -> Self {
        JsonlDatasetReader
    }

    /// Read all examples from a file.
    pub fn read_path<P: AsRef<Path>>(&self, path: P) -> Result<Vec<LabeledExample>> {
        let file = File::open(path.as_ref())?;
        self.read(BufReader::new(file))
    }

    /// Read all examples from an in-memory string.
    pub fn read_str(&self, input: &str) -> Result<Vec<LabeledExample>> {
        self.read(input.as_bytes())
    }

    /// Read all examples from a buffered reader. Blank lines are skipped.
    pub fn read<R: BufRead>(&self, input: R) -> Result<Vec<LabeledExample>> {
        let mut examples = Vec::new();

        for (idx, line) in input.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            let example: LabeledExample = serde_json::from_str(&line)
                .map_err(|e| NbsaError::dataset(format!("Line {}: {e}", idx + 1)))?;
            examples.push(example);
        }

        Ok(examples)
    }
}

/// Read a JSON array of `{"text": .., "label": ..}` objects.
pub fn read_json_array<P: AsRef<Path>>(path: P) -> Result<Vec<LabeledExample>> {
    let mut content = String::new();
    File::open(path.as_ref())?.read_to_string(&mut content)?;
    Ok(serde_json::from_str(&content)?)
}
