//! JSON and CSV/TSV record loading with delimiter detection.

use std::fs;
use std::io::{BufRead, BufReader};
use std::path::Path;

use serde::Deserialize;
use serde_json::Value;

use crate::error::{RefineryError, Result};
use crate::record::Record;

/// Delimiters to try when auto-detecting.
const DELIMITERS: &[u8] = &[b'\t', b',', b';', b'|'];

/// Accepted JSON layouts: a bare array, or a request body with `records`.
#[derive(Deserialize)]
#[serde(untagged)]
enum JsonInput {
    Records(Vec<Record>),
    Request { records: Vec<Record> },
}

/// Loads record batches from disk.
#[derive(Debug, Clone, Default)]
pub struct RecordLoader {
    /// Delimiter to use for delimited files (None = by extension, then auto-detect).
    pub delimiter: Option<u8>,
}

impl RecordLoader {
    /// Create a loader with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Force a delimiter for delimited files.
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = Some(delimiter);
        self
    }

    /// Load a batch from a `.json`, `.csv`, `.tsv` or other delimited file.
    pub fn load(&self, path: impl AsRef<Path>) -> Result<Vec<Record>> {
        let path = path.as_ref();
        let contents = fs::read(path).map_err(|e| RefineryError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        let extension = path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();

        match extension.as_str() {
            "json" => self.load_json(&contents),
            "csv" => self.load_delimited(&contents, self.delimiter.unwrap_or(b',')),
            "tsv" | "tab" => self.load_delimited(&contents, self.delimiter.unwrap_or(b'\t')),
            "xlsx" | "xls" | "parquet" => Err(RefineryError::UnsupportedFormat(extension.clone())),
            _ => {
                let delimiter = match self.delimiter {
                    Some(d) => d,
                    None => detect_delimiter(&contents)?,
                };
                self.load_delimited(&contents, delimiter)
            }
        }
    }

    /// Parse a JSON array of records or a `{"records": [...]}` object.
    pub fn load_json(&self, bytes: &[u8]) -> Result<Vec<Record>> {
        let input: JsonInput = serde_json::from_slice(bytes)?;
        Ok(match input {
            JsonInput::Records(records) => records,
            JsonInput::Request { records } => records,
        })
    }

    /// Parse delimited text. Cells load as strings; empty cells load as null.
    pub fn load_delimited(&self, bytes: &[u8], delimiter: u8) -> Result<Vec<Record>> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .has_headers(true)
            .flexible(true)
            .from_reader(bytes);

        let headers: Vec<String> = reader.headers()?.iter().map(|s| s.to_string()).collect();
        if headers.iter().all(|h| h.is_empty()) {
            return Err(RefineryError::EmptyData("No columns found".to_string()));
        }

        let mut records = Vec::new();
        for result in reader.records() {
            let row = result?;
            let record: Record = headers
                .iter()
                .enumerate()
                .map(|(i, header)| {
                    let value = match row.get(i) {
                        Some(cell) if !cell.is_empty() => Value::String(cell.to_string()),
                        _ => Value::Null,
                    };
                    (header.clone(), value)
                })
                .collect();
            records.push(record);
        }

        Ok(records)
    }
}

/// Detect the delimiter by analyzing the first few lines.
pub fn detect_delimiter(bytes: &[u8]) -> Result<u8> {
    let reader = BufReader::new(bytes);
    let lines: Vec<String> = reader
        .lines()
        .take(10)
        .map_while(|l| l.ok())
        .filter(|l| !l.trim().is_empty())
        .collect();

    if lines.is_empty() {
        return Err(RefineryError::EmptyData("No lines to analyze".to_string()));
    }

    let mut best_delimiter = b',';
    let mut best_score = 0;

    for &delim in DELIMITERS {
        let counts: Vec<usize> = lines
            .iter()
            .map(|line| count_delimiter_in_line(line, delim))
            .collect();

        let first_count = counts[0];
        if first_count == 0 {
            continue;
        }

        // Consistent counts across lines beat a higher but ragged count.
        let score = if counts.iter().all(|&c| c == first_count) {
            first_count * 1000 + if delim == b'\t' { 100 } else { 0 }
        } else {
            first_count
        };

        if score > best_score {
            best_score = score;
            best_delimiter = delim;
        }
    }

    Ok(best_delimiter)
}

/// Count delimiter occurrences in a line, respecting quotes.
fn count_delimiter_in_line(line: &str, delimiter: u8) -> usize {
    let delim_char = delimiter as char;
    let mut count = 0;
    let mut in_quotes = false;

    for ch in line.chars() {
        match ch {
            '"' => in_quotes = !in_quotes,
            c if c == delim_char && !in_quotes => count += 1,
            _ => {}
        }
    }

    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;

    #[test]
    fn test_detect_delimiter_csv() {
        let data = b"a,b,c\n1,2,3\n4,5,6";
        assert_eq!(detect_delimiter(data).unwrap(), b',');
    }

    #[test]
    fn test_detect_delimiter_tsv() {
        let data = b"a\tb\tc\n1\t2\t3\n4\t5\t6";
        assert_eq!(detect_delimiter(data).unwrap(), b'\t');
    }

    #[test]
    fn test_detect_delimiter_quoted() {
        let data = b"name;note\n\"Smith, J\";ok\n\"Doe, A\";late";
        assert_eq!(detect_delimiter(data).unwrap(), b';');
    }

    #[test]
    fn test_load_delimited_empty_cells_are_null() {
        let loader = RecordLoader::new();
        let records = loader
            .load_delimited(b"name,age\n Alice ,\nBob,30", b',')
            .unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0]["name"], json!(" Alice "));
        assert_eq!(records[0]["age"], Value::Null);
        assert_eq!(records[1]["age"], json!("30"));
    }

    #[test]
    fn test_load_delimited_short_rows() {
        let records = RecordLoader::new()
            .load_delimited(b"a,b,c\n1", b',')
            .unwrap();
        assert_eq!(records[0]["c"], Value::Null);
    }

    #[test]
    fn test_load_json_layouts() {
        let loader = RecordLoader::new();
        let bare = loader.load_json(br#"[{"a": 1}]"#).unwrap();
        let wrapped = loader
            .load_json(br#"{"records": [{"a": 1}], "mode": "basic"}"#)
            .unwrap();
        assert_eq!(bare, wrapped);
    }

    #[test]
    fn test_load_json_rejects_scalars() {
        assert!(RecordLoader::new().load_json(b"[1, 2]").is_err());
    }

    #[test]
    fn test_load_from_file_by_extension() {
        let mut file = tempfile::Builder::new().suffix(".tsv").tempfile().unwrap();
        file.write_all(b"id\tname\n1\tAlice\n").unwrap();

        let records = RecordLoader::new().load(file.path()).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0]["name"], json!("Alice"));
    }

    #[test]
    fn test_forced_delimiter_overrides_extension() {
        let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        file.write_all(b"name;city\nSmith, J;Oslo\n").unwrap();

        let records = RecordLoader::new().with_delimiter(b';').load(file.path()).unwrap();
        assert_eq!(records[0]["name"], json!("Smith, J"));
        assert_eq!(records[0]["city"], json!("Oslo"));
    }

    #[test]
    fn test_load_missing_file() {
        let err = RecordLoader::new().load("/nonexistent/records.json").unwrap_err();
        assert!(matches!(err, RefineryError::Io { .. }));
    }

    #[test]
    fn test_unsupported_format() {
        let file = tempfile::Builder::new().suffix(".xlsx").tempfile().unwrap();
        let err = RecordLoader::new().load(file.path()).unwrap_err();
        assert!(matches!(err, RefineryError::UnsupportedFormat(_)));
    }
}
