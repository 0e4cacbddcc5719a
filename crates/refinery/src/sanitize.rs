//! Batch sanitization: trim strings, fill missing values.
//!
//! The sanitized batch is rectangular. Every output record carries the full
//! column set of the batch (union of fields, first-appearance order), and any
//! field that was null or absent holds the empty-string sentinel.

use serde_json::Value;

use crate::record::{Record, column_union};

/// Sentinel written into null or missing fields.
pub const MISSING_SENTINEL: &str = "";

/// Sanitize a batch, returning a new one. Never fails.
pub fn sanitize(batch: &[Record]) -> Vec<Record> {
    let columns = column_union(batch);

    batch
        .iter()
        .map(|record| {
            columns
                .iter()
                .map(|column| {
                    let value = record.get(column).map_or_else(missing, clean_value);
                    (column.clone(), value)
                })
                .collect()
        })
        .collect()
}

/// Sanitize a single value.
pub fn clean_value(value: &Value) -> Value {
    match value {
        Value::String(s) => Value::String(s.trim().to_string()),
        Value::Null => missing(),
        other => other.clone(),
    }
}

fn missing() -> Value {
    Value::String(MISSING_SENTINEL.to_string())
}
