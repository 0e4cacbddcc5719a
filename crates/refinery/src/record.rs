//! Record and batch types.

use indexmap::IndexMap;
use serde_json::Value;

/// One row of tabular input: field name to untyped scalar, in insertion order.
///
/// Values are kept as raw JSON so strings, numbers, booleans and nulls pass
/// through untouched unless a strategy rewrites them.
pub type Record = IndexMap<String, Value>;

/// Ordered rows of one request.
pub type Batch = Vec<Record>;

/// Column names of a batch: the union of all fields, in first-appearance order.
pub fn column_union(batch: &[Record]) -> Vec<String> {
    let mut columns: IndexMap<&str, ()> = IndexMap::new();
    for record in batch {
        for key in record.keys() {
            columns.entry(key.as_str()).or_insert(());
        }
    }
    columns.into_keys().map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(text: &str) -> Record {
        serde_json::from_str(text).unwrap()
    }

    #[test]
    fn test_record_preserves_field_order() {
        let rec = record(r#"{"zeta": 1, "alpha": 2, "mid": 3}"#);
        let keys: Vec<&str> = rec.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_column_union_first_appearance() {
        let batch = vec![
            record(r#"{"b": 1, "a": 2}"#),
            record(r#"{"c": 3, "a": 4}"#),
        ];
        assert_eq!(column_union(&batch), vec!["b", "a", "c"]);
    }

    #[test]
    fn test_column_union_empty() {
        assert!(column_union(&[]).is_empty());
    }
}
