//! Basic cleaning: sanitize the whole batch.

use crate::error::Result;
use crate::record::Record;
use crate::sanitize::sanitize;

use super::{EnrichmentStrategy, RowOutcome};

/// Trim strings and fill missing values. Every row succeeds.
#[derive(Debug, Clone, Copy, Default)]
pub struct BasicCleaning;

impl EnrichmentStrategy for BasicCleaning {
    fn enrich(&self, batch: &[Record]) -> Result<Vec<RowOutcome>> {
        Ok(sanitize(batch).into_iter().map(RowOutcome::Cleaned).collect())
    }

    fn name(&self) -> &str {
        "basic"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_basic_never_falls_back() {
        let batch: Vec<Record> =
            serde_json::from_value(json!([{"a": " x "}, {"a": null}, {}])).unwrap();
        let outcomes = BasicCleaning.enrich(&batch).unwrap();

        assert_eq!(outcomes.len(), 3);
        assert!(outcomes.iter().all(|o| !o.is_fallback()));
        assert_eq!(outcomes[0].record()["a"], json!("x"));
        assert_eq!(outcomes[2].record()["a"], json!(""));
    }
}
