//! Statistical-model-assisted cleaning.

use tracing::debug;

use crate::error::Result;
use crate::record::Record;

use super::{BasicCleaning, EnrichmentStrategy, RowOutcome};

/// Cleaning backed by a statistical imputation model.
///
/// No model is consulted on the row-cleaning path yet, so the output is the
/// same as [`BasicCleaning`].
#[derive(Debug, Clone, Copy, Default)]
pub struct StatisticalImputation;

impl EnrichmentStrategy for StatisticalImputation {
    fn enrich(&self, batch: &[Record]) -> Result<Vec<RowOutcome>> {
        debug!(rows = batch.len(), "no imputation model attached, sanitizing only");
        BasicCleaning.enrich(batch)
    }

    fn name(&self) -> &str {
        "statistical"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_matches_basic() {
        let batch: Vec<Record> =
            serde_json::from_value(json!([{"name": " Alice ", "age": null}, {"city": "Paris "}]))
                .unwrap();
        assert_eq!(
            StatisticalImputation.enrich(&batch).unwrap(),
            BasicCleaning.enrich(&batch).unwrap()
        );
    }
}
