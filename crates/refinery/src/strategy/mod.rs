//! Enrichment strategies.
//!
//! A strategy turns a batch into one [`RowOutcome`] per input row, in input
//! order. Row-level failures are values, never errors; the `Err` path is
//! reserved for failures that reject the whole batch before any row runs.

mod basic;
mod generative;
mod statistical;

pub use basic::BasicCleaning;
pub use generative::{GenerativeEnrichment, extract_json_object, parse_record};
pub use statistical::StatisticalImputation;

use crate::error::Result;
use crate::record::Record;

/// Final state of one row.
#[derive(Debug, Clone, PartialEq)]
pub enum RowOutcome {
    /// The row was cleaned or enriched.
    Cleaned(Record),
    /// Enrichment failed; the original row stands in for the cleaned one.
    Fallback { original: Record, error: String },
}

impl RowOutcome {
    /// The record that goes into the response data.
    pub fn record(&self) -> &Record {
        match self {
            RowOutcome::Cleaned(record) => record,
            RowOutcome::Fallback { original, .. } => original,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, RowOutcome::Fallback { .. })
    }
}

/// A batch transformation.
pub trait EnrichmentStrategy {
    /// Transform the batch into one outcome per row, preserving order.
    fn enrich(&self, batch: &[Record]) -> Result<Vec<RowOutcome>>;

    /// Get the name of this strategy (for logging/debugging).
    fn name(&self) -> &str;
}
