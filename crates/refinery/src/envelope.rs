//! Response envelope returned for every processed batch.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::record::Record;

/// A row whose enrichment failed. The original row is kept in `data`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RowError {
    /// 1-based position of the row in the input batch.
    pub row_index: usize,
    /// The row as received, before any cleaning.
    pub data: Record,
    /// Human-readable failure message.
    pub error: String,
}

/// Result of a batch that ran to completion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichmentReport {
    /// Cleaned rows, in input order.
    pub data: Vec<Record>,
    /// Rows that fell back to their original form.
    pub error_rows: Vec<RowError>,
    /// Reserved for enrichment metrics.
    #[serde(default)]
    pub enhancement_stats: Map<String, Value>,
    /// Reserved for duplicate detection.
    #[serde(default)]
    pub duplicate_warnings: Vec<Value>,
    /// Mode string as received from the caller.
    #[serde(rename = "usedAI")]
    pub used_ai: String,
}

/// Result of a batch rejected as a whole before any row was processed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchFailure {
    pub error: String,
    /// Always empty.
    pub data: Vec<Record>,
    #[serde(rename = "usedAI")]
    pub used_ai: String,
}

/// Uniform response shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResponseEnvelope {
    Failed(BatchFailure),
    Completed(EnrichmentReport),
}

impl ResponseEnvelope {
    pub fn completed(data: Vec<Record>, error_rows: Vec<RowError>, used_ai: impl Into<String>) -> Self {
        ResponseEnvelope::Completed(EnrichmentReport {
            data,
            error_rows,
            enhancement_stats: Map::new(),
            duplicate_warnings: Vec::new(),
            used_ai: used_ai.into(),
        })
    }

    pub fn failed(error: impl Into<String>, used_ai: impl Into<String>) -> Self {
        ResponseEnvelope::Failed(BatchFailure {
            error: error.into(),
            data: Vec::new(),
            used_ai: used_ai.into(),
        })
    }

    pub fn data(&self) -> &[Record] {
        match self {
            ResponseEnvelope::Completed(report) => &report.data,
            ResponseEnvelope::Failed(failure) => &failure.data,
        }
    }

    /// Per-row failures. Empty for a batch-level failure.
    pub fn error_rows(&self) -> &[RowError] {
        match self {
            ResponseEnvelope::Completed(report) => &report.error_rows,
            ResponseEnvelope::Failed(_) => &[],
        }
    }

    /// The batch-level error, if the batch was rejected.
    pub fn error(&self) -> Option<&str> {
        match self {
            ResponseEnvelope::Completed(_) => None,
            ResponseEnvelope::Failed(failure) => Some(&failure.error),
        }
    }

    pub fn used_ai(&self) -> &str {
        match self {
            ResponseEnvelope::Completed(report) => &report.used_ai,
            ResponseEnvelope::Failed(failure) => &failure.used_ai,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, ResponseEnvelope::Failed(_))
    }
}
