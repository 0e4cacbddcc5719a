//! Generative-model-assisted enrichment, one row at a time.
//!
//! Each row moves from pending to either success (the model produced a
//! parseable object, which replaces the row) or fallback (anything else; the
//! original row is kept and the failure is reported). Rows never retry.
//!
//! # Extraction
//!
//! The object is pulled out of free-form model output with a greedy match
//! from the first `{` to the last `}`. Balance is not checked and the object's
//! fields are not compared to the input, so a reply that happens to parse is
//! accepted even when it is semantically wrong (including `{}`).

use std::sync::Arc;

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::{RefineryError, Result};
use crate::llm::{GenerativeModel, record_enrichment_prompt};
use crate::record::Record;
use crate::sanitize::sanitize;

use super::{EnrichmentStrategy, RowOutcome};

static JSON_OBJECT: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)\{.*\}").unwrap());

/// Find the first brace-delimited span in generated text.
pub fn extract_json_object(text: &str) -> Option<&str> {
    JSON_OBJECT.find(text).map(|m| m.as_str())
}

/// Extract and parse a record from generated text.
pub fn parse_record(text: &str) -> Result<Record> {
    let candidate = extract_json_object(text).ok_or(RefineryError::NoJsonObject)?;
    match serde_json::from_str::<Value>(candidate)? {
        // Re-read into the ordered map so the model's field order survives.
        Value::Object(_) => Ok(serde_json::from_str(candidate)?),
        _ => Err(RefineryError::NotAnObject),
    }
}

/// Row-by-row enrichment through a generative model.
pub struct GenerativeEnrichment {
    model: Arc<dyn GenerativeModel>,
}

impl GenerativeEnrichment {
    pub fn new(model: Arc<dyn GenerativeModel>) -> Self {
        Self { model }
    }

    fn enrich_row(&self, cleaned: &Record) -> Result<Record> {
        let prompt = record_enrichment_prompt(cleaned);
        let generated = self.model.generate(&prompt)?;
        parse_record(&generated)
    }
}

impl EnrichmentStrategy for GenerativeEnrichment {
    fn enrich(&self, batch: &[Record]) -> Result<Vec<RowOutcome>> {
        if !self.model.has_credential() {
            return Err(RefineryError::MissingCredential(
                self.model.credential_name().to_string(),
            ));
        }

        let cleaned = sanitize(batch);
        let outcomes = batch
            .iter()
            .zip(&cleaned)
            .enumerate()
            .map(|(idx, (original, cleaned))| match self.enrich_row(cleaned) {
                Ok(record) => RowOutcome::Cleaned(record),
                Err(e) => {
                    warn!(
                        row = idx + 1,
                        provider = self.model.name(),
                        error = %e,
                        "row enrichment failed, keeping original"
                    );
                    RowOutcome::Fallback {
                        original: original.clone(),
                        error: e.to_string(),
                    }
                }
            })
            .collect::<Vec<_>>();

        debug!(
            rows = outcomes.len(),
            fallbacks = outcomes.iter().filter(|o| o.is_fallback()).count(),
            model = %self.model.config().model,
            "generative enrichment finished"
        );

        Ok(outcomes)
    }

    fn name(&self) -> &str {
        "generative"
    }
}
