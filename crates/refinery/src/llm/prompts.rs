//! Prompt templates for model interactions.

use crate::record::Record;

/// Build the instruction for cleaning and enriching one record.
///
/// The serialized record is the only brace-delimited text in the prompt, so a
/// model that echoes its input still yields a single extractable object.
pub fn record_enrichment_prompt(record: &Record) -> String {
    let record_json =
        serde_json::to_string(record).unwrap_or_else(|_| "Unable to serialize record".to_string());

    format!(
        r#"Clean and enrich this record from a tabular dataset.

## Record
{record_json}

## Task
Fix obvious typos, normalize casing and formatting, and fill empty fields only
when the value can be inferred from the other fields. Keep every field name
unchanged and do not add new fields.

Respond with the cleaned record as a single JSON object and nothing else."#
    )
}
