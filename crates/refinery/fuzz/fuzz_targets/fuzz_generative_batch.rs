//! Fuzz target for the generative batch path.
//!
//! Feeds arbitrary text back as the model reply for every row and checks
//! that the envelope still carries exactly one row per input row.

#![no_main]

use libfuzzer_sys::fuzz_target;
use refinery::{BatchProcessor, MockModel, Record};
use serde_json::json;

fuzz_target!(|data: &[u8]| {
    if data.len() > 10_000 {
        return;
    }

    if let Ok(reply) = std::str::from_utf8(data) {
        let records: Vec<Record> =
            serde_json::from_value(json!([{"a": " x "}, {"b": null}, {}])).unwrap();
        let processor = BatchProcessor::new().with_model(MockModel::replying(reply));

        let envelope = processor.process(&records, Some("generative"));
        assert_eq!(envelope.data().len(), records.len());
        assert!(envelope.error_rows().len() <= records.len());
    }
});
