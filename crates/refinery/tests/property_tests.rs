//! Property-based tests for the batch pipeline.
//!
//! These tests use proptest to generate random schema-free batches and verify
//! that the envelope invariants hold for every strategy:
//!
//! 1. **No panics**: any batch produces an envelope
//! 2. **Determinism**: cleaning the same batch twice gives the same output
//! 3. **Row accounting**: one output row per input row, in input order
//! 4. **Fallback fidelity**: failed rows come back exactly as received
//!
//! # Running Property Tests
//!
//! ```bash
//! cargo test -p refinery --test property_tests
//! PROPTEST_CASES=10000 cargo test -p refinery --test property_tests
//! ```

use proptest::prelude::*;
use serde_json::Value;

use refinery::{BatchProcessor, MockModel, Record};

// =============================================================================
// Test Strategies
// =============================================================================

/// Scalars as they arrive in request bodies.
fn scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::from),
        "[ \t]{0,3}[a-zA-Z0-9 ]{0,12}[ \t\n]{0,3}".prop_map(Value::String),
    ]
}

/// Records drawn from a small shared field pool so batches are ragged.
fn record() -> impl Strategy<Value = Record> {
    prop::collection::vec(("(id|name|age|city|note)", scalar()), 0..5)
        .prop_map(|fields| fields.into_iter().collect::<Record>())
}

fn batch() -> impl Strategy<Value = Vec<Record>> {
    prop::collection::vec(record(), 0..12)
}

fn sanitizing_mode() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None),
        Just(Some("basic".to_string())),
        Just(Some("statistical".to_string())),
        "[a-z]{1,8}".prop_map(Some),
    ]
    .prop_filter("generative needs a model", |m| m.as_deref() != Some("generative"))
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn prop_sanitizing_modes_clean_every_row(input in batch(), mode in sanitizing_mode()) {
        let envelope = BatchProcessor::new().process(&input, mode.as_deref());

        prop_assert_eq!(envelope.data().len(), input.len());
        prop_assert!(envelope.error_rows().is_empty());
        prop_assert!(envelope.error().is_none());

        for (original, cleaned) in input.iter().zip(envelope.data()) {
            for (field, value) in cleaned {
                match value {
                    Value::Null => prop_assert!(false, "null survived in field {}", field),
                    Value::String(s) => prop_assert_eq!(s.trim(), s.as_str()),
                    _ => {}
                }
                if original.get(field).is_none_or(Value::is_null) {
                    prop_assert_eq!(value, &Value::String(String::new()));
                }
            }
        }
    }

    #[test]
    fn prop_sanitizing_modes_are_deterministic(input in batch(), mode in sanitizing_mode()) {
        let processor = BatchProcessor::new();
        prop_assert_eq!(
            processor.process(&input, mode.as_deref()),
            processor.process(&input, mode.as_deref())
        );
    }

    #[test]
    fn prop_used_ai_echoes_mode(input in batch(), mode in sanitizing_mode()) {
        let envelope = BatchProcessor::new().process(&input, mode.as_deref());
        prop_assert_eq!(envelope.used_ai(), mode.as_deref().unwrap_or("statistical"));
    }

    #[test]
    fn prop_generative_failures_return_originals(input in batch()) {
        let processor = BatchProcessor::new().with_model(MockModel::failing("down"));
        let envelope = processor.process(&input, Some("generative"));

        prop_assert_eq!(envelope.data(), input.as_slice());
        prop_assert_eq!(envelope.error_rows().len(), input.len());
        for (i, row_error) in envelope.error_rows().iter().enumerate() {
            prop_assert_eq!(row_error.row_index, i + 1);
            prop_assert_eq!(&row_error.data, &input[i]);
        }
    }

    #[test]
    fn prop_generative_echo_keeps_row_count(input in batch()) {
        let processor = BatchProcessor::new().with_model(MockModel::new());
        let envelope = processor.process(&input, Some("generative"));

        prop_assert_eq!(envelope.data().len(), input.len());
        prop_assert!(envelope.error_rows().is_empty());
    }

    #[test]
    fn prop_missing_credential_returns_no_data(input in batch()) {
        let processor = BatchProcessor::new().with_model(MockModel::without_credential());
        let envelope = processor.process(&input, Some("generative"));

        prop_assert!(envelope.data().is_empty());
        prop_assert!(envelope.error().is_some());
    }
}
