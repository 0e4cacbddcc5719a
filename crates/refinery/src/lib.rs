//! Refinery: record cleaning and model-assisted enrichment for tabular batches.
//!
//! A batch of schema-free records goes through one of three strategies:
//!
//! - **basic**: trim strings, fill nulls and missing fields with `""`
//! - **statistical**: same as basic today; reserved for a statistical model
//! - **generative**: each row is rewritten by a text-generation model, with the
//!   original row kept whenever the model call or its output fails
//!
//! Row failures never abort a batch. Every batch produces a
//! [`ResponseEnvelope`].
//!
//! # Example
//!
//! ```
//! use refinery::{BatchProcessor, Record};
//! use serde_json::json;
//!
//! let records: Vec<Record> =
//!     serde_json::from_value(json!([{"name": " Alice ", "age": null}])).unwrap();
//!
//! let envelope = BatchProcessor::new().process(&records, Some("basic"));
//! assert_eq!(envelope.data()[0]["name"], json!("Alice"));
//! assert_eq!(envelope.data()[0]["age"], json!(""));
//! ```

pub mod envelope;
pub mod error;
pub mod input;
pub mod llm;
pub mod mode;
pub mod record;
pub mod sanitize;
pub mod strategy;

mod processor;

pub use envelope::{BatchFailure, EnrichmentReport, ResponseEnvelope, RowError};
pub use error::{RefineryError, Result};
pub use input::RecordLoader;
pub use llm::{GenerativeModel, HuggingFaceModel, MockModel, ModelConfig};
pub use mode::{ModeSelection, StrategyMode};
pub use processor::BatchProcessor;
pub use record::{Batch, Record};
pub use sanitize::sanitize;
pub use strategy::{EnrichmentStrategy, RowOutcome};
