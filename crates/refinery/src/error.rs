//! Error types for the Refinery library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for Refinery operations.
#[derive(Debug, Error)]
pub enum RefineryError {
    /// Error reading or accessing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error from the CSV library.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// File format not supported.
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Empty file or no records to load.
    #[error("Empty data: {0}")]
    EmptyData(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The selected strategy needs a credential that is not configured.
    #[error("{0} not set in environment.")]
    MissingCredential(String),

    /// The model call exceeded its wall-clock ceiling.
    #[error("Request to {provider} timed out after {seconds}s")]
    Timeout { provider: String, seconds: u64 },

    /// The model endpoint answered with a non-2xx status.
    #[error("HTTP error: {status} - {body}")]
    Http { status: u16, body: String },

    /// The model call failed before a response was received.
    #[error("Request failed: {0}")]
    Request(String),

    /// The model answered without any generated text.
    #[error("Model returned no generated text")]
    EmptyGeneration,

    /// No brace-delimited object was found in the generated text.
    #[error("No JSON object found in model output")]
    NoJsonObject,

    /// The extracted JSON parsed, but not into an object.
    #[error("Extracted JSON is not an object")]
    NotAnObject,

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for Refinery operations.
pub type Result<T> = std::result::Result<T, RefineryError>;
