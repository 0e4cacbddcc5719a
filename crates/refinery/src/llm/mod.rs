//! Generative model capability used by the generative enrichment strategy.
//!
//! The processor never reads credentials or endpoints itself. It is handed a
//! [`GenerativeModel`] at construction and asks it two things: whether a
//! credential is configured, and to generate text for a prompt.
//!
//! # Supported Providers
//!
//! - **Hugging Face** - hosted inference API (requires `HUGGINGFACE_API_KEY`)
//! - **Mock** - deterministic responses for tests
//!
//! # Example
//!
//! ```no_run
//! use refinery::{BatchProcessor, HuggingFaceModel};
//!
//! let processor = BatchProcessor::new()
//!     .with_model(HuggingFaceModel::from_env().unwrap());
//! let envelope = processor.process(&[], Some("generative"));
//! ```

mod huggingface;
mod mock;
mod prompts;
mod provider;

pub use huggingface::HuggingFaceModel;
pub use mock::MockModel;
pub use prompts::record_enrichment_prompt;
pub use provider::{GenerativeModel, ModelConfig};
