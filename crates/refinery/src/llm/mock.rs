//! Mock generative model for testing.

use std::sync::atomic::{AtomicUsize, Ordering};

use crate::error::{RefineryError, Result};

use super::provider::{GenerativeModel, ModelConfig};

type Responder = Box<dyn Fn(usize, &str) -> Result<String> + Send + Sync>;

/// Mock model that returns predictable responses for testing.
///
/// The default responder echoes the prompt, the way text-generation endpoints
/// do when they return the full text. Because the prompt embeds the record as
/// its only JSON object, echoing always extracts cleanly.
pub struct MockModel {
    config: ModelConfig,
    credential: bool,
    responder: Responder,
    calls: AtomicUsize,
}

impl MockModel {
    /// Create a mock that echoes every prompt.
    pub fn new() -> Self {
        Self::with_responder(|_, prompt| Ok(prompt.to_string()))
    }

    /// Create a mock whose reply is computed from the 0-based call index and
    /// the prompt.
    pub fn with_responder(
        responder: impl Fn(usize, &str) -> Result<String> + Send + Sync + 'static,
    ) -> Self {
        Self {
            config: ModelConfig::default().with_model("mock"),
            credential: true,
            responder: Box::new(responder),
            calls: AtomicUsize::new(0),
        }
    }

    /// Create a mock that always returns the same text.
    pub fn replying(text: impl Into<String>) -> Self {
        let text = text.into();
        Self::with_responder(move |_, _| Ok(text.clone()))
    }

    /// Create a mock whose every call fails with a request error.
    pub fn failing(message: impl Into<String>) -> Self {
        let message = message.into();
        Self::with_responder(move |_, _| Err(RefineryError::Request(message.clone())))
    }

    /// Create a mock reporting that no credential is configured.
    pub fn without_credential() -> Self {
        let mut mock = Self::new();
        mock.credential = false;
        mock
    }

    /// Number of times `generate` has been called.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Default for MockModel {
    fn default() -> Self {
        Self::new()
    }
}

impl GenerativeModel for MockModel {
    fn has_credential(&self) -> bool {
        self.credential
    }

    fn credential_name(&self) -> &str {
        "MOCK_API_KEY"
    }

    fn generate(&self, prompt: &str) -> Result<String> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        (self.responder)(call, prompt)
    }

    fn config(&self) -> &ModelConfig {
        &self.config
    }

    fn name(&self) -> &str {
        "mock"
    }
}
