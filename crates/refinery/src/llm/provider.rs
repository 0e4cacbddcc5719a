//! Model capability trait and configuration.

use std::time::Duration;

use crate::error::Result;

/// Configuration shared by model implementations.
#[derive(Debug, Clone)]
pub struct ModelConfig {
    /// Model identifier (e.g., "gpt2").
    pub model: String,

    /// Maximum number of tokens to generate.
    pub max_new_tokens: usize,

    /// Sampling temperature (0.0-1.0).
    pub temperature: f64,

    /// Wall-clock ceiling for a single call.
    pub timeout: Duration,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            model: "gpt2".to_string(),
            max_new_tokens: 256,
            temperature: 0.2,
            timeout: Duration::from_secs(20),
        }
    }
}

impl ModelConfig {
    /// Set the model identifier.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set the per-call timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the generation length.
    pub fn with_max_new_tokens(mut self, max_new_tokens: usize) -> Self {
        self.max_new_tokens = max_new_tokens;
        self
    }
}

/// A text-generation capability.
///
/// Implementations must be thread-safe (Send + Sync) so a single instance can
/// serve concurrent requests.
pub trait GenerativeModel: Send + Sync {
    /// Whether the credential needed to call the model is configured.
    fn has_credential(&self) -> bool;

    /// Name of the credential, used in the missing-credential message.
    fn credential_name(&self) -> &str;

    /// Generate text for a prompt.
    ///
    /// Network failures, timeouts, non-2xx responses and responses without
    /// generated text are all errors.
    fn generate(&self, prompt: &str) -> Result<String>;

    /// Get the configuration for this model.
    fn config(&self) -> &ModelConfig;

    /// Get the name of this provider (for logging/debugging).
    fn name(&self) -> &str;
}
