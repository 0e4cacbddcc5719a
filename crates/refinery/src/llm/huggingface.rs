//! Hugging Face hosted inference API implementation.

use reqwest::blocking::Client;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use serde::Deserialize;
use serde_json::json;

use crate::error::{RefineryError, Result};

use super::provider::{GenerativeModel, ModelConfig};

/// Hugging Face inference endpoint prefix.
const DEFAULT_API_BASE: &str = "https://api-inference.huggingface.co/models";

/// Environment variable holding the API token.
pub const API_KEY_VAR: &str = "HUGGINGFACE_API_KEY";

/// Environment variable selecting the model.
pub const MODEL_VAR: &str = "HUGGINGFACE_MODEL";

/// Hugging Face text-generation model.
pub struct HuggingFaceModel {
    client: Client,
    api_key: Option<String>,
    api_base: String,
    config: ModelConfig,
}

impl HuggingFaceModel {
    /// Create a model client. An empty or absent key means generative mode is
    /// unavailable, not that construction fails.
    pub fn new(api_key: Option<String>) -> Result<Self> {
        Self::with_config(api_key, ModelConfig::default())
    }

    /// Create with custom configuration.
    pub fn with_config(api_key: Option<String>, config: ModelConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| RefineryError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            api_key: api_key.filter(|key| !key.trim().is_empty()),
            api_base: DEFAULT_API_BASE.to_string(),
            config,
        })
    }

    /// Create from `HUGGINGFACE_API_KEY` and `HUGGINGFACE_MODEL`.
    pub fn from_env() -> Result<Self> {
        let mut config = ModelConfig::default();
        if let Ok(model) = std::env::var(MODEL_VAR) {
            config.model = model;
        }
        Self::with_config(std::env::var(API_KEY_VAR).ok(), config)
    }

    /// Point at a different inference host (e.g. a dedicated endpoint).
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into().trim_end_matches('/').to_string();
        self
    }

    fn endpoint(&self) -> String {
        format!("{}/{}", self.api_base, self.config.model)
    }

    /// Build headers for API requests.
    fn build_headers(&self, api_key: &str) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", api_key))
                .map_err(|e| RefineryError::Config(format!("Invalid API key: {}", e)))?,
        );
        Ok(headers)
    }

    fn map_send_error(&self, e: reqwest::Error) -> RefineryError {
        if e.is_timeout() {
            RefineryError::Timeout {
                provider: "Hugging Face".to_string(),
                seconds: self.config.timeout.as_secs(),
            }
        } else {
            RefineryError::Request(e.to_string())
        }
    }
}

impl GenerativeModel for HuggingFaceModel {
    fn has_credential(&self) -> bool {
        self.api_key.is_some()
    }

    fn credential_name(&self) -> &str {
        API_KEY_VAR
    }

    fn generate(&self, prompt: &str) -> Result<String> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| RefineryError::MissingCredential(API_KEY_VAR.to_string()))?;

        let body = json!({
            "inputs": prompt,
            "parameters": {
                "max_new_tokens": self.config.max_new_tokens,
                "temperature": self.config.temperature,
                "return_full_text": false
            },
            "options": {
                "wait_for_model": true
            }
        });

        let response = self
            .client
            .post(self.endpoint())
            .headers(self.build_headers(api_key)?)
            .json(&body)
            .send()
            .map_err(|e| self.map_send_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().unwrap_or_default();
            return Err(RefineryError::Http {
                status: status.as_u16(),
                body: error_text,
            });
        }

        let text = response.text().map_err(|e| self.map_send_error(e))?;
        parse_generation(&text)
    }

    fn config(&self) -> &ModelConfig {
        &self.config
    }

    fn name(&self) -> &str {
        "huggingface"
    }
}

/// Pull the generated text out of an inference API body.
///
/// The API answers with either a single object or a list of objects, each
/// carrying `generated_text`. The first non-empty text wins.
fn parse_generation(body: &str) -> Result<String> {
    let parsed: GenerationResponse = serde_json::from_str(body)?;

    let text = match parsed {
        GenerationResponse::Many(items) => items
            .into_iter()
            .find_map(|g| g.generated_text.filter(|t| !t.trim().is_empty())),
        GenerationResponse::One(item) => item.generated_text,
        GenerationResponse::Error { error } => return Err(RefineryError::Request(error)),
        GenerationResponse::Text(text) => Some(text),
    };

    text.filter(|t| !t.trim().is_empty())
        .ok_or(RefineryError::EmptyGeneration)
}

/// Inference API response body.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum GenerationResponse {
    Error { error: String },
    Many(Vec<Generation>),
    One(Generation),
    Text(String),
}

/// A single generation.
#[derive(Debug, Deserialize)]
struct Generation {
    #[serde(default)]
    generated_text: Option<String>,
}
