//! Gemini generateContent client.
//! Used for the prompt-only planning operations and the image analysis
//! operations, where the image travels as base64 inline data.

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::debug;

use super::AiError;

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";
const DEFAULT_MODEL: &str = "gemini-1.5-flash";

/// Gemini client configuration
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    /// API key for the Gemini API
    pub api_key: String,
    /// Model identifier to request
    pub model: String,
}

impl GeminiConfig {
    /// Build the configuration from GEMINI_API_KEY and GEMINI_MODEL
    pub fn from_env() -> Self {
        Self {
            api_key: std::env::var("GEMINI_API_KEY").unwrap_or_default(),
            model: std::env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
        }
    }
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: DEFAULT_MODEL.to_string(),
        }
    }
}

/// Trait for Gemini generateContent operations
#[async_trait]
pub trait GeminiApi: Send + Sync {
    /// Generate content from a text prompt
    async fn generate(&self, prompt: &str) -> Result<String, AiError>;

    /// Generate content from a text prompt and an inline image
    async fn generate_with_image(
        &self,
        prompt: &str,
        mime_type: &str,
        image: &[u8],
    ) -> Result<String, AiError>;
}

/// HTTP client for the Gemini generateContent API
pub struct GeminiClient {
    config: GeminiConfig,
    client: reqwest::Client,
}

impl GeminiClient {
    /// Create a new client with the given configuration
    pub fn new(config: GeminiConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    /// Create a client configured from the environment
    pub fn from_env() -> Self {
        Self::new(GeminiConfig::from_env())
    }

    async fn generate_from_parts(&self, parts: Vec<Value>) -> Result<String, AiError> {
        if self.config.api_key.is_empty() {
            return Err(AiError::MissingApiKey("Gemini"));
        }

        let url = format!(
            "{}/{}:generateContent?key={}",
            GEMINI_API_BASE, self.config.model, self.config.api_key
        );
        let body = json!({ "contents": [{ "parts": parts }] });

        debug!(model = %self.config.model, "Sending Gemini generateContent request");

        let response = self.client.post(&url).json(&body).send().await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(AiError::Provider { status, body });
        }

        let generated: GenerateResponse = response.json().await?;
        extract_text(generated).ok_or(AiError::EmptyResponse)
    }
}

#[async_trait]
impl GeminiApi for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String, AiError> {
        self.generate_from_parts(vec![json!({ "text": prompt })]).await
    }

    async fn generate_with_image(
        &self,
        prompt: &str,
        mime_type: &str,
        image: &[u8],
    ) -> Result<String, AiError> {
        let parts = vec![
            json!({ "text": prompt }),
            json!({
                "inlineData": {
                    "mimeType": mime_type,
                    "data": STANDARD.encode(image),
                }
            }),
        ];
        self.generate_from_parts(parts).await
    }
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    candidates: Option<Vec<Candidate>>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Debug, Deserialize)]
struct Content {
    parts: Option<Vec<Part>>,
}

#[derive(Debug, Deserialize)]
struct Part {
    text: Option<String>,
}

/// Concatenate the text parts of the first candidate
fn extract_text(response: GenerateResponse) -> Option<String> {
    let parts = response.candidates?.into_iter().next()?.content?.parts?;
    let text: String = parts.into_iter().filter_map(|part| part.text).collect();
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_text_from_first_candidate() {
        let response: GenerateResponse = serde_json::from_str(
            r#"{"candidates":[{"content":{"parts":[{"text":"Hello "},{"text":"world"}]}}]}"#,
        )
        .unwrap();
        assert_eq!(extract_text(response).unwrap(), "Hello world");
    }

    #[test]
    fn empty_candidates_yield_none() {
        let response: GenerateResponse = serde_json::from_str(r#"{"candidates":[]}"#).unwrap();
        assert!(extract_text(response).is_none());
    }

    #[test]
    fn default_config_uses_flash_model() {
        let config = GeminiConfig::default();
        assert_eq!(config.model, "gemini-1.5-flash");
    }
}
