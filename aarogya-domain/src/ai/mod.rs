//! AI provider clients and output normalization.
//! Groq serves the chat-completions operations, Gemini the prompt and
//! image operations. Model output is normalized by the `extract` helpers
//! before parsing; parse failures carry the raw model text.

pub mod extract;
pub mod gemini;
pub mod groq;
pub mod prompts;

pub use gemini::{GeminiApi, GeminiClient, GeminiConfig};
pub use groq::{GroqApi, GroqClient, GroqConfig};

use std::pin::Pin;

use futures::Stream;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// AI provider errors
#[derive(Debug, Error)]
pub enum AiError {
    /// The provider API key is not configured
    #[error("{0} API key is not configured")]
    MissingApiKey(&'static str),

    /// The outbound request failed
    #[error("Provider request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The provider returned a non-success status
    #[error("Provider returned status {status}: {body}")]
    Provider { status: u16, body: String },

    /// The model returned no usable content
    #[error("Model returned an empty response")]
    EmptyResponse,

    /// The model output could not be parsed; `raw` holds the model text
    #[error("Failed to parse model output: {message}")]
    Parse { message: String, raw: String },
}

/// A single chat-completions message
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    /// Create a system message
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    /// Create a user message
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Stream of model tokens in arrival order
pub type TokenStream = Pin<Box<dyn Stream<Item = Result<String, AiError>> + Send>>;
