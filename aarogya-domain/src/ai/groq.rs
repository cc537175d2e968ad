//! Groq chat-completions client.
//! Supports one-shot completions and streamed completions where the
//! upstream SSE body is reassembled line by line into a token stream.

use async_trait::async_trait;
use futures::{future, stream, StreamExt};
use serde::Deserialize;
use tracing::debug;

use super::{AiError, ChatMessage, TokenStream};

const GROQ_API_URL: &str = "https://api.groq.com/openai/v1/chat/completions";
const DEFAULT_MODEL: &str = "meta-llama/llama-4-scout-17b-16e-instruct";

/// Groq client configuration
#[derive(Debug, Clone)]
pub struct GroqConfig {
    /// API key for the Groq API
    pub api_key: String,
    /// Model identifier to request
    pub model: String,
}

impl GroqConfig {
    /// Build the configuration from GROQ_API_KEY and GROQ_MODEL
    pub fn from_env() -> Self {
        Self {
            api_key: std::env::var("GROQ_API_KEY").unwrap_or_default(),
            model: std::env::var("GROQ_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
        }
    }
}

impl Default for GroqConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: DEFAULT_MODEL.to_string(),
        }
    }
}

/// Trait for Groq chat-completions operations
#[async_trait]
pub trait GroqApi: Send + Sync {
    /// Request a completion and return the full message content
    async fn complete(&self, messages: Vec<ChatMessage>) -> Result<String, AiError>;

    /// Request a streamed completion and return the token stream
    async fn stream(&self, messages: Vec<ChatMessage>) -> Result<TokenStream, AiError>;
}

/// HTTP client for the Groq chat-completions API
pub struct GroqClient {
    config: GroqConfig,
    client: reqwest::Client,
}

impl GroqClient {
    /// Create a new client with the given configuration
    pub fn new(config: GroqConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    /// Create a client configured from the environment
    pub fn from_env() -> Self {
        Self::new(GroqConfig::from_env())
    }

    async fn send(&self, messages: &[ChatMessage], streaming: bool) -> Result<reqwest::Response, AiError> {
        if self.config.api_key.is_empty() {
            return Err(AiError::MissingApiKey("Groq"));
        }

        let body = serde_json::json!({
            "model": self.config.model,
            "messages": messages,
            "stream": streaming,
        });

        debug!(model = %self.config.model, streaming, "Sending Groq chat-completions request");

        let response = self
            .client
            .post(GROQ_API_URL)
            .bearer_auth(&self.config.api_key)
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(AiError::Provider { status, body });
        }

        Ok(response)
    }
}

#[async_trait]
impl GroqApi for GroqClient {
    async fn complete(&self, messages: Vec<ChatMessage>) -> Result<String, AiError> {
        let response = self.send(&messages, false).await?;
        let completion: Completion = response.json().await?;

        completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|content| !content.is_empty())
            .ok_or(AiError::EmptyResponse)
    }

    async fn stream(&self, messages: Vec<ChatMessage>) -> Result<TokenStream, AiError> {
        let response = self.send(&messages, true).await?;

        // Reassemble upstream SSE lines across byte chunks. Buffer holds the
        // partial trailing line; the stream ends at [DONE] or a finish_reason.
        let tokens = response
            .bytes_stream()
            .scan((String::new(), false), |(buffer, finished), chunk| {
                if *finished {
                    return future::ready(None);
                }

                let mut out: Vec<Result<String, AiError>> = Vec::new();
                match chunk {
                    Ok(bytes) => {
                        buffer.push_str(&String::from_utf8_lossy(&bytes));
                        while let Some(pos) = buffer.find('\n') {
                            let line: String = buffer.drain(..=pos).collect();
                            if let Some(parsed) = parse_sse_line(&line) {
                                out.extend(parsed.tokens.into_iter().map(Ok));
                                if parsed.done {
                                    *finished = true;
                                    break;
                                }
                            }
                        }
                    }
                    Err(e) => {
                        out.push(Err(AiError::Request(e)));
                        *finished = true;
                    }
                }

                future::ready(Some(stream::iter(out)))
            })
            .flatten();

        Ok(Box::pin(tokens))
    }
}

#[derive(Debug, Deserialize)]
struct Completion {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: Message,
}

#[derive(Debug, Deserialize)]
struct Message {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct StreamChunk {
    choices: Vec<StreamChoice>,
}

#[derive(Debug, Deserialize)]
struct StreamChoice {
    delta: StreamDelta,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct StreamDelta {
    content: Option<String>,
}

/// Tokens carried by one upstream SSE line, and whether the stream ended
struct ParsedLine {
    tokens: Vec<String>,
    done: bool,
}

/// Parse one line of an upstream SSE body. Returns None for lines that
/// carry no data (blank lines, comments, event fields).
fn parse_sse_line(line: &str) -> Option<ParsedLine> {
    let line = line.trim();
    let data = line.strip_prefix("data: ")?;

    if data == "[DONE]" {
        return Some(ParsedLine {
            tokens: Vec::new(),
            done: true,
        });
    }

    let chunk: StreamChunk = serde_json::from_str(data).ok()?;
    let mut tokens = Vec::new();
    let mut done = false;
    for choice in chunk.choices {
        if let Some(content) = choice.delta.content {
            if !content.is_empty() {
                tokens.push(content);
            }
        }
        if choice.finish_reason.is_some() {
            done = true;
        }
    }

    Some(ParsedLine { tokens, done })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_token_from_data_line() {
        let line = r#"data: {"choices":[{"delta":{"content":"Hel"},"finish_reason":null}]}"#;
        let parsed = parse_sse_line(line).unwrap();
        assert_eq!(parsed.tokens, vec!["Hel".to_string()]);
        assert!(!parsed.done);
    }

    #[test]
    fn done_sentinel_terminates_stream() {
        let parsed = parse_sse_line("data: [DONE]").unwrap();
        assert!(parsed.tokens.is_empty());
        assert!(parsed.done);
    }

    #[test]
    fn finish_reason_terminates_stream() {
        let line = r#"data: {"choices":[{"delta":{},"finish_reason":"stop"}]}"#;
        let parsed = parse_sse_line(line).unwrap();
        assert!(parsed.done);
    }

    #[test]
    fn skips_blank_and_non_data_lines() {
        assert!(parse_sse_line("").is_none());
        assert!(parse_sse_line(": keep-alive").is_none());
        assert!(parse_sse_line("event: message").is_none());
    }

    #[test]
    fn default_config_uses_llama_scout() {
        let config = GroqConfig::default();
        assert_eq!(config.model, "meta-llama/llama-4-scout-17b-16e-instruct");
    }
}
