use async_trait::async_trait;
use thiserror::Error;
use tracing::debug;

use crate::ai::{extract, prompts, AiError, ChatMessage, GroqApi, GroqClient, TokenStream};
use crate::entities::SupportReply;

/// Chat service errors
#[derive(Debug, Error)]
pub enum ChatServiceError {
    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// AI provider error
    #[error(transparent)]
    Ai(#[from] AiError),
}

/// Trait for chat operations backed by the Groq model
#[async_trait]
pub trait ChatServiceTrait: Send + Sync {
    /// Stream the symptom triage reply for a user message
    async fn symptom_stream(&self, message: &str) -> Result<TokenStream, ChatServiceError>;

    /// Stream the lab-report explanation for pasted results
    async fn lab_report_stream(&self, message: &str) -> Result<TokenStream, ChatServiceError>;

    /// Get a structured mental-health support reply
    async fn support_reply(&self, message: &str) -> Result<SupportReply, ChatServiceError>;
}

/// Chat service forwarding user messages to the Groq model
pub struct ChatService<G: GroqApi> {
    groq: G,
}

impl<G: GroqApi> ChatService<G> {
    /// Create a new chat service
    pub fn new(groq: G) -> Self {
        Self { groq }
    }
}

fn require_message(message: &str) -> Result<(), ChatServiceError> {
    if message.trim().is_empty() {
        return Err(ChatServiceError::Validation(
            "Message is required".to_string(),
        ));
    }
    Ok(())
}

#[async_trait]
impl<G: GroqApi> ChatServiceTrait for ChatService<G> {
    async fn symptom_stream(&self, message: &str) -> Result<TokenStream, ChatServiceError> {
        require_message(message)?;
        debug!("Starting symptom chat stream");

        let messages = vec![
            ChatMessage::system(prompts::SYMPTOM_CHAT_SYSTEM),
            ChatMessage::user(message),
        ];
        Ok(self.groq.stream(messages).await?)
    }

    async fn lab_report_stream(&self, message: &str) -> Result<TokenStream, ChatServiceError> {
        require_message(message)?;
        debug!("Starting lab-report explainer stream");

        let messages = vec![
            ChatMessage::system(prompts::LAB_REPORT_SYSTEM),
            ChatMessage::user(message),
        ];
        Ok(self.groq.stream(messages).await?)
    }

    async fn support_reply(&self, message: &str) -> Result<SupportReply, ChatServiceError> {
        require_message(message)?;

        let messages = vec![
            ChatMessage::system(prompts::SUPPORT_SYSTEM),
            ChatMessage::user(message),
        ];
        let content = self.groq.complete(messages).await?;
        Ok(extract::parse_json_as(&content)?)
    }
}

/// Create a chat service backed by the Groq API
pub fn create_default_chat_service() -> impl ChatServiceTrait + Send + Sync {
    ChatService::new(GroqClient::from_env())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MockGroqApi;
    use futures::StreamExt;

    #[tokio::test]
    async fn empty_message_is_rejected() {
        let service = ChatService::new(MockGroqApi::with_tokens(vec!["hi"]));
        let result = service.symptom_stream("   ").await;
        assert!(matches!(result, Err(ChatServiceError::Validation(_))));
    }

    #[tokio::test]
    async fn symptom_stream_forwards_tokens_in_order() {
        let service = ChatService::new(MockGroqApi::with_tokens(vec!["Sym", "ptom", "s"]));
        let stream = service.symptom_stream("I have a headache").await.unwrap();
        let tokens: Vec<String> = stream.map(|t| t.unwrap()).collect().await;
        assert_eq!(tokens, vec!["Sym", "ptom", "s"]);
    }

    #[tokio::test]
    async fn support_reply_parses_strict_json() {
        let reply = r#"{
            "assistant": {"name": "Asha", "role": "Mental Health Support Assistant", "response": "I'm here for you."},
            "coping_tips": ["Deep breathing", "Journaling"],
            "crisis_check": false,
            "language": "English"
        }"#;
        let service = ChatService::new(MockGroqApi::with_reply(reply));
        let parsed = service.support_reply("I feel stressed").await.unwrap();
        assert_eq!(parsed.assistant.name, "Asha");
        assert_eq!(parsed.coping_tips.len(), 2);
        assert!(!parsed.crisis_check);
    }

    #[tokio::test]
    async fn support_reply_surfaces_raw_text_on_parse_failure() {
        let service = ChatService::new(MockGroqApi::with_reply("I am not JSON"));
        let err = service.support_reply("hello").await.unwrap_err();
        match err {
            ChatServiceError::Ai(AiError::Parse { raw, .. }) => assert_eq!(raw, "I am not JSON"),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
