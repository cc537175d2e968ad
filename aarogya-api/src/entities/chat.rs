use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use aarogya_domain::entities::SupportReply as DomainSupportReply;

/// Request body for the chat routes
#[derive(Debug, Deserialize, ToSchema)]
pub struct ChatRequest {
    /// The user's message
    pub message: Option<String>,
}

/// The assistant block of a support chat reply
#[derive(Debug, Serialize, ToSchema)]
pub struct SupportAssistant {
    /// Assistant display name
    pub name: String,
    /// Assistant role description
    pub role: String,
    /// The assistant's reply to the user
    pub response: String,
}

/// Response body for the mental-health support route
#[derive(Debug, Serialize, ToSchema)]
pub struct SupportResponse {
    /// The assistant reply
    pub assistant: SupportAssistant,
    /// Short coping suggestions
    pub coping_tips: Vec<String>,
    /// Whether the message suggests a crisis situation
    pub crisis_check: bool,
    /// Language the reply is written in
    pub language: String,
}

impl From<DomainSupportReply> for SupportResponse {
    fn from(reply: DomainSupportReply) -> Self {
        Self {
            assistant: SupportAssistant {
                name: reply.assistant.name,
                role: reply.assistant.role,
                response: reply.assistant.response,
            },
            coping_tips: reply.coping_tips,
            crisis_check: reply.crisis_check,
            language: reply.language,
        }
    }
}
