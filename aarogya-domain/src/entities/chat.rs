use serde::{Deserialize, Serialize};

/// Structured reply from the mental-health support assistant
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SupportReply {
    /// The assistant persona and its message
    pub assistant: SupportAssistant,
    /// Up to five gentle coping suggestions
    pub coping_tips: Vec<String>,
    /// True when the user's message indicated a crisis
    pub crisis_check: bool,
    /// Language detected in the user's message
    pub language: String,
}

/// The assistant persona section of a support reply
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SupportAssistant {
    pub name: String,
    pub role: String,
    pub response: String,
}
