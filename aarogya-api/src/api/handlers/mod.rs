pub mod chat;
pub mod contacts;
pub mod health;
pub mod medicine;
pub mod nearby;
pub mod plans;
pub mod prescriptions;
pub mod trackers;
pub mod vision;
pub mod wellness;

// Tests module
#[cfg(test)]
mod tests;

use aarogya_domain::ai::AiError;

use crate::entities::common::PublicErrorResponse;

/// Map an AI provider error to a public error response.
/// Parse failures carry the raw model text so the client can show it.
pub(crate) fn map_ai_error(err: &AiError) -> PublicErrorResponse {
    match err {
        AiError::Parse { message, raw } => PublicErrorResponse::parse_error(message, raw),
        other => PublicErrorResponse {
            error: "upstream_error".to_string(),
            message: other.to_string(),
            details: None,
        },
    }
}
