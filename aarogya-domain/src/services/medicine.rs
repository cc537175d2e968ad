use async_trait::async_trait;
use thiserror::Error;

use crate::ai::{extract, prompts, AiError, ChatMessage, GroqApi, GroqClient};
use crate::entities::MedicineInfo;

/// Medicine service errors
#[derive(Debug, Error)]
pub enum MedicineServiceError {
    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// AI provider error
    #[error(transparent)]
    Ai(#[from] AiError),
}

/// Trait for medicine information lookups
#[async_trait]
pub trait MedicineServiceTrait: Send + Sync {
    /// Get structured usage information for a medicine name
    async fn medicine_info(&self, name: &str) -> Result<MedicineInfo, MedicineServiceError>;
}

/// Medicine information service backed by the Groq model
pub struct MedicineService<G: GroqApi> {
    groq: G,
}

impl<G: GroqApi> MedicineService<G> {
    /// Create a new medicine service
    pub fn new(groq: G) -> Self {
        Self { groq }
    }
}

#[async_trait]
impl<G: GroqApi> MedicineServiceTrait for MedicineService<G> {
    async fn medicine_info(&self, name: &str) -> Result<MedicineInfo, MedicineServiceError> {
        if name.trim().is_empty() {
            return Err(MedicineServiceError::Validation(
                "Medicine name is required".to_string(),
            ));
        }

        let messages = vec![
            ChatMessage::system(prompts::MEDICINE_SYSTEM),
            ChatMessage::user(name),
        ];
        let content = self.groq.complete(messages).await?;
        Ok(extract::parse_json_as(&content)?)
    }
}

/// Create a medicine service backed by the Groq API
pub fn create_default_medicine_service() -> impl MedicineServiceTrait + Send + Sync {
    MedicineService::new(GroqClient::from_env())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MockGroqApi;

    #[tokio::test]
    async fn parses_medicine_info_json() {
        let reply = r#"{
            "medicine": "Paracetamol",
            "use_for": "Fever and mild pain",
            "dosage_and_usage": "500mg every 6 hours after food",
            "long_term_side_effects": "Possible liver strain with chronic use",
            "precautions": "Avoid with liver disease",
            "note": "Consult a doctor if fever persists beyond 3 days"
        }"#;
        let service = MedicineService::new(MockGroqApi::with_reply(reply));
        let info = service.medicine_info("Paracetamol").await.unwrap();
        assert_eq!(info.medicine, "Paracetamol");
        assert!(info.use_for.contains("Fever"));
    }

    #[tokio::test]
    async fn blank_name_is_rejected() {
        let service = MedicineService::new(MockGroqApi::with_reply("{}"));
        let result = service.medicine_info("").await;
        assert!(matches!(result, Err(MedicineServiceError::Validation(_))));
    }
}
