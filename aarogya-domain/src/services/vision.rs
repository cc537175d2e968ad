use async_trait::async_trait;
use thiserror::Error;
use tracing::debug;

use crate::ai::{extract, prompts, AiError, GeminiApi, GeminiClient};
use crate::entities::{CalorieEstimate, ImageAssessment};

/// Vision service errors
#[derive(Debug, Error)]
pub enum VisionServiceError {
    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// AI provider error
    #[error(transparent)]
    Ai(#[from] AiError),
}

/// Trait for image analysis operations backed by Gemini
#[async_trait]
pub trait VisionServiceTrait: Send + Sync {
    /// Estimate the calories in a food photo
    async fn analyze_calories(
        &self,
        mime_type: &str,
        image: &[u8],
    ) -> Result<CalorieEstimate, VisionServiceError>;

    /// Assess a visible skin condition from a photo
    async fn assess_skin(
        &self,
        mime_type: &str,
        image: &[u8],
    ) -> Result<ImageAssessment, VisionServiceError>;

    /// Screen a nail photo for visual signs of anemia
    async fn screen_anemia(
        &self,
        mime_type: &str,
        image: &[u8],
    ) -> Result<ImageAssessment, VisionServiceError>;
}

/// Vision analysis service over the Gemini API
pub struct VisionService<M: GeminiApi> {
    gemini: M,
}

impl<M: GeminiApi> VisionService<M> {
    /// Create a new vision service
    pub fn new(gemini: M) -> Self {
        Self { gemini }
    }

    async fn analyze(
        &self,
        instruction: &str,
        mime_type: &str,
        image: &[u8],
    ) -> Result<String, VisionServiceError> {
        if image.is_empty() {
            return Err(VisionServiceError::Validation(
                "No image uploaded".to_string(),
            ));
        }

        debug!(mime_type, bytes = image.len(), "Analyzing image");
        Ok(self.gemini.generate_with_image(instruction, mime_type, image).await?)
    }
}

#[async_trait]
impl<M: GeminiApi> VisionServiceTrait for VisionService<M> {
    async fn analyze_calories(
        &self,
        mime_type: &str,
        image: &[u8],
    ) -> Result<CalorieEstimate, VisionServiceError> {
        let text = self
            .analyze(prompts::CALORIE_VISION_INSTRUCTION, mime_type, image)
            .await?;
        Ok(extract::parse_json_as(&text)?)
    }

    async fn assess_skin(
        &self,
        mime_type: &str,
        image: &[u8],
    ) -> Result<ImageAssessment, VisionServiceError> {
        let text = self
            .analyze(prompts::SKIN_VISION_INSTRUCTION, mime_type, image)
            .await?;
        Ok(extract::parse_json_as(&text)?)
    }

    async fn screen_anemia(
        &self,
        mime_type: &str,
        image: &[u8],
    ) -> Result<ImageAssessment, VisionServiceError> {
        let text = self
            .analyze(prompts::ANEMIA_VISION_INSTRUCTION, mime_type, image)
            .await?;
        Ok(extract::parse_json_as(&text)?)
    }
}

/// Create a vision service backed by the Gemini API
pub fn create_default_vision_service() -> impl VisionServiceTrait + Send + Sync {
    VisionService::new(GeminiClient::from_env())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MockGeminiApi;

    #[tokio::test]
    async fn calorie_reply_with_fence_is_normalized() {
        let reply = "```json\n{\"items\": [\"Chapati\", \"Dal\"], \"calories\": 450, \"advice\": \"Good fiber content.\"}\n```";
        let service = VisionService::new(MockGeminiApi::with_reply(reply));
        let estimate = service.analyze_calories("image/jpeg", b"fakeimage").await.unwrap();
        assert_eq!(estimate.items, vec!["Chapati", "Dal"]);
        assert_eq!(estimate.calories, serde_json::json!(450));
    }

    #[tokio::test]
    async fn skin_assessment_parses_plain_json() {
        let reply = r#"{"condition": "Acne", "severity": "Mild", "advice": "Use a gentle cleanser."}"#;
        let service = VisionService::new(MockGeminiApi::with_reply(reply));
        let assessment = service.assess_skin("image/png", b"fakeimage").await.unwrap();
        assert_eq!(assessment.severity, "Mild");
    }

    #[tokio::test]
    async fn empty_image_is_rejected() {
        let service = VisionService::new(MockGeminiApi::with_reply("{}"));
        let result = service.screen_anemia("image/png", b"").await;
        assert!(matches!(result, Err(VisionServiceError::Validation(_))));
    }
}
