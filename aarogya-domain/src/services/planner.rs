use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use crate::ai::{
    extract, prompts, AiError, ChatMessage, GeminiApi, GeminiClient, GroqApi, GroqClient,
};
use crate::entities::{DietPlan, DietPlanInput, MeditationInput, MeditationPlan, YogaInput};

/// Planner service errors
#[derive(Debug, Error)]
pub enum PlannerServiceError {
    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// AI provider error
    #[error(transparent)]
    Ai(#[from] AiError),
}

/// Trait for AI-generated wellness plans.
/// Diet and travel checklists come from Groq; meditation and yoga
/// sessions come from Gemini.
#[async_trait]
pub trait PlannerServiceTrait: Send + Sync {
    /// Generate a 7-day meal plan
    async fn diet_plan(&self, input: DietPlanInput) -> Result<DietPlan, PlannerServiceError>;

    /// Generate a deployment health checklist for a location
    async fn travel_checklist(&self, location: &str) -> Result<Value, PlannerServiceError>;

    /// Generate a meditation session
    async fn meditation_plan(
        &self,
        input: MeditationInput,
    ) -> Result<MeditationPlan, PlannerServiceError>;

    /// Generate a yoga session as an array of asanas
    async fn yoga_plan(&self, input: YogaInput) -> Result<Value, PlannerServiceError>;
}

/// Planner service over both AI providers
pub struct PlannerService<G: GroqApi, M: GeminiApi> {
    groq: G,
    gemini: M,
}

impl<G: GroqApi, M: GeminiApi> PlannerService<G, M> {
    /// Create a new planner service
    pub fn new(groq: G, gemini: M) -> Self {
        Self { groq, gemini }
    }
}

#[async_trait]
impl<G: GroqApi, M: GeminiApi> PlannerServiceTrait for PlannerService<G, M> {
    async fn diet_plan(&self, input: DietPlanInput) -> Result<DietPlan, PlannerServiceError> {
        if input.chronic_condition.trim().is_empty() || input.food_preference.trim().is_empty() {
            return Err(PlannerServiceError::Validation(
                "Missing fields".to_string(),
            ));
        }
        if input.meals_per_day == 0 {
            return Err(PlannerServiceError::Validation(
                "Meals per day must be at least 1".to_string(),
            ));
        }

        debug!(condition = %input.chronic_condition, "Generating diet plan");

        let messages = vec![
            ChatMessage::system(prompts::DIET_SYSTEM),
            ChatMessage::user(prompts::diet_user_message(
                &input.chronic_condition,
                input.temperature,
                input.meals_per_day,
                &input.food_preference,
            )),
        ];
        let content = self.groq.complete(messages).await?;
        Ok(extract::parse_json_as(&content)?)
    }

    async fn travel_checklist(&self, location: &str) -> Result<Value, PlannerServiceError> {
        if location.trim().is_empty() {
            return Err(PlannerServiceError::Validation(
                "Missing location".to_string(),
            ));
        }

        debug!(%location, "Generating travel health checklist");

        let messages = vec![
            ChatMessage::system(prompts::CHECKLIST_SYSTEM),
            ChatMessage::user(prompts::travel_checklist_prompt(location)),
        ];
        let content = self.groq.complete(messages).await?;
        Ok(extract::parse_embedded_object(&content)?)
    }

    async fn meditation_plan(
        &self,
        input: MeditationInput,
    ) -> Result<MeditationPlan, PlannerServiceError> {
        if input.time.trim().is_empty() || input.level.trim().is_empty() || input.duration == 0 {
            return Err(PlannerServiceError::Validation(
                "Missing inputs".to_string(),
            ));
        }

        debug!(level = %input.level, duration = input.duration, "Generating meditation session");

        let prompt =
            prompts::meditation_prompt(&input.time, input.temperature, input.duration, &input.level);
        let text = self.gemini.generate(&prompt).await?;
        let value = extract::parse_embedded_object(&text)?;
        let plan: MeditationPlan = serde_json::from_value(value).map_err(|e| AiError::Parse {
            message: e.to_string(),
            raw: text,
        })?;
        Ok(plan)
    }

    async fn yoga_plan(&self, input: YogaInput) -> Result<Value, PlannerServiceError> {
        if input.time.trim().is_empty() || input.plan.trim().is_empty() || input.duration == 0 {
            return Err(PlannerServiceError::Validation(
                "Missing inputs".to_string(),
            ));
        }

        debug!(plan = %input.plan, duration = input.duration, "Generating yoga session");

        let prompt = prompts::yoga_prompt(&input.time, input.temperature, input.duration, &input.plan);
        let text = self.gemini.generate(&prompt).await?;
        Ok(extract::parse_embedded_array(&text)?)
    }
}

/// Create a planner service backed by the Groq and Gemini APIs
pub fn create_default_planner_service() -> impl PlannerServiceTrait + Send + Sync {
    PlannerService::new(GroqClient::from_env(), GeminiClient::from_env())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{MockGeminiApi, MockGroqApi};

    fn meditation_input() -> MeditationInput {
        MeditationInput {
            time: "morning".to_string(),
            temperature: 24.0,
            duration: 10,
            level: "beginner".to_string(),
        }
    }

    #[tokio::test]
    async fn checklist_extracts_object_from_chatty_reply() {
        let reply = "Here is the checklist you asked for:\n{\"immunizations\": [\"typhoid\"], \"packing\": [\"sunscreen\"]}\nStay safe out there!";
        let service = PlannerService::new(
            MockGroqApi::with_reply(reply),
            MockGeminiApi::with_reply("{}"),
        );
        let checklist = service.travel_checklist("Leh").await.unwrap();
        assert_eq!(checklist["immunizations"][0], "typhoid");
    }

    #[tokio::test]
    async fn meditation_plan_parses_embedded_object() {
        let reply = "Sure! ```json\n{\"intro\": \"Welcome.\", \"steps\": [\"Sit comfortably.\"], \"ambiance\": \"forest rain\", \"quote\": \"Breathe.\"}\n```";
        let service = PlannerService::new(
            MockGroqApi::with_reply("{}"),
            MockGeminiApi::with_reply(reply),
        );
        let plan = service.meditation_plan(meditation_input()).await.unwrap();
        assert_eq!(plan.steps.len(), 1);
        assert_eq!(plan.ambiance, "forest rain");
    }

    #[tokio::test]
    async fn yoga_plan_extracts_bare_array() {
        let reply = "Your routine:\n[{\"name\": \"Tadasana\", \"duration\": \"3 minutes\"}]";
        let service = PlannerService::new(
            MockGroqApi::with_reply("{}"),
            MockGeminiApi::with_reply(reply),
        );
        let input = YogaInput {
            time: "evening".to_string(),
            temperature: 31.0,
            duration: 15,
            plan: "beginner".to_string(),
        };
        let plan = service.yoga_plan(input).await.unwrap();
        assert_eq!(plan[0]["name"], "Tadasana");
    }

    #[tokio::test]
    async fn missing_diet_fields_are_rejected() {
        let service = PlannerService::new(
            MockGroqApi::with_reply("{}"),
            MockGeminiApi::with_reply("{}"),
        );
        let input = DietPlanInput {
            chronic_condition: String::new(),
            temperature: 30.0,
            meals_per_day: 3,
            food_preference: "Vegetarian".to_string(),
        };
        assert!(matches!(
            service.diet_plan(input).await,
            Err(PlannerServiceError::Validation(_))
        ));
    }
}
