// Testing utilities and mock implementations for the domain layer
// This module is only available in tests or with the "mock" feature

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use futures::stream;
use serde_json::{json, Value};

use crate::ai::{AiError, ChatMessage, GeminiApi, GroqApi, TokenStream};
use crate::entities::{
    CalorieEstimate, DailyQuote, DietPlan, DietPlanInput, Hospital, ImageAssessment,
    MeditationInput, MeditationPlan, MedicineInfo, SupportAssistant, SupportReply, WeatherReport,
    YogaInput,
};
use crate::health::{
    ComponentStatus, HealthComponent, HealthServiceTrait, SystemHealth, SystemStatus,
};
use crate::services::chat::{ChatServiceError, ChatServiceTrait};
use crate::services::contacts::{ContactService, ContactServiceTrait};
use crate::services::medicine::{MedicineServiceError, MedicineServiceTrait};
use crate::services::nearby::{NearbyServiceError, NearbyServiceTrait};
use crate::services::planner::{PlannerServiceError, PlannerServiceTrait};
use crate::services::prescriptions::{
    FileStore, PrescriptionService, PrescriptionServiceTrait, UrlSigner,
};
use crate::services::quote::{QuoteServiceError, QuoteServiceTrait};
use crate::services::trackers::{
    HydrationService, HydrationServiceTrait, SleepService, SleepServiceTrait,
};
use crate::services::vision::{VisionServiceError, VisionServiceTrait};

// Re-export the data-layer repository mocks for convenience
pub use aarogya_data::repository::contact_mocks::MockEmergencyContactRepository;
pub use aarogya_data::repository::hydration_mocks::MockWaterLogRepository;
pub use aarogya_data::repository::prescription_mocks::MockPrescriptionRepository;
pub use aarogya_data::repository::sleep_mocks::MockSleepLogRepository;

/// Mock Groq client returning canned content
pub struct MockGroqApi {
    reply: String,
    tokens: Vec<String>,
}

impl MockGroqApi {
    /// Mock whose complete() returns the given reply
    pub fn with_reply(reply: &str) -> Self {
        Self {
            reply: reply.to_string(),
            tokens: Vec::new(),
        }
    }

    /// Mock whose stream() yields the given tokens in order
    pub fn with_tokens(tokens: Vec<&str>) -> Self {
        Self {
            reply: String::new(),
            tokens: tokens.into_iter().map(str::to_string).collect(),
        }
    }
}

#[async_trait]
impl GroqApi for MockGroqApi {
    async fn complete(&self, _messages: Vec<ChatMessage>) -> Result<String, AiError> {
        Ok(self.reply.clone())
    }

    async fn stream(&self, _messages: Vec<ChatMessage>) -> Result<TokenStream, AiError> {
        let tokens: Vec<Result<String, AiError>> =
            self.tokens.iter().cloned().map(Ok).collect();
        Ok(Box::pin(stream::iter(tokens)))
    }
}

/// Mock Groq client that counts complete() calls, for cache tests
pub struct CountingGroqApi {
    reply: String,
    calls: AtomicUsize,
}

impl CountingGroqApi {
    /// Mock whose complete() returns the given reply and counts calls
    pub fn new(reply: &str) -> Self {
        Self {
            reply: reply.to_string(),
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of complete() calls made so far
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl GroqApi for CountingGroqApi {
    async fn complete(&self, _messages: Vec<ChatMessage>) -> Result<String, AiError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.reply.clone())
    }

    async fn stream(&self, _messages: Vec<ChatMessage>) -> Result<TokenStream, AiError> {
        Ok(Box::pin(stream::iter(Vec::new())))
    }
}

/// Mock Gemini client returning canned content
pub struct MockGeminiApi {
    reply: String,
}

impl MockGeminiApi {
    /// Mock whose generate methods return the given reply
    pub fn with_reply(reply: &str) -> Self {
        Self {
            reply: reply.to_string(),
        }
    }
}

#[async_trait]
impl GeminiApi for MockGeminiApi {
    async fn generate(&self, _prompt: &str) -> Result<String, AiError> {
        Ok(self.reply.clone())
    }

    async fn generate_with_image(
        &self,
        _prompt: &str,
        _mime_type: &str,
        _image: &[u8],
    ) -> Result<String, AiError> {
        Ok(self.reply.clone())
    }
}

fn mock_tokens() -> Vec<Result<String, AiError>> {
    vec![
        Ok("Symptom(s): headache\n\n".to_string()),
        Ok("Medication: paracetamol\n\n".to_string()),
        Ok("If Situation Worsens: see a doctor".to_string()),
    ]
}

/// Mock implementation of ChatServiceTrait with canned replies
#[derive(Default)]
pub struct MockChatService;

#[async_trait]
impl ChatServiceTrait for MockChatService {
    async fn symptom_stream(&self, message: &str) -> Result<TokenStream, ChatServiceError> {
        if message.trim().is_empty() {
            return Err(ChatServiceError::Validation("Message is required".to_string()));
        }
        Ok(Box::pin(stream::iter(mock_tokens())))
    }

    async fn lab_report_stream(&self, message: &str) -> Result<TokenStream, ChatServiceError> {
        if message.trim().is_empty() {
            return Err(ChatServiceError::Validation("Message is required".to_string()));
        }
        Ok(Box::pin(stream::iter(mock_tokens())))
    }

    async fn support_reply(&self, message: &str) -> Result<SupportReply, ChatServiceError> {
        if message.trim().is_empty() {
            return Err(ChatServiceError::Validation("Message is required".to_string()));
        }
        Ok(SupportReply {
            assistant: SupportAssistant {
                name: "Asha".to_string(),
                role: "Mental Health Support Assistant".to_string(),
                response: "That sounds really hard. I'm here for you.".to_string(),
            },
            coping_tips: vec!["Deep breathing".to_string(), "Journaling".to_string()],
            crisis_check: false,
            language: "English".to_string(),
        })
    }
}

/// Mock implementation of MedicineServiceTrait with a canned reply
#[derive(Default)]
pub struct MockMedicineService;

#[async_trait]
impl MedicineServiceTrait for MockMedicineService {
    async fn medicine_info(&self, name: &str) -> Result<MedicineInfo, MedicineServiceError> {
        if name.trim().is_empty() {
            return Err(MedicineServiceError::Validation(
                "Medicine name is required".to_string(),
            ));
        }
        Ok(MedicineInfo {
            medicine: name.to_string(),
            use_for: "Fever and mild pain".to_string(),
            dosage_and_usage: "500mg every 6 hours after food".to_string(),
            long_term_side_effects: "Possible liver strain with chronic use".to_string(),
            precautions: "Avoid with liver disease".to_string(),
            note: "Consult a doctor if symptoms persist".to_string(),
        })
    }
}

/// Mock implementation of PlannerServiceTrait with canned plans
#[derive(Default)]
pub struct MockPlannerService;

#[async_trait]
impl PlannerServiceTrait for MockPlannerService {
    async fn diet_plan(&self, input: DietPlanInput) -> Result<DietPlan, PlannerServiceError> {
        if input.chronic_condition.trim().is_empty() || input.food_preference.trim().is_empty() {
            return Err(PlannerServiceError::Validation("Missing fields".to_string()));
        }
        Ok(DietPlan {
            plan: json!({ "Day 1": { "Breakfast": "Idli with sambar" } }),
            wellness_tip: "Regular yoga, hydration, and sleep boost your recovery.".to_string(),
        })
    }

    async fn travel_checklist(&self, location: &str) -> Result<Value, PlannerServiceError> {
        if location.trim().is_empty() {
            return Err(PlannerServiceError::Validation("Missing location".to_string()));
        }
        Ok(json!({
            "immunizations": ["typhoid"],
            "hydration": "3L daily",
            "jetLag": "Shift sleep gradually",
            "precautions": ["mosquito repellent"],
            "packing": ["sunscreen"]
        }))
    }

    async fn meditation_plan(
        &self,
        input: MeditationInput,
    ) -> Result<MeditationPlan, PlannerServiceError> {
        if input.time.trim().is_empty() || input.level.trim().is_empty() {
            return Err(PlannerServiceError::Validation("Missing inputs".to_string()));
        }
        Ok(MeditationPlan {
            intro: "Welcome to your session.".to_string(),
            steps: vec!["Settle into a comfortable seated position.".to_string()],
            ambiance: "forest rain".to_string(),
            quote: "Breathe and let go.".to_string(),
        })
    }

    async fn yoga_plan(&self, input: YogaInput) -> Result<Value, PlannerServiceError> {
        if input.time.trim().is_empty() || input.plan.trim().is_empty() {
            return Err(PlannerServiceError::Validation("Missing inputs".to_string()));
        }
        Ok(json!([
            { "name": "Sukhasana (Easy Pose)", "duration": "2 minutes" }
        ]))
    }
}

/// Mock implementation of VisionServiceTrait with canned assessments
#[derive(Default)]
pub struct MockVisionService;

#[async_trait]
impl VisionServiceTrait for MockVisionService {
    async fn analyze_calories(
        &self,
        _mime_type: &str,
        image: &[u8],
    ) -> Result<CalorieEstimate, VisionServiceError> {
        if image.is_empty() {
            return Err(VisionServiceError::Validation("No image uploaded".to_string()));
        }
        Ok(CalorieEstimate {
            items: vec!["Chapati".to_string(), "Dal".to_string()],
            calories: json!(450),
            advice: "Good fiber content.".to_string(),
        })
    }

    async fn assess_skin(
        &self,
        _mime_type: &str,
        image: &[u8],
    ) -> Result<ImageAssessment, VisionServiceError> {
        if image.is_empty() {
            return Err(VisionServiceError::Validation("No image uploaded".to_string()));
        }
        Ok(ImageAssessment {
            condition: "Acne".to_string(),
            severity: "Mild".to_string(),
            advice: "Use a gentle cleanser.".to_string(),
        })
    }

    async fn screen_anemia(
        &self,
        _mime_type: &str,
        image: &[u8],
    ) -> Result<ImageAssessment, VisionServiceError> {
        if image.is_empty() {
            return Err(VisionServiceError::Validation("No image uploaded".to_string()));
        }
        Ok(ImageAssessment {
            condition: "Healthy".to_string(),
            severity: "Mild".to_string(),
            advice: "No visible signs of anemia.".to_string(),
        })
    }
}

/// Mock implementation of QuoteServiceTrait with a canned quote
#[derive(Default)]
pub struct MockQuoteService;

#[async_trait]
impl QuoteServiceTrait for MockQuoteService {
    async fn daily_quote(&self) -> Result<DailyQuote, QuoteServiceError> {
        Ok(DailyQuote {
            quote: "Your health is your real wealth.".to_string(),
            author: "Mahatma Gandhi".to_string(),
        })
    }
}

/// Mock implementation of NearbyServiceTrait with canned lookups
#[derive(Default)]
pub struct MockNearbyService;

#[async_trait]
impl NearbyServiceTrait for MockNearbyService {
    async fn current_weather(
        &self,
        _latitude: f64,
        _longitude: f64,
    ) -> Result<WeatherReport, NearbyServiceError> {
        Ok(WeatherReport {
            temperature: 28.4,
            is_day: true,
        })
    }

    async fn nearby_hospitals(
        &self,
        lat: f64,
        lng: f64,
    ) -> Result<Vec<Hospital>, NearbyServiceError> {
        Ok(vec![Hospital {
            id: 42,
            name: Some("City Hospital".to_string()),
            lat,
            lng,
        }])
    }
}

/// Mock implementation of health services for testing system health
#[derive(Debug)]
pub struct MockHealthService {
    database_status: ComponentStatus,
}

impl Default for MockHealthService {
    fn default() -> Self {
        Self::new()
    }
}

impl MockHealthService {
    /// Create a mock health service with all components healthy
    pub fn new() -> Self {
        Self {
            database_status: ComponentStatus::Healthy,
        }
    }

    /// Configure the mock with an unhealthy database
    pub fn with_unhealthy_database(mut self) -> Self {
        self.database_status = ComponentStatus::Unhealthy;
        self
    }
}

#[async_trait]
impl HealthServiceTrait for MockHealthService {
    async fn get_system_health(&self) -> SystemHealth {
        let mut components = HashMap::new();
        components.insert(
            "database".to_string(),
            HealthComponent {
                status: self.database_status.clone(),
                details: None,
            },
        );
        components.insert(
            "groq".to_string(),
            HealthComponent {
                status: ComponentStatus::Healthy,
                details: None,
            },
        );
        components.insert(
            "gemini".to_string(),
            HealthComponent {
                status: ComponentStatus::Healthy,
                details: None,
            },
        );

        let status = if self.database_status == ComponentStatus::Unhealthy {
            SystemStatus::Unhealthy
        } else {
            SystemStatus::Healthy
        };

        SystemHealth { status, components }
    }

    async fn check_database_status(&self) -> Result<bool, String> {
        match self.database_status {
            ComponentStatus::Healthy | ComponentStatus::Degraded => Ok(true),
            ComponentStatus::Unhealthy => Err("Database connection failed".to_string()),
        }
    }
}

/// Factory function to create a mock chat service
pub fn create_mock_chat_service() -> impl ChatServiceTrait {
    MockChatService
}

/// Factory function to create a mock medicine service
pub fn create_mock_medicine_service() -> impl MedicineServiceTrait {
    MockMedicineService
}

/// Factory function to create a mock planner service
pub fn create_mock_planner_service() -> impl PlannerServiceTrait {
    MockPlannerService
}

/// Factory function to create a mock vision service
pub fn create_mock_vision_service() -> impl VisionServiceTrait {
    MockVisionService
}

/// Factory function to create a mock quote service
pub fn create_mock_quote_service() -> impl QuoteServiceTrait {
    MockQuoteService
}

/// Factory function to create a hydration service over in-memory storage
pub fn create_mock_hydration_service() -> impl HydrationServiceTrait {
    HydrationService::new(MockWaterLogRepository::new())
}

/// Factory function to create a sleep service over in-memory storage.
/// Seeds a log for "user-1" today so the tip stream has data to read.
pub fn create_mock_sleep_service() -> impl SleepServiceTrait {
    let repository = MockSleepLogRepository::with_logs(vec![aarogya_data::models::SleepLogRecord {
        user_id: "user-1".to_string(),
        date: Utc::now().format("%Y-%m-%d").to_string(),
        hours: 6.5,
    }]);
    SleepService::new(repository, MockGroqApi::with_tokens(vec![
        "- Keep a consistent bedtime.\n",
        "- Dim screens an hour before sleep.\n",
        "- Avoid caffeine after mid-afternoon.\n",
    ]))
}

/// Factory function to create a contact service over in-memory storage
pub fn create_mock_contact_service() -> impl ContactServiceTrait {
    ContactService::new(MockEmergencyContactRepository::new())
}

/// Factory function to create a prescription service over in-memory
/// storage, a temp-directory file store and a fixed signing secret
pub fn create_mock_prescription_service() -> impl PrescriptionServiceTrait {
    let root = std::env::temp_dir().join(format!("aarogya-rx-{}", uuid::Uuid::new_v4()));
    PrescriptionService::new(
        MockPrescriptionRepository::new(),
        FileStore::new(root),
        UrlSigner::new("test-secret"),
    )
}

/// Factory function to create a mock nearby lookup service
pub fn create_mock_nearby_service() -> impl NearbyServiceTrait {
    MockNearbyService
}

/// Factory function to create a mock health service
pub fn create_mock_health_service() -> impl HealthServiceTrait {
    MockHealthService::new()
}
