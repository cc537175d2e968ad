use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use aarogya_domain::entities::{
    DietPlan as DomainDietPlan, MeditationPlan as DomainMeditationPlan,
};

/// Request body for the diet plan route.
/// Field names match the browser client, which sends camelCase.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DietPlanRequest {
    /// Chronic condition to plan around
    pub chronic_condition: Option<String>,
    /// Current local temperature in Celsius
    pub temperature: Option<f64>,
    /// Number of meals per day
    pub meals_per_day: Option<u8>,
    /// Dietary preference, e.g. vegetarian
    pub food_preference: Option<String>,
}

/// A 7-day meal plan with a closing wellness tip
#[derive(Debug, Serialize, ToSchema)]
pub struct DietPlanResponse {
    /// Day-by-day meal plan
    pub plan: serde_json::Value,
    /// Closing wellness tip
    #[serde(rename = "wellnessTip")]
    pub wellness_tip: String,
}

impl From<DomainDietPlan> for DietPlanResponse {
    fn from(plan: DomainDietPlan) -> Self {
        Self {
            plan: plan.plan,
            wellness_tip: plan.wellness_tip,
        }
    }
}

/// Request body for the travel checklist route
#[derive(Debug, Deserialize, ToSchema)]
pub struct TravelChecklistRequest {
    /// Destination or posting location
    pub location: Option<String>,
}

/// Request body for the meditation plan route
#[derive(Debug, Deserialize, ToSchema)]
pub struct MeditationRequest {
    /// Time of day for the session
    pub time: Option<String>,
    /// Current local temperature in Celsius
    pub temperature: Option<f64>,
    /// Session duration in minutes
    pub duration: Option<u32>,
    /// Practitioner level, e.g. beginner
    pub level: Option<String>,
}

/// A guided meditation session script
#[derive(Debug, Serialize, ToSchema)]
pub struct MeditationResponse {
    /// Opening words for the session
    pub intro: String,
    /// Step-by-step guidance
    pub steps: Vec<String>,
    /// Suggested ambient sound
    pub ambiance: String,
    /// Closing quote
    pub quote: String,
}

impl From<DomainMeditationPlan> for MeditationResponse {
    fn from(plan: DomainMeditationPlan) -> Self {
        Self {
            intro: plan.intro,
            steps: plan.steps,
            ambiance: plan.ambiance,
            quote: plan.quote,
        }
    }
}

/// Request body for the yoga plan route
#[derive(Debug, Deserialize, ToSchema)]
pub struct YogaRequest {
    /// Time of day for the session
    pub time: Option<String>,
    /// Current local temperature in Celsius
    pub temperature: Option<f64>,
    /// Session duration in minutes
    pub duration: Option<u32>,
    /// Focus of the practice, e.g. flexibility
    pub plan: Option<String>,
}
