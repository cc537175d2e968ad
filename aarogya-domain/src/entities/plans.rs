use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Inputs for the 7-day diet plan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DietPlanInput {
    /// Chronic health condition the plan must accommodate
    pub chronic_condition: String,
    /// Local temperature in degrees Celsius
    pub temperature: f64,
    /// Number of meals per day the plan should structure
    pub meals_per_day: u8,
    /// Dietary preference, e.g. Vegetarian or Non-Vegetarian
    pub food_preference: String,
}

/// A generated 7-day meal plan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DietPlan {
    /// Free-form day-by-day plan as returned by the model
    pub plan: Value,
    /// Closing wellness tip
    #[serde(rename = "wellnessTip")]
    pub wellness_tip: String,
}

/// Inputs for a meditation session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeditationInput {
    /// Time of day, e.g. morning or evening
    pub time: String,
    /// Local temperature in degrees Celsius
    pub temperature: f64,
    /// Session duration in minutes
    pub duration: u32,
    /// Experience level, e.g. beginner
    pub level: String,
}

/// A generated meditation session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeditationPlan {
    pub intro: String,
    pub steps: Vec<String>,
    pub ambiance: String,
    pub quote: String,
}

/// Inputs for a yoga session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YogaInput {
    /// Time of day, e.g. morning or evening
    pub time: String,
    /// Local temperature in degrees Celsius
    pub temperature: f64,
    /// Session duration in minutes
    pub duration: u32,
    /// Plan level, e.g. beginner
    pub plan: String,
}
