use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Calorie estimate for a food photo
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalorieEstimate {
    /// Detected food items
    pub items: Vec<String>,
    /// Estimated total calories; models return either a number or a string
    pub calories: Value,
    /// One short nutritional suggestion
    pub advice: String,
}

/// Condition assessment for a skin or nail photo
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageAssessment {
    /// Most likely visible condition
    pub condition: String,
    /// Mild, Moderate or Severe
    pub severity: String,
    /// Short care advice
    pub advice: String,
}
