use serde::Serialize;
use utoipa::ToSchema;

use aarogya_domain::entities::{
    CalorieEstimate as DomainCalorieEstimate, ImageAssessment as DomainImageAssessment,
};

/// Calorie analysis of a meal photo
#[derive(Debug, Serialize, ToSchema)]
pub struct CalorieResponse {
    /// Food items recognized in the image
    pub items: Vec<String>,
    /// Estimated calories, a number or per-item breakdown
    pub calories: serde_json::Value,
    /// Short dietary advice
    pub advice: String,
}

impl From<DomainCalorieEstimate> for CalorieResponse {
    fn from(estimate: DomainCalorieEstimate) -> Self {
        Self {
            items: estimate.items,
            calories: estimate.calories,
            advice: estimate.advice,
        }
    }
}

/// Visual assessment of a skin or anemia screening photo
#[derive(Debug, Serialize, ToSchema)]
pub struct AssessmentResponse {
    /// Suspected condition
    pub condition: String,
    /// Severity, e.g. Mild/Moderate/Severe
    pub severity: String,
    /// Short advice
    pub advice: String,
}

impl From<DomainImageAssessment> for AssessmentResponse {
    fn from(assessment: DomainImageAssessment) -> Self {
        Self {
            condition: assessment.condition,
            severity: assessment.severity,
            advice: assessment.advice,
        }
    }
}
