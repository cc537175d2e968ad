use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use aarogya_domain::entities::MedicineInfo as DomainMedicineInfo;

/// Request body for the medicine usage route
#[derive(Debug, Deserialize, ToSchema)]
pub struct MedicineUsageRequest {
    /// The medicine name or question
    pub message: Option<String>,
}

/// Structured medicine information
#[derive(Debug, Serialize, ToSchema)]
pub struct MedicineInfoResponse {
    /// Medicine name
    pub medicine: String,
    /// What the medicine treats
    pub use_for: String,
    /// Dosage and usage guidance
    pub dosage_and_usage: String,
    /// Known long-term side effects
    pub long_term_side_effects: String,
    /// Precautions to observe
    pub precautions: String,
    /// General advisory note
    pub note: String,
}

impl From<DomainMedicineInfo> for MedicineInfoResponse {
    fn from(info: DomainMedicineInfo) -> Self {
        Self {
            medicine: info.medicine,
            use_for: info.use_for,
            dosage_and_usage: info.dosage_and_usage,
            long_term_side_effects: info.long_term_side_effects,
            precautions: info.precautions,
            note: info.note,
        }
    }
}
