use serde::{Deserialize, Serialize};

/// Structured medicine information returned by the model
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MedicineInfo {
    /// Medicine name as entered by the user
    pub medicine: String,
    /// Conditions the medicine treats
    pub use_for: String,
    /// Typical dosage, frequency and intake guidance
    pub dosage_and_usage: String,
    /// Potential side effects from prolonged use
    pub long_term_side_effects: String,
    /// Allergy warnings, interactions and who should avoid it
    pub precautions: String,
    /// Special warnings, such as when to consult a doctor
    pub note: String,
}
