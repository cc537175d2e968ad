use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use aarogya_domain::entities::Prescription as DomainPrescription;

/// Query parameters to delete a prescription
#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct DeletePrescriptionParams {
    /// Prescription identifier
    pub id: Option<String>,
}

/// Prescription metadata with a signed file URL
#[derive(Debug, Serialize, ToSchema)]
pub struct PrescriptionResponse {
    /// Unique identifier
    pub id: String,
    /// Owning user
    pub user_id: String,
    /// User-supplied title
    pub title: String,
    /// Prescription date as entered by the user
    pub date: String,
    /// Storage path of the uploaded file
    pub file_path: String,
    /// RFC 3339 creation timestamp
    pub created_at: String,
    /// Signed URL valid for one hour, null if signing failed
    pub signed_url: Option<String>,
}

impl From<DomainPrescription> for PrescriptionResponse {
    fn from(prescription: DomainPrescription) -> Self {
        Self {
            id: prescription.id,
            user_id: prescription.user_id,
            title: prescription.title,
            date: prescription.date,
            file_path: prescription.file_path,
            created_at: prescription.created_at,
            signed_url: prescription.signed_url,
        }
    }
}
