use serde::{Deserialize, Serialize};

/// Storage model for prescription file metadata.
/// The binary file itself lives in object storage; only the path is kept here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrescriptionRecord {
    /// Unique identifier for the prescription
    pub id: String,

    /// Identifier of the owning user
    pub user_id: String,

    /// User-supplied title
    pub title: String,

    /// Date the prescription was issued (YYYY-MM-DD)
    pub date: String,

    /// Path of the stored file, relative to the prescription store root
    pub file_path: String,

    /// When the record was created (RFC 3339)
    pub created_at: String,
}

/// Input data for storing prescription metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePrescriptionRecord {
    /// Identifier of the owning user
    pub user_id: String,

    /// User-supplied title
    pub title: String,

    /// Date the prescription was issued (YYYY-MM-DD)
    pub date: String,

    /// Path of the stored file, relative to the prescription store root
    pub file_path: String,
}
