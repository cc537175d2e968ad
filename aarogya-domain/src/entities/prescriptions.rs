use serde::{Deserialize, Serialize};

/// Prescription metadata with an optional signed file URL.
/// The binary file itself lives outside the relational store and is
/// reachable only through the short-lived signed URL.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Prescription {
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
    /// Signed URL valid for one hour, set on reads
    pub signed_url: Option<String>,
}
