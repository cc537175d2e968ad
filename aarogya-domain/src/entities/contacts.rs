use serde::{Deserialize, Serialize};

/// An emergency contact owned by a user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmergencyContact {
    /// Unique identifier
    pub id: String,
    /// Owning user
    pub user_id: String,
    /// Contact name
    pub name: String,
    /// Phone number
    pub phone: String,
    /// Relation to the user, e.g. Mother, Doctor
    pub relation: String,
    /// RFC 3339 creation timestamp
    pub created_at: String,
}
