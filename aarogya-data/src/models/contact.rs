use serde::{Deserialize, Serialize};

/// Storage model for an emergency contact
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmergencyContactRecord {
    /// Unique identifier for the contact
    pub id: String,

    /// Identifier of the owning user
    pub user_id: String,

    /// Contact name
    pub name: String,

    /// Contact phone number
    pub phone: String,

    /// Relation to the user (e.g., parent, sibling, friend)
    pub relation: String,

    /// When the contact was created (RFC 3339)
    pub created_at: String,
}

/// Input data for creating a new emergency contact
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateEmergencyContactRecord {
    /// Identifier of the owning user
    pub user_id: String,

    /// Contact name
    pub name: String,

    /// Contact phone number
    pub phone: String,

    /// Relation to the user
    pub relation: String,
}
