use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use aarogya_domain::entities::EmergencyContact as DomainEmergencyContact;

/// Request body to add an emergency contact
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateContactRequest {
    /// Owning user
    #[validate(required, length(min = 1))]
    pub user_id: Option<String>,

    /// Contact name
    #[validate(required, length(min = 1))]
    pub name: Option<String>,

    /// Phone number
    #[validate(required, length(min = 1))]
    pub phone: Option<String>,

    /// Relation to the user, e.g. Mother, Doctor
    #[validate(required, length(min = 1))]
    pub relation: Option<String>,
}

/// Query parameters to list a user's emergency contacts
#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct ContactQueryParams {
    /// Owning user
    pub user_id: Option<String>,
}

/// Query parameters to delete an emergency contact
#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct DeleteContactParams {
    /// Contact identifier
    pub id: Option<String>,

    /// Owning user, used to scope the delete
    pub user_id: Option<String>,
}

/// An emergency contact
#[derive(Debug, Serialize, ToSchema)]
pub struct ContactResponse {
    /// Unique identifier
    pub id: String,
    /// Owning user
    pub user_id: String,
    /// Contact name
    pub name: String,
    /// Phone number
    pub phone: String,
    /// Relation to the user
    pub relation: String,
    /// RFC 3339 creation timestamp
    pub created_at: String,
}

impl From<DomainEmergencyContact> for ContactResponse {
    fn from(contact: DomainEmergencyContact) -> Self {
        Self {
            id: contact.id,
            user_id: contact.user_id,
            name: contact.name,
            phone: contact.phone,
            relation: contact.relation,
            created_at: contact.created_at,
        }
    }
}
