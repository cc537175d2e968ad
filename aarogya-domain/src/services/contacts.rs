use async_trait::async_trait;
use thiserror::Error;
use tracing::debug;

use crate::entities::{conversions, EmergencyContact};
use aarogya_data::models::CreateEmergencyContactRecord;
use aarogya_data::repository::{
    EmergencyContactRepository, EmergencyContactRepositoryTrait, RepositoryError,
};

/// Contact service errors
#[derive(Debug, Error)]
pub enum ContactServiceError {
    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Not found error
    #[error("Contact not found: {0}")]
    NotFound(String),

    /// Repository error
    #[error("Repository error: {0}")]
    Repository(String),
}

impl From<RepositoryError> for ContactServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::Validation(msg) => ContactServiceError::Validation(msg),
            RepositoryError::NotFound(msg) => ContactServiceError::NotFound(msg),
            other => ContactServiceError::Repository(other.to_string()),
        }
    }
}

/// Trait for emergency contact management
#[async_trait]
pub trait ContactServiceTrait: Send + Sync {
    /// Add a contact for a user
    async fn add_contact(
        &self,
        user_id: &str,
        name: &str,
        phone: &str,
        relation: &str,
    ) -> Result<EmergencyContact, ContactServiceError>;

    /// List a user's contacts, newest first
    async fn list_contacts(&self, user_id: &str)
        -> Result<Vec<EmergencyContact>, ContactServiceError>;

    /// Delete a contact; only the owner's contacts can be deleted
    async fn delete_contact(&self, id: &str, user_id: &str) -> Result<(), ContactServiceError>;
}

/// Emergency contact service
pub struct ContactService<R: EmergencyContactRepositoryTrait> {
    repository: R,
}

impl<R: EmergencyContactRepositoryTrait> ContactService<R> {
    /// Create a new contact service
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R: EmergencyContactRepositoryTrait + Send + Sync> ContactServiceTrait for ContactService<R> {
    async fn add_contact(
        &self,
        user_id: &str,
        name: &str,
        phone: &str,
        relation: &str,
    ) -> Result<EmergencyContact, ContactServiceError> {
        for (value, field) in [
            (user_id, "user_id"),
            (name, "name"),
            (phone, "phone"),
            (relation, "relation"),
        ] {
            if value.trim().is_empty() {
                return Err(ContactServiceError::Validation(format!("Missing {field}")));
            }
        }

        debug!(%user_id, "Adding emergency contact");

        let record = self
            .repository
            .create(CreateEmergencyContactRecord {
                user_id: user_id.to_string(),
                name: name.to_string(),
                phone: phone.to_string(),
                relation: relation.to_string(),
            })
            .await?;
        Ok(conversions::contact_from_record(record))
    }

    async fn list_contacts(
        &self,
        user_id: &str,
    ) -> Result<Vec<EmergencyContact>, ContactServiceError> {
        if user_id.trim().is_empty() {
            return Err(ContactServiceError::Validation(
                "Missing user_id".to_string(),
            ));
        }

        let records = self.repository.list_for_user(user_id).await?;
        Ok(records
            .into_iter()
            .map(conversions::contact_from_record)
            .collect())
    }

    async fn delete_contact(&self, id: &str, user_id: &str) -> Result<(), ContactServiceError> {
        if id.trim().is_empty() {
            return Err(ContactServiceError::Validation("Missing id".to_string()));
        }

        let deleted = self.repository.delete(id, user_id).await?;
        if !deleted {
            return Err(ContactServiceError::NotFound(id.to_string()));
        }
        Ok(())
    }
}

/// Create a contact service backed by the default repository
pub fn create_default_contact_service() -> impl ContactServiceTrait + Send + Sync {
    ContactService::new(EmergencyContactRepository::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use aarogya_data::repository::contact_mocks::MockEmergencyContactRepository;

    #[tokio::test]
    async fn contacts_are_scoped_to_owner() {
        let service = ContactService::new(MockEmergencyContactRepository::new());
        service
            .add_contact("user-1", "Amma", "+911234567890", "Mother")
            .await
            .unwrap();
        service
            .add_contact("user-2", "Ravi", "+919876543210", "Brother")
            .await
            .unwrap();

        let contacts = service.list_contacts("user-1").await.unwrap();
        assert_eq!(contacts.len(), 1);
        assert_eq!(contacts[0].name, "Amma");
    }

    #[tokio::test]
    async fn delete_is_scoped_to_owner() {
        let service = ContactService::new(MockEmergencyContactRepository::new());
        let contact = service
            .add_contact("user-1", "Amma", "+911234567890", "Mother")
            .await
            .unwrap();

        // A different user cannot delete the row
        let result = service.delete_contact(&contact.id, "user-2").await;
        assert!(matches!(result, Err(ContactServiceError::NotFound(_))));

        service.delete_contact(&contact.id, "user-1").await.unwrap();
        assert!(service.list_contacts("user-1").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn missing_fields_are_rejected() {
        let service = ContactService::new(MockEmergencyContactRepository::new());
        let result = service.add_contact("user-1", "", "123", "Friend").await;
        assert!(matches!(result, Err(ContactServiceError::Validation(_))));
    }
}
