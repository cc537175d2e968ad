use async_trait::async_trait;
use chrono::Utc;
use tracing::{debug, error};
use uuid::Uuid;

use super::errors::RepositoryError;
use super::in_memory::InMemoryStorage;
use super::storage::DatabaseStorage;
use crate::database::get_db_pool;
use crate::models::{CreateEmergencyContactRecord, EmergencyContactRecord};

/// Repository trait for emergency contacts
#[async_trait]
pub trait EmergencyContactRepositoryTrait {
    /// Create a new emergency contact from a request
    async fn create(
        &self,
        request: CreateEmergencyContactRecord,
    ) -> Result<EmergencyContactRecord, RepositoryError>;

    /// Get all contacts owned by a user, newest first
    async fn list_for_user(
        &self,
        user_id: &str,
    ) -> Result<Vec<EmergencyContactRecord>, RepositoryError>;

    /// Delete a contact scoped to its owner; returns false when nothing matched
    async fn delete(&self, id: &str, user_id: &str) -> Result<bool, RepositoryError>;
}

/// Repository for emergency contacts.
/// Uses the SQLite pool when available and falls back to in-memory storage.
#[derive(Debug, Clone, Default)]
pub struct EmergencyContactRepository {
    /// In-memory storage for when the database is not available
    storage: InMemoryStorage,
}

impl EmergencyContactRepository {
    /// Create a new repository
    pub fn new() -> Self {
        Self {
            storage: InMemoryStorage::new(),
        }
    }
}

#[async_trait]
impl EmergencyContactRepositoryTrait for EmergencyContactRepository {
    async fn create(
        &self,
        request: CreateEmergencyContactRecord,
    ) -> Result<EmergencyContactRecord, RepositoryError> {
        let contact = EmergencyContactRecord {
            id: Uuid::new_v4().to_string(),
            user_id: request.user_id,
            name: request.name,
            phone: request.phone,
            relation: request.relation,
            created_at: Utc::now().to_rfc3339(),
        };

        match get_db_pool() {
            Ok(pool) => {
                debug!("Storing emergency contact in database: {}", contact.id);
                match DatabaseStorage::store_contact(&pool, &contact).await {
                    Ok(_) => Ok(contact),
                    Err(e) => {
                        error!("Failed to store contact in database: {}", e);
                        self.storage.store_contact(&contact).await
                    }
                }
            }
            Err(e) => {
                debug!("Database not available ({}), using in-memory storage", e);
                self.storage.store_contact(&contact).await
            }
        }
    }

    async fn list_for_user(
        &self,
        user_id: &str,
    ) -> Result<Vec<EmergencyContactRecord>, RepositoryError> {
        match get_db_pool() {
            Ok(pool) => match DatabaseStorage::contacts_for_user(&pool, user_id).await {
                Ok(contacts) => Ok(contacts),
                Err(e) => {
                    error!("Failed to list contacts from database: {}", e);
                    self.storage.contacts_for_user(user_id).await
                }
            },
            Err(e) => {
                debug!("Database not available ({}), using in-memory storage", e);
                self.storage.contacts_for_user(user_id).await
            }
        }
    }

    async fn delete(&self, id: &str, user_id: &str) -> Result<bool, RepositoryError> {
        match get_db_pool() {
            Ok(pool) => match DatabaseStorage::delete_contact(&pool, id, user_id).await {
                Ok(deleted) => Ok(deleted),
                Err(e) => {
                    error!("Failed to delete contact from database: {}", e);
                    self.storage.delete_contact(id, user_id).await
                }
            },
            Err(e) => {
                debug!("Database not available ({}), using in-memory storage", e);
                self.storage.delete_contact(id, user_id).await
            }
        }
    }
}

/// Mock emergency contact repository for testing
#[cfg(any(test, feature = "mock"))]
pub mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Mock implementation of EmergencyContactRepository for testing
    #[derive(Default)]
    pub struct MockEmergencyContactRepository {
        contacts: Mutex<Vec<EmergencyContactRecord>>,
    }

    impl MockEmergencyContactRepository {
        /// Create a new empty mock repository
        pub fn new() -> Self {
            Self::default()
        }

        /// Create a mock repository with predefined contacts
        pub fn with_contacts(contacts: Vec<EmergencyContactRecord>) -> Self {
            Self {
                contacts: Mutex::new(contacts),
            }
        }
    }

    #[async_trait]
    impl EmergencyContactRepositoryTrait for MockEmergencyContactRepository {
        async fn create(
            &self,
            request: CreateEmergencyContactRecord,
        ) -> Result<EmergencyContactRecord, RepositoryError> {
            let contact = EmergencyContactRecord {
                id: Uuid::new_v4().to_string(),
                user_id: request.user_id,
                name: request.name,
                phone: request.phone,
                relation: request.relation,
                created_at: Utc::now().to_rfc3339(),
            };
            self.contacts.lock()?.push(contact.clone());
            Ok(contact)
        }

        async fn list_for_user(
            &self,
            user_id: &str,
        ) -> Result<Vec<EmergencyContactRecord>, RepositoryError> {
            let mut contacts: Vec<EmergencyContactRecord> = self
                .contacts
                .lock()?
                .iter()
                .filter(|c| c.user_id == user_id)
                .cloned()
                .collect();
            contacts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
            Ok(contacts)
        }

        async fn delete(&self, id: &str, user_id: &str) -> Result<bool, RepositoryError> {
            let mut contacts = self.contacts.lock()?;
            let before = contacts.len();
            contacts.retain(|c| !(c.id == id && c.user_id == user_id));
            Ok(contacts.len() < before)
        }
    }
}
