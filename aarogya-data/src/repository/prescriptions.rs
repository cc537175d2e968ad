use async_trait::async_trait;
use chrono::Utc;
use tracing::{debug, error};
use uuid::Uuid;

use super::errors::RepositoryError;
use super::in_memory::InMemoryStorage;
use super::storage::DatabaseStorage;
use crate::database::get_db_pool;
use crate::models::{CreatePrescriptionRecord, PrescriptionRecord};

/// Repository trait for prescription metadata
#[async_trait]
pub trait PrescriptionRepositoryTrait {
    /// Store metadata for an uploaded prescription file
    async fn create(
        &self,
        request: CreatePrescriptionRecord,
    ) -> Result<PrescriptionRecord, RepositoryError>;

    /// Get all prescriptions owned by a user, newest first
    async fn list_for_user(
        &self,
        user_id: &str,
    ) -> Result<Vec<PrescriptionRecord>, RepositoryError>;

    /// Get a prescription by ID scoped to its owner
    async fn get(
        &self,
        id: &str,
        user_id: &str,
    ) -> Result<Option<PrescriptionRecord>, RepositoryError>;

    /// Delete a prescription scoped to its owner; returns false when nothing matched
    async fn delete(&self, id: &str, user_id: &str) -> Result<bool, RepositoryError>;
}

/// Repository for prescription metadata.
/// Uses the SQLite pool when available and falls back to in-memory storage.
#[derive(Debug, Clone, Default)]
pub struct PrescriptionRepository {
    storage: InMemoryStorage,
}

impl PrescriptionRepository {
    /// Create a new repository
    pub fn new() -> Self {
        Self {
            storage: InMemoryStorage::new(),
        }
    }
}

#[async_trait]
impl PrescriptionRepositoryTrait for PrescriptionRepository {
    async fn create(
        &self,
        request: CreatePrescriptionRecord,
    ) -> Result<PrescriptionRecord, RepositoryError> {
        let prescription = PrescriptionRecord {
            id: Uuid::new_v4().to_string(),
            user_id: request.user_id,
            title: request.title,
            date: request.date,
            file_path: request.file_path,
            created_at: Utc::now().to_rfc3339(),
        };

        match get_db_pool() {
            Ok(pool) => {
                debug!("Storing prescription in database: {}", prescription.id);
                match DatabaseStorage::store_prescription(&pool, &prescription).await {
                    Ok(_) => Ok(prescription),
                    Err(e) => {
                        error!("Failed to store prescription in database: {}", e);
                        self.storage.store_prescription(&prescription).await
                    }
                }
            }
            Err(e) => {
                debug!("Database not available ({}), using in-memory storage", e);
                self.storage.store_prescription(&prescription).await
            }
        }
    }

    async fn list_for_user(
        &self,
        user_id: &str,
    ) -> Result<Vec<PrescriptionRecord>, RepositoryError> {
        match get_db_pool() {
            Ok(pool) => match DatabaseStorage::prescriptions_for_user(&pool, user_id).await {
                Ok(prescriptions) => Ok(prescriptions),
                Err(e) => {
                    error!("Failed to list prescriptions from database: {}", e);
                    self.storage.prescriptions_for_user(user_id).await
                }
            },
            Err(e) => {
                debug!("Database not available ({}), using in-memory storage", e);
                self.storage.prescriptions_for_user(user_id).await
            }
        }
    }

    async fn get(
        &self,
        id: &str,
        user_id: &str,
    ) -> Result<Option<PrescriptionRecord>, RepositoryError> {
        match get_db_pool() {
            Ok(pool) => match DatabaseStorage::prescription_by_id(&pool, id, user_id).await {
                Ok(prescription) => Ok(prescription),
                Err(e) => {
                    error!("Failed to get prescription from database: {}", e);
                    self.storage.prescription_by_id(id, user_id).await
                }
            },
            Err(e) => {
                debug!("Database not available ({}), using in-memory storage", e);
                self.storage.prescription_by_id(id, user_id).await
            }
        }
    }

    async fn delete(&self, id: &str, user_id: &str) -> Result<bool, RepositoryError> {
        match get_db_pool() {
            Ok(pool) => match DatabaseStorage::delete_prescription(&pool, id, user_id).await {
                Ok(deleted) => Ok(deleted),
                Err(e) => {
                    error!("Failed to delete prescription from database: {}", e);
                    self.storage.delete_prescription(id, user_id).await
                }
            },
            Err(e) => {
                debug!("Database not available ({}), using in-memory storage", e);
                self.storage.delete_prescription(id, user_id).await
            }
        }
    }
}

/// Mock prescription repository for testing
#[cfg(any(test, feature = "mock"))]
pub mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Mock implementation of PrescriptionRepository for testing
    #[derive(Default)]
    pub struct MockPrescriptionRepository {
        prescriptions: Mutex<Vec<PrescriptionRecord>>,
    }

    impl MockPrescriptionRepository {
        /// Create a new empty mock repository
        pub fn new() -> Self {
            Self::default()
        }

        /// Create a mock repository with predefined prescriptions
        pub fn with_prescriptions(prescriptions: Vec<PrescriptionRecord>) -> Self {
            Self {
                prescriptions: Mutex::new(prescriptions),
            }
        }
    }

    #[async_trait]
    impl PrescriptionRepositoryTrait for MockPrescriptionRepository {
        async fn create(
            &self,
            request: CreatePrescriptionRecord,
        ) -> Result<PrescriptionRecord, RepositoryError> {
            let prescription = PrescriptionRecord {
                id: Uuid::new_v4().to_string(),
                user_id: request.user_id,
                title: request.title,
                date: request.date,
                file_path: request.file_path,
                created_at: Utc::now().to_rfc3339(),
            };
            self.prescriptions.lock()?.push(prescription.clone());
            Ok(prescription)
        }

        async fn list_for_user(
            &self,
            user_id: &str,
        ) -> Result<Vec<PrescriptionRecord>, RepositoryError> {
            let mut prescriptions: Vec<PrescriptionRecord> = self
                .prescriptions
                .lock()?
                .iter()
                .filter(|p| p.user_id == user_id)
                .cloned()
                .collect();
            prescriptions.sort_by(|a, b| b.created_at.cmp(&a.created_at));
            Ok(prescriptions)
        }

        async fn get(
            &self,
            id: &str,
            user_id: &str,
        ) -> Result<Option<PrescriptionRecord>, RepositoryError> {
            Ok(self
                .prescriptions
                .lock()?
                .iter()
                .find(|p| p.id == id && p.user_id == user_id)
                .cloned())
        }

        async fn delete(&self, id: &str, user_id: &str) -> Result<bool, RepositoryError> {
            let mut prescriptions = self.prescriptions.lock()?;
            let before = prescriptions.len();
            prescriptions.retain(|p| !(p.id == id && p.user_id == user_id));
            Ok(prescriptions.len() < before)
        }
    }
}
