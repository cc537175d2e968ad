use async_trait::async_trait;
use tracing::{debug, error};

use super::errors::RepositoryError;
use super::in_memory::InMemoryStorage;
use super::storage::DatabaseStorage;
use crate::database::get_db_pool;
use crate::models::{CreateWaterLogRecord, WaterLogRecord};

/// Repository trait for water intake logs
#[async_trait]
pub trait WaterLogRepositoryTrait {
    /// Upsert the intake for a user and day; the last write for a day wins
    async fn upsert(
        &self,
        request: CreateWaterLogRecord,
    ) -> Result<WaterLogRecord, RepositoryError>;

    /// Get logs for a user, optionally restricted to a single day
    async fn list_for_user(
        &self,
        user_id: &str,
        date: Option<&str>,
    ) -> Result<Vec<WaterLogRecord>, RepositoryError>;
}

/// Repository for water intake logs.
/// Uses the SQLite pool when available and falls back to in-memory storage.
#[derive(Debug, Clone, Default)]
pub struct WaterLogRepository {
    storage: InMemoryStorage,
}

impl WaterLogRepository {
    /// Create a new repository
    pub fn new() -> Self {
        Self {
            storage: InMemoryStorage::new(),
        }
    }
}

#[async_trait]
impl WaterLogRepositoryTrait for WaterLogRepository {
    async fn upsert(
        &self,
        request: CreateWaterLogRecord,
    ) -> Result<WaterLogRecord, RepositoryError> {
        let log = WaterLogRecord {
            user_id: request.user_id,
            date: request.date,
            intake: request.intake,
        };

        match get_db_pool() {
            Ok(pool) => {
                debug!(
                    "Upserting water log in database: user_id={}, date={}",
                    log.user_id, log.date
                );
                match DatabaseStorage::upsert_water_log(&pool, &log).await {
                    Ok(_) => Ok(log),
                    Err(e) => {
                        error!("Failed to upsert water log in database: {}", e);
                        self.storage.upsert_water_log(&log).await
                    }
                }
            }
            Err(e) => {
                debug!("Database not available ({}), using in-memory storage", e);
                self.storage.upsert_water_log(&log).await
            }
        }
    }

    async fn list_for_user(
        &self,
        user_id: &str,
        date: Option<&str>,
    ) -> Result<Vec<WaterLogRecord>, RepositoryError> {
        match get_db_pool() {
            Ok(pool) => match DatabaseStorage::water_logs_for_user(&pool, user_id, date).await {
                Ok(logs) => Ok(logs),
                Err(e) => {
                    error!("Failed to list water logs from database: {}", e);
                    self.storage.water_logs_for_user(user_id, date).await
                }
            },
            Err(e) => {
                debug!("Database not available ({}), using in-memory storage", e);
                self.storage.water_logs_for_user(user_id, date).await
            }
        }
    }
}

/// Mock water log repository for testing
#[cfg(any(test, feature = "mock"))]
pub mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// Mock implementation of WaterLogRepository for testing
    #[derive(Default)]
    pub struct MockWaterLogRepository {
        logs: Mutex<HashMap<(String, String), WaterLogRecord>>,
    }

    impl MockWaterLogRepository {
        /// Create a new empty mock repository
        pub fn new() -> Self {
            Self::default()
        }
    }

    #[async_trait]
    impl WaterLogRepositoryTrait for MockWaterLogRepository {
        async fn upsert(
            &self,
            request: CreateWaterLogRecord,
        ) -> Result<WaterLogRecord, RepositoryError> {
            let log = WaterLogRecord {
                user_id: request.user_id,
                date: request.date,
                intake: request.intake,
            };
            self.logs
                .lock()?
                .insert((log.user_id.clone(), log.date.clone()), log.clone());
            Ok(log)
        }

        async fn list_for_user(
            &self,
            user_id: &str,
            date: Option<&str>,
        ) -> Result<Vec<WaterLogRecord>, RepositoryError> {
            let mut logs: Vec<WaterLogRecord> = self
                .logs
                .lock()?
                .values()
                .filter(|log| log.user_id == user_id && date.map_or(true, |d| log.date == d))
                .cloned()
                .collect();
            logs.sort_by(|a, b| a.date.cmp(&b.date));
            Ok(logs)
        }
    }
}
