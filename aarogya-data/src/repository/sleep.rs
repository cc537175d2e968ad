use async_trait::async_trait;
use tracing::{debug, error};

use super::errors::RepositoryError;
use super::in_memory::InMemoryStorage;
use super::storage::DatabaseStorage;
use crate::database::get_db_pool;
use crate::models::{CreateSleepLogRecord, SleepLogRecord};

/// Repository trait for sleep logs
#[async_trait]
pub trait SleepLogRepositoryTrait {
    /// Record a night of sleep; the last write for a day wins
    async fn record(
        &self,
        request: CreateSleepLogRecord,
    ) -> Result<SleepLogRecord, RepositoryError>;

    /// Get the log for a user on a specific day
    async fn for_date(
        &self,
        user_id: &str,
        date: &str,
    ) -> Result<Option<SleepLogRecord>, RepositoryError>;

    /// Get all logs for a user ordered by date
    async fn list_for_user(&self, user_id: &str)
        -> Result<Vec<SleepLogRecord>, RepositoryError>;
}

/// Repository for sleep logs.
/// Uses the SQLite pool when available and falls back to in-memory storage.
#[derive(Debug, Clone, Default)]
pub struct SleepLogRepository {
    storage: InMemoryStorage,
}

impl SleepLogRepository {
    /// Create a new repository
    pub fn new() -> Self {
        Self {
            storage: InMemoryStorage::new(),
        }
    }
}

#[async_trait]
impl SleepLogRepositoryTrait for SleepLogRepository {
    async fn record(
        &self,
        request: CreateSleepLogRecord,
    ) -> Result<SleepLogRecord, RepositoryError> {
        let log = SleepLogRecord {
            user_id: request.user_id,
            date: request.date,
            hours: request.hours,
        };

        match get_db_pool() {
            Ok(pool) => {
                debug!(
                    "Upserting sleep log in database: user_id={}, date={}",
                    log.user_id, log.date
                );
                match DatabaseStorage::upsert_sleep_log(&pool, &log).await {
                    Ok(_) => Ok(log),
                    Err(e) => {
                        error!("Failed to upsert sleep log in database: {}", e);
                        self.storage.upsert_sleep_log(&log).await
                    }
                }
            }
            Err(e) => {
                debug!("Database not available ({}), using in-memory storage", e);
                self.storage.upsert_sleep_log(&log).await
            }
        }
    }

    async fn for_date(
        &self,
        user_id: &str,
        date: &str,
    ) -> Result<Option<SleepLogRecord>, RepositoryError> {
        match get_db_pool() {
            Ok(pool) => match DatabaseStorage::sleep_log_for_date(&pool, user_id, date).await {
                Ok(log) => Ok(log),
                Err(e) => {
                    error!("Failed to get sleep log from database: {}", e);
                    self.storage.sleep_log_for_date(user_id, date).await
                }
            },
            Err(e) => {
                debug!("Database not available ({}), using in-memory storage", e);
                self.storage.sleep_log_for_date(user_id, date).await
            }
        }
    }

    async fn list_for_user(
        &self,
        user_id: &str,
    ) -> Result<Vec<SleepLogRecord>, RepositoryError> {
        match get_db_pool() {
            Ok(pool) => match DatabaseStorage::sleep_logs_for_user(&pool, user_id).await {
                Ok(logs) => Ok(logs),
                Err(e) => {
                    error!("Failed to list sleep logs from database: {}", e);
                    self.storage.sleep_logs_for_user(user_id).await
                }
            },
            Err(e) => {
                debug!("Database not available ({}), using in-memory storage", e);
                self.storage.sleep_logs_for_user(user_id).await
            }
        }
    }
}

/// Mock sleep log repository for testing
#[cfg(any(test, feature = "mock"))]
pub mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// Mock implementation of SleepLogRepository for testing
    #[derive(Default)]
    pub struct MockSleepLogRepository {
        logs: Mutex<HashMap<(String, String), SleepLogRecord>>,
    }

    impl MockSleepLogRepository {
        /// Create a new empty mock repository
        pub fn new() -> Self {
            Self::default()
        }

        /// Create a mock repository with predefined logs
        pub fn with_logs(logs: Vec<SleepLogRecord>) -> Self {
            let map = logs
                .into_iter()
                .map(|log| ((log.user_id.clone(), log.date.clone()), log))
                .collect();
            Self {
                logs: Mutex::new(map),
            }
        }
    }

    #[async_trait]
    impl SleepLogRepositoryTrait for MockSleepLogRepository {
        async fn record(
            &self,
            request: CreateSleepLogRecord,
        ) -> Result<SleepLogRecord, RepositoryError> {
            let log = SleepLogRecord {
                user_id: request.user_id,
                date: request.date,
                hours: request.hours,
            };
            self.logs
                .lock()?
                .insert((log.user_id.clone(), log.date.clone()), log.clone());
            Ok(log)
        }

        async fn for_date(
            &self,
            user_id: &str,
            date: &str,
        ) -> Result<Option<SleepLogRecord>, RepositoryError> {
            Ok(self
                .logs
                .lock()?
                .get(&(user_id.to_string(), date.to_string()))
                .cloned())
        }

        async fn list_for_user(
            &self,
            user_id: &str,
        ) -> Result<Vec<SleepLogRecord>, RepositoryError> {
            let mut logs: Vec<SleepLogRecord> = self
                .logs
                .lock()?
                .values()
                .filter(|log| log.user_id == user_id)
                .cloned()
                .collect();
            logs.sort_by(|a, b| a.date.cmp(&b.date));
            Ok(logs)
        }
    }
}
