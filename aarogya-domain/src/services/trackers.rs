use async_trait::async_trait;
use chrono::Utc;
use thiserror::Error;
use tracing::debug;

use crate::ai::{prompts, AiError, ChatMessage, GroqApi, GroqClient, TokenStream};
use crate::entities::{conversions, SleepLog, WaterLog};
use aarogya_data::models::{CreateSleepLogRecord, CreateWaterLogRecord};
use aarogya_data::repository::{
    RepositoryError, SleepLogRepository, SleepLogRepositoryTrait, WaterLogRepository,
    WaterLogRepositoryTrait,
};

/// Tracker service errors shared by the hydration and sleep trackers
#[derive(Debug, Error)]
pub enum TrackerServiceError {
    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Not found error
    #[error("{0}")]
    NotFound(String),

    /// Repository error
    #[error("Repository error: {0}")]
    Repository(String),

    /// AI provider error
    #[error(transparent)]
    Ai(#[from] AiError),
}

impl From<RepositoryError> for TrackerServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::Validation(msg) => TrackerServiceError::Validation(msg),
            RepositoryError::NotFound(msg) => TrackerServiceError::NotFound(msg),
            other => TrackerServiceError::Repository(other.to_string()),
        }
    }
}

fn require(value: &str, message: &str) -> Result<(), TrackerServiceError> {
    if value.trim().is_empty() {
        return Err(TrackerServiceError::Validation(message.to_string()));
    }
    Ok(())
}

/// Today's date in the YYYY-MM-DD form the trackers key on
fn today() -> String {
    Utc::now().format("%Y-%m-%d").to_string()
}

/// Trait for water intake tracking
#[async_trait]
pub trait HydrationServiceTrait: Send + Sync {
    /// Record the intake for a user and day; one row per user per day
    async fn log_intake(
        &self,
        user_id: &str,
        date: &str,
        intake: i64,
    ) -> Result<WaterLog, TrackerServiceError>;

    /// Get logs for a user, optionally restricted to one day
    async fn logs(
        &self,
        user_id: &str,
        date: Option<&str>,
    ) -> Result<Vec<WaterLog>, TrackerServiceError>;

    /// Get the full intake history for a user
    async fn history(&self, user_id: &str) -> Result<Vec<WaterLog>, TrackerServiceError>;
}

/// Water intake tracking service
pub struct HydrationService<R: WaterLogRepositoryTrait> {
    repository: R,
}

impl<R: WaterLogRepositoryTrait> HydrationService<R> {
    /// Create a new hydration service
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R: WaterLogRepositoryTrait + Send + Sync> HydrationServiceTrait for HydrationService<R> {
    async fn log_intake(
        &self,
        user_id: &str,
        date: &str,
        intake: i64,
    ) -> Result<WaterLog, TrackerServiceError> {
        require(user_id, "Missing user_id")?;
        require(date, "Missing date")?;

        debug!(%user_id, %date, intake, "Upserting water log");

        let record = self
            .repository
            .upsert(CreateWaterLogRecord {
                user_id: user_id.to_string(),
                date: date.to_string(),
                intake,
            })
            .await?;
        Ok(conversions::water_log_from_record(record))
    }

    async fn logs(
        &self,
        user_id: &str,
        date: Option<&str>,
    ) -> Result<Vec<WaterLog>, TrackerServiceError> {
        require(user_id, "Missing user_id")?;

        let records = self.repository.list_for_user(user_id, date).await?;
        Ok(records
            .into_iter()
            .map(conversions::water_log_from_record)
            .collect())
    }

    async fn history(&self, user_id: &str) -> Result<Vec<WaterLog>, TrackerServiceError> {
        self.logs(user_id, None).await
    }
}

/// Trait for sleep tracking and the streamed sleep tip
#[async_trait]
pub trait SleepServiceTrait: Send + Sync {
    /// Record hours slept for a user and day; one row per user per day
    async fn log_sleep(
        &self,
        user_id: &str,
        date: &str,
        hours: f64,
    ) -> Result<SleepLog, TrackerServiceError>;

    /// Get logs for a user, optionally restricted to one day
    async fn logs(
        &self,
        user_id: &str,
        date: Option<&str>,
    ) -> Result<Vec<SleepLog>, TrackerServiceError>;

    /// Stream three short sleep tips based on today's log.
    /// Fails with NotFound when the user has no log for today.
    async fn tip_stream(&self, user_id: &str) -> Result<TokenStream, TrackerServiceError>;
}

/// Sleep tracking service; the tip stream is relayed from the Groq model
pub struct SleepService<R: SleepLogRepositoryTrait, G: GroqApi> {
    repository: R,
    groq: G,
}

impl<R: SleepLogRepositoryTrait, G: GroqApi> SleepService<R, G> {
    /// Create a new sleep service
    pub fn new(repository: R, groq: G) -> Self {
        Self { repository, groq }
    }
}

#[async_trait]
impl<R: SleepLogRepositoryTrait + Send + Sync, G: GroqApi> SleepServiceTrait
    for SleepService<R, G>
{
    async fn log_sleep(
        &self,
        user_id: &str,
        date: &str,
        hours: f64,
    ) -> Result<SleepLog, TrackerServiceError> {
        require(user_id, "Missing user_id")?;
        require(date, "Missing date")?;

        debug!(%user_id, %date, hours, "Upserting sleep log");

        let record = self
            .repository
            .record(CreateSleepLogRecord {
                user_id: user_id.to_string(),
                date: date.to_string(),
                hours,
            })
            .await?;
        Ok(conversions::sleep_log_from_record(record))
    }

    async fn logs(
        &self,
        user_id: &str,
        date: Option<&str>,
    ) -> Result<Vec<SleepLog>, TrackerServiceError> {
        require(user_id, "Missing user_id")?;

        let records = match date {
            Some(date) => self
                .repository
                .for_date(user_id, date)
                .await?
                .into_iter()
                .collect(),
            None => self.repository.list_for_user(user_id).await?,
        };
        Ok(records
            .into_iter()
            .map(conversions::sleep_log_from_record)
            .collect())
    }

    async fn tip_stream(&self, user_id: &str) -> Result<TokenStream, TrackerServiceError> {
        require(user_id, "Missing user_id")?;

        let log = self
            .repository
            .for_date(user_id, &today())
            .await?
            .ok_or_else(|| {
                TrackerServiceError::NotFound("No sleep data found for today.".to_string())
            })?;

        debug!(%user_id, hours = log.hours, "Streaming sleep tips");

        let messages = vec![
            ChatMessage::system(prompts::SLEEP_TIP_SYSTEM),
            ChatMessage::user(prompts::sleep_tip_prompt(log.hours)),
        ];
        Ok(self.groq.stream(messages).await?)
    }
}

/// Create a hydration service backed by the default repository
pub fn create_default_hydration_service() -> impl HydrationServiceTrait + Send + Sync {
    HydrationService::new(WaterLogRepository::new())
}

/// Create a sleep service backed by the default repository and the Groq API
pub fn create_default_sleep_service() -> impl SleepServiceTrait + Send + Sync {
    SleepService::new(SleepLogRepository::new(), GroqClient::from_env())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MockGroqApi;
    use aarogya_data::models::SleepLogRecord;
    use aarogya_data::repository::hydration_mocks::MockWaterLogRepository;
    use aarogya_data::repository::sleep_mocks::MockSleepLogRepository;
    use futures::StreamExt;

    #[tokio::test]
    async fn water_log_upsert_keeps_one_row_per_day() {
        let service = HydrationService::new(MockWaterLogRepository::new());
        service.log_intake("user-1", "2026-08-30", 500).await.unwrap();
        service.log_intake("user-1", "2026-08-30", 1200).await.unwrap();

        let logs = service.logs("user-1", Some("2026-08-30")).await.unwrap();
        assert_eq!(logs.len(), 1);
        assert_eq!(logs[0].intake, 1200);
    }

    #[tokio::test]
    async fn missing_user_id_is_rejected() {
        let service = HydrationService::new(MockWaterLogRepository::new());
        let result = service.log_intake("", "2026-08-30", 500).await;
        assert!(matches!(result, Err(TrackerServiceError::Validation(_))));
    }

    #[tokio::test]
    async fn tip_stream_requires_a_log_for_today() {
        let service = SleepService::new(
            MockSleepLogRepository::new(),
            MockGroqApi::with_tokens(vec!["- Tip one"]),
        );
        let result = service.tip_stream("user-1").await;
        assert!(matches!(result, Err(TrackerServiceError::NotFound(_))));
    }

    #[tokio::test]
    async fn tip_stream_relays_tokens_when_log_exists() {
        let repository = MockSleepLogRepository::with_logs(vec![SleepLogRecord {
            user_id: "user-1".to_string(),
            date: today(),
            hours: 5.5,
        }]);
        let service = SleepService::new(
            repository,
            MockGroqApi::with_tokens(vec!["- Wind down earlier.\n", "- Skip late caffeine.\n"]),
        );
        let stream = service.tip_stream("user-1").await.unwrap();
        let tips: Vec<String> = stream.map(|t| t.unwrap()).collect().await;
        assert_eq!(tips.len(), 2);
        assert!(tips[0].starts_with("- "));
    }
}
