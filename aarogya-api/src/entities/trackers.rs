use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use aarogya_domain::entities::{SleepLog as DomainSleepLog, WaterLog as DomainWaterLog};

/// Request body to record water intake for a day
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateWaterLogRequest {
    /// Owning user
    #[validate(required, length(min = 1))]
    pub user_id: Option<String>,

    /// Day in YYYY-MM-DD form
    #[validate(required, length(min = 1))]
    pub date: Option<String>,

    /// Intake in milliliters
    #[validate(required)]
    pub intake: Option<i64>,
}

/// Request body to record sleep for a day
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateSleepLogRequest {
    /// Owning user
    #[validate(required, length(min = 1))]
    pub user_id: Option<String>,

    /// Day in YYYY-MM-DD form
    #[validate(required, length(min = 1))]
    pub date: Option<String>,

    /// Hours slept
    #[validate(required)]
    pub hours: Option<f64>,
}

/// Query parameters for tracker reads
#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct TrackerQueryParams {
    /// Owning user
    pub user_id: Option<String>,

    /// Optional day filter in YYYY-MM-DD form
    pub date: Option<String>,
}

/// One day of water intake
#[derive(Debug, Serialize, ToSchema)]
pub struct WaterLogResponse {
    pub user_id: String,
    /// Day in YYYY-MM-DD form
    pub date: String,
    /// Intake in milliliters
    pub intake: i64,
}

impl From<DomainWaterLog> for WaterLogResponse {
    fn from(log: DomainWaterLog) -> Self {
        Self {
            user_id: log.user_id,
            date: log.date,
            intake: log.intake,
        }
    }
}

/// One day of sleep
#[derive(Debug, Serialize, ToSchema)]
pub struct SleepLogResponse {
    pub user_id: String,
    /// Day in YYYY-MM-DD form
    pub date: String,
    /// Hours slept
    pub hours: f64,
}

impl From<DomainSleepLog> for SleepLogResponse {
    fn from(log: DomainSleepLog) -> Self {
        Self {
            user_id: log.user_id,
            date: log.date,
            hours: log.hours,
        }
    }
}
