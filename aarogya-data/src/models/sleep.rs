use serde::{Deserialize, Serialize};

/// Storage model for a sleep log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SleepLogRecord {
    /// Identifier of the owning user
    pub user_id: String,

    /// Calendar date the sleep ended on (YYYY-MM-DD)
    pub date: String,

    /// Hours slept
    pub hours: f64,
}

/// Input data for recording a night of sleep
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateSleepLogRecord {
    /// Identifier of the owning user
    pub user_id: String,

    /// Calendar date the sleep ended on (YYYY-MM-DD)
    pub date: String,

    /// Hours slept
    pub hours: f64,
}
