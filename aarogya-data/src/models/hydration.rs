use serde::{Deserialize, Serialize};

/// Storage model for a water intake log.
/// One row is kept per user per calendar day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WaterLogRecord {
    /// Identifier of the owning user
    pub user_id: String,

    /// Calendar date of the log (YYYY-MM-DD)
    pub date: String,

    /// Total intake for the day in millilitres
    pub intake: i64,
}

/// Input data for recording water intake
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateWaterLogRecord {
    /// Identifier of the owning user
    pub user_id: String,

    /// Calendar date of the log (YYYY-MM-DD)
    pub date: String,

    /// Total intake for the day in millilitres
    pub intake: i64,
}
