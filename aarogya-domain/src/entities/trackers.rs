use serde::{Deserialize, Serialize};

/// Water intake for one user on one day, in milliliters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WaterLog {
    pub user_id: String,
    /// Day in YYYY-MM-DD form
    pub date: String,
    /// Intake in milliliters
    pub intake: i64,
}

/// Sleep duration for one user on one day
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SleepLog {
    pub user_id: String,
    /// Day in YYYY-MM-DD form
    pub date: String,
    /// Hours slept
    pub hours: f64,
}
