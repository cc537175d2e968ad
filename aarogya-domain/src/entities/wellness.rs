use serde::{Deserialize, Serialize};

/// Daily wellness quote
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyQuote {
    pub quote: String,
    pub author: String,
}
