use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use aarogya_domain::entities::DailyQuote as DomainDailyQuote;

/// A short wellness quote with its author
#[derive(Debug, Serialize, ToSchema)]
pub struct QuoteResponse {
    /// The quote text
    pub quote: String,
    /// Attributed author
    pub author: String,
}

impl From<DomainDailyQuote> for QuoteResponse {
    fn from(quote: DomainDailyQuote) -> Self {
        Self {
            quote: quote.quote,
            author: quote.author,
        }
    }
}

/// Request body for the sleep tip route
#[derive(Debug, Deserialize, ToSchema)]
pub struct SleepTipRequest {
    /// User whose latest sleep log should be read
    pub user_id: Option<String>,
}
