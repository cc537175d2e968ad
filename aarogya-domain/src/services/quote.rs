use std::sync::Mutex;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use thiserror::Error;
use tracing::debug;

use crate::ai::{extract, prompts, AiError, ChatMessage, GroqApi, GroqClient};
use crate::entities::DailyQuote;

/// How long a fetched quote stays fresh
const CACHE_TTL: Duration = Duration::from_secs(12 * 60 * 60);

/// Quote service errors
#[derive(Debug, Error)]
pub enum QuoteServiceError {
    /// The quote cache lock was poisoned
    #[error("Quote cache is unavailable")]
    Cache,

    /// AI provider error
    #[error(transparent)]
    Ai(#[from] AiError),
}

/// Trait for the daily wellness quote
#[async_trait]
pub trait QuoteServiceTrait: Send + Sync {
    /// Get the daily quote, refetching at most every 12 hours
    async fn daily_quote(&self) -> Result<DailyQuote, QuoteServiceError>;
}

/// Quote service with a process-wide 12-hour cache.
/// The lock is released during the upstream call, so two concurrent
/// callers may both refetch on expiry; the second write wins.
pub struct QuoteService<G: GroqApi> {
    groq: G,
    cache: Mutex<Option<(DailyQuote, Instant)>>,
}

impl<G: GroqApi> QuoteService<G> {
    /// Create a new quote service with an empty cache
    pub fn new(groq: G) -> Self {
        Self {
            groq,
            cache: Mutex::new(None),
        }
    }
}

#[async_trait]
impl<G: GroqApi> QuoteServiceTrait for QuoteService<G> {
    async fn daily_quote(&self) -> Result<DailyQuote, QuoteServiceError> {
        {
            let cache = self.cache.lock().map_err(|_| QuoteServiceError::Cache)?;
            if let Some((quote, fetched_at)) = cache.as_ref() {
                if fetched_at.elapsed() < CACHE_TTL {
                    return Ok(quote.clone());
                }
            }
        }

        debug!("Quote cache empty or stale, fetching a fresh quote");

        let messages = vec![
            ChatMessage::system(prompts::QUOTE_SYSTEM),
            ChatMessage::user(""),
        ];
        let content = self.groq.complete(messages).await?;
        let quote: DailyQuote = extract::parse_json_as(&content)?;

        let mut cache = self.cache.lock().map_err(|_| QuoteServiceError::Cache)?;
        *cache = Some((quote.clone(), Instant::now()));
        Ok(quote)
    }
}

/// Create a quote service backed by the Groq API
pub fn create_default_quote_service() -> impl QuoteServiceTrait + Send + Sync {
    QuoteService::new(GroqClient::from_env())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::CountingGroqApi;

    #[tokio::test]
    async fn quote_is_cached_across_calls() {
        let groq = CountingGroqApi::new(r#"{"quote": "Rest is medicine.", "author": "Anon"}"#);
        let service = QuoteService::new(groq);

        let first = service.daily_quote().await.unwrap();
        let second = service.daily_quote().await.unwrap();

        assert_eq!(first.quote, second.quote);
        assert_eq!(service.groq.calls(), 1);
    }

    #[tokio::test]
    async fn invalid_quote_json_is_not_cached() {
        let groq = CountingGroqApi::new("not json at all");
        let service = QuoteService::new(groq);

        assert!(service.daily_quote().await.is_err());
        assert!(service.daily_quote().await.is_err());
        assert_eq!(service.groq.calls(), 2);
    }
}
