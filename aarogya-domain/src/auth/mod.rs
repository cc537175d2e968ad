//! Bearer-token authentication for user-scoped routes.
//! Tokens are HS256 JWTs whose subject is the user id; the prescription
//! routes require one, other user-scoped routes take an explicit
//! user_id parameter.

use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Authentication errors
#[derive(Debug, Error)]
pub enum AuthError {
    /// No bearer token was supplied
    #[error("Missing bearer token")]
    MissingToken,

    /// The bearer token failed verification
    #[error("Invalid bearer token")]
    InvalidToken,

    /// Token could not be issued
    #[error("Failed to issue token: {0}")]
    Issue(String),
}

/// Authentication configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// HS256 secret for user bearer tokens
    pub secret: String,
}

impl AuthConfig {
    /// Build the configuration from AUTH_JWT_SECRET
    pub fn from_env() -> Self {
        Self {
            secret: std::env::var("AUTH_JWT_SECRET")
                .unwrap_or_else(|_| "aarogya-dev-secret".to_string()),
        }
    }
}

/// JWT claims for a user bearer token
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// The user id
    pub sub: String,
    /// Expiry as a unix timestamp
    pub exp: usize,
}

/// Verify a bearer token and return the user id it identifies
pub fn verify_token(secret: &str, token: &str) -> Result<String, AuthError> {
    let validation = Validation::new(Algorithm::HS256);
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map(|data| data.claims.sub)
    .map_err(|_| AuthError::InvalidToken)
}

/// Issue a bearer token for a user id, valid for the given seconds
pub fn issue_token(secret: &str, user_id: &str, ttl_seconds: u64) -> Result<String, AuthError> {
    let exp = (Utc::now().timestamp() as usize).saturating_add(ttl_seconds as usize);
    let claims = Claims {
        sub: user_id.to_string(),
        exp,
    };
    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| AuthError::Issue(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issued_token_verifies_to_user_id() {
        let token = issue_token("secret", "user-42", 3600).unwrap();
        assert_eq!(verify_token("secret", &token).unwrap(), "user-42");
    }

    #[test]
    fn wrong_secret_fails_verification() {
        let token = issue_token("secret", "user-42", 3600).unwrap();
        assert!(matches!(
            verify_token("other", &token),
            Err(AuthError::InvalidToken)
        ));
    }

    #[test]
    fn garbage_token_fails_verification() {
        assert!(verify_token("secret", "not-a-jwt").is_err());
    }
}
