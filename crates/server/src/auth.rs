//! Session tokens.
//!
//! Access and refresh tokens are HS256 JWTs carrying the same claims; they
//! only differ in lifetime.

use chrono::{Duration, Utc};
use engine::User;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_TOKEN_TTL_HOURS: i64 = 24;
pub const DEFAULT_REFRESH_TOKEN_TTL_HOURS: i64 = 168;

#[derive(Error, Debug)]
pub enum TokenError {
    #[error("failed to sign token: {0}")]
    Sign(jsonwebtoken::errors::Error),
    #[error("invalid or expired token")]
    Invalid(jsonwebtoken::errors::Error),
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub uid: String,
    /// Expiration (Unix timestamp seconds)
    pub exp: i64,
}

/// The authenticated user, attached to every request that passed the auth
/// middleware.
#[derive(Clone, Debug, PartialEq)]
pub struct Identity {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub uid: String,
}

/// A freshly issued token pair.
#[derive(Debug)]
pub struct Tokens {
    pub token: String,
    pub refresh_token: String,
}

pub struct TokenService {
    secret: String,
    ttl: Duration,
    refresh_ttl: Duration,
}

impl TokenService {
    pub fn new(secret: impl Into<String>, ttl: Duration, refresh_ttl: Duration) -> Self {
        Self {
            secret: secret.into(),
            ttl,
            refresh_ttl,
        }
    }

    pub fn with_defaults(secret: impl Into<String>) -> Self {
        Self::new(
            secret,
            Duration::hours(DEFAULT_TOKEN_TTL_HOURS),
            Duration::hours(DEFAULT_REFRESH_TOKEN_TTL_HOURS),
        )
    }

    pub fn issue(&self, user: &User) -> Result<Tokens, TokenError> {
        Ok(Tokens {
            token: self.sign(user, self.ttl)?,
            refresh_token: self.sign(user, self.refresh_ttl)?,
        })
    }

    pub fn validate(&self, token: &str) -> Result<Identity, TokenError> {
        let data = jsonwebtoken::decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &Validation::new(Algorithm::HS256),
        )
        .map_err(TokenError::Invalid)?;

        let claims = data.claims;
        Ok(Identity {
            email: claims.email,
            first_name: claims.first_name,
            last_name: claims.last_name,
            uid: claims.uid,
        })
    }

    fn sign(&self, user: &User, ttl: Duration) -> Result<String, TokenError> {
        let claims = Claims {
            email: user.email.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            uid: user.user_id.clone(),
            exp: (Utc::now() + ttl).timestamp(),
        };

        jsonwebtoken::encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
        .map_err(TokenError::Sign)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> User {
        let now = Utc::now();
        User {
            user_id: "u1".to_string(),
            first_name: "Ada".to_string(),
            last_name: "Rossi".to_string(),
            email: "ada@trattoria.it".to_string(),
            phone: "+39 1".to_string(),
            avatar: None,
            token: None,
            refresh_token: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn issued_tokens_validate() {
        let service = TokenService::with_defaults("secret");
        let tokens = service.issue(&user()).unwrap();

        let identity = service.validate(&tokens.token).unwrap();
        assert_eq!(identity.uid, "u1");
        assert_eq!(identity.email, "ada@trattoria.it");
        assert_eq!(identity.first_name, "Ada");
        assert!(service.validate(&tokens.refresh_token).is_ok());
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let tokens = TokenService::with_defaults("secret").issue(&user()).unwrap();

        let result = TokenService::with_defaults("other").validate(&tokens.token);
        assert!(matches!(result, Err(TokenError::Invalid(_))));
    }

    #[test]
    fn expired_token_is_rejected() {
        let service = TokenService::new("secret", Duration::hours(-2), Duration::hours(-2));
        let tokens = service.issue(&user()).unwrap();

        assert!(service.validate(&tokens.token).is_err());
    }

    #[test]
    fn garbage_is_rejected() {
        let service = TokenService::with_defaults("secret");

        assert!(service.validate("not.a.jwt").is_err());
    }
}
