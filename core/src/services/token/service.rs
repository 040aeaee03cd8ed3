//! Token codec implementation.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use uuid::Uuid;

use crate::domain::entities::token::Claims;
use crate::errors::{DomainError, TokenError};

use super::config::TokenConfig;

/// Issues and verifies HS256-signed bearer tokens.
///
/// The signing secret is injected through [`TokenConfig`] at
/// construction; there is no environment fallback and no default key.
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    validity: Duration,
}

impl TokenService {
    /// Creates a new token service.
    ///
    /// Fails when the configured secret is empty: signing with an empty
    /// key would silently produce forgeable tokens, so startup must
    /// abort instead.
    pub fn new(config: TokenConfig) -> Result<Self, DomainError> {
        if config.secret.trim().is_empty() {
            return Err(DomainError::Internal {
                message: "token signing secret must not be empty".to_string(),
            });
        }

        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        // Expiry is exact; the default 60s leeway would let an expired
        // token pass for another minute.
        validation.leeway = 0;

        Ok(Self {
            encoding_key: EncodingKey::from_secret(config.secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.secret.as_bytes()),
            validation,
            validity: Duration::hours(config.validity_hours),
        })
    }

    /// Issues a token for `user_id` valid from now.
    pub fn issue(&self, user_id: Uuid) -> Result<String, DomainError> {
        self.issue_at(user_id, Utc::now())
    }

    /// Issues a token for `user_id` as if created at `issued_at`.
    ///
    /// The expiry claim is `issued_at` plus the configured validity
    /// window.
    pub fn issue_at(
        &self,
        user_id: Uuid,
        issued_at: DateTime<Utc>,
    ) -> Result<String, DomainError> {
        let claims = Claims::new(user_id, issued_at, self.validity);
        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|_| DomainError::Token(TokenError::GenerationFailed))
    }

    /// Verifies a token and returns the embedded subject id.
    ///
    /// Checks run in order: structure, signature algorithm, signature,
    /// expiry. Each failure maps to its own [`TokenError`] kind; a token
    /// claiming any algorithm other than the expected HMAC family is
    /// rejected before its signature is considered.
    pub fn verify(&self, token: &str) -> Result<Uuid, DomainError> {
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                let kind = match e.kind() {
                    jsonwebtoken::errors::ErrorKind::ExpiredSignature => TokenError::Expired,
                    jsonwebtoken::errors::ErrorKind::InvalidSignature => {
                        TokenError::InvalidSignature
                    }
                    jsonwebtoken::errors::ErrorKind::InvalidAlgorithm
                    | jsonwebtoken::errors::ErrorKind::InvalidAlgorithmName => {
                        TokenError::UnsupportedAlgorithm
                    }
                    _ => TokenError::Malformed,
                };
                DomainError::Token(kind)
            })?;

        token_data
            .claims
            .user_id()
            .map_err(|_| DomainError::Token(TokenError::Malformed))
    }
}
