//! Bearer token issuance and validation.
//!
//! Tokens are HS256-signed JWTs carrying the user id as subject with a fixed
//! five-minute lifetime. Validation checks signature and expiry only; the
//! credential store is not re-consulted, so a deleted user's token remains
//! valid until it expires.

use chrono::{DateTime, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::Error;

/// Fixed token lifetime. Not configurable per call.
const TOKEN_TTL_SECS: i64 = 5 * 60;

/// Claims embedded in every issued token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the authenticated user's id.
    pub sub: i32,
    /// Issued-at (Unix timestamp).
    pub iat: i64,
    /// Expiry (Unix timestamp), always `iat + 300`.
    pub exp: i64,
}

/// Issues and validates signed bearer tokens with a process-wide secret.
#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenService {
    /// Build a service around the given signing secret.
    ///
    /// The secret must be in place before any token is issued or validated.
    pub fn new(secret: &[u8]) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // Zero leeway: a token one second past expiry is rejected.
        validation.leeway = 0;
        validation.validate_aud = false;
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
        }
    }

    /// Issue a token for an already-authenticated user.
    pub fn issue(&self, user_id: i32) -> Result<String, Error> {
        self.issue_at(user_id, Utc::now())
    }

    fn issue_at(&self, user_id: i32, now: DateTime<Utc>) -> Result<String, Error> {
        let iat = now.timestamp();
        let claims = Claims {
            sub: user_id,
            iat,
            exp: iat + TOKEN_TTL_SECS,
        };
        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|err| Error::internal(format!("failed to sign token: {err}")))
    }

    /// Validate a token and extract the subject user id.
    pub fn validate(&self, token: &str) -> Result<i32, Error> {
        let data = decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|err| {
            debug!(error = %err, "token rejected");
            match err.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                    Error::unauthorized("Token expired")
                }
                _ => Error::unauthorized("Token invalid"),
            }
        })?;
        Ok(data.claims.sub)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode;
    use chrono::Duration;

    fn service() -> TokenService {
        TokenService::new(b"test-secret-key-that-is-long-enough")
    }

    #[test]
    fn issues_and_validates_round_trip() {
        let tokens = service();
        let token = tokens.issue(42).expect("token issued");
        assert!(!token.is_empty());
        assert_eq!(tokens.validate(&token).expect("token valid"), 42);
    }

    #[test]
    fn rejects_token_one_second_past_expiry() {
        let tokens = service();
        // Simulated clock: issued five minutes and one second ago.
        let issued_at = Utc::now() - Duration::seconds(TOKEN_TTL_SECS + 1);
        let token = tokens.issue_at(7, issued_at).expect("token issued");

        let err = tokens.validate(&token).expect_err("token must be expired");
        assert_eq!(err.code, ErrorCode::Unauthorized);
        assert_eq!(err.message, "Token expired");
    }

    #[test]
    fn accepts_token_just_inside_expiry() {
        let tokens = service();
        let issued_at = Utc::now() - Duration::seconds(TOKEN_TTL_SECS - 5);
        let token = tokens.issue_at(7, issued_at).expect("token issued");
        assert_eq!(tokens.validate(&token).expect("still valid"), 7);
    }

    #[test]
    fn rejects_token_signed_with_other_secret() {
        let token = TokenService::new(b"first-secret-key-for-signing-tests")
            .issue(1)
            .expect("token issued");
        let err = service().validate(&token).expect_err("signature mismatch");
        assert_eq!(err.message, "Token invalid");
    }

    #[test]
    fn rejects_garbage_token() {
        let err = service()
            .validate("definitely.not.a-token")
            .expect_err("garbage rejected");
        assert_eq!(err.code, ErrorCode::Unauthorized);
    }
}
