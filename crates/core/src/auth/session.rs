//! Signed session tokens (HS256) carried in the session cookie or a
//! bearer header.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::AuthError;

/// Name of the cookie that carries the session token.
pub const SESSION_COOKIE: &str = "studio_session";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Profile id.
    pub sub: Uuid,
    pub iat: i64,
    pub exp: i64,
}

#[derive(Clone)]
pub struct SessionKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl: Duration,
}

impl std::fmt::Debug for SessionKeys {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionKeys")
            .field("ttl", &self.ttl)
            .finish_non_exhaustive()
    }
}

impl SessionKeys {
    pub fn new(secret: &[u8], ttl: Duration) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            ttl,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub fn claims_for(&self, profile_id: Uuid) -> SessionClaims {
        let now = Utc::now();
        SessionClaims {
            sub: profile_id,
            iat: now.timestamp(),
            exp: (now + self.ttl).timestamp(),
        }
    }

    pub fn encode(&self, claims: &SessionClaims) -> Result<String, AuthError> {
        Ok(encode(&Header::new(Algorithm::HS256), claims, &self.encoding)?)
    }

    /// Issue a token for `profile_id` valid for the configured ttl.
    pub fn issue(&self, profile_id: Uuid) -> Result<String, AuthError> {
        self.encode(&self.claims_for(profile_id))
    }

    /// Check signature and expiry, returning the claims.
    pub fn verify(&self, token: &str) -> Result<SessionClaims, AuthError> {
        let validation = Validation::new(Algorithm::HS256);
        let data = decode::<SessionClaims>(token, &self.decoding, &validation)?;
        Ok(data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys() -> SessionKeys {
        SessionKeys::new(b"test-secret-with-some-length", Duration::hours(12))
    }

    #[test]
    fn issued_token_verifies() {
        let keys = keys();
        let id = Uuid::new_v4();
        let token = keys.issue(id).unwrap();
        let claims = keys.verify(&token).unwrap();
        assert_eq!(claims.sub, id);
        assert_eq!(claims.exp - claims.iat, 12 * 3600);
    }

    #[test]
    fn expired_token_is_rejected() {
        let keys = keys();
        let now = Utc::now().timestamp();
        let token = keys
            .encode(&SessionClaims {
                sub: Uuid::new_v4(),
                iat: now - 7200,
                exp: now - 3600,
            })
            .unwrap();
        assert!(keys.verify(&token).is_err());
    }

    #[test]
    fn token_from_other_secret_is_rejected() {
        let other = SessionKeys::new(b"another-secret", Duration::hours(1));
        let token = other.issue(Uuid::new_v4()).unwrap();
        assert!(keys().verify(&token).is_err());
    }
}
