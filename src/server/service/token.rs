//! Bearer token issuing and verification.
//!
//! Tokens are HS256 JWTs signed with the configured secret. The service is cheap to
//! clone and lives in `AppState`.

use std::sync::Arc;

use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation};

use crate::server::{
    error::{internal::InternalError, AppError},
    model::{auth::Claims, role::Role},
};

struct Keys {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

/// Signs and verifies bearer tokens.
#[derive(Clone)]
pub struct TokenService {
    keys: Arc<Keys>,
    expiration_secs: u64,
}

impl TokenService {
    /// Creates a token service from a shared secret.
    ///
    /// # Arguments
    /// - `secret` - HMAC secret used to sign and verify tokens
    /// - `expiration_secs` - Lifetime of issued tokens in seconds
    pub fn new(secret: &[u8], expiration_secs: u64) -> Self {
        Self {
            keys: Arc::new(Keys {
                encoding: EncodingKey::from_secret(secret),
                decoding: DecodingKey::from_secret(secret),
            }),
            expiration_secs,
        }
    }

    /// Issues a signed token for a player.
    ///
    /// # Arguments
    /// - `email` - Subject of the token
    /// - `roles` - Roles held by the player at issue time
    ///
    /// # Returns
    /// - `Ok(String)` - Encoded JWT
    /// - `Err(AppError::InternalErr(TokenEncoding))` - Signing failed
    pub fn issue(&self, email: &str, roles: &[Role]) -> Result<String, AppError> {
        let now = Utc::now().timestamp().max(0) as u64;
        let claims = Claims {
            sub: email.to_string(),
            roles: roles.iter().map(|r| r.as_str().to_string()).collect(),
            iat: now,
            exp: now + self.expiration_secs,
        };

        self.encode(&claims)
    }

    /// Signs arbitrary claims.
    pub fn encode(&self, claims: &Claims) -> Result<String, AppError> {
        jsonwebtoken::encode(&Header::default(), claims, &self.keys.encoding)
            .map_err(|e| InternalError::TokenEncoding(e).into())
    }

    /// Verifies signature and expiry and returns the claims.
    pub fn verify(&self, token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        jsonwebtoken::decode::<Claims>(token, &self.keys.decoding, &Validation::default())
            .map(|data| data.claims)
    }
}
