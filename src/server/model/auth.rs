//! Authentication domain models.

use serde::{Deserialize, Serialize};

/// JWT claims carried by every bearer token.
///
/// `roles` reflects the roles at issue time and is informational only; guards reload
/// roles from the database on every request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Email of the authenticated player.
    pub sub: String,
    /// Role names held when the token was issued.
    pub roles: Vec<String>,
    /// Issued-at, seconds since the Unix epoch.
    pub iat: u64,
    /// Expiry, seconds since the Unix epoch.
    pub exp: u64,
}

/// Result of a successful login.
#[derive(Debug, Clone)]
pub struct LoginResult {
    pub token: String,
    pub email: String,
    pub nickname: String,
}

impl LoginResult {
    pub fn into_dto(self) -> crate::model::auth::TokenDto {
        crate::model::auth::TokenDto {
            token: self.token,
            email: self.email,
            nickname: self.nickname,
        }
    }
}
