//! Bearer token authentication and access guards.

use std::convert::Infallible;

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
    middleware::Next,
    response::Response,
};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::player::PlayerRepository,
    error::{auth::AuthError, AppError},
    model::{auth::Claims, player::Player},
    state::AppState,
};

/// Verifies the bearer token, if any, and stores its claims in the request extensions.
///
/// Requests without a token, or with one that fails signature or expiry checks, are
/// passed through unauthenticated. Endpoints that need a caller reject them through
/// `AuthGuard`.
pub async fn authenticate(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    if let Some(token) = bearer_token(request.headers()) {
        match state.tokens.verify(token) {
            Ok(claims) => {
                request.extensions_mut().insert(claims);
            }
            Err(e) => tracing::debug!("Rejected bearer token: {}", e),
        }
    }

    next.run(request).await
}

/// Extracts the token from an `Authorization: Bearer <token>` header.
fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;

    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }

    let token = token.trim();
    (!token.is_empty()).then_some(token)
}

/// Claims of the authenticated caller, `None` for anonymous requests.
#[derive(Debug, Clone, Default)]
pub struct Caller(pub Option<Claims>);

impl<S: Send + Sync> FromRequestParts<S> for Caller {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self(parts.extensions.get::<Claims>().cloned()))
    }
}

pub enum Permission<'p> {
    /// Caller holds the ADMIN role.
    Admin,
    /// Caller is the player with this email.
    Owner(&'p str),
    /// Caller is the player with this email or holds the ADMIN role.
    OwnerOrAdmin(&'p str),
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    caller: &'a Caller,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, caller: &'a Caller) -> Self {
        Self { db, caller }
    }

    /// Resolves the caller and checks every permission in order.
    ///
    /// Roles are read from the database rather than the token, so a revoked admin loses
    /// access without waiting for the token to expire.
    ///
    /// # Returns
    /// - `Ok(Player)` - The calling player
    /// - `Err(AuthError::MissingToken)` - Request is anonymous
    /// - `Err(AuthError::PlayerNotFound)` - Token subject no longer exists
    /// - `Err(AuthError::AccessDenied)` - A permission check failed
    pub async fn require(&self, permissions: &[Permission<'_>]) -> Result<Player, AppError> {
        let Some(claims) = self.caller.0.as_ref() else {
            return Err(AuthError::MissingToken.into());
        };

        let Some(player) = PlayerRepository::new(self.db)
            .find_by_email(&claims.sub)
            .await?
        else {
            return Err(AuthError::PlayerNotFound(claims.sub.clone()).into());
        };

        for permission in permissions {
            match permission {
                Permission::Admin => {
                    if !player.is_admin() {
                        return Err(AuthError::AccessDenied(
                            player.email.clone(),
                            "admin role required".to_string(),
                        )
                        .into());
                    }
                }
                Permission::Owner(email) => validate_access(&player, email)?,
                Permission::OwnerOrAdmin(email) => {
                    if !player.is_admin() {
                        validate_access(&player, email)?;
                    }
                }
            }
        }

        Ok(player)
    }
}

/// Fails unless `current` is the player identified by `target_email`.
pub fn validate_access(current: &Player, target_email: &str) -> Result<(), AppError> {
    if current.email != target_email {
        return Err(AuthError::AccessDenied(
            current.email.clone(),
            format!("resource belongs to {}", target_email),
        )
        .into());
    }

    Ok(())
}

/// Fails unless `current` is one of `emails`.
pub fn validate_is_participant<S: AsRef<str>>(
    current: &Player,
    emails: &[S],
) -> Result<(), AppError> {
    if !emails.iter().any(|e| e.as_ref() == current.email) {
        return Err(AuthError::AccessDenied(
            current.email.clone(),
            "not a participant".to_string(),
        )
        .into());
    }

    Ok(())
}
