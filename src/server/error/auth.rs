use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// Request carried no valid bearer token.
    ///
    /// Either the `Authorization` header was absent or the token failed signature or
    /// expiry validation in the authentication middleware. Results in 401 Unauthorized.
    #[error("Request is not authenticated")]
    MissingToken,

    /// Token subject does not resolve to a stored player.
    ///
    /// Happens when a player was deleted after the token was issued. Results in
    /// 401 Unauthorized.
    #[error("Player {0} referenced by token does not exist")]
    PlayerNotFound(String),

    /// Login attempt with an unknown email or a wrong password.
    ///
    /// Both cases share one message so login does not reveal which emails are registered.
    /// Results in 401 Unauthorized.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Authenticated player lacks permission for the requested resource.
    ///
    /// Results in 403 Forbidden.
    ///
    /// # Fields
    /// - Email of the acting player
    /// - Reason the access was denied, logged at debug level
    #[error("Player {0} denied access: {1}")]
    AccessDenied(String, String),
}

/// Converts authentication errors into HTTP responses.
///
/// Maps authentication errors to appropriate HTTP status codes and user-friendly error messages:
/// - `MissingToken` / `PlayerNotFound` → 401 Unauthorized with "Authentication required"
/// - `InvalidCredentials` → 401 Unauthorized with "Invalid email or password"
/// - `AccessDenied` → 403 Forbidden with "Access denied"
///
/// All errors are logged at debug level for diagnostics while keeping client-facing messages
/// generic to avoid information leakage.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let (status, message) = match self {
            Self::MissingToken | Self::PlayerNotFound(_) => {
                (StatusCode::UNAUTHORIZED, "Authentication required")
            }
            Self::InvalidCredentials => (StatusCode::UNAUTHORIZED, "Invalid email or password"),
            Self::AccessDenied(_, _) => (StatusCode::FORBIDDEN, "Access denied"),
        };

        (
            status,
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}
