use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::auth::{validate_access, validate_is_participant, AuthGuard, Caller, Permission},
    model::auth::Claims,
};
use test_utils::{builder::TestBuilder, factory};

mod require;

/// Builds a caller as the authentication middleware would for `email`.
fn caller(email: &str) -> Caller {
    Caller(Some(Claims {
        sub: email.to_string(),
        roles: vec!["USER".to_string()],
        iat: 0,
        exp: u64::MAX,
    }))
}
