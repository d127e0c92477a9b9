use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::auth::{LoginDto, RegisterDto},
    server::{
        error::AppError, extract::AppJson, model::player::RegisterPlayerParam,
        service::auth::AuthService,
        state::AppState,
    },
};

/// POST /api/auth/login - Exchange credentials for a bearer token
///
/// # Returns
/// - `200 OK`: TokenDto with the token, email and nickname
/// - `401 Unauthorized`: Unknown email or wrong password
pub async fn login(
    State(state): State<AppState>,
    AppJson(payload): AppJson<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let auth_service = AuthService::new(&state.db, &state.tokens);
    let result = auth_service
        .login(&payload.email, &payload.password)
        .await?;

    Ok((StatusCode::OK, Json(result.into_dto())))
}

/// POST /api/auth/register - Create a new player account
///
/// # Returns
/// - `201 Created`: PlayerDto of the new player
/// - `400 Bad Request`: Email, nickname, password or URL failed validation
/// - `409 Conflict`: Email or nickname already taken
pub async fn register(
    State(state): State<AppState>,
    AppJson(payload): AppJson<RegisterDto>,
) -> Result<impl IntoResponse, AppError> {
    let auth_service = AuthService::new(&state.db, &state.tokens);
    let player = auth_service
        .register(RegisterPlayerParam {
            email: payload.email,
            nickname: payload.nickname,
            password: payload.password,
            skin_url: payload.skin_url,
            profile_image_url: payload.profile_image_url,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(player.into_dto())))
}
