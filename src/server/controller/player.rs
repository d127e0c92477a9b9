use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::player::{
        AddCoinsDto, UpdatePasswordDto, UpdatePlayerDto, UpdateProfileImageDto, UpdateSkinDto,
    },
    server::{
        error::AppError,
        extract::{AppJson, AppPath},
        middleware::auth::{AuthGuard, Caller, Permission},
        model::player::UpdatePlayerParam,
        service::player::PlayerService,
        state::AppState,
    },
};

/// GET /api/players/me - Get the calling player
///
/// # Returns
/// - `200 OK`: PlayerDto of the caller
/// - `401 Unauthorized`: Missing or invalid token
pub async fn get_me(
    State(state): State<AppState>,
    caller: Caller,
) -> Result<impl IntoResponse, AppError> {
    let auth_guard = AuthGuard::new(&state.db, &caller);
    let player = auth_guard.require(&[]).await?;

    Ok((StatusCode::OK, Json(player.into_dto())))
}

/// GET /api/players/{email} - Get a player
///
/// # Authentication
/// Caller must be the player
///
/// # Returns
/// - `200 OK`: PlayerDto
/// - `403 Forbidden`: Caller is another player
pub async fn get_player(
    State(state): State<AppState>,
    AppPath(email): AppPath<String>,
    caller: Caller,
) -> Result<impl IntoResponse, AppError> {
    let auth_guard = AuthGuard::new(&state.db, &caller);
    auth_guard.require(&[Permission::Owner(&email)]).await?;

    let player = PlayerService::new(&state.db).get_player(&email).await?;

    Ok((StatusCode::OK, Json(player.into_dto())))
}

/// PUT /api/players/{email} - Update nickname and/or password
///
/// # Returns
/// - `200 OK`: Updated PlayerDto
/// - `400 Bad Request`: Nickname or password failed validation
/// - `403 Forbidden`: Caller is another player
/// - `409 Conflict`: Nickname taken by another player
pub async fn update_player(
    State(state): State<AppState>,
    AppPath(email): AppPath<String>,
    caller: Caller,
    AppJson(payload): AppJson<UpdatePlayerDto>,
) -> Result<impl IntoResponse, AppError> {
    let auth_guard = AuthGuard::new(&state.db, &caller);
    auth_guard.require(&[Permission::Owner(&email)]).await?;

    let player = PlayerService::new(&state.db)
        .update_player(
            &email,
            UpdatePlayerParam {
                nickname: payload.nickname,
                password: payload.password,
            },
        )
        .await?;

    Ok((StatusCode::OK, Json(player.into_dto())))
}

/// PUT /api/players/{email}/password - Change the caller's password
///
/// # Returns
/// - `200 OK`: Updated PlayerDto
/// - `400 Bad Request`: Password does not meet the complexity rules
/// - `403 Forbidden`: Caller is not the player
pub async fn update_password(
    State(state): State<AppState>,
    AppPath(email): AppPath<String>,
    caller: Caller,
    AppJson(payload): AppJson<UpdatePasswordDto>,
) -> Result<impl IntoResponse, AppError> {
    let auth_guard = AuthGuard::new(&state.db, &caller);
    auth_guard.require(&[Permission::Owner(&email)]).await?;

    let player = PlayerService::new(&state.db)
        .change_password(&email, &payload.password)
        .await?;

    Ok((StatusCode::OK, Json(player.into_dto())))
}

/// PUT /api/players/{email}/skin - Set the skin URL
pub async fn update_skin(
    State(state): State<AppState>,
    AppPath(email): AppPath<String>,
    caller: Caller,
    AppJson(payload): AppJson<UpdateSkinDto>,
) -> Result<impl IntoResponse, AppError> {
    let auth_guard = AuthGuard::new(&state.db, &caller);
    auth_guard.require(&[Permission::Owner(&email)]).await?;

    let player = PlayerService::new(&state.db)
        .update_skin(&email, &payload.skin_url)
        .await?;

    Ok((StatusCode::OK, Json(player.into_dto())))
}

/// PUT /api/players/{email}/profile-image - Set the profile image URL
pub async fn update_profile_image(
    State(state): State<AppState>,
    AppPath(email): AppPath<String>,
    caller: Caller,
    AppJson(payload): AppJson<UpdateProfileImageDto>,
) -> Result<impl IntoResponse, AppError> {
    let auth_guard = AuthGuard::new(&state.db, &caller);
    auth_guard.require(&[Permission::Owner(&email)]).await?;

    let player = PlayerService::new(&state.db)
        .update_profile_image(&email, &payload.profile_image_url)
        .await?;

    Ok((StatusCode::OK, Json(player.into_dto())))
}

/// POST /api/players/{email}/coins - Add coins to the balance
///
/// # Returns
/// - `200 OK`: PlayerDto with the new balance
/// - `400 Bad Request`: Amount below 1 or balance would exceed 999,999
pub async fn add_coins(
    State(state): State<AppState>,
    AppPath(email): AppPath<String>,
    caller: Caller,
    AppJson(payload): AppJson<AddCoinsDto>,
) -> Result<impl IntoResponse, AppError> {
    let auth_guard = AuthGuard::new(&state.db, &caller);
    auth_guard.require(&[Permission::Owner(&email)]).await?;

    let player = PlayerService::new(&state.db)
        .add_coins(&email, payload.amount)
        .await?;

    Ok((StatusCode::OK, Json(player.into_dto())))
}

/// DELETE /api/players/{email} - Delete the account
///
/// # Returns
/// - `204 No Content`: Player and all owned rows deleted
/// - `403 Forbidden`: Caller is another player
pub async fn delete_player(
    State(state): State<AppState>,
    AppPath(email): AppPath<String>,
    caller: Caller,
) -> Result<impl IntoResponse, AppError> {
    let auth_guard = AuthGuard::new(&state.db, &caller);
    auth_guard.require(&[Permission::Owner(&email)]).await?;

    PlayerService::new(&state.db).delete_player(&email).await?;

    Ok(StatusCode::NO_CONTENT)
}
