//! Admin-only player management. Every handler requires the ADMIN role.

use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::player::{
        AddCoinsDto, PlayerPageQuery, UpdateNicknameDto, UpdatePasswordDto, UpdatePlayerDto,
        UpdateProfileImageDto, UpdateSkinDto,
    },
    server::{
        error::AppError,
        extract::{AppJson, AppPath, AppQuery},
        middleware::auth::{AuthGuard, Caller, Permission},
        model::player::UpdatePlayerParam,
        service::player::PlayerService,
        state::AppState,
    },
};

/// GET /api/admin/players?page&entries - Paginated player list ordered by nickname
///
/// # Query Parameters
/// - `page`: Zero-indexed page number (default 0)
/// - `entries`: Players per page, 1 to 100 (default 10)
///
/// # Returns
/// - `200 OK`: PaginatedPlayersDto
/// - `400 Bad Request`: Page size out of range
/// - `403 Forbidden`: Caller is not an admin
pub async fn list_players(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<PlayerPageQuery>,
    caller: Caller,
) -> Result<impl IntoResponse, AppError> {
    let auth_guard = AuthGuard::new(&state.db, &caller);
    auth_guard.require(&[Permission::Admin]).await?;

    let players = PlayerService::new(&state.db)
        .get_all_players(query.page, query.entries)
        .await?;

    Ok((StatusCode::OK, Json(players.into_dto())))
}

/// GET /api/admin/players/{email} - Any player
pub async fn get_player(
    State(state): State<AppState>,
    AppPath(email): AppPath<String>,
    caller: Caller,
) -> Result<impl IntoResponse, AppError> {
    let auth_guard = AuthGuard::new(&state.db, &caller);
    auth_guard.require(&[Permission::Admin]).await?;

    let player = PlayerService::new(&state.db).get_player(&email).await?;

    Ok((StatusCode::OK, Json(player.into_dto())))
}

/// PUT /api/admin/players/{email} - Force a nickname and/or password change
pub async fn update_player(
    State(state): State<AppState>,
    AppPath(email): AppPath<String>,
    caller: Caller,
    AppJson(payload): AppJson<UpdatePlayerDto>,
) -> Result<impl IntoResponse, AppError> {
    let auth_guard = AuthGuard::new(&state.db, &caller);
    auth_guard.require(&[Permission::Admin]).await?;

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

/// PUT /api/admin/players/{email}/nickname - Force a nickname change
pub async fn update_nickname(
    State(state): State<AppState>,
    AppPath(email): AppPath<String>,
    caller: Caller,
    AppJson(payload): AppJson<UpdateNicknameDto>,
) -> Result<impl IntoResponse, AppError> {
    let auth_guard = AuthGuard::new(&state.db, &caller);
    auth_guard.require(&[Permission::Admin]).await?;

    let player = PlayerService::new(&state.db)
        .update_nickname(&email, &payload.nickname)
        .await?;

    Ok((StatusCode::OK, Json(player.into_dto())))
}

/// PUT /api/admin/players/{email}/password - Reset a player's password
pub async fn update_password(
    State(state): State<AppState>,
    AppPath(email): AppPath<String>,
    caller: Caller,
    AppJson(payload): AppJson<UpdatePasswordDto>,
) -> Result<impl IntoResponse, AppError> {
    let auth_guard = AuthGuard::new(&state.db, &caller);
    auth_guard.require(&[Permission::Admin]).await?;

    let player = PlayerService::new(&state.db)
        .change_password(&email, &payload.password)
        .await?;

    Ok((StatusCode::OK, Json(player.into_dto())))
}

/// PUT /api/admin/players/{email}/skin
pub async fn update_skin(
    State(state): State<AppState>,
    AppPath(email): AppPath<String>,
    caller: Caller,
    AppJson(payload): AppJson<UpdateSkinDto>,
) -> Result<impl IntoResponse, AppError> {
    let auth_guard = AuthGuard::new(&state.db, &caller);
    auth_guard.require(&[Permission::Admin]).await?;

    let player = PlayerService::new(&state.db)
        .update_skin(&email, &payload.skin_url)
        .await?;

    Ok((StatusCode::OK, Json(player.into_dto())))
}

/// PUT /api/admin/players/{email}/profile-image
pub async fn update_profile_image(
    State(state): State<AppState>,
    AppPath(email): AppPath<String>,
    caller: Caller,
    AppJson(payload): AppJson<UpdateProfileImageDto>,
) -> Result<impl IntoResponse, AppError> {
    let auth_guard = AuthGuard::new(&state.db, &caller);
    auth_guard.require(&[Permission::Admin]).await?;

    let player = PlayerService::new(&state.db)
        .update_profile_image(&email, &payload.profile_image_url)
        .await?;

    Ok((StatusCode::OK, Json(player.into_dto())))
}

/// POST /api/admin/players/{email}/coins
pub async fn add_coins(
    State(state): State<AppState>,
    AppPath(email): AppPath<String>,
    caller: Caller,
    AppJson(payload): AppJson<AddCoinsDto>,
) -> Result<impl IntoResponse, AppError> {
    let auth_guard = AuthGuard::new(&state.db, &caller);
    auth_guard.require(&[Permission::Admin]).await?;

    let player = PlayerService::new(&state.db)
        .add_coins(&email, payload.amount)
        .await?;

    Ok((StatusCode::OK, Json(player.into_dto())))
}

/// POST /api/admin/players/{email}/roles/admin - Grant the ADMIN role
///
/// # Returns
/// - `200 OK`: PlayerDto including the new role list
/// - `404 Not Found`: No player with that email
pub async fn grant_admin(
    State(state): State<AppState>,
    AppPath(email): AppPath<String>,
    caller: Caller,
) -> Result<impl IntoResponse, AppError> {
    let auth_guard = AuthGuard::new(&state.db, &caller);
    auth_guard.require(&[Permission::Admin]).await?;

    let player = PlayerService::new(&state.db)
        .set_admin(&email, true)
        .await?;

    Ok((StatusCode::OK, Json(player.into_dto())))
}

/// DELETE /api/admin/players/{email}/roles/admin - Revoke the ADMIN role
pub async fn revoke_admin(
    State(state): State<AppState>,
    AppPath(email): AppPath<String>,
    caller: Caller,
) -> Result<impl IntoResponse, AppError> {
    let auth_guard = AuthGuard::new(&state.db, &caller);
    auth_guard.require(&[Permission::Admin]).await?;

    let player = PlayerService::new(&state.db)
        .set_admin(&email, false)
        .await?;

    Ok((StatusCode::OK, Json(player.into_dto())))
}

/// DELETE /api/admin/players/{email}
pub async fn delete_player(
    State(state): State<AppState>,
    AppPath(email): AppPath<String>,
    caller: Caller,
) -> Result<impl IntoResponse, AppError> {
    let auth_guard = AuthGuard::new(&state.db, &caller);
    auth_guard.require(&[Permission::Admin]).await?;

    PlayerService::new(&state.db).delete_player(&email).await?;

    Ok(StatusCode::NO_CONTENT)
}
