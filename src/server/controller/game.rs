use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::game::{CreateGameDto, WasMurdererDto},
    server::{
        error::AppError,
        extract::{AppJson, AppPath},
        middleware::auth::{validate_is_participant, AuthGuard, Caller, Permission},
        model::game::CreateGameParam,
        service::game::GameService,
        state::AppState,
    },
};

/// POST /api/games - Record a finished game
///
/// # Authentication
/// Caller must be one of the listed players
///
/// # Returns
/// - `201 Created`: GameDto
/// - `400 Bad Request`: Invalid duration, player count, duplicates or murderer
/// - `403 Forbidden`: Caller is not among the players
/// - `404 Not Found`: A listed player does not exist
pub async fn create_game(
    State(state): State<AppState>,
    caller: Caller,
    AppJson(payload): AppJson<CreateGameDto>,
) -> Result<impl IntoResponse, AppError> {
    let auth_guard = AuthGuard::new(&state.db, &caller);
    let player = auth_guard.require(&[]).await?;

    validate_is_participant(&player, payload.player_emails.as_slice())?;

    let game = GameService::new(&state.db, state.game_rules)
        .create_game(CreateGameParam {
            player_emails: payload.player_emails,
            murderer_email: payload.murderer_email,
            duration: payload.duration,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(game.into_dto())))
}

/// GET /api/games - Games the caller played, newest first
pub async fn list_my_games(
    State(state): State<AppState>,
    caller: Caller,
) -> Result<impl IntoResponse, AppError> {
    let auth_guard = AuthGuard::new(&state.db, &caller);
    let player = auth_guard.require(&[]).await?;

    let games = GameService::new(&state.db, state.game_rules)
        .list_player_games(&player.email)
        .await?;
    let games_dto: Vec<_> = games.into_iter().map(|g| g.into_dto()).collect();

    Ok((StatusCode::OK, Json(games_dto)))
}

/// GET /api/games/player/{email} - Games of a player
///
/// # Authentication
/// Caller must be the player or an admin
pub async fn list_player_games(
    State(state): State<AppState>,
    AppPath(email): AppPath<String>,
    caller: Caller,
) -> Result<impl IntoResponse, AppError> {
    let auth_guard = AuthGuard::new(&state.db, &caller);
    auth_guard
        .require(&[Permission::OwnerOrAdmin(&email)])
        .await?;

    let games = GameService::new(&state.db, state.game_rules)
        .list_player_games(&email)
        .await?;
    let games_dto: Vec<_> = games.into_iter().map(|g| g.into_dto()).collect();

    Ok((StatusCode::OK, Json(games_dto)))
}

/// GET /api/games/{id} - A game with all participants
///
/// # Authentication
/// Caller must have played in the game or be an admin
///
/// # Returns
/// - `200 OK`: GameDto
/// - `403 Forbidden`: Caller is not an admin and did not play, or the game does not exist
/// - `404 Not Found`: No game with that id (admins only)
pub async fn get_game(
    State(state): State<AppState>,
    AppPath(game_id): AppPath<i32>,
    caller: Caller,
) -> Result<impl IntoResponse, AppError> {
    let auth_guard = AuthGuard::new(&state.db, &caller);
    let player = auth_guard.require(&[]).await?;

    let service = GameService::new(&state.db, state.game_rules);
    let game = if player.is_admin() {
        service.get_game(game_id).await?
    } else {
        service.get_participant_game(game_id, &player.email).await?
    };

    Ok((StatusCode::OK, Json(game.into_dto())))
}

/// GET /api/games/{id}/was-murderer - Whether the caller was the murderer
///
/// # Returns
/// - `200 OK`: WasMurdererDto
/// - `404 Not Found`: No such game, or the caller did not play in it
pub async fn was_murderer(
    State(state): State<AppState>,
    AppPath(game_id): AppPath<i32>,
    caller: Caller,
) -> Result<impl IntoResponse, AppError> {
    let auth_guard = AuthGuard::new(&state.db, &caller);
    let player = auth_guard.require(&[]).await?;

    let was_murderer = GameService::new(&state.db, state.game_rules)
        .was_murderer(&player.email, game_id)
        .await?;

    Ok((StatusCode::OK, Json(WasMurdererDto { was_murderer })))
}

/// PUT /api/games/{id}/murderer/{email} - Reassign the murderer
///
/// # Authentication
/// Requires admin permission
///
/// # Returns
/// - `200 OK`: Updated GameDto
/// - `400 Bad Request`: Target did not play in the game
/// - `404 Not Found`: No game with that id
pub async fn set_murderer(
    State(state): State<AppState>,
    AppPath((game_id, email)): AppPath<(i32, String)>,
    caller: Caller,
) -> Result<impl IntoResponse, AppError> {
    let auth_guard = AuthGuard::new(&state.db, &caller);
    auth_guard.require(&[Permission::Admin]).await?;

    let game = GameService::new(&state.db, state.game_rules)
        .set_murderer(game_id, &email)
        .await?;

    Ok((StatusCode::OK, Json(game.into_dto())))
}
