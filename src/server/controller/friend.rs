use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::friend::{FriendRequestIdDto, SendFriendRequestDto},
    server::{
        error::AppError,
        extract::{AppJson, AppPath},
        middleware::auth::{AuthGuard, Caller},
        service::friend::FriendService,
        state::AppState,
    },
};

/// POST /api/friends/requests - Send a friend request from the caller
///
/// # Returns
/// - `201 Created`: FriendRequestIdDto
/// - `400 Bad Request`: Caller targeted themselves
/// - `404 Not Found`: Target player does not exist
/// - `409 Conflict`: Already friends or request already pending
pub async fn send_request(
    State(state): State<AppState>,
    caller: Caller,
    AppJson(payload): AppJson<SendFriendRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let auth_guard = AuthGuard::new(&state.db, &caller);
    let player = auth_guard.require(&[]).await?;

    let friend_request_id = FriendService::new(&state.db)
        .send_request(&player.email, &payload.player_email)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(FriendRequestIdDto { friend_request_id }),
    ))
}

/// GET /api/friends/requests - Pending requests received by the caller
pub async fn list_requests(
    State(state): State<AppState>,
    caller: Caller,
) -> Result<impl IntoResponse, AppError> {
    let auth_guard = AuthGuard::new(&state.db, &caller);
    let player = auth_guard.require(&[]).await?;

    let requests = FriendService::new(&state.db)
        .list_requests(&player.email)
        .await?;
    let requests_dto: Vec<_> = requests.into_iter().map(|r| r.into_dto()).collect();

    Ok((StatusCode::OK, Json(requests_dto)))
}

/// GET /api/friends/requests/sent - Pending requests sent by the caller
pub async fn list_sent_requests(
    State(state): State<AppState>,
    caller: Caller,
) -> Result<impl IntoResponse, AppError> {
    let auth_guard = AuthGuard::new(&state.db, &caller);
    let player = auth_guard.require(&[]).await?;

    let requests = FriendService::new(&state.db)
        .list_sent_requests(&player.email)
        .await?;
    let requests_dto: Vec<_> = requests.into_iter().map(|r| r.into_dto()).collect();

    Ok((StatusCode::OK, Json(requests_dto)))
}

/// GET /api/friends/requests/{id} - A request the caller sent or received
///
/// # Returns
/// - `200 OK`: FriendRequestDto
/// - `403 Forbidden`: Caller is not a party to the request
/// - `404 Not Found`: No request with that id
pub async fn get_request(
    State(state): State<AppState>,
    AppPath(request_id): AppPath<i32>,
    caller: Caller,
) -> Result<impl IntoResponse, AppError> {
    let auth_guard = AuthGuard::new(&state.db, &caller);
    let player = auth_guard.require(&[]).await?;

    let request = FriendService::new(&state.db)
        .get_request(request_id, &player.email)
        .await?;

    Ok((StatusCode::OK, Json(request.into_dto())))
}

/// POST /api/friends/requests/{id}/accept - Accept a request addressed to the caller
///
/// # Returns
/// - `200 OK`: FriendDto of the new friend
/// - `403 Forbidden`: Caller is not the recipient
/// - `404 Not Found`: No request with that id
pub async fn accept_request(
    State(state): State<AppState>,
    AppPath(request_id): AppPath<i32>,
    caller: Caller,
) -> Result<impl IntoResponse, AppError> {
    let auth_guard = AuthGuard::new(&state.db, &caller);
    let player = auth_guard.require(&[]).await?;

    let friend = FriendService::new(&state.db)
        .accept_request(request_id, &player.email)
        .await?;

    Ok((StatusCode::OK, Json(friend.into_dto())))
}

/// DELETE /api/friends/requests/{id} - Decline or cancel a request
///
/// # Returns
/// - `204 No Content`: Request removed
/// - `403 Forbidden`: Caller is not a party to the request
/// - `404 Not Found`: No request with that id
pub async fn reject_request(
    State(state): State<AppState>,
    AppPath(request_id): AppPath<i32>,
    caller: Caller,
) -> Result<impl IntoResponse, AppError> {
    let auth_guard = AuthGuard::new(&state.db, &caller);
    let player = auth_guard.require(&[]).await?;

    FriendService::new(&state.db)
        .reject_request(request_id, &player.email)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/friends - The caller's friends with friendship dates
pub async fn list_friends(
    State(state): State<AppState>,
    caller: Caller,
) -> Result<impl IntoResponse, AppError> {
    let auth_guard = AuthGuard::new(&state.db, &caller);
    let player = auth_guard.require(&[]).await?;

    let friends = FriendService::new(&state.db)
        .list_friends(&player.email)
        .await?;
    let friends_dto: Vec<_> = friends.into_iter().map(|f| f.into_dto()).collect();

    Ok((StatusCode::OK, Json(friends_dto)))
}

/// DELETE /api/friends/{email} - End a friendship
///
/// # Returns
/// - `204 No Content`: Both friendship rows removed (or none existed)
/// - `404 Not Found`: Friend player does not exist
pub async fn remove_friend(
    State(state): State<AppState>,
    AppPath(friend_email): AppPath<String>,
    caller: Caller,
) -> Result<impl IntoResponse, AppError> {
    let auth_guard = AuthGuard::new(&state.db, &caller);
    let player = auth_guard.require(&[]).await?;

    FriendService::new(&state.db)
        .remove_friend(&player.email, &friend_email)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
