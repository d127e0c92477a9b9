use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::server::{
    controller::{admin, auth, friend, game, player},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/register", post(auth::register))
        .merge(player_routes())
        .merge(friend_routes())
        .merge(game_routes())
        .nest("/api/admin", admin_routes())
}

fn player_routes() -> Router<AppState> {
    Router::new()
        .route("/api/players/me", get(player::get_me))
        .route(
            "/api/players/{email}",
            get(player::get_player)
                .put(player::update_player)
                .delete(player::delete_player),
        )
        .route("/api/players/{email}/password", put(player::update_password))
        .route("/api/players/{email}/skin", put(player::update_skin))
        .route(
            "/api/players/{email}/profile-image",
            put(player::update_profile_image),
        )
        .route("/api/players/{email}/coins", post(player::add_coins))
}

fn friend_routes() -> Router<AppState> {
    Router::new()
        .route("/api/friends", get(friend::list_friends))
        .route("/api/friends/{email}", delete(friend::remove_friend))
        .route(
            "/api/friends/requests",
            get(friend::list_requests).post(friend::send_request),
        )
        .route("/api/friends/requests/sent", get(friend::list_sent_requests))
        .route(
            "/api/friends/requests/{id}",
            get(friend::get_request).delete(friend::reject_request),
        )
        .route(
            "/api/friends/requests/{id}/accept",
            post(friend::accept_request),
        )
}

fn game_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/api/games",
            get(game::list_my_games).post(game::create_game),
        )
        .route("/api/games/player/{email}", get(game::list_player_games))
        .route("/api/games/{id}", get(game::get_game))
        .route("/api/games/{id}/was-murderer", get(game::was_murderer))
        .route("/api/games/{id}/murderer/{email}", put(game::set_murderer))
}

fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/players", get(admin::list_players))
        .route(
            "/players/{email}",
            get(admin::get_player)
                .put(admin::update_player)
                .delete(admin::delete_player),
        )
        .route("/players/{email}/coins", post(admin::add_coins))
        .route(
            "/players/{email}/roles/admin",
            post(admin::grant_admin).delete(admin::revoke_admin),
        )
        .route("/players/{email}/nickname", put(admin::update_nickname))
        .route("/players/{email}/password", put(admin::update_password))
        .route("/players/{email}/skin", put(admin::update_skin))
        .route(
            "/players/{email}/profile-image",
            put(admin::update_profile_image),
        )
}
