mod model;
mod server;

use axum::middleware;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::EnvFilter;

use crate::server::{
    config::Config,
    error::AppError,
    middleware::auth::authenticate,
    model::game::GameRules,
    service::{role::RoleService, token::TokenService},
    startup,
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;

    RoleService::new(&db).initialize().await?;
    startup::ensure_admin(&db, &config).await?;
    if config.load_sample_data {
        startup::load_sample_data(&db).await?;
    }

    let state = AppState::new(
        db,
        TokenService::new(config.jwt_secret.as_bytes(), config.jwt_expiration_secs),
        GameRules {
            min_players: config.game_min_players,
            max_players: config.game_max_players,
        },
    );

    let app = server::router::router()
        .layer(middleware::from_fn_with_state(state.clone(), authenticate))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(&config.server_addr).await?;

    tracing::info!("Listening on {}", config.server_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
