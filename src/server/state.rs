//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources and
//! dependencies needed by the application. The state is initialized once during startup
//! and then cloned for each request handler through Axum's state extraction.
//!
//! The state includes:
//! - Database connection pool for data persistence
//! - Token service holding the JWT signing keys
//! - Game rules read from configuration

use sea_orm::DatabaseConnection;

use crate::server::{model::game::GameRules, service::token::TokenService};

/// Application state containing shared resources and dependencies.
///
/// All fields use cheap-to-clone types:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `TokenService` keeps its keys behind an `Arc`
/// - `GameRules` is a small `Copy` value
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Issues and verifies bearer tokens.
    pub tokens: TokenService,

    /// Bounds applied when recording a game.
    pub game_rules: GameRules,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `tokens` - Token service configured with the JWT secret
    /// - `game_rules` - Player count bounds for recorded games
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(db: DatabaseConnection, tokens: TokenService, game_rules: GameRules) -> Self {
        Self {
            db,
            tokens,
            game_rules,
        }
    }
}
