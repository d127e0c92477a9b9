use std::str::FromStr;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_SERVER_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_JWT_EXPIRATION_SECS: u64 = 36_000;
const DEFAULT_ADMIN_EMAIL: &str = "admin@veil.com";
const DEFAULT_ADMIN_PASSWORD: &str = "AdminPassword1!";
const DEFAULT_ADMIN_NICKNAME: &str = "admin";
const DEFAULT_GAME_MIN_PLAYERS: usize = 2;
const DEFAULT_GAME_MAX_PLAYERS: usize = 10;

pub struct Config {
    pub database_url: String,
    pub server_addr: String,

    pub jwt_secret: String,
    pub jwt_expiration_secs: u64,

    pub admin_email: String,
    pub admin_password: String,
    pub admin_nickname: String,

    pub load_sample_data: bool,

    pub game_min_players: usize,
    pub game_max_players: usize,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let config = Self {
            database_url: required("DATABASE_URL")?,
            server_addr: optional("SERVER_ADDR", DEFAULT_SERVER_ADDR.to_string())?,
            jwt_secret: required("JWT_SECRET")?,
            jwt_expiration_secs: optional("JWT_EXPIRATION_SECS", DEFAULT_JWT_EXPIRATION_SECS)?,
            admin_email: optional("ADMIN_EMAIL", DEFAULT_ADMIN_EMAIL.to_string())?,
            admin_password: optional("ADMIN_PASSWORD", DEFAULT_ADMIN_PASSWORD.to_string())?,
            admin_nickname: optional("ADMIN_NICKNAME", DEFAULT_ADMIN_NICKNAME.to_string())?,
            load_sample_data: optional("LOAD_SAMPLE_DATA", false)?,
            game_min_players: optional("GAME_MIN_PLAYERS", DEFAULT_GAME_MIN_PLAYERS)?,
            game_max_players: optional("GAME_MAX_PLAYERS", DEFAULT_GAME_MAX_PLAYERS)?,
        };

        if config.game_min_players < 2 || config.game_min_players > config.game_max_players {
            return Err(ConfigError::InvalidEnvVar {
                name: "GAME_MIN_PLAYERS".to_string(),
                value: config.game_min_players.to_string(),
            }
            .into());
        }

        Ok(config)
    }
}

/// Reads a required environment variable.
fn required(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

/// Reads and parses an optional environment variable, falling back to `default` when unset.
fn optional<T: FromStr>(name: &str, default: T) -> Result<T, ConfigError> {
    match std::env::var(name) {
        Ok(value) => value.parse::<T>().map_err(|_| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value,
        }),
        Err(_) => Ok(default),
    }
}
