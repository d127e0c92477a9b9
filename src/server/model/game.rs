//! Game record domain models and parameters.

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::GameRole;

use crate::model::game::{GameDto, GamePlayerDto, GameRoleDto};

/// Allowed range of game durations, in seconds.
pub const MIN_GAME_DURATION: i32 = 60;
pub const MAX_GAME_DURATION: i32 = 3600;

/// Player count bounds for recorded games.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameRules {
    pub min_players: usize,
    pub max_players: usize,
}

impl Default for GameRules {
    fn default() -> Self {
        Self {
            min_players: 2,
            max_players: 10,
        }
    }
}

/// Completed game with its participants.
#[derive(Debug, Clone, PartialEq)]
pub struct Game {
    pub id: i32,
    /// Length of the game in seconds.
    pub duration: i32,
    pub players: Vec<GameParticipant>,
}

impl Game {
    /// Returns whether `email` took part in the game.
    pub fn has_participant(&self, email: &str) -> bool {
        self.players.iter().any(|p| p.player_email == email)
    }

    pub fn into_dto(self) -> GameDto {
        GameDto {
            id: self.id,
            duration: self.duration,
            players: self.players.into_iter().map(|p| p.into_dto()).collect(),
        }
    }
}

/// One player's participation in a game.
#[derive(Debug, Clone, PartialEq)]
pub struct GameParticipant {
    pub player_email: String,
    pub player_nickname: String,
    pub role: GameRole,
    pub game_date_time: DateTime<Utc>,
}

impl GameParticipant {
    /// Builds a participant from the participation row and the player's nickname.
    pub fn from_entity(row: entity::player_game::Model, nickname: String) -> Self {
        Self {
            player_email: row.player_email,
            player_nickname: nickname,
            role: row.role,
            game_date_time: row.game_date_time,
        }
    }

    pub fn into_dto(self) -> GamePlayerDto {
        GamePlayerDto {
            player_email: self.player_email,
            player_nickname: self.player_nickname,
            role: match self.role {
                GameRole::Innocent => GameRoleDto::Innocent,
                GameRole::Murderer => GameRoleDto::Murderer,
            },
            game_date_time: self.game_date_time,
        }
    }
}

/// Parameters for recording a finished game.
#[derive(Debug, Clone)]
pub struct CreateGameParam {
    pub player_emails: Vec<String>,
    pub murderer_email: String,
    pub duration: i32,
}
