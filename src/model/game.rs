use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GameRoleDto {
    Innocent,
    Murderer,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CreateGameDto {
    pub player_emails: Vec<String>,
    pub murderer_email: String,
    pub duration: i32,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct GamePlayerDto {
    pub player_email: String,
    pub player_nickname: String,
    pub role: GameRoleDto,
    pub game_date_time: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct GameDto {
    pub id: i32,
    pub duration: i32,
    pub players: Vec<GamePlayerDto>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct WasMurdererDto {
    pub was_murderer: bool,
}
