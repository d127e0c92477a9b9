//! SeaORM entity definitions for the Veil database schema.

pub mod prelude;

pub mod friend_request;
pub mod friends;
pub mod game;
pub mod player;
pub mod player_game;
pub mod player_role;
pub mod role;
pub mod sea_orm_active_enums;
