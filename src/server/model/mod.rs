//! Domain models and operation parameters used by the service and data layers.

pub mod auth;
pub mod friend;
pub mod game;
pub mod player;
pub mod role;
