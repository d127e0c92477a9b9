//! Data transfer objects exchanged over the JSON API.
//!
//! All field names are serialized in camelCase.

pub mod api;
pub mod auth;
pub mod friend;
pub mod game;
pub mod player;
