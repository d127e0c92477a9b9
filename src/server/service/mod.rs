//! Business logic layer.
//!
//! Services validate input, enforce business rules and orchestrate repository calls,
//! opening a transaction whenever an operation touches more than one row. They work
//! with domain models from `server::model` and return `AppError` on failure.

pub mod auth;
pub mod friend;
pub mod game;
pub mod player;
pub mod role;
pub mod token;
