//! HTTP handlers.
//!
//! Each handler resolves the caller through `AuthGuard`, converts DTOs into service
//! parameters, calls the service and converts the result back into a DTO.

pub mod admin;
pub mod auth;
pub mod friend;
pub mod game;
pub mod player;
