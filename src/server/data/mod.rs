//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to maintain separation between the data layer and business logic layer.
//! Every repository is generic over `ConnectionTrait` so services can run several
//! repository calls inside one transaction.

pub mod friend;
pub mod friend_request;
pub mod game;
pub mod player;
pub mod role;

#[cfg(test)]
mod test;
