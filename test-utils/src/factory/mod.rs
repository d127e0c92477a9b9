//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Each entity has its own factory module with a `Factory`
//! struct for customization and a `create_*` convenience function for quick default
//! creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     factory::role::seed_roles(&db).await?;
//!     let alice = factory::player::create_player(&db).await?;
//!     let bob = factory::player::create_player(&db).await?;
//!
//!     factory::friends::create_friendship(&db, &alice.email, &bob.email).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let admin = factory::player::PlayerFactory::new(&db)
//!     .email("admin@veil.com")
//!     .nickname("admin")
//!     .coins(500)
//!     .admin(true)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `player` - Create player entities (optionally with roles)
//! - `role` - Seed the USER and ADMIN roles
//! - `friends` - Create friendship rows (pairs or a single direction)
//! - `friend_request` - Create pending friend requests
//! - `game` - Create games with participation rows
//! - `helpers` - Unique id generation and multi-entity helpers

pub mod friend_request;
pub mod friends;
pub mod game;
pub mod helpers;
pub mod player;
pub mod role;

// Re-export commonly used factory functions for concise usage
pub use friend_request::create_friend_request;
pub use friends::create_friendship;
pub use game::create_game;
pub use player::create_player;
pub use role::seed_roles;
