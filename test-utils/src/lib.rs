//! Veil Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the Veil
//! API. This crate offers a builder pattern for creating test contexts with in-memory
//! SQLite databases and factories for inserting players, roles, friendships, friend
//! requests and games.
//!
//! # Overview
//!
//! The test utilities consist of three main components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//!
//! # Usage
//!
//! Use `TestBuilder` to create a test context with the required database tables:
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//! use entity::prelude::Player;
//!
//! #[tokio::test]
//! async fn test_player_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_table(Player)
//!         .build()
//!         .await?;
//!
//!     let db = test.db.unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
