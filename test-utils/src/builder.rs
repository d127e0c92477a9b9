use entity::prelude::*;
use sea_orm::{
    sea_query::{Index, IndexCreateStatement, TableCreateStatement},
    EntityName, EntityTrait, Schema,
};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Use the builder pattern to add entity tables, then call `build()` to
/// create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{Player, Role};
///
/// let test = TestBuilder::new()
///     .with_table(Player)
///     .with_table(Role)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,
    /// CREATE INDEX statements executed after all tables exist.
    indexes: Vec<IndexCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            indexes: Vec::new(),
        }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax. Tables should be added in dependency order (tables with foreign
    /// keys after the tables they reference).
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity implementing `EntityTrait` to create a table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds an index the migrations declare but the entity definitions cannot express,
    /// such as a composite unique key.
    pub fn with_index(mut self, index: IndexCreateStatement) -> Self {
        self.indexes.push(index);
        self
    }

    /// Adds the tables backing player accounts: Player, Role and PlayerRole.
    pub fn with_player_tables(self) -> Self {
        self.with_table(Player)
            .with_table(Role)
            .with_table(PlayerRole)
    }

    /// Adds the player tables plus Friends and FriendRequest, with the unique
    /// `(player, friend)` and `(requester, player)` pair indexes from the migrations.
    pub fn with_friend_tables(self) -> Self {
        self.with_player_tables()
            .with_table(Friends)
            .with_table(FriendRequest)
            .with_index(
                Index::create()
                    .name("idx_friends_pair")
                    .table(Friends.table_ref())
                    .col(entity::friends::Column::PlayerEmail)
                    .col(entity::friends::Column::FriendEmail)
                    .unique()
                    .to_owned(),
            )
            .with_index(
                Index::create()
                    .name("idx_friend_request_pair")
                    .table(FriendRequest.table_ref())
                    .col(entity::friend_request::Column::RequesterEmail)
                    .col(entity::friend_request::Column::PlayerEmail)
                    .unique()
                    .to_owned(),
            )
    }

    /// Adds the player tables plus Game and PlayerGame.
    pub fn with_game_tables(self) -> Self {
        self.with_player_tables()
            .with_table(Game)
            .with_table(PlayerGame)
    }

    /// Adds every table in the schema.
    ///
    /// Use this when testing operations that touch several domains, such as
    /// player deletion.
    pub fn with_all_tables(self) -> Self {
        self.with_friend_tables()
            .with_table(Game)
            .with_table(PlayerGame)
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// Creates an in-memory SQLite database connection and executes all CREATE TABLE
    /// statements that were added via `with_table()`, then the `with_index()` statements.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context with database and tables ready
    /// - `Err(TestError::Database)`- Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;
        setup.with_indexes(self.indexes).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
