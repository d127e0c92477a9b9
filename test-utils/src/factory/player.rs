//! Player factory for creating test player entities.
//!
//! This module provides factory methods for creating player entities with sensible
//! defaults, reducing boilerplate in tests. The factory supports customization
//! through a builder pattern.

use crate::factory::{helpers::next_id, role};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait};

/// Placeholder stored in the password column of factory-created players.
///
/// Not a valid Argon2 hash, so logging in as a factory player always fails.
/// Tests that exercise login register through the auth service instead.
pub const DEFAULT_PASSWORD_HASH: &str = "factory-password-hash";

/// Factory for creating test players with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::player::PlayerFactory;
///
/// let player = PlayerFactory::new(&db)
///     .email("alice@x.com")
///     .nickname("alice")
///     .coins(100)
///     .build()
///     .await?;
/// ```
pub struct PlayerFactory<'a> {
    db: &'a DatabaseConnection,
    email: String,
    nickname: String,
    password: String,
    coins: i32,
    skin_url: Option<String>,
    profile_image_url: Option<String>,
    roles: Vec<&'static str>,
}

impl<'a> PlayerFactory<'a> {
    /// Creates a new PlayerFactory with default values.
    ///
    /// Defaults:
    /// - email: `"player{id}@veil.test"` where id is auto-incremented
    /// - nickname: `"player{id}"`
    /// - password: [`DEFAULT_PASSWORD_HASH`]
    /// - coins: `0`
    /// - roles: USER (role rows must already be seeded)
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            email: format!("player{}@veil.test", id),
            nickname: format!("player{}", id),
            password: DEFAULT_PASSWORD_HASH.to_string(),
            coins: 0,
            skin_url: None,
            profile_image_url: None,
            roles: vec![role::USER],
        }
    }

    /// Sets the email for the player.
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Sets the nickname for the player.
    pub fn nickname(mut self, nickname: impl Into<String>) -> Self {
        self.nickname = nickname.into();
        self
    }

    /// Sets the stored password hash for the player.
    pub fn password_hash(mut self, password: impl Into<String>) -> Self {
        self.password = password.into();
        self
    }

    /// Sets the coin balance for the player.
    pub fn coins(mut self, coins: i32) -> Self {
        self.coins = coins;
        self
    }

    /// Sets the skin URL for the player.
    pub fn skin_url(mut self, skin_url: impl Into<String>) -> Self {
        self.skin_url = Some(skin_url.into());
        self
    }

    /// Sets the profile image URL for the player.
    pub fn profile_image_url(mut self, url: impl Into<String>) -> Self {
        self.profile_image_url = Some(url.into());
        self
    }

    /// Grants or withholds the ADMIN role in addition to USER.
    pub fn admin(mut self, admin: bool) -> Self {
        self.roles.retain(|r| *r != role::ADMIN);
        if admin {
            self.roles.push(role::ADMIN);
        }
        self
    }

    /// Removes all roles, leaving the player without a `player_role` row.
    pub fn without_roles(mut self) -> Self {
        self.roles.clear();
        self
    }

    /// Builds and inserts the player entity and its role assignments.
    ///
    /// # Returns
    /// - `Ok(entity::player::Model)` - Created player entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::player::Model, DbErr> {
        let player = entity::player::ActiveModel {
            email: ActiveValue::Set(self.email),
            nickname: ActiveValue::Set(self.nickname),
            password: ActiveValue::Set(self.password),
            coins: ActiveValue::Set(self.coins),
            skin_url: ActiveValue::Set(self.skin_url),
            profile_image_url: ActiveValue::Set(self.profile_image_url),
        }
        .insert(self.db)
        .await?;

        for role_name in self.roles {
            entity::prelude::PlayerRole::insert(entity::player_role::ActiveModel {
                player_email: ActiveValue::Set(player.email.clone()),
                role_name: ActiveValue::Set(role_name.to_string()),
            })
            .exec_without_returning(self.db)
            .await?;
        }

        Ok(player)
    }
}

/// Creates a player with default values.
///
/// Shorthand for `PlayerFactory::new(db).build().await`.
pub async fn create_player(db: &DatabaseConnection) -> Result<entity::player::Model, DbErr> {
    PlayerFactory::new(db).build().await
}

/// Creates a player with a specific email and nickname.
pub async fn create_player_with(
    db: &DatabaseConnection,
    email: impl Into<String>,
    nickname: impl Into<String>,
) -> Result<entity::player::Model, DbErr> {
    PlayerFactory::new(db)
        .email(email)
        .nickname(nickname)
        .build()
        .await
}
