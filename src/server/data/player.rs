//! Player data repository for database operations.
//!
//! This module provides the `PlayerRepository` for managing player records in the
//! database. It handles account creation, profile updates, lookups and paginated
//! listings, loading each player's roles from `player_role` and converting entity
//! models to domain models at the infrastructure boundary.

use std::collections::HashMap;

use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::player::{CreatePlayerParam, Player};

/// Repository providing database operations for player accounts.
///
/// Generic over the connection so it can run on the pool or inside a transaction.
pub struct PlayerRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PlayerRepository<'a, C> {
    /// Creates a new PlayerRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to a database connection or transaction
    ///
    /// # Returns
    /// - `PlayerRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new player row.
    ///
    /// Roles are not assigned here; see `RoleRepository::assign`.
    ///
    /// # Arguments
    /// - `param` - Player fields with an already hashed password
    ///
    /// # Returns
    /// - `Ok(Player)` - The created player with no roles
    /// - `Err(DbErr)` - Database error, including unique violations on email or nickname
    pub async fn create(&self, param: CreatePlayerParam) -> Result<Player, DbErr> {
        let entity = entity::player::ActiveModel {
            email: ActiveValue::Set(param.email),
            nickname: ActiveValue::Set(param.nickname),
            password: ActiveValue::Set(param.password_hash),
            coins: ActiveValue::Set(param.coins),
            skin_url: ActiveValue::Set(param.skin_url),
            profile_image_url: ActiveValue::Set(param.profile_image_url),
        }
        .insert(self.db)
        .await?;

        Ok(Player::from_entity(entity, Vec::new()))
    }

    /// Finds a player by email, including roles.
    ///
    /// # Returns
    /// - `Ok(Some(Player))` - Player found
    /// - `Ok(None)` - No player with that email
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_email(&self, email: &str) -> Result<Option<Player>, DbErr> {
        let Some(entity) = entity::prelude::Player::find_by_id(email.to_string())
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut roles = self.roles_for(&[entity.email.clone()]).await?;
        let player_roles = roles.remove(&entity.email).unwrap_or_default();

        Ok(Some(Player::from_entity(entity, player_roles)))
    }

    /// Checks whether a player with the given email exists.
    pub async fn exists(&self, email: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Player::find_by_id(email.to_string())
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Checks whether a nickname is used by any player other than `excluding_email`.
    ///
    /// # Arguments
    /// - `nickname` - Nickname to check
    /// - `excluding_email` - Player whose own nickname should not count as taken
    ///
    /// # Returns
    /// - `Ok(true)` - Another player already uses the nickname
    /// - `Ok(false)` - Nickname is free (or only used by `excluding_email`)
    /// - `Err(DbErr)` - Database error during query
    pub async fn nickname_taken(
        &self,
        nickname: &str,
        excluding_email: Option<&str>,
    ) -> Result<bool, DbErr> {
        let mut query =
            entity::prelude::Player::find().filter(entity::player::Column::Nickname.eq(nickname));

        if let Some(email) = excluding_email {
            query = query.filter(entity::player::Column::Email.ne(email));
        }

        Ok(query.count(self.db).await? > 0)
    }

    /// Loads every player whose email is in `emails`, including roles.
    ///
    /// Unknown emails are ignored; compare lengths to detect them.
    pub async fn find_many(&self, emails: &[String]) -> Result<Vec<Player>, DbErr> {
        if emails.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::Player::find()
            .filter(entity::player::Column::Email.is_in(emails.iter().cloned()))
            .all(self.db)
            .await?;

        self.attach_roles(entities).await
    }

    /// Gets all players with pagination.
    ///
    /// Returns a page of players ordered alphabetically by nickname.
    ///
    /// # Arguments
    /// - `page` - Zero-indexed page number
    /// - `per_page` - Number of players to return per page
    ///
    /// # Returns
    /// - `Ok((players, total))` - Players for the requested page and total player count
    /// - `Err(DbErr)` - Database error during pagination query
    pub async fn get_all_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Player>, u64), DbErr> {
        let paginator = entity::prelude::Player::find()
            .order_by_asc(entity::player::Column::Nickname)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(page).await?;
        let players = self.attach_roles(entities).await?;

        Ok((players, total))
    }

    /// Sets a player's nickname.
    pub async fn update_nickname(&self, email: &str, nickname: &str) -> Result<(), DbErr> {
        self.update_column(email, entity::player::Column::Nickname, nickname.to_string())
            .await
    }

    /// Replaces a player's stored password hash.
    pub async fn update_password(&self, email: &str, password_hash: &str) -> Result<(), DbErr> {
        self.update_column(
            email,
            entity::player::Column::Password,
            password_hash.to_string(),
        )
        .await
    }

    /// Sets or clears a player's skin URL.
    pub async fn update_skin_url(&self, email: &str, url: Option<String>) -> Result<(), DbErr> {
        self.update_column(email, entity::player::Column::SkinUrl, url)
            .await
    }

    /// Sets or clears a player's profile image URL.
    pub async fn update_profile_image_url(
        &self,
        email: &str,
        url: Option<String>,
    ) -> Result<(), DbErr> {
        self.update_column(email, entity::player::Column::ProfileImageUrl, url)
            .await
    }

    /// Sets a player's coin balance.
    pub async fn set_coins(&self, email: &str, coins: i32) -> Result<(), DbErr> {
        self.update_column(email, entity::player::Column::Coins, coins)
            .await
    }

    /// Deletes the player row.
    ///
    /// Dependent rows must be removed first by the caller within the same transaction.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows deleted (0 if the player did not exist)
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, email: &str) -> Result<u64, DbErr> {
        let result = entity::prelude::Player::delete_by_id(email.to_string())
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    async fn update_column<V>(
        &self,
        email: &str,
        column: entity::player::Column,
        value: V,
    ) -> Result<(), DbErr>
    where
        V: Into<sea_orm::Value>,
    {
        let value: sea_orm::Value = value.into();
        entity::prelude::Player::update_many()
            .filter(entity::player::Column::Email.eq(email))
            .col_expr(column, Expr::value(value))
            .exec(self.db)
            .await?;
        Ok(())
    }

    async fn attach_roles(
        &self,
        entities: Vec<entity::player::Model>,
    ) -> Result<Vec<Player>, DbErr> {
        let emails: Vec<String> = entities.iter().map(|e| e.email.clone()).collect();
        let mut roles = self.roles_for(&emails).await?;

        Ok(entities
            .into_iter()
            .map(|e| {
                let player_roles = roles.remove(&e.email).unwrap_or_default();
                Player::from_entity(e, player_roles)
            })
            .collect())
    }

    async fn roles_for(&self, emails: &[String]) -> Result<HashMap<String, Vec<String>>, DbErr> {
        let rows = entity::prelude::PlayerRole::find()
            .filter(entity::player_role::Column::PlayerEmail.is_in(emails.iter().cloned()))
            .all(self.db)
            .await?;

        let mut roles: HashMap<String, Vec<String>> = HashMap::new();
        for row in rows {
            roles.entry(row.player_email).or_default().push(row.role_name);
        }

        Ok(roles)
    }
}
