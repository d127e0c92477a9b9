//! Player service for profile and account management.
//!
//! This module provides the `PlayerService`, which applies validation and uniqueness
//! rules to profile updates, manages coin balances and admin role grants, and deletes
//! accounts together with everything that references them.

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{
        friend::FriendRepository, friend_request::FriendRequestRepository, game::GameRepository,
        player::PlayerRepository, role::RoleRepository,
    },
    error::AppError,
    model::{
        player::{PaginatedPlayers, Player, UpdatePlayerParam},
        role::Role,
    },
    util::{password, validate},
};

/// Largest page size accepted by the paginated player listing.
const MAX_PER_PAGE: u64 = 100;

/// Service providing business logic for player accounts.
pub struct PlayerService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PlayerService<'a> {
    /// Creates a new PlayerService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `PlayerService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves a player by email.
    ///
    /// # Returns
    /// - `Ok(Player)` - Player with roles
    /// - `Err(AppError::NotFound)` - No player with that email
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_player(&self, email: &str) -> Result<Player, AppError> {
        PlayerRepository::new(self.db)
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Player {} not found", email)))
    }

    /// Retrieves all players with pagination, ordered by nickname.
    ///
    /// # Arguments
    /// - `page` - Zero-indexed page number
    /// - `per_page` - Page size, between 1 and 100
    ///
    /// # Returns
    /// - `Ok(PaginatedPlayers)` - Players for the requested page with pagination metadata
    /// - `Err(AppError::BadRequest)` - Page size out of range
    /// - `Err(AppError::DbErr)` - Database error during pagination query
    pub async fn get_all_players(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<PaginatedPlayers, AppError> {
        if per_page == 0 || per_page > MAX_PER_PAGE {
            return Err(AppError::BadRequest(format!(
                "Entries per page must be between 1 and {}",
                MAX_PER_PAGE
            )));
        }

        let (players, total) = PlayerRepository::new(self.db)
            .get_all_paginated(page, per_page)
            .await?;

        Ok(PaginatedPlayers {
            players,
            total,
            page,
            per_page,
            total_pages: total.div_ceil(per_page),
        })
    }

    /// Applies a partial profile update.
    ///
    /// Fields left as `None` are unchanged. A nickname equal to the player's current one
    /// is accepted.
    ///
    /// # Returns
    /// - `Ok(Player)` - Updated player
    /// - `Err(AppError::NotFound)` - No player with that email
    /// - `Err(AppError::BadRequest)` - Nickname or password failed validation
    /// - `Err(AppError::Conflict)` - Nickname used by another player
    pub async fn update_player(
        &self,
        email: &str,
        param: UpdatePlayerParam,
    ) -> Result<Player, AppError> {
        self.get_player(email).await?;

        if let Some(nickname) = &param.nickname {
            self.check_nickname(email, nickname).await?;
        }
        let password_hash = match &param.password {
            Some(password) => {
                validate::validate_password(password)?;
                Some(password::hash(password)?)
            }
            None => None,
        };

        let player_repo = PlayerRepository::new(self.db);
        if let Some(nickname) = &param.nickname {
            player_repo
                .update_nickname(email, nickname)
                .await
                .map_err(|e| AppError::conflict_on_unique(e, "Nickname is already taken"))?;
        }
        if let Some(hash) = &password_hash {
            player_repo.update_password(email, hash).await?;
        }

        self.get_player(email).await
    }

    /// Changes a player's nickname.
    pub async fn update_nickname(&self, email: &str, nickname: &str) -> Result<Player, AppError> {
        self.update_player(
            email,
            UpdatePlayerParam {
                nickname: Some(nickname.to_string()),
                password: None,
            },
        )
        .await
    }

    /// Changes a player's password.
    pub async fn change_password(&self, email: &str, password: &str) -> Result<Player, AppError> {
        self.update_player(
            email,
            UpdatePlayerParam {
                nickname: None,
                password: Some(password.to_string()),
            },
        )
        .await
    }

    /// Sets a player's skin URL.
    ///
    /// # Returns
    /// - `Ok(Player)` - Updated player
    /// - `Err(AppError::NotFound)` - No player with that email
    /// - `Err(AppError::BadRequest)` - Not an absolute http/https URL of at most 2048 characters
    pub async fn update_skin(&self, email: &str, skin_url: &str) -> Result<Player, AppError> {
        validate::validate_url("skinUrl", skin_url)?;
        self.get_player(email).await?;

        PlayerRepository::new(self.db)
            .update_skin_url(email, Some(skin_url.to_string()))
            .await?;

        self.get_player(email).await
    }

    /// Sets a player's profile image URL.
    pub async fn update_profile_image(
        &self,
        email: &str,
        profile_image_url: &str,
    ) -> Result<Player, AppError> {
        validate::validate_url("profileImageUrl", profile_image_url)?;
        self.get_player(email).await?;

        PlayerRepository::new(self.db)
            .update_profile_image_url(email, Some(profile_image_url.to_string()))
            .await?;

        self.get_player(email).await
    }

    /// Adds coins to a player's balance.
    ///
    /// # Arguments
    /// - `email` - Player receiving the coins
    /// - `amount` - Coins to add, at least 1
    ///
    /// # Returns
    /// - `Ok(Player)` - Player with the increased balance
    /// - `Err(AppError::NotFound)` - No player with that email
    /// - `Err(AppError::BadRequest)` - Amount below 1 or resulting balance above 999,999
    pub async fn add_coins(&self, email: &str, amount: i64) -> Result<Player, AppError> {
        let player = self.get_player(email).await?;
        let total = validate::checked_coin_total(player.coins, amount)?;

        PlayerRepository::new(self.db).set_coins(email, total).await?;

        self.get_player(email).await
    }

    /// Grants or revokes the ADMIN role.
    ///
    /// # Returns
    /// - `Ok(Player)` - Player with the updated role list
    /// - `Err(AppError::NotFound)` - No player with that email
    pub async fn set_admin(&self, email: &str, admin: bool) -> Result<Player, AppError> {
        self.get_player(email).await?;

        let role_repo = RoleRepository::new(self.db);
        if admin {
            role_repo.assign(email, Role::Admin).await?;
        } else {
            role_repo.revoke(email, Role::Admin).await?;
        }

        tracing::info!("Set admin={} for player {}", admin, email);

        self.get_player(email).await
    }

    /// Deletes a player and every row that references them.
    ///
    /// Removes game participation, friend requests in both directions, friendships in
    /// both directions, and role assignments before deleting the player, all in one
    /// transaction.
    ///
    /// # Returns
    /// - `Ok(())` - Player deleted
    /// - `Err(AppError::NotFound)` - No player with that email
    /// - `Err(AppError::DbErr)` - Database error; nothing is deleted
    pub async fn delete_player(&self, email: &str) -> Result<(), AppError> {
        let txn = self.db.begin().await?;

        if !PlayerRepository::new(&txn).exists(email).await? {
            return Err(AppError::NotFound(format!("Player {} not found", email)));
        }

        GameRepository::new(&txn)
            .delete_participation_for_player(email)
            .await?;
        FriendRequestRepository::new(&txn)
            .delete_all_for_player(email)
            .await?;
        FriendRepository::new(&txn)
            .delete_all_for_player(email)
            .await?;
        RoleRepository::new(&txn).delete_all_for_player(email).await?;
        PlayerRepository::new(&txn).delete(email).await?;

        txn.commit().await?;

        tracing::info!("Deleted player {}", email);

        Ok(())
    }

    async fn check_nickname(&self, email: &str, nickname: &str) -> Result<(), AppError> {
        validate::validate_nickname(nickname)?;

        if PlayerRepository::new(self.db)
            .nickname_taken(nickname, Some(email))
            .await?
        {
            return Err(AppError::Conflict("Nickname is already taken".to_string()));
        }

        Ok(())
    }
}
