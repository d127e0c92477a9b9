//! Player domain models and parameters.
//!
//! Provides the domain model for player accounts together with the parameter types
//! used by registration, profile updates and admin listings.

use crate::{
    model::player::{PaginatedPlayersDto, PlayerDto},
    server::model::role::Role,
};

/// Registered player account.
///
/// The stored password hash is carried for credential checks and never leaves the
/// server: `into_dto` drops it.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    /// Email identifying the player.
    pub email: String,
    /// Unique display name.
    pub nickname: String,
    /// Argon2 PHC string of the player's password.
    pub password_hash: String,
    /// Coin balance.
    pub coins: i32,
    /// Optional skin URL.
    pub skin_url: Option<String>,
    /// Optional profile image URL.
    pub profile_image_url: Option<String>,
    /// Roles granted to the player.
    pub roles: Vec<Role>,
}

impl Player {
    /// Returns whether the player holds the ADMIN role.
    pub fn is_admin(&self) -> bool {
        self.roles.contains(&Role::Admin)
    }

    /// Converts the player domain model to a DTO for API responses.
    ///
    /// # Returns
    /// - `PlayerDto` - Public view of the player, without the password hash
    pub fn into_dto(self) -> PlayerDto {
        PlayerDto {
            email: self.email,
            nickname: self.nickname,
            coins: self.coins,
            skin_url: self.skin_url,
            profile_image_url: self.profile_image_url,
            roles: self.roles.iter().map(|r| r.as_str().to_string()).collect(),
        }
    }

    /// Converts an entity model to a player domain model at the repository boundary.
    ///
    /// Role names that do not match a known role are skipped.
    ///
    /// # Arguments
    /// - `entity` - The player entity model from the database
    /// - `roles` - Role names linked to the player through `player_role`
    ///
    /// # Returns
    /// - `Player` - The converted player domain model
    pub fn from_entity(entity: entity::player::Model, roles: Vec<String>) -> Self {
        let mut roles: Vec<Role> = roles.iter().filter_map(|r| Role::from_name(r)).collect();
        roles.sort_by_key(|r| r.as_str());

        Self {
            email: entity.email,
            nickname: entity.nickname,
            password_hash: entity.password,
            coins: entity.coins,
            skin_url: entity.skin_url,
            profile_image_url: entity.profile_image_url,
            roles,
        }
    }
}

/// Parameters for inserting a new player row.
#[derive(Debug, Clone)]
pub struct CreatePlayerParam {
    pub email: String,
    pub nickname: String,
    /// Already hashed password.
    pub password_hash: String,
    pub coins: i32,
    pub skin_url: Option<String>,
    pub profile_image_url: Option<String>,
}

/// Parameters for registering a new account, before validation and hashing.
#[derive(Debug, Clone)]
pub struct RegisterPlayerParam {
    pub email: String,
    pub nickname: String,
    /// Plaintext password as submitted.
    pub password: String,
    pub skin_url: Option<String>,
    pub profile_image_url: Option<String>,
}

/// Partial profile update; `None` fields are left unchanged.
#[derive(Debug, Clone, Default)]
pub struct UpdatePlayerParam {
    pub nickname: Option<String>,
    /// Plaintext password as submitted.
    pub password: Option<String>,
}

/// Paginated collection of players with metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedPlayers {
    /// Players for this page.
    pub players: Vec<Player>,
    /// Total number of players across all pages.
    pub total: u64,
    /// Current page number (zero-indexed).
    pub page: u64,
    /// Number of players per page.
    pub per_page: u64,
    /// Total number of pages.
    pub total_pages: u64,
}

impl PaginatedPlayers {
    /// Converts the paginated players domain model to a DTO for API responses.
    pub fn into_dto(self) -> PaginatedPlayersDto {
        PaginatedPlayersDto {
            players: self.players.into_iter().map(|p| p.into_dto()).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}
