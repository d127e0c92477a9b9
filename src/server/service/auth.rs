//! Authentication service for registration and login.
//!
//! This module provides the `AuthService`, which validates registration input, stores
//! Argon2 password hashes, and exchanges valid credentials for signed bearer tokens.

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{player::PlayerRepository, role::RoleRepository},
    error::{auth::AuthError, AppError},
    model::{
        auth::LoginResult,
        player::{CreatePlayerParam, Player, RegisterPlayerParam},
        role::Role,
    },
    service::token::TokenService,
    util::{password, validate},
};

/// Service providing registration and credential checks.
pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    tokens: &'a TokenService,
}

impl<'a> AuthService<'a> {
    /// Creates a new AuthService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `tokens` - Token service used to sign issued tokens
    ///
    /// # Returns
    /// - `AuthService` - New service instance
    pub fn new(db: &'a DatabaseConnection, tokens: &'a TokenService) -> Self {
        Self { db, tokens }
    }

    /// Verifies credentials and issues a bearer token.
    ///
    /// Unknown emails and wrong passwords fail identically.
    ///
    /// # Arguments
    /// - `email` - Account email
    /// - `password` - Plaintext password
    ///
    /// # Returns
    /// - `Ok(LoginResult)` - Signed token plus the player's email and nickname
    /// - `Err(AppError::AuthErr(InvalidCredentials))` - Unknown email or wrong password
    /// - `Err(AppError::InternalErr)` - Token signing failed
    /// - `Err(AppError::DbErr)` - Database error during lookup
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResult, AppError> {
        let player_repo = PlayerRepository::new(self.db);

        let Some(player) = player_repo.find_by_email(email).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !password::verify(password, &player.password_hash) {
            return Err(AuthError::InvalidCredentials.into());
        }

        let token = self.tokens.issue(&player.email, &player.roles)?;

        tracing::info!("Player {} logged in", player.email);

        Ok(LoginResult {
            token,
            email: player.email,
            nickname: player.nickname,
        })
    }

    /// Registers a new player with the USER role.
    ///
    /// Validates every field, rejects taken emails and nicknames, hashes the password
    /// and inserts the player together with its role assignment in one transaction.
    ///
    /// # Arguments
    /// - `param` - Registration fields with a plaintext password
    ///
    /// # Returns
    /// - `Ok(Player)` - The registered player with roles
    /// - `Err(AppError::BadRequest)` - A field failed validation
    /// - `Err(AppError::Conflict)` - Email or nickname already registered
    /// - `Err(AppError::DbErr)` - Database error during insert
    pub async fn register(&self, param: RegisterPlayerParam) -> Result<Player, AppError> {
        validate::validate_email(&param.email)?;
        validate::validate_nickname(&param.nickname)?;
        validate::validate_password(&param.password)?;
        validate::validate_optional_url("skinUrl", param.skin_url.as_deref())?;
        validate::validate_optional_url("profileImageUrl", param.profile_image_url.as_deref())?;

        let player_repo = PlayerRepository::new(self.db);
        if player_repo.exists(&param.email).await? {
            return Err(AppError::Conflict("Email is already registered".to_string()));
        }
        if player_repo.nickname_taken(&param.nickname, None).await? {
            return Err(AppError::Conflict("Nickname is already taken".to_string()));
        }

        let password_hash = password::hash(&param.password)?;
        let email = param.email.clone();

        let txn = self.db.begin().await?;
        PlayerRepository::new(&txn)
            .create(CreatePlayerParam {
                email: param.email,
                nickname: param.nickname,
                password_hash,
                coins: 0,
                skin_url: param.skin_url,
                profile_image_url: param.profile_image_url,
            })
            .await
            .map_err(|e| AppError::conflict_on_unique(e, "Email or nickname already registered"))?;
        RoleRepository::new(&txn).assign(&email, Role::User).await?;
        let player = PlayerRepository::new(&txn).find_by_email(&email).await?;
        txn.commit().await?;

        tracing::info!("Registered player {}", email);

        player.ok_or_else(|| AppError::NotFound("Player not found".to_string()))
    }
}
