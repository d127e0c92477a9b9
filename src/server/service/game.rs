//! Game service for recording finished games and querying game history.

use std::collections::HashSet;

use chrono::Utc;
use entity::sea_orm_active_enums::GameRole;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{game::GameRepository, player::PlayerRepository},
    error::{auth::AuthError, AppError},
    model::game::{CreateGameParam, Game, GameRules, MAX_GAME_DURATION, MIN_GAME_DURATION},
};

/// Service providing business logic for game records.
pub struct GameService<'a> {
    db: &'a DatabaseConnection,
    rules: GameRules,
}

impl<'a> GameService<'a> {
    /// Creates a new GameService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `rules` - Player count bounds applied when recording games
    ///
    /// # Returns
    /// - `GameService` - New service instance
    pub fn new(db: &'a DatabaseConnection, rules: GameRules) -> Self {
        Self { db, rules }
    }

    /// Records a finished game.
    ///
    /// Creates the game row and one participation row per player in one transaction,
    /// tagging the murderer and marking everyone else innocent.
    ///
    /// # Returns
    /// - `Ok(Game)` - The recorded game with all participants
    /// - `Err(AppError::BadRequest)` - Duration or player count out of range, duplicate
    ///   players, or a murderer that is not among the players
    /// - `Err(AppError::NotFound)` - A listed player does not exist
    pub async fn create_game(&self, param: CreateGameParam) -> Result<Game, AppError> {
        self.validate(&param)?;

        let players = PlayerRepository::new(self.db)
            .find_many(&param.player_emails)
            .await?;
        if players.len() != param.player_emails.len() {
            let found: HashSet<&str> = players.iter().map(|p| p.email.as_str()).collect();
            let missing = param
                .player_emails
                .iter()
                .find(|e| !found.contains(e.as_str()))
                .cloned()
                .unwrap_or_default();
            return Err(AppError::NotFound(format!("Player {} not found", missing)));
        }

        let txn = self.db.begin().await?;
        let game_repo = GameRepository::new(&txn);

        let game_id = game_repo.create(param.duration).await?;
        let played_at = Utc::now();
        for email in &param.player_emails {
            let role = if *email == param.murderer_email {
                GameRole::Murderer
            } else {
                GameRole::Innocent
            };
            game_repo
                .add_participant(game_id, email, role, played_at)
                .await?;
        }

        let game = game_repo.find_by_id(game_id).await?;
        txn.commit().await?;

        tracing::info!(
            "Recorded game {} with {} players",
            game_id,
            param.player_emails.len()
        );

        game.ok_or_else(|| game_not_found(game_id))
    }

    /// Retrieves a game with its participants.
    ///
    /// # Returns
    /// - `Ok(Game)` - Game found
    /// - `Err(AppError::NotFound)` - No game with that id
    pub async fn get_game(&self, game_id: i32) -> Result<Game, AppError> {
        GameRepository::new(self.db)
            .find_by_id(game_id)
            .await?
            .ok_or_else(|| game_not_found(game_id))
    }

    /// Retrieves a game for one of its participants.
    ///
    /// A missing game and a game the player did not take part in fail the same way, so
    /// non-participants cannot tell whether a game id exists.
    ///
    /// # Returns
    /// - `Ok(Game)` - Game found and `email` took part in it
    /// - `Err(AppError::AuthErr)` - No such game, or `email` did not take part
    pub async fn get_participant_game(&self, game_id: i32, email: &str) -> Result<Game, AppError> {
        match GameRepository::new(self.db).find_by_id(game_id).await? {
            Some(game) if game.has_participant(email) => Ok(game),
            _ => Err(AuthError::AccessDenied(
                email.to_string(),
                format!("not a participant of game {}", game_id),
            )
            .into()),
        }
    }

    /// Lists every game a player took part in, newest first.
    ///
    /// # Returns
    /// - `Ok(Vec<Game>)` - Games of the player (empty if they never played)
    /// - `Err(AppError::NotFound)` - Player does not exist
    pub async fn list_player_games(&self, email: &str) -> Result<Vec<Game>, AppError> {
        if !PlayerRepository::new(self.db).exists(email).await? {
            return Err(AppError::NotFound(format!("Player {} not found", email)));
        }

        let game_repo = GameRepository::new(self.db);
        let ids = game_repo.get_game_ids_for_player(email).await?;

        Ok(game_repo.find_by_ids(&ids).await?)
    }

    /// Returns whether a player was the murderer in a game.
    ///
    /// # Returns
    /// - `Ok(bool)` - Whether the player held the MURDERER role
    /// - `Err(AppError::NotFound)` - Game does not exist or the player did not take part
    pub async fn was_murderer(&self, email: &str, game_id: i32) -> Result<bool, AppError> {
        let game_repo = GameRepository::new(self.db);

        if !game_repo.exists(game_id).await? {
            return Err(game_not_found(game_id));
        }

        match game_repo.find_role(game_id, email).await? {
            Some(role) => Ok(role == GameRole::Murderer),
            None => Err(AppError::NotFound(format!(
                "Player {} did not take part in game {}",
                email, game_id
            ))),
        }
    }

    /// Makes `email` the single murderer of a game.
    ///
    /// Demotes the current murderer and promotes the target in one transaction.
    ///
    /// # Returns
    /// - `Ok(Game)` - Updated game
    /// - `Err(AppError::NotFound)` - Game does not exist
    /// - `Err(AppError::BadRequest)` - Target player did not take part in the game
    pub async fn set_murderer(&self, game_id: i32, email: &str) -> Result<Game, AppError> {
        let txn = self.db.begin().await?;
        let game_repo = GameRepository::new(&txn);

        if !game_repo.exists(game_id).await? {
            return Err(game_not_found(game_id));
        }
        if game_repo.find_role(game_id, email).await?.is_none() {
            return Err(AppError::BadRequest(format!(
                "Player {} did not take part in game {}",
                email, game_id
            )));
        }

        game_repo.set_role_for_all(game_id, GameRole::Innocent).await?;
        game_repo.set_role(game_id, email, GameRole::Murderer).await?;

        let game = game_repo.find_by_id(game_id).await?;
        txn.commit().await?;

        tracing::info!("Player {} is now the murderer of game {}", email, game_id);

        game.ok_or_else(|| game_not_found(game_id))
    }

    fn validate(&self, param: &CreateGameParam) -> Result<(), AppError> {
        if !(MIN_GAME_DURATION..=MAX_GAME_DURATION).contains(&param.duration) {
            return Err(AppError::BadRequest(format!(
                "Duration must be between {} and {} seconds",
                MIN_GAME_DURATION, MAX_GAME_DURATION
            )));
        }

        let count = param.player_emails.len();
        if count < self.rules.min_players || count > self.rules.max_players {
            return Err(AppError::BadRequest(format!(
                "A game needs between {} and {} players",
                self.rules.min_players, self.rules.max_players
            )));
        }

        let unique: HashSet<&str> = param.player_emails.iter().map(String::as_str).collect();
        if unique.len() != count {
            return Err(AppError::BadRequest(
                "Player list contains duplicates".to_string(),
            ));
        }

        if !unique.contains(param.murderer_email.as_str()) {
            return Err(AppError::BadRequest(
                "Murderer must be one of the players".to_string(),
            ));
        }

        Ok(())
    }
}

fn game_not_found(game_id: i32) -> AppError {
    AppError::NotFound(format!("Game {} not found", game_id))
}
