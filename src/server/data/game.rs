//! Game record data repository.
//!
//! Stores finished games and one participation row per player. Games are returned
//! with every participant's nickname resolved from the player table.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::GameRole;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::game::{Game, GameParticipant};

/// Repository providing database operations for games and participation rows.
pub struct GameRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> GameRepository<'a, C> {
    /// Creates a new GameRepository instance.
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a game row.
    ///
    /// # Returns
    /// - `Ok(i32)` - Id of the new game
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, duration: i32) -> Result<i32, DbErr> {
        let entity = entity::game::ActiveModel {
            duration: ActiveValue::Set(duration),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(entity.id)
    }

    /// Inserts a participation row for a player in a game.
    pub async fn add_participant(
        &self,
        game_id: i32,
        email: &str,
        role: GameRole,
        at: DateTime<Utc>,
    ) -> Result<(), DbErr> {
        entity::player_game::ActiveModel {
            player_email: ActiveValue::Set(email.to_string()),
            game_id: ActiveValue::Set(game_id),
            role: ActiveValue::Set(role),
            game_date_time: ActiveValue::Set(at),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(())
    }

    /// Checks whether a game exists.
    pub async fn exists(&self, game_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Game::find_by_id(game_id)
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Finds a game by id with all participants.
    ///
    /// # Returns
    /// - `Ok(Some(Game))` - Game found
    /// - `Ok(None)` - No game with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, game_id: i32) -> Result<Option<Game>, DbErr> {
        Ok(self.find_by_ids(&[game_id]).await?.pop())
    }

    /// Loads the given games with their participants, preserving the order of `game_ids`.
    ///
    /// Ids that do not match a game are skipped.
    pub async fn find_by_ids(&self, game_ids: &[i32]) -> Result<Vec<Game>, DbErr> {
        if game_ids.is_empty() {
            return Ok(Vec::new());
        }

        let games: HashMap<i32, entity::game::Model> = entity::prelude::Game::find()
            .filter(entity::game::Column::Id.is_in(game_ids.iter().copied()))
            .all(self.db)
            .await?
            .into_iter()
            .map(|g| (g.id, g))
            .collect();

        let rows = entity::prelude::PlayerGame::find()
            .filter(entity::player_game::Column::GameId.is_in(game_ids.iter().copied()))
            .order_by_asc(entity::player_game::Column::Id)
            .find_also_related(entity::prelude::Player)
            .all(self.db)
            .await?;

        let mut participants: HashMap<i32, Vec<GameParticipant>> = HashMap::new();
        for (row, player) in rows {
            let Some(player) = player else {
                continue;
            };
            participants
                .entry(row.game_id)
                .or_default()
                .push(GameParticipant::from_entity(row, player.nickname));
        }

        Ok(game_ids
            .iter()
            .filter_map(|id| {
                let game = games.get(id)?;
                Some(Game {
                    id: game.id,
                    duration: game.duration,
                    players: participants.remove(id).unwrap_or_default(),
                })
            })
            .collect())
    }

    /// Gets the ids of every game a player took part in, newest first.
    pub async fn get_game_ids_for_player(&self, email: &str) -> Result<Vec<i32>, DbErr> {
        let rows = entity::prelude::PlayerGame::find()
            .filter(entity::player_game::Column::PlayerEmail.eq(email))
            .order_by_desc(entity::player_game::Column::GameDateTime)
            .order_by_desc(entity::player_game::Column::GameId)
            .all(self.db)
            .await?;

        let mut ids: Vec<i32> = Vec::with_capacity(rows.len());
        for row in rows {
            if !ids.contains(&row.game_id) {
                ids.push(row.game_id);
            }
        }

        Ok(ids)
    }

    /// Returns the role a player held in a game.
    ///
    /// # Returns
    /// - `Ok(Some(GameRole))` - Player participated in the game
    /// - `Ok(None)` - No participation row for that player and game
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_role(&self, game_id: i32, email: &str) -> Result<Option<GameRole>, DbErr> {
        let row = entity::prelude::PlayerGame::find()
            .filter(entity::player_game::Column::GameId.eq(game_id))
            .filter(entity::player_game::Column::PlayerEmail.eq(email))
            .one(self.db)
            .await?;

        Ok(row.map(|r| r.role))
    }

    /// Sets the role of a player's participation row.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows updated
    /// - `Err(DbErr)` - Database error during update
    pub async fn set_role(&self, game_id: i32, email: &str, role: GameRole) -> Result<u64, DbErr> {
        let value: sea_orm::Value = role.into();
        let result = entity::prelude::PlayerGame::update_many()
            .filter(entity::player_game::Column::GameId.eq(game_id))
            .filter(entity::player_game::Column::PlayerEmail.eq(email))
            .col_expr(entity::player_game::Column::Role, Expr::value(value))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Sets every participation row of a game to `role`.
    pub async fn set_role_for_all(&self, game_id: i32, role: GameRole) -> Result<u64, DbErr> {
        let value: sea_orm::Value = role.into();
        let result = entity::prelude::PlayerGame::update_many()
            .filter(entity::player_game::Column::GameId.eq(game_id))
            .col_expr(entity::player_game::Column::Role, Expr::value(value))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Deletes every participation row of a player.
    pub async fn delete_participation_for_player(&self, email: &str) -> Result<u64, DbErr> {
        let result = entity::prelude::PlayerGame::delete_many()
            .filter(entity::player_game::Column::PlayerEmail.eq(email))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
