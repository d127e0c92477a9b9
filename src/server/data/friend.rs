//! Friendship data repository.
//!
//! A mutual friendship is stored as two directional rows, `(A, B)` and `(B, A)`.
//! This repository only writes or deletes both rows together so callers cannot leave
//! half a friendship behind.

use std::collections::{HashMap, HashSet};

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::friend::Friend;

/// Repository providing database operations for accepted friendships.
pub struct FriendRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FriendRepository<'a, C> {
    /// Creates a new FriendRepository instance.
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts both directional rows of a friendship with the same timestamp.
    ///
    /// Run inside a transaction so both rows commit together.
    ///
    /// # Arguments
    /// - `a` - Email of one friend
    /// - `b` - Email of the other friend
    /// - `at` - Friendship timestamp recorded on both rows
    ///
    /// # Returns
    /// - `Ok(())` - Both rows inserted
    /// - `Err(DbErr)` - Database error during insert
    pub async fn insert_pair(&self, a: &str, b: &str, at: DateTime<Utc>) -> Result<(), DbErr> {
        let row = |player: &str, friend: &str| entity::friends::ActiveModel {
            player_email: ActiveValue::Set(player.to_string()),
            friend_email: ActiveValue::Set(friend.to_string()),
            friendship_date_time: ActiveValue::Set(at),
            ..Default::default()
        };

        entity::prelude::Friends::insert_many([row(a, b), row(b, a)])
            .exec_without_returning(self.db)
            .await?;

        Ok(())
    }

    /// Deletes both directional rows of a friendship.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows deleted (0 when the players were not friends)
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete_pair(&self, a: &str, b: &str) -> Result<u64, DbErr> {
        let result = entity::prelude::Friends::delete_many()
            .filter(pair_condition(a, b))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Checks whether a friendship row exists in either direction.
    pub async fn exists_between(&self, a: &str, b: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Friends::find()
            .filter(pair_condition(a, b))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Gets the friends of a player with their public profile and friendship date.
    ///
    /// Returns the rows where `email` is the subject, ordered by friendship date.
    /// Rows whose friend player no longer exists are skipped.
    pub async fn get_friends(&self, email: &str) -> Result<Vec<Friend>, DbErr> {
        let rows = entity::prelude::Friends::find()
            .filter(entity::friends::Column::PlayerEmail.eq(email))
            .order_by_asc(entity::friends::Column::FriendshipDateTime)
            .order_by_asc(entity::friends::Column::Id)
            .all(self.db)
            .await?;

        let friend_emails: Vec<String> = rows.iter().map(|r| r.friend_email.clone()).collect();
        let mut players: HashMap<String, entity::player::Model> = entity::prelude::Player::find()
            .filter(entity::player::Column::Email.is_in(friend_emails))
            .all(self.db)
            .await?
            .into_iter()
            .map(|p| (p.email.clone(), p))
            .collect();

        Ok(rows
            .into_iter()
            .filter_map(|row| {
                let friend = players.remove(&row.friend_email)?;
                Some(Friend::from_entity(row, friend))
            })
            .collect())
    }

    /// Returns the emails of every player that has `email` as a friend.
    ///
    /// Used to check that each of a player's friendship rows has its reciprocal row.
    pub async fn get_reciprocal_emails(&self, email: &str) -> Result<HashSet<String>, DbErr> {
        let rows = entity::prelude::Friends::find()
            .filter(entity::friends::Column::FriendEmail.eq(email))
            .all(self.db)
            .await?;

        Ok(rows.into_iter().map(|r| r.player_email).collect())
    }

    /// Deletes every friendship row involving a player, in both directions.
    pub async fn delete_all_for_player(&self, email: &str) -> Result<u64, DbErr> {
        let result = entity::prelude::Friends::delete_many()
            .filter(
                Condition::any()
                    .add(entity::friends::Column::PlayerEmail.eq(email))
                    .add(entity::friends::Column::FriendEmail.eq(email)),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}

/// Matches the `(a, b)` and `(b, a)` rows of a friendship.
fn pair_condition(a: &str, b: &str) -> Condition {
    Condition::any()
        .add(
            Condition::all()
                .add(entity::friends::Column::PlayerEmail.eq(a))
                .add(entity::friends::Column::FriendEmail.eq(b)),
        )
        .add(
            Condition::all()
                .add(entity::friends::Column::PlayerEmail.eq(b))
                .add(entity::friends::Column::FriendEmail.eq(a)),
        )
}
