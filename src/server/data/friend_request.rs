//! Friend request data repository.
//!
//! Stores pending, directional friend requests. Each returned `FriendRequest` carries
//! the requester's public profile fields, loaded alongside the request rows.

use std::collections::HashMap;

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::friend::FriendRequest;

/// Repository providing database operations for pending friend requests.
pub struct FriendRequestRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FriendRequestRepository<'a, C> {
    /// Creates a new FriendRequestRepository instance.
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a pending request from `requester_email` to `player_email`.
    ///
    /// # Returns
    /// - `Ok(i32)` - Id of the new request
    /// - `Err(DbErr)` - Database error, including a unique violation when the same
    ///   directional request already exists
    pub async fn create(&self, requester_email: &str, player_email: &str) -> Result<i32, DbErr> {
        let entity = entity::friend_request::ActiveModel {
            requester_email: ActiveValue::Set(requester_email.to_string()),
            player_email: ActiveValue::Set(player_email.to_string()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(entity.id)
    }

    /// Finds a request by id with the requester's profile.
    ///
    /// # Returns
    /// - `Ok(Some(FriendRequest))` - Request found
    /// - `Ok(None)` - No request with that id (or its requester no longer exists)
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<FriendRequest>, DbErr> {
        let Some(row) = entity::prelude::FriendRequest::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        Ok(self.with_requesters(vec![row]).await?.pop())
    }

    /// Checks whether a request exists for this exact direction.
    pub async fn exists(&self, requester_email: &str, player_email: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::FriendRequest::find()
            .filter(entity::friend_request::Column::RequesterEmail.eq(requester_email))
            .filter(entity::friend_request::Column::PlayerEmail.eq(player_email))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Deletes a request by id.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows deleted (0 if it was already gone)
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::FriendRequest::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Deletes the request for this exact direction, if any.
    pub async fn delete_between(
        &self,
        requester_email: &str,
        player_email: &str,
    ) -> Result<u64, DbErr> {
        let result = entity::prelude::FriendRequest::delete_many()
            .filter(entity::friend_request::Column::RequesterEmail.eq(requester_email))
            .filter(entity::friend_request::Column::PlayerEmail.eq(player_email))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Gets the pending requests a player has received, oldest first.
    pub async fn get_received(&self, email: &str) -> Result<Vec<FriendRequest>, DbErr> {
        let rows = entity::prelude::FriendRequest::find()
            .filter(entity::friend_request::Column::PlayerEmail.eq(email))
            .order_by_asc(entity::friend_request::Column::Id)
            .all(self.db)
            .await?;

        self.with_requesters(rows).await
    }

    /// Gets the pending requests a player has sent, oldest first.
    pub async fn get_sent(&self, email: &str) -> Result<Vec<FriendRequest>, DbErr> {
        let rows = entity::prelude::FriendRequest::find()
            .filter(entity::friend_request::Column::RequesterEmail.eq(email))
            .order_by_asc(entity::friend_request::Column::Id)
            .all(self.db)
            .await?;

        self.with_requesters(rows).await
    }

    /// Deletes every request a player sent or received.
    pub async fn delete_all_for_player(&self, email: &str) -> Result<u64, DbErr> {
        let result = entity::prelude::FriendRequest::delete_many()
            .filter(
                Condition::any()
                    .add(entity::friend_request::Column::RequesterEmail.eq(email))
                    .add(entity::friend_request::Column::PlayerEmail.eq(email)),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    async fn with_requesters(
        &self,
        rows: Vec<entity::friend_request::Model>,
    ) -> Result<Vec<FriendRequest>, DbErr> {
        if rows.is_empty() {
            return Ok(Vec::new());
        }

        let emails: Vec<String> = rows.iter().map(|r| r.requester_email.clone()).collect();
        let requesters: HashMap<String, entity::player::Model> = entity::prelude::Player::find()
            .filter(entity::player::Column::Email.is_in(emails))
            .all(self.db)
            .await?
            .into_iter()
            .map(|p| (p.email.clone(), p))
            .collect();

        Ok(rows
            .into_iter()
            .filter_map(|row| {
                let requester = requesters.get(&row.requester_email)?.clone();
                Some(FriendRequest::from_entity(row, requester))
            })
            .collect())
    }
}
