//! Friend service implementing the friend request state machine.
//!
//! A request moves a pair of players from no relationship to a pending request, and
//! from there either to a mutual friendship (accept) or back to nothing (reject or
//! cancel). Accepting writes both friendship rows and removes the pending requests
//! between the pair in one transaction.

use chrono::Utc;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{
        friend::FriendRepository, friend_request::FriendRequestRepository,
        player::PlayerRepository,
    },
    error::{auth::AuthError, internal::InternalError, AppError},
    model::friend::{Friend, FriendRequest},
};

/// Service providing business logic for friendships and friend requests.
pub struct FriendService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FriendService<'a> {
    /// Creates a new FriendService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `FriendService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Sends a friend request from `requester_email` to `target_email`.
    ///
    /// # Returns
    /// - `Ok(i32)` - Id of the new pending request
    /// - `Err(AppError::NotFound)` - Target player does not exist
    /// - `Err(AppError::BadRequest)` - Player tried to befriend themselves
    /// - `Err(AppError::Conflict)` - Already friends, or the same request is already pending
    pub async fn send_request(
        &self,
        requester_email: &str,
        target_email: &str,
    ) -> Result<i32, AppError> {
        if !PlayerRepository::new(self.db).exists(target_email).await? {
            return Err(AppError::NotFound(format!(
                "Player {} not found",
                target_email
            )));
        }

        if requester_email == target_email {
            return Err(AppError::BadRequest(
                "Cannot send a friend request to yourself".to_string(),
            ));
        }

        if FriendRepository::new(self.db)
            .exists_between(requester_email, target_email)
            .await?
        {
            return Err(AppError::Conflict("Players are already friends".to_string()));
        }

        let request_repo = FriendRequestRepository::new(self.db);
        if request_repo.exists(requester_email, target_email).await? {
            return Err(AppError::Conflict(
                "Friend request already sent".to_string(),
            ));
        }

        let id = request_repo
            .create(requester_email, target_email)
            .await
            .map_err(|e| AppError::conflict_on_unique(e, "Friend request already sent"))?;

        tracing::debug!(
            "Friend request {} sent from {} to {}",
            id,
            requester_email,
            target_email
        );

        Ok(id)
    }

    /// Retrieves a request visible to the acting player.
    ///
    /// # Returns
    /// - `Ok(FriendRequest)` - Request where the acting player is sender or recipient
    /// - `Err(AppError::NotFound)` - No request with that id
    /// - `Err(AppError::AuthErr(AccessDenied))` - Acting player is not part of the request
    pub async fn get_request(
        &self,
        request_id: i32,
        acting_email: &str,
    ) -> Result<FriendRequest, AppError> {
        let request = FriendRequestRepository::new(self.db)
            .find_by_id(request_id)
            .await?
            .ok_or_else(|| request_not_found(request_id))?;

        if !request.involves(acting_email) {
            return Err(AuthError::AccessDenied(
                acting_email.to_string(),
                format!("not a party to friend request {}", request_id),
            )
            .into());
        }

        Ok(request)
    }

    /// Accepts a pending request as its recipient.
    ///
    /// Inserts both friendship rows (unless the pair is already friends), deletes the
    /// request and any pending request in the opposite direction, all in one transaction.
    ///
    /// # Returns
    /// - `Ok(Friend)` - The requester as seen from the acting player's friend list
    /// - `Err(AppError::NotFound)` - No request with that id
    /// - `Err(AppError::AuthErr(AccessDenied))` - Acting player is not the recipient
    pub async fn accept_request(
        &self,
        request_id: i32,
        acting_email: &str,
    ) -> Result<Friend, AppError> {
        let txn = self.db.begin().await?;

        let request_repo = FriendRequestRepository::new(&txn);
        let request = request_repo
            .find_by_id(request_id)
            .await?
            .ok_or_else(|| request_not_found(request_id))?;

        if request.player_email != acting_email {
            return Err(AuthError::AccessDenied(
                acting_email.to_string(),
                format!("not the recipient of friend request {}", request_id),
            )
            .into());
        }

        let friend_repo = FriendRepository::new(&txn);
        if !friend_repo
            .exists_between(&request.player_email, &request.requester_email)
            .await?
        {
            friend_repo
                .insert_pair(&request.player_email, &request.requester_email, Utc::now())
                .await?;
        }

        request_repo.delete(request.id).await?;
        request_repo
            .delete_between(&request.player_email, &request.requester_email)
            .await?;

        let friend = friend_repo
            .get_friends(acting_email)
            .await?
            .into_iter()
            .find(|f| f.email == request.requester_email)
            .ok_or_else(|| {
                AppError::NotFound(format!("Player {} not found", request.requester_email))
            })?;

        txn.commit().await?;

        tracing::debug!(
            "{} accepted friend request {} from {}",
            acting_email,
            request_id,
            request.requester_email
        );

        Ok(friend)
    }

    /// Rejects (as recipient) or cancels (as requester) a pending request.
    ///
    /// # Returns
    /// - `Ok(())` - Request deleted
    /// - `Err(AppError::NotFound)` - No request with that id
    /// - `Err(AppError::AuthErr(AccessDenied))` - Acting player is not part of the request
    pub async fn reject_request(&self, request_id: i32, acting_email: &str) -> Result<(), AppError> {
        let request = self.get_request(request_id, acting_email).await?;

        let deleted = FriendRequestRepository::new(self.db)
            .delete(request.id)
            .await?;
        if deleted == 0 {
            return Err(request_not_found(request_id));
        }

        Ok(())
    }

    /// Lists pending requests received by a player.
    pub async fn list_requests(&self, email: &str) -> Result<Vec<FriendRequest>, AppError> {
        Ok(FriendRequestRepository::new(self.db)
            .get_received(email)
            .await?)
    }

    /// Lists pending requests sent by a player.
    pub async fn list_sent_requests(&self, email: &str) -> Result<Vec<FriendRequest>, AppError> {
        Ok(FriendRequestRepository::new(self.db).get_sent(email).await?)
    }

    /// Lists a player's friends with the friendship date.
    ///
    /// # Returns
    /// - `Ok(Vec<Friend>)` - Friends ordered by friendship date
    /// - `Err(AppError::InternalErr(MissingReciprocalFriendship))` - A friendship row has
    ///   no reciprocal row
    pub async fn list_friends(&self, email: &str) -> Result<Vec<Friend>, AppError> {
        let friend_repo = FriendRepository::new(self.db);

        let friends = friend_repo.get_friends(email).await?;
        let reciprocal = friend_repo.get_reciprocal_emails(email).await?;

        if let Some(orphan) = friends.iter().find(|f| !reciprocal.contains(&f.email)) {
            return Err(InternalError::MissingReciprocalFriendship {
                player: email.to_string(),
                friend: orphan.email.clone(),
            }
            .into());
        }

        Ok(friends)
    }

    /// Removes a friendship in both directions.
    ///
    /// Removing a friendship that does not exist succeeds.
    ///
    /// # Returns
    /// - `Ok(())` - Friendship rows removed (or none existed)
    /// - `Err(AppError::NotFound)` - Friend player does not exist
    pub async fn remove_friend(&self, email: &str, friend_email: &str) -> Result<(), AppError> {
        if !PlayerRepository::new(self.db).exists(friend_email).await? {
            return Err(AppError::NotFound(format!(
                "Player {} not found",
                friend_email
            )));
        }

        let txn = self.db.begin().await?;
        FriendRepository::new(&txn)
            .delete_pair(email, friend_email)
            .await?;
        txn.commit().await?;

        Ok(())
    }
}

fn request_not_found(request_id: i32) -> AppError {
    AppError::NotFound(format!("Friend request {} not found", request_id))
}
