//! Friendship and friend request domain models.

use chrono::{DateTime, Utc};

use crate::model::friend::{FriendDto, FriendRequestDto};

/// Accepted friend as seen from one side of the friendship.
#[derive(Debug, Clone, PartialEq)]
pub struct Friend {
    /// Email of the friend.
    pub email: String,
    pub nickname: String,
    pub skin_url: Option<String>,
    pub profile_image_url: Option<String>,
    /// When the friendship was established.
    pub friendship_date: DateTime<Utc>,
}

impl Friend {
    /// Builds the friend view from the friendship row and the friend's player row.
    pub fn from_entity(row: entity::friends::Model, friend: entity::player::Model) -> Self {
        Self {
            email: friend.email,
            nickname: friend.nickname,
            skin_url: friend.skin_url,
            profile_image_url: friend.profile_image_url,
            friendship_date: row.friendship_date_time,
        }
    }

    pub fn into_dto(self) -> FriendDto {
        FriendDto {
            email: self.email,
            nickname: self.nickname,
            friendship_date: self.friendship_date,
            skin_url: self.skin_url,
            profile_image_url: self.profile_image_url,
        }
    }
}

/// Pending, directional friend request.
#[derive(Debug, Clone, PartialEq)]
pub struct FriendRequest {
    pub id: i32,
    /// Player who sent the request.
    pub requester_email: String,
    pub requester_nickname: String,
    pub requester_profile_image_url: Option<String>,
    /// Recipient of the request.
    pub player_email: String,
}

impl FriendRequest {
    /// Builds the request view from the request row and the requester's player row.
    pub fn from_entity(row: entity::friend_request::Model, requester: entity::player::Model) -> Self {
        Self {
            id: row.id,
            requester_email: row.requester_email,
            requester_nickname: requester.nickname,
            requester_profile_image_url: requester.profile_image_url,
            player_email: row.player_email,
        }
    }

    /// Returns whether `email` is the sender or the recipient.
    pub fn involves(&self, email: &str) -> bool {
        self.requester_email == email || self.player_email == email
    }

    pub fn into_dto(self) -> FriendRequestDto {
        FriendRequestDto {
            friend_request_id: self.id,
            requester_email: self.requester_email,
            requester_nickname: self.requester_nickname,
            requester_profile_image_url: self.requester_profile_image_url,
            player_email: self.player_email,
        }
    }
}
