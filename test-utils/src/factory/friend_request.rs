//! Friend request factory for creating pending requests.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a pending friend request from `requester_email` to `player_email`.
///
/// # Returns
/// - `Ok(entity::friend_request::Model)` - Created request
/// - `Err(DbErr)` - Database error during insert
pub async fn create_friend_request(
    db: &DatabaseConnection,
    requester_email: &str,
    player_email: &str,
) -> Result<entity::friend_request::Model, DbErr> {
    entity::friend_request::ActiveModel {
        requester_email: ActiveValue::Set(requester_email.to_string()),
        player_email: ActiveValue::Set(player_email.to_string()),
        ..Default::default()
    }
    .insert(db)
    .await
}
