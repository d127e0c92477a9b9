//! Friends factory for creating friendship rows.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Inserts a single directional friendship row `(player, friend)`.
///
/// Useful for reproducing a broken friendship where the reciprocal row is
/// missing.
///
/// # Arguments
/// - `db` - Database connection
/// - `player_email` - Subject of the row
/// - `friend_email` - Friend of the subject
/// - `at` - Friendship timestamp
///
/// # Returns
/// - `Ok(entity::friends::Model)` - Created row
/// - `Err(DbErr)` - Database error during insert
pub async fn create_friendship_row(
    db: &DatabaseConnection,
    player_email: &str,
    friend_email: &str,
    at: DateTime<Utc>,
) -> Result<entity::friends::Model, DbErr> {
    entity::friends::ActiveModel {
        player_email: ActiveValue::Set(player_email.to_string()),
        friend_email: ActiveValue::Set(friend_email.to_string()),
        friendship_date_time: ActiveValue::Set(at),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Creates a mutual friendship stored as both directional rows.
///
/// # Returns
/// - `Ok((a_to_b, b_to_a))` - Both created rows
/// - `Err(DbErr)` - Database error during insert
pub async fn create_friendship(
    db: &DatabaseConnection,
    a: &str,
    b: &str,
) -> Result<(entity::friends::Model, entity::friends::Model), DbErr> {
    let now = Utc::now();
    let forward = create_friendship_row(db, a, b, now).await?;
    let backward = create_friendship_row(db, b, a, now).await?;

    Ok((forward, backward))
}
