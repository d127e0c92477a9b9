//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// Provides monotonically increasing values for generating unique emails and
/// nicknames across all factories.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Seeds roles and creates `count` players with default values.
///
/// # Arguments
/// - `db` - Database connection
/// - `count` - Number of players to create
///
/// # Returns
/// - `Ok(Vec<entity::player::Model>)` - Created players in creation order
/// - `Err(DbErr)` - Database error during creation
pub async fn create_players(
    db: &DatabaseConnection,
    count: usize,
) -> Result<Vec<entity::player::Model>, DbErr> {
    crate::factory::role::seed_roles(db).await?;

    let mut players = Vec::with_capacity(count);
    for _ in 0..count {
        players.push(crate::factory::player::create_player(db).await?);
    }

    Ok(players)
}
