//! Game factory for creating games with participation rows.

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::GameRole;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test games with customizable participants.
///
/// # Example
///
/// ```rust,ignore
/// use entity::sea_orm_active_enums::GameRole;
/// use test_utils::factory::game::GameFactory;
///
/// let (game, rows) = GameFactory::new(&db)
///     .duration(300)
///     .participant(&alice.email, GameRole::Innocent)
///     .participant(&bob.email, GameRole::Murderer)
///     .build()
///     .await?;
/// ```
pub struct GameFactory<'a> {
    db: &'a DatabaseConnection,
    duration: i32,
    played_at: DateTime<Utc>,
    participants: Vec<(String, GameRole)>,
}

impl<'a> GameFactory<'a> {
    /// Creates a new GameFactory.
    ///
    /// Defaults:
    /// - duration: `300`
    /// - played_at: now
    /// - participants: none
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            duration: 300,
            played_at: Utc::now(),
            participants: Vec::new(),
        }
    }

    /// Sets the game duration in seconds.
    pub fn duration(mut self, duration: i32) -> Self {
        self.duration = duration;
        self
    }

    /// Sets the timestamp recorded on every participation row.
    pub fn played_at(mut self, played_at: DateTime<Utc>) -> Self {
        self.played_at = played_at;
        self
    }

    /// Adds a participant with the given role.
    pub fn participant(mut self, email: impl Into<String>, role: GameRole) -> Self {
        self.participants.push((email.into(), role));
        self
    }

    /// Builds and inserts the game and one participation row per participant.
    ///
    /// # Returns
    /// - `Ok((game, rows))` - Created game and participation rows in insertion order
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(
        self,
    ) -> Result<(entity::game::Model, Vec<entity::player_game::Model>), DbErr> {
        let game = entity::game::ActiveModel {
            duration: ActiveValue::Set(self.duration),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        let mut rows = Vec::with_capacity(self.participants.len());
        for (email, role) in self.participants {
            let row = entity::player_game::ActiveModel {
                player_email: ActiveValue::Set(email),
                game_id: ActiveValue::Set(game.id),
                role: ActiveValue::Set(role),
                game_date_time: ActiveValue::Set(self.played_at),
                ..Default::default()
            }
            .insert(self.db)
            .await?;
            rows.push(row);
        }

        Ok((game, rows))
    }
}

/// Creates a game where the first email is the murderer and the rest are innocent.
///
/// # Arguments
/// - `db` - Database connection
/// - `emails` - Participant emails; must not be empty
pub async fn create_game(
    db: &DatabaseConnection,
    emails: &[&str],
) -> Result<(entity::game::Model, Vec<entity::player_game::Model>), DbErr> {
    let mut factory = GameFactory::new(db);
    for (i, email) in emails.iter().enumerate() {
        let role = if i == 0 {
            GameRole::Murderer
        } else {
            GameRole::Innocent
        };
        factory = factory.participant(*email, role);
    }

    factory.build().await
}
