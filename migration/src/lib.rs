pub use sea_orm_migration::prelude::*;

mod m20250501_000001_create_player_table;
mod m20250501_000002_create_role_table;
mod m20250501_000003_create_player_role_table;
mod m20250501_000004_create_friends_table;
mod m20250501_000005_create_friend_request_table;
mod m20250501_000006_create_game_table;
mod m20250501_000007_create_player_game_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250501_000001_create_player_table::Migration),
            Box::new(m20250501_000002_create_role_table::Migration),
            Box::new(m20250501_000003_create_player_role_table::Migration),
            Box::new(m20250501_000004_create_friends_table::Migration),
            Box::new(m20250501_000005_create_friend_request_table::Migration),
            Box::new(m20250501_000006_create_game_table::Migration),
            Box::new(m20250501_000007_create_player_game_table::Migration),
        ]
    }
}
