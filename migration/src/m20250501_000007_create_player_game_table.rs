use sea_orm_migration::{prelude::*, schema::*};

use super::{m20250501_000001_create_player_table::Player, m20250501_000006_create_game_table::Game};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PlayerGame::Table)
                    .if_not_exists()
                    .col(pk_auto(PlayerGame::Id))
                    .col(string_len(PlayerGame::PlayerEmail, 254))
                    .col(integer(PlayerGame::GameId))
                    .col(string_len(PlayerGame::Role, 16))
                    .col(timestamp_with_time_zone(PlayerGame::GameDateTime))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_player_game_player_email")
                            .from(PlayerGame::Table, PlayerGame::PlayerEmail)
                            .to(Player::Table, Player::Email)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_player_game_game_id")
                            .from(PlayerGame::Table, PlayerGame::GameId)
                            .to(Game::Table, Game::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PlayerGame::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum PlayerGame {
    Table,
    Id,
    PlayerEmail,
    GameId,
    Role,
    GameDateTime,
}
