use sea_orm_migration::{prelude::*, schema::*};

use super::{m20250501_000001_create_player_table::Player, m20250501_000002_create_role_table::Role};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PlayerRole::Table)
                    .if_not_exists()
                    .col(string_len(PlayerRole::PlayerEmail, 254))
                    .col(string_len(PlayerRole::RoleName, 20))
                    .primary_key(
                        Index::create()
                            .col(PlayerRole::PlayerEmail)
                            .col(PlayerRole::RoleName),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_player_role_player_email")
                            .from(PlayerRole::Table, PlayerRole::PlayerEmail)
                            .to(Player::Table, Player::Email)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_player_role_role_name")
                            .from(PlayerRole::Table, PlayerRole::RoleName)
                            .to(Role::Table, Role::Name)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PlayerRole::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum PlayerRole {
    Table,
    PlayerEmail,
    RoleName,
}
