use sea_orm_migration::{prelude::*, schema::*};

use super::m20250501_000001_create_player_table::Player;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Friends::Table)
                    .if_not_exists()
                    .col(pk_auto(Friends::Id))
                    .col(string_len(Friends::PlayerEmail, 254))
                    .col(string_len(Friends::FriendEmail, 254))
                    .col(timestamp_with_time_zone(Friends::FriendshipDateTime))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_friends_player_email")
                            .from(Friends::Table, Friends::PlayerEmail)
                            .to(Player::Table, Player::Email)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_friends_friend_email")
                            .from(Friends::Table, Friends::FriendEmail)
                            .to(Player::Table, Player::Email)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_friends_pair")
                    .table(Friends::Table)
                    .col(Friends::PlayerEmail)
                    .col(Friends::FriendEmail)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Friends::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Friends {
    Table,
    Id,
    PlayerEmail,
    FriendEmail,
    FriendshipDateTime,
}
