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
                    .table(FriendRequest::Table)
                    .if_not_exists()
                    .col(pk_auto(FriendRequest::Id))
                    .col(string_len(FriendRequest::RequesterEmail, 254))
                    .col(string_len(FriendRequest::PlayerEmail, 254))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_friend_request_requester_email")
                            .from(FriendRequest::Table, FriendRequest::RequesterEmail)
                            .to(Player::Table, Player::Email)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_friend_request_player_email")
                            .from(FriendRequest::Table, FriendRequest::PlayerEmail)
                            .to(Player::Table, Player::Email)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // At most one pending request per ordered pair
        manager
            .create_index(
                Index::create()
                    .name("idx_friend_request_pair")
                    .table(FriendRequest::Table)
                    .col(FriendRequest::RequesterEmail)
                    .col(FriendRequest::PlayerEmail)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(FriendRequest::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum FriendRequest {
    Table,
    Id,
    RequesterEmail,
    PlayerEmail,
}
