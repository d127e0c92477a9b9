use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Player::Table)
                    .if_not_exists()
                    .col(string_len(Player::Email, 254).primary_key())
                    .col(string_len_uniq(Player::Nickname, 30))
                    .col(string_len(Player::Password, 128))
                    .col(integer(Player::Coins).default(0))
                    .col(string_len_null(Player::SkinUrl, 2048))
                    .col(string_len_null(Player::ProfileImageUrl, 2048))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_player_nickname")
                    .table(Player::Table)
                    .col(Player::Nickname)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Player::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Player {
    Table,
    Email,
    Nickname,
    Password,
    Coins,
    SkinUrl,
    ProfileImageUrl,
}
