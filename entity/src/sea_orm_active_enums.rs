use sea_orm::entity::prelude::*;

/// Role a player held during a single game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum GameRole {
    #[sea_orm(string_value = "INNOCENT")]
    Innocent,
    #[sea_orm(string_value = "MURDERER")]
    Murderer,
}
