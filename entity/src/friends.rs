use sea_orm::entity::prelude::*;

/// One direction of an accepted friendship. A friendship between A and B is
/// always stored as the pair (A, B) and (B, A).
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "friends")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub player_email: String,
    pub friend_email: String,
    pub friendship_date_time: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::player::Entity",
        from = "Column::PlayerEmail",
        to = "super::player::Column::Email",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Player,
    #[sea_orm(
        belongs_to = "super::player::Entity",
        from = "Column::FriendEmail",
        to = "super::player::Column::Email",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Friend,
}

impl ActiveModelBehavior for ActiveModel {}
