use sea_orm::entity::prelude::*;

/// Pending, directional friend request from `requester_email` to `player_email`.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "friend_request")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub requester_email: String,
    pub player_email: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::player::Entity",
        from = "Column::RequesterEmail",
        to = "super::player::Column::Email",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Requester,
    #[sea_orm(
        belongs_to = "super::player::Entity",
        from = "Column::PlayerEmail",
        to = "super::player::Column::Email",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Player,
}

impl ActiveModelBehavior for ActiveModel {}
