use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "player")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub email: String,
    #[sea_orm(unique)]
    pub nickname: String,
    pub password: String,
    pub coins: i32,
    pub skin_url: Option<String>,
    pub profile_image_url: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::player_game::Entity")]
    PlayerGame,
    #[sea_orm(has_many = "super::player_role::Entity")]
    PlayerRole,
}

impl Related<super::player_game::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PlayerGame.def()
    }
}

impl Related<super::player_role::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PlayerRole.def()
    }
}

impl Related<super::role::Entity> for Entity {
    fn to() -> RelationDef {
        super::player_role::Relation::Role.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::player_role::Relation::Player.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
