use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "game")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Game length in seconds.
    pub duration: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::player_game::Entity")]
    PlayerGame,
}

impl Related<super::player_game::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PlayerGame.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
