use sea_orm::entity::prelude::*;

/// Account role. Only `USER` and `ADMIN` rows exist.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "role")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::player_role::Entity")]
    PlayerRole,
}

impl Related<super::player_role::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PlayerRole.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
