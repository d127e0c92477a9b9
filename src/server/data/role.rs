//! Role data repository.
//!
//! Manages the `role` lookup table and the `player_role` join table.

use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter,
};

use crate::server::model::role::Role;

/// Repository providing database operations for roles and role assignments.
pub struct RoleRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RoleRepository<'a, C> {
    /// Creates a new RoleRepository instance.
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts the role row if it does not exist yet.
    ///
    /// # Returns
    /// - `Ok(true)` - Role was inserted
    /// - `Ok(false)` - Role already existed
    /// - `Err(DbErr)` - Database error during query or insert
    pub async fn create_if_missing(&self, role: Role) -> Result<bool, DbErr> {
        let exists = entity::prelude::Role::find_by_id(role.as_str().to_string())
            .count(self.db)
            .await?
            > 0;

        if exists {
            return Ok(false);
        }

        entity::prelude::Role::insert(entity::role::ActiveModel {
            name: ActiveValue::Set(role.as_str().to_string()),
        })
        .exec_without_returning(self.db)
        .await?;

        Ok(true)
    }

    /// Grants a role to a player. Granting a role the player already holds is a no-op.
    pub async fn assign(&self, email: &str, role: Role) -> Result<(), DbErr> {
        let exists = entity::prelude::PlayerRole::find_by_id((
            email.to_string(),
            role.as_str().to_string(),
        ))
        .count(self.db)
        .await?
            > 0;

        if exists {
            return Ok(());
        }

        entity::prelude::PlayerRole::insert(entity::player_role::ActiveModel {
            player_email: ActiveValue::Set(email.to_string()),
            role_name: ActiveValue::Set(role.as_str().to_string()),
        })
        .exec_without_returning(self.db)
        .await?;

        Ok(())
    }

    /// Revokes a role from a player.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of assignments removed (0 if the player did not hold the role)
    /// - `Err(DbErr)` - Database error during delete
    pub async fn revoke(&self, email: &str, role: Role) -> Result<u64, DbErr> {
        let result = entity::prelude::PlayerRole::delete_many()
            .filter(entity::player_role::Column::PlayerEmail.eq(email))
            .filter(entity::player_role::Column::RoleName.eq(role.as_str()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Returns the roles held by a player.
    pub async fn get_for_player(&self, email: &str) -> Result<Vec<Role>, DbErr> {
        let rows = entity::prelude::PlayerRole::find()
            .filter(entity::player_role::Column::PlayerEmail.eq(email))
            .all(self.db)
            .await?;

        Ok(rows
            .iter()
            .filter_map(|row| Role::from_name(&row.role_name))
            .collect())
    }

    /// Removes every role assignment of a player.
    pub async fn delete_all_for_player(&self, email: &str) -> Result<u64, DbErr> {
        let result = entity::prelude::PlayerRole::delete_many()
            .filter(entity::player_role::Column::PlayerEmail.eq(email))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
