//! Role factory for seeding the account roles.

use sea_orm::{ActiveValue, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait};

/// Name of the default account role.
pub const USER: &str = "USER";
/// Name of the administrator role.
pub const ADMIN: &str = "ADMIN";

/// Inserts the USER and ADMIN role rows if they do not exist yet.
///
/// Safe to call several times within one test.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(())` - Both roles exist
/// - `Err(DbErr)` - Database error during insert
pub async fn seed_roles(db: &DatabaseConnection) -> Result<(), DbErr> {
    for name in [USER, ADMIN] {
        let exists = entity::prelude::Role::find_by_id(name.to_string())
            .count(db)
            .await?
            > 0;

        if !exists {
            entity::prelude::Role::insert(entity::role::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
            })
            .exec_without_returning(db)
            .await?;
        }
    }

    Ok(())
}
