//! Role service for seeding and granting account roles.

use sea_orm::DatabaseConnection;

use crate::server::{data::role::RoleRepository, error::AppError, model::role::Role};

/// Service providing role seeding at startup.
pub struct RoleService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RoleService<'a> {
    /// Creates a new RoleService instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Ensures the USER and ADMIN role rows exist.
    ///
    /// Idempotent; runs on every startup before the router is served.
    ///
    /// # Returns
    /// - `Ok(())` - Both roles exist
    /// - `Err(AppError::DbErr)` - Database error during query or insert
    pub async fn initialize(&self) -> Result<(), AppError> {
        let role_repo = RoleRepository::new(self.db);

        for role in Role::ALL {
            if role_repo.create_if_missing(role).await? {
                tracing::info!("Seeded role {}", role.as_str());
            }
        }

        Ok(())
    }
}
