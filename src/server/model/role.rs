//! Account roles.

/// Role granted to a player account.
///
/// Stored by name in the `role` table and linked to players through `player_role`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// Default role assigned on registration.
    User,
    /// Grants access to the admin endpoints.
    Admin,
}

impl Role {
    /// Every role seeded at startup.
    pub const ALL: [Role; 2] = [Role::User, Role::Admin];

    /// Returns the stored role name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "USER",
            Role::Admin => "ADMIN",
        }
    }

    /// Parses a stored role name.
    ///
    /// # Returns
    /// - `Some(Role)` - Name matches a known role
    /// - `None` - Unknown role name
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "USER" => Some(Role::User),
            "ADMIN" => Some(Role::Admin),
            _ => None,
        }
    }
}
