use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// Password hashing failed.
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Failed to hash password: {0}")]
    PasswordHash(String),

    /// Signing a bearer token failed.
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Failed to encode token: {0}")]
    TokenEncoding(#[from] jsonwebtoken::errors::Error),

    /// A friendship row exists without its reciprocal row.
    ///
    /// Friendships are always written as two rows in one transaction, so this
    /// indicates a corrupted friendship ledger.
    #[error("Friendship {player} -> {friend} has no reciprocal row")]
    MissingReciprocalFriendship {
        /// Subject of the existing row
        player: String,
        /// Friend of the existing row
        friend: String,
    },
}
