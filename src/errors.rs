//! Unified error type for the gift planner data layer.

use thiserror::Error;

/// All errors that can be produced by this crate.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration could not be read or is invalid
    #[error("Configuration error: {message}")]
    Config {
        /// What went wrong
        message: String,
    },

    /// Input rejected before touching the database
    #[error("Validation error: {message}")]
    Validation {
        /// What went wrong
        message: String,
    },

    /// The email is already registered to another user
    #[error("A user with email '{email}' already exists")]
    EmailTaken {
        /// The conflicting email address
        email: String,
    },

    /// The role value is not among the configured role choices
    #[error("Unknown role value: {role}")]
    InvalidRole {
        /// The rejected role value
        role: i16,
    },

    /// No user exists with the given ID
    #[error("User not found: {id}")]
    UserNotFound {
        /// The missing user ID
        id: i64,
    },

    /// No party exists with the given ID
    #[error("Party not found: {id}")]
    PartyNotFound {
        /// The missing party ID
        id: i64,
    },

    /// No gift idea exists with the given ID
    #[error("Gift idea not found: {id}")]
    GiftIdeaNotFound {
        /// The missing gift idea ID
        id: i64,
    },

    /// Hashing or parsing a password hash failed
    #[error("Password hash error: {message}")]
    PasswordHash {
        /// What went wrong
        message: String,
    },

    /// Error returned by `SeaORM`
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Environment variable error
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] std::env::VarError),
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
