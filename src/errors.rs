//! Unified error types and result handling.
//!
//! Every fallible operation in the crate returns [`Result`]. The web layer
//! decides how each variant surfaces to the browser; see `web::error`.

use thiserror::Error;

/// Unified error type for the whole application.
#[derive(Debug, Error)]
pub enum Error {
    /// User-correctable form input. Surfaced as a flash message followed by
    /// a redirect, never as a bare status code.
    #[error("{message}")]
    Validation {
        /// User-visible description of what was wrong
        message: String,
    },

    /// Missing or invalid session, or bad login credentials.
    #[error("{message}")]
    Auth {
        /// User-visible description shown on the login page
        message: String,
    },

    /// The target row of an operation does not exist.
    #[error("{entity} {id} not found")]
    NotFound {
        /// Table the lookup ran against
        entity: &'static str,
        /// Primary key that had no row
        id: i64,
    },

    /// Outbound mail submission failed. Not locally recovered: propagates
    /// to a generic failure response.
    #[error("mail delivery failed: {message}")]
    Mail {
        /// Transport-level description of the failure
        message: String,
    },

    /// Password hashing subsystem failure (corrupt stored hash, bad
    /// parameters). Distinct from a plain wrong password, which is not an
    /// error.
    #[error("credential error: {message}")]
    Credential {
        /// Description from the hashing subsystem
        message: String,
    },

    /// Process configuration is missing or malformed at startup.
    #[error("configuration error: {message}")]
    Config {
        /// Which value was missing or invalid
        message: String,
    },

    /// Database error from the persistence layer.
    #[error("database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// Template rendering failed.
    #[error("template error: {0}")]
    Template(#[from] minijinja::Error),

    /// I/O error (listener binding, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Shorthand for a [`Error::Validation`] with the given message.
    pub fn validation(message: impl Into<String>) -> Self {
        Error::Validation {
            message: message.into(),
        }
    }

    /// Shorthand for an [`Error::Auth`] with the given message.
    pub fn auth(message: impl Into<String>) -> Self {
        Error::Auth {
            message: message.into(),
        }
    }
}

// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
