use thiserror::Error;

use crate::domain::ports::AlbumsClientError;

/// Result alias used throughout the domain and application layers.
pub type DomainResult<T> = Result<T, DomainError>;

#[derive(Debug, Error)]
pub enum DomainError {
    /// Credential lookup found no record. Carries the queried username
    /// so the authentication layer can report what was looked up.
    #[error("No credentials found for {0}")]
    PrincipalNotFound(String),

    #[error("User not found")]
    UserNotFound,

    #[error("Email already exists: {0}")]
    EmailTaken(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Password hashing failed: {0}")]
    Hashing(String),

    #[error(transparent)]
    Albums(#[from] AlbumsClientError),
}
