//! Outbound ports consumed by the user service
//!
//! Trait contracts implemented by infrastructure adapters: one-way
//! password hashing and the albums microservice client. The service
//! receives both at construction and never reaches around them.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::user::AlbumSummary;
use crate::domain::DomainResult;

/// One-way password hasher.
///
/// Implementations draw a fresh random salt per call, so hashing the
/// same plaintext twice yields different outputs.
pub trait PasswordHasher: Send + Sync {
    fn hash(&self, plaintext: &str) -> DomainResult<String>;
}

/// Errors surfaced by an [`AlbumsClient`] implementation.
///
/// The service passes these through untouched: no retry, no fallback,
/// no partial result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AlbumsClientError {
    /// The request never produced an HTTP response.
    #[error("albums request failed: {0}")]
    Transport(String),
    /// The albums service answered with a non-success status.
    #[error("albums service returned HTTP {status}")]
    Status { status: u16 },
    /// The response body could not be decoded.
    #[error("albums response decode failed: {0}")]
    Decode(String),
}

/// Client for the albums microservice.
#[async_trait]
pub trait AlbumsClient: Send + Sync {
    /// List the albums owned by `user_id`.
    ///
    /// `authorization` is the caller's credential header value,
    /// forwarded verbatim and never inspected here.
    async fn albums_for_user(
        &self,
        user_id: &str,
        authorization: &str,
    ) -> Result<Vec<AlbumSummary>, AlbumsClientError>;
}
