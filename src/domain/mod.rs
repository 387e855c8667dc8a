pub mod error;
pub mod ports;
pub mod user;

// Re-export commonly used types
pub use error::{DomainError, DomainResult};
pub use ports::{AlbumsClient, AlbumsClientError, PasswordHasher};
pub use user::{
    AlbumSummary, Authority, Role, UserDto, UserPrincipal, UserRecord, UserRepository,
};
