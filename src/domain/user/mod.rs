//! User aggregate
//!
//! Contains the user record, boundary DTOs, the authentication
//! principal, and the repository interface.

pub mod dto;
pub mod model;
pub mod principal;
pub mod repository;

// Re-export model types
pub use model::{Authority, Role, UserRecord};

// Re-export DTOs
pub use dto::{AlbumSummary, UserDto};

// Re-export the principal
pub use principal::UserPrincipal;

// Re-export repository trait
pub use repository::UserRepository;
