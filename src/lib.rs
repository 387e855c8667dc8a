//! # PhotoApp Users Service
//!
//! Core of the users microservice: registration, credential lookup for
//! authentication, and user-detail retrieval that aggregates the albums
//! microservice.
//!
//! ## Architecture
//!
//! The project follows Clean Architecture principles:
//!
//! - **domain**: Core business entities, DTOs and trait contracts
//! - **application**: Business logic and use-case orchestration
//! - **infrastructure**: External concerns (database, password hashing, HTTP client)
//!
//! The HTTP endpoint layer and the authentication framework sit on top
//! of this crate; they wire [`UserService`] up from the adapters below
//! and are not part of it.

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{default_config_path, init_tracing, AppConfig};

// Re-export database types for easy access
pub use infrastructure::{init_database, DatabaseConfig};

// Re-export the service and the adapters a composition root needs
pub use application::users::UserService;
pub use infrastructure::{
    BcryptPasswordHasher, HttpAlbumsClient, InMemoryUserRepository, SeaOrmUserRepository,
};
