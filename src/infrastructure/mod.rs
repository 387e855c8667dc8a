//! Infrastructure layer - external concerns

pub mod crypto;
pub mod database;
pub mod http;
pub mod storage;

pub use crypto::BcryptPasswordHasher;
pub use database::repositories::SeaOrmUserRepository;
pub use database::{init_database, DatabaseConfig};
pub use http::HttpAlbumsClient;
pub use storage::InMemoryUserRepository;
