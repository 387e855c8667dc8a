//! In-memory storage implementations

mod memory;

pub use memory::InMemoryUserRepository;
