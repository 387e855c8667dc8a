//! User use-cases

pub mod mapper;
pub mod service;

pub use mapper::{dto_to_record, record_to_dto};
pub use service::UserService;
