//! Outbound HTTP adapters

pub mod albums;

pub use albums::HttpAlbumsClient;
