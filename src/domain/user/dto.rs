//! Boundary DTOs for the users service

use serde::{Deserialize, Serialize};

/// User representation exchanged at the service boundary.
///
/// Mirrors [`UserRecord`](super::UserRecord)'s public fields. `password`
/// is only ever present on the inbound create request; neither it nor
/// the stored hash is written to serialized output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    #[serde(default)]
    pub user_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default, skip_serializing)]
    pub password: Option<String>,
    #[serde(skip)]
    pub encrypted_password: String,
    /// Populated only by the get-by-id operation.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub albums: Vec<AlbumSummary>,
}

/// Album entry as served by the albums microservice.
///
/// Opaque to this service; fetched wholesale and attached to the user
/// DTO.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlbumSummary {
    #[serde(rename = "albumId")]
    pub id: String,
    #[serde(default)]
    pub user_id: String,
    pub name: String,
}
