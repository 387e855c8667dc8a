//! Application-layer orchestration of the user use-cases.
//!
//! All user-facing business logic lives here. The HTTP layer and the
//! authentication framework are expected to stay thin wrappers that
//! delegate to this service.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use super::mapper::{dto_to_record, record_to_dto};
use crate::domain::{
    AlbumsClient, DomainError, DomainResult, PasswordHasher, UserDto, UserPrincipal,
    UserRepository,
};

/// Orchestrates user registration, credential lookup and user-detail
/// retrieval with albums aggregation.
///
/// Collaborators are injected once at construction and shared read-only
/// across concurrent calls; the service holds no other state.
pub struct UserService {
    repository: Arc<dyn UserRepository>,
    hasher: Arc<dyn PasswordHasher>,
    albums: Arc<dyn AlbumsClient>,
    reject_duplicate_email: bool,
}

impl UserService {
    pub fn new(
        repository: Arc<dyn UserRepository>,
        hasher: Arc<dyn PasswordHasher>,
        albums: Arc<dyn AlbumsClient>,
    ) -> Self {
        Self {
            repository,
            hasher,
            albums,
            reject_duplicate_email: false,
        }
    }

    /// Reject duplicate emails with a lookup before the write instead of
    /// relying on the storage layer's unique constraint. Off by default;
    /// either way the caller sees [`DomainError::EmailTaken`].
    pub fn with_duplicate_email_check(mut self, enabled: bool) -> Self {
        self.reject_duplicate_email = enabled;
        self
    }

    // ── Registration ────────────────────────────────────────────

    /// Register a new user.
    ///
    /// Assigns a fresh public user id, replaces the plaintext password
    /// with its salted hash and persists the record. The returned DTO
    /// carries the stored hash, never the plaintext.
    pub async fn create_user(&self, mut details: UserDto) -> DomainResult<UserDto> {
        if self.reject_duplicate_email
            && self
                .repository
                .find_by_email(&details.email)
                .await?
                .is_some()
        {
            return Err(DomainError::EmailTaken(details.email));
        }

        details.user_id = Uuid::new_v4().to_string();

        let plaintext = details.password.take().unwrap_or_default();
        details.encrypted_password = self.hasher.hash(&plaintext)?;

        let record = dto_to_record(&details);
        let saved = self.repository.save(record).await?;

        info!(user_id = %saved.user_id, email = %saved.email, "User created");
        Ok(record_to_dto(&saved))
    }

    // ── Credential lookup ───────────────────────────────────────

    /// Look up login credentials by username (an email address).
    ///
    /// Called by the authentication layer. Permissions are the record's
    /// roles flattened in order, duplicates preserved. `enabled` is
    /// always true; this service tracks no account status.
    pub async fn load_user_by_username(&self, username: &str) -> DomainResult<UserPrincipal> {
        let record = self
            .repository
            .find_by_email(username)
            .await?
            .ok_or_else(|| DomainError::PrincipalNotFound(username.to_string()))?;

        let permissions = record.granted_permissions();

        Ok(UserPrincipal {
            username: record.email,
            password_hash: record.encrypted_password,
            permissions,
            enabled: true,
        })
    }

    /// Fetch the stored details behind `email`, without albums.
    pub async fn get_user_details_by_email(&self, email: &str) -> DomainResult<UserDto> {
        let record = self
            .repository
            .find_by_email(email)
            .await?
            .ok_or_else(|| DomainError::PrincipalNotFound(email.to_string()))?;

        Ok(record_to_dto(&record))
    }

    // ── Detail retrieval ────────────────────────────────────────

    /// Fetch a user by public id and attach their albums.
    ///
    /// `authorization` is forwarded to the albums microservice verbatim.
    /// An albums failure propagates untouched: no retry, no partial
    /// result.
    pub async fn get_user_by_user_id(
        &self,
        user_id: &str,
        authorization: &str,
    ) -> DomainResult<UserDto> {
        let record = self
            .repository
            .find_by_user_id(user_id)
            .await?
            .ok_or(DomainError::UserNotFound)?;

        let mut user = record_to_dto(&record);

        info!(user_id, "Before calling albums microservice");
        let albums = self.albums.albums_for_user(user_id, authorization).await?;
        info!(user_id, count = albums.len(), "After calling albums microservice");

        user.albums = albums;
        Ok(user)
    }
}
