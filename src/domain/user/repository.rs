use async_trait::async_trait;

use super::UserRecord;
use crate::domain::DomainResult;

/// Persistence contract for user records.
///
/// `save` returns the stored record with its storage key filled in.
/// Email and public user id are unique per store; how a duplicate
/// surfaces (pre-check or constraint violation) is the store's call.
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_email(&self, email: &str) -> DomainResult<Option<UserRecord>>;
    async fn find_by_user_id(&self, user_id: &str) -> DomainResult<Option<UserRecord>>;
    async fn save(&self, record: UserRecord) -> DomainResult<UserRecord>;
}
