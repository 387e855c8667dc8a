//! In-memory repository implementation

use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use dashmap::DashMap;

use crate::domain::{DomainError, DomainResult, UserRecord, UserRepository};

/// In-memory user store for development and testing.
///
/// Mirrors the relational schema's uniqueness rules: one record per
/// public user id and per email.
pub struct InMemoryUserRepository {
    users: DashMap<String, UserRecord>,
    key_counter: AtomicI64,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self {
            users: DashMap::new(),
            key_counter: AtomicI64::new(1),
        }
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_email(&self, email: &str) -> DomainResult<Option<UserRecord>> {
        Ok(self
            .users
            .iter()
            .find(|entry| entry.value().email == email)
            .map(|entry| entry.value().clone()))
    }

    async fn find_by_user_id(&self, user_id: &str) -> DomainResult<Option<UserRecord>> {
        Ok(self.users.get(user_id).map(|entry| entry.value().clone()))
    }

    async fn save(&self, mut record: UserRecord) -> DomainResult<UserRecord> {
        if self
            .users
            .iter()
            .any(|entry| entry.value().email == record.email)
        {
            return Err(DomainError::EmailTaken(record.email));
        }
        if self.users.contains_key(&record.user_id) {
            return Err(DomainError::Storage(format!(
                "duplicate user id: {}",
                record.user_id
            )));
        }

        record.id = Some(self.key_counter.fetch_add(1, Ordering::SeqCst));
        self.users.insert(record.user_id.clone(), record.clone());
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record(user_id: &str, email: &str) -> UserRecord {
        UserRecord {
            id: None,
            user_id: user_id.into(),
            email: email.into(),
            first_name: "A".into(),
            last_name: "B".into(),
            encrypted_password: "$2b$12$stored".into(),
            roles: vec![],
        }
    }

    #[tokio::test]
    async fn save_assigns_increasing_storage_keys() {
        let repo = InMemoryUserRepository::new();

        let first = repo.save(sample_record("U1", "a@x.com")).await.unwrap();
        let second = repo.save(sample_record("U2", "b@x.com")).await.unwrap();

        assert_eq!(first.id, Some(1));
        assert_eq!(second.id, Some(2));
    }

    #[tokio::test]
    async fn save_then_find_by_either_key() {
        let repo = InMemoryUserRepository::new();
        repo.save(sample_record("U1", "a@x.com")).await.unwrap();

        assert!(repo.find_by_user_id("U1").await.unwrap().is_some());
        assert!(repo.find_by_email("a@x.com").await.unwrap().is_some());
        assert!(repo.find_by_email("b@x.com").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn duplicate_email_is_rejected() {
        let repo = InMemoryUserRepository::new();
        repo.save(sample_record("U1", "a@x.com")).await.unwrap();

        let err = repo.save(sample_record("U2", "a@x.com")).await.unwrap_err();
        assert!(matches!(err, DomainError::EmailTaken(e) if e == "a@x.com"));
    }

    #[tokio::test]
    async fn duplicate_user_id_is_a_storage_error() {
        let repo = InMemoryUserRepository::new();
        repo.save(sample_record("U1", "a@x.com")).await.unwrap();

        let err = repo.save(sample_record("U1", "b@x.com")).await.unwrap_err();
        assert!(matches!(err, DomainError::Storage(_)));
    }
}
