use std::sync::atomic::{AtomicI64, Ordering};

use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;

use crate::entities::User;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepositoryTrait {
    async fn create(&self, email: &str, pw_hash: &str) -> Result<User>;
    async fn find_by_id(&self, id: i64) -> Result<Option<User>>;
    async fn find_by_email(&self, email: &str) -> Result<Option<User>>;
}

/// Concurrent in-memory user store keyed by id.
///
/// Email uniqueness is enforced at the signup handler, matching how the
/// rest of the service treats the repository as a dumb record store.
pub struct InMemoryUserRepository {
    users: DashMap<i64, User>,
    next_id: AtomicI64,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self {
            users: DashMap::new(),
            next_id: AtomicI64::new(1),
        }
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepositoryTrait for InMemoryUserRepository {
    async fn create(&self, email: &str, pw_hash: &str) -> Result<User> {
        let user = User {
            id: self.next_id.fetch_add(1, Ordering::Relaxed),
            email: email.to_string(),
            pw_hash: pw_hash.to_string(),
            created_at: Utc::now(),
        };
        self.users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>> {
        Ok(self.users.get(&id).map(|entry| entry.value().clone()))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        Ok(self
            .users
            .iter()
            .find(|entry| entry.value().email == email)
            .map(|entry| entry.value().clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_assigns_increasing_ids() {
        let repo = InMemoryUserRepository::new();
        let alice = repo.create("alice@example.com", "hash-a").await.unwrap();
        let bob = repo.create("bob@example.com", "hash-b").await.unwrap();
        assert!(bob.id > alice.id);
    }

    #[tokio::test]
    async fn test_find_by_email() {
        let repo = InMemoryUserRepository::new();
        repo.create("alice@example.com", "hash-a").await.unwrap();

        let found = repo.find_by_email("alice@example.com").await.unwrap();
        assert_eq!(found.map(|u| u.pw_hash), Some("hash-a".to_string()));

        assert!(
            repo.find_by_email("nobody@example.com")
                .await
                .unwrap()
                .is_none()
        );
    }

    #[tokio::test]
    async fn test_find_by_id() {
        let repo = InMemoryUserRepository::new();
        let alice = repo.create("alice@example.com", "hash-a").await.unwrap();
        let found = repo.find_by_id(alice.id).await.unwrap();
        assert_eq!(found, Some(alice));
    }
}
