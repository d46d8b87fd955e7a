//! In-memory user repository

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::domain::storage::RecordId;
use crate::domain::{DomainError, User, UserRepository};

#[derive(Debug, Default)]
struct Accounts {
    last_id: RecordId,
    by_id: HashMap<RecordId, User>,
}

/// Thread-safe in-memory user repository with a unique e-mail constraint
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    accounts: RwLock<Accounts>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn save(&self, mut user: User) -> Result<Option<User>, DomainError> {
        let mut accounts = self.accounts.write().map_err(|e| {
            DomainError::storage(format!("Failed to acquire write lock: {}", e))
        })?;

        if accounts.by_id.values().any(|u| u.email() == user.email()) {
            warn!(email = %user.email(), "E-mail is already registered");
            return Ok(None);
        }

        accounts.last_id += 1;
        user.set_id(accounts.last_id);
        accounts.by_id.insert(user.id(), user.clone());
        debug!(id = user.id(), "Saved user");

        Ok(Some(user))
    }

    async fn find_by_email_and_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<User>, DomainError> {
        let accounts = self.accounts.read().map_err(|e| {
            DomainError::storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(accounts
            .by_id
            .values()
            .find(|u| u.matches(email, password))
            .cloned())
    }

    async fn delete_all(&self) -> Result<(), DomainError> {
        let mut accounts = self.accounts.write().map_err(|e| {
            DomainError::storage(format!("Failed to acquire write lock: {}", e))
        })?;

        accounts.by_id.clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_save_and_find() {
        let repo = InMemoryUserRepository::new();

        let saved = repo
            .save(User::new("u@example.com", "u", "p"))
            .await
            .unwrap()
            .unwrap();
        let found = repo
            .find_by_email_and_password("u@example.com", "p")
            .await
            .unwrap();

        assert_eq!(saved.id(), 1);
        assert_eq!(found, Some(saved));
    }

    #[tokio::test]
    async fn test_same_name_different_emails() {
        let repo = InMemoryUserRepository::new();

        let first = repo.save(User::new("u", "u", "p")).await.unwrap();
        let second = repo.save(User::new("u2", "u", "r")).await.unwrap();

        assert!(first.is_some());
        assert!(second.is_some());
        assert_eq!(
            repo.find_by_email_and_password("u2", "r").await.unwrap(),
            second
        );
    }

    #[tokio::test]
    async fn test_duplicate_email_yields_none() {
        let repo = InMemoryUserRepository::new();

        repo.save(User::new("u", "u", "p")).await.unwrap();
        let duplicate = repo.save(User::new("u", "u2", "p2")).await.unwrap();

        assert!(duplicate.is_none());
        assert!(repo
            .find_by_email_and_password("u", "p2")
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn test_wrong_password_finds_nothing() {
        let repo = InMemoryUserRepository::new();
        repo.save(User::new("u", "u", "p")).await.unwrap();

        assert!(repo
            .find_by_email_and_password("u", "nope")
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn test_delete_all_keeps_counter() {
        let repo = InMemoryUserRepository::new();
        repo.save(User::new("u", "u", "p")).await.unwrap();

        repo.delete_all().await.unwrap();
        let again = repo.save(User::new("u", "u", "p")).await.unwrap().unwrap();

        assert_eq!(again.id(), 2);
    }

    #[tokio::test]
    async fn test_poisoned_lock_surfaces_storage_error() {
        let repo = InMemoryUserRepository::new();

        let _ = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _guard = repo.accounts.write().unwrap();
            panic!("writer died while holding the lock");
        }));

        assert!(matches!(
            repo.save(User::new("u", "u", "p")).await,
            Err(DomainError::Storage { .. })
        ));
        assert!(matches!(
            repo.find_by_email_and_password("u", "p").await,
            Err(DomainError::Storage { .. })
        ));
        assert!(matches!(
            repo.delete_all().await,
            Err(DomainError::Storage { .. })
        ));
    }
}
