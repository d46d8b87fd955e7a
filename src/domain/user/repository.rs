//! User repository trait

use async_trait::async_trait;
use std::fmt::Debug;

use super::entity::User;
use crate::domain::DomainError;

/// Repository trait for user accounts
#[async_trait]
pub trait UserRepository: Send + Sync + Debug {
    /// Store a new account under a fresh id.
    ///
    /// Answers `Ok(None)` when the e-mail is already registered.
    async fn save(&self, user: User) -> Result<Option<User>, DomainError>;

    /// Find the account matching both credentials
    async fn find_by_email_and_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<User>, DomainError>;

    /// Remove every account
    async fn delete_all(&self) -> Result<(), DomainError>;
}
