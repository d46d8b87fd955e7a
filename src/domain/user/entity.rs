//! User entity

use crate::domain::storage::{RecordId, UNASSIGNED_ID};

/// User account
///
/// The password is kept as supplied by the account layer; hashing happens
/// before it reaches the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id: RecordId,
    email: String,
    name: String,
    password: String,
}

impl User {
    /// Create an unsaved user
    pub fn new(
        email: impl Into<String>,
        name: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            id: UNASSIGNED_ID,
            email: email.into(),
            name: name.into(),
            password: password.into(),
        }
    }

    /// Rebuild a stored user (used by backends when decoding rows)
    pub fn restore(
        id: RecordId,
        email: impl Into<String>,
        name: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            id,
            ..Self::new(email, name, password)
        }
    }

    pub fn id(&self) -> RecordId {
        self.id
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub(crate) fn set_id(&mut self, id: RecordId) {
        self.id = id;
    }

    /// Check a login attempt against this account
    pub fn matches(&self, email: &str, password: &str) -> bool {
        self.email == email && self.password == password
    }
}
