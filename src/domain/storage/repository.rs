//! Entity store trait definition

use std::fmt::Debug;

use async_trait::async_trait;

use crate::domain::DomainError;

use super::entity::{RecordId, StorageEntity};

/// Keyed store for one entity kind
///
/// Not-found is never an error: `update` and `delete_by_id` answer `false`,
/// `find_by_id` answers `None`. `Err` is reserved for backend faults.
#[async_trait]
pub trait EntityStore<E>: Send + Sync + Debug
where
    E: StorageEntity + 'static,
{
    /// Assigns the next id, stores the entity and returns the stored copy.
    /// Any id already present on the argument is ignored.
    async fn save(&self, entity: E) -> Result<E, DomainError>;

    /// Replaces every field except the id of the record keyed by `entity.id()`.
    /// Returns false and leaves the store untouched if no such record exists.
    async fn update(&self, entity: E) -> Result<bool, DomainError>;

    /// Removes the record, returns whether it was present
    async fn delete_by_id(&self, id: RecordId) -> Result<bool, DomainError>;

    /// Point lookup
    async fn find_by_id(&self, id: RecordId) -> Result<Option<E>, DomainError>;

    /// All current records, in no particular order
    async fn find_all(&self) -> Result<Vec<E>, DomainError>;

    /// Returns the count of records
    async fn count(&self) -> Result<usize, DomainError> {
        Ok(self.find_all().await?.len())
    }
}
