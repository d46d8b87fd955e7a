//! Blob store trait

use async_trait::async_trait;

use super::entity::Blob;
use crate::domain::storage::RecordId;
use crate::domain::DomainError;

/// Store for uploaded attachments
///
/// Same id discipline as [`EntityStore`](crate::domain::storage::EntityStore):
/// `save` issues the next id, blobs are never updated in place.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Stores the blob under a fresh id and returns the stored copy
    async fn save(&self, blob: Blob) -> Result<Blob, DomainError>;

    /// Removes the blob, returns whether it was present
    async fn delete_by_id(&self, id: RecordId) -> Result<bool, DomainError>;

    /// Point lookup
    async fn find_by_id(&self, id: RecordId) -> Result<Option<Blob>, DomainError>;
}
