//! Storage entity traits and types

use std::fmt::Debug;

use serde::{de::DeserializeOwned, Serialize};

/// Store-issued record identifier
pub type RecordId = u64;

/// Id carried by records that have not been saved yet
pub const UNASSIGNED_ID: RecordId = 0;

/// Trait for types that can be kept in an [`EntityStore`](super::EntityStore)
///
/// The store owns the id: whatever a caller puts there before `save` is
/// overwritten with the next value of the store's counter.
pub trait StorageEntity: Clone + Debug + Send + Sync + Serialize + DeserializeOwned {
    /// Entity kind, used in log fields and table names
    const KIND: &'static str;

    /// Returns the entity's id (`UNASSIGNED_ID` before the first save)
    fn id(&self) -> RecordId;

    /// Overwrites the entity's id
    fn set_id(&mut self, id: RecordId);

    /// Returns true once the entity has been issued an id
    fn is_assigned(&self) -> bool {
        self.id() != UNASSIGNED_ID
    }
}
