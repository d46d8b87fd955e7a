//! In-memory storage implementation

use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use tracing::debug;

use crate::domain::storage::{EntityStore, RecordId, StorageEntity};
use crate::domain::{Blob, BlobStore, DomainError};

/// Id counter and records, guarded together so id issue and insert are one step
#[derive(Debug)]
struct Records<E> {
    last_id: RecordId,
    entries: HashMap<RecordId, E>,
}

impl<E> Default for Records<E> {
    fn default() -> Self {
        Self {
            last_id: 0,
            entries: HashMap::new(),
        }
    }
}

impl<E: StorageEntity> Records<E> {
    fn insert_new(&mut self, mut entity: E) -> E {
        self.last_id += 1;
        entity.set_id(self.last_id);
        self.entries.insert(self.last_id, entity.clone());
        entity
    }
}

/// Thread-safe in-memory entity store
///
/// Data lives for the lifetime of the process. Ids start at 1 and are never
/// reused, even after the record holding one is deleted.
#[derive(Debug)]
pub struct InMemoryStorage<E>
where
    E: StorageEntity,
{
    records: RwLock<Records<E>>,
}

impl<E> Default for InMemoryStorage<E>
where
    E: StorageEntity,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<E> InMemoryStorage<E>
where
    E: StorageEntity,
{
    /// Creates a new empty in-memory store
    pub fn new() -> Self {
        Self {
            records: RwLock::new(Records::default()),
        }
    }

    /// Creates a store pre-loaded through the regular save path, so the
    /// seed records receive ids 1..=n in iteration order
    pub fn seeded(entities: impl IntoIterator<Item = E>) -> Self {
        let mut records = Records::default();

        for entity in entities {
            records.insert_new(entity);
        }

        debug!(kind = E::KIND, count = records.entries.len(), "Seeded in-memory store");

        Self {
            records: RwLock::new(records),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Records<E>>, DomainError> {
        self.records
            .read()
            .map_err(|e| DomainError::storage(format!("Failed to acquire read lock: {}", e)))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Records<E>>, DomainError> {
        self.records
            .write()
            .map_err(|e| DomainError::storage(format!("Failed to acquire write lock: {}", e)))
    }
}

#[async_trait]
impl<E> EntityStore<E> for InMemoryStorage<E>
where
    E: StorageEntity + 'static,
{
    async fn save(&self, entity: E) -> Result<E, DomainError> {
        let saved = self.write()?.insert_new(entity);
        debug!(kind = E::KIND, id = saved.id(), "Saved record");
        Ok(saved)
    }

    async fn update(&self, entity: E) -> Result<bool, DomainError> {
        let id = entity.id();
        let mut records = self.write()?;

        match records.entries.get_mut(&id) {
            Some(slot) => {
                *slot = entity;
                debug!(kind = E::KIND, id, "Updated record");
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete_by_id(&self, id: RecordId) -> Result<bool, DomainError> {
        let removed = self.write()?.entries.remove(&id).is_some();

        if removed {
            debug!(kind = E::KIND, id, "Deleted record");
        }

        Ok(removed)
    }

    async fn find_by_id(&self, id: RecordId) -> Result<Option<E>, DomainError> {
        Ok(self.read()?.entries.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<E>, DomainError> {
        Ok(self.read()?.entries.values().cloned().collect())
    }

    async fn count(&self) -> Result<usize, DomainError> {
        Ok(self.read()?.entries.len())
    }
}

/// In-memory blob store, a thin specialisation of [`InMemoryStorage`]
#[derive(Debug, Default)]
pub struct InMemoryBlobStore {
    storage: InMemoryStorage<Blob>,
}

impl InMemoryBlobStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BlobStore for InMemoryBlobStore {
    async fn save(&self, blob: Blob) -> Result<Blob, DomainError> {
        self.storage.save(blob).await
    }

    async fn delete_by_id(&self, id: RecordId) -> Result<bool, DomainError> {
        self.storage.delete_by_id(id).await
    }

    async fn find_by_id(&self, id: RecordId) -> Result<Option<Blob>, DomainError> {
        self.storage.find_by_id(id).await
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::sync::Arc;

    use super::*;
    use crate::domain::{example_candidates, Attachable, Candidate};

    fn candidate(name: &str, description: &str) -> Candidate {
        Candidate::new(name, description, 1)
    }

    #[tokio::test]
    async fn test_save_assigns_sequential_ids() {
        let storage: InMemoryStorage<Candidate> = InMemoryStorage::new();

        let tom = storage.save(candidate("Tom", "smart")).await.unwrap();
        let jerry = storage.save(candidate("Jerry", "")).await.unwrap();

        assert_eq!(tom.id(), 1);
        assert_eq!(jerry.id(), 2);
        assert_eq!(storage.find_by_id(1).await.unwrap(), Some(tom));
        assert_eq!(storage.find_all().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_save_ignores_caller_id() {
        let storage: InMemoryStorage<Candidate> = InMemoryStorage::new();

        let saved = storage
            .save(candidate("Tom", "smart").with_id(42))
            .await
            .unwrap();

        assert_eq!(saved.id(), 1);
        assert!(storage.find_by_id(42).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_replaces_all_fields_but_id() {
        let storage: InMemoryStorage<Candidate> = InMemoryStorage::new();
        let saved = storage.save(candidate("Tom", "smart")).await.unwrap();

        let hired_at = chrono::NaiveDate::from_ymd_opt(2024, 3, 1)
            .and_then(|d| d.and_hms_opt(9, 30, 0))
            .unwrap();
        let replacement = Candidate::new("Tom2", "smarter", 3)
            .with_id(saved.id())
            .with_file_id(8)
            .with_creation_date(hired_at);
        let updated = storage.update(replacement.clone()).await.unwrap();

        assert!(updated);
        let found = storage.find_by_id(saved.id()).await.unwrap().unwrap();
        assert_eq!(found, replacement);
        assert_eq!(found.id(), 1);
        assert_eq!(found.name(), "Tom2");
        assert_eq!(found.city_id(), 3);
        assert_eq!(found.file_id(), 8);
        assert_eq!(found.creation_date(), hired_at);
    }

    #[tokio::test]
    async fn test_update_missing_leaves_store_unchanged() {
        let storage: InMemoryStorage<Candidate> = InMemoryStorage::new();
        let saved = storage.save(candidate("Tom", "smart")).await.unwrap();

        let updated = storage
            .update(candidate("Ghost", "").with_id(99))
            .await
            .unwrap();

        assert!(!updated);
        assert_eq!(storage.find_all().await.unwrap(), vec![saved]);
    }

    #[tokio::test]
    async fn test_delete() {
        let storage: InMemoryStorage<Candidate> = InMemoryStorage::new();
        storage.save(candidate("Tom", "smart")).await.unwrap();
        storage.save(candidate("Jerry", "")).await.unwrap();

        assert!(storage.delete_by_id(2).await.unwrap());
        assert_eq!(storage.count().await.unwrap(), 1);
        assert!(!storage.delete_by_id(2).await.unwrap());
        assert_eq!(storage.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_ids_not_reused_after_delete() {
        let storage: InMemoryStorage<Candidate> = InMemoryStorage::new();
        let first = storage.save(candidate("Tom", "")).await.unwrap();

        storage.delete_by_id(first.id()).await.unwrap();
        let second = storage.save(candidate("Jerry", "")).await.unwrap();

        assert_eq!(second.id(), 2);
    }

    #[tokio::test]
    async fn test_seeded_ids_follow_insertion_order() {
        let storage = InMemoryStorage::seeded(example_candidates());

        assert_eq!(storage.count().await.unwrap(), 5);
        assert_eq!(storage.find_by_id(1).await.unwrap().unwrap().name(), "Tom");
        assert_eq!(storage.find_by_id(5).await.unwrap().unwrap().name(), "Minnie");

        let next = storage.save(candidate("Donald", "")).await.unwrap();
        assert_eq!(next.id(), 6);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_saves_receive_distinct_ids() {
        let storage = Arc::new(InMemoryStorage::<Candidate>::new());

        let handles: Vec<_> = (0..200)
            .map(|i| {
                let storage = Arc::clone(&storage);
                tokio::spawn(async move {
                    storage
                        .save(candidate(&format!("c{}", i), ""))
                        .await
                        .unwrap()
                        .id()
                })
            })
            .collect();

        let ids: HashSet<RecordId> = futures::future::join_all(handles)
            .await
            .into_iter()
            .map(|r| r.unwrap())
            .collect();

        assert_eq!(ids.len(), 200);
        assert_eq!(ids.iter().copied().min(), Some(1));
        assert_eq!(ids.iter().copied().max(), Some(200));
        assert_eq!(storage.count().await.unwrap(), 200);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_update_and_delete_on_same_id() {
        let storage = Arc::new(InMemoryStorage::<Candidate>::new());
        let id = storage.save(candidate("Tom", "")).await.unwrap().id();

        let updater = {
            let storage = Arc::clone(&storage);
            let replacement = candidate("Tom2", "").with_id(id);
            tokio::spawn(async move { storage.update(replacement).await.unwrap() })
        };
        let deleter = {
            let storage = Arc::clone(&storage);
            tokio::spawn(async move { storage.delete_by_id(id).await.unwrap() })
        };

        updater.await.unwrap();
        let deleted = deleter.await.unwrap();

        // Whichever ran first, the delete saw the record and nothing resurrected it
        assert!(deleted);
        assert!(storage.find_by_id(id).await.unwrap().is_none());
        assert_eq!(storage.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_poisoned_lock_surfaces_storage_error() {
        let storage = InMemoryStorage::seeded(vec![candidate("Tom", "")]);

        let _ = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _guard = storage.records.write().unwrap();
            panic!("writer died while holding the lock");
        }));

        assert!(matches!(
            storage.save(candidate("Jerry", "")).await,
            Err(DomainError::Storage { .. })
        ));
        assert!(matches!(
            storage.update(candidate("Tom2", "").with_id(1)).await,
            Err(DomainError::Storage { .. })
        ));
        assert!(matches!(
            storage.find_all().await,
            Err(DomainError::Storage { .. })
        ));
    }

    #[tokio::test]
    async fn test_blob_store_roundtrip() {
        let store = InMemoryBlobStore::new();

        let saved = store.save(Blob::new("cv.pdf", vec![1u8, 2, 3])).await.unwrap();
        assert_eq!(saved.id(), 1);

        let found = store.find_by_id(saved.id()).await.unwrap().unwrap();
        assert_eq!(found.content(), &[1, 2, 3]);

        assert!(store.delete_by_id(saved.id()).await.unwrap());
        assert!(store.find_by_id(saved.id()).await.unwrap().is_none());
        assert!(!store.delete_by_id(saved.id()).await.unwrap());
    }

    #[tokio::test]
    async fn test_blob_store_accepts_empty_content() {
        let store = InMemoryBlobStore::new();

        let saved = store.save(Blob::empty()).await.unwrap();

        assert!(store.find_by_id(saved.id()).await.unwrap().unwrap().is_empty());
    }
}
