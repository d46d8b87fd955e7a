//! Service keeping an entity and its uploaded file consistent

use std::fmt::Debug;
use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::storage::{EntityStore, RecordId, StorageEntity};
use crate::domain::{Attachable, Blob, BlobStore, Candidate, DomainError, Vacancy};

/// Coordinates an entity store with the blob store
///
/// The file is created on save, replaced on update when a new upload is
/// supplied, and removed together with the entity on delete. Calls into
/// the two stores are sequenced but not isolated: concurrent updates of
/// the same id may interleave their blob operations.
pub struct AttachmentService<E>
where
    E: Attachable + 'static,
{
    entities: Arc<dyn EntityStore<E>>,
    files: Arc<dyn BlobStore>,
}

pub type CandidateService = AttachmentService<Candidate>;
pub type VacancyService = AttachmentService<Vacancy>;

impl<E> Debug for AttachmentService<E>
where
    E: Attachable + 'static,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AttachmentService")
            .field("kind", &E::KIND)
            .field("entities", &self.entities)
            .finish_non_exhaustive()
    }
}

impl<E> AttachmentService<E>
where
    E: Attachable + 'static,
{
    pub fn new(entities: Arc<dyn EntityStore<E>>, files: Arc<dyn BlobStore>) -> Self {
        Self { entities, files }
    }

    /// Store the file, point the entity at it, then store the entity
    pub async fn save(&self, mut entity: E, file: Blob) -> Result<E, DomainError> {
        info!(kind = E::KIND, file = %file.name(), "Saving with attachment");

        self.attach_new_file(&mut entity, file).await?;
        self.entities.save(entity).await
    }

    /// Replace the entity's fields, and its file when `file` has content.
    ///
    /// With an empty upload the entity's `file_id` is passed through as the
    /// caller set it. Otherwise the new file is stored, the entity updated,
    /// and the previously referenced file deleted. The old file is deleted
    /// even when the entity update reports the record missing, which
    /// leaves the new file orphaned.
    pub async fn update(&self, mut entity: E, file: Blob) -> Result<bool, DomainError> {
        let id = entity.id();

        if file.is_empty() {
            info!(kind = E::KIND, id, "Updating without file replacement");
            return self.entities.update(entity).await;
        }

        info!(kind = E::KIND, id, file = %file.name(), "Updating with file replacement");

        let old_file_id = entity.file_id();
        self.attach_new_file(&mut entity, file).await?;
        let new_file_id = entity.file_id();

        let updated = self.entities.update(entity).await?;

        if !updated {
            warn!(
                kind = E::KIND,
                id,
                old_file_id,
                new_file_id,
                "Record vanished during update, replacement file is orphaned"
            );
        }

        // TODO: only drop the old file once the update is known to have applied
        self.files.delete_by_id(old_file_id).await?;

        Ok(updated)
    }

    /// Delete the entity and its file; unknown ids are a no-op
    pub async fn delete_by_id(&self, id: RecordId) -> Result<(), DomainError> {
        let Some(entity) = self.entities.find_by_id(id).await? else {
            return Ok(());
        };

        info!(kind = E::KIND, id, file_id = entity.file_id(), "Deleting with attachment");

        self.entities.delete_by_id(id).await?;
        self.files.delete_by_id(entity.file_id()).await?;

        Ok(())
    }

    pub async fn find_by_id(&self, id: RecordId) -> Result<Option<E>, DomainError> {
        self.entities.find_by_id(id).await
    }

    pub async fn find_all(&self) -> Result<Vec<E>, DomainError> {
        self.entities.find_all().await
    }

    /// Look up an attached file, e.g. to serve a download
    pub async fn file_by_id(&self, file_id: RecordId) -> Result<Option<Blob>, DomainError> {
        self.files.find_by_id(file_id).await
    }

    async fn attach_new_file(&self, entity: &mut E, file: Blob) -> Result<(), DomainError> {
        let saved = self.files.save(file).await?;
        entity.set_file_id(saved.id());
        Ok(())
    }
}
