//! Blob entity and the attachment contract

use serde::{Deserialize, Serialize};

use crate::domain::storage::{RecordId, StorageEntity, UNASSIGNED_ID};

/// A named binary attachment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Blob {
    id: RecordId,
    name: String,
    content: Vec<u8>,
}

impl Blob {
    /// Create an unsaved blob
    pub fn new(name: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        Self {
            id: UNASSIGNED_ID,
            name: name.into(),
            content: content.into(),
        }
    }

    /// An upload slot the caller left empty
    pub fn empty() -> Self {
        Self::new("", Vec::new())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn content(&self) -> &[u8] {
        &self.content
    }

    /// True when no replacement content was supplied
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

impl StorageEntity for Blob {
    const KIND: &'static str = "file";

    fn id(&self) -> RecordId {
        self.id
    }

    fn set_id(&mut self, id: RecordId) {
        self.id = id;
    }
}

/// Entities that own at most one blob through a `file_id` reference
///
/// `UNASSIGNED_ID` means no attachment.
pub trait Attachable: StorageEntity {
    fn file_id(&self) -> RecordId;

    fn set_file_id(&mut self, file_id: RecordId);

    fn has_file(&self) -> bool {
        self.file_id() != UNASSIGNED_ID
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blob_creation() {
        let blob = Blob::new("cv.pdf", vec![1, 2, 3]);

        assert_eq!(blob.id(), UNASSIGNED_ID);
        assert_eq!(blob.name(), "cv.pdf");
        assert_eq!(blob.content(), &[1, 2, 3]);
        assert!(!blob.is_empty());
    }

    #[test]
    fn test_empty_blob() {
        let blob = Blob::empty();
        assert!(blob.is_empty());

        let named = Blob::new("photo.png", Vec::new());
        assert!(named.is_empty());
    }
}
