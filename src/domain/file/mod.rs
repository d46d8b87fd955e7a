//! File domain module
//!
//! Uploaded attachments (photos, CV documents) are kept as blobs in their own
//! store. Business entities point at a blob through their `file_id`.

mod entity;
mod repository;

pub use entity::{Attachable, Blob};
pub use repository::BlobStore;

#[cfg(test)]
pub use repository::MockBlobStore;
