//! Storage domain - Generic keyed entity store abstraction

mod entity;
mod repository;

pub use entity::{RecordId, StorageEntity, UNASSIGNED_ID};
pub use repository::EntityStore;
