//! Storage infrastructure - Store implementations

mod factory;
mod in_memory;
mod postgres;
mod postgres_blob;

pub use factory::{StorageConfig, StorageFactory, StorageType};
pub use in_memory::{InMemoryBlobStore, InMemoryStorage};
pub use postgres::{PostgresConfig, PostgresStorage};
pub use postgres_blob::PostgresBlobStore;

pub(crate) use postgres::record_id;
