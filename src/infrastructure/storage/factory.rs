//! Storage factory for runtime storage selection

use std::sync::Arc;

use sqlx::postgres::PgPool;
use tracing::info;

use crate::domain::storage::{EntityStore, StorageEntity};
use crate::domain::{BlobStore, DomainError, UserRepository};
use crate::infrastructure::user::{InMemoryUserRepository, PostgresUserRepository};

use super::in_memory::{InMemoryBlobStore, InMemoryStorage};
use super::postgres::{PostgresConfig, PostgresStorage};
use super::postgres_blob::PostgresBlobStore;

/// Supported storage types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageType {
    /// In-memory storage, volatile
    InMemory,
    /// PostgreSQL storage
    Postgres,
}

impl StorageType {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "memory" | "inmemory" | "in-memory" | "in_memory" => Some(Self::InMemory),
            "postgres" | "postgresql" | "pg" => Some(Self::Postgres),
            _ => None,
        }
    }

    /// Like [`StorageType::from_str`], reporting unknown names as a configuration error
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        Self::from_str(s).ok_or_else(|| {
            DomainError::configuration(format!("Unknown storage backend '{}'", s))
        })
    }
}

/// Storage configuration
#[derive(Debug, Clone)]
pub enum StorageConfig {
    /// In-memory storage configuration
    InMemory,
    /// PostgreSQL storage configuration
    Postgres(PostgresConfig),
}

impl StorageConfig {
    /// Creates an in-memory storage configuration
    pub fn in_memory() -> Self {
        Self::InMemory
    }

    /// Creates a PostgreSQL storage configuration
    pub fn postgres(config: PostgresConfig) -> Self {
        Self::Postgres(config)
    }

    /// Creates a PostgreSQL configuration from a URL
    pub fn postgres_url(url: impl Into<String>) -> Self {
        Self::Postgres(PostgresConfig::new(url))
    }

    /// Returns the storage type
    pub fn storage_type(&self) -> StorageType {
        match self {
            Self::InMemory => StorageType::InMemory,
            Self::Postgres(_) => StorageType::Postgres,
        }
    }
}

#[derive(Debug)]
enum Backend {
    InMemory,
    Postgres(PgPool),
}

/// Factory for creating the stores of one board
///
/// All stores built by one factory share its backend; for PostgreSQL that
/// means one connection pool.
#[derive(Debug)]
pub struct StorageFactory {
    backend: Backend,
}

impl StorageFactory {
    /// Prepares the backend described by the configuration
    pub async fn connect(config: &StorageConfig) -> Result<Self, DomainError> {
        let backend = match config {
            StorageConfig::InMemory => Backend::InMemory,
            StorageConfig::Postgres(pg_config) => Backend::Postgres(pg_config.connect().await?),
        };

        info!(storage_type = ?config.storage_type(), "Storage backend ready");

        Ok(Self { backend })
    }

    /// Creates a factory for volatile in-memory stores
    pub fn in_memory() -> Self {
        Self {
            backend: Backend::InMemory,
        }
    }

    /// Creates an entity store.
    ///
    /// `seed` is loaded through the save path only by the in-memory backend;
    /// a database keeps whatever it already holds.
    pub async fn entity_store<E>(
        &self,
        table_name: &str,
        seed: impl IntoIterator<Item = E>,
    ) -> Result<Arc<dyn EntityStore<E>>, DomainError>
    where
        E: StorageEntity + 'static,
    {
        match &self.backend {
            Backend::InMemory => Ok(Arc::new(InMemoryStorage::seeded(seed))),
            Backend::Postgres(pool) => {
                let storage = PostgresStorage::<E>::new(pool.clone(), table_name)?;
                storage.ensure_table().await?;
                Ok(Arc::new(storage))
            }
        }
    }

    /// Creates the blob store
    pub async fn blob_store(&self, table_name: &str) -> Result<Arc<dyn BlobStore>, DomainError> {
        match &self.backend {
            Backend::InMemory => Ok(Arc::new(InMemoryBlobStore::new())),
            Backend::Postgres(pool) => {
                let store = PostgresBlobStore::new(pool.clone(), table_name)?;
                store.ensure_table().await?;
                Ok(Arc::new(store))
            }
        }
    }

    /// Creates the user account repository
    pub async fn user_repository(&self) -> Result<Arc<dyn UserRepository>, DomainError> {
        match &self.backend {
            Backend::InMemory => Ok(Arc::new(InMemoryUserRepository::new())),
            Backend::Postgres(pool) => {
                let repository = PostgresUserRepository::new(pool.clone());
                repository.ensure_table().await?;
                Ok(Arc::new(repository))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{example_candidates, Blob, Candidate, User};

    #[test]
    fn test_storage_type_from_str() {
        assert_eq!(
            StorageType::from_str("memory"),
            Some(StorageType::InMemory)
        );
        assert_eq!(
            StorageType::from_str("In-Memory"),
            Some(StorageType::InMemory)
        );
        assert_eq!(
            StorageType::from_str("postgres"),
            Some(StorageType::Postgres)
        );
        assert_eq!(StorageType::from_str("pg"), Some(StorageType::Postgres));
        assert_eq!(StorageType::from_str("unknown"), None);
    }

    #[test]
    fn test_storage_type_parse_unknown() {
        let result = StorageType::parse("redis");
        assert!(matches!(result, Err(DomainError::Configuration { .. })));
    }

    #[test]
    fn test_storage_config_types() {
        let in_memory = StorageConfig::in_memory();
        assert_eq!(in_memory.storage_type(), StorageType::InMemory);

        let postgres = StorageConfig::postgres_url("postgres://localhost/test");
        assert_eq!(postgres.storage_type(), StorageType::Postgres);
    }

    #[tokio::test]
    async fn test_in_memory_factory_seeds_entity_store() {
        let factory = StorageFactory::connect(&StorageConfig::in_memory())
            .await
            .unwrap();

        let seeded = factory
            .entity_store("candidates", example_candidates())
            .await
            .unwrap();
        let empty = factory
            .entity_store("candidates", Vec::<Candidate>::new())
            .await
            .unwrap();

        assert_eq!(seeded.count().await.unwrap(), 5);
        assert_eq!(empty.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_in_memory_factory_builds_independent_stores() {
        let factory = StorageFactory::in_memory();

        let files = factory.blob_store("files").await.unwrap();
        let users = factory.user_repository().await.unwrap();

        let blob = files.save(Blob::new("a.txt", vec![1u8])).await.unwrap();
        let user = users
            .save(User::new("a@example.com", "A", "pw"))
            .await
            .unwrap()
            .unwrap();

        // Each store runs its own id counter
        assert_eq!(blob.id(), 1);
        assert_eq!(user.id(), 1);
    }
}
