//! PostgreSQL storage implementation with connection pooling

use std::fmt::Debug;
use std::marker::PhantomData;

use async_trait::async_trait;
use sqlx::postgres::{PgPool, PgPoolOptions, PgRow};
use sqlx::Row;
use tracing::debug;

use crate::domain::storage::{EntityStore, RecordId, StorageEntity, UNASSIGNED_ID};
use crate::domain::DomainError;

/// Connection pool settings for the PostgreSQL backend
#[derive(Debug, Clone)]
pub struct PostgresConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    /// Seconds to wait for a free connection
    pub acquire_timeout_secs: u64,
    pub idle_timeout_secs: u64,
}

impl PostgresConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            max_connections: 10,
            min_connections: 1,
            acquire_timeout_secs: 30,
            idle_timeout_secs: 600,
        }
    }

    pub fn with_max_connections(mut self, max: u32) -> Self {
        self.max_connections = max;
        self
    }

    /// Opens a connection pool shared by all stores of one board
    pub async fn connect(&self) -> Result<PgPool, DomainError> {
        PgPoolOptions::new()
            .max_connections(self.max_connections)
            .min_connections(self.min_connections)
            .acquire_timeout(std::time::Duration::from_secs(self.acquire_timeout_secs))
            .idle_timeout(std::time::Duration::from_secs(self.idle_timeout_secs))
            .connect(&self.url)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to connect to PostgreSQL: {}", e)))
    }
}

/// Converts a store id into the BIGINT key space.
///
/// Ids beyond `i64::MAX` cannot have been issued by the database, so callers
/// treat `None` as "no such record".
pub(crate) fn db_id(id: RecordId) -> Option<i64> {
    i64::try_from(id).ok()
}

/// Converts a BIGSERIAL value read back from the database into a store id
pub(crate) fn record_id(raw: i64) -> Result<RecordId, DomainError> {
    RecordId::try_from(raw)
        .map_err(|_| DomainError::internal(format!("Database returned negative id {}", raw)))
}

/// Rejects table names that would need quoting; names are interpolated into SQL
pub(crate) fn validate_table_name(name: &str) -> Result<(), DomainError> {
    let valid = !name.is_empty()
        && name.len() <= 63
        && name
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_lowercase() || c == '_')
        && name
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_');

    if valid {
        Ok(())
    } else {
        Err(DomainError::configuration(format!(
            "Invalid table name '{}'",
            name
        )))
    }
}

/// Rebuilds an entity from its JSON document; the id column is authoritative
pub(crate) fn decode_entity<E: StorageEntity>(
    raw_id: i64,
    data: serde_json::Value,
) -> Result<E, DomainError> {
    let mut entity: E = serde_json::from_value(data)
        .map_err(|e| DomainError::storage(format!("Failed to deserialize {}: {}", E::KIND, e)))?;
    entity.set_id(record_id(raw_id)?);
    Ok(entity)
}

fn encode_entity<E: StorageEntity>(entity: &E) -> Result<serde_json::Value, DomainError> {
    serde_json::to_value(entity)
        .map_err(|e| DomainError::storage(format!("Failed to serialize {}: {}", E::KIND, e)))
}

/// PostgreSQL entity store
///
/// Stores entities as JSON in a table with (id, data, created_at) columns.
/// Ids come from the table's BIGSERIAL sequence, which gives the same
/// monotonic never-reused guarantee as the in-memory counter.
pub struct PostgresStorage<E>
where
    E: StorageEntity,
{
    pool: PgPool,
    table_name: String,
    _phantom: PhantomData<E>,
}

impl<E> Debug for PostgresStorage<E>
where
    E: StorageEntity,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PostgresStorage")
            .field("table_name", &self.table_name)
            .finish()
    }
}

impl<E> PostgresStorage<E>
where
    E: StorageEntity,
{
    /// Creates a new PostgreSQL store over an existing pool
    pub fn new(pool: PgPool, table_name: impl Into<String>) -> Result<Self, DomainError> {
        let table_name = table_name.into();
        validate_table_name(&table_name)?;

        Ok(Self {
            pool,
            table_name,
            _phantom: PhantomData,
        })
    }

    /// Ensures the storage table exists
    pub async fn ensure_table(&self) -> Result<(), DomainError> {
        let query = format!(
            r#"
            CREATE TABLE IF NOT EXISTS {} (
                id BIGSERIAL PRIMARY KEY,
                data JSONB NOT NULL,
                created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
            )
            "#,
            self.table_name
        );

        sqlx::query(&query)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to create table: {}", e)))?;

        Ok(())
    }

    fn row_to_entity(row: &PgRow) -> Result<E, DomainError> {
        let id: i64 = row
            .try_get("id")
            .map_err(|e| DomainError::storage(format!("Failed to read id: {}", e)))?;
        let data: serde_json::Value = row
            .try_get("data")
            .map_err(|e| DomainError::storage(format!("Failed to read data: {}", e)))?;

        decode_entity(id, data)
    }
}

#[async_trait]
impl<E> EntityStore<E> for PostgresStorage<E>
where
    E: StorageEntity + 'static,
{
    async fn save(&self, mut entity: E) -> Result<E, DomainError> {
        entity.set_id(UNASSIGNED_ID);
        let data = encode_entity(&entity)?;

        let query = format!(
            "INSERT INTO {} (data) VALUES ($1) RETURNING id",
            self.table_name
        );

        let raw_id: i64 = sqlx::query_scalar(&query)
            .bind(&data)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to save {}: {}", E::KIND, e)))?;

        entity.set_id(record_id(raw_id)?);
        debug!(kind = E::KIND, id = entity.id(), "Saved record");

        Ok(entity)
    }

    async fn update(&self, entity: E) -> Result<bool, DomainError> {
        let Some(id) = db_id(entity.id()) else {
            return Ok(false);
        };
        let data = encode_entity(&entity)?;

        let query = format!("UPDATE {} SET data = $2 WHERE id = $1", self.table_name);

        let result = sqlx::query(&query)
            .bind(id)
            .bind(&data)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to update {}: {}", E::KIND, e)))?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_by_id(&self, id: RecordId) -> Result<bool, DomainError> {
        let Some(id) = db_id(id) else {
            return Ok(false);
        };

        let query = format!("DELETE FROM {} WHERE id = $1", self.table_name);

        let result = sqlx::query(&query)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to delete {}: {}", E::KIND, e)))?;

        Ok(result.rows_affected() > 0)
    }

    async fn find_by_id(&self, id: RecordId) -> Result<Option<E>, DomainError> {
        let Some(id) = db_id(id) else {
            return Ok(None);
        };

        let query = format!("SELECT id, data FROM {} WHERE id = $1", self.table_name);

        let row = sqlx::query(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to get {}: {}", E::KIND, e)))?;

        row.as_ref().map(Self::row_to_entity).transpose()
    }

    async fn find_all(&self) -> Result<Vec<E>, DomainError> {
        let query = format!("SELECT id, data FROM {} ORDER BY id", self.table_name);

        let rows = sqlx::query(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to list {}: {}", E::KIND, e)))?;

        rows.iter().map(Self::row_to_entity).collect()
    }

    async fn count(&self) -> Result<usize, DomainError> {
        let query = format!("SELECT COUNT(*) FROM {}", self.table_name);

        let count: i64 = sqlx::query_scalar(&query)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to count {}: {}", E::KIND, e)))?;

        Ok(usize::try_from(count).unwrap_or_default())
    }
}
