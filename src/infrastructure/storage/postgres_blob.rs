//! PostgreSQL blob store

use async_trait::async_trait;
use sqlx::postgres::{PgPool, PgRow};
use sqlx::Row;
use tracing::debug;

use super::postgres::{db_id, record_id, validate_table_name};
use crate::domain::storage::{RecordId, StorageEntity};
use crate::domain::{Blob, BlobStore, DomainError};

/// Blob store keeping file content in a BYTEA column
#[derive(Debug, Clone)]
pub struct PostgresBlobStore {
    pool: PgPool,
    table_name: String,
}

impl PostgresBlobStore {
    pub fn new(pool: PgPool, table_name: impl Into<String>) -> Result<Self, DomainError> {
        let table_name = table_name.into();
        validate_table_name(&table_name)?;

        Ok(Self { pool, table_name })
    }

    /// Ensures the files table exists
    pub async fn ensure_table(&self) -> Result<(), DomainError> {
        let query = format!(
            r#"
            CREATE TABLE IF NOT EXISTS {} (
                id BIGSERIAL PRIMARY KEY,
                name TEXT NOT NULL,
                content BYTEA NOT NULL
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
}

fn row_to_blob(row: &PgRow) -> Result<Blob, DomainError> {
    let id: i64 = row
        .try_get("id")
        .map_err(|e| DomainError::storage(format!("Failed to read id: {}", e)))?;
    let name: String = row
        .try_get("name")
        .map_err(|e| DomainError::storage(format!("Failed to read name: {}", e)))?;
    let content: Vec<u8> = row
        .try_get("content")
        .map_err(|e| DomainError::storage(format!("Failed to read content: {}", e)))?;

    let mut blob = Blob::new(name, content);
    blob.set_id(record_id(id)?);
    Ok(blob)
}

#[async_trait]
impl BlobStore for PostgresBlobStore {
    async fn save(&self, mut blob: Blob) -> Result<Blob, DomainError> {
        let query = format!(
            "INSERT INTO {} (name, content) VALUES ($1, $2) RETURNING id",
            self.table_name
        );

        let raw_id: i64 = sqlx::query_scalar(&query)
            .bind(blob.name())
            .bind(blob.content())
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to save file: {}", e)))?;

        blob.set_id(record_id(raw_id)?);
        debug!(id = blob.id(), name = %blob.name(), "Saved file");

        Ok(blob)
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
            .map_err(|e| DomainError::storage(format!("Failed to delete file: {}", e)))?;

        Ok(result.rows_affected() > 0)
    }

    async fn find_by_id(&self, id: RecordId) -> Result<Option<Blob>, DomainError> {
        let Some(id) = db_id(id) else {
            return Ok(None);
        };

        let query = format!(
            "SELECT id, name, content FROM {} WHERE id = $1",
            self.table_name
        );

        let row = sqlx::query(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to get file: {}", e)))?;

        row.as_ref().map(row_to_blob).transpose()
    }
}
