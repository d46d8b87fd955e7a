//! PostgreSQL user repository implementation

use async_trait::async_trait;
use sqlx::{PgPool, Row};
use tracing::warn;

use crate::domain::{DomainError, User, UserRepository};
use crate::infrastructure::storage::record_id;

/// PostgreSQL implementation of UserRepository
///
/// The unique index on `email` is the source of truth for duplicate
/// detection; a violation surfaces as `Ok(None)`, never as an error.
#[derive(Debug, Clone)]
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    /// Create a new repository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Ensures the users table exists
    pub async fn ensure_table(&self) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS users (
                id BIGSERIAL PRIMARY KEY,
                email VARCHAR(255) NOT NULL UNIQUE,
                name VARCHAR(255) NOT NULL,
                password VARCHAR(255) NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to create users table: {}", e)))?;

        Ok(())
    }
}

fn is_unique_violation(error: &sqlx::Error) -> bool {
    error
        .as_database_error()
        .is_some_and(|db| db.is_unique_violation())
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn save(&self, mut user: User) -> Result<Option<User>, DomainError> {
        let result = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO users (email, name, password)
            VALUES ($1, $2, $3)
            RETURNING id
            "#,
        )
        .bind(user.email())
        .bind(user.name())
        .bind(user.password())
        .fetch_one(&self.pool)
        .await;

        match result {
            Ok(raw_id) => {
                user.set_id(record_id(raw_id)?);
                Ok(Some(user))
            }
            Err(e) if is_unique_violation(&e) => {
                warn!(email = %user.email(), "E-mail is already registered");
                Ok(None)
            }
            Err(e) => Err(DomainError::storage(format!("Failed to save user: {}", e))),
        }
    }

    async fn find_by_email_and_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<User>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, email, name, password
            FROM users
            WHERE email = $1 AND password = $2
            "#,
        )
        .bind(email)
        .bind(password)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to find user: {}", e)))?;

        row.as_ref().map(row_to_user).transpose()
    }

    async fn delete_all(&self) -> Result<(), DomainError> {
        sqlx::query("DELETE FROM users")
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to delete users: {}", e)))?;

        Ok(())
    }
}

fn row_to_user(row: &sqlx::postgres::PgRow) -> Result<User, DomainError> {
    let read = |e: sqlx::Error| DomainError::storage(format!("Failed to read user row: {}", e));

    let id: i64 = row.try_get("id").map_err(read)?;
    let email: String = row.try_get("email").map_err(read)?;
    let name: String = row.try_get("name").map_err(read)?;
    let password: String = row.try_get("password").map_err(read)?;

    Ok(User::restore(record_id(id)?, email, name, password))
}
