//! City repository trait

use async_trait::async_trait;
use std::fmt::Debug;

use super::entity::City;
use crate::domain::storage::RecordId;
use crate::domain::DomainError;

/// Read-only city catalogue
#[async_trait]
pub trait CityRepository: Send + Sync + Debug {
    async fn find_all(&self) -> Result<Vec<City>, DomainError>;

    async fn find_by_id(&self, id: RecordId) -> Result<Option<City>, DomainError>;
}
