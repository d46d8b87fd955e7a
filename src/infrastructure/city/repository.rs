//! In-memory city catalogue

use async_trait::async_trait;

use crate::domain::storage::RecordId;
use crate::domain::{example_cities, City, CityRepository, DomainError};

/// Fixed, read-only city list
#[derive(Debug, Clone)]
pub struct InMemoryCityRepository {
    cities: Vec<City>,
}

impl Default for InMemoryCityRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryCityRepository {
    /// Catalogue holding the built-in cities
    pub fn new() -> Self {
        Self::with_cities(example_cities())
    }

    pub fn with_cities(cities: Vec<City>) -> Self {
        Self { cities }
    }
}

#[async_trait]
impl CityRepository for InMemoryCityRepository {
    async fn find_all(&self) -> Result<Vec<City>, DomainError> {
        Ok(self.cities.clone())
    }

    async fn find_by_id(&self, id: RecordId) -> Result<Option<City>, DomainError> {
        Ok(self.cities.iter().find(|c| c.id() == id).cloned())
    }
}
