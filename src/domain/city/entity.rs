//! City entity

use serde::{Deserialize, Serialize};

use crate::domain::storage::RecordId;

/// A city candidates and vacancies can be located in
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct City {
    id: RecordId,
    name: String,
}

impl City {
    pub fn new(id: RecordId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    pub fn id(&self) -> RecordId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// The fixed city catalogue
pub fn example_cities() -> Vec<City> {
    vec![
        City::new(1, "Moscow"),
        City::new(2, "Saint Petersburg"),
        City::new(3, "Yekaterinburg"),
    ]
}
