//! Vacancy entity

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::file::Attachable;
use crate::domain::storage::{RecordId, StorageEntity, UNASSIGNED_ID};
use crate::domain::timestamp_now;

/// Vacancy entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vacancy {
    /// Store-issued id
    id: RecordId,
    /// Position title
    title: String,
    /// Posting body
    description: String,
    /// Posting time, second precision
    creation_date: NaiveDateTime,
    /// Whether the posting is listed publicly
    visible: bool,
    /// City the position is located in
    city_id: RecordId,
    /// Attached image, `UNASSIGNED_ID` when none
    file_id: RecordId,
}

impl Vacancy {
    /// Create an unsaved, visible vacancy stamped with the current time
    pub fn new(title: impl Into<String>, description: impl Into<String>, city_id: RecordId) -> Self {
        Self {
            id: UNASSIGNED_ID,
            title: title.into(),
            description: description.into(),
            creation_date: timestamp_now(),
            visible: true,
            city_id,
            file_id: UNASSIGNED_ID,
        }
    }

    /// Target an existing record (builder pattern)
    pub fn with_id(mut self, id: RecordId) -> Self {
        self.id = id;
        self
    }

    /// Set visibility (builder pattern)
    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    /// Set the attached file (builder pattern)
    pub fn with_file_id(mut self, file_id: RecordId) -> Self {
        self.file_id = file_id;
        self
    }

    /// Set the creation date (builder pattern)
    pub fn with_creation_date(mut self, creation_date: NaiveDateTime) -> Self {
        self.creation_date = creation_date;
        self
    }

    // Getters

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn creation_date(&self) -> NaiveDateTime {
        self.creation_date
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn city_id(&self) -> RecordId {
        self.city_id
    }

    // Mutators

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    pub fn set_city_id(&mut self, city_id: RecordId) {
        self.city_id = city_id;
    }
}

impl StorageEntity for Vacancy {
    const KIND: &'static str = "vacancy";

    fn id(&self) -> RecordId {
        self.id
    }

    fn set_id(&mut self, id: RecordId) {
        self.id = id;
    }
}

impl Attachable for Vacancy {
    fn file_id(&self) -> RecordId {
        self.file_id
    }

    fn set_file_id(&mut self, file_id: RecordId) {
        self.file_id = file_id;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vacancy_defaults() {
        let vacancy = Vacancy::new("Junior Rust Developer", "Ferris is waiting", 2);

        assert_eq!(vacancy.id(), UNASSIGNED_ID);
        assert_eq!(vacancy.title(), "Junior Rust Developer");
        assert!(vacancy.is_visible());
        assert_eq!(vacancy.city_id(), 2);
        assert!(!vacancy.has_file());
    }

    #[test]
    fn test_vacancy_mutators() {
        let mut vacancy = Vacancy::new("Intern", "No pay", 1);

        vacancy.set_title("Senior");
        vacancy.set_visible(false);
        vacancy.set_city_id(3);
        vacancy.set_file_id(5);

        assert_eq!(vacancy.title(), "Senior");
        assert!(!vacancy.is_visible());
        assert_eq!(vacancy.city_id(), 3);
        assert_eq!(vacancy.file_id(), 5);
    }

    #[test]
    fn test_example_vacancies() {
        let vacancies = crate::domain::vacancy::example_vacancies();

        assert_eq!(vacancies.len(), 6);
        assert_eq!(vacancies.iter().filter(|v| !v.is_visible()).count(), 2);
        assert!(vacancies.iter().all(|v| !v.is_assigned()));
    }
}
