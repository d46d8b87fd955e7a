//! Candidate entity

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::file::Attachable;
use crate::domain::storage::{RecordId, StorageEntity, UNASSIGNED_ID};
use crate::domain::timestamp_now;

/// Candidate entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    /// Store-issued id
    id: RecordId,
    /// Candidate's name
    name: String,
    /// Free-form résumé text
    description: String,
    /// Posting time, second precision
    creation_date: NaiveDateTime,
    /// City the candidate lives in
    city_id: RecordId,
    /// Attached file, `UNASSIGNED_ID` when none
    file_id: RecordId,
}

impl Candidate {
    /// Create an unsaved candidate stamped with the current time
    pub fn new(name: impl Into<String>, description: impl Into<String>, city_id: RecordId) -> Self {
        Self {
            id: UNASSIGNED_ID,
            name: name.into(),
            description: description.into(),
            creation_date: timestamp_now(),
            city_id,
            file_id: UNASSIGNED_ID,
        }
    }

    /// Target an existing record (builder pattern)
    pub fn with_id(mut self, id: RecordId) -> Self {
        self.id = id;
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

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn creation_date(&self) -> NaiveDateTime {
        self.creation_date
    }

    pub fn city_id(&self) -> RecordId {
        self.city_id
    }

    // Mutators

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    pub fn set_city_id(&mut self, city_id: RecordId) {
        self.city_id = city_id;
    }
}

impl StorageEntity for Candidate {
    const KIND: &'static str = "candidate";

    fn id(&self) -> RecordId {
        self.id
    }

    fn set_id(&mut self, id: RecordId) {
        self.id = id;
    }
}

impl Attachable for Candidate {
    fn file_id(&self) -> RecordId {
        self.file_id
    }

    fn set_file_id(&mut self, file_id: RecordId) {
        self.file_id = file_id;
    }
}
