//! Domain layer - Core business entities and store contracts

pub mod candidate;
pub mod city;
pub mod error;
pub mod file;
pub mod storage;
pub mod user;
pub mod vacancy;

use chrono::{Local, NaiveDateTime, SubsecRound};

pub use candidate::{example_candidates, Candidate};
pub use city::{example_cities, City, CityRepository};
pub use error::DomainError;
pub use file::{Attachable, Blob, BlobStore};
pub use storage::{EntityStore, RecordId, StorageEntity, UNASSIGNED_ID};
pub use user::{User, UserRepository};
pub use vacancy::{example_vacancies, Vacancy};

/// Current local time truncated to whole seconds
pub fn timestamp_now() -> NaiveDateTime {
    Local::now().naive_local().trunc_subsecs(0)
}
