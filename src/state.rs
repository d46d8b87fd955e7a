//! Application state for shared services

use std::sync::Arc;

use crate::domain::{BlobStore, CityRepository, UserRepository};
use crate::infrastructure::attachment::{CandidateService, VacancyService};

/// Handles to the board's stores and services
///
/// Built once by the composition root and cloned into whatever serves
/// requests. Candidates and vacancies share one blob store.
#[derive(Clone)]
pub struct AppState {
    pub candidate_service: Arc<CandidateService>,
    pub vacancy_service: Arc<VacancyService>,
    pub file_store: Arc<dyn BlobStore>,
    pub user_repository: Arc<dyn UserRepository>,
    pub city_repository: Arc<dyn CityRepository>,
}
