//! Recruiting board backend
//!
//! Keeps candidates and vacancies in keyed entity stores and pairs each
//! record with its uploaded file:
//! - Entity stores with atomic id issue and conditional update/delete
//! - A blob store for attachments
//! - A coordinator tying an entity's file to its lifecycle
//! - In-memory and PostgreSQL backends behind the same contracts

pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod state;

pub use config::AppConfig;
pub use state::AppState;

use std::sync::Arc;

use domain::{example_candidates, example_vacancies, Candidate, Vacancy};
use infrastructure::{
    attachment::{CandidateService, VacancyService},
    city::InMemoryCityRepository,
    storage::StorageFactory,
};
use tracing::info;

/// Create the application state with the default configuration
pub async fn create_app_state() -> anyhow::Result<AppState> {
    create_app_state_with_config(&AppConfig::default()).await
}

/// Create the application state with custom configuration
pub async fn create_app_state_with_config(config: &AppConfig) -> anyhow::Result<AppState> {
    let storage_config = config.storage.storage_config()?;
    let factory = StorageFactory::connect(&storage_config).await?;

    let (candidate_seed, vacancy_seed): (Vec<Candidate>, Vec<Vacancy>) = if config.storage.seed {
        (example_candidates(), example_vacancies())
    } else {
        (Vec::new(), Vec::new())
    };

    let file_store = factory.blob_store("files").await?;
    let candidates = factory.entity_store("candidates", candidate_seed).await?;
    let vacancies = factory.entity_store("vacancies", vacancy_seed).await?;
    let user_repository = factory.user_repository().await?;

    info!(
        storage_type = ?storage_config.storage_type(),
        seeded = config.storage.seed,
        "Application state created"
    );

    Ok(AppState {
        candidate_service: Arc::new(CandidateService::new(candidates, file_store.clone())),
        vacancy_service: Arc::new(VacancyService::new(vacancies, file_store.clone())),
        file_store,
        user_repository,
        city_repository: Arc::new(InMemoryCityRepository::new()),
    })
}
