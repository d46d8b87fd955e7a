//! Inspection commands - compose a board and print its contents as JSON

use serde::Serialize;
use serde_json::{json, Value};

use super::{Command, RecordKind};
use crate::config::AppConfig;
use crate::domain::{Attachable, Blob, DomainError, StorageEntity, Vacancy};
use crate::infrastructure::attachment::AttachmentService;
use crate::infrastructure::logging;
use crate::AppState;

/// Run an inspection command against a freshly composed board
pub async fn run(command: Command) -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load()?;
    logging::init_logging(&config.logging);

    let state = crate::create_app_state_with_config(&config).await?;
    let output = render(&state, command).await?;

    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}

async fn render(state: &AppState, command: Command) -> Result<Value, DomainError> {
    match command {
        Command::Candidates => {
            let candidates = state.candidate_service.find_all().await?;
            to_json(sorted_by_id(candidates))
        }
        Command::Vacancies { visible_only } => {
            let vacancies = state.vacancy_service.find_all().await?;
            to_json(sorted_by_id(filter_visible(vacancies, visible_only)))
        }
        Command::Cities => to_json(state.city_repository.find_all().await?),
        Command::Show { kind, id } => match kind {
            RecordKind::Candidate => show(&state.candidate_service, id).await,
            RecordKind::Vacancy => show(&state.vacancy_service, id).await,
        },
    }
}

async fn show<E>(service: &AttachmentService<E>, id: u64) -> Result<Value, DomainError>
where
    E: Attachable + 'static,
{
    let record = service
        .find_by_id(id)
        .await?
        .ok_or_else(|| DomainError::not_found(format!("{} '{}' not found", E::KIND, id)))?;

    let file = if record.has_file() {
        service.file_by_id(record.file_id()).await?
    } else {
        None
    };

    Ok(json!({
        "record": to_json(&record)?,
        "file": file.as_ref().map(file_summary),
    }))
}

fn file_summary(file: &Blob) -> Value {
    json!({
        "id": file.id(),
        "name": file.name(),
        "size": file.content().len(),
    })
}

fn sorted_by_id<E: StorageEntity>(mut records: Vec<E>) -> Vec<E> {
    records.sort_by_key(|r| r.id());
    records
}

fn filter_visible(vacancies: Vec<Vacancy>, visible_only: bool) -> Vec<Vacancy> {
    if visible_only {
        vacancies.into_iter().filter(|v| v.is_visible()).collect()
    } else {
        vacancies
    }
}

fn to_json(value: impl Serialize) -> Result<Value, DomainError> {
    serde_json::to_value(value)
        .map_err(|e| DomainError::internal(format!("Failed to render output: {}", e)))
}
