//! Attachment lifecycle coordination

mod service;

pub use service::{AttachmentService, CandidateService, VacancyService};
