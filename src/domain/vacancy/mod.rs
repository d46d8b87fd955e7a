//! Vacancy domain module
//!
//! A vacancy is a job posting, optionally illustrated by an uploaded image.

mod entity;
mod seed;

pub use entity::Vacancy;
pub use seed::example_vacancies;
