//! User domain module
//!
//! Accounts of people who post vacancies and résumés. The e-mail address is
//! unique across the store; a second account with the same e-mail is
//! rejected by `save` answering `None`.

mod entity;
mod repository;

pub use entity::User;
pub use repository::UserRepository;
