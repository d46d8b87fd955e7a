//! Candidate domain module
//!
//! A candidate is a résumé posted to the board, optionally carrying an
//! uploaded photo or CV document.

mod entity;
mod seed;

pub use entity::Candidate;
pub use seed::example_candidates;
