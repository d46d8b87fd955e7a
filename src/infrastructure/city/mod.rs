//! City infrastructure implementations

mod repository;

pub use repository::InMemoryCityRepository;
