//! City domain module

mod entity;
mod repository;

pub use entity::{example_cities, City};
pub use repository::CityRepository;
