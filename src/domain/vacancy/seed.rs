//! Demo vacancies pre-loaded into a fresh in-memory board

use super::entity::Vacancy;

/// Example postings, in the order they are saved (ids 1..=6)
pub fn example_vacancies() -> Vec<Vacancy> {
    vec![
        Vacancy::new("Intern Java Developer", "We pay nothing, you get experience", 1),
        Vacancy::new("Junior Java Developer", "You work for some food and experience", 2),
        Vacancy::new("Junior+ Java Developer", "You work for food, cookies and experience", 3),
        Vacancy::new("Middle Java Developer", "You work for salary, food and experience", 1),
        Vacancy::new("Middle+ Java Developer", "Description is not available here", 2)
            .with_visible(false),
        Vacancy::new("Senior Java Developer", "Don't even call us", 1).with_visible(false),
    ]
}
