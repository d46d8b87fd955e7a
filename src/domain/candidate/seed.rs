//! Demo candidates pre-loaded into a fresh in-memory board

use super::entity::Candidate;

/// Example résumés, in the order they are saved (ids 1..=5)
pub fn example_candidates() -> Vec<Candidate> {
    vec![
        Candidate::new("Tom", "smart, knows some SQL", 1),
        Candidate::new("Jerry", "not smart, likes cheese and Golang", 1),
        Candidate::new("Woodie", "nice, but too loud; uses C++", 2),
        Candidate::new("Piggie", "is a small piglet; enjoys Assembler", 2),
        Candidate::new("Minnie", "is a small mouse that codes in Java", 3),
    ]
}
