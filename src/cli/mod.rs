//! CLI module for the recruiting board
//!
//! Composes a board from configuration and prints what it holds:
//! - `candidates`: list résumés
//! - `vacancies`: list job postings
//! - `cities`: list the city catalogue
//! - `show`: one record with its attached file

pub mod inspect;

use clap::{Parser, Subcommand, ValueEnum};

/// Recruiting board - candidates, vacancies and their attachments
#[derive(Parser)]
#[command(name = "recruiting-board")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// List candidates
    Candidates,

    /// List vacancies
    Vacancies {
        /// Only list publicly visible postings
        #[arg(long)]
        visible_only: bool,
    },

    /// List cities
    Cities,

    /// Show a single record and its attached file
    Show {
        #[arg(value_enum)]
        kind: RecordKind,
        id: u64,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RecordKind {
    Candidate,
    Vacancy,
}
