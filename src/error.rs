//! Crate-level error type.

use thiserror::Error;

use crate::validation::ValidationError;

/// Errors reported by the planner.
///
/// Every variant is raised before or between generations; a running
/// generation never fails halfway.
#[derive(Error, Debug)]
pub enum TaktError {
    #[error("Invalid optimizer configuration: {}", join(.0))]
    InvalidConfig(Vec<ValidationError>),

    #[error("Invalid project input: {}", join(.0))]
    InvalidProject(Vec<ValidationError>),

    #[error("Invalid fitness model: {}", join(.0))]
    InvalidFitnessModel(Vec<ValidationError>),

    #[error("Tournament of {tournament_size} cannot be drawn from a population of {population_size}")]
    TournamentTooLarge {
        tournament_size: usize,
        population_size: usize,
    },

    #[error("Optimizer has no population yet; call initialize() first")]
    NotInitialized,

    #[error("Configuration parse error: {0}")]
    Config(#[from] serde_json::Error),
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, TaktError>;

fn join(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
