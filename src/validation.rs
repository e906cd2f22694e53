//! Input validation for takt planning.
//!
//! Checks project input and optimizer configuration before any generation
//! runs. Detects:
//! - Projects with no floors or no work items
//! - Duplicate floor or work-item IDs
//! - Structurally impossible GA parameters (tournament larger than the
//!   population, elites exceeding the population, rates outside [0, 1])
//! - Parameters outside the ranges accepted from external callers
//! - Fitness weights that do not sum to 1
//!
//! Values are never clamped here; every problem is reported.

use std::collections::HashSet;

use thiserror::Error;

use crate::ga::{FitnessModel, FitnessWeights, OptimizerConfig};
use crate::models::ProjectInput;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{message}")]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// The project has no floors.
    NoFloors,
    /// The project has no work-item types.
    NoWorkItems,
    /// Two entities share the same ID.
    DuplicateId,
    /// A numeric parameter is outside its allowed range.
    OutOfRange,
    /// Fitness weights do not sum to 1.
    WeightSum,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    fn out_of_range(message: impl Into<String>) -> Self {
        Self::new(ValidationErrorKind::OutOfRange, message)
    }
}

/// Collaborator-facing bounds for run overrides.
pub const POPULATION_SIZE_RANGE: (usize, usize) = (10, 500);
/// Collaborator-facing bounds for the generation budget.
pub const GENERATIONS_RANGE: (usize, usize) = (10, 500);
/// Collaborator-facing bounds for the mutation rate.
pub const MUTATION_RATE_RANGE: (f64, f64) = (0.01, 0.5);
/// Collaborator-facing bounds for the crossover rate.
pub const CROSSOVER_RATE_RANGE: (f64, f64) = (0.1, 1.0);

const WEIGHT_SUM_TOLERANCE: f64 = 1e-9;

/// Validates the project input.
///
/// Checks:
/// 1. At least one floor
/// 2. At least one work item
/// 3. No duplicate floor IDs (zone IDs derive from them)
/// 4. No duplicate work-item IDs (team IDs derive from them)
pub fn validate_project(project: &ProjectInput) -> ValidationResult {
    let mut errors = Vec::new();

    if project.floors.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::NoFloors,
            "Project has no floors",
        ));
    }
    if project.work_items.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::NoWorkItems,
            "Project has no work items",
        ));
    }

    let mut floor_ids = HashSet::new();
    for floor in &project.floors {
        if !floor_ids.insert(floor.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate floor ID: {}", floor.id),
            ));
        }
    }

    let mut item_ids = HashSet::new();
    for item in &project.work_items {
        if !item_ids.insert(item.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate work item ID: {}", item.id),
            ));
        }
    }

    finish(errors)
}

/// Validates the structural GA parameters of a run.
///
/// Checks:
/// 1. `population_size >= 1` and `generations >= 1`
/// 2. `elitism_count <= population_size`
/// 3. `1 <= tournament_size <= population_size`
/// 4. Both rates in `[0, 1]`
pub fn validate_config(config: &OptimizerConfig) -> ValidationResult {
    let mut errors = Vec::new();

    if config.population_size == 0 {
        errors.push(ValidationError::out_of_range(
            "population_size must be at least 1",
        ));
    }
    if config.generations == 0 {
        errors.push(ValidationError::out_of_range(
            "generations must be at least 1",
        ));
    }
    if config.elitism_count > config.population_size {
        errors.push(ValidationError::out_of_range(format!(
            "elitism_count ({}) exceeds population_size ({})",
            config.elitism_count, config.population_size
        )));
    }
    if config.tournament_size == 0 {
        errors.push(ValidationError::out_of_range(
            "tournament_size must be at least 1",
        ));
    }
    if config.tournament_size > config.population_size {
        errors.push(ValidationError::out_of_range(format!(
            "tournament_size ({}) exceeds population_size ({})",
            config.tournament_size, config.population_size
        )));
    }
    check_unit_interval(&mut errors, "mutation_rate", config.mutation_rate);
    check_unit_interval(&mut errors, "crossover_rate", config.crossover_rate);

    finish(errors)
}

/// Validates run overrides received from an external caller.
///
/// Stricter than [`validate_config`]: enforces the ranges accepted at the
/// service boundary in addition to the structural rules.
pub fn validate_request_bounds(config: &OptimizerConfig) -> ValidationResult {
    let mut errors = validate_config(config).err().unwrap_or_default();

    check_count(
        &mut errors,
        "population_size",
        config.population_size,
        POPULATION_SIZE_RANGE,
    );
    check_count(&mut errors, "generations", config.generations, GENERATIONS_RANGE);
    check_rate(
        &mut errors,
        "mutation_rate",
        config.mutation_rate,
        MUTATION_RATE_RANGE,
    );
    check_rate(
        &mut errors,
        "crossover_rate",
        config.crossover_rate,
        CROSSOVER_RATE_RANGE,
    );

    finish(errors)
}

/// Validates fitness weights: each in `[0, 1]`, summing to 1.
pub fn validate_weights(weights: &FitnessWeights) -> ValidationResult {
    let mut errors = Vec::new();

    check_unit_interval(&mut errors, "duration weight", weights.duration);
    check_unit_interval(&mut errors, "cost weight", weights.cost);
    check_unit_interval(&mut errors, "balance weight", weights.balance);
    check_unit_interval(&mut errors, "risk weight", weights.risk);

    let sum = weights.sum();
    if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
        errors.push(ValidationError::new(
            ValidationErrorKind::WeightSum,
            format!("Fitness weights sum to {sum}, expected 1.0"),
        ));
    }

    finish(errors)
}

/// Validates a full fitness model: weights plus positive, finite
/// normalization ceilings.
pub fn validate_fitness_model(model: &FitnessModel) -> ValidationResult {
    let mut errors = validate_weights(&model.weights).err().unwrap_or_default();

    for (name, value) in [
        ("max_duration_days", model.max_duration_days),
        ("max_cost", model.max_cost),
    ] {
        if !(value.is_finite() && value > 0.0) {
            errors.push(ValidationError::out_of_range(format!(
                "{name} ({value}) must be a positive number"
            )));
        }
    }

    finish(errors)
}

fn check_unit_interval(errors: &mut Vec<ValidationError>, name: &str, value: f64) {
    if !(0.0..=1.0).contains(&value) {
        errors.push(ValidationError::out_of_range(format!(
            "{name} ({value}) must be within [0, 1]"
        )));
    }
}

fn check_count(
    errors: &mut Vec<ValidationError>,
    name: &str,
    value: usize,
    (min, max): (usize, usize),
) {
    if value < min || value > max {
        errors.push(ValidationError::out_of_range(format!(
            "{name} ({value}) must be within [{min}, {max}]"
        )));
    }
}

fn check_rate(errors: &mut Vec<ValidationError>, name: &str, value: f64, (min, max): (f64, f64)) {
    if !(min..=max).contains(&value) {
        errors.push(ValidationError::out_of_range(format!(
            "{name} ({value}) must be within [{min}, {max}]"
        )));
    }
}

fn finish(errors: Vec<ValidationError>) -> ValidationResult {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
