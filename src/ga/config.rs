//! Optimizer run configuration.

use serde::{Deserialize, Serialize};

use crate::validation::{validate_config, validate_request_bounds};
use crate::{Result, TaktError};

/// Configuration for one optimization run.
///
/// All values are fixed for the lifetime of a run. Setters store values
/// verbatim; [`OptimizerConfig::validate`] reports anything out of range
/// instead of clamping it.
///
/// # Examples
///
/// ```
/// use takt_plan::ga::OptimizerConfig;
///
/// let config = OptimizerConfig::default()
///     .with_population_size(50)
///     .with_generations(40)
///     .with_tournament_size(3)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OptimizerConfig {
    /// Number of chromosomes per generation.
    pub population_size: usize,

    /// Number of generations to evolve (no early stopping).
    pub generations: usize,

    /// Probability that each gene group (zones, teams, takt) is mutated.
    pub mutation_rate: f64,

    /// Probability that a parent pair is recombined.
    pub crossover_rate: f64,

    /// Distinct chromosomes sampled per tournament.
    pub tournament_size: usize,

    /// Top chromosomes copied unchanged into the next generation.
    pub elitism_count: usize,

    /// Random seed for reproducibility. `None` seeds from the OS.
    pub seed: Option<u64>,

    /// Whether to evaluate chromosomes in parallel using rayon.
    pub parallel: bool,
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            population_size: 150,
            generations: 80,
            mutation_rate: 0.12,
            crossover_rate: 0.85,
            tournament_size: 4,
            elitism_count: 2,
            seed: None,
            parallel: false,
        }
    }
}

impl OptimizerConfig {
    /// Parses a JSON override document and validates it.
    ///
    /// Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    pub fn with_generations(mut self, n: usize) -> Self {
        self.generations = n;
        self
    }

    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate;
        self
    }

    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate;
        self
    }

    pub fn with_tournament_size(mut self, n: usize) -> Self {
        self.tournament_size = n;
        self
    }

    pub fn with_elitism_count(mut self, n: usize) -> Self {
        self.elitism_count = n;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Validates the structural GA parameters.
    pub fn validate(&self) -> Result<()> {
        validate_config(self).map_err(TaktError::InvalidConfig)
    }

    /// Validates against the ranges accepted from external callers.
    pub fn validate_request_bounds(&self) -> Result<()> {
        validate_request_bounds(self).map_err(TaktError::InvalidConfig)
    }

    /// Number of fitness evaluations a run performs after initialization.
    pub fn total_simulations(&self) -> usize {
        self.population_size * self.generations
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = OptimizerConfig::default();
        assert_eq!(config.population_size, 150);
        assert_eq!(config.generations, 80);
        assert!((config.mutation_rate - 0.12).abs() < 1e-10);
        assert!((config.crossover_rate - 0.85).abs() < 1e-10);
        assert_eq!(config.tournament_size, 4);
        assert_eq!(config.elitism_count, 2);
        assert!(config.seed.is_none());
        assert!(!config.parallel);
    }

    #[test]
    fn test_from_json_partial() {
        let config =
            OptimizerConfig::from_json(r#"{"population_size": 40, "mutation_rate": 0.2}"#)
                .unwrap();
        assert_eq!(config.population_size, 40);
        assert!((config.mutation_rate - 0.2).abs() < 1e-10);
        assert_eq!(config.generations, 80);
    }

    #[test]
    fn test_from_json_invalid() {
        let err = OptimizerConfig::from_json(r#"{"population_size": 2}"#).unwrap_err();
        assert!(matches!(err, TaktError::InvalidConfig(_)));

        let err = OptimizerConfig::from_json("{not json").unwrap_err();
        assert!(matches!(err, TaktError::Config(_)));
    }

    #[test]
    fn test_total_simulations() {
        let config = OptimizerConfig::default()
            .with_population_size(10)
            .with_generations(5);
        assert_eq!(config.total_simulations(), 50);
    }
}
