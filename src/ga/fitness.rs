//! Multi-objective fitness model for takt plans.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Duration | `(teams + zones - 1) × takt` (flow-line stages × cycle time) |
//! | Cost | Σ daily rate(trade) × crew size × duration |
//! | Resource balance | `min(1, 1 / (1 + σ(crew sizes)))`, 0.5 with no teams |
//! | Risk | `min(1, 0.4·|takt−9|/10 + 0.3·zones/30 + 0.3·|mean crew−5|/10)` |
//!
//! Fitness is the weighted sum of normalized duration, normalized cost,
//! balance and inverted risk. It is deliberately left unclamped: plans
//! beyond the normalization ceilings score below zero.
//!
//! # Reference
//! Frandson et al. (2013), "Takt time planning for construction of exterior
//! cladding"

use serde::{Deserialize, Serialize};

use super::TaktChromosome;
use crate::models::LaborRates;
use crate::validation::{validate_fitness_model, validate_weights};
use crate::{Result, TaktError};

/// Duration ceiling used for normalization (days).
pub const MAX_DURATION_DAYS: f64 = 365.0;
/// Cost ceiling used for normalization (currency units).
pub const MAX_COST: f64 = 8_000_000.0;

const TAKT_RISK_CENTER: f64 = 9.0;
const CREW_RISK_CENTER: f64 = 5.0;

/// Objective weights. Must sum to 1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FitnessWeights {
    pub duration: f64,
    pub cost: f64,
    pub balance: f64,
    pub risk: f64,
}

impl Default for FitnessWeights {
    fn default() -> Self {
        Self {
            duration: 0.35,
            cost: 0.30,
            balance: 0.20,
            risk: 0.15,
        }
    }
}

impl FitnessWeights {
    /// Sum of all four weights.
    pub fn sum(&self) -> f64 {
        self.duration + self.cost + self.balance + self.risk
    }
}

/// The four raw objective values of a plan.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanMetrics {
    pub duration: i64,
    pub cost: f64,
    pub resource_balance: f64,
    pub risk: f64,
}

/// Fitness evaluator: cost table, weights and normalization ceilings.
///
/// Evaluation is a pure function of the chromosome genes, so distinct
/// chromosomes may be evaluated on different threads.
///
/// # Example
/// ```
/// use takt_plan::ga::{FitnessModel, Team, TaktChromosome};
///
/// let model = FitnessModel::default();
/// let team = Team { id: "W1".into(), trade: "Plaster".into(), crew_size: 5, efficiency: 1.0 };
/// let mut plan = TaktChromosome::new(Vec::new(), vec![team], 9);
/// model.evaluate(&mut plan);
/// assert_eq!(plan.duration, 0);
/// assert_eq!(plan.resource_balance, 1.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FitnessModel {
    /// Daily labor rates.
    pub labor_rates: LaborRates,
    /// Objective weights.
    pub weights: FitnessWeights,
    /// Duration normalization ceiling (days).
    pub max_duration_days: f64,
    /// Cost normalization ceiling.
    pub max_cost: f64,
}

impl Default for FitnessModel {
    fn default() -> Self {
        Self {
            labor_rates: LaborRates::default(),
            weights: FitnessWeights::default(),
            max_duration_days: MAX_DURATION_DAYS,
            max_cost: MAX_COST,
        }
    }
}

impl FitnessModel {
    /// Replaces the labor-rate table.
    pub fn with_labor_rates(mut self, rates: LaborRates) -> Self {
        self.labor_rates = rates;
        self
    }

    /// Replaces the objective weights.
    ///
    /// # Errors
    /// [`TaktError::InvalidFitnessModel`] unless the weights lie in [0, 1]
    /// and sum to 1.
    pub fn with_weights(mut self, weights: FitnessWeights) -> Result<Self> {
        validate_weights(&weights).map_err(TaktError::InvalidFitnessModel)?;
        self.weights = weights;
        Ok(self)
    }

    /// Validates weights and normalization ceilings.
    ///
    /// # Errors
    /// [`TaktError::InvalidFitnessModel`] listing every problem found.
    pub fn validate(&self) -> Result<()> {
        validate_fitness_model(self).map_err(TaktError::InvalidFitnessModel)
    }

    /// Project duration in days.
    pub fn duration(&self, chromosome: &TaktChromosome) -> i64 {
        chromosome.stage_count() * chromosome.takt_duration as i64
    }

    /// Total labor cost for a given duration.
    ///
    /// Every crew is paid for the full project duration.
    pub fn cost(&self, chromosome: &TaktChromosome, duration: i64) -> f64 {
        chromosome
            .teams
            .iter()
            .map(|team| {
                self.labor_rates.rate(&team.trade) * team.crew_size as f64 * duration as f64
            })
            .sum()
    }

    /// Crew-size balance in [0, 1].
    ///
    /// 1.0 for a single team, 0.5 for no teams.
    pub fn resource_balance(&self, chromosome: &TaktChromosome) -> f64 {
        let sizes = crew_sizes(chromosome);
        if sizes.is_empty() {
            return 0.5;
        }
        (1.0 / (1.0 + std_dev(&sizes))).min(1.0)
    }

    /// Schedule risk in [0, 1].
    pub fn risk(&self, chromosome: &TaktChromosome) -> f64 {
        let takt_risk = (chromosome.takt_duration as f64 - TAKT_RISK_CENTER).abs() / 10.0;
        let zone_risk = chromosome.zone_count() as f64 / 30.0;
        let sizes = crew_sizes(chromosome);
        let avg_crew = if sizes.is_empty() {
            CREW_RISK_CENTER
        } else {
            mean(&sizes)
        };
        let crew_risk = (avg_crew - CREW_RISK_CENTER).abs() / 10.0;

        (0.4 * takt_risk + 0.3 * zone_risk + 0.3 * crew_risk).min(1.0)
    }

    /// Computes all raw objective values.
    pub fn metrics(&self, chromosome: &TaktChromosome) -> PlanMetrics {
        let duration = self.duration(chromosome);
        PlanMetrics {
            duration,
            cost: self.cost(chromosome, duration),
            resource_balance: self.resource_balance(chromosome),
            risk: self.risk(chromosome),
        }
    }

    /// Weighted fitness of a set of metrics.
    pub fn score(&self, metrics: &PlanMetrics) -> f64 {
        let w = &self.weights;
        let norm_duration = 1.0 - metrics.duration as f64 / self.max_duration_days;
        let norm_cost = 1.0 - metrics.cost / self.max_cost;

        w.duration * norm_duration
            + w.cost * norm_cost
            + w.balance * metrics.resource_balance
            + w.risk * (1.0 - metrics.risk)
    }

    /// Evaluates a chromosome and writes the derived metrics back onto it.
    ///
    /// Returns the fitness. Idempotent for unchanged genes.
    pub fn evaluate(&self, chromosome: &mut TaktChromosome) -> f64 {
        let metrics = self.metrics(chromosome);
        let fitness = self.score(&metrics);

        chromosome.fitness = fitness;
        chromosome.duration = metrics.duration;
        chromosome.cost = metrics.cost;
        chromosome.resource_balance = metrics.resource_balance;
        chromosome.risk = metrics.risk;
        fitness
    }
}

fn crew_sizes(chromosome: &TaktChromosome) -> Vec<f64> {
    chromosome
        .teams
        .iter()
        .map(|t| t.crew_size as f64)
        .collect()
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population standard deviation; 0 for fewer than two values.
fn std_dev(values: &[f64]) -> f64 {
    if values.len() <= 1 {
        return 0.0;
    }
    let m = mean(values);
    let variance = values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / values.len() as f64;
    variance.sqrt()
}
