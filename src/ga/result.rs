//! Optimization result bundle.

use serde::{Deserialize, Serialize};

use super::{Scenario, TaktChromosome};

/// Per-generation fitness history.
///
/// Both sequences always have the same length: one entry per completed
/// generation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EvolutionHistory {
    /// Best fitness of each generation's population.
    pub best_fitness: Vec<f64>,
    /// Mean fitness of each generation's population.
    pub avg_fitness: Vec<f64>,
}

impl EvolutionHistory {
    pub(crate) fn record(&mut self, best: f64, avg: f64) {
        self.best_fitness.push(best);
        self.avg_fitness.push(avg);
    }

    /// Number of recorded generations.
    pub fn len(&self) -> usize {
        self.best_fitness.len()
    }

    pub fn is_empty(&self) -> bool {
        self.best_fitness.is_empty()
    }

    /// Whether the best fitness never decreased between generations.
    pub fn is_monotonic(&self) -> bool {
        self.best_fitness.windows(2).all(|w| w[0] <= w[1])
    }
}

/// Summary statistics of a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunStatistics {
    /// Generations evolved.
    pub total_generations: usize,
    pub population_size: usize,
    /// `population_size × total_generations`.
    pub total_simulations: usize,
    pub best_fitness: f64,
    /// Best plan duration (days).
    pub best_duration: i64,
    pub best_cost: f64,
    /// Wall-clock time from initialization to result (ms).
    pub elapsed_ms: u64,
}

/// Everything a run hands back to its caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunResult {
    /// Best plan found, with derived metrics.
    pub best_plan: TaktChromosome,
    /// Fast, Economic and Balanced scenarios, in that order.
    pub scenarios: Vec<Scenario>,
    pub history: EvolutionHistory,
    pub statistics: RunStatistics,
}
