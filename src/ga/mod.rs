//! GA-based takt plan optimization.
//!
//! # Encoding
//!
//! - **Zones**: ordered zone records, 2–4 per floor (area, intensity).
//! - **Teams**: one crew per work-item type (crew size, efficiency).
//! - **Takt**: a single cycle time in days.
//!
//! # Submodules
//!
//! - [`operators`]: Tournament selection, crossover and mutation
//!
//! # Reference
//! - Goldberg (1989), "Genetic Algorithms in Search, Optimization and
//!   Machine Learning"
//! - Frandson et al. (2013), "Takt time planning for construction of
//!   exterior cladding"

mod chromosome;
mod config;
mod engine;
mod fitness;
pub mod operators;
mod result;
mod scenario;

pub use chromosome::{
    TaktChromosome, Team, Zone, AREA_MAX, AREA_MIN, CREW_MAX, CREW_MIN, TAKT_MAX, TAKT_MIN,
};
pub use config::OptimizerConfig;
pub use engine::{OptimizerState, TaktOptimizer};
pub use fitness::{FitnessModel, FitnessWeights, PlanMetrics, MAX_COST, MAX_DURATION_DAYS};
pub use result::{EvolutionHistory, RunResult, RunStatistics};
pub use scenario::{generate_scenarios, Scenario, ScenarioKind};
