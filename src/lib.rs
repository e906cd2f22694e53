//! Takt-time planning for multi-floor construction projects.
//!
//! Searches for a takt plan (zones, crews, cycle time) that balances project
//! duration, labor cost, crew balance and schedule risk, then derives
//! what-if scenarios from the best plan found.
//!
//! # Modules
//!
//! - **`models`**: Project input (`Floor`, `WorkItem`, `ProjectInput`) and the
//!   `LaborRates` cost table
//! - **`ga`**: Plan encoding (`TaktChromosome`), fitness model, genetic
//!   operators, the generational engine (`TaktOptimizer`) and scenarios
//! - **`scheduler`**: Decodes a plan into a flow-line time table and KPIs
//! - **`validation`**: Input and configuration integrity checks
//!
//! # Example
//!
//! ```
//! use takt_plan::ga::{OptimizerConfig, TaktOptimizer};
//! use takt_plan::models::{Floor, ProjectInput, WorkItem};
//!
//! let project = ProjectInput::new()
//!     .with_floor(Floor::new("F1", 1))
//!     .with_work_item(WorkItem::new("W1", "Plaster"))
//!     .with_work_item(WorkItem::new("W2", "Painting"));
//! let config = OptimizerConfig::default()
//!     .with_population_size(20)
//!     .with_generations(10)
//!     .with_seed(7);
//!
//! let result = TaktOptimizer::new(project, config)?.run()?;
//! assert_eq!(result.scenarios.len(), 3);
//! # Ok::<(), takt_plan::TaktError>(())
//! ```
//!
//! # References
//!
//! - Frandson, Berghede & Tommelein (2013), "Takt time planning for construction
//!   of exterior cladding"
//! - Goldberg (1989), "Genetic Algorithms in Search, Optimization and Machine
//!   Learning"

mod error;
pub mod ga;
pub mod models;
pub mod scheduler;
pub mod validation;

pub use error::{Result, TaktError};
