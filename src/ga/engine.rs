//! Generational evolution engine.
//!
//! # Algorithm
//!
//! 1. Create `population_size` random plans, evaluate, sort by fitness.
//! 2. Each generation: copy the top `elitism_count` plans, then fill the
//!    rest with tournament-selected, crossed and mutated children.
//! 3. Sort the new population, update the running best, record history.
//! 4. After the generation budget, derive scenarios from the best plan.
//!
//! There is no early stopping; a caller that needs to cancel can drive
//! [`TaktOptimizer::step`] itself and stop between generations.
//!
//! # Reference
//! Goldberg (1989), "Genetic Algorithms in Search, Optimization and
//! Machine Learning", Ch. 3

use std::time::Instant;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

use super::operators::GeneticOperators;
use super::result::{EvolutionHistory, RunResult, RunStatistics};
use super::scenario::generate_scenarios;
use super::{FitnessModel, OptimizerConfig, TaktChromosome};
use crate::models::ProjectInput;
use crate::validation::validate_project;
use crate::{Result, TaktError};

const PROGRESS_LOG_INTERVAL: usize = 20;

/// Lifecycle of an optimizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptimizerState {
    /// No population yet.
    Uninitialized,
    /// Initial population created and evaluated.
    Populated,
    /// At least one generation evolved.
    Evolving,
    /// Result produced.
    Converged,
}

/// Takt plan optimizer.
///
/// Owns the population and a seedable random source; every operator draws
/// from that source, so a fixed seed replays a run exactly.
///
/// # Example
/// ```
/// use takt_plan::ga::{OptimizerConfig, OptimizerState, TaktOptimizer};
/// use takt_plan::models::{Floor, ProjectInput, WorkItem};
///
/// let project = ProjectInput::new()
///     .with_floor(Floor::new("F1", 1))
///     .with_work_item(WorkItem::new("W1", "Electrical"));
/// let config = OptimizerConfig::default()
///     .with_population_size(12)
///     .with_generations(3)
///     .with_seed(1);
///
/// let mut optimizer = TaktOptimizer::new(project, config)?;
/// optimizer.initialize();
/// optimizer.step()?;
/// assert_eq!(optimizer.state(), OptimizerState::Evolving);
/// assert_eq!(optimizer.history().len(), 1);
/// # Ok::<(), takt_plan::TaktError>(())
/// ```
pub struct TaktOptimizer<R: Rng = StdRng> {
    project: ProjectInput,
    config: OptimizerConfig,
    model: FitnessModel,
    operators: GeneticOperators,
    rng: R,
    population: Vec<TaktChromosome>,
    best: Option<TaktChromosome>,
    history: EvolutionHistory,
    generation: usize,
    state: OptimizerState,
    started: Option<Instant>,
}

impl TaktOptimizer<StdRng> {
    /// Creates an optimizer seeded from `config.seed`, or from the OS when
    /// no seed is set.
    ///
    /// # Errors
    /// [`TaktError::InvalidConfig`] or [`TaktError::InvalidProject`].
    pub fn new(project: ProjectInput, config: OptimizerConfig) -> Result<Self> {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self::with_rng(project, config, rng)
    }
}

impl<R: Rng> TaktOptimizer<R> {
    /// Creates an optimizer with an explicit random source.
    ///
    /// `config.seed` is ignored; the given generator is used as-is.
    pub fn with_rng(project: ProjectInput, config: OptimizerConfig, rng: R) -> Result<Self> {
        config.validate()?;
        validate_project(&project).map_err(TaktError::InvalidProject)?;

        Ok(Self {
            operators: GeneticOperators::from_config(&config)?,
            project,
            config,
            model: FitnessModel::default(),
            rng,
            population: Vec::new(),
            best: None,
            history: EvolutionHistory::default(),
            generation: 0,
            state: OptimizerState::Uninitialized,
            started: None,
        })
    }

    /// Replaces the fitness model (labor rates, weights, ceilings).
    ///
    /// # Errors
    /// [`TaktError::InvalidFitnessModel`] if the weights do not sum to 1 or
    /// a normalization ceiling is not positive.
    pub fn with_fitness_model(mut self, model: FitnessModel) -> Result<Self> {
        model.validate()?;
        self.model = model;
        Ok(self)
    }

    pub fn state(&self) -> OptimizerState {
        self.state
    }

    pub fn config(&self) -> &OptimizerConfig {
        &self.config
    }

    pub fn fitness_model(&self) -> &FitnessModel {
        &self.model
    }

    /// Current population, sorted by descending fitness.
    pub fn population(&self) -> &[TaktChromosome] {
        &self.population
    }

    /// Best plan seen so far.
    pub fn best(&self) -> Option<&TaktChromosome> {
        self.best.as_ref()
    }

    pub fn history(&self) -> &EvolutionHistory {
        &self.history
    }

    /// Number of generations evolved since the last initialization.
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// Creates and evaluates the initial population.
    ///
    /// Calling it again discards the current population and history.
    pub fn initialize(&mut self) {
        self.started = Some(Instant::now());

        let mut population: Vec<TaktChromosome> = (0..self.config.population_size)
            .map(|_| TaktChromosome::random_unchecked(&self.project, &mut self.rng))
            .collect();
        self.evaluate_all(&mut population);
        sort_by_fitness(&mut population);

        self.best = population.first().cloned();
        self.population = population;
        self.history = EvolutionHistory::default();
        self.generation = 0;
        self.state = OptimizerState::Populated;
    }

    /// Evolves one generation.
    ///
    /// Initializes first if no population exists yet.
    pub fn step(&mut self) -> Result<()> {
        if self.state == OptimizerState::Uninitialized {
            self.initialize();
        }

        let size = self.config.population_size;
        let elite_count = self.config.elitism_count.min(self.population.len());
        let mut next: Vec<TaktChromosome> = self.population[..elite_count].to_vec();

        let mut children = Vec::with_capacity(size - elite_count);
        while elite_count + children.len() < size {
            let p1 = self.operators.select(&self.population, &mut self.rng)?;
            let p2 = self.operators.select(&self.population, &mut self.rng)?;
            let (c1, c2) = self.operators.crossover(p1, p2, &mut self.rng);

            children.push(self.operators.mutate(&c1, &mut self.rng));
            // Surplus second child is dropped unmutated.
            if elite_count + children.len() < size {
                children.push(self.operators.mutate(&c2, &mut self.rng));
            }
        }
        self.evaluate_all(&mut children);

        next.extend(children);
        sort_by_fitness(&mut next);
        self.population = next;

        let top = &self.population[0];
        if self.best.as_ref().map_or(true, |b| top.fitness > b.fitness) {
            self.best = Some(top.clone());
        }

        let best_fitness = top.fitness;
        let avg_fitness =
            self.population.iter().map(|c| c.fitness).sum::<f64>() / self.population.len() as f64;
        self.history.record(best_fitness, avg_fitness);

        tracing::debug!(
            "Generation {}: best = {:.4}, avg = {:.4}",
            self.generation,
            best_fitness,
            avg_fitness
        );
        if self.generation % PROGRESS_LOG_INTERVAL == 0 {
            tracing::info!(
                "Generation {}: Best Fitness = {:.4}",
                self.generation,
                self.best.as_ref().map_or(best_fitness, |b| b.fitness)
            );
        }

        self.generation += 1;
        self.state = OptimizerState::Evolving;
        Ok(())
    }

    /// Builds the result bundle from the best plan found so far.
    ///
    /// # Errors
    /// [`TaktError::NotInitialized`] if no population exists.
    pub fn finish(&mut self) -> Result<RunResult> {
        let best = self.best.clone().ok_or(TaktError::NotInitialized)?;
        let scenarios = generate_scenarios(&best, &self.model);
        let elapsed_ms = self
            .started
            .map_or(0, |start| start.elapsed().as_millis() as u64);

        let statistics = RunStatistics {
            total_generations: self.generation,
            population_size: self.config.population_size,
            total_simulations: self.config.population_size * self.generation,
            best_fitness: best.fitness,
            best_duration: best.duration,
            best_cost: best.cost,
            elapsed_ms,
        };
        self.state = OptimizerState::Converged;

        tracing::info!(
            "Optimization finished in {}ms: fitness = {:.4}, duration = {} days, cost = {:.0}",
            elapsed_ms,
            best.fitness,
            best.duration,
            best.cost
        );

        Ok(RunResult {
            best_plan: best,
            scenarios,
            history: self.history.clone(),
            statistics,
        })
    }

    /// Full run: initialize, evolve `config.generations` generations,
    /// build the result.
    pub fn run(&mut self) -> Result<RunResult> {
        tracing::info!(
            "Starting takt optimization: {} floors, {} work items, population {}, {} generations, seed = {:?}",
            self.project.floor_count(),
            self.project.work_item_count(),
            self.config.population_size,
            self.config.generations,
            self.config.seed
        );

        self.initialize();
        for _ in 0..self.config.generations {
            self.step()?;
        }
        self.finish()
    }

    /// Fan-out evaluation; the population itself is only touched here,
    /// on the calling thread, once every evaluation has finished.
    fn evaluate_all(&self, chromosomes: &mut [TaktChromosome]) {
        let model = &self.model;
        if self.config.parallel {
            chromosomes.par_iter_mut().for_each(|c| {
                model.evaluate(c);
            });
        } else {
            for c in chromosomes.iter_mut() {
                model.evaluate(c);
            }
        }
    }
}

/// Stable sort by descending fitness.
fn sort_by_fitness(population: &mut [TaktChromosome]) {
    population.sort_by(|a, b| b.fitness.total_cmp(&a.fitness));
}
