//! Genetic operators for takt plans.
//!
//! [`GeneticOperators`] bundles the three operators with the rates that
//! gate them:
//! - **Selection**: tournament without replacement.
//! - **Crossover**: one-point zone crossover, per-index crew-size swap,
//!   takt swap.
//! - **Mutation**: group-gated perturbation of zones, teams and takt.
//!
//! Operators take parents by reference and return fresh chromosomes;
//! no caller-visible value is modified in place.
//!
//! # Usage
//!
//! ```
//! use takt_plan::ga::operators::GeneticOperators;
//!
//! let ops = GeneticOperators::default();
//! assert_eq!(ops.tournament_size(), 4);
//! ```

use rand::seq::index;
use rand::Rng;

use super::chromosome::{AREA_MAX, AREA_MIN, CREW_MAX, CREW_MIN, TAKT_MAX, TAKT_MIN};
use super::{OptimizerConfig, TaktChromosome};
use crate::{Result, TaktError};

/// Per-zone probability of an area change once the zone group mutates.
const ZONE_GENE_PROB: f64 = 0.3;
/// Per-team probability of a crew change once the team group mutates.
const TEAM_GENE_PROB: f64 = 0.2;
/// Area scale factor range for zone mutation.
const AREA_SCALE: std::ops::RangeInclusive<f64> = 0.8..=1.2;

/// Selection, crossover and mutation with their rates.
///
/// Built only from a validated [`OptimizerConfig`], so both rates are
/// always within [0, 1].
#[derive(Debug, Clone, PartialEq)]
pub struct GeneticOperators {
    /// Probability that a parent pair is recombined.
    pub(crate) crossover_rate: f64,
    /// Group-level mutation probability.
    pub(crate) mutation_rate: f64,
    /// Distinct chromosomes drawn per tournament.
    pub(crate) tournament_size: usize,
}

impl Default for GeneticOperators {
    fn default() -> Self {
        let config = OptimizerConfig::default();
        Self {
            crossover_rate: config.crossover_rate,
            mutation_rate: config.mutation_rate,
            tournament_size: config.tournament_size,
        }
    }
}

impl GeneticOperators {
    /// Takes the operator rates from a run configuration.
    ///
    /// # Errors
    /// [`TaktError::InvalidConfig`] if the configuration does not validate.
    pub fn from_config(config: &OptimizerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            crossover_rate: config.crossover_rate,
            mutation_rate: config.mutation_rate,
            tournament_size: config.tournament_size,
        })
    }

    pub fn crossover_rate(&self) -> f64 {
        self.crossover_rate
    }

    pub fn mutation_rate(&self) -> f64 {
        self.mutation_rate
    }

    pub fn tournament_size(&self) -> usize {
        self.tournament_size
    }

    /// Tournament selection.
    ///
    /// Draws `tournament_size` distinct members uniformly at random and
    /// returns the fittest. Ties go to the first drawn.
    ///
    /// # Errors
    /// [`TaktError::TournamentTooLarge`] if the tournament is empty or
    /// larger than the population; sampling never falls back to
    /// replacement.
    pub fn select<'a, R: Rng>(
        &self,
        population: &'a [TaktChromosome],
        rng: &mut R,
    ) -> Result<&'a TaktChromosome> {
        if self.tournament_size == 0 || self.tournament_size > population.len() {
            return Err(TaktError::TournamentTooLarge {
                tournament_size: self.tournament_size,
                population_size: population.len(),
            });
        }

        let mut best: Option<&TaktChromosome> = None;
        for idx in index::sample(rng, population.len(), self.tournament_size) {
            let candidate = &population[idx];
            if best.map_or(true, |b| candidate.fitness > b.fitness) {
                best = Some(candidate);
            }
        }

        best.ok_or(TaktError::TournamentTooLarge {
            tournament_size: self.tournament_size,
            population_size: population.len(),
        })
    }

    /// Produces two children from two parents.
    ///
    /// With probability `1 - crossover_rate` the children are plain copies.
    /// Otherwise:
    /// 1. Zones from a random cut point onward come from the other parent,
    ///    where the other parent has a zone at that index.
    /// 2. Crew sizes are swapped per shared team index with probability 0.5.
    /// 3. Takt durations are swapped with probability 0.5.
    pub fn crossover<R: Rng>(
        &self,
        p1: &TaktChromosome,
        p2: &TaktChromosome,
        rng: &mut R,
    ) -> (TaktChromosome, TaktChromosome) {
        let mut c1 = p1.clone();
        let mut c2 = p2.clone();
        if !rng.random_bool(self.crossover_rate) {
            return (c1, c2);
        }

        let min_zones = p1.zones.len().min(p2.zones.len());
        if min_zones > 0 {
            let cut = rng.random_range(0..min_zones);
            exchange_tail(&mut c1.zones, &p2.zones, cut);
            exchange_tail(&mut c2.zones, &p1.zones, cut);
        }

        let shared_teams = c1.teams.len().min(c2.teams.len());
        for i in 0..shared_teams {
            if rng.random_bool(0.5) {
                std::mem::swap(&mut c1.teams[i].crew_size, &mut c2.teams[i].crew_size);
            }
        }

        if rng.random_bool(0.5) {
            std::mem::swap(&mut c1.takt_duration, &mut c2.takt_duration);
        }

        (c1, c2)
    }

    /// Returns a mutated copy of `chromosome`.
    ///
    /// Each gene group is mutated with probability `mutation_rate`:
    /// - Zones: each area scaled by U(0.8, 1.2) with probability 0.3,
    ///   clamped to [50, 250].
    /// - Teams: each crew size moved by one of {-1, 0, +1} with
    ///   probability 0.2, clamped to [2, 12].
    /// - Takt: moved by one of {-1, 0, +1}, clamped to [3, 20].
    pub fn mutate<R: Rng>(&self, chromosome: &TaktChromosome, rng: &mut R) -> TaktChromosome {
        let mut mutated = chromosome.clone();

        if rng.random_bool(self.mutation_rate) {
            zone_mutation(&mut mutated, rng);
        }
        if rng.random_bool(self.mutation_rate) {
            team_mutation(&mut mutated, rng);
        }
        if rng.random_bool(self.mutation_rate) {
            takt_mutation(&mut mutated, rng);
        }

        mutated
    }
}

fn exchange_tail<T: Clone>(child: &mut [T], donor: &[T], cut: usize) {
    for (gene, donated) in child.iter_mut().zip(donor).skip(cut) {
        *gene = donated.clone();
    }
}

/// Zone mutation: rescales a random subset of zone areas.
pub fn zone_mutation<R: Rng>(chromosome: &mut TaktChromosome, rng: &mut R) {
    for zone in &mut chromosome.zones {
        if rng.random_bool(ZONE_GENE_PROB) {
            let scaled = (zone.area as f64 * rng.random_range(AREA_SCALE)) as i32;
            zone.area = scaled.clamp(AREA_MIN, AREA_MAX);
        }
    }
}

/// Team mutation: nudges a random subset of crew sizes by one step.
pub fn team_mutation<R: Rng>(chromosome: &mut TaktChromosome, rng: &mut R) {
    for team in &mut chromosome.teams {
        if rng.random_bool(TEAM_GENE_PROB) {
            team.crew_size = (team.crew_size + step(rng)).clamp(CREW_MIN, CREW_MAX);
        }
    }
}

/// Takt mutation: nudges the cycle time by one step.
pub fn takt_mutation<R: Rng>(chromosome: &mut TaktChromosome, rng: &mut R) {
    chromosome.takt_duration = (chromosome.takt_duration + step(rng)).clamp(TAKT_MIN, TAKT_MAX);
}

#[inline]
fn step<R: Rng>(rng: &mut R) -> i32 {
    rng.random_range(-1..=1)
}
