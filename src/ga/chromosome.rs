//! Takt plan chromosome.
//!
//! # Encoding
//!
//! A chromosome is a complete candidate takt plan made of three gene groups:
//! - **Zones**: one record per sub-area of a floor (area, work intensity).
//! - **Teams**: one crew per work-item type (crew size, efficiency).
//! - **Takt duration**: the cycle time in days shared by every stage.
//!
//! Derived metrics (`fitness`, `duration`, `cost`, `resource_balance`, `risk`)
//! are written by [`FitnessModel::evaluate`](super::FitnessModel::evaluate)
//! and never set by hand.
//!
//! Chromosomes are plain owned values: operators clone before changing
//! anything, so a child never shares gene storage with its parents.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::models::ProjectInput;
use crate::validation::validate_project;
use crate::{Result, TaktError};

/// Zone area bounds enforced by mutation (m²).
pub const AREA_MIN: i32 = 50;
/// See [`AREA_MIN`].
pub const AREA_MAX: i32 = 250;
/// Crew size bounds enforced by mutation (persons).
pub const CREW_MIN: i32 = 2;
/// See [`CREW_MIN`].
pub const CREW_MAX: i32 = 12;
/// Takt duration bounds enforced by mutation and scenarios (days).
pub const TAKT_MIN: i32 = 3;
/// See [`TAKT_MIN`].
pub const TAKT_MAX: i32 = 20;

const ZONES_PER_FLOOR: std::ops::RangeInclusive<usize> = 2..=4;
const INITIAL_AREA: std::ops::RangeInclusive<i32> = 80..=180;
const INITIAL_INTENSITY: std::ops::RangeInclusive<f64> = 0.8..=1.2;
const INITIAL_CREW: std::ops::RangeInclusive<i32> = 3..=8;
const INITIAL_EFFICIENCY: std::ops::RangeInclusive<f64> = 0.9..=1.1;
const INITIAL_TAKT: std::ops::RangeInclusive<i32> = 5..=14;

/// A takt zone: one sub-area of a floor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Zone {
    /// Zone identifier (`"{floor_id}-{letter}"`).
    pub id: String,
    /// Number of the floor that owns this zone.
    pub floor_number: i32,
    /// Floor area (m²).
    pub area: i32,
    /// Work-intensity factor.
    pub intensity: f64,
}

/// A trade crew.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    /// Team identifier (the work-item ID).
    pub id: String,
    /// Trade name; the key into the labor-rate table.
    pub trade: String,
    /// Number of workers.
    pub crew_size: i32,
    /// Efficiency factor.
    pub efficiency: f64,
}

/// Takt plan chromosome.
///
/// Higher fitness = better plan (maximization convention).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaktChromosome {
    /// Zones in flow order.
    pub zones: Vec<Zone>,
    /// Teams in trade order.
    pub teams: Vec<Team>,
    /// Cycle time per stage (days).
    pub takt_duration: i32,
    /// Weighted fitness (not clamped to [0, 1]).
    pub fitness: f64,
    /// Project duration (days).
    pub duration: i64,
    /// Total labor cost.
    pub cost: f64,
    /// Crew-size balance in [0, 1].
    pub resource_balance: f64,
    /// Schedule risk in [0, 1].
    pub risk: f64,
}

impl TaktChromosome {
    /// Creates an unevaluated chromosome from explicit genes.
    pub fn new(zones: Vec<Zone>, teams: Vec<Team>, takt_duration: i32) -> Self {
        Self {
            zones,
            teams,
            takt_duration,
            fitness: 0.0,
            duration: 0,
            cost: 0.0,
            resource_balance: 0.0,
            risk: 0.0,
        }
    }

    /// Creates a random chromosome for a project.
    ///
    /// Each floor gets 2–4 zones; each work item gets one team.
    ///
    /// # Errors
    /// [`TaktError::InvalidProject`] if the project has no floors, no work
    /// items, or duplicate IDs.
    pub fn random<R: Rng>(project: &ProjectInput, rng: &mut R) -> Result<Self> {
        validate_project(project).map_err(TaktError::InvalidProject)?;
        Ok(Self::random_unchecked(project, rng))
    }

    /// Random generation for a project that was already validated.
    pub(crate) fn random_unchecked<R: Rng>(project: &ProjectInput, rng: &mut R) -> Self {
        let mut zones = Vec::new();
        for floor in &project.floors {
            let zone_count = rng.random_range(ZONES_PER_FLOOR);
            for (letter, _) in ('A'..='Z').zip(0..zone_count) {
                zones.push(Zone {
                    id: format!("{}-{}", floor.id, letter),
                    floor_number: floor.number,
                    area: rng.random_range(INITIAL_AREA),
                    intensity: round2(rng.random_range(INITIAL_INTENSITY)),
                });
            }
        }

        let teams = project
            .work_items
            .iter()
            .map(|item| Team {
                id: item.id.clone(),
                trade: item.name.clone(),
                crew_size: rng.random_range(INITIAL_CREW),
                efficiency: round2(rng.random_range(INITIAL_EFFICIENCY)),
            })
            .collect();

        Self::new(zones, teams, rng.random_range(INITIAL_TAKT))
    }

    /// Number of zones.
    #[inline]
    pub fn zone_count(&self) -> usize {
        self.zones.len()
    }

    /// Number of teams.
    #[inline]
    pub fn team_count(&self) -> usize {
        self.teams.len()
    }

    /// Number of flow-line stages: `teams + zones - 1`.
    #[inline]
    pub fn stage_count(&self) -> i64 {
        (self.team_count() + self.zone_count()) as i64 - 1
    }

    /// Total zone area (m²).
    pub fn total_area(&self) -> i64 {
        self.zones.iter().map(|z| z.area as i64).sum()
    }

    /// Total crew headcount across all teams.
    pub fn total_crew(&self) -> i64 {
        self.teams.iter().map(|t| t.crew_size as i64).sum()
    }

    /// Whether every gene lies within the mutation bounds.
    pub fn within_bounds(&self) -> bool {
        self.zones
            .iter()
            .all(|z| (AREA_MIN..=AREA_MAX).contains(&z.area))
            && self
                .teams
                .iter()
                .all(|t| (CREW_MIN..=CREW_MAX).contains(&t.crew_size))
            && (TAKT_MIN..=TAKT_MAX).contains(&self.takt_duration)
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
