//! Flow-line time table decoded from a takt plan.
//!
//! Team `i` works zone `j` in takt slot `i + j`. Slot `s` covers days
//! `s × takt + 1 ..= (s + 1) × takt` (1-based, inclusive), so the last
//! slot ends exactly at the plan duration.
//!
//! # Reference
//! Frandson et al. (2013), "Takt time planning for construction of exterior
//! cladding", Fig. 2 (takt train)

use serde::{Deserialize, Serialize};

use crate::ga::TaktChromosome;

/// A complete takt schedule.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaktSchedule {
    /// Cycle time (days).
    pub takt_days: i64,
    /// Number of takt slots (`teams + zones - 1`, 0 if either is empty).
    pub slot_count: usize,
    /// Team × zone assignments, ordered by team then zone.
    pub assignments: Vec<TaktAssignment>,
}

/// One team working one zone for one takt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaktAssignment {
    pub team_id: String,
    pub trade: String,
    pub zone_id: String,
    pub crew_size: i32,
    /// Takt slot index (0-based).
    pub slot: usize,
    /// First working day (1-based).
    pub start_day: i64,
    /// Last working day (inclusive).
    pub end_day: i64,
}

impl TaktAssignment {
    /// Working days covered.
    #[inline]
    pub fn duration_days(&self) -> i64 {
        self.end_day - self.start_day + 1
    }
}

impl TaktSchedule {
    /// Decodes a chromosome into its takt train.
    pub fn from_chromosome(chromosome: &TaktChromosome) -> Self {
        let takt = chromosome.takt_duration as i64;
        let mut assignments =
            Vec::with_capacity(chromosome.team_count() * chromosome.zone_count());

        for (i, team) in chromosome.teams.iter().enumerate() {
            for (j, zone) in chromosome.zones.iter().enumerate() {
                let slot = i + j;
                assignments.push(TaktAssignment {
                    team_id: team.id.clone(),
                    trade: team.trade.clone(),
                    zone_id: zone.id.clone(),
                    crew_size: team.crew_size,
                    slot,
                    start_day: slot as i64 * takt + 1,
                    end_day: (slot as i64 + 1) * takt,
                });
            }
        }

        let slot_count = if assignments.is_empty() {
            0
        } else {
            chromosome.team_count() + chromosome.zone_count() - 1
        };

        Self {
            takt_days: takt,
            slot_count,
            assignments,
        }
    }

    /// Last working day across all assignments.
    pub fn makespan_days(&self) -> i64 {
        self.assignments.iter().map(|a| a.end_day).max().unwrap_or(0)
    }

    /// Returns all assignments of a team.
    pub fn assignments_for_team(&self, team_id: &str) -> Vec<&TaktAssignment> {
        self.assignments
            .iter()
            .filter(|a| a.team_id == team_id)
            .collect()
    }

    /// Returns all assignments in a zone, in trade order.
    pub fn assignments_for_zone(&self, zone_id: &str) -> Vec<&TaktAssignment> {
        self.assignments
            .iter()
            .filter(|a| a.zone_id == zone_id)
            .collect()
    }

    /// Assignments active in a takt slot.
    pub fn assignments_in_slot(&self, slot: usize) -> Vec<&TaktAssignment> {
        self.assignments.iter().filter(|a| a.slot == slot).collect()
    }

    /// Total crew on site per takt slot.
    pub fn crew_by_slot(&self) -> Vec<i64> {
        let mut crew = vec![0i64; self.slot_count];
        for a in &self.assignments {
            crew[a.slot] += a.crew_size as i64;
        }
        crew
    }
}
