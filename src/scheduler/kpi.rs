//! Takt plan quality metrics (KPIs).
//!
//! Computes site-level indicators from a plan and its cost model.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Duration | `(teams + zones - 1) × takt` (days) |
//! | Cost | Labor cost from the fitness model |
//! | Total crew | Sum of crew sizes |
//! | Peak crew | Max crew on site over takt slots |
//! | Avg daily cost | Cost / duration |
//! | Crew utilization | Busy slots / total slots, per team |
//! | Labor-days per m² | Σ crew × duration / total zone area |

use serde::{Deserialize, Serialize};

use super::TaktSchedule;
use crate::ga::{FitnessModel, TaktChromosome};

/// Plan performance indicators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanKpi {
    /// Project duration (days).
    pub duration_days: i64,
    /// Total labor cost.
    pub cost: f64,
    /// Sum of crew sizes across all teams.
    pub total_crew: i64,
    /// Largest number of workers on site in any takt slot.
    pub peak_crew: i64,
    /// Average labor cost per project day.
    pub avg_daily_cost: f64,
    /// Fraction of takt slots in which each team is working (0.0..1.0).
    pub crew_utilization: f64,
    /// Paid labor-days per m² of zone area.
    pub labor_days_per_m2: f64,
    /// Total zone area (m²).
    pub total_area: i64,
}

impl PlanKpi {
    /// Computes KPIs for a plan.
    ///
    /// # Arguments
    /// * `chromosome` - The plan (genes only; derived metrics are recomputed).
    /// * `model` - Supplies the labor rates for the cost figure.
    pub fn calculate(chromosome: &TaktChromosome, model: &FitnessModel) -> Self {
        let schedule = TaktSchedule::from_chromosome(chromosome);
        let duration = model.duration(chromosome);
        let cost = model.cost(chromosome, duration);
        let total_crew = chromosome.total_crew();
        let total_area = chromosome.total_area();

        let peak_crew = schedule.crew_by_slot().into_iter().max().unwrap_or(0);

        let avg_daily_cost = if duration <= 0 {
            0.0
        } else {
            cost / duration as f64
        };

        // Every team is busy for exactly one slot per zone.
        let crew_utilization = if schedule.slot_count == 0 {
            0.0
        } else {
            chromosome.zone_count() as f64 / schedule.slot_count as f64
        };

        let labor_days_per_m2 = if total_area == 0 {
            0.0
        } else {
            (total_crew * duration.max(0)) as f64 / total_area as f64
        };

        Self {
            duration_days: duration,
            cost,
            total_crew,
            peak_crew,
            avg_daily_cost,
            crew_utilization,
            labor_days_per_m2,
            total_area,
        }
    }

    /// Whether the plan fits within the given duration and crew limits.
    pub fn meets_limits(&self, max_duration_days: i64, max_peak_crew: i64) -> bool {
        self.duration_days <= max_duration_days && self.peak_crew <= max_peak_crew
    }
}
