//! What-if scenarios derived from the best plan.
//!
//! Each scenario starts from a full copy of the best plan's genes and is
//! re-evaluated with the same fitness model:
//!
//! | Scenario | Takt | Crews |
//! |----------|------|-------|
//! | Fast | `max(3, takt - 2)` | `+2` each, no upper clamp |
//! | Economic | `min(20, takt + 2)` | `max(2, size - 1)` each |
//! | Balanced | unchanged | unchanged |

use serde::{Deserialize, Serialize};

use super::chromosome::{CREW_MIN, TAKT_MAX, TAKT_MIN};
use super::{FitnessModel, TaktChromosome};

/// Scenario variants, in the order they are generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScenarioKind {
    /// Shorter takt, larger crews.
    Fast,
    /// Longer takt, smaller crews.
    Economic,
    /// The best plan as found.
    Balanced,
}

/// A named alternative plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub kind: ScenarioKind,
    pub name: String,
    pub description: String,
    /// The evaluated plan.
    pub plan: TaktChromosome,
}

impl ScenarioKind {
    /// All kinds in generation order.
    pub const ALL: [ScenarioKind; 3] = [Self::Fast, Self::Economic, Self::Balanced];

    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Fast => "Fast",
            Self::Economic => "Economic",
            Self::Balanced => "Balanced",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Fast => "Minimum duration, higher labor cost",
            Self::Economic => "Minimum cost, longer project duration",
            Self::Balanced => "Best duration-cost-risk trade-off (recommended)",
        }
    }

    /// Applies this variant's gene changes to a copy of `best`.
    ///
    /// The Fast variant may push crew sizes past the mutation bound.
    pub fn apply(self, best: &TaktChromosome) -> TaktChromosome {
        let mut plan = best.clone();
        match self {
            Self::Fast => {
                plan.takt_duration = (plan.takt_duration - 2).max(TAKT_MIN);
                for team in &mut plan.teams {
                    team.crew_size += 2;
                }
            }
            Self::Economic => {
                plan.takt_duration = (plan.takt_duration + 2).min(TAKT_MAX);
                for team in &mut plan.teams {
                    team.crew_size = (team.crew_size - 1).max(CREW_MIN);
                }
            }
            Self::Balanced => {}
        }
        plan
    }
}

/// Generates the Fast, Economic and Balanced scenarios, in that order.
pub fn generate_scenarios(best: &TaktChromosome, model: &FitnessModel) -> Vec<Scenario> {
    ScenarioKind::ALL
        .iter()
        .map(|&kind| {
            let mut plan = kind.apply(best);
            model.evaluate(&mut plan);
            Scenario {
                kind,
                name: kind.name().to_string(),
                description: kind.description().to_string(),
                plan,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ga::{Team, Zone};

    fn best_plan(takt: i32, crews: &[i32]) -> TaktChromosome {
        let zones = vec![
            Zone {
                id: "F1-A".into(),
                floor_number: 1,
                area: 120,
                intensity: 1.0,
            },
            Zone {
                id: "F1-B".into(),
                floor_number: 1,
                area: 90,
                intensity: 1.1,
            },
        ];
        let teams = crews
            .iter()
            .enumerate()
            .map(|(i, &crew_size)| Team {
                id: format!("W{i}"),
                trade: "Plaster".into(),
                crew_size,
                efficiency: 1.0,
            })
            .collect();
        let mut plan = TaktChromosome::new(zones, teams, takt);
        FitnessModel::default().evaluate(&mut plan);
        plan
    }

    #[test]
    fn test_scenario_order_and_names() {
        let scenarios = generate_scenarios(&best_plan(8, &[4, 6]), &FitnessModel::default());
        let names: Vec<&str> = scenarios.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["Fast", "Economic", "Balanced"]);
        assert_eq!(scenarios[0].kind, ScenarioKind::Fast);
        assert!(!scenarios[2].description.is_empty());
    }

    #[test]
    fn test_fast_scenario() {
        let best = best_plan(8, &[4, 11]);
        let fast = ScenarioKind::Fast.apply(&best);
        assert_eq!(fast.takt_duration, 6);
        // 11 + 2 exceeds the mutation bound and is kept.
        assert_eq!(fast.teams[1].crew_size, 13);
        assert_eq!(fast.teams[0].crew_size, 6);

        let floor = ScenarioKind::Fast.apply(&best_plan(4, &[4]));
        assert_eq!(floor.takt_duration, 3);
    }

    #[test]
    fn test_economic_scenario() {
        let best = best_plan(19, &[2, 7]);
        let eco = ScenarioKind::Economic.apply(&best);
        assert_eq!(eco.takt_duration, 20);
        assert_eq!(eco.teams[0].crew_size, 2);
        assert_eq!(eco.teams[1].crew_size, 6);
    }

    #[test]
    fn test_balanced_reproduces_best() {
        let best = best_plan(9, &[5, 5]);
        let scenarios = generate_scenarios(&best, &FitnessModel::default());
        assert_eq!(scenarios[2].plan, best);
    }

    #[test]
    fn test_scenarios_do_not_alias_best() {
        let best = best_plan(9, &[5, 5]);
        let snapshot = best.clone();
        let mut scenarios = generate_scenarios(&best, &FitnessModel::default());
        scenarios[0].plan.zones[0].area = 1;
        assert_eq!(best, snapshot);
    }

    #[test]
    fn test_scenarios_are_pure() {
        let best = best_plan(10, &[3, 8, 6]);
        let model = FitnessModel::default();
        assert_eq!(generate_scenarios(&best, &model), generate_scenarios(&best, &model));
    }

    #[test]
    fn test_fast_shortens_duration() {
        let best = best_plan(10, &[4, 6]);
        let scenarios = generate_scenarios(&best, &FitnessModel::default());
        assert!(scenarios[0].plan.duration < best.duration);
        assert!(scenarios[1].plan.duration > best.duration);
    }
}
