use takt_plan::ga::{
    FitnessWeights, OptimizerConfig, RunResult, ScenarioKind, TaktOptimizer, MAX_COST,
    MAX_DURATION_DAYS,
};
use takt_plan::models::{Floor, ProjectInput, WorkItem};
use takt_plan::scheduler::{PlanKpi, TaktSchedule};
use takt_plan::TaktError;

use std::io;
use std::sync::{Arc, Mutex};
use tracing_subscriber::fmt::MakeWriter;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[derive(Clone, Default)]
struct CapturedLog(Arc<Mutex<Vec<u8>>>);

impl CapturedLog {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for CapturedLog {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLog {
    type Writer = CapturedLog;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

fn two_trade_project() -> ProjectInput {
    ProjectInput::new()
        .with_floor(Floor::new("F1", 1))
        .with_work_item(WorkItem::new("1", "A"))
        .with_work_item(WorkItem::new("2", "B"))
}

fn example_config() -> OptimizerConfig {
    OptimizerConfig::default()
        .with_population_size(10)
        .with_generations(5)
        .with_mutation_rate(0.1)
        .with_crossover_rate(0.9)
        .with_tournament_size(3)
        .with_elitism_count(1)
        .with_seed(2024)
}

fn run_example() -> RunResult {
    TaktOptimizer::new(two_trade_project(), example_config())
        .unwrap()
        .run()
        .unwrap()
}

#[test]
fn test_end_to_end_example() {
    init_tracing();
    let result = run_example();
    let best = &result.best_plan;

    assert_eq!(best.team_count(), 2);
    assert!((2..=4).contains(&best.zone_count()));
    assert_eq!(
        best.duration,
        (2 + best.zone_count() as i64 - 1) * best.takt_duration as i64
    );

    // Upper bound: zero duration and cost, perfect balance, zero risk.
    let w = FitnessWeights::default();
    assert!(best.fitness <= w.sum());
    // Lower bound for this project: worst duration/cost within the gene bounds.
    let worst_duration = (2.0 + 4.0 - 1.0) * 20.0;
    let worst_cost = 700.0 * 12.0 * 2.0 * worst_duration;
    let floor = w.duration * (1.0 - worst_duration / MAX_DURATION_DAYS)
        + w.cost * (1.0 - worst_cost / MAX_COST);
    assert!(best.fitness >= floor);

    let names: Vec<&str> = result.scenarios.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, ["Fast", "Economic", "Balanced"]);
    assert_eq!(result.scenarios[1].kind, ScenarioKind::Economic);

    assert_eq!(result.history.best_fitness.len(), 5);
    assert_eq!(result.history.avg_fitness.len(), 5);
    assert!(result.history.is_monotonic());
    assert_eq!(result.statistics.total_generations, 5);
    assert_eq!(result.statistics.population_size, 10);
    assert_eq!(result.statistics.total_simulations, 50);
}

#[test]
fn test_fixed_seed_replays() {
    let a = run_example();
    let b = run_example();
    assert_eq!(a.best_plan, b.best_plan);
    assert_eq!(a.scenarios, b.scenarios);
    assert_eq!(a.history, b.history);
}

#[test]
fn test_balanced_scenario_is_best_plan() {
    let result = run_example();
    assert_eq!(result.scenarios[2].plan, result.best_plan);
}

#[test]
fn test_result_serializes_to_json() {
    let result = run_example();
    let json = serde_json::to_value(&result).unwrap();

    assert!(json["best_plan"]["zones"].is_array());
    assert_eq!(json["scenarios"].as_array().unwrap().len(), 3);
    assert_eq!(json["scenarios"][0]["name"], "Fast");
    assert_eq!(json["statistics"]["population_size"], 10);

    let back: RunResult = serde_json::from_value(json).unwrap();
    assert_eq!(back.best_plan, result.best_plan);
}

#[test]
fn test_schedule_of_best_plan() {
    let result = run_example();
    let best = &result.best_plan;
    let schedule = TaktSchedule::from_chromosome(best);
    assert_eq!(schedule.makespan_days(), best.duration);
    assert_eq!(schedule.assignments.len(), 2 * best.zone_count());

    let kpi = PlanKpi::calculate(best, &Default::default());
    assert_eq!(kpi.duration_days, best.duration);
    assert_eq!(kpi.cost, best.cost);
}

#[test]
fn test_oversized_tournament_rejected() {
    let config = example_config().with_tournament_size(11);
    let err = TaktOptimizer::new(two_trade_project(), config).err().unwrap();
    assert!(matches!(err, TaktError::InvalidConfig(_)));
}

#[test]
fn test_empty_project_rejected_before_run() {
    let project = ProjectInput::new().with_floor(Floor::new("F1", 1));
    let err = TaktOptimizer::new(project, example_config()).err().unwrap();
    assert!(matches!(err, TaktError::InvalidProject(_)));
    assert!(err.to_string().contains("no work items"));
}

#[test]
fn test_request_bounds() {
    // Five generations is structurally fine but below the service minimum of 10.
    let example = example_config();
    assert!(example.validate().is_ok());
    assert!(example.validate_request_bounds().is_err());

    assert!(example_config()
        .with_generations(10)
        .validate_request_bounds()
        .is_ok());

    let config = example_config().with_generations(600);
    assert!(config.validate().is_ok());
    assert!(config.validate_request_bounds().is_err());
}

#[test]
fn test_run_start_log_reports_seed() {
    let log = CapturedLog::default();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_ansi(false)
        .with_writer(log.clone())
        .finish();

    tracing::subscriber::with_default(subscriber, || {
        run_example();
    });

    let contents = log.contents();
    assert!(contents.contains("Starting takt optimization"));
    assert!(contents.contains("seed = Some(2024)"));
}
