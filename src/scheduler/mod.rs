//! Plan decoding and evaluation.
//!
//! - [`TaktSchedule`]: the team × zone takt train of a plan
//! - [`PlanKpi`]: site-level performance indicators

mod kpi;
mod schedule;

pub use kpi::PlanKpi;
pub use schedule::{TaktAssignment, TaktSchedule};
