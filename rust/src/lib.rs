//! Rust implementation of the opsplan planning engines.
//!
//! Two independent engines live here:
//! - critical path scheduling over a project precedence graph
//!   (`project` + `critical_path`)
//! - a two-product linear program solved by corner-point enumeration (`lp`)
//!
//! `planner` wraps each engine in a session type that keeps derived results
//! up to date after every edit. Python bindings are available behind the
//! `python` feature.

// Allow clippy warning triggered by PyO3 macro expansion
#![cfg_attr(feature = "python", allow(clippy::useless_conversion))]

pub mod config;
pub mod critical_path;
pub mod logging;
pub mod lp;
pub mod models;
pub mod planner;
pub mod project;

#[cfg(feature = "python")]
mod python;

pub use config::{LayoutConfig, ScheduleConfig, SolverConfig};
pub use critical_path::{
    calculate_schedule, network_layout, recompute_schedule, CriticalPathError, NetworkLayout,
};
pub use lp::{LinearProgram, LpOutcome, ProductSlot, ProductUpdate, ResourceUtilization};
pub use models::{Activity, Product, ResourceConstraints, Solution, Vertex};
pub use planner::{PlannerError, ProductionPlanner, ProjectPlanner};
pub use project::{available_predecessors, would_create_cycle, ProjectError, ProjectGraph};
