//! Planning sessions that keep derived results in sync with edits.
//!
//! Every structural edit of the project is followed by a full schedule
//! recompute, and every LP edit by a fresh solve, so callers always read a
//! consistent snapshot.

use thiserror::Error;

use crate::config::{LayoutConfig, ScheduleConfig, SolverConfig};
use crate::critical_path::{network_layout, recompute_schedule, CriticalPathError, NetworkLayout};
use crate::lp::{
    resource_utilization, LinearProgram, LpOutcome, ProductSlot, ProductUpdate,
    ResourceUtilization,
};
use crate::models::{Activity, Solution, Vertex};
use crate::project::{available_predecessors, ProjectError, ProjectGraph};
use crate::{log_changes, log_checks};

/// Errors surfaced by the project planner.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlannerError {
    #[error(transparent)]
    Project(#[from] ProjectError),
    #[error(transparent)]
    Schedule(#[from] CriticalPathError),
}

/// A project graph kept recomputed after every edit.
#[derive(Clone, Debug)]
pub struct ProjectPlanner {
    graph: ProjectGraph,
    config: ScheduleConfig,
}

impl ProjectPlanner {
    /// Start from the seeded default project.
    pub fn new(config: ScheduleConfig) -> Result<Self, PlannerError> {
        Self::with_graph(ProjectGraph::warehouse_expansion()?, config)
    }

    /// Take ownership of an existing graph and schedule it.
    pub fn with_graph(graph: ProjectGraph, config: ScheduleConfig) -> Result<Self, PlannerError> {
        let mut planner = Self { graph, config };
        planner.recompute()?;
        Ok(planner)
    }

    pub fn graph(&self) -> &ProjectGraph {
        &self.graph
    }

    pub fn config(&self) -> &ScheduleConfig {
        &self.config
    }

    pub fn into_graph(self) -> ProjectGraph {
        self.graph
    }

    pub fn recompute(&mut self) -> Result<(), PlannerError> {
        recompute_schedule(&mut self.graph, &self.config)?;
        Ok(())
    }

    pub fn add_activity(
        &mut self,
        name: &str,
        duration: f64,
        predecessor_ids: &[String],
    ) -> Result<Activity, PlannerError> {
        let added = self.graph.add_activity(name, duration, predecessor_ids)?;
        log_changes!(
            self.config.verbosity,
            "Added activity {} ({:?}, duration {})",
            added.id,
            added.name,
            added.duration
        );
        self.recompute()?;
        // Return the activity with its freshly computed timings
        Ok(self.graph.get(&added.id).cloned().unwrap_or(added))
    }

    /// Add a precedence edge; a rejected edge leaves the project untouched.
    pub fn add_predecessor(
        &mut self,
        activity_id: &str,
        predecessor_id: &str,
    ) -> Result<bool, PlannerError> {
        let added = match self.graph.add_predecessor(activity_id, predecessor_id) {
            Ok(added) => added,
            Err(e) => {
                log_checks!(self.config.verbosity, "Rejected edge: {}", e);
                return Err(e.into());
            }
        };
        if added {
            log_changes!(
                self.config.verbosity,
                "{} now depends on {}",
                activity_id,
                predecessor_id
            );
            self.recompute()?;
        }
        Ok(added)
    }

    pub fn remove_predecessor(
        &mut self,
        activity_id: &str,
        predecessor_id: &str,
    ) -> Result<bool, PlannerError> {
        let removed = self.graph.remove_predecessor(activity_id, predecessor_id)?;
        if removed {
            self.recompute()?;
        }
        Ok(removed)
    }

    pub fn remove_activity(&mut self, id: &str) -> Result<Activity, PlannerError> {
        let removed = self.graph.remove_activity(id)?;
        log_changes!(self.config.verbosity, "Removed activity {}", id);
        self.recompute()?;
        Ok(removed)
    }

    pub fn set_duration(&mut self, id: &str, duration: f64) -> Result<(), PlannerError> {
        self.graph.set_duration(id, duration)?;
        self.recompute()
    }

    /// Candidate predecessors for `activity_id` that keep the graph acyclic.
    pub fn available_predecessors(&self, activity_id: &str) -> Vec<&Activity> {
        available_predecessors(&self.graph, activity_id)
    }

    pub fn layout(&self, config: &LayoutConfig) -> NetworkLayout {
        network_layout(&self.graph, config)
    }

    /// Replace the project with an empty one.
    pub fn clear(&mut self, name: &str) {
        self.graph = ProjectGraph::new(name);
    }

    /// Restore the seeded default project.
    pub fn reset_to_default(&mut self) -> Result<(), PlannerError> {
        self.graph = ProjectGraph::warehouse_expansion()?;
        self.recompute()
    }
}

/// A product-mix problem re-solved after every edit.
#[derive(Clone, Debug)]
pub struct ProductionPlanner {
    problem: LinearProgram,
    config: SolverConfig,
    outcome: LpOutcome,
}

impl ProductionPlanner {
    /// Start from the default two-product problem.
    pub fn new(config: SolverConfig) -> Self {
        Self::with_problem(LinearProgram::default(), config)
    }

    pub fn with_problem(problem: LinearProgram, config: SolverConfig) -> Self {
        let outcome = problem.solve(&config);
        Self {
            problem,
            config,
            outcome,
        }
    }

    pub fn problem(&self) -> &LinearProgram {
        &self.problem
    }

    pub fn set_product(&mut self, slot: ProductSlot, update: &ProductUpdate) {
        self.problem.set_product(slot, update);
        self.resolve();
    }

    pub fn set_constraints(&mut self, available_hours: f64, available_material: f64) {
        self.problem
            .set_constraints(available_hours, available_material);
        self.resolve();
    }

    /// Vertices and optimum for the current problem.
    pub fn solve(&self) -> (&[Vertex], &Solution) {
        (&self.outcome.vertices, &self.outcome.solution)
    }

    pub fn outcome(&self) -> &LpOutcome {
        &self.outcome
    }

    pub fn utilization(&self) -> Option<ResourceUtilization> {
        resource_utilization(&self.problem, &self.outcome.solution)
    }

    /// Restore the default products and limits.
    pub fn reset(&mut self) {
        self.problem = LinearProgram::default();
        self.resolve();
    }

    fn resolve(&mut self) {
        self.outcome = self.problem.solve(&self.config);
    }
}

impl Default for ProductionPlanner {
    fn default() -> Self {
        Self::new(SolverConfig::default())
    }
}
