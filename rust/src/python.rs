//! Python bindings for the planning engines.
//!
//! Built with the `python` feature (maturin enables `extension-module`).
//! Engine errors surface as `ValueError`.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use std::collections::HashMap;

use crate::config::{LayoutConfig, ScheduleConfig, SolverConfig};
use crate::lp::{ProductSlot, ProductUpdate, ResourceUsage};
use crate::models::{Activity, Solution, Vertex};
use crate::planner::{ProductionPlanner, ProjectPlanner};
use crate::project::{would_create_cycle, ProjectGraph};

fn value_error(e: impl std::fmt::Display) -> PyErr {
    PyValueError::new_err(e.to_string())
}

/// Read-only snapshot of a scheduled activity.
#[pyclass(name = "Activity")]
#[derive(Clone, Debug)]
pub struct PyActivity {
    #[pyo3(get)]
    pub id: String,
    #[pyo3(get)]
    pub name: String,
    #[pyo3(get)]
    pub duration: f64,
    #[pyo3(get)]
    pub predecessors: Vec<String>,
    #[pyo3(get)]
    pub early_start: f64,
    #[pyo3(get)]
    pub early_finish: f64,
    #[pyo3(get)]
    pub late_start: f64,
    #[pyo3(get)]
    pub late_finish: f64,
    #[pyo3(get)]
    pub slack: f64,
    #[pyo3(get)]
    pub is_critical: bool,
}

impl From<&Activity> for PyActivity {
    fn from(a: &Activity) -> Self {
        Self {
            id: a.id.clone(),
            name: a.name.clone(),
            duration: a.duration,
            predecessors: a.predecessors.clone(),
            early_start: a.early_start,
            early_finish: a.early_finish,
            late_start: a.late_start,
            late_finish: a.late_finish,
            slack: a.slack,
            is_critical: a.is_critical,
        }
    }
}

#[pymethods]
impl PyActivity {
    fn __repr__(&self) -> String {
        format!(
            "Activity(id={:?}, duration={}, ES={}, EF={}, slack={})",
            self.id, self.duration, self.early_start, self.early_finish, self.slack
        )
    }
}

#[pyclass(name = "Vertex")]
#[derive(Clone, Debug)]
pub struct PyVertex {
    #[pyo3(get)]
    pub x: f64,
    #[pyo3(get)]
    pub y: f64,
}

impl From<&Vertex> for PyVertex {
    fn from(v: &Vertex) -> Self {
        Self { x: v.x, y: v.y }
    }
}

#[pymethods]
impl PyVertex {
    fn __repr__(&self) -> String {
        format!("Vertex(x={}, y={})", self.x, self.y)
    }
}

#[pyclass(name = "Solution")]
#[derive(Clone, Debug)]
pub struct PySolution {
    #[pyo3(get)]
    pub x: f64,
    #[pyo3(get)]
    pub y: f64,
    #[pyo3(get)]
    pub objective_value: f64,
    #[pyo3(get)]
    pub feasible: bool,
    #[pyo3(get)]
    pub message: String,
}

impl From<&Solution> for PySolution {
    fn from(s: &Solution) -> Self {
        Self {
            x: s.x,
            y: s.y,
            objective_value: s.objective_value,
            feasible: s.feasible,
            message: s.message.clone(),
        }
    }
}

#[pymethods]
impl PySolution {
    fn __repr__(&self) -> String {
        format!(
            "Solution(x={}, y={}, objective_value={}, feasible={})",
            self.x, self.y, self.objective_value, self.feasible
        )
    }
}

/// CPM project planner; every edit recomputes the schedule.
#[pyclass(name = "ProjectPlanner")]
pub struct PyProjectPlanner {
    inner: ProjectPlanner,
}

#[pymethods]
impl PyProjectPlanner {
    #[new]
    #[pyo3(signature = (name=None, verbosity=0))]
    fn new(name: Option<String>, verbosity: u8) -> PyResult<Self> {
        // A name starts an empty project; otherwise load the seeded one
        let graph = match name {
            Some(name) => ProjectGraph::new(name),
            None => ProjectGraph::warehouse_expansion().map_err(value_error)?,
        };
        ProjectPlanner::with_graph(graph, ScheduleConfig { verbosity })
            .map(|inner| Self { inner })
            .map_err(value_error)
    }

    #[getter]
    fn name(&self) -> String {
        self.inner.graph().name().to_string()
    }

    #[getter]
    fn total_duration(&self) -> f64 {
        self.inner.graph().total_duration()
    }

    #[getter]
    fn critical_path(&self) -> Vec<String> {
        self.inner.graph().critical_path().to_vec()
    }

    #[getter]
    fn activities(&self) -> Vec<PyActivity> {
        self.inner
            .graph()
            .activities()
            .iter()
            .map(PyActivity::from)
            .collect()
    }

    #[pyo3(signature = (name, duration, predecessors=None))]
    fn add_activity(
        &mut self,
        name: &str,
        duration: f64,
        predecessors: Option<Vec<String>>,
    ) -> PyResult<PyActivity> {
        let predecessors = predecessors.unwrap_or_default();
        self.inner
            .add_activity(name, duration, &predecessors)
            .map(|a| PyActivity::from(&a))
            .map_err(value_error)
    }

    fn add_predecessor(&mut self, activity_id: &str, predecessor_id: &str) -> PyResult<bool> {
        self.inner
            .add_predecessor(activity_id, predecessor_id)
            .map_err(value_error)
    }

    fn remove_predecessor(&mut self, activity_id: &str, predecessor_id: &str) -> PyResult<bool> {
        self.inner
            .remove_predecessor(activity_id, predecessor_id)
            .map_err(value_error)
    }

    fn remove_activity(&mut self, id: &str) -> PyResult<PyActivity> {
        self.inner
            .remove_activity(id)
            .map(|a| PyActivity::from(&a))
            .map_err(value_error)
    }

    fn set_duration(&mut self, id: &str, duration: f64) -> PyResult<()> {
        self.inner.set_duration(id, duration).map_err(value_error)
    }

    fn would_create_cycle(&self, successor_id: &str, predecessor_id: &str) -> bool {
        would_create_cycle(self.inner.graph(), successor_id, predecessor_id)
    }

    fn available_predecessors(&self, activity_id: &str) -> Vec<String> {
        self.inner
            .available_predecessors(activity_id)
            .iter()
            .map(|a| a.id.clone())
            .collect()
    }

    /// Network diagram as (nodes, edges).
    ///
    /// Nodes are (id, x, y, is_critical); edges are (from, to, is_critical).
    #[allow(clippy::type_complexity)]
    fn layout(&self) -> (Vec<(String, f64, f64, bool)>, Vec<(String, String, bool)>) {
        let layout = self.inner.layout(&LayoutConfig::default());
        let nodes = layout
            .nodes
            .into_iter()
            .map(|n| (n.id, n.x, n.y, n.is_critical))
            .collect();
        let edges = layout
            .edges
            .into_iter()
            .map(|e| (e.from, e.to, e.is_critical))
            .collect();
        (nodes, edges)
    }

    fn clear(&mut self, name: &str) {
        self.inner.clear(name);
    }

    fn reset_to_default(&mut self) -> PyResult<()> {
        self.inner.reset_to_default().map_err(value_error)
    }

    fn __repr__(&self) -> String {
        let graph = self.inner.graph();
        format!(
            "ProjectPlanner(name={:?}, activities={}, total_duration={})",
            graph.name(),
            graph.len(),
            graph.total_duration()
        )
    }
}

fn parse_slot(which: &str) -> PyResult<ProductSlot> {
    match which {
        "x" | "X" => Ok(ProductSlot::X),
        "y" | "Y" => Ok(ProductSlot::Y),
        other => Err(PyValueError::new_err(format!(
            "Unknown product slot: {} (expected \"x\" or \"y\")",
            other
        ))),
    }
}

fn usage_tuple(usage: &ResourceUsage) -> (f64, f64, f64) {
    (usage.used, usage.available, usage.percent)
}

/// Two-product LP planner; every edit re-solves the problem.
#[pyclass(name = "ProductionPlanner")]
pub struct PyProductionPlanner {
    inner: ProductionPlanner,
}

#[pymethods]
impl PyProductionPlanner {
    #[new]
    #[pyo3(signature = (
        feasibility_tolerance=None,
        parallel_tolerance=None,
        dedup_decimals=None,
        verbosity=None
    ))]
    fn new(
        feasibility_tolerance: Option<f64>,
        parallel_tolerance: Option<f64>,
        dedup_decimals: Option<u32>,
        verbosity: Option<u8>,
    ) -> Self {
        let defaults = SolverConfig::default();
        let config = SolverConfig {
            feasibility_tolerance: feasibility_tolerance.unwrap_or(defaults.feasibility_tolerance),
            parallel_tolerance: parallel_tolerance.unwrap_or(defaults.parallel_tolerance),
            dedup_decimals: dedup_decimals.unwrap_or(defaults.dedup_decimals),
            verbosity: verbosity.unwrap_or(defaults.verbosity),
        };
        Self {
            inner: ProductionPlanner::new(config),
        }
    }

    #[pyo3(signature = (
        which,
        name=None,
        unit_profit=None,
        time_per_unit=None,
        material_per_unit=None,
        max_inventory=None
    ))]
    #[allow(clippy::too_many_arguments)]
    fn set_product(
        &mut self,
        which: &str,
        name: Option<String>,
        unit_profit: Option<f64>,
        time_per_unit: Option<f64>,
        material_per_unit: Option<f64>,
        max_inventory: Option<f64>,
    ) -> PyResult<()> {
        let slot = parse_slot(which)?;
        self.inner.set_product(
            slot,
            &ProductUpdate {
                name,
                unit_profit,
                time_per_unit,
                material_per_unit,
                max_inventory,
            },
        );
        Ok(())
    }

    fn set_constraints(&mut self, available_hours: f64, available_material: f64) {
        self.inner
            .set_constraints(available_hours, available_material);
    }

    fn solve(&self) -> (Vec<PyVertex>, PySolution) {
        let (vertices, solution) = self.inner.solve();
        (
            vertices.iter().map(PyVertex::from).collect(),
            PySolution::from(solution),
        )
    }

    /// Resource usage as {"time" | "material" | "storage": (used, available, percent)}.
    fn utilization(&self) -> Option<HashMap<String, (f64, f64, f64)>> {
        self.inner.utilization().map(|report| {
            HashMap::from([
                ("time".to_string(), usage_tuple(&report.time)),
                ("material".to_string(), usage_tuple(&report.material)),
                ("storage".to_string(), usage_tuple(&report.storage)),
            ])
        })
    }

    fn reset(&mut self) {
        self.inner.reset();
    }

    fn __repr__(&self) -> String {
        let problem = self.inner.problem();
        format!(
            "ProductionPlanner(x={:?}, y={:?}, hours={}, material={})",
            problem.product_x.name,
            problem.product_y.name,
            problem.constraints.available_hours,
            problem.constraints.available_material
        )
    }
}

/// The opsplan.rust Python module.
#[pymodule]
fn rust(m: &Bound<'_, PyModule>) -> PyResult<()> {
    // Records
    m.add_class::<PyActivity>()?;
    m.add_class::<PyVertex>()?;
    m.add_class::<PySolution>()?;

    // Planners
    m.add_class::<PyProjectPlanner>()?;
    m.add_class::<PyProductionPlanner>()?;

    Ok(())
}
