//! Core data types shared by the scheduling and LP engines.

/// An activity in the project precedence graph.
///
/// The timing fields are derived: they are only meaningful after the owning
/// `ProjectGraph` has been recomputed.
#[derive(Clone, Debug, PartialEq)]
pub struct Activity {
    pub id: String,
    pub name: String,
    pub duration: f64,
    /// IDs of activities that must finish before this one starts.
    pub predecessors: Vec<String>,
    pub early_start: f64,
    pub early_finish: f64,
    pub late_start: f64,
    pub late_finish: f64,
    /// Slack = late_start - early_start.
    pub slack: f64,
    pub is_critical: bool,
}

impl Activity {
    /// Create an activity with zeroed derived fields.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        duration: f64,
        predecessors: Vec<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            duration,
            predecessors,
            early_start: 0.0,
            early_finish: 0.0,
            late_start: 0.0,
            late_finish: 0.0,
            slack: 0.0,
            is_critical: false,
        }
    }

    /// Reset every derived field to zero.
    pub fn clear_timing(&mut self) {
        self.early_start = 0.0;
        self.early_finish = 0.0;
        self.late_start = 0.0;
        self.late_finish = 0.0;
        self.slack = 0.0;
        self.is_critical = false;
    }
}

/// A product competing for shared resources in the LP problem.
#[derive(Clone, Debug, PartialEq)]
pub struct Product {
    pub name: String,
    /// Profit earned per unit produced (objective coefficient).
    pub unit_profit: f64,
    /// Labor hours consumed per unit.
    pub time_per_unit: f64,
    /// Material consumed per unit.
    pub material_per_unit: f64,
    /// Storage cap on units produced.
    pub max_inventory: f64,
}

impl Product {
    pub fn new(
        name: impl Into<String>,
        unit_profit: f64,
        time_per_unit: f64,
        material_per_unit: f64,
        max_inventory: f64,
    ) -> Self {
        Self {
            name: name.into(),
            unit_profit,
            time_per_unit,
            material_per_unit,
            max_inventory,
        }
    }
}

/// Shared resource limits both products draw from.
#[derive(Clone, Debug, PartialEq)]
pub struct ResourceConstraints {
    pub available_hours: f64,
    pub available_material: f64,
}

/// A point of the feasible region (x = units of product X, y = units of product Y).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vertex {
    pub x: f64,
    pub y: f64,
}

impl Vertex {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn origin() -> Self {
        Self { x: 0.0, y: 0.0 }
    }
}

/// Result of optimizing the product mix.
#[derive(Clone, Debug, PartialEq)]
pub struct Solution {
    pub x: f64,
    pub y: f64,
    pub objective_value: f64,
    pub feasible: bool,
    pub message: String,
}

impl Solution {
    /// The production plan as a point.
    pub fn vertex(&self) -> Vertex {
        Vertex::new(self.x, self.y)
    }
}

impl Default for Solution {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            objective_value: 0.0,
            feasible: false,
            message: String::new(),
        }
    }
}
