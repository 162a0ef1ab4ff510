//! Two-product linear programming.
//!
//! Maximizes total profit of products X and Y subject to non-negativity,
//! per-product inventory caps and two shared resource limits (labor hours
//! and material). The feasible region is a convex polygon, so the optimum
//! is found by enumerating its vertices and evaluating each corner.

mod optimizer;
mod utilization;
mod vertices;

use crate::config::SolverConfig;
use crate::log_changes;
use crate::models::{Product, ResourceConstraints, Solution, Vertex};

pub use optimizer::{optimize, INFEASIBLE_MESSAGE, OPTIMAL_MESSAGE};
pub use utilization::{resource_utilization, ResourceUsage, ResourceUtilization};
pub use vertices::{
    boundary_lines, enumerate_vertices, intersect, is_feasible, BoundaryKind, BoundaryLine,
};

/// Which of the two decision variables a product occupies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProductSlot {
    X,
    Y,
}

/// Partial edit of a product; `None` fields keep their current value.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProductUpdate {
    pub name: Option<String>,
    pub unit_profit: Option<f64>,
    pub time_per_unit: Option<f64>,
    pub material_per_unit: Option<f64>,
    pub max_inventory: Option<f64>,
}

impl ProductUpdate {
    fn apply_to(&self, product: &mut Product) {
        if let Some(name) = &self.name {
            product.name = name.clone();
        }
        if let Some(unit_profit) = self.unit_profit {
            product.unit_profit = unit_profit;
        }
        if let Some(time_per_unit) = self.time_per_unit {
            product.time_per_unit = time_per_unit;
        }
        if let Some(material_per_unit) = self.material_per_unit {
            product.material_per_unit = material_per_unit;
        }
        if let Some(max_inventory) = self.max_inventory {
            product.max_inventory = max_inventory;
        }
    }
}

/// Vertices of the feasible region and the optimum chosen among them.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LpOutcome {
    pub vertices: Vec<Vertex>,
    pub solution: Solution,
}

/// A two-product mix problem.
#[derive(Clone, Debug, PartialEq)]
pub struct LinearProgram {
    pub product_x: Product,
    pub product_y: Product,
    pub constraints: ResourceConstraints,
}

impl Default for LinearProgram {
    fn default() -> Self {
        Self {
            product_x: Product::new("T-shirt", 45.0, 0.7, 1.5, 50.0),
            product_y: Product::new("Sweater", 60.0, 1.2, 2.0, 50.0),
            constraints: ResourceConstraints {
                available_hours: 90.0,
                available_material: 200.0,
            },
        }
    }
}

impl LinearProgram {
    pub fn new(product_x: Product, product_y: Product, constraints: ResourceConstraints) -> Self {
        Self {
            product_x,
            product_y,
            constraints,
        }
    }

    pub fn product(&self, slot: ProductSlot) -> &Product {
        match slot {
            ProductSlot::X => &self.product_x,
            ProductSlot::Y => &self.product_y,
        }
    }

    pub fn set_product(&mut self, slot: ProductSlot, update: &ProductUpdate) {
        let product = match slot {
            ProductSlot::X => &mut self.product_x,
            ProductSlot::Y => &mut self.product_y,
        };
        update.apply_to(product);
    }

    pub fn set_constraints(&mut self, available_hours: f64, available_material: f64) {
        self.constraints = ResourceConstraints {
            available_hours,
            available_material,
        };
    }

    /// Total profit of producing `point`.
    pub fn objective(&self, point: Vertex) -> f64 {
        self.product_x.unit_profit * point.x + self.product_y.unit_profit * point.y
    }

    /// Labor hours consumed by `point`.
    pub fn time_used(&self, point: Vertex) -> f64 {
        self.product_x.time_per_unit * point.x + self.product_y.time_per_unit * point.y
    }

    /// Material consumed by `point`.
    pub fn material_used(&self, point: Vertex) -> f64 {
        self.product_x.material_per_unit * point.x + self.product_y.material_per_unit * point.y
    }

    /// Enumerate the feasible region and pick the most profitable corner.
    pub fn solve(&self, config: &SolverConfig) -> LpOutcome {
        let vertices = enumerate_vertices(self, config);
        let solution = optimize(
            &vertices,
            self.product_x.unit_profit,
            self.product_y.unit_profit,
        );

        if solution.feasible {
            log_changes!(
                config.verbosity,
                "Optimal mix: {} {} and {} {} for profit {} ({} vertices)",
                solution.x,
                self.product_x.name,
                solution.y,
                self.product_y.name,
                solution.objective_value,
                vertices.len()
            );
        } else {
            log_changes!(config.verbosity, "{}", solution.message);
        }

        LpOutcome { vertices, solution }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_problem_optimum() {
        let problem = LinearProgram::default();
        let outcome = problem.solve(&SolverConfig::default());
        let solution = &outcome.solution;

        assert!(solution.feasible);
        assert!((solution.x - 50.0).abs() < 1e-9);
        assert!((solution.y - 55.0 / 1.2).abs() < 1e-9);
        assert!((solution.objective_value - 5000.0).abs() < 1e-6);
        assert_eq!(
            solution.objective_value,
            45.0 * solution.x + 60.0 * solution.y
        );
        assert!(outcome
            .vertices
            .iter()
            .any(|v| v.x == 0.0 && v.y == 0.0));
    }

    #[test]
    fn test_optimum_dominates_all_vertices() {
        let problem = LinearProgram::default();
        let outcome = problem.solve(&SolverConfig::default());
        for v in &outcome.vertices {
            assert!(problem.objective(*v) <= outcome.solution.objective_value);
        }
    }

    #[test]
    fn test_zero_hours_falls_back_to_origin() {
        let mut problem = LinearProgram::default();
        problem.set_constraints(0.0, 200.0);
        let outcome = problem.solve(&SolverConfig::default());

        assert!(outcome.solution.feasible);
        assert_eq!((outcome.solution.x, outcome.solution.y), (0.0, 0.0));
        assert_eq!(outcome.solution.objective_value, 0.0);
    }

    #[test]
    fn test_negative_cap_is_infeasible() {
        let mut problem = LinearProgram::default();
        problem.set_product(
            ProductSlot::X,
            &ProductUpdate {
                max_inventory: Some(-1.0),
                ..Default::default()
            },
        );
        let outcome = problem.solve(&SolverConfig::default());

        assert!(outcome.vertices.is_empty());
        assert!(!outcome.solution.feasible);
        assert_eq!(outcome.solution.message, INFEASIBLE_MESSAGE);
    }

    #[test]
    fn test_partial_product_update() {
        let mut problem = LinearProgram::default();
        problem.set_product(
            ProductSlot::Y,
            &ProductUpdate {
                name: Some("Hoodie".to_string()),
                unit_profit: Some(80.0),
                ..Default::default()
            },
        );

        let y = problem.product(ProductSlot::Y);
        assert_eq!(y.name, "Hoodie");
        assert_eq!(y.unit_profit, 80.0);
        // Untouched fields keep their values
        assert_eq!(y.time_per_unit, 1.2);
        assert_eq!(y.max_inventory, 50.0);
        assert_eq!(problem.product_x, LinearProgram::default().product_x);
    }

    #[test]
    fn test_solve_is_idempotent() {
        let problem = LinearProgram::default();
        let config = SolverConfig::default();
        assert_eq!(problem.solve(&config), problem.solve(&config));
    }
}
