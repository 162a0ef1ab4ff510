//! Corner-point optimization of the product mix.

use crate::models::{Solution, Vertex};

pub const OPTIMAL_MESSAGE: &str = "Optimal solution found";
pub const INFEASIBLE_MESSAGE: &str = "No feasible solution found: no production plan satisfies every constraint";

/// Pick the vertex maximizing `profit_x * x + profit_y * y`.
///
/// A bounded linear objective over a convex polygon peaks at a corner, so
/// evaluating each vertex is enough. The first vertex wins ties. An empty
/// vertex set yields an infeasible solution at the origin.
pub fn optimize(vertices: &[Vertex], profit_x: f64, profit_y: f64) -> Solution {
    let mut best: Option<(Vertex, f64)> = None;

    for &vertex in vertices {
        let value = profit_x * vertex.x + profit_y * vertex.y;
        match best {
            Some((_, best_value)) if value <= best_value => {}
            _ => best = Some((vertex, value)),
        }
    }

    match best {
        Some((vertex, value)) => Solution {
            x: vertex.x,
            y: vertex.y,
            objective_value: value,
            feasible: true,
            message: OPTIMAL_MESSAGE.to_string(),
        },
        None => Solution {
            message: INFEASIBLE_MESSAGE.to_string(),
            ..Solution::default()
        },
    }
}
