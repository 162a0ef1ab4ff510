//! Feasible region vertex enumeration.
//!
//! The region is bounded by six lines: both axes, both inventory caps and
//! the two shared resource lines. Every pairwise intersection is a vertex
//! candidate; the candidates that satisfy all constraints are the corners
//! of the feasible polygon.

use rustc_hash::FxHashSet;

use crate::config::SolverConfig;
use crate::models::Vertex;
use crate::{log_checks, log_debug};

use super::LinearProgram;

/// Which constraint a boundary line belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoundaryKind {
    /// x = 0
    NonNegativeX,
    /// y = 0
    NonNegativeY,
    /// x = max inventory of product X
    InventoryX,
    /// y = max inventory of product Y
    InventoryY,
    /// time_x * x + time_y * y = available hours
    Hours,
    /// material_x * x + material_y * y = available material
    Material,
}

/// A boundary line `a * x + b * y = c`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundaryLine {
    pub kind: BoundaryKind,
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl BoundaryLine {
    fn new(kind: BoundaryKind, a: f64, b: f64, c: f64) -> Self {
        Self { kind, a, b, c }
    }
}

/// The six boundary lines of a problem.
pub fn boundary_lines(problem: &LinearProgram) -> [BoundaryLine; 6] {
    let x = &problem.product_x;
    let y = &problem.product_y;
    let limits = &problem.constraints;
    [
        BoundaryLine::new(BoundaryKind::NonNegativeX, 1.0, 0.0, 0.0),
        BoundaryLine::new(BoundaryKind::NonNegativeY, 0.0, 1.0, 0.0),
        BoundaryLine::new(BoundaryKind::InventoryX, 1.0, 0.0, x.max_inventory),
        BoundaryLine::new(BoundaryKind::InventoryY, 0.0, 1.0, y.max_inventory),
        BoundaryLine::new(
            BoundaryKind::Hours,
            x.time_per_unit,
            y.time_per_unit,
            limits.available_hours,
        ),
        BoundaryLine::new(
            BoundaryKind::Material,
            x.material_per_unit,
            y.material_per_unit,
            limits.available_material,
        ),
    ]
}

/// Intersect two lines by Cramer's rule.
///
/// Returns `None` for exactly parallel lines, or when the determinant is
/// within `parallel_tolerance` of zero, instead of dividing by it.
pub fn intersect(l1: &BoundaryLine, l2: &BoundaryLine, parallel_tolerance: f64) -> Option<Vertex> {
    let det = l1.a * l2.b - l2.a * l1.b;
    if det == 0.0 || det.abs() < parallel_tolerance {
        return None;
    }
    let x = (l1.c * l2.b - l2.c * l1.b) / det;
    let y = (l1.a * l2.c - l2.a * l1.c) / det;
    Some(Vertex::new(x, y))
}

/// Check a point against every constraint, allowing `tolerance` of rounding slack.
pub fn is_feasible(problem: &LinearProgram, point: Vertex, tolerance: f64) -> bool {
    let x = &problem.product_x;
    let y = &problem.product_y;
    let limits = &problem.constraints;

    point.x >= -tolerance
        && point.y >= -tolerance
        && point.x <= x.max_inventory + tolerance
        && point.y <= y.max_inventory + tolerance
        && problem.time_used(point) <= limits.available_hours + tolerance
        && problem.material_used(point) <= limits.available_material + tolerance
}

/// Determinant tolerance for a pair of boundary lines.
///
/// Only the two resource lines can be nearly parallel. Every other pair has
/// an axis or cap line with a unit coefficient, so its determinant is one of
/// the resource coefficients; a tiny but nonzero coefficient still yields a
/// real intercept.
fn pair_tolerance(l1: &BoundaryLine, l2: &BoundaryLine, config: &SolverConfig) -> f64 {
    match (l1.kind, l2.kind) {
        (BoundaryKind::Hours, BoundaryKind::Material)
        | (BoundaryKind::Material, BoundaryKind::Hours) => config.parallel_tolerance,
        _ => 0.0,
    }
}

fn dedup_key(point: Vertex, scale: f64) -> (i64, i64) {
    ((point.x * scale).round() as i64, (point.y * scale).round() as i64)
}

/// Order vertices by angle around their centroid so they trace the polygon.
fn sort_around_centroid(vertices: &mut [Vertex]) {
    if vertices.len() <= 1 {
        return;
    }
    let n = vertices.len() as f64;
    let cx = vertices.iter().map(|v| v.x).sum::<f64>() / n;
    let cy = vertices.iter().map(|v| v.y).sum::<f64>() / n;

    vertices.sort_by(|a, b| {
        let angle_a = (a.y - cy).atan2(a.x - cx);
        let angle_b = (b.y - cy).atan2(b.x - cx);
        angle_a.total_cmp(&angle_b)
    });
}

/// Enumerate the vertices of the feasible region.
///
/// An empty result means no point (not even the origin) satisfies every
/// constraint; it is not an error.
pub fn enumerate_vertices(problem: &LinearProgram, config: &SolverConfig) -> Vec<Vertex> {
    let verbosity = config.verbosity;
    let lines = boundary_lines(problem);
    let scale = 10f64.powi(config.dedup_decimals as i32);

    let mut seen: FxHashSet<(i64, i64)> = FxHashSet::default();
    let mut vertices: Vec<Vertex> = Vec::new();

    for i in 0..lines.len() {
        for j in (i + 1)..lines.len() {
            let tolerance = pair_tolerance(&lines[i], &lines[j], config);
            let Some(point) = intersect(&lines[i], &lines[j], tolerance) else {
                log_checks!(
                    verbosity,
                    "  {:?} and {:?} are parallel, skipping",
                    lines[i].kind,
                    lines[j].kind
                );
                continue;
            };

            if !point.x.is_finite() || !point.y.is_finite() {
                continue;
            }
            if !is_feasible(problem, point, config.feasibility_tolerance) {
                log_debug!(
                    verbosity,
                    "  {:?} x {:?} at ({}, {}) is infeasible",
                    lines[i].kind,
                    lines[j].kind,
                    point.x,
                    point.y
                );
                continue;
            }
            if seen.insert(dedup_key(point, scale)) {
                log_debug!(
                    verbosity,
                    "  {:?} x {:?} vertex ({}, {})",
                    lines[i].kind,
                    lines[j].kind,
                    point.x,
                    point.y
                );
                vertices.push(point);
            }
        }
    }

    sort_around_centroid(&mut vertices);
    vertices
}
