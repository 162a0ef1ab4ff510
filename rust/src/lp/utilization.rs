//! Resource utilization of a production plan.

use crate::models::Solution;

use super::LinearProgram;

/// Usage of a single resource.
#[derive(Clone, Debug, PartialEq)]
pub struct ResourceUsage {
    pub used: f64,
    pub available: f64,
    /// Share of `available` consumed, in percent. Zero when nothing is available.
    pub percent: f64,
}

impl ResourceUsage {
    fn new(used: f64, available: f64) -> Self {
        let percent = if available > 0.0 {
            used / available * 100.0
        } else {
            0.0
        };
        Self {
            used,
            available,
            percent,
        }
    }
}

/// How much of each shared resource the chosen plan consumes.
#[derive(Clone, Debug, PartialEq)]
pub struct ResourceUtilization {
    pub time: ResourceUsage,
    pub material: ResourceUsage,
    /// Units stored (x + y) against both inventory caps combined.
    pub storage: ResourceUsage,
}

/// Utilization report for a solution; `None` when it is infeasible.
pub fn resource_utilization(
    problem: &LinearProgram,
    solution: &Solution,
) -> Option<ResourceUtilization> {
    if !solution.feasible {
        return None;
    }
    let point = solution.vertex();
    Some(ResourceUtilization {
        time: ResourceUsage::new(
            problem.time_used(point),
            problem.constraints.available_hours,
        ),
        material: ResourceUsage::new(
            problem.material_used(point),
            problem.constraints.available_material,
        ),
        storage: ResourceUsage::new(
            solution.x + solution.y,
            problem.product_x.max_inventory + problem.product_y.max_inventory,
        ),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Vertex;

    fn feasible_at(x: f64, y: f64) -> Solution {
        Solution {
            x,
            y,
            objective_value: 0.0,
            feasible: true,
            message: String::new(),
        }
    }

    #[test]
    fn test_utilization_of_default_plan() {
        let problem = LinearProgram::default();
        let report = resource_utilization(&problem, &feasible_at(50.0, 25.0)).unwrap();

        // 0.7*50 + 1.2*25 = 65 of 90 hours
        assert!((report.time.used - 65.0).abs() < 1e-9);
        assert_eq!(report.time.available, 90.0);
        assert!((report.time.percent - 65.0 / 90.0 * 100.0).abs() < 1e-9);

        // 1.5*50 + 2*25 = 125 of 200 material
        assert!((report.material.used - 125.0).abs() < 1e-9);
        assert!((report.material.percent - 62.5).abs() < 1e-9);

        assert_eq!(report.storage.used, 75.0);
        assert_eq!(report.storage.available, 100.0);
        assert_eq!(report.storage.percent, 75.0);
    }

    #[test]
    fn test_zero_available_reports_zero_percent() {
        let mut problem = LinearProgram::default();
        problem.constraints.available_hours = 0.0;
        let report = resource_utilization(&problem, &feasible_at(0.0, 0.0)).unwrap();
        assert_eq!(report.time.percent, 0.0);
        assert_eq!(report.time.used, problem.time_used(Vertex::origin()));
    }

    #[test]
    fn test_infeasible_has_no_report() {
        let problem = LinearProgram::default();
        assert!(resource_utilization(&problem, &Solution::default()).is_none());
    }
}
