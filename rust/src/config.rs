//! Configuration types for the planning engines.

/// Configuration for critical path recomputation.
#[derive(Clone, Debug, Default)]
pub struct ScheduleConfig {
    /// Verbosity level: 0=silent, 1=changes, 2=checks, 3=debug.
    pub verbosity: u8,
}

/// Configuration for the two-product LP solver.
#[derive(Clone, Debug)]
pub struct SolverConfig {
    /// Slack allowed when testing a candidate point against each constraint.
    pub feasibility_tolerance: f64,
    /// Determinant magnitude below which two boundary lines count as parallel.
    pub parallel_tolerance: f64,
    /// Decimal places used when deduplicating vertices.
    pub dedup_decimals: u32,
    /// Verbosity level: 0=silent, 1=changes, 2=checks, 3=debug.
    pub verbosity: u8,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            feasibility_tolerance: 1e-3,
            parallel_tolerance: 1e-3,
            dedup_decimals: 2,
            verbosity: 0,
        }
    }
}

/// Geometry of the activity network diagram.
#[derive(Clone, Debug)]
pub struct LayoutConfig {
    /// Horizontal distance between earlyStart columns.
    pub column_spacing: f64,
    /// X offset of the first column.
    pub left_margin: f64,
    /// Height of the drawing area that rows are centered in.
    pub canvas_height: f64,
    /// Vertical distance between nodes sharing a column.
    pub row_spacing: f64,
    /// Height of a single node box
    pub node_height: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            column_spacing: 120.0,
            left_margin: 40.0,
            canvas_height: 300.0,
            row_spacing: 80.0,
            node_height: 50.0,
        }
    }
}
