//! Types for critical path scheduling.

use thiserror::Error;

/// Errors from a schedule recompute.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CriticalPathError {
    /// Some activities could not be ordered; the precedence graph has a cycle.
    #[error("Inconsistent graph: {unresolved} of {total} activities could not be ordered (circular dependency)")]
    InconsistentGraph { unresolved: usize, total: usize },
}

/// Per-activity timing computed by the forward and backward passes.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ActivityTiming {
    /// Earliest possible start time (from forward pass).
    pub early_start: f64,
    /// Earliest possible finish time (from forward pass).
    pub early_finish: f64,
    /// Latest allowable start time (from backward pass).
    pub late_start: f64,
    /// Latest allowable finish time (from backward pass).
    pub late_finish: f64,
    /// Slack = late_start - early_start.
    pub slack: f64,
}

impl ActivityTiming {
    /// Durations are exact values, so criticality is an exact zero test.
    pub fn is_critical(&self) -> bool {
        self.slack == 0.0
    }
}

/// Outcome of a full schedule computation, indexed by activity position.
#[derive(Clone, Debug, Default)]
pub struct ScheduleResult {
    pub timings: Vec<ActivityTiming>,
    /// Makespan: max early finish over all activities.
    pub total_duration: f64,
    /// Critical activity positions by ascending early start, ties by position.
    pub critical_path: Vec<usize>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timing_critical() {
        let timing = ActivityTiming {
            early_start: 0.0,
            early_finish: 5.0,
            late_start: 0.0,
            late_finish: 5.0,
            slack: 0.0,
        };
        assert!(timing.is_critical());

        let timing_with_slack = ActivityTiming {
            early_start: 2.0,
            early_finish: 5.0,
            late_start: 3.0,
            late_finish: 6.0,
            slack: 1.0,
        };
        assert!(!timing_with_slack.is_critical());
    }

    #[test]
    fn test_error_message() {
        let err = CriticalPathError::InconsistentGraph {
            unresolved: 2,
            total: 5,
        };
        assert!(err.to_string().contains("2 of 5"));
    }
}
