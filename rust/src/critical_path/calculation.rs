//! Critical path calculation using forward and backward passes.

use crate::config::ScheduleConfig;
use crate::project::ProjectGraph;
use crate::{log_changes, log_debug};

use super::ordering::topological_order;
use super::types::{ActivityTiming, CriticalPathError, ScheduleResult};

/// Compute early/late times, slack and the critical path for every activity.
///
/// The graph is only borrowed; nothing is written back. Both passes walk a
/// single topological order, so the forward pass (and with it the total
/// duration) is complete before the backward pass starts.
pub fn calculate_schedule(graph: &ProjectGraph) -> Result<ScheduleResult, CriticalPathError> {
    let order = topological_order(graph)?;
    let activities = graph.activities();
    let mut timings: Vec<ActivityTiming> = vec![ActivityTiming::default(); graph.len()];

    // Forward pass: earliest start = max of predecessor finishes
    for &idx in &order {
        let mut early_start = 0.0;
        for &pred in graph.predecessor_indices(idx) {
            let pred_finish = timings[pred].early_finish;
            if pred_finish > early_start {
                early_start = pred_finish;
            }
        }

        let timing = &mut timings[idx];
        timing.early_start = early_start;
        timing.early_finish = early_start + activities[idx].duration;
    }

    let total_duration = timings
        .iter()
        .map(|t| t.early_finish)
        .fold(0.0, f64::max);

    // Backward pass: latest finish = min of successor latest starts
    for &idx in order.iter().rev() {
        let successors = graph.successor_indices(idx);
        let late_finish = if successors.is_empty() {
            total_duration
        } else {
            successors
                .iter()
                .map(|&succ| timings[succ].late_start)
                .fold(f64::INFINITY, f64::min)
        };

        let timing = &mut timings[idx];
        timing.late_finish = late_finish;
        timing.late_start = late_finish - activities[idx].duration;
        timing.slack = timing.late_start - timing.early_start;
    }

    // Stable sort keeps insertion order among equal early starts
    let mut critical_path: Vec<usize> = (0..timings.len())
        .filter(|&idx| timings[idx].is_critical())
        .collect();
    critical_path.sort_by(|&a, &b| timings[a].early_start.total_cmp(&timings[b].early_start));

    Ok(ScheduleResult {
        timings,
        total_duration,
        critical_path,
    })
}

/// Recompute the schedule and write the derived fields back into the graph.
///
/// On failure the graph keeps the derived fields of its last successful
/// recompute; nothing is partially updated.
pub fn recompute_schedule(
    graph: &mut ProjectGraph,
    config: &ScheduleConfig,
) -> Result<(), CriticalPathError> {
    let verbosity = config.verbosity;
    let result = match calculate_schedule(graph) {
        Ok(result) => result,
        Err(e) => {
            log_changes!(verbosity, "Schedule recompute aborted: {}", e);
            return Err(e);
        }
    };

    let critical_ids: Vec<String> = result
        .critical_path
        .iter()
        .map(|&idx| graph.activities()[idx].id.clone())
        .collect();

    for (activity, timing) in graph.activities_mut().iter_mut().zip(&result.timings) {
        activity.early_start = timing.early_start;
        activity.early_finish = timing.early_finish;
        activity.late_start = timing.late_start;
        activity.late_finish = timing.late_finish;
        activity.slack = timing.slack;
        activity.is_critical = timing.is_critical();

        log_debug!(
            verbosity,
            "  {} ES={} EF={} LS={} LF={} slack={}",
            activity.id,
            activity.early_start,
            activity.early_finish,
            activity.late_start,
            activity.late_finish,
            activity.slack
        );
    }

    log_changes!(
        verbosity,
        "Schedule for {:?}: total duration {}, critical path [{}]",
        graph.name(),
        result.total_duration,
        critical_ids.join(", ")
    );

    graph.set_schedule_summary(result.total_duration, critical_ids);
    Ok(())
}
