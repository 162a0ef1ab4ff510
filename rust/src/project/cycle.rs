//! Cycle prevention for precedence edges.

use std::collections::VecDeque;

use crate::models::Activity;

use super::ProjectGraph;

/// Check whether making `successor_id` depend on `predecessor_id` would close a cycle.
///
/// Walks backward from `predecessor_id` through existing predecessor edges;
/// reaching `successor_id` means the successor is already upstream of the
/// predecessor. A self-reference is always a cycle. Each activity is visited
/// at most once, so the walk is O(n + e).
pub fn would_create_cycle(graph: &ProjectGraph, successor_id: &str, predecessor_id: &str) -> bool {
    if successor_id == predecessor_id {
        return true;
    }

    let index = graph.index();
    let (Some(target), Some(start)) = (index.get(successor_id), index.get(predecessor_id)) else {
        return false;
    };

    let mut visited = vec![false; graph.len()];
    let mut queue: VecDeque<usize> = VecDeque::new();
    queue.push_back(start);

    while let Some(idx) = queue.pop_front() {
        if idx == target {
            return true;
        }
        if visited[idx] {
            continue;
        }
        visited[idx] = true;

        for &pred in graph.predecessor_indices(idx) {
            if !visited[pred] {
                queue.push_back(pred);
            }
        }
    }

    false
}

/// Activities that could be added as predecessors of `activity_id` without
/// creating a cycle, in insertion order.
///
/// Activities that are already predecessors are included. An unknown
/// `activity_id` yields every activity.
pub fn available_predecessors<'a>(graph: &'a ProjectGraph, activity_id: &str) -> Vec<&'a Activity> {
    graph
        .activities()
        .iter()
        .filter(|a| a.id != activity_id && !would_create_cycle(graph, activity_id, &a.id))
        .collect()
}
