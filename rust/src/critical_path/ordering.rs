//! Topological ordering of the project graph.

use std::collections::VecDeque;

use crate::project::ProjectGraph;

use super::types::CriticalPathError;

/// Order activity positions so every predecessor precedes its successors.
///
/// Kahn's algorithm seeded in insertion order, so the result is
/// deterministic for a given graph. Fails with `InconsistentGraph` when a
/// cycle leaves activities that can never be released.
pub fn topological_order(graph: &ProjectGraph) -> Result<Vec<usize>, CriticalPathError> {
    let n = graph.len();

    let mut in_degree: Vec<usize> = (0..n).map(|idx| graph.predecessor_indices(idx).len()).collect();

    let mut queue: VecDeque<usize> = (0..n).filter(|&idx| in_degree[idx] == 0).collect();
    let mut order: Vec<usize> = Vec::with_capacity(n);

    while let Some(idx) = queue.pop_front() {
        order.push(idx);

        for &succ in graph.successor_indices(idx) {
            in_degree[succ] -= 1;
            if in_degree[succ] == 0 {
                queue.push_back(succ);
            }
        }
    }

    if order.len() != n {
        return Err(CriticalPathError::InconsistentGraph {
            unresolved: n - order.len(),
            total: n,
        });
    }

    Ok(order)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Activity;

    fn make_activity(id: &str, preds: &[&str]) -> Activity {
        Activity::new(
            id,
            format!("Activity {}", id),
            1.0,
            preds.iter().map(|p| p.to_string()).collect(),
        )
    }

    fn position_of(order: &[usize], idx: usize) -> usize {
        order.iter().position(|&i| i == idx).unwrap()
    }

    #[test]
    fn test_order_respects_precedence() {
        let graph = ProjectGraph::warehouse_expansion().unwrap();
        let order = topological_order(&graph).unwrap();
        assert_eq!(order.len(), graph.len());

        for (idx, _) in graph.activities().iter().enumerate() {
            for &pred in graph.predecessor_indices(idx) {
                assert!(position_of(&order, pred) < position_of(&order, idx));
            }
        }
    }

    #[test]
    fn test_unsorted_input() {
        // Successors listed before their predecessors
        let graph = ProjectGraph::from_activities(
            "reversed",
            vec![
                make_activity("C", &["B"]),
                make_activity("B", &["A"]),
                make_activity("A", &[]),
            ],
        )
        .unwrap();

        let order = topological_order(&graph).unwrap();
        assert_eq!(order, vec![2, 1, 0]);
    }

    #[test]
    fn test_cycle_reported() {
        let graph = ProjectGraph::from_activities(
            "cyclic",
            vec![
                make_activity("A", &[]),
                make_activity("B", &["A", "C"]),
                make_activity("C", &["B"]),
            ],
        )
        .unwrap();

        assert_eq!(
            topological_order(&graph),
            Err(CriticalPathError::InconsistentGraph {
                unresolved: 2,
                total: 3,
            })
        );
    }

    #[test]
    fn test_empty_graph() {
        let graph = ProjectGraph::new("empty");
        assert_eq!(topological_order(&graph), Ok(vec![]));
    }
}
