//! Activity-on-node network layout.
//!
//! A pure function from a recomputed graph to diagram coordinates: one
//! column per distinct early start, rows within a column ordered by ID.

use crate::config::LayoutConfig;
use crate::project::ProjectGraph;

/// A positioned activity node.
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutNode {
    pub id: String,
    pub column: usize,
    pub row: usize,
    pub x: f64,
    pub y: f64,
    pub is_critical: bool,
}

/// A precedence arrow from predecessor to successor.
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutEdge {
    pub from: String,
    pub to: String,
    /// Both endpoints are critical.
    pub is_critical: bool,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct NetworkLayout {
    pub nodes: Vec<LayoutNode>,
    pub edges: Vec<LayoutEdge>,
}

impl NetworkLayout {
    pub fn node(&self, id: &str) -> Option<&LayoutNode> {
        self.nodes.iter().find(|n| n.id == id)
    }
}

fn row_y(row: usize, rows_in_column: usize, config: &LayoutConfig) -> f64 {
    if rows_in_column == 1 {
        return config.canvas_height / 2.0 - config.node_height / 2.0;
    }
    let start = (config.canvas_height - (rows_in_column - 1) as f64 * config.row_spacing) / 2.0;
    start + row as f64 * config.row_spacing
}

/// Lay out the activity network of an already recomputed graph.
pub fn network_layout(graph: &ProjectGraph, config: &LayoutConfig) -> NetworkLayout {
    let activities = graph.activities();

    // Group positions by early start; equal values share a column
    let mut columns: Vec<(f64, Vec<usize>)> = Vec::new();
    for (idx, activity) in activities.iter().enumerate() {
        match columns
            .iter_mut()
            .find(|(start, _)| *start == activity.early_start)
        {
            Some((_, members)) => members.push(idx),
            None => columns.push((activity.early_start, vec![idx])),
        }
    }
    columns.sort_by(|a, b| a.0.total_cmp(&b.0));

    let mut nodes = Vec::with_capacity(activities.len());
    for (column, (_, members)) in columns.iter_mut().enumerate() {
        members.sort_by(|&a, &b| activities[a].id.cmp(&activities[b].id));
        let rows_in_column = members.len();

        for (row, &idx) in members.iter().enumerate() {
            let activity = &activities[idx];
            nodes.push(LayoutNode {
                id: activity.id.clone(),
                column,
                row,
                x: column as f64 * config.column_spacing + config.left_margin,
                y: row_y(row, rows_in_column, config),
                is_critical: activity.is_critical,
            });
        }
    }

    let mut edges = Vec::new();
    for (idx, activity) in activities.iter().enumerate() {
        for &pred in graph.predecessor_indices(idx) {
            let predecessor = &activities[pred];
            edges.push(LayoutEdge {
                from: predecessor.id.clone(),
                to: activity.id.clone(),
                is_critical: activity.is_critical && predecessor.is_critical,
            });
        }
    }

    NetworkLayout { nodes, edges }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ScheduleConfig;
    use crate::critical_path::recompute_schedule;

    fn warehouse_layout() -> NetworkLayout {
        let mut graph = ProjectGraph::warehouse_expansion().unwrap();
        recompute_schedule(&mut graph, &ScheduleConfig::default()).unwrap();
        network_layout(&graph, &LayoutConfig::default())
    }

    #[test]
    fn test_columns_follow_early_start() {
        let layout = warehouse_layout();
        assert_eq!(layout.nodes.len(), 10);

        // ES: A=0, B/C=2, D/E=6, G=9, F=11, H=15, I=18, J=20
        assert_eq!(layout.node("A").unwrap().column, 0);
        assert_eq!(layout.node("B").unwrap().column, 1);
        assert_eq!(layout.node("C").unwrap().column, 1);
        assert_eq!(layout.node("D").unwrap().column, 2);
        assert_eq!(layout.node("E").unwrap().column, 2);
        assert_eq!(layout.node("G").unwrap().column, 3);
        assert_eq!(layout.node("F").unwrap().column, 4);
        assert_eq!(layout.node("J").unwrap().column, 7);
    }

    #[test]
    fn test_coordinates() {
        let layout = warehouse_layout();

        let a = layout.node("A").unwrap();
        assert_eq!((a.x, a.y), (40.0, 125.0));

        // Two nodes in a column: start = (300 - 80) / 2 = 110
        let b = layout.node("B").unwrap();
        let c = layout.node("C").unwrap();
        assert_eq!((b.x, b.row, b.y), (160.0, 0, 110.0));
        assert_eq!((c.x, c.row, c.y), (160.0, 1, 190.0));
    }

    #[test]
    fn test_edges_flag_critical_links() {
        let layout = warehouse_layout();
        assert_eq!(layout.edges.len(), 11);

        let edge = |from: &str, to: &str| {
            layout
                .edges
                .iter()
                .find(|e| e.from == from && e.to == to)
                .unwrap()
                .is_critical
        };
        assert!(edge("A", "C"));
        assert!(edge("C", "D"));
        assert!(!edge("A", "B"));
        assert!(!edge("C", "E"));
        assert!(!edge("G", "H"));
    }

    #[test]
    fn test_empty_graph_layout() {
        let graph = ProjectGraph::new("Empty");
        assert_eq!(
            network_layout(&graph, &LayoutConfig::default()),
            NetworkLayout::default()
        );
    }
}
