//! Project precedence graph.
//!
//! Activities live in an ordered arena (insertion order matters for
//! critical path tie-breaks and display). An ID index and a successor
//! adjacency list are rebuilt after every structural mutation so the
//! scheduling passes can walk the graph in both directions by position.

mod cycle;
mod index;

use thiserror::Error;

use crate::models::Activity;

pub use cycle::{available_predecessors, would_create_cycle};
pub use index::{next_activity_id, ActivityIdx, ActivityIndex};

/// Errors from structural edits of the project graph.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProjectError {
    #[error("Adding {predecessor} as a predecessor of {activity} would create a cycle")]
    CycleDetected {
        activity: String,
        predecessor: String,
    },
    #[error("Unknown predecessor reference: {0}")]
    UnknownPredecessorReference(String),
    #[error("Activity not found: {0}")]
    ActivityNotFound(String),
    #[error("Duplicate activity ID: {0}")]
    DuplicateId(String),
    #[error("Invalid activity: {0}")]
    InvalidActivity(String),
}

/// Ordered set of activities plus the derived project-level schedule.
#[derive(Clone, Debug)]
pub struct ProjectGraph {
    name: String,
    activities: Vec<Activity>,
    index: ActivityIndex,
    /// Predecessor positions, parallel to `activities`.
    predecessors: Vec<Vec<ActivityIdx>>,
    /// Exact inverse of `predecessors`.
    successors: Vec<Vec<ActivityIdx>>,
    total_duration: f64,
    critical_path: Vec<String>,
}

fn validate_fields(name: &str, duration: f64) -> Result<(), ProjectError> {
    if name.trim().is_empty() {
        return Err(ProjectError::InvalidActivity(
            "activity name must not be empty".to_string(),
        ));
    }
    validate_duration(duration)
}

fn validate_duration(duration: f64) -> Result<(), ProjectError> {
    if !duration.is_finite() || duration < 0.0 {
        return Err(ProjectError::InvalidActivity(format!(
            "duration must be a finite non-negative number, got {}",
            duration
        )));
    }
    Ok(())
}

impl ProjectGraph {
    /// Create an empty project.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            activities: Vec::new(),
            index: ActivityIndex::default(),
            predecessors: Vec::new(),
            successors: Vec::new(),
            total_duration: 0.0,
            critical_path: Vec::new(),
        }
    }

    /// Build a project from an existing activity sequence.
    ///
    /// IDs must be unique and every predecessor must reference an activity
    /// in the sequence. Acyclicity is not checked here; a cyclic snapshot is
    /// reported by the scheduler as an inconsistent graph.
    pub fn from_activities(
        name: impl Into<String>,
        activities: Vec<Activity>,
    ) -> Result<Self, ProjectError> {
        let index = ActivityIndex::build(&activities)?;
        for activity in &activities {
            validate_fields(&activity.name, activity.duration)?;
            for pred in &activity.predecessors {
                if !index.contains(pred) {
                    return Err(ProjectError::UnknownPredecessorReference(pred.clone()));
                }
            }
        }

        let mut graph = Self {
            name: name.into(),
            activities,
            index,
            predecessors: Vec::new(),
            successors: Vec::new(),
            total_duration: 0.0,
            critical_path: Vec::new(),
        };
        graph.rebuild_links();
        Ok(graph)
    }

    /// The seeded "Warehouse Expansion" project.
    ///
    /// Goes through the same validation as any other activity sequence.
    pub fn warehouse_expansion() -> Result<Self, ProjectError> {
        let seed: [(&str, &str, f64, &[&str]); 10] = [
            ("A", "Survey available space", 2.0, &[]),
            ("B", "Quote materials", 3.0, &["A"]),
            ("C", "Design floor layout", 4.0, &["A"]),
            ("D", "Purchase materials", 5.0, &["B", "C"]),
            ("E", "Prepare area", 3.0, &["C"]),
            ("F", "Build shelving", 4.0, &["D"]),
            ("G", "Electrical installation", 2.0, &["E"]),
            ("H", "Assemble warehouse", 3.0, &["F", "G"]),
            ("I", "Testing and adjustments", 2.0, &["H"]),
            ("J", "Staff training", 1.0, &["I"]),
        ];

        let activities: Vec<Activity> = seed
            .iter()
            .map(|(id, name, duration, preds)| {
                Activity::new(
                    *id,
                    *name,
                    *duration,
                    preds.iter().map(|p| p.to_string()).collect(),
                )
            })
            .collect();

        Self::from_activities("Warehouse Expansion", activities)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Activities in insertion order.
    pub fn activities(&self) -> &[Activity] {
        &self.activities
    }

    pub fn get(&self, id: &str) -> Option<&Activity> {
        self.index.get(id).map(|idx| &self.activities[idx])
    }

    pub fn len(&self) -> usize {
        self.activities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }

    /// Project makespan from the last recompute.
    pub fn total_duration(&self) -> f64 {
        self.total_duration
    }

    /// Critical activity IDs from the last recompute, by ascending early start.
    pub fn critical_path(&self) -> &[String] {
        &self.critical_path
    }

    pub fn index(&self) -> &ActivityIndex {
        &self.index
    }

    /// Positions of the activities `idx` depends on.
    pub fn predecessor_indices(&self, idx: ActivityIdx) -> &[ActivityIdx] {
        &self.predecessors[idx]
    }

    /// Positions of the activities that depend on `idx`.
    pub fn successor_indices(&self, idx: ActivityIdx) -> &[ActivityIdx] {
        &self.successors[idx]
    }

    /// Append a new activity with a generated ID.
    ///
    /// Every predecessor must already exist; duplicate predecessor IDs are
    /// collapsed. A fresh activity has no successors, so it cannot close a cycle.
    pub fn add_activity(
        &mut self,
        name: &str,
        duration: f64,
        predecessor_ids: &[String],
    ) -> Result<Activity, ProjectError> {
        validate_fields(name, duration)?;

        let mut predecessors: Vec<String> = Vec::with_capacity(predecessor_ids.len());
        for pred in predecessor_ids {
            if !self.index.contains(pred) {
                return Err(ProjectError::UnknownPredecessorReference(pred.clone()));
            }
            if !predecessors.contains(pred) {
                predecessors.push(pred.clone());
            }
        }

        let id = next_activity_id(&self.index);
        let activity = Activity::new(id, name, duration, predecessors);
        self.activities.push(activity.clone());
        self.reindex()?;
        Ok(activity)
    }

    /// Make `activity_id` depend on `predecessor_id`.
    ///
    /// Returns `Ok(false)` if the edge already exists. The graph is left
    /// untouched when the edge is rejected.
    pub fn add_predecessor(
        &mut self,
        activity_id: &str,
        predecessor_id: &str,
    ) -> Result<bool, ProjectError> {
        let idx = self
            .index
            .get(activity_id)
            .ok_or_else(|| ProjectError::ActivityNotFound(activity_id.to_string()))?;
        if !self.index.contains(predecessor_id) {
            return Err(ProjectError::UnknownPredecessorReference(
                predecessor_id.to_string(),
            ));
        }
        if self.activities[idx]
            .predecessors
            .iter()
            .any(|p| p == predecessor_id)
        {
            return Ok(false);
        }
        if would_create_cycle(self, activity_id, predecessor_id) {
            return Err(ProjectError::CycleDetected {
                activity: activity_id.to_string(),
                predecessor: predecessor_id.to_string(),
            });
        }

        self.activities[idx]
            .predecessors
            .push(predecessor_id.to_string());
        self.rebuild_links();
        Ok(true)
    }

    /// Drop the edge `predecessor_id -> activity_id`. Returns whether it existed.
    pub fn remove_predecessor(
        &mut self,
        activity_id: &str,
        predecessor_id: &str,
    ) -> Result<bool, ProjectError> {
        let idx = self
            .index
            .get(activity_id)
            .ok_or_else(|| ProjectError::ActivityNotFound(activity_id.to_string()))?;

        let preds = &mut self.activities[idx].predecessors;
        let before = preds.len();
        preds.retain(|p| p != predecessor_id);
        let removed = preds.len() != before;
        if removed {
            self.rebuild_links();
        }
        Ok(removed)
    }

    /// Remove an activity and every precedence edge that references it.
    pub fn remove_activity(&mut self, id: &str) -> Result<Activity, ProjectError> {
        let idx = self
            .index
            .get(id)
            .ok_or_else(|| ProjectError::ActivityNotFound(id.to_string()))?;

        for activity in &mut self.activities {
            activity.predecessors.retain(|p| p != id);
        }
        let removed = self.activities.remove(idx);
        self.critical_path.retain(|c| c != id);
        self.reindex()?;
        Ok(removed)
    }

    /// Change the duration of an existing activity.
    pub fn set_duration(&mut self, id: &str, duration: f64) -> Result<(), ProjectError> {
        validate_duration(duration)?;
        let idx = self
            .index
            .get(id)
            .ok_or_else(|| ProjectError::ActivityNotFound(id.to_string()))?;
        self.activities[idx].duration = duration;
        Ok(())
    }

    /// Mutable view of the activities for writing derived timings.
    ///
    /// A slice cannot add or remove activities, so the index stays valid.
    pub(crate) fn activities_mut(&mut self) -> &mut [Activity] {
        &mut self.activities
    }

    pub(crate) fn set_schedule_summary(&mut self, total_duration: f64, critical_path: Vec<String>) {
        self.total_duration = total_duration;
        self.critical_path = critical_path;
    }

    fn reindex(&mut self) -> Result<(), ProjectError> {
        self.index = ActivityIndex::build(&self.activities)?;
        self.rebuild_links();
        Ok(())
    }

    /// Rebuild predecessor positions and their inverse successor lists.
    fn rebuild_links(&mut self) {
        let n = self.activities.len();
        let mut predecessors: Vec<Vec<ActivityIdx>> = vec![Vec::new(); n];
        let mut successors: Vec<Vec<ActivityIdx>> = vec![Vec::new(); n];

        for (idx, activity) in self.activities.iter().enumerate() {
            for pred in &activity.predecessors {
                if let Some(pred_idx) = self.index.get(pred) {
                    predecessors[idx].push(pred_idx);
                    successors[pred_idx].push(idx);
                }
            }
        }

        self.predecessors = predecessors;
        self.successors = successors;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    fn make_activity(id: &str, duration: f64, preds: &[&str]) -> Activity {
        Activity::new(id, format!("Activity {}", id), duration, ids(preds))
    }

    #[test]
    fn test_warehouse_seed() {
        let graph = ProjectGraph::warehouse_expansion().unwrap();
        assert_eq!(graph.name(), "Warehouse Expansion");
        assert_eq!(graph.len(), 10);
        assert_eq!(graph.get("D").unwrap().predecessors, ids(&["B", "C"]));

        // Successors are the inverse of predecessors
        let c = graph.index().get("C").unwrap();
        let succ: Vec<&str> = graph
            .successor_indices(c)
            .iter()
            .map(|&i| graph.activities()[i].id.as_str())
            .collect();
        assert_eq!(succ, vec!["D", "E"]);

        // Every declared predecessor is linked by position
        for (idx, activity) in graph.activities().iter().enumerate() {
            assert_eq!(graph.predecessor_indices(idx).len(), activity.predecessors.len());
        }
        assert_eq!(graph.predecessor_indices(graph.index().get("H").unwrap()).len(), 2);
    }

    #[test]
    fn test_add_activity_generates_id() {
        let mut graph = ProjectGraph::warehouse_expansion().unwrap();
        let added = graph
            .add_activity("Inventory audit", 2.0, &ids(&["J", "J"]))
            .unwrap();

        assert_eq!(added.id, "K");
        assert_eq!(added.predecessors, ids(&["J"]));
        assert_eq!(graph.len(), 11);
        let j = graph.index().get("J").unwrap();
        assert_eq!(graph.successor_indices(j), &[10]);
    }

    #[test]
    fn test_add_activity_rejects_unknown_predecessor() {
        let mut graph = ProjectGraph::new("Empty");
        let err = graph.add_activity("Start", 1.0, &ids(&["Q"])).unwrap_err();
        assert_eq!(err, ProjectError::UnknownPredecessorReference("Q".to_string()));
        assert!(graph.is_empty());
    }

    #[test]
    fn test_add_activity_rejects_bad_fields() {
        let mut graph = ProjectGraph::new("Empty");
        assert!(matches!(
            graph.add_activity("  ", 1.0, &[]),
            Err(ProjectError::InvalidActivity(_))
        ));
        assert!(matches!(
            graph.add_activity("Negative", -1.0, &[]),
            Err(ProjectError::InvalidActivity(_))
        ));
        assert!(matches!(
            graph.add_activity("NaN", f64::NAN, &[]),
            Err(ProjectError::InvalidActivity(_))
        ));
        assert!(graph.is_empty());
    }

    #[test]
    fn test_add_predecessor_rejects_cycle_without_mutation() {
        let mut graph = ProjectGraph::warehouse_expansion().unwrap();
        let before = graph.get("A").unwrap().predecessors.clone();

        let err = graph.add_predecessor("A", "D").unwrap_err();
        assert_eq!(
            err,
            ProjectError::CycleDetected {
                activity: "A".to_string(),
                predecessor: "D".to_string(),
            }
        );
        assert_eq!(graph.get("A").unwrap().predecessors, before);
    }

    #[test]
    fn test_add_predecessor_self_reference() {
        let mut graph = ProjectGraph::warehouse_expansion().unwrap();
        assert!(matches!(
            graph.add_predecessor("C", "C"),
            Err(ProjectError::CycleDetected { .. })
        ));
    }

    #[test]
    fn test_add_predecessor_existing_edge_is_noop() {
        let mut graph = ProjectGraph::warehouse_expansion().unwrap();
        assert_eq!(graph.add_predecessor("D", "B"), Ok(false));
        assert_eq!(graph.get("D").unwrap().predecessors, ids(&["B", "C"]));
    }

    #[test]
    fn test_add_predecessor_updates_successors() {
        let mut graph = ProjectGraph::warehouse_expansion().unwrap();
        assert_eq!(graph.add_predecessor("G", "B"), Ok(true));

        let b = graph.index().get("B").unwrap();
        let g = graph.index().get("G").unwrap();
        assert!(graph.successor_indices(b).contains(&g));
        assert!(graph.predecessor_indices(g).contains(&b));
    }

    #[test]
    fn test_add_predecessor_unknown_ids() {
        let mut graph = ProjectGraph::warehouse_expansion().unwrap();
        assert_eq!(
            graph.add_predecessor("Z", "A"),
            Err(ProjectError::ActivityNotFound("Z".to_string()))
        );
        assert_eq!(
            graph.add_predecessor("A", "Z"),
            Err(ProjectError::UnknownPredecessorReference("Z".to_string()))
        );
    }

    #[test]
    fn test_remove_predecessor() {
        let mut graph = ProjectGraph::warehouse_expansion().unwrap();
        assert_eq!(graph.remove_predecessor("D", "B"), Ok(true));
        assert_eq!(graph.remove_predecessor("D", "B"), Ok(false));
        assert_eq!(graph.get("D").unwrap().predecessors, ids(&["C"]));

        let b = graph.index().get("B").unwrap();
        assert!(graph.successor_indices(b).is_empty());
    }

    #[test]
    fn test_remove_activity_strips_references() {
        let mut graph = ProjectGraph::warehouse_expansion().unwrap();
        let removed = graph.remove_activity("C").unwrap();
        assert_eq!(removed.id, "C");

        assert_eq!(graph.len(), 9);
        assert!(graph.get("C").is_none());
        for activity in graph.activities() {
            assert!(!activity.predecessors.iter().any(|p| p == "C"));
        }
        // Positions shifted, index follows
        assert_eq!(graph.index().get("D"), Some(2));
        assert_eq!(graph.get("D").unwrap().predecessors, ids(&["B"]));
    }

    #[test]
    fn test_removed_id_is_reused() {
        let mut graph = ProjectGraph::warehouse_expansion().unwrap();
        graph.remove_activity("B").unwrap();
        let added = graph.add_activity("Re-quote", 1.0, &[]).unwrap();
        assert_eq!(added.id, "B");
    }

    #[test]
    fn test_remove_unknown_activity() {
        let mut graph = ProjectGraph::new("Empty");
        assert_eq!(
            graph.remove_activity("A"),
            Err(ProjectError::ActivityNotFound("A".to_string()))
        );
    }

    #[test]
    fn test_set_duration() {
        let mut graph = ProjectGraph::warehouse_expansion().unwrap();
        graph.set_duration("B", 7.5).unwrap();
        assert_eq!(graph.get("B").unwrap().duration, 7.5);
        assert!(graph.set_duration("B", -2.0).is_err());
        assert!(graph.set_duration("Q", 1.0).is_err());
    }

    #[test]
    fn test_from_activities_validation() {
        let dup = vec![make_activity("A", 1.0, &[]), make_activity("A", 2.0, &[])];
        assert_eq!(
            ProjectGraph::from_activities("p", dup).unwrap_err(),
            ProjectError::DuplicateId("A".to_string())
        );

        let dangling = vec![make_activity("A", 1.0, &["X"])];
        assert_eq!(
            ProjectGraph::from_activities("p", dangling).unwrap_err(),
            ProjectError::UnknownPredecessorReference("X".to_string())
        );

        let ok = vec![make_activity("B", 1.0, &["A"]), make_activity("A", 1.0, &[])];
        let graph = ProjectGraph::from_activities("p", ok).unwrap();
        assert_eq!(graph.predecessor_indices(0), &[1]);
        assert_eq!(graph.successor_indices(1), &[0]);
    }
}
