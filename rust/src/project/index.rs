//! Activity ID lookup for the project arena.
//!
//! Maps string activity IDs to their position in the ordered activity
//! sequence so graph walks can use direct array indexing.

use rustc_hash::FxHashMap;

use crate::models::Activity;

use super::ProjectError;

/// Position of an activity in the project's ordered sequence.
pub type ActivityIdx = usize;

/// String ID -> arena position lookup.
#[derive(Debug, Clone, Default)]
pub struct ActivityIndex {
    to_idx: FxHashMap<String, ActivityIdx>,
}

impl ActivityIndex {
    /// Build the index for an activity sequence, rejecting duplicate IDs.
    pub fn build(activities: &[Activity]) -> Result<Self, ProjectError> {
        let mut to_idx = FxHashMap::with_capacity_and_hasher(activities.len(), Default::default());
        for (idx, activity) in activities.iter().enumerate() {
            if to_idx.insert(activity.id.clone(), idx).is_some() {
                return Err(ProjectError::DuplicateId(activity.id.clone()));
            }
        }
        Ok(Self { to_idx })
    }

    /// Get the arena position for an ID, if it exists.
    #[inline]
    pub fn get(&self, id: &str) -> Option<ActivityIdx> {
        self.to_idx.get(id).copied()
    }

    #[inline]
    pub fn contains(&self, id: &str) -> bool {
        self.to_idx.contains_key(id)
    }

    /// Number of indexed activities.
    pub fn len(&self) -> usize {
        self.to_idx.len()
    }

    pub fn is_empty(&self) -> bool {
        self.to_idx.is_empty()
    }
}

/// Generate the next unused activity ID.
///
/// Single uppercase letters are handed out first (A..Z), then "A1", "A2", ...
pub fn next_activity_id(index: &ActivityIndex) -> String {
    for letter in 'A'..='Z' {
        let mut buf = [0u8; 4];
        let candidate: &str = letter.encode_utf8(&mut buf);
        if !index.contains(candidate) {
            return candidate.to_string();
        }
    }

    let mut number = 1u32;
    loop {
        let candidate = format!("A{}", number);
        if !index.contains(&candidate) {
            return candidate;
        }
        number += 1;
    }
}
