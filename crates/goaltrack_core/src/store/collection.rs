//! Insertion-ordered goal collection with an identity index.
//!
//! The persisted shape is a plain JSON array; in memory the collection keeps
//! an id -> position map so by-id lookup, replace and remove need no
//! repeated linear scans.

use crate::model::goal::{Goal, GoalId};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Ordered goal sequence, indexed by id.
///
/// Serializes transparently to/from `Vec<Goal>`. When the decoded array
/// carries duplicate ids the index keeps the last occurrence; mutation paths
/// never produce duplicates.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "Vec<Goal>", into = "Vec<Goal>")]
pub struct GoalCollection {
    goals: Vec<Goal>,
    by_id: HashMap<GoalId, usize>,
}

impl GoalCollection {
    pub fn len(&self) -> usize {
        self.goals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.goals.is_empty()
    }

    pub fn contains(&self, id: GoalId) -> bool {
        self.by_id.contains_key(&id)
    }

    pub fn get(&self, id: GoalId) -> Option<&Goal> {
        self.by_id.get(&id).map(|&pos| &self.goals[pos])
    }

    pub fn as_slice(&self) -> &[Goal] {
        &self.goals
    }

    /// Appends a goal at the end, keeping insertion order.
    ///
    /// Callers check [`contains`](Self::contains) first; pushing an id that
    /// is already present would shadow the earlier record in the index.
    pub fn push(&mut self, goal: Goal) {
        self.by_id.insert(goal.id, self.goals.len());
        self.goals.push(goal);
    }

    /// Replaces the record with the same id in place, preserving position.
    ///
    /// Returns `false` and leaves the collection untouched when the id is
    /// absent.
    pub fn replace(&mut self, goal: Goal) -> bool {
        match self.by_id.get(&goal.id) {
            Some(&pos) => {
                self.goals[pos] = goal;
                true
            }
            None => false,
        }
    }

    /// Removes and returns the record with the given id, if present.
    pub fn remove(&mut self, id: GoalId) -> Option<Goal> {
        let pos = self.by_id.remove(&id)?;
        let removed = self.goals.remove(pos);
        // Positions after the removal point shift down by one.
        for (index, goal) in self.goals.iter().enumerate().skip(pos) {
            self.by_id.insert(goal.id, index);
        }
        Some(removed)
    }

    pub fn into_vec(self) -> Vec<Goal> {
        self.goals
    }
}

impl From<Vec<Goal>> for GoalCollection {
    fn from(goals: Vec<Goal>) -> Self {
        let by_id = goals
            .iter()
            .enumerate()
            .map(|(index, goal)| (goal.id, index))
            .collect();
        Self { goals, by_id }
    }
}

impl From<GoalCollection> for Vec<Goal> {
    fn from(collection: GoalCollection) -> Self {
        collection.goals
    }
}
