//! Goal and milestone domain model.
//!
//! # Responsibility
//! - Define the persisted shape of a goal and its milestones.
//! - Provide the progress/status lifecycle helpers used by every write path.
//!
//! # Invariants
//! - `id` is stable and never reused for another goal.
//! - `progress` is clamped into `0..=100` wherever it is mutated.
//! - Reaching 100 through the direct progress edit marks the goal
//!   `Completed`; milestone toggles never auto-complete a goal on their own.
//! - `Milestone::completed_at` is set exactly when the toggle path marks the
//!   milestone completed, and cleared when it is un-completed.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for a goal.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type GoalId = Uuid;

/// Identifier for a milestone, unique within its owning goal.
pub type MilestoneId = Uuid;

/// Lifecycle state of a goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GoalStatus {
    /// Being actively pursued.
    Active,
    /// Finished successfully.
    Completed,
    /// Parked, may resume later.
    Paused,
    /// Abandoned.
    Cancelled,
}

/// User-assigned urgency of a goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

/// A named sub-step of a goal with its own completion state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Milestone {
    pub id: MilestoneId,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_date: Option<DateTime<Utc>>,
    pub completed: bool,
    /// Present exactly when `completed` is true on the toggle path.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
}

impl Milestone {
    /// Creates a fresh, not-yet-completed milestone.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            description: None,
            target_date: None,
            completed: false,
            completed_at: None,
        }
    }
}

/// A user-defined long-term objective with progress, deadline and category.
///
/// `category` references a [`super::category::GoalCategory`] by display name.
/// This is string equality, not a foreign key; no referential integrity is
/// enforced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: GoalId,
    pub title: String,
    pub description: String,
    pub category: String,
    pub target_date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Percentage in `0..=100`.
    pub progress: u8,
    /// Insertion order is creation order.
    pub milestones: Vec<Milestone>,
    pub status: GoalStatus,
    pub priority: Priority,
}

impl Goal {
    /// Creates a new active goal with a generated stable ID and zero progress.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        category: impl Into<String>,
        target_date: DateTime<Utc>,
        priority: Priority,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            description: description.into(),
            category: category.into(),
            target_date,
            created_at: now,
            updated_at: now,
            progress: 0,
            milestones: Vec::new(),
            status: GoalStatus::Active,
            priority,
        }
    }

    /// Sets progress from a raw (possibly out-of-range) value.
    ///
    /// # Contract
    /// - The stored value is clamped into `0..=100`.
    /// - 100 marks the goal `Completed`; anything lower marks it `Active`
    ///   again. This is the direct-edit path only.
    /// - Bumps `updated_at`.
    pub fn set_progress(&mut self, raw: i64, now: DateTime<Utc>) {
        self.progress = raw.clamp(0, 100) as u8;
        self.status = if self.progress == 100 {
            GoalStatus::Completed
        } else {
            GoalStatus::Active
        };
        self.updated_at = now;
    }

    /// Changes lifecycle status directly and bumps `updated_at`.
    pub fn set_status(&mut self, status: GoalStatus, now: DateTime<Utc>) {
        self.status = status;
        self.updated_at = now;
    }

    /// Appends a milestone, preserving creation order.
    pub fn add_milestone(&mut self, milestone: Milestone, now: DateTime<Utc>) {
        self.milestones.push(milestone);
        self.updated_at = now;
    }

    /// Flips the completion state of one milestone.
    ///
    /// # Contract
    /// - Completing sets `completed_at = now`; un-completing clears it.
    /// - Goal progress is raised to the recomputed milestone completion
    ///   percentage when that is higher, and never lowered by this path.
    /// - Status is left untouched; only the direct progress edit completes
    ///   a goal.
    ///
    /// Returns `false` when no milestone carries the given ID.
    pub fn toggle_milestone(&mut self, id: MilestoneId, now: DateTime<Utc>) -> bool {
        let Some(milestone) = self.milestones.iter_mut().find(|m| m.id == id) else {
            return false;
        };

        milestone.completed = !milestone.completed;
        milestone.completed_at = milestone.completed.then_some(now);

        self.progress = self.progress.max(self.milestone_completion_percent());
        self.updated_at = now;
        true
    }

    /// Rounded percentage of completed milestones, 0 for a goal without any.
    pub fn milestone_completion_percent(&self) -> u8 {
        let total = self.milestones.len();
        if total == 0 {
            return 0;
        }
        let done = self.milestones.iter().filter(|m| m.completed).count();
        ((done as f64 / total as f64) * 100.0).round() as u8
    }

    /// Checks the record against model invariants.
    ///
    /// Deserialized data can carry anything; write paths call this before
    /// persisting so invalid state never reaches storage.
    pub fn validate(&self) -> Result<(), GoalValidationError> {
        if self.title.trim().is_empty() {
            return Err(GoalValidationError::EmptyTitle);
        }
        if self.category.trim().is_empty() {
            return Err(GoalValidationError::EmptyCategory);
        }
        if self.progress > 100 {
            return Err(GoalValidationError::ProgressOutOfRange(self.progress));
        }
        Ok(())
    }
}

/// Model-level invariant violations rejected before persistence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoalValidationError {
    EmptyTitle,
    EmptyCategory,
    ProgressOutOfRange(u8),
}

impl Display for GoalValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "goal title must not be empty"),
            Self::EmptyCategory => write!(f, "goal category must not be empty"),
            Self::ProgressOutOfRange(value) => {
                write!(f, "goal progress {value} is outside 0..=100")
            }
        }
    }
}

impl Error for GoalValidationError {}
