//! Goal use-case service.
//!
//! # Responsibility
//! - Provide stable entry points for creating and mutating goals.
//! - Apply timestamp and lifecycle rules in one place, then delegate
//!   persistence to the storage facade.
//!
//! # Invariants
//! - Service APIs never bypass facade validation/persistence contracts.
//! - The service stays storage-agnostic; any [`GoalStore`] works.

use crate::model::goal::{Goal, GoalId, GoalStatus, Milestone, MilestoneId, Priority};
use crate::stats::GoalStatistics;
use crate::store::goal_store::{GoalStore, StoreError, StoreResult};
use chrono::{DateTime, Utc};

/// Input for creating a goal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewGoalRequest {
    pub title: String,
    pub description: String,
    /// Category display name; not checked against stored categories.
    pub category: String,
    pub target_date: DateTime<Utc>,
    pub priority: Priority,
    /// One milestone per title, in the given order.
    pub milestone_titles: Vec<String>,
}

/// Status filter for listing, mirroring the home-screen tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(GoalStatus),
}

impl StatusFilter {
    fn matches(self, goal: &Goal) -> bool {
        match self {
            Self::All => true,
            Self::Only(status) => goal.status == status,
        }
    }
}

/// Use-case wrapper around a [`GoalStore`] implementation.
pub struct GoalService<S: GoalStore> {
    store: S,
}

impl<S: GoalStore> GoalService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Creates and persists a goal from user input.
    ///
    /// # Contract
    /// - Generates the stable id and both timestamps.
    /// - Milestones are created in the order given, all incomplete.
    /// - Returns the created goal id.
    pub fn create_goal(&self, request: &NewGoalRequest) -> StoreResult<GoalId> {
        let now = Utc::now();
        let mut goal = Goal::new(
            request.title.clone(),
            request.description.clone(),
            request.category.clone(),
            request.target_date,
            request.priority,
            now,
        );
        for title in &request.milestone_titles {
            goal.add_milestone(Milestone::new(title.clone()), now);
        }
        self.store.add_goal(&goal)
    }

    /// One goal by id, or `None` when absent.
    pub fn get_goal(&self, id: GoalId) -> StoreResult<Option<Goal>> {
        Ok(self.store.get_goals()?.into_iter().find(|g| g.id == id))
    }

    /// Goals matching the filter, in stored (creation) order.
    pub fn list_goals(&self, filter: StatusFilter) -> StoreResult<Vec<Goal>> {
        let mut goals = self.store.get_goals()?;
        goals.retain(|goal| filter.matches(goal));
        Ok(goals)
    }

    /// Direct progress edit.
    ///
    /// The raw value is clamped into `0..=100`; landing on 100 completes the
    /// goal, anything lower re-activates it. Returns the updated goal.
    pub fn update_progress(&self, id: GoalId, raw: i64) -> StoreResult<Goal> {
        self.mutate(id, |goal, now| {
            goal.set_progress(raw, now);
            Ok(())
        })
    }

    /// Direct lifecycle status change.
    pub fn set_status(&self, id: GoalId, status: GoalStatus) -> StoreResult<Goal> {
        self.mutate(id, |goal, now| {
            goal.set_status(status, now);
            Ok(())
        })
    }

    /// Appends a milestone to an existing goal.
    pub fn add_milestone(&self, id: GoalId, milestone: Milestone) -> StoreResult<Goal> {
        self.mutate(id, |goal, now| {
            goal.add_milestone(milestone, now);
            Ok(())
        })
    }

    /// Flips one milestone's completion state.
    ///
    /// `completed_at` follows the flag, and goal progress never decreases
    /// as a result of a toggle.
    pub fn toggle_milestone(
        &self,
        goal_id: GoalId,
        milestone_id: MilestoneId,
    ) -> StoreResult<Goal> {
        self.mutate(goal_id, |goal, now| {
            if !goal.toggle_milestone(milestone_id, now) {
                return Err(StoreError::MilestoneNotFound(milestone_id));
            }
            Ok(())
        })
    }

    /// Removes a goal; `Ok(false)` when the id was already absent.
    pub fn delete_goal(&self, id: GoalId) -> StoreResult<bool> {
        self.store.delete_goal(id)
    }

    /// Category list, seeding defaults on first access.
    pub fn categories(&self) -> StoreResult<Vec<crate::model::category::GoalCategory>> {
        self.store.get_categories()
    }

    /// Aggregate statistics over the full collection.
    pub fn statistics(&self) -> StoreResult<GoalStatistics> {
        Ok(GoalStatistics::compute(&self.store.get_goals()?))
    }

    fn mutate(
        &self,
        id: GoalId,
        apply: impl FnOnce(&mut Goal, DateTime<Utc>) -> StoreResult<()>,
    ) -> StoreResult<Goal> {
        let mut goal = self.get_goal(id)?.ok_or(StoreError::NotFound(id))?;
        apply(&mut goal, Utc::now())?;
        self.store.update_goal(&goal)?;
        Ok(goal)
    }
}
