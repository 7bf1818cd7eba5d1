//! Core domain logic for Goaltrack.
//! This crate is the single source of truth for goal-tracking invariants.

pub mod dates;
pub mod db;
pub mod logging;
pub mod model;
pub mod service;
pub mod stats;
pub mod store;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::category::{default_categories, GoalCategory};
pub use model::goal::{
    Goal, GoalId, GoalStatus, GoalValidationError, Milestone, MilestoneId, Priority,
};
pub use service::goal_service::{GoalService, NewGoalRequest, StatusFilter};
pub use stats::{achievements, Achievement, GoalStatistics};
pub use store::collection::GoalCollection;
pub use store::goal_store::{GoalStore, SqliteGoalStore, StoreError, StoreResult};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
