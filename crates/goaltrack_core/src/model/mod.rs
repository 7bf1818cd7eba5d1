//! Domain model for goals, milestones and categories.
//!
//! # Responsibility
//! - Define the canonical records persisted by the storage facade.
//! - Keep progress/status lifecycle rules next to the data they guard.
//!
//! # Invariants
//! - Every goal is identified by a stable `GoalId`.
//! - `Goal::progress` stays within `0..=100` on every mutation path.

pub mod category;
pub mod goal;
