//! Storage facade over the key-value document layer.
//!
//! # Responsibility
//! - Define the collection-level persistence contract for goals and
//!   categories.
//! - Keep JSON/SQL details behind the [`goal_store::GoalStore`] trait.
//!
//! # Invariants
//! - Writes enforce `Goal::validate()` before touching storage.
//! - Failures surface as [`goal_store::StoreError`]; an absent key is an
//!   empty collection, a corrupt one is an error, and callers can tell the
//!   two apart.

pub mod collection;
pub mod goal_store;
