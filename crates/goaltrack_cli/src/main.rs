//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `goaltrack_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use goaltrack_core::db::open_db_in_memory;
use goaltrack_core::{GoalStore, SqliteGoalStore};

fn main() {
    // Tiny probe validating core wiring independently from the Flutter/FFI
    // runtime setup: open an in-memory store and seed the default categories.
    println!("goaltrack_core ping={}", goaltrack_core::ping());
    println!("goaltrack_core version={}", goaltrack_core::core_version());

    match open_db_in_memory() {
        Ok(conn) => {
            let store = SqliteGoalStore::new(&conn);
            match store.get_categories() {
                Ok(categories) => println!("default categories={}", categories.len()),
                Err(err) => eprintln!("category probe failed: {err}"),
            }
        }
        Err(err) => eprintln!("db probe failed: {err}"),
    }
}
