//! Aggregate statistics and achievement badges.
//!
//! Derived views over the in-memory collection; recomputed on demand, no
//! caching.

use crate::model::goal::{Goal, GoalStatus};
use std::collections::BTreeMap;

/// Summary numbers shown on the home and profile screens.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GoalStatistics {
    pub total: usize,
    pub active: usize,
    pub completed: usize,
    /// Rounded mean progress over all goals; 0 when there are none.
    pub average_progress: u8,
    /// Rounded percentage of completed goals; 0 when there are none.
    pub completion_rate: u8,
    /// Goal count per category name, in deterministic name order.
    pub category_counts: BTreeMap<String, usize>,
}

impl GoalStatistics {
    pub fn compute(goals: &[Goal]) -> Self {
        let total = goals.len();
        let active = goals
            .iter()
            .filter(|g| g.status == GoalStatus::Active)
            .count();
        let completed = goals
            .iter()
            .filter(|g| g.status == GoalStatus::Completed)
            .count();

        let (average_progress, completion_rate) = if total == 0 {
            (0, 0)
        } else {
            let progress_sum: u64 = goals.iter().map(|g| u64::from(g.progress)).sum();
            (
                (progress_sum as f64 / total as f64).round() as u8,
                ((completed as f64 / total as f64) * 100.0).round() as u8,
            )
        };

        let mut category_counts = BTreeMap::new();
        for goal in goals {
            *category_counts.entry(goal.category.clone()).or_insert(0) += 1;
        }

        Self {
            total,
            active,
            completed,
            average_progress,
            completion_rate,
            category_counts,
        }
    }
}

/// Fixed badge unlocked by aggregate thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Achievement {
    pub icon: &'static str,
    pub title: &'static str,
}

/// Badges unlocked for the given statistics, in display order.
pub fn achievements(stats: &GoalStatistics) -> Vec<Achievement> {
    let mut unlocked = Vec::new();
    if stats.completed >= 1 {
        unlocked.push(Achievement {
            icon: "\u{1F3AF}",
            title: "First Goal Completed",
        });
    }
    if stats.completed >= 5 {
        unlocked.push(Achievement {
            icon: "\u{1F3C6}",
            title: "Goal Achiever (5+ goals)",
        });
    }
    if stats.completed >= 10 {
        unlocked.push(Achievement {
            icon: "\u{2B50}",
            title: "Goal Master (10+ goals)",
        });
    }
    if stats.completion_rate >= 80 && stats.total >= 3 {
        unlocked.push(Achievement {
            icon: "\u{1F4AA}",
            title: "High Achiever (80%+ success)",
        });
    }
    unlocked
}
