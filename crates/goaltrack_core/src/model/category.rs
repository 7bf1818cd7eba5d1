//! Goal category model and the seeded default set.

use serde::{Deserialize, Serialize};

/// User-facing grouping for goals, with display color and icon.
///
/// Goals reference a category by `name`, not by `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoalCategory {
    pub id: String,
    pub name: String,
    /// Hex color used by the UI, e.g. `#4CAF50`.
    pub color: String,
    /// Single display glyph.
    pub icon: String,
}

impl GoalCategory {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        color: impl Into<String>,
        icon: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            color: color.into(),
            icon: icon.into(),
        }
    }
}

/// The fixed set seeded on first category access.
///
/// IDs and display attributes are stable; re-seeding must produce the exact
/// same six records.
pub fn default_categories() -> Vec<GoalCategory> {
    vec![
        GoalCategory::new("1", "Health & Fitness", "#4CAF50", "\u{1F4AA}"),
        GoalCategory::new("2", "Career", "#2196F3", "\u{1F4BC}"),
        GoalCategory::new("3", "Education", "#FF9800", "\u{1F4DA}"),
        GoalCategory::new("4", "Personal", "#9C27B0", "\u{1F31F}"),
        GoalCategory::new("5", "Financial", "#4CAF50", "\u{1F4B0}"),
        GoalCategory::new("6", "Relationships", "#E91E63", "\u{2764}\u{FE0F}"),
    ]
}
