//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose stable, use-case-level goal operations to Dart via FRB.
//! - Keep error semantics simple for the UI: every call resolves, with the
//!   error carried as a message field instead of a thrown exception.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - Response envelopes always carry either data or a non-empty `error`.

use chrono::{DateTime, Utc};
use goaltrack_core::db::open_db;
use goaltrack_core::{
    achievements, core_version as core_version_inner, dates, init_logging as init_logging_inner,
    ping as ping_inner, GoalService, GoalStatus, Milestone, NewGoalRequest, Priority,
    SqliteGoalStore, StatusFilter,
};
use log::error;
use std::path::PathBuf;
use std::sync::OnceLock;
use uuid::Uuid;

const DB_FILE_NAME: &str = "goaltrack.sqlite3";
static DB_PATH: OnceLock<PathBuf> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking, never throws.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// # FFI contract
/// - Idempotent for the same `level + log_dir`; reconfiguration attempts
///   return an error message.
/// - Returns empty string on success.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Pins the app-documents directory the goal database lives in.
///
/// # FFI contract
/// - First call wins; later calls with a different directory return an
///   error message, matching the logging bootstrap contract.
#[flutter_rust_bridge::frb(sync)]
pub fn configure_storage(app_dir: String) -> String {
    let path = PathBuf::from(app_dir).join(DB_FILE_NAME);
    let pinned = DB_PATH.get_or_init(|| path.clone());
    if *pinned == path {
        String::new()
    } else {
        format!(
            "storage already configured at `{}`; refusing to switch to `{}`",
            pinned.display(),
            path.display()
        )
    }
}

/// Milestone row for the goal detail screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MilestoneItem {
    pub id: String,
    pub title: String,
    pub completed: bool,
    /// RFC 3339, empty when not completed.
    pub completed_at: String,
}

/// Goal row for list and detail screens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoalItem {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: String,
    /// RFC 3339 target date.
    pub target_date: String,
    /// Display bucket such as "Tomorrow" or "In 2 weeks".
    pub deadline_label: String,
    /// Signed whole-day count to the deadline; negative when past.
    pub days_left: i64,
    pub overdue: bool,
    pub progress: u8,
    pub status: String,
    pub priority: String,
    pub milestones: Vec<MilestoneItem>,
}

/// Envelope for list calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoalListResponse {
    pub items: Vec<GoalItem>,
    pub error: String,
}

/// Envelope for create calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateGoalResponse {
    pub goal_id: String,
    pub error: String,
}

/// Envelope for mutations that only need success/failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MutationResponse {
    pub error: String,
}

/// Envelope for the profile screen summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatisticsResponse {
    pub total: u32,
    pub active: u32,
    pub completed: u32,
    pub average_progress: u8,
    pub completion_rate: u8,
    /// Unlocked badge titles in display order.
    pub achievements: Vec<String>,
    pub error: String,
}

/// Lists goals, optionally filtered by status (`all|active|completed|paused|cancelled`).
pub fn list_goals(filter: String) -> GoalListResponse {
    let result = parse_filter(&filter)
        .and_then(|filter| with_service(|service| service.list_goals(filter).map_err(stringify)));
    match result {
        Ok(goals) => GoalListResponse {
            items: goals.iter().map(goal_item).collect(),
            error: String::new(),
        },
        Err(err) => GoalListResponse {
            items: Vec::new(),
            error: err,
        },
    }
}

/// Creates a goal from the create screen's form fields.
pub fn create_goal(
    title: String,
    description: String,
    category: String,
    target_date: String,
    priority: String,
    milestone_titles: Vec<String>,
) -> CreateGoalResponse {
    let result = parse_timestamp(&target_date).and_then(|target_date| {
        let request = NewGoalRequest {
            title,
            description,
            category,
            target_date,
            priority: parse_priority(&priority)?,
            milestone_titles,
        };
        with_service(|service| service.create_goal(&request).map_err(stringify))
    });
    match result {
        Ok(id) => CreateGoalResponse {
            goal_id: id.to_string(),
            error: String::new(),
        },
        Err(err) => CreateGoalResponse {
            goal_id: String::new(),
            error: err,
        },
    }
}

/// Direct progress edit; 100 completes the goal.
pub fn update_goal_progress(goal_id: String, progress: i64) -> MutationResponse {
    mutation(parse_id(&goal_id).and_then(|id| {
        with_service(|service| service.update_progress(id, progress).map_err(stringify))
    }))
}

/// Flips a milestone's completion state.
pub fn toggle_goal_milestone(goal_id: String, milestone_id: String) -> MutationResponse {
    mutation(
        parse_id(&goal_id)
            .and_then(|goal| parse_id(&milestone_id).map(|milestone| (goal, milestone)))
            .and_then(|(goal, milestone)| {
                with_service(|service| service.toggle_milestone(goal, milestone).map_err(stringify))
            }),
    )
}

/// Direct lifecycle change (`active|completed|paused|cancelled`).
pub fn set_goal_status(goal_id: String, status: String) -> MutationResponse {
    mutation(
        parse_id(&goal_id)
            .and_then(|id| parse_status(&status).map(|status| (id, status)))
            .and_then(|(id, status)| {
                with_service(|service| service.set_status(id, status).map_err(stringify))
            }),
    )
}

/// Appends a milestone to an existing goal, after the current ones.
pub fn add_goal_milestone(goal_id: String, title: String) -> MutationResponse {
    mutation(parse_id(&goal_id).and_then(|id| {
        with_service(|service| {
            service
                .add_milestone(id, Milestone::new(title))
                .map_err(stringify)
        })
    }))
}

/// Deletes a goal; already-absent ids succeed.
pub fn delete_goal(goal_id: String) -> MutationResponse {
    mutation(
        parse_id(&goal_id)
            .and_then(|id| with_service(|service| service.delete_goal(id).map_err(stringify))),
    )
}

/// Aggregate statistics and unlocked achievements for the profile screen.
pub fn load_statistics() -> StatisticsResponse {
    match with_service(|service| service.statistics().map_err(stringify)) {
        Ok(stats) => StatisticsResponse {
            total: stats.total as u32,
            active: stats.active as u32,
            completed: stats.completed as u32,
            average_progress: stats.average_progress,
            completion_rate: stats.completion_rate,
            achievements: achievements(&stats)
                .iter()
                .map(|badge| badge.title.to_owned())
                .collect(),
            error: String::new(),
        },
        Err(err) => StatisticsResponse {
            total: 0,
            active: 0,
            completed: 0,
            average_progress: 0,
            completion_rate: 0,
            achievements: Vec::new(),
            error: err,
        },
    }
}

fn with_service<T>(
    op: impl FnOnce(&GoalService<SqliteGoalStore<'_>>) -> Result<T, String>,
) -> Result<T, String> {
    let path = DB_PATH
        .get()
        .ok_or_else(|| "storage not configured; call configure_storage first".to_string())?;
    let conn = open_db(path).map_err(stringify)?;
    let service = GoalService::new(SqliteGoalStore::new(&conn));
    op(&service).inspect_err(|err| {
        error!("event=ffi_call module=ffi status=error error={err}");
    })
}

fn goal_item(goal: &goaltrack_core::Goal) -> GoalItem {
    GoalItem {
        id: goal.id.to_string(),
        title: goal.title.clone(),
        description: goal.description.clone(),
        category: goal.category.clone(),
        target_date: goal.target_date.to_rfc3339(),
        deadline_label: dates::format_relative_now(goal.target_date),
        days_left: dates::days_until_now(goal.target_date),
        overdue: dates::is_overdue_now(goal.target_date),
        progress: goal.progress,
        status: status_label(goal.status).to_owned(),
        priority: priority_label(goal.priority).to_owned(),
        milestones: goal
            .milestones
            .iter()
            .map(|m| MilestoneItem {
                id: m.id.to_string(),
                title: m.title.clone(),
                completed: m.completed,
                completed_at: m.completed_at.map(|ts| ts.to_rfc3339()).unwrap_or_default(),
            })
            .collect(),
    }
}

fn mutation<T>(result: Result<T, String>) -> MutationResponse {
    MutationResponse {
        error: result.err().unwrap_or_default(),
    }
}

fn stringify(err: impl std::fmt::Display) -> String {
    err.to_string()
}

fn parse_id(raw: &str) -> Result<Uuid, String> {
    Uuid::parse_str(raw).map_err(|_| format!("invalid id `{raw}`"))
}

fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, String> {
    DateTime::parse_from_rfc3339(raw)
        .map(|ts| ts.with_timezone(&Utc))
        .map_err(|_| format!("invalid RFC 3339 timestamp `{raw}`"))
}

fn parse_filter(raw: &str) -> Result<StatusFilter, String> {
    match raw {
        "all" | "" => Ok(StatusFilter::All),
        other => parse_status(other).map(StatusFilter::Only),
    }
}

fn parse_status(raw: &str) -> Result<GoalStatus, String> {
    match raw {
        "active" => Ok(GoalStatus::Active),
        "completed" => Ok(GoalStatus::Completed),
        "paused" => Ok(GoalStatus::Paused),
        "cancelled" => Ok(GoalStatus::Cancelled),
        other => Err(format!("unknown status `{other}`")),
    }
}

fn parse_priority(raw: &str) -> Result<Priority, String> {
    match raw {
        "low" => Ok(Priority::Low),
        "medium" => Ok(Priority::Medium),
        "high" => Ok(Priority::High),
        other => Err(format!("unknown priority `{other}`")),
    }
}

fn status_label(status: GoalStatus) -> &'static str {
    match status {
        GoalStatus::Active => "active",
        GoalStatus::Completed => "completed",
        GoalStatus::Paused => "paused",
        GoalStatus::Cancelled => "cancelled",
    }
}

fn priority_label(priority: Priority) -> &'static str {
    match priority {
        Priority::Low => "low",
        Priority::Medium => "medium",
        Priority::High => "high",
    }
}
