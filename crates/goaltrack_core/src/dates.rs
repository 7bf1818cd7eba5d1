//! Deadline formatting and day-count helpers.
//!
//! # Responsibility
//! - Turn a target timestamp into display strings and deadline predicates.
//!
//! Every function takes `now` explicitly so callers (and tests) control the
//! clock; the `*_now` wrappers bind the wall clock for UI call sites.

use chrono::{DateTime, Utc};

const SECONDS_PER_DAY: i64 = 86_400;

/// Absolute en-US display form, e.g. `Mar 5, 2026`.
pub fn format_date(ts: DateTime<Utc>) -> String {
    ts.format("%b %-d, %Y").to_string()
}

/// Signed whole-day count until `target`, rounding toward the deadline.
///
/// A target any moment later today-or-beyond counts as the next day up
/// (ceiling), so "23 hours from now" is 1 day; a past target rounds toward
/// zero the same way (5.5 days ago is -5).
pub fn days_until(target: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    let secs = (target - now).num_seconds();
    secs.div_euclid(SECONDS_PER_DAY) + i64::from(secs.rem_euclid(SECONDS_PER_DAY) > 0)
}

/// Strictly-before-now deadline check.
pub fn is_overdue(target: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    target < now
}

/// Coarse relative bucket for a deadline.
///
/// Buckets by whole days: past -> "N days ago", 0 -> "Today",
/// 1 -> "Tomorrow", then days up to two weeks, weeks up to a month,
/// months up to a year, years beyond.
pub fn format_relative(target: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let days = days_until(target, now);

    if days < 0 {
        let n = -days;
        format!("{n} day{} ago", plural(n))
    } else if days == 0 {
        "Today".to_string()
    } else if days == 1 {
        "Tomorrow".to_string()
    } else if days < 14 {
        format!("In {days} days")
    } else if days < 30 {
        let weeks = days / 7;
        format!("In {weeks} week{}", plural(weeks))
    } else if days < 365 {
        let months = days / 30;
        format!("In {months} month{}", plural(months))
    } else {
        let years = days / 365;
        format!("In {years} year{}", plural(years))
    }
}

/// Wall-clock convenience wrappers used by presentation callers.
pub fn days_until_now(target: DateTime<Utc>) -> i64 {
    days_until(target, Utc::now())
}

pub fn is_overdue_now(target: DateTime<Utc>) -> bool {
    is_overdue(target, Utc::now())
}

pub fn format_relative_now(target: DateTime<Utc>) -> String {
    format_relative(target, Utc::now())
}

fn plural(n: i64) -> &'static str {
    if n == 1 {
        ""
    } else {
        "s"
    }
}
