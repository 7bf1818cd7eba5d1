//! Goal storage facade contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide whole-collection read/write plus derived per-item operations
//!   over the two document keys (`goals`, `categories`).
//! - Keep serialization and SQL inside the persistence boundary.
//!
//! # Invariants
//! - Write paths call `Goal::validate()` before any mutation.
//! - Per-item operations are read-modify-write over the full collection;
//!   last writer wins. The application has a single logical writer, so no
//!   cross-writer arbitration exists here.
//! - First category access seeds the fixed default set exactly once.

use crate::db::DbError;
use crate::model::category::{default_categories, GoalCategory};
use crate::model::goal::{Goal, GoalId, GoalValidationError, MilestoneId};
use crate::store::collection::GoalCollection;
use rusqlite::{params, Connection, OptionalExtension};
use std::error::Error;
use std::fmt::{Display, Formatter};

const GOALS_KEY: &str = "goals";
const CATEGORIES_KEY: &str = "categories";

pub type StoreResult<T> = Result<T, StoreError>;

/// Storage facade error.
///
/// An absent document decodes to an empty collection; only a present but
/// undecodable one raises `Corrupt`. Callers can therefore distinguish
/// "empty because no data" from "empty because of a fault".
#[derive(Debug)]
pub enum StoreError {
    Validation(GoalValidationError),
    Db(DbError),
    Corrupt {
        key: &'static str,
        source: serde_json::Error,
    },
    Duplicate(GoalId),
    NotFound(GoalId),
    MilestoneNotFound(MilestoneId),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::Corrupt { key, source } => {
                write!(f, "stored document `{key}` is not valid JSON: {source}")
            }
            Self::Duplicate(id) => write!(f, "goal already exists: {id}"),
            Self::NotFound(id) => write!(f, "goal not found: {id}"),
            Self::MilestoneNotFound(id) => write!(f, "milestone not found: {id}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::Corrupt { source, .. } => Some(source),
            Self::Duplicate(_) | Self::NotFound(_) | Self::MilestoneNotFound(_) => None,
        }
    }
}

impl From<GoalValidationError> for StoreError {
    fn from(value: GoalValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for StoreError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Persistence contract for the two goal-tracking collections.
pub trait GoalStore {
    /// Full goal collection; empty when the key has never been written.
    fn get_goals(&self) -> StoreResult<Vec<Goal>>;
    /// Whole-collection overwrite, replacing any prior value.
    fn save_goals(&self, goals: &[Goal]) -> StoreResult<()>;
    /// Appends one goal; rejects an id that is already present.
    fn add_goal(&self, goal: &Goal) -> StoreResult<GoalId>;
    /// Replaces the record with the same id in place.
    fn update_goal(&self, goal: &Goal) -> StoreResult<()>;
    /// Removes at most the matching record. Idempotent; returns whether a
    /// record was actually removed.
    fn delete_goal(&self, id: GoalId) -> StoreResult<bool>;
    /// Categories; seeds and persists the fixed defaults on first access.
    fn get_categories(&self) -> StoreResult<Vec<GoalCategory>>;
    /// Whole-collection overwrite, mirroring `save_goals`.
    fn save_categories(&self, categories: &[GoalCategory]) -> StoreResult<()>;
}

/// SQLite-backed store over the `documents` key-value table.
pub struct SqliteGoalStore<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteGoalStore<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }

    fn read_document(&self, key: &'static str) -> StoreResult<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM documents WHERE key = ?1;",
                [key],
                |row| row.get(0),
            )
            .optional()?;
        Ok(value)
    }

    fn write_document(&self, key: &'static str, value: &str) -> StoreResult<()> {
        self.conn.execute(
            "INSERT INTO documents (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value;",
            params![key, value],
        )?;
        Ok(())
    }

    fn load_collection(&self) -> StoreResult<GoalCollection> {
        match self.read_document(GOALS_KEY)? {
            Some(raw) => serde_json::from_str(&raw).map_err(|source| StoreError::Corrupt {
                key: GOALS_KEY,
                source,
            }),
            None => Ok(GoalCollection::default()),
        }
    }

    fn store_collection(&self, collection: &GoalCollection) -> StoreResult<()> {
        let raw = encode(GOALS_KEY, collection)?;
        self.write_document(GOALS_KEY, &raw)
    }
}

impl GoalStore for SqliteGoalStore<'_> {
    fn get_goals(&self) -> StoreResult<Vec<Goal>> {
        Ok(self.load_collection()?.into_vec())
    }

    fn save_goals(&self, goals: &[Goal]) -> StoreResult<()> {
        for goal in goals {
            goal.validate()?;
        }
        let raw = encode(GOALS_KEY, &goals)?;
        self.write_document(GOALS_KEY, &raw)
    }

    fn add_goal(&self, goal: &Goal) -> StoreResult<GoalId> {
        goal.validate()?;

        let mut collection = self.load_collection()?;
        if collection.contains(goal.id) {
            return Err(StoreError::Duplicate(goal.id));
        }
        collection.push(goal.clone());
        self.store_collection(&collection)?;
        Ok(goal.id)
    }

    fn update_goal(&self, goal: &Goal) -> StoreResult<()> {
        goal.validate()?;

        let mut collection = self.load_collection()?;
        if !collection.replace(goal.clone()) {
            return Err(StoreError::NotFound(goal.id));
        }
        self.store_collection(&collection)
    }

    fn delete_goal(&self, id: GoalId) -> StoreResult<bool> {
        let mut collection = self.load_collection()?;
        if collection.remove(id).is_none() {
            return Ok(false);
        }
        self.store_collection(&collection)?;
        Ok(true)
    }

    fn get_categories(&self) -> StoreResult<Vec<GoalCategory>> {
        match self.read_document(CATEGORIES_KEY)? {
            Some(raw) => serde_json::from_str(&raw).map_err(|source| StoreError::Corrupt {
                key: CATEGORIES_KEY,
                source,
            }),
            None => {
                let defaults = default_categories();
                self.save_categories(&defaults)?;
                Ok(defaults)
            }
        }
    }

    fn save_categories(&self, categories: &[GoalCategory]) -> StoreResult<()> {
        let raw = encode(CATEGORIES_KEY, &categories)?;
        self.write_document(CATEGORIES_KEY, &raw)
    }
}

fn encode<T: serde::Serialize>(key: &'static str, value: &T) -> StoreResult<String> {
    serde_json::to_string(value).map_err(|source| StoreError::Corrupt { key, source })
}
