//! Persistence mapper - storage rows to wire types and back
//!
//! Nullable columns are plain `Option`s here, so the conversions do not
//! depend on any driver wrapper type. Every conversion is total.

use chrono::NaiveDateTime;
use sqlx::FromRow;

use crate::models::{Person, PersonDetails, Task, TaskDetails};

/// `person` row as read from storage
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct PersonRow {
    pub id: i32,
    pub name: String,
    pub email: String,
}

/// Column values written on person insert/update
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonColumns {
    pub name: String,
    pub email: String,
}

/// `task` row as read from storage
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct TaskRow {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub priority: Option<i32>,
    pub created: NaiveDateTime,
    pub last_updated: NaiveDateTime,
    pub assigned_to: Option<i32>,
    pub due_by: Option<NaiveDateTime>,
}

/// Column values written on task insert/update
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskColumns {
    pub title: String,
    pub description: String,
    pub priority: Option<i32>,
    pub created: NaiveDateTime,
    pub last_updated: NaiveDateTime,
    pub assigned_to: Option<i32>,
    pub due_by: Option<NaiveDateTime>,
}

impl From<PersonRow> for Person {
    fn from(row: PersonRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            email: row.email,
        }
    }
}

impl PersonColumns {
    pub fn from_details(details: PersonDetails) -> Self {
        Self {
            name: details.name,
            email: details.email,
        }
    }
}

impl From<TaskRow> for Task {
    fn from(row: TaskRow) -> Self {
        Self {
            id: row.id,
            title: row.title,
            description: row.description,
            due_by: row.due_by,
            created: row.created,
            last_updated: row.last_updated,
            assigned_to: row.assigned_to,
            priority: row.priority,
        }
    }
}

impl TaskColumns {
    /// Build column values from a request body.
    ///
    /// `created` comes from the body when given, capped at `now`.
    /// `last_updated` is always `now`; the body value is ignored.
    pub fn from_details(details: TaskDetails, now: NaiveDateTime) -> Self {
        Self {
            title: details.title,
            description: details.description,
            priority: details.priority,
            created: details.created.map_or(now, |created| created.min(now)),
            last_updated: now,
            assigned_to: details.assigned_to,
            due_by: details.due_by,
        }
    }
}
