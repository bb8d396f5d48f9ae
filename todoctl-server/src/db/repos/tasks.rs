//! Task repository
//!
//! `created` is written once on insert and never later than the insert
//! time. `last_updated` is stamped with the server clock on every write.

use chrono::{NaiveDateTime, Utc};
use sqlx::PgPool;

use super::{exactly_one, DbError};
use crate::db::mapper::{TaskColumns, TaskRow};
use crate::models::{Task, TaskDetails};

/// Server wall clock in the naive form stored in `timestamp` columns
fn now() -> NaiveDateTime {
    Utc::now().naive_utc()
}

/// Task repository
pub struct TaskRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> TaskRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all tasks ordered by id.
    pub async fn list(&self) -> Result<Vec<Task>, DbError> {
        let rows: Vec<TaskRow> = sqlx::query_as(
            r#"
            SELECT id, title, description, priority, created, last_updated, assigned_to, due_by
            FROM task
            ORDER BY id ASC
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(Task::from).collect())
    }

    /// Get a single task by id.
    pub async fn get(&self, id: i32) -> Result<Task, DbError> {
        let rows: Vec<TaskRow> = sqlx::query_as(
            r#"
            SELECT id, title, description, priority, created, last_updated, assigned_to, due_by
            FROM task
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_all(self.pool)
        .await?;

        exactly_one(rows, "task", id).map(Task::from)
    }

    /// Insert a task, returning it with its generated id.
    pub async fn create(&self, details: TaskDetails) -> Result<Task, DbError> {
        let columns = TaskColumns::from_details(details, now());
        let mut tx = self.pool.begin().await?;

        let row: TaskRow = sqlx::query_as(
            r#"
            INSERT INTO task (title, description, priority, created, last_updated, assigned_to, due_by)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, title, description, priority, created, last_updated, assigned_to, due_by
            "#,
        )
        .bind(&columns.title)
        .bind(&columns.description)
        .bind(columns.priority)
        .bind(columns.created)
        .bind(columns.last_updated)
        .bind(columns.assigned_to)
        .bind(columns.due_by)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(row.into())
    }

    /// Replace the mutable columns of the task with `id`.
    ///
    /// Body timestamps are ignored: `created` is left alone and
    /// `last_updated` is set to now.
    pub async fn update(&self, id: i32, details: TaskDetails) -> Result<Task, DbError> {
        let stamp = now();
        let columns = TaskColumns::from_details(details, stamp);
        let mut tx = self.pool.begin().await?;

        let row: TaskRow = sqlx::query_as(
            r#"
            UPDATE task
            SET title = $1,
                description = $2,
                priority = $3,
                last_updated = $4,
                assigned_to = $5,
                due_by = $6
            WHERE id = $7
            RETURNING id, title, description, priority, created, last_updated, assigned_to, due_by
            "#,
        )
        .bind(&columns.title)
        .bind(&columns.description)
        .bind(columns.priority)
        .bind(stamp)
        .bind(columns.assigned_to)
        .bind(columns.due_by)
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or(DbError::NotFound { resource: "task", id })?;

        tx.commit().await?;
        Ok(row.into())
    }

    /// Delete the task with `id`.
    pub async fn delete(&self, id: i32) -> Result<(), DbError> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query("DELETE FROM task WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound { resource: "task", id });
        }

        tx.commit().await?;
        Ok(())
    }
}
