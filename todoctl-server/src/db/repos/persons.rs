//! Person repository

use sqlx::PgPool;

use super::{exactly_one, DbError};
use crate::db::mapper::{PersonColumns, PersonRow};
use crate::models::{Person, PersonDetails};

/// Person repository
pub struct PersonRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> PersonRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all persons ordered by name.
    pub async fn list(&self) -> Result<Vec<Person>, DbError> {
        let rows: Vec<PersonRow> =
            sqlx::query_as("SELECT id, name, email FROM person ORDER BY name ASC")
                .fetch_all(self.pool)
                .await?;

        Ok(rows.into_iter().map(Person::from).collect())
    }

    /// Get a single person by id.
    pub async fn get(&self, id: i32) -> Result<Person, DbError> {
        let rows: Vec<PersonRow> = sqlx::query_as("SELECT id, name, email FROM person WHERE id = $1")
            .bind(id)
            .fetch_all(self.pool)
            .await?;

        exactly_one(rows, "person", id).map(Person::from)
    }

    /// Insert a person, returning it with its generated id.
    pub async fn create(&self, details: PersonDetails) -> Result<Person, DbError> {
        let columns = PersonColumns::from_details(details);
        let mut tx = self.pool.begin().await?;

        let row: PersonRow = sqlx::query_as(
            r#"
            INSERT INTO person (name, email)
            VALUES ($1, $2)
            RETURNING id, name, email
            "#,
        )
        .bind(&columns.name)
        .bind(&columns.email)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(row.into())
    }

    /// Replace every mutable column of the person with `id`.
    pub async fn update(&self, id: i32, details: PersonDetails) -> Result<Person, DbError> {
        let columns = PersonColumns::from_details(details);
        let mut tx = self.pool.begin().await?;

        let row: PersonRow = sqlx::query_as(
            r#"
            UPDATE person
            SET name = $1, email = $2
            WHERE id = $3
            RETURNING id, name, email
            "#,
        )
        .bind(&columns.name)
        .bind(&columns.email)
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or(DbError::NotFound {
            resource: "person",
            id,
        })?;

        tx.commit().await?;
        Ok(row.into())
    }

    /// Delete the person with `id`.
    ///
    /// Fails with a foreign key violation while a task is assigned to them.
    pub async fn delete(&self, id: i32) -> Result<(), DbError> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query("DELETE FROM person WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound {
                resource: "person",
                id,
            });
        }

        tx.commit().await?;
        Ok(())
    }
}
