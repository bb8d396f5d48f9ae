//! Schema bootstrap and one-time sample data

use chrono::Utc;
use sqlx::PgPool;

use crate::Result;

const PERSON_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS person (
        id SERIAL PRIMARY KEY,
        name VARCHAR NOT NULL,
        email VARCHAR NOT NULL
    )
"#;

const TASK_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS task (
        id SERIAL PRIMARY KEY,
        title VARCHAR NOT NULL,
        description VARCHAR NOT NULL,
        priority INTEGER NULL,
        created timestamp NOT NULL,
        last_updated timestamp NOT NULL,
        assigned_to INTEGER NULL REFERENCES person (id),
        due_by timestamp without time zone NULL
    )
"#;

/// Sentinel: a row here means sample data has been inserted once
const INIT_TABLE: &str = "CREATE TABLE IF NOT EXISTS init (init bool)";

const SAMPLE_PERSONS: &[(&str, &str)] = &[
    ("Greg Sample", "greg.sample@todo.net"),
    ("Jeff Sample", "jeff.sample@todo.net"),
    ("Mike Sample", "mike.sample@todo.net"),
];

const SAMPLE_TASKS: &[(&str, &str, Option<i32>)] = &[
    ("Create DB", "Create database to hold to-dos data", Some(1)),
    (
        "Add DB initialization",
        "Add code to check if the DB is initialized, if not add sample data to the DB",
        Some(2),
    ),
    (
        "Add access methods for Person",
        "Add access methods to the Person data",
        Some(3),
    ),
    (
        "Add access methods for Task",
        "Add access methods to the Task data",
        Some(3),
    ),
    (
        "Add NULL handling for tasks",
        "Tasks have field that can be null add code to deal with it",
        None,
    ),
];

/// Create tables if they do not exist yet.
pub async fn migrate(pool: &PgPool) -> Result<()> {
    tracing::info!("Adding table definitions (if need be)");

    for statement in [PERSON_TABLE, TASK_TABLE, INIT_TABLE] {
        sqlx::query(statement).execute(pool).await?;
    }

    Ok(())
}

/// Insert sample data unless the sentinel says it was done before.
///
/// The sentinel is checked under an exclusive lock on `init`, so
/// concurrent callers seed at most once. Returns `true` when rows were
/// inserted.
pub async fn seed(pool: &PgPool) -> Result<bool> {
    let mut tx = pool.begin().await?;

    sqlx::query("LOCK TABLE init IN EXCLUSIVE MODE")
        .execute(&mut *tx)
        .await?;

    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM init")
        .fetch_one(&mut *tx)
        .await?;

    if count > 0 {
        tracing::info!("Database already initialized");
        return Ok(false);
    }

    tracing::info!("Adding sample data to database");
    let now = Utc::now().naive_utc();

    for &(name, email) in SAMPLE_PERSONS {
        sqlx::query("INSERT INTO person (name, email) VALUES ($1, $2)")
            .bind(name)
            .bind(email)
            .execute(&mut *tx)
            .await?;
    }

    for &(title, description, priority) in SAMPLE_TASKS {
        sqlx::query(
            r#"
            INSERT INTO task (title, description, priority, created, last_updated)
            VALUES ($1, $2, $3, $4, $4)
            "#,
        )
        .bind(title)
        .bind(description)
        .bind(priority)
        .bind(now)
        .execute(&mut *tx)
        .await?;
    }

    sqlx::query("INSERT INTO init (init) VALUES (TRUE)")
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;
    Ok(true)
}
