//! Repository implementations for database access
//!
//! Each repository follows these patterns:
//! - Reads go straight to the pool, no explicit transaction
//! - Every write opens one transaction, dropped (rolled back) on error
//! - Updates and inserts return the persisted row via RETURNING

pub mod persons;
pub mod tasks;

pub use persons::PersonRepo;
pub use tasks::TaskRepo;

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: i32 },

    #[error("expected one {resource} for id '{id}', got {rows}")]
    Ambiguous {
        resource: &'static str,
        id: i32,
        rows: usize,
    },
}

impl DbError {
    /// True when storage rejected the statement on a foreign key.
    pub fn is_foreign_key_violation(&self) -> bool {
        match self {
            Self::Sqlx(sqlx::Error::Database(e)) => e.is_foreign_key_violation(),
            _ => false,
        }
    }
}

/// Collapse a lookup result to its single row.
///
/// Zero rows is `NotFound`; more than one is `Ambiguous`.
pub(crate) fn exactly_one<T>(
    mut rows: Vec<T>,
    resource: &'static str,
    id: i32,
) -> Result<T, DbError> {
    match rows.len() {
        1 => Ok(rows.remove(0)),
        0 => Err(DbError::NotFound { resource, id }),
        n => Err(DbError::Ambiguous {
            resource,
            id,
            rows: n,
        }),
    }
}
