//! Application state shared across handlers

use sqlx::PgPool;
use std::sync::Arc;

/// Shared application state
///
/// Owns the storage client for the lifetime of the server; handlers get
/// a cheap clone per request.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    pool: PgPool,
}

impl AppState {
    pub fn new(pool: PgPool) -> Self {
        Self {
            inner: Arc::new(AppStateInner { pool }),
        }
    }

    pub fn pool(&self) -> &PgPool {
        &self.inner.pool
    }
}
