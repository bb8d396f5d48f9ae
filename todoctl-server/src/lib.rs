//! todoctl-server: HTTP service for people and the tasks assigned to them
//!
//! Maps REST verbs on `/person/` and `/task/` onto PostgreSQL statements,
//! translating nullable columns to optional JSON fields and back.

pub mod db;
pub mod error;
pub mod http;
pub mod models;
pub mod state;

pub use error::{Error, Result};
pub use http::{build_router, run_server, ServerConfig};
pub use state::AppState;
