//! Database layer - connection pool, row mapping and repositories
//!
//! # Design Principles
//!
//! - One injected connection pool, no process-wide connection handle
//! - Each write runs in its own transaction; reads hit the pool directly
//! - Referential integrity is left to the database constraints

pub mod mapper;
pub mod pool;
pub mod repos;
pub mod schema;

pub use pool::{create_pool, create_pool_with_options};
pub use repos::*;
