//! Subcommand implementations

pub mod migrate;
pub mod serve;

pub use migrate::run_migrate;
pub use serve::run_serve;

use clap::Args;

/// Default connection target when neither flag nor environment is set
pub const DEFAULT_DATABASE_URL: &str = "postgres://todo_app@localhost/todo";

/// Database connection arguments shared by subcommands
#[derive(Args, Debug, Clone)]
pub struct DatabaseArgs {
    /// Database URL
    #[arg(long, env = "DATABASE_URL", default_value = DEFAULT_DATABASE_URL)]
    pub database_url: String,

    /// Maximum connections in the pool
    #[arg(long, default_value_t = todoctl_server::db::pool::DEFAULT_MAX_CONNECTIONS)]
    pub max_connections: u32,
}
