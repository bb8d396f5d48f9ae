//! HTTP server command
//!
//! Connects the pool, bootstraps the schema and serves the person/task API.

use anyhow::{Context, Result};
use clap::Parser;
use std::net::SocketAddr;

use todoctl_server::db::{create_pool_with_options, schema};
use todoctl_server::{run_server, ServerConfig};

use super::DatabaseArgs;

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', default_value = "0.0.0.0:8000")]
    pub bind: SocketAddr,

    /// Do not insert sample data into a fresh database
    #[arg(long)]
    pub skip_seed: bool,

    #[command(flatten)]
    pub database: DatabaseArgs,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    tracing::info!("Connecting to the database");
    let pool = create_pool_with_options(&args.database.database_url, args.database.max_connections)
        .await
        .context("Failed to create database pool")?;

    schema::migrate(&pool)
        .await
        .context("Failed to create tables")?;

    if !args.skip_seed {
        schema::seed(&pool)
            .await
            .context("Failed to insert sample data")?;
    }

    tracing::info!("Starting todoctl server on {}", args.bind);

    let config = ServerConfig {
        bind_addr: args.bind,
    };

    // Run server (blocks until shutdown)
    run_server(pool, config).await.context("Server error")?;

    Ok(())
}
