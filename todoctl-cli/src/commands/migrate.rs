//! Schema bootstrap command

use anyhow::{Context, Result};
use clap::Parser;

use todoctl_server::db::{create_pool_with_options, schema};

use super::DatabaseArgs;

/// Arguments for the migrate command
#[derive(Parser, Debug)]
pub struct MigrateArgs {
    /// Also insert sample data if the database was never seeded
    #[arg(long)]
    pub seed: bool,

    #[command(flatten)]
    pub database: DatabaseArgs,
}

/// Create missing tables, optionally seeding sample data
pub async fn run_migrate(args: MigrateArgs) -> Result<()> {
    let pool = create_pool_with_options(&args.database.database_url, args.database.max_connections)
        .await
        .context("Failed to create database pool")?;

    schema::migrate(&pool)
        .await
        .context("Failed to create tables")?;

    if args.seed {
        let seeded = schema::seed(&pool)
            .await
            .context("Failed to insert sample data")?;
        tracing::info!(seeded, "Sample data check complete");
    }

    pool.close().await;
    Ok(())
}
