//! Apply migrations and insert the sample employees into an empty database.
#![cfg_attr(not(any(test, doctest)), deny(clippy::unwrap_used))]
#![cfg_attr(not(any(test, doctest)), deny(clippy::expect_used))]

use std::env;

use clap::Parser;
use color_eyre::eyre::{Context, Result, eyre};
use tokio::runtime::Builder;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

use personnel::example_data::{SeedOutcome, seed_employees};
use personnel::outbound::persistence::{
    DbPool, DieselEmployeeRepository, PoolConfig, run_migrations_blocking,
};

/// `seed-employees` command arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "seed-employees",
    about = "Apply migrations and seed an empty employee table with sample records",
    version
)]
struct CliArgs {
    /// Database connection URL. Falls back to `DATABASE_URL` when omitted.
    #[arg(long = "database-url", value_name = "url")]
    database_url: Option<String>,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let args = CliArgs::parse();
    let runtime = Builder::new_current_thread()
        .enable_all()
        .build()
        .wrap_err("create Tokio runtime")?;
    runtime.block_on(async_main(args))
}

async fn async_main(args: CliArgs) -> Result<()> {
    let database_url = resolve_database_url(args.database_url, env::var("DATABASE_URL").ok())?;

    run_migrations_blocking(database_url.clone())
        .await
        .wrap_err("apply migrations")?;
    let pool = DbPool::new(PoolConfig::new(database_url))
        .await
        .wrap_err("create database pool")?;
    let repo = DieselEmployeeRepository::new(pool);

    let outcome = seed_employees(&repo).await.wrap_err("seed employees")?;
    println!("{}", describe(outcome));
    Ok(())
}

fn resolve_database_url(explicit: Option<String>, from_env: Option<String>) -> Result<String> {
    if let Some(value) = explicit {
        if value.trim().is_empty() {
            return Err(eyre!("--database-url must not be empty when provided"));
        }
        return Ok(value);
    }

    match from_env {
        Some(value) if !value.trim().is_empty() => Ok(value),
        Some(_) => Err(eyre!("DATABASE_URL must not be empty")),
        None => Err(eyre!("database URL missing: set --database-url or DATABASE_URL")),
    }
}

fn describe(outcome: SeedOutcome) -> String {
    match outcome {
        SeedOutcome::Applied { inserted } => format!("inserted {inserted} employees"),
        SeedOutcome::AlreadySeeded { existing } => {
            format!("skipped: table already holds {existing} employees")
        }
        SeedOutcome::Disabled => "skipped: seeding disabled".to_owned(),
    }
}
