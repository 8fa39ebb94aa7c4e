//! Backend entry-point: opens the employee store, seeds it when asked, and
//! serves the API, pages and OpenAPI docs until interrupted.

mod server;

use std::ffi::OsString;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use personnel::example_data::{ExampleDataSettings, seed_example_data_on_startup};
use personnel::inbound::http::health::HealthState;
use personnel::outbound::persistence::{DbPool, PoolConfig, run_migrations_blocking};
use server::{
    ServerConfig, ServerSettings, build_employee_repository, build_http_state, create_server,
};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = ServerSettings::load_from_iter(std::env::args_os())
        .map_err(|e| std::io::Error::other(format!("failed to load server settings: {e}")))?;
    // Seeding is configured through env and file layers only.
    let example_data = ExampleDataSettings::load_from_iter([OsString::from("personnel")])
        .map_err(|e| std::io::Error::other(format!("failed to load example data settings: {e}")))?;

    let mut config = ServerConfig::new(settings.bind_addr());
    if let Some(database_url) = settings.database_url() {
        run_migrations_blocking(database_url.clone())
            .await
            .map_err(|e| std::io::Error::other(format!("failed to apply migrations: {e}")))?;
        let pool = DbPool::new(PoolConfig::new(database_url))
            .await
            .map_err(|e| std::io::Error::other(format!("failed to open employee store: {e}")))?;
        config = config.with_db_pool(pool);
    }

    let health_state = web::Data::new(HealthState::new());
    let repo = build_employee_repository(&config);
    health_state.mark_store_open();

    if let Err(e) = seed_example_data_on_startup(&example_data, repo.as_ref()).await {
        error!(error = %e, "example data seeding failed");
        return Err(std::io::Error::other(e.to_string()));
    }

    let server = create_server(health_state.clone(), build_http_state(repo), &config)?;
    info!(addr = %config.bind_addr(), "listening");
    let handle = server.handle();
    let shutdown_state = health_state.clone();
    actix_web::rt::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "failed to listen for shutdown signal");
            return;
        }
        info!("shutdown requested");
        shutdown_state.mark_unhealthy();
        handle.stop(true).await;
    });

    let result = server.await;

    health_state.mark_unhealthy();
    if let Some(pool) = config.db_pool.take() {
        let (connections, idle) = pool.connections();
        drop(pool);
        info!(connections, idle, "employee store closed");
    } else {
        info!("in-memory employee store discarded");
    }
    result
}
