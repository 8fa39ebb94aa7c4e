//! Embedded schema migrations.

use diesel::pg::PgConnection;
use diesel::Connection;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tracing::info;

use crate::domain::ports::EmployeePersistenceError;

/// Migrations compiled in from `backend/migrations`.
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Apply every pending migration to `database_url`.
///
/// Blocking: uses a synchronous connection. Call from `spawn_blocking` inside
/// an async runtime.
pub fn run_migrations(database_url: &str) -> Result<(), EmployeePersistenceError> {
    let mut conn = PgConnection::establish(database_url)
        .map_err(|err| EmployeePersistenceError::connection(err.to_string()))?;
    let applied = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|err| EmployeePersistenceError::query(format!("migration: {err}")))?;
    info!(applied = applied.len(), "schema migrations applied");
    Ok(())
}

/// Async wrapper running [`run_migrations`] on the blocking pool.
pub async fn run_migrations_blocking(database_url: String) -> Result<(), EmployeePersistenceError> {
    tokio::task::spawn_blocking(move || run_migrations(&database_url))
        .await
        .map_err(|err| EmployeePersistenceError::query(format!("migration task: {err}")))?
}
