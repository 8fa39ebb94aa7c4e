//! Startup seeding orchestration.

use thiserror::Error;
use tracing::info;

use crate::domain::EmployeeValidationError;
use crate::domain::ports::{EmployeePersistenceError, EmployeeRepository};
use crate::example_data::config::ExampleDataSettings;
use crate::example_data::seed::sample_employees;

/// What a seeding attempt did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    /// Seeding is turned off.
    Disabled,
    /// The store was empty and the samples were inserted.
    Applied { inserted: usize },
    /// The store already held employees; nothing was written.
    AlreadySeeded { existing: u64 },
}

#[derive(Debug, Error)]
pub enum StartupSeedingError {
    #[error("sample employee is invalid: {0}")]
    InvalidSample(#[from] EmployeeValidationError),
    #[error("example data seeding failed: {0}")]
    Store(#[from] EmployeePersistenceError),
}

/// Insert the sample employees when `repo` is empty.
pub async fn seed_employees(repo: &dyn EmployeeRepository) -> Result<SeedOutcome, StartupSeedingError> {
    let existing = repo.count().await?;
    if existing > 0 {
        info!(existing, "example data already present; skipping");
        return Ok(SeedOutcome::AlreadySeeded { existing });
    }

    let samples = sample_employees()?;
    for details in &samples {
        repo.insert(details).await?;
    }
    info!(inserted = samples.len(), "example data seeding applied");
    Ok(SeedOutcome::Applied {
        inserted: samples.len(),
    })
}

/// Apply the sample employees at startup when enabled.
///
/// ```rust,no_run
/// use personnel::example_data::{ExampleDataSettings, SeedOutcome, seed_example_data_on_startup};
/// use personnel::outbound::memory::InMemoryEmployeeRepository;
///
/// # async fn run() -> Result<(), Box<dyn std::error::Error>> {
/// let settings = ExampleDataSettings { enabled: false };
/// let outcome = seed_example_data_on_startup(&settings, &InMemoryEmployeeRepository::new()).await?;
/// assert_eq!(outcome, SeedOutcome::Disabled);
/// # Ok(())
/// # }
/// ```
pub async fn seed_example_data_on_startup(
    settings: &ExampleDataSettings,
    repo: &dyn EmployeeRepository,
) -> Result<SeedOutcome, StartupSeedingError> {
    if !settings.is_enabled() {
        info!(reason = "disabled", "example data seeding skipped");
        return Ok(SeedOutcome::Disabled);
    }
    seed_employees(repo).await
}
