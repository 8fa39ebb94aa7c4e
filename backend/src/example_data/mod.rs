//! Sample employees and the startup seeding that applies them.

mod config;
mod seed;
mod startup;

pub use config::ExampleDataSettings;
pub use seed::{SAMPLE_EMPLOYEES, sample_employees};
pub use startup::{SeedOutcome, StartupSeedingError, seed_employees, seed_example_data_on_startup};
