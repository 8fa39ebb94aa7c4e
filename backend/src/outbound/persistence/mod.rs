//! PostgreSQL persistence adapters built on Diesel.
//!
//! - [`DbPool`] / [`PoolConfig`]: the async `bb8` connection pool.
//! - [`DieselEmployeeRepository`]: the `EmployeeRepository` adapter.
//! - [`run_migrations`]: embedded schema migrations.
//!
//! Row structs and the Diesel schema stay private to this module.

mod diesel_basic_error_mapping;
mod diesel_employee_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_employee_repository::DieselEmployeeRepository;
pub use migrations::{MIGRATIONS, run_migrations, run_migrations_blocking};
pub use pool::{DbPool, PoolConfig, PoolError};
