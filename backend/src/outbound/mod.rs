//! Outbound adapters implementing the employee repository port.
//!
//! - **persistence**: PostgreSQL via Diesel and a `bb8` pool.
//! - **memory**: process-local store for database-less runs and tests.
//!
//! Adapters only translate between domain types and storage representations.

pub mod memory;
pub mod persistence;
