//! Admin console: a typed HTTP client for the employee resource and the
//! roster state the `employee-admin` binary drives.

mod client;
mod session;

pub use client::{ClientError, EmployeesClient};
pub use session::{AdminConsole, SearchOutcome};
