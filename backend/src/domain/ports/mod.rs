//! Ports at the hexagonal boundary of the employee domain.
//!
//! Driving ports ([`EmployeesQuery`], [`EmployeesCommand`]) are called by the
//! HTTP adapter; the driven port ([`EmployeeRepository`]) is implemented by
//! the persistence adapters.

mod macros;
pub(crate) use macros::define_port_error;

mod employee_repository;
mod employees_command;
mod employees_query;

#[cfg(test)]
pub use employee_repository::MockEmployeeRepository;
pub use employee_repository::{EmployeePersistenceError, EmployeeRepository};
#[cfg(test)]
pub use employees_command::MockEmployeesCommand;
pub use employees_command::EmployeesCommand;
#[cfg(test)]
pub use employees_query::MockEmployeesQuery;
pub use employees_query::EmployeesQuery;
