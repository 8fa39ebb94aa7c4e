//! Driven port for employee persistence.
//!
//! Adapters store [`EmployeeDetails`] and hand back [`Employee`] records with
//! a store-assigned identifier. Absent records are reported as `None` so the
//! service decides how to surface them.

use async_trait::async_trait;

use crate::domain::{Employee, EmployeeDetails, EmployeeId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by employee repository adapters.
    pub enum EmployeePersistenceError {
        /// The store could not be reached.
        Connection { message: String } =>
            "employee store connection failed: {message}",
        /// A query or mutation failed while executing.
        Query { message: String } =>
            "employee store query failed: {message}",
    }
}

/// Port for employee storage.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// Every stored employee, oldest first.
    async fn list(&self) -> Result<Vec<Employee>, EmployeePersistenceError>;

    async fn find_by_id(
        &self,
        id: &EmployeeId,
    ) -> Result<Option<Employee>, EmployeePersistenceError>;

    /// Persist a new employee and return it with its generated identifier.
    async fn insert(&self, details: &EmployeeDetails)
    -> Result<Employee, EmployeePersistenceError>;

    /// Overwrite all editable fields of `id`.
    ///
    /// Returns `None` when no such employee exists.
    async fn update(
        &self,
        id: &EmployeeId,
        details: &EmployeeDetails,
    ) -> Result<Option<Employee>, EmployeePersistenceError>;

    /// Remove `id`, returning the deleted record when it existed.
    async fn delete(&self, id: &EmployeeId)
    -> Result<Option<Employee>, EmployeePersistenceError>;

    /// Number of stored employees.
    async fn count(&self) -> Result<u64, EmployeePersistenceError>;
}
