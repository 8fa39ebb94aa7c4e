//! Driving port for employee reads.

use async_trait::async_trait;

use crate::domain::{Employee, EmployeeId, Error};

/// Read access to employees for inbound adapters.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmployeesQuery: Send + Sync {
    /// All employees in store order.
    async fn list_employees(&self) -> Result<Vec<Employee>, Error>;

    /// One employee, or [`crate::domain::ErrorCode::NotFound`].
    async fn get_employee(&self, id: &EmployeeId) -> Result<Employee, Error>;
}
