//! Driving port for employee mutations.
//!
//! Every operation takes already validated [`EmployeeDetails`]; shape checks
//! on raw input belong to the inbound adapter.

use async_trait::async_trait;

use crate::domain::{Employee, EmployeeDetails, EmployeeId, Error};

/// Write access to employees for inbound adapters.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmployeesCommand: Send + Sync {
    async fn create_employee(&self, details: EmployeeDetails) -> Result<Employee, Error>;

    /// Replace every editable field of `id`.
    ///
    /// Fails with [`crate::domain::ErrorCode::NotFound`] for unknown ids.
    async fn update_employee(
        &self,
        id: &EmployeeId,
        details: EmployeeDetails,
    ) -> Result<Employee, Error>;

    /// Remove `id` and return the record as it was.
    ///
    /// Fails with [`crate::domain::ErrorCode::NotFound`] for unknown ids.
    async fn delete_employee(&self, id: &EmployeeId) -> Result<Employee, Error>;
}
