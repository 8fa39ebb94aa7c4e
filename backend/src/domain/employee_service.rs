//! Employee domain service.
//!
//! Implements both driving ports over a single [`EmployeeRepository`]. The
//! service adds no behaviour of its own beyond translating persistence
//! failures and absent records into domain errors.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::error;

use crate::domain::ports::{
    EmployeePersistenceError, EmployeeRepository, EmployeesCommand, EmployeesQuery,
};
use crate::domain::{Employee, EmployeeDetails, EmployeeId, Error};

fn map_repository_error(err: EmployeePersistenceError) -> Error {
    error!(error = %err, "employee repository failure");
    match err {
        EmployeePersistenceError::Connection { message } => {
            Error::service_unavailable(format!("employee store unavailable: {message}"))
        }
        EmployeePersistenceError::Query { message } => {
            Error::internal(format!("employee store error: {message}"))
        }
    }
}

fn not_found(id: &EmployeeId) -> Error {
    Error::not_found(format!("employee {id} not found"))
}

/// Employee service implementing [`EmployeesQuery`] and [`EmployeesCommand`].
#[derive(Clone)]
pub struct EmployeeService<R: ?Sized> {
    repo: Arc<R>,
}

impl<R: ?Sized> EmployeeService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R: ?Sized> EmployeesQuery for EmployeeService<R>
where
    R: EmployeeRepository,
{
    async fn list_employees(&self) -> Result<Vec<Employee>, Error> {
        self.repo.list().await.map_err(map_repository_error)
    }

    async fn get_employee(&self, id: &EmployeeId) -> Result<Employee, Error> {
        self.repo
            .find_by_id(id)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| not_found(id))
    }
}

#[async_trait]
impl<R: ?Sized> EmployeesCommand for EmployeeService<R>
where
    R: EmployeeRepository,
{
    async fn create_employee(&self, details: EmployeeDetails) -> Result<Employee, Error> {
        self.repo
            .insert(&details)
            .await
            .map_err(map_repository_error)
    }

    async fn update_employee(
        &self,
        id: &EmployeeId,
        details: EmployeeDetails,
    ) -> Result<Employee, Error> {
        self.repo
            .update(id, &details)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| not_found(id))
    }

    async fn delete_employee(&self, id: &EmployeeId) -> Result<Employee, Error> {
        self.repo
            .delete(id)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| not_found(id))
    }
}

#[cfg(test)]
#[path = "employee_service_tests.rs"]
mod tests;
