//! `EmployeeRepository` held in a mutex-guarded vector.
//!
//! Records keep insertion order, matching the creation-time ordering of the
//! PostgreSQL adapter. Contents vanish with the process.

use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use crate::domain::ports::{EmployeePersistenceError, EmployeeRepository};
use crate::domain::{Employee, EmployeeDetails, EmployeeId};

#[derive(Debug, Default)]
pub struct InMemoryEmployeeRepository {
    employees: Mutex<Vec<Employee>>,
}

impl InMemoryEmployeeRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from existing records, kept in the given order.
    pub fn with_employees(employees: impl IntoIterator<Item = Employee>) -> Self {
        Self {
            employees: Mutex::new(employees.into_iter().collect()),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Vec<Employee>>, EmployeePersistenceError> {
        self.employees
            .lock()
            .map_err(|_| EmployeePersistenceError::query("employee store lock poisoned"))
    }
}

#[async_trait]
impl EmployeeRepository for InMemoryEmployeeRepository {
    async fn list(&self) -> Result<Vec<Employee>, EmployeePersistenceError> {
        Ok(self.lock()?.clone())
    }

    async fn find_by_id(
        &self,
        id: &EmployeeId,
    ) -> Result<Option<Employee>, EmployeePersistenceError> {
        Ok(self.lock()?.iter().find(|e| e.id() == *id).cloned())
    }

    async fn insert(
        &self,
        details: &EmployeeDetails,
    ) -> Result<Employee, EmployeePersistenceError> {
        let employee = Employee::new(EmployeeId::random(), details.clone());
        self.lock()?.push(employee.clone());
        Ok(employee)
    }

    async fn update(
        &self,
        id: &EmployeeId,
        details: &EmployeeDetails,
    ) -> Result<Option<Employee>, EmployeePersistenceError> {
        let mut employees = self.lock()?;
        let Some(slot) = employees.iter_mut().find(|e| e.id() == *id) else {
            return Ok(None);
        };
        *slot = Employee::new(*id, details.clone());
        Ok(Some(slot.clone()))
    }

    async fn delete(
        &self,
        id: &EmployeeId,
    ) -> Result<Option<Employee>, EmployeePersistenceError> {
        let mut employees = self.lock()?;
        let removed = employees
            .iter()
            .position(|e| e.id() == *id)
            .map(|index| employees.remove(index));
        Ok(removed)
    }

    async fn count(&self) -> Result<u64, EmployeePersistenceError> {
        let len = self.lock()?.len();
        u64::try_from(len).map_err(|_| EmployeePersistenceError::query("employee count overflow"))
    }
}
