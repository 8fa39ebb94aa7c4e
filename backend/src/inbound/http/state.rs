//! Shared HTTP adapter state.
//!
//! Handlers receive this through `web::Data` and only see the driving ports,
//! so they can be exercised against any repository.

use std::sync::Arc;

use crate::domain::EmployeeService;
use crate::domain::ports::{EmployeeRepository, EmployeesCommand, EmployeesQuery};

/// Port bundle for the employee handlers and pages.
#[derive(Clone)]
pub struct HttpState {
    pub employees: Arc<dyn EmployeesQuery>,
    pub employee_commands: Arc<dyn EmployeesCommand>,
}

impl HttpState {
    pub fn new(
        employees: Arc<dyn EmployeesQuery>,
        employee_commands: Arc<dyn EmployeesCommand>,
    ) -> Self {
        Self {
            employees,
            employee_commands,
        }
    }

    /// Wire both ports to one [`EmployeeService`] over `repo`.
    pub fn from_repository<R>(repo: Arc<R>) -> Self
    where
        R: EmployeeRepository + ?Sized + 'static,
    {
        let service = Arc::new(EmployeeService::new(repo));
        Self::new(service.clone(), service)
    }
}
