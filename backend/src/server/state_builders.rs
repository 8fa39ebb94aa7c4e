//! Builders for the employee store handle and the HTTP state wired over it.

use std::sync::Arc;

use actix_web::web;
use tracing::warn;

use personnel::domain::ports::EmployeeRepository;
use personnel::inbound::http::state::HttpState;
use personnel::outbound::memory::InMemoryEmployeeRepository;
use personnel::outbound::persistence::DieselEmployeeRepository;

use super::ServerConfig;

/// Pick the repository backing the service: Diesel when a pool is
/// configured, otherwise a fresh in-memory store.
pub fn build_employee_repository(config: &ServerConfig) -> Arc<dyn EmployeeRepository> {
    match &config.db_pool {
        Some(pool) => Arc::new(DieselEmployeeRepository::new(pool.clone())),
        None => {
            warn!("no database configured; employees are kept in memory and lost on exit");
            Arc::new(InMemoryEmployeeRepository::new())
        }
    }
}

pub fn build_http_state(repo: Arc<dyn EmployeeRepository>) -> web::Data<HttpState> {
    web::Data::new(HttpState::from_repository(repo))
}
