//! Process-local store used when no database is configured, and by tests.

mod in_memory_employee_repository;

pub use in_memory_employee_repository::InMemoryEmployeeRepository;
