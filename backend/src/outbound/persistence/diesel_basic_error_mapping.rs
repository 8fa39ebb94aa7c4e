//! Diesel and pool error mapping for the employee repository.

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use tracing::debug;

use crate::domain::ports::EmployeePersistenceError;

use super::pool::PoolError;

pub(super) fn map_pool_error(error: PoolError) -> EmployeePersistenceError {
    debug!(%error, "employee pool checkout failed");
    match error {
        PoolError::Checkout { message } | PoolError::Build { message } => {
            EmployeePersistenceError::connection(message)
        }
    }
}

/// Constraint violations and query-builder failures are query errors; only a
/// closed connection is reported as a connection error.
pub(super) fn map_diesel_error(error: DieselError) -> EmployeePersistenceError {
    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(&error),
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::NotFound => EmployeePersistenceError::query("record not found"),
        DieselError::QueryBuilderError(_) => {
            EmployeePersistenceError::query("database query error")
        }
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            EmployeePersistenceError::connection("database connection error")
        }
        DieselError::DatabaseError(DatabaseErrorKind::CheckViolation, _) => {
            EmployeePersistenceError::query("employee violates a table constraint")
        }
        _ => EmployeePersistenceError::query("database error"),
    }
}
