//! PostgreSQL-backed `EmployeeRepository` using Diesel.

use async_trait::async_trait;
use diesel::dsl::now;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::warn;

use crate::domain::ports::{EmployeePersistenceError, EmployeeRepository};
use crate::domain::{Employee, EmployeeDetails, EmployeeId};

use super::diesel_basic_error_mapping::{map_diesel_error, map_pool_error};
use super::models::{EmployeeChangeset, EmployeeRow, NewEmployeeRow};
use super::pool::DbPool;
use super::schema::employees;

/// Diesel implementation of the employee repository port.
#[derive(Clone)]
pub struct DieselEmployeeRepository {
    pool: DbPool,
}

impl DieselEmployeeRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Rows that fail domain validation were written around the CHECK
/// constraints (the email rule has none) and are reported as query errors.
fn row_to_employee(row: EmployeeRow) -> Result<Employee, EmployeePersistenceError> {
    let id = EmployeeId::from_uuid(row.id);
    let details = EmployeeDetails::new(row.name, row.email, row.age, row.department, row.salary)
        .map_err(|err| {
            warn!(employee_id = %id, error = %err, "stored employee fails validation");
            EmployeePersistenceError::query(format!("stored employee {id} is invalid: {err}"))
        })?;
    Ok(Employee::new(id, details))
}

fn new_row(details: &EmployeeDetails) -> NewEmployeeRow<'_> {
    NewEmployeeRow {
        name: details.name(),
        email: details.email(),
        age: details.age(),
        department: details.department(),
        salary: details.salary(),
    }
}

fn changeset(details: &EmployeeDetails) -> EmployeeChangeset<'_> {
    EmployeeChangeset {
        name: details.name(),
        email: details.email(),
        age: details.age(),
        department: details.department(),
        salary: details.salary(),
    }
}

#[async_trait]
impl EmployeeRepository for DieselEmployeeRepository {
    async fn list(&self) -> Result<Vec<Employee>, EmployeePersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<EmployeeRow> = employees::table
            .select(EmployeeRow::as_select())
            .order((employees::created_at.asc(), employees::id.asc()))
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        rows.into_iter().map(row_to_employee).collect()
    }

    async fn find_by_id(
        &self,
        id: &EmployeeId,
    ) -> Result<Option<Employee>, EmployeePersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<EmployeeRow> = employees::table
            .find(*id.as_uuid())
            .select(EmployeeRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(row_to_employee).transpose()
    }

    async fn insert(
        &self,
        details: &EmployeeDetails,
    ) -> Result<Employee, EmployeePersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: EmployeeRow = diesel::insert_into(employees::table)
            .values(&new_row(details))
            .returning(EmployeeRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        row_to_employee(row)
    }

    async fn update(
        &self,
        id: &EmployeeId,
        details: &EmployeeDetails,
    ) -> Result<Option<Employee>, EmployeePersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<EmployeeRow> = diesel::update(employees::table.find(*id.as_uuid()))
            .set((changeset(details), employees::updated_at.eq(now)))
            .returning(EmployeeRow::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(row_to_employee).transpose()
    }

    async fn delete(
        &self,
        id: &EmployeeId,
    ) -> Result<Option<Employee>, EmployeePersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<EmployeeRow> = diesel::delete(employees::table.find(*id.as_uuid()))
            .returning(EmployeeRow::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(row_to_employee).transpose()
    }

    async fn count(&self) -> Result<u64, EmployeePersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let total: i64 = employees::table
            .count()
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        u64::try_from(total)
            .map_err(|_| EmployeePersistenceError::query("negative employee count"))
    }
}
