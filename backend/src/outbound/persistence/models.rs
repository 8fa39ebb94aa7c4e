//! Diesel row structs for the `employees` table.
//!
//! These never leave the persistence module; repositories convert them to and
//! from domain types at the boundary.

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use super::schema::employees;

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = employees)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct EmployeeRow {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub age: i32,
    pub department: String,
    pub salary: i64,
    #[expect(dead_code, reason = "read for ordering only; not part of the record")]
    pub created_at: DateTime<Utc>,
    #[expect(dead_code, reason = "housekeeping column; not part of the record")]
    pub updated_at: DateTime<Utc>,
}

/// Insert payload; `id` and timestamps come from column defaults.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = employees)]
pub(crate) struct NewEmployeeRow<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub age: i32,
    pub department: &'a str,
    pub salary: i64,
}

/// Full overwrite of the editable columns.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = employees)]
pub(crate) struct EmployeeChangeset<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub age: i32,
    pub department: &'a str,
    pub salary: i64,
}
