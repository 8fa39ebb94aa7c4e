//! Employee resource handlers.
//!
//! One path, selected by method and the optional `id` query parameter:
//!
//! ```text
//! GET    /api/v1/employees            list every employee
//! GET    /api/v1/employees?id=<uuid>  fetch one
//! POST   /api/v1/employees            create from body
//! PUT    /api/v1/employees?id=<uuid>  overwrite all fields
//! DELETE /api/v1/employees?id=<uuid>  remove
//! ```

use actix_web::{HttpRequest, HttpResponse, delete, error::JsonPayloadError, get, post, put, web};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::IntoParams;

use crate::domain::Error;
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{DeletedSchema, EmployeePayloadSchema, EmployeeSchema, ErrorSchema};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    invalid_json_error, parse_employee_payload, parse_optional_id, parse_required_id,
};

/// Message returned by a successful delete.
pub const DELETED_MESSAGE: &str = "employee deleted";

/// `?id=` selector. Empty values are treated as absent.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct EmployeeIdQuery {
    /// Employee identifier (UUID).
    pub id: Option<String>,
}

/// Body of a successful delete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deleted {
    pub message: String,
}

fn json_error(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    invalid_json_error(&err).into()
}

/// Body extractor settings mapping unreadable bodies to `400 invalid_request`.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(json_error)
}

/// Query extractor settings mapping malformed query strings to
/// `400 invalid_request`.
pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err, _req| {
        Error::invalid_request(format!("invalid query string: {err}")).into()
    })
}

/// List employees, or fetch one when `id` is given.
#[utoipa::path(
    get,
    path = "/api/v1/employees",
    params(EmployeeIdQuery),
    responses(
        (status = 200, description = "All employees, or the single match when `id` is set", body = [EmployeeSchema]),
        (status = 400, description = "Malformed id", body = ErrorSchema),
        (status = 404, description = "No employee with that id", body = ErrorSchema),
        (status = 500, description = "Store failure", body = ErrorSchema),
        (status = 503, description = "Store unreachable", body = ErrorSchema)
    ),
    tags = ["employees"],
    operation_id = "getEmployees"
)]
#[get("/employees")]
pub async fn get_employees(
    state: web::Data<HttpState>,
    query: web::Query<EmployeeIdQuery>,
) -> ApiResult<HttpResponse> {
    match parse_optional_id(query.id.as_deref())? {
        Some(id) => {
            let employee = state.employees.get_employee(&id).await?;
            Ok(HttpResponse::Ok().json(employee))
        }
        None => {
            let employees = state.employees.list_employees().await?;
            Ok(HttpResponse::Ok().json(employees))
        }
    }
}

/// Create an employee.
#[utoipa::path(
    post,
    path = "/api/v1/employees",
    request_body = EmployeePayloadSchema,
    responses(
        (status = 201, description = "Created", body = EmployeeSchema),
        (status = 400, description = "Invalid body", body = ErrorSchema),
        (status = 500, description = "Store failure", body = ErrorSchema),
        (status = 503, description = "Store unreachable", body = ErrorSchema)
    ),
    tags = ["employees"],
    operation_id = "createEmployee"
)]
#[post("/employees")]
pub async fn create_employee(
    state: web::Data<HttpState>,
    body: web::Json<Value>,
) -> ApiResult<HttpResponse> {
    let details = parse_employee_payload(&body)?;
    let employee = state.employee_commands.create_employee(details).await?;
    Ok(HttpResponse::Created().json(employee))
}

/// Overwrite all editable fields of an employee.
#[utoipa::path(
    put,
    path = "/api/v1/employees",
    params(EmployeeIdQuery),
    request_body = EmployeePayloadSchema,
    responses(
        (status = 200, description = "Updated", body = EmployeeSchema),
        (status = 400, description = "Missing or malformed id, or invalid body", body = ErrorSchema),
        (status = 404, description = "No employee with that id", body = ErrorSchema),
        (status = 500, description = "Store failure", body = ErrorSchema),
        (status = 503, description = "Store unreachable", body = ErrorSchema)
    ),
    tags = ["employees"],
    operation_id = "updateEmployee"
)]
#[put("/employees")]
pub async fn update_employee(
    state: web::Data<HttpState>,
    query: web::Query<EmployeeIdQuery>,
    body: web::Json<Value>,
) -> ApiResult<HttpResponse> {
    let id = parse_required_id(query.id.as_deref())?;
    let details = parse_employee_payload(&body)?;
    let employee = state.employee_commands.update_employee(&id, details).await?;
    Ok(HttpResponse::Ok().json(employee))
}

/// Delete an employee.
#[utoipa::path(
    delete,
    path = "/api/v1/employees",
    params(EmployeeIdQuery),
    responses(
        (status = 200, description = "Deleted", body = DeletedSchema),
        (status = 400, description = "Missing or malformed id", body = ErrorSchema),
        (status = 404, description = "No employee with that id", body = ErrorSchema),
        (status = 500, description = "Store failure", body = ErrorSchema),
        (status = 503, description = "Store unreachable", body = ErrorSchema)
    ),
    tags = ["employees"],
    operation_id = "deleteEmployee"
)]
#[delete("/employees")]
pub async fn delete_employee(
    state: web::Data<HttpState>,
    query: web::Query<EmployeeIdQuery>,
) -> ApiResult<HttpResponse> {
    let id = parse_required_id(query.id.as_deref())?;
    state.employee_commands.delete_employee(&id).await?;
    Ok(HttpResponse::Ok().json(Deleted {
        message: DELETED_MESSAGE.to_owned(),
    }))
}

#[cfg(test)]
#[path = "employees_tests.rs"]
mod tests;
