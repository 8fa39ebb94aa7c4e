//! OpenAPI schema definitions for domain types.
//!
//! Domain types stay free of utoipa derives; these mirrors describe their
//! wire shape for the generated document.

use utoipa::ToSchema;

/// Stable machine-readable error codes.
#[derive(ToSchema)]
#[schema(as = ErrorCode)]
pub enum ErrorCodeSchema {
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    #[schema(rename = "not_found")]
    NotFound,
    #[schema(rename = "service_unavailable")]
    ServiceUnavailable,
    #[schema(rename = "internal_error")]
    InternalError,
}

/// Error envelope returned for every failed request.
#[derive(ToSchema)]
#[schema(as = Error)]
#[expect(dead_code, reason = "Used only for OpenAPI schema generation via utoipa")]
pub struct ErrorSchema {
    #[schema(example = "invalid_request")]
    code: ErrorCodeSchema,
    #[schema(example = "age must be greater than zero")]
    message: String,
    /// Correlation identifier, echoed in the `trace-id` header.
    #[schema(rename = "traceId", example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    trace_id: Option<String>,
    /// For validation failures: `{"field", "code"[, "value"]}`.
    details: Option<serde_json::Value>,
}

/// A stored employee.
#[derive(ToSchema)]
#[schema(as = Employee)]
#[expect(dead_code, reason = "Used only for OpenAPI schema generation via utoipa")]
pub struct EmployeeSchema {
    #[schema(value_type = String, format = Uuid, example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    id: String,
    #[schema(example = "Иван")]
    name: String,
    #[schema(example = "ivan@x.com")]
    email: String,
    #[schema(minimum = 1, example = 25)]
    age: i32,
    #[schema(example = "IT")]
    department: String,
    /// Whole currency units.
    #[schema(minimum = 0, example = 50000)]
    salary: i64,
}

/// Create and update body. Any `id` member is ignored.
#[derive(ToSchema)]
#[schema(as = EmployeePayload)]
#[expect(dead_code, reason = "Used only for OpenAPI schema generation via utoipa")]
pub struct EmployeePayloadSchema {
    #[schema(example = "Иван")]
    name: String,
    #[schema(example = "ivan@x.com", pattern = r"^[^\s@]+@[^\s@]+\.[^\s@]+$")]
    email: String,
    #[schema(minimum = 1, example = 25)]
    age: i32,
    #[schema(example = "IT")]
    department: String,
    #[schema(minimum = 0, example = 50000)]
    salary: i64,
}

/// Body of a successful delete.
#[derive(ToSchema)]
#[schema(as = Deleted)]
#[expect(dead_code, reason = "Used only for OpenAPI schema generation via utoipa")]
pub struct DeletedSchema {
    #[schema(example = "employee deleted")]
    message: String,
}
