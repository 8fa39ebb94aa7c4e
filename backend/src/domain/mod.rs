//! Domain primitives, services and ports.
//!
//! Public surface:
//! - [`Employee`], [`EmployeeDetails`], [`EmployeeId`]: the sole entity and
//!   its validated editable fields.
//! - [`EmployeeRoster`]: id-keyed collection used by clients to reconcile
//!   server-confirmed records.
//! - [`EmployeeService`]: implementation of the driving ports.
//! - [`Error`], [`ErrorCode`]: transport-agnostic error payload.
//! - [`TraceId`]: request correlation identifier.

pub mod employee;
pub mod employee_service;
pub mod error;
pub mod ports;
pub mod roster;
pub mod trace_id;

pub use self::employee::{Employee, EmployeeDetails, EmployeeId, EmployeeValidationError};
pub use self::employee_service::EmployeeService;
pub use self::error::{Error, ErrorCode, ErrorValidationError, TRACE_ID_HEADER};
pub use self::roster::{EmployeeRoster, MergeOutcome};
pub use self::trace_id::TraceId;

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use actix_web::HttpResponse;
/// use personnel::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<HttpResponse> {
///     Err(Error::not_found("no such employee"))
/// }
/// ```
pub type ApiResult<T> = Result<T, Error>;
