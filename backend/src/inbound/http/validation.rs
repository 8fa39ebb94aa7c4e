//! Boundary validation for employee requests.
//!
//! Raw JSON bodies and query parameters are checked here and turned into
//! domain values. Every failure becomes a `400 invalid_request` whose
//! `details` name the offending field and a machine-readable code.

use serde_json::{Map, Value, json};

use crate::domain::{EmployeeDetails, EmployeeId, EmployeeValidationError, Error};

/// Validation codes reported in `details.code`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorCode {
    NotAnObject,
    MissingField,
    InvalidType,
    NotWholeNumber,
    OutOfRange,
    InvalidUuid,
    InvalidJson,
}

impl ErrorCode {
    fn as_str(self) -> &'static str {
        match self {
            Self::NotAnObject => "not_an_object",
            Self::MissingField => "missing_field",
            Self::InvalidType => "invalid_type",
            Self::NotWholeNumber => "not_whole_number",
            Self::OutOfRange => "out_of_range",
            Self::InvalidUuid => "invalid_uuid",
            Self::InvalidJson => "invalid_json",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(&self) -> &'static str {
        self.0
    }
}

const BODY: FieldName = FieldName::new("body");
const NAME: FieldName = FieldName::new("name");
const EMAIL: FieldName = FieldName::new("email");
const AGE: FieldName = FieldName::new("age");
const DEPARTMENT: FieldName = FieldName::new("department");
const SALARY: FieldName = FieldName::new("salary");
pub(crate) const ID: FieldName = FieldName::new("id");

fn field_error(field: FieldName, code: &str, message: impl Into<String>) -> Error {
    Error::invalid_request(message).with_details(json!({
        "field": field.as_str(),
        "code": code,
    }))
}

fn rule_error(field: FieldName, code: ErrorCode, message: impl Into<String>) -> Error {
    field_error(field, code.as_str(), message)
}

pub(crate) fn missing_field_error(field: FieldName) -> Error {
    let name = field.as_str();
    rule_error(field, ErrorCode::MissingField, format!("missing required field: {name}"))
}

pub(crate) fn invalid_uuid_error(field: FieldName, value: &str) -> Error {
    let name = field.as_str();
    Error::invalid_request(format!("{name} must be a valid UUID")).with_details(json!({
        "field": name,
        "value": value,
        "code": ErrorCode::InvalidUuid.as_str(),
    }))
}

/// Reject unreadable bodies (bad JSON, wrong content type, oversize).
pub(crate) fn invalid_json_error(reason: impl std::fmt::Display) -> Error {
    rule_error(
        BODY,
        ErrorCode::InvalidJson,
        format!("request body must be a JSON object: {reason}"),
    )
}

impl From<EmployeeValidationError> for Error {
    fn from(err: EmployeeValidationError) -> Self {
        let field = err.field();
        Error::invalid_request(err.to_string()).with_details(json!({
            "field": field,
            "code": err.code(),
        }))
    }
}

/// Parse an optional `?id=` parameter. Empty values count as absent.
pub(crate) fn parse_optional_id(raw: Option<&str>) -> Result<Option<EmployeeId>, Error> {
    match raw {
        None | Some("") => Ok(None),
        Some(value) => value
            .parse()
            .map(Some)
            .map_err(|_| invalid_uuid_error(ID, value)),
    }
}

/// Parse a mandatory `?id=` parameter.
pub(crate) fn parse_required_id(raw: Option<&str>) -> Result<EmployeeId, Error> {
    parse_optional_id(raw)?.ok_or_else(|| missing_field_error(ID))
}

fn required<'a>(object: &'a Map<String, Value>, field: FieldName) -> Result<&'a Value, Error> {
    match object.get(field.as_str()) {
        None | Some(Value::Null) => Err(missing_field_error(field)),
        Some(value) => Ok(value),
    }
}

fn string_field(object: &Map<String, Value>, field: FieldName) -> Result<String, Error> {
    let name = field.as_str();
    required(object, field)?
        .as_str()
        .map(str::to_owned)
        .ok_or_else(|| rule_error(field, ErrorCode::InvalidType, format!("{name} must be a string")))
}

/// Why a value failed the whole-number rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum WholeNumberError {
    NotWhole,
    OutOfRange,
}

impl WholeNumberError {
    fn code(self) -> ErrorCode {
        match self {
            Self::NotWhole => ErrorCode::NotWholeNumber,
            Self::OutOfRange => ErrorCode::OutOfRange,
        }
    }

    /// User-facing message for `field`.
    pub(crate) fn message(self, field: &str) -> String {
        match self {
            Self::NotWhole => format!("{field} must be a whole number"),
            Self::OutOfRange => format!("{field} is out of range"),
        }
    }
}

/// 2^63, exact in `f64`; integral floats in `[-2^63, 2^63)` fit `i64`.
const I64_BOUND: f64 = 9_223_372_036_854_775_808.0;

fn whole_from_f64(float: f64) -> Result<i64, WholeNumberError> {
    if !float.is_finite() || float.fract() != 0.0 {
        return Err(WholeNumberError::NotWhole);
    }
    if !(-I64_BOUND..I64_BOUND).contains(&float) {
        return Err(WholeNumberError::OutOfRange);
    }
    #[expect(
        clippy::cast_possible_truncation,
        reason = "float is integral and inside the i64 range"
    )]
    let whole = float as i64;
    Ok(whole)
}

/// Parse submitted text under the same rule as JSON numbers, so `25` and
/// `25.0` are both accepted.
pub(crate) fn parse_whole_number(raw: &str) -> Result<i64, WholeNumberError> {
    let raw = raw.trim();
    if let Ok(whole) = raw.parse::<i64>() {
        return Ok(whole);
    }
    raw.parse::<f64>()
        .map_err(|_| WholeNumberError::NotWhole)
        .and_then(whole_from_f64)
}

pub(crate) fn narrow_to_i32(whole: i64) -> Result<i32, WholeNumberError> {
    i32::try_from(whole).map_err(|_| WholeNumberError::OutOfRange)
}

fn json_whole_number(number: &serde_json::Number) -> Result<i64, WholeNumberError> {
    if let Some(whole) = number.as_i64() {
        return Ok(whole);
    }
    if number.is_u64() {
        return Err(WholeNumberError::OutOfRange);
    }
    number
        .as_f64()
        .ok_or(WholeNumberError::NotWhole)
        .and_then(whole_from_f64)
}

fn whole_number(value: &Value, field: FieldName) -> Result<i64, Error> {
    let name = field.as_str();
    let Value::Number(number) = value else {
        return Err(rule_error(
            field,
            ErrorCode::InvalidType,
            format!("{name} must be a number"),
        ));
    };
    json_whole_number(number).map_err(|e| rule_error(field, e.code(), e.message(name)))
}

fn age_field(object: &Map<String, Value>) -> Result<i32, Error> {
    let whole = whole_number(required(object, AGE)?, AGE)?;
    narrow_to_i32(whole).map_err(|e| rule_error(AGE, e.code(), e.message(AGE.as_str())))
}

/// Validate a JSON body as the five editable employee fields.
///
/// Any `id` in the body is ignored.
pub(crate) fn parse_employee_payload(body: &Value) -> Result<EmployeeDetails, Error> {
    let Some(object) = body.as_object() else {
        return Err(rule_error(
            BODY,
            ErrorCode::NotAnObject,
            "request body must be a JSON object",
        ));
    };

    let name = string_field(object, NAME)?;
    let email = string_field(object, EMAIL)?;
    let age = age_field(object)?;
    let department = string_field(object, DEPARTMENT)?;
    let salary = whole_number(required(object, SALARY)?, SALARY)?;

    Ok(EmployeeDetails::new(name, email, age, department, salary)?)
}
