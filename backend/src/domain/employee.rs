//! Employee data model.

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Rule violations reported by [`EmployeeDetails::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EmployeeValidationError {
    #[error("name must not be empty")]
    EmptyName,
    #[error("email must look like name@domain.tld")]
    InvalidEmail,
    #[error("age must be greater than zero")]
    NonPositiveAge,
    #[error("department must not be empty")]
    EmptyDepartment,
    #[error("salary must not be negative")]
    NegativeSalary,
}

impl EmployeeValidationError {
    /// Name of the offending field as it appears on the wire.
    pub fn field(&self) -> &'static str {
        match self {
            Self::EmptyName => "name",
            Self::InvalidEmail => "email",
            Self::NonPositiveAge => "age",
            Self::EmptyDepartment => "department",
            Self::NegativeSalary => "salary",
        }
    }

    /// Machine-readable rule code.
    pub fn code(&self) -> &'static str {
        match self {
            Self::EmptyName | Self::EmptyDepartment => "empty_value",
            Self::InvalidEmail => "invalid_email",
            Self::NonPositiveAge => "not_positive",
            Self::NegativeSalary => "negative",
        }
    }
}

/// Store-assigned employee identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmployeeId(Uuid);

impl EmployeeId {
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Generate a new random identifier.
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for EmployeeId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

impl From<Uuid> for EmployeeId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$")
            .unwrap_or_else(|error| panic!("email regex failed to compile: {error}"))
    })
}

/// The five editable fields of an employee.
///
/// ## Invariants
/// - `name` and `department` contain non-whitespace characters.
/// - `email` has the shape `local@domain.tld` with no whitespace.
/// - `age` is greater than zero.
/// - `salary` is zero or more.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeDetails {
    name: String,
    email: String,
    age: i32,
    department: String,
    salary: i64,
}

impl EmployeeDetails {
    /// Validate and construct a set of employee details.
    ///
    /// # Examples
    /// ```
    /// use personnel::domain::{EmployeeDetails, EmployeeValidationError};
    ///
    /// let ok = EmployeeDetails::new("Иван", "ivan@x.com", 25, "IT", 50_000);
    /// assert!(ok.is_ok());
    ///
    /// let err = EmployeeDetails::new("Иван", "ivan@x.com", 0, "IT", 50_000);
    /// assert_eq!(err, Err(EmployeeValidationError::NonPositiveAge));
    /// ```
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        age: i32,
        department: impl Into<String>,
        salary: i64,
    ) -> Result<Self, EmployeeValidationError> {
        let name = name.into();
        let email = email.into();
        let department = department.into();

        if name.trim().is_empty() {
            return Err(EmployeeValidationError::EmptyName);
        }
        if !email_regex().is_match(&email) {
            return Err(EmployeeValidationError::InvalidEmail);
        }
        if age <= 0 {
            return Err(EmployeeValidationError::NonPositiveAge);
        }
        if department.trim().is_empty() {
            return Err(EmployeeValidationError::EmptyDepartment);
        }
        if salary < 0 {
            return Err(EmployeeValidationError::NegativeSalary);
        }

        Ok(Self {
            name,
            email,
            age,
            department,
            salary,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn age(&self) -> i32 {
        self.age
    }

    pub fn department(&self) -> &str {
        &self.department
    }

    /// Salary in whole currency units.
    pub fn salary(&self) -> i64 {
        self.salary
    }
}

/// A persisted employee record.
///
/// Serialises as the flat camelCase object
/// `{"id","name","email","age","department","salary"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "EmployeeDto", into = "EmployeeDto")]
pub struct Employee {
    id: EmployeeId,
    details: EmployeeDetails,
}

impl Employee {
    pub fn new(id: EmployeeId, details: EmployeeDetails) -> Self {
        Self { id, details }
    }

    pub fn id(&self) -> EmployeeId {
        self.id
    }

    pub fn details(&self) -> &EmployeeDetails {
        &self.details
    }

    /// Split into identifier and details.
    pub fn into_parts(self) -> (EmployeeId, EmployeeDetails) {
        (self.id, self.details)
    }

    pub fn name(&self) -> &str {
        self.details.name()
    }

    pub fn email(&self) -> &str {
        self.details.email()
    }

    pub fn age(&self) -> i32 {
        self.details.age()
    }

    pub fn department(&self) -> &str {
        self.details.department()
    }

    pub fn salary(&self) -> i64 {
        self.details.salary()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct EmployeeDto {
    id: EmployeeId,
    name: String,
    email: String,
    age: i32,
    department: String,
    salary: i64,
}

impl From<Employee> for EmployeeDto {
    fn from(value: Employee) -> Self {
        let Employee { id, details } = value;
        let EmployeeDetails {
            name,
            email,
            age,
            department,
            salary,
        } = details;
        Self {
            id,
            name,
            email,
            age,
            department,
            salary,
        }
    }
}

impl TryFrom<EmployeeDto> for Employee {
    type Error = EmployeeValidationError;

    fn try_from(value: EmployeeDto) -> Result<Self, Self::Error> {
        let details = EmployeeDetails::new(
            value.name,
            value.email,
            value.age,
            value.department,
            value.salary,
        )?;
        Ok(Self::new(value.id, details))
    }
}
