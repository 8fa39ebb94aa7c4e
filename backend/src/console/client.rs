//! Reqwest-backed client for the employee resource.
//!
//! This client owns transport details only: URL building, JSON encoding and
//! decoding, and mapping server error envelopes into [`ClientError`].

use std::time::Duration;

use reqwest::{Client, Method, RequestBuilder, Response, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::domain::{Employee, EmployeeDetails, EmployeeId, Error};
use crate::inbound::http::employees::Deleted;

const EMPLOYEES_PATH: &str = "api/v1/employees";

/// Failures surfaced by [`EmployeesClient`].
#[derive(Debug, Error)]
pub enum ClientError {
    /// The base URL cannot address the employee resource.
    #[error("invalid base url: {message}")]
    InvalidUrl { message: String },
    /// The request never produced a response.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// The server answered with its error envelope.
    #[error("server rejected request ({status}): {error}")]
    Api { status: u16, error: Error },
    /// The server answered with something that is not the expected JSON.
    #[error("unexpected response ({status}): {message}")]
    Decode { status: u16, message: String },
}

impl ClientError {
    /// Server error envelope, when the failure came from one.
    pub fn api_error(&self) -> Option<&Error> {
        match self {
            Self::Api { error, .. } => Some(error),
            _ => None,
        }
    }
}

#[derive(Debug, Serialize)]
struct EmployeePayload<'a> {
    name: &'a str,
    email: &'a str,
    age: i32,
    department: &'a str,
    salary: i64,
}

impl<'a> From<&'a EmployeeDetails> for EmployeePayload<'a> {
    fn from(details: &'a EmployeeDetails) -> Self {
        Self {
            name: details.name(),
            email: details.email(),
            age: details.age(),
            department: details.department(),
            salary: details.salary(),
        }
    }
}

/// Typed client for `/api/v1/employees`.
#[derive(Debug, Clone)]
pub struct EmployeesClient {
    client: Client,
    endpoint: Url,
}

impl EmployeesClient {
    /// Build a client for the server rooted at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns an error when the URL cannot be joined with the resource path
    /// or the reqwest client cannot be constructed.
    pub fn new(base_url: &Url, timeout: Duration) -> Result<Self, ClientError> {
        let endpoint = base_url
            .join(EMPLOYEES_PATH)
            .map_err(|e| ClientError::InvalidUrl {
                message: e.to_string(),
            })?;
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    pub async fn list(&self) -> Result<Vec<Employee>, ClientError> {
        send_json(self.request(Method::GET, None)).await
    }

    pub async fn get(&self, id: EmployeeId) -> Result<Employee, ClientError> {
        send_json(self.request(Method::GET, Some(id))).await
    }

    pub async fn create(&self, details: &EmployeeDetails) -> Result<Employee, ClientError> {
        let request = self
            .request(Method::POST, None)
            .json(&EmployeePayload::from(details));
        send_json(request).await
    }

    pub async fn update(
        &self,
        id: EmployeeId,
        details: &EmployeeDetails,
    ) -> Result<Employee, ClientError> {
        let request = self
            .request(Method::PUT, Some(id))
            .json(&EmployeePayload::from(details));
        send_json(request).await
    }

    /// Delete `id`, returning the server's confirmation message.
    pub async fn delete(&self, id: EmployeeId) -> Result<String, ClientError> {
        let deleted: Deleted = send_json(self.request(Method::DELETE, Some(id))).await?;
        Ok(deleted.message)
    }

    fn request(&self, method: Method, id: Option<EmployeeId>) -> RequestBuilder {
        let request = self
            .client
            .request(method, self.endpoint.clone())
            .header(reqwest::header::ACCEPT, "application/json");
        match id {
            Some(id) => request.query(&[("id", id.to_string())]),
            None => request,
        }
    }
}

async fn send_json<T: DeserializeOwned>(request: RequestBuilder) -> Result<T, ClientError> {
    let response = request.send().await?;
    decode(response).await
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
    let status = response.status();
    let body = response.bytes().await?;
    if !status.is_success() {
        return Err(match serde_json::from_slice::<Error>(&body) {
            Ok(error) => ClientError::Api {
                status: status.as_u16(),
                error,
            },
            Err(_) => ClientError::Decode {
                status: status.as_u16(),
                message: String::from_utf8_lossy(&body).into_owned(),
            },
        });
    }
    serde_json::from_slice(&body).map_err(|e| ClientError::Decode {
        status: status.as_u16(),
        message: e.to_string(),
    })
}
