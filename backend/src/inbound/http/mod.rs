//! HTTP inbound adapter: JSON endpoints, HTML pages and health probes.

pub mod employees;
pub mod error;
pub mod health;
pub mod pages;
pub mod schemas;
pub mod state;
pub mod validation;

pub use error::ApiResult;
