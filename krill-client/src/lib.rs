//! Krill Client - HTTP client for the roster backend
//!
//! Provides network-based HTTP calls against the employee REST API.

pub mod config;
pub mod employees;
pub mod error;
pub mod http;

pub use config::ClientConfig;
pub use employees::EmployeeApi;
pub use error::{ClientError, ClientResult};
pub use http::HttpClient;

// Re-export shared types for convenience
pub use shared::models::{Employee, EmployeeCreate, EmployeeUpdate};
