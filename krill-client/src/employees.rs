//! Employee resource API
//!
//! Typed wrappers over the `/employees` collection endpoint. Each call is a
//! single stateless round trip; failures propagate as [`crate::ClientError`]
//! untouched.

use shared::models::{Employee, EmployeeCreate, EmployeeUpdate};
use tracing::debug;
use urlencoding::encode;

use crate::{ClientConfig, ClientResult, HttpClient};

const EMPLOYEES_PATH: &str = "/employees";

/// Typed client for the employee collection
#[derive(Debug, Clone)]
pub struct EmployeeApi {
    http: HttpClient,
}

impl EmployeeApi {
    /// Create an API client from configuration
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            http: HttpClient::new(config),
        }
    }

    /// Wrap an existing HTTP client
    pub fn with_http(http: HttpClient) -> Self {
        Self { http }
    }

    /// Fetch the full employee collection, in server order
    pub async fn list(&self) -> ClientResult<Vec<Employee>> {
        debug!("listing employees");
        self.http.get(EMPLOYEES_PATH).await
    }

    /// Fetch a single employee by id
    pub async fn get(&self, id: &str) -> ClientResult<Employee> {
        debug!(%id, "fetching employee");
        self.http
            .get(&format!("{}/{}", EMPLOYEES_PATH, encode(id)))
            .await
    }

    /// Create a new employee, returning the persisted record with its
    /// server-assigned id
    pub async fn create(&self, data: &EmployeeCreate) -> ClientResult<Employee> {
        debug!(name = %data.name, "creating employee");
        self.http.post(EMPLOYEES_PATH, data).await
    }

    /// Update an existing employee
    pub async fn update(&self, id: &str, data: &EmployeeUpdate) -> ClientResult<Employee> {
        debug!(%id, "updating employee");
        self.http
            .put(&format!("{}/{}", EMPLOYEES_PATH, encode(id)), data)
            .await
    }

    /// Delete an employee by id
    pub async fn delete(&self, id: &str) -> ClientResult<()> {
        debug!(%id, "deleting employee");
        self.http
            .delete(&format!("{}/{}", EMPLOYEES_PATH, encode(id)))
            .await
    }
}
