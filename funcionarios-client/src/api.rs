//! Directory operations used by the screens

use async_trait::async_trait;
use shared::models::{Employee, EmployeeInput, UserProfile};

use crate::ClientResult;

/// The six directory calls, abstracted so screens can run against a fake
#[async_trait]
pub trait DirectoryApi: Send + Sync {
    /// Check credentials; `Ok` only for an accepted login
    async fn login(&self, email: &str, password: &str) -> ClientResult<UserProfile>;

    async fn list_employees(&self) -> ClientResult<Vec<Employee>>;

    async fn get_employee(&self, id: i64) -> ClientResult<Employee>;

    async fn create_employee(&self, input: &EmployeeInput) -> ClientResult<Employee>;

    async fn update_employee(&self, id: i64, input: &EmployeeInput) -> ClientResult<Employee>;

    /// Returns the server's confirmation message
    async fn delete_employee(&self, id: i64) -> ClientResult<String>;
}
