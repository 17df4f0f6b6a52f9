//! Funcionários client - HTTP client and screen view models
//!
//! [`HttpClient`] speaks to the directory service; the [`screens`] module
//! holds the state and actions of the Login, List and Form screens with no
//! rendering attached.

pub mod api;
pub mod config;
pub mod error;
pub mod http;
pub mod screens;

pub use api::DirectoryApi;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::HttpClient;

// Re-export shared types for convenience
pub use shared::models::{Employee, EmployeeInput, UserProfile};
