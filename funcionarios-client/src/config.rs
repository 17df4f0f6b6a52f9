//! Client configuration

use std::time::Duration;

use crate::{ClientResult, HttpClient};

/// Where the directory service lives and how long to wait for it
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Server base URL without the `/api` suffix (e.g. "http://10.0.2.2:3000")
    pub base_url: String,

    /// Request timeout
    pub timeout: Duration,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: Duration::from_secs(30),
        }
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Create an HTTP client from this configuration
    pub fn build_http_client(&self) -> ClientResult<HttpClient> {
        HttpClient::new(self)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new("http://localhost:3000")
    }
}
