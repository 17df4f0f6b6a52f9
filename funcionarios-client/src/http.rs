//! HTTP client for the directory service

use async_trait::async_trait;
use reqwest::{Client, Method};
use serde::Serialize;
use serde::de::DeserializeOwned;
use shared::models::{Employee, EmployeeInput, LoginRequest, UserProfile};
use shared::response::{EmployeeEnvelope, ErrorBody, LoginResponse, MessageResponse};

use crate::{ClientConfig, ClientError, ClientResult, DirectoryApi};

/// HTTP client for making network requests to the directory service
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
}

impl HttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let client = Client::builder().timeout(config.timeout).build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn send<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> ClientResult<T> {
        let url = self.url(path);
        tracing::debug!(%method, %url, "API request");

        let mut request = self.client.request(method, &url);
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Handle the HTTP response
    ///
    /// Error bodies are read for their `message` (or `error`) field; a body
    /// that is not JSON leaves the message empty.
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let status = response.status();
        let bytes = response.bytes().await?;

        if !status.is_success() {
            let message = error_message(&bytes);
            tracing::debug!(status = status.as_u16(), message = ?message, "API error");
            return Err(ClientError::Api {
                status: status.as_u16(),
                message,
            });
        }

        serde_json::from_slice(&bytes).map_err(Into::into)
    }
}

/// `message` (or `error`) of an error body, if the body is JSON
fn error_message(bytes: &[u8]) -> Option<String> {
    serde_json::from_slice::<ErrorBody>(bytes)
        .ok()
        .and_then(|body| body.display_message().map(str::to_string))
}

#[async_trait]
impl DirectoryApi for HttpClient {
    async fn login(&self, email: &str, password: &str) -> ClientResult<UserProfile> {
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };

        let response: LoginResponse = self.send(Method::POST, "login", Some(&request)).await?;
        match response {
            LoginResponse {
                success: true,
                user: Some(user),
                ..
            } => Ok(user),
            LoginResponse { success: true, .. } => Err(ClientError::InvalidResponse(
                "Missing user in login response".to_string(),
            )),
            LoginResponse { message, .. } => Err(ClientError::Api {
                status: 200,
                message,
            }),
        }
    }

    async fn list_employees(&self) -> ClientResult<Vec<Employee>> {
        self.send::<_, ()>(Method::GET, "funcionarios", None).await
    }

    async fn get_employee(&self, id: i64) -> ClientResult<Employee> {
        self.send::<_, ()>(Method::GET, &format!("funcionarios/{id}"), None)
            .await
    }

    async fn create_employee(&self, input: &EmployeeInput) -> ClientResult<Employee> {
        let envelope: EmployeeEnvelope = self
            .send(Method::POST, "funcionarios/novo", Some(input))
            .await?;
        Ok(envelope.funcionario)
    }

    async fn update_employee(&self, id: i64, input: &EmployeeInput) -> ClientResult<Employee> {
        let envelope: EmployeeEnvelope = self
            .send(Method::PUT, &format!("funcionarios/editar/{id}"), Some(input))
            .await?;
        Ok(envelope.funcionario)
    }

    async fn delete_employee(&self, id: i64) -> ClientResult<String> {
        let response: MessageResponse = self
            .send::<_, ()>(Method::DELETE, &format!("funcionarios/excluir/{id}"), None)
            .await?;
        Ok(response.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_building() {
        let client = HttpClient::new(&ClientConfig::new("http://10.0.2.2:3000/")).unwrap();
        assert_eq!(client.base_url(), "http://10.0.2.2:3000");
        assert_eq!(client.url("funcionarios"), "http://10.0.2.2:3000/api/funcionarios");
        assert_eq!(
            client.url("/funcionarios/excluir/3"),
            "http://10.0.2.2:3000/api/funcionarios/excluir/3"
        );
    }

    #[test]
    fn test_error_message_extraction() {
        assert_eq!(
            error_message(br#"{"code":8002,"message":"Este email j\u00e1 est\u00e1 cadastrado"}"#).as_deref(),
            Some("Este email já está cadastrado")
        );
        // A code this build does not know must not hide the message
        assert_eq!(
            error_message(br#"{"code":7777,"message":"Novo erro"}"#).as_deref(),
            Some("Novo erro")
        );
        assert_eq!(
            error_message(br#"{"error":"pool timed out"}"#).as_deref(),
            Some("pool timed out")
        );
        assert_eq!(error_message(b"<html>502</html>"), None);
    }

    #[tokio::test]
    async fn test_unreachable_server_is_transport_error() {
        // Port 9 (discard) on localhost is closed in test environments
        let client = HttpClient::new(
            &ClientConfig::new("http://127.0.0.1:9").with_timeout(std::time::Duration::from_secs(2)),
        )
        .unwrap();

        let err = client.list_employees().await.unwrap_err();
        assert!(matches!(err, ClientError::Http(_)));
        assert_eq!(err.user_message(), crate::error::CONNECTION_FAILED);
    }
}
