// Shared harness: the full router over a private in-memory database

#![allow(dead_code)]

use axum::Router;
use axum::body::{Body, to_bytes};
use funcionarios_server::db::DbService;
use funcionarios_server::{AppState, api};
use http::{Request, StatusCode, header};
use serde_json::{Value, json};
use tower::ServiceExt;

pub struct TestApp {
    pub router: Router,
    pub state: AppState,
}

impl TestApp {
    pub async fn new() -> Self {
        let db = DbService::in_memory().await.unwrap();
        let state = AppState::from_pool(db.pool);
        Self {
            router: api::router(state.clone()),
            state,
        }
    }

    /// Extra routes behind the production middleware stack, sharing this database
    pub fn with_routes(&self, routes: Router<AppState>) -> Self {
        Self {
            router: api::layered(routes).with_state(self.state.clone()),
            state: self.state.clone(),
        }
    }

    pub async fn send(&self, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };
        self.call(request).await
    }

    pub async fn call(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    pub async fn employee_count(&self) -> i64 {
        sqlx::query_scalar("SELECT COUNT(*) FROM funcionarios")
            .fetch_one(&self.state.pool)
            .await
            .unwrap()
    }

    /// Create through the API and return the new id
    pub async fn create(&self, body: Value) -> i64 {
        let (status, json) = self.send("POST", "/api/funcionarios/novo", Some(body)).await;
        assert_eq!(status, StatusCode::CREATED, "create failed: {json}");
        json["funcionario"]["id"].as_i64().unwrap()
    }
}

pub fn employee(nome: &str, email: &str) -> Value {
    json!({
        "nome": nome,
        "email": email,
        "cargo": "Dev",
        "sexo": "Feminino",
        "nascimento": "1990-01-01",
        "telefone": "119999",
        "salario": 5000
    })
}
