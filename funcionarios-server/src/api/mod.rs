//! API routes

pub mod auth;
pub mod employee;
pub mod health;

use axum::extract::DefaultBodyLimit;
use axum::extract::rejection::JsonRejection;
use axum::response::{IntoResponse, Response};
use axum::routing::{delete, get, post, put};
use axum::{Json, Router, middleware as axum_middleware};
use http::{HeaderName, HeaderValue};
use shared::error::AppError;
use std::any::Any;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{
    MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer,
};
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::middleware::{REQUEST_ID_HEADER, logging_middleware};
use crate::state::AppState;

type ApiResult<T> = Result<Json<T>, AppError>;

/// Unwrap a JSON body, turning extractor rejections into a JSON 400
fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, AppError> {
    payload
        .map(|Json(body)| body)
        .map_err(|rejection| AppError::invalid_request(rejection.body_text()))
}

/// Custom request ID generator
#[derive(Clone)]
struct XRequestId;

impl MakeRequestId for XRequestId {
    fn make_request_id<B>(&mut self, _request: &http::Request<B>) -> Option<RequestId> {
        HeaderValue::from_str(&Uuid::new_v4().to_string())
            .ok()
            .map(RequestId::new)
    }
}

/// A panicking handler answers 500 `{error}` instead of dropping the connection
fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "handler panicked".to_string()
    };
    AppError::internal(detail).into_response()
}

/// `/api` routes without middleware or state
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/login", post(auth::login))
        .route("/funcionarios", get(employee::list_employees))
        .route("/funcionarios/{id}", get(employee::get_employee))
        .route("/funcionarios/novo", post(employee::create_employee))
        .route("/funcionarios/editar/{id}", put(employee::update_employee))
        .route("/funcionarios/excluir/{id}", delete(employee::delete_employee))
}

/// Build the fully configured application
pub fn router(state: AppState) -> Router {
    let routes = Router::new()
        .nest("/api", api_routes())
        .route("/health", get(health::health));
    layered(routes).with_state(state)
}

/// Wrap `routes` in the middleware stack every endpoint runs behind
pub fn layered(routes: Router<AppState>) -> Router<AppState> {
    let request_id = HeaderName::from_static(REQUEST_ID_HEADER);

    routes
        .layer(DefaultBodyLimit::max(1024 * 1024)) // 1MB
        .layer(CatchPanicLayer::custom(panic_response))
        // Any origin may call the API
        .layer(CorsLayer::permissive())
        .layer(axum_middleware::from_fn(logging_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::new(request_id.clone()))
        // Outermost: every inner layer sees the id
        .layer(SetRequestIdLayer::new(request_id, XRequestId))
}
