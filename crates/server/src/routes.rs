use std::any::Any;
use std::sync::Arc;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::{
    DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer,
};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use common::types::Health;
use service::customer::CustomerService;

use crate::errors::ApiError;
use crate::openapi::ApiDoc;

pub mod customers;

#[derive(Clone)]
pub struct ServerState {
    pub service: Arc<CustomerService>,
}

#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses((status = 200, description = "Service is alive"))
)]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

// Last line of defense: a panicking handler still answers with the uniform
// error body instead of a dropped connection.
fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "unhandled internal fault".to_string()
    };
    ApiError::new(StatusCode::INTERNAL_SERVER_ERROR, detail).into_response()
}

/// Assemble the application router: liveness probe, customer CRUD and the
/// interactive API docs, wrapped in CORS and request tracing.
pub fn build_router(cors: CorsLayer, state: ServerState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route(
            "/api/customer-service/customers",
            get(customers::list).post(customers::create),
        )
        .route(
            "/api/customer-service/customers/:id",
            get(customers::get_by_id)
                .put(customers::update)
                .delete(customers::delete),
        )
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_request(DefaultOnRequest::new().level(Level::DEBUG))
                .on_response(DefaultOnResponse::new().level(Level::INFO))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
        .layer(CatchPanicLayer::custom(handle_panic))
}
