pub mod config;
pub mod db;
pub mod errors;
pub mod models;
pub mod routes;
pub mod services;
pub mod store;
pub mod swagger;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

#[cfg(test)]
mod tests;

use axum::{http::StatusCode, routing::get, Json, Router};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use config::Config;
use errors::{AssociationError, OperationFailure};
use services::AssociationService;

#[derive(Clone)]
pub struct AppState {
    pub associations: AssociationService,
    pub config: Config,
}

impl AppState {
    /// Attach the endpoint's client-facing message to a service error,
    /// honouring the configured error response mode.
    pub fn fail(&self, operation: &'static str, cause: AssociationError) -> OperationFailure {
        OperationFailure::new(operation, cause, self.config.error_response_mode)
    }
}

/// Health check endpoint for monitoring
pub async fn health_check() -> Result<Json<serde_json::Value>, StatusCode> {
    Ok(Json(serde_json::json!({"status": "ok"})))
}

/// Full application router: record endpoints, health check and API docs.
pub fn create_app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .merge(routes::mentors::router())
        .merge(routes::students::router())
        .merge(swagger::create_swagger_router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
