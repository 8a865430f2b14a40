//! HTTP API route definitions.

use axum::routing::{get, post};
use axum::{Json, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

use super::handlers::{
    health, metrics_handler, phase_change_diagram, repair_bay, status, teapot, AppState,
};
use super::openapi::ApiDoc;

/// Create the API router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Ship endpoints
        .route("/status", get(status))
        .route("/repair-bay", get(repair_bay))
        .route("/teapot", post(teapot))
        .route("/phase-change-diagram", get(phase_change_diagram))
        // Service endpoints
        .route("/health", get(health))
        .route("/metrics", get(metrics_handler))
        .route("/openapi.json", get(|| async { Json(ApiDoc::openapi()) }))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer())
        .with_state(state)
}

/// Open CORS policy: any origin, method and header.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}
