//! REST API routes.

use axum::{middleware, routing::get, routing::post, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::api::{docs, estates, request_id};
use crate::state::AppState;

/// Create the API router.
pub fn create_router() -> Router<Arc<AppState>> {
    let estate_routes = Router::new()
        .route("/estate", post(estates::create_estate))
        .route("/estate/:id/tree", post(estates::create_tree))
        .route("/estate/:id/stats", get(estates::get_stats))
        .route("/estate/:id/drone-plan", get(estates::get_drone_plan));

    let doc_routes = Router::new()
        .route("/swagger.json", get(docs::openapi_json))
        .route("/swagger", get(docs::swagger_ui));

    estate_routes
        .merge(doc_routes)
        .route("/health", get(|| async { "OK" }))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(request_id::ensure_request_id))
}
