//! API module
//!
//! HTTP API endpoints and middleware.

pub mod middleware;
pub mod routes;

use std::sync::Arc;

use axum::{middleware as axum_middleware, Router};
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::platform::IssuingPlatform;

pub use routes::create_router;

/// Shared, read-only state handed to every route
#[derive(Clone)]
pub struct AppState {
    pub platform: Arc<dyn IssuingPlatform>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(platform: Arc<dyn IssuingPlatform>, config: Arc<Config>) -> Self {
        Self { platform, config }
    }
}

/// Build the full application router
pub fn build_app(state: AppState) -> Router {
    // Layers run in reverse order of addition: context -> logging -> handler
    let api_routes = create_router()
        .layer(axum_middleware::from_fn(middleware::logging_middleware))
        .layer(axum_middleware::from_fn(middleware::context_middleware));

    Router::new()
        // Health check (no context)
        .route("/health", axum::routing::get(health_check))
        .nest("/api/v1", api_routes)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
