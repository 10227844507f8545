// src/service/routes.rs
//! Route definitions.

use super::handlers::{self, AppState};
use axum::{routing::get, Router};
use std::path::Path;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

/// Builds the application router.
///
/// When a static directory is configured, it is served as the router
/// fallback so the frontend and the API share one listener.
pub fn create_router(state: Arc<AppState>, static_dir: Option<&Path>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let mut router = Router::new()
        .route(
            "/v1/translate/:pageuuid/:language",
            get(handlers::translate_page),
        )
        .with_state(state);

    if let Some(dir) = static_dir {
        router = router.fallback_service(ServeDir::new(dir));
    }

    router.layer(cors)
}
