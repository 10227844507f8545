// src/service/mod.rs
//! The HTTP surface: one translate endpoint plus optional static
//! frontend serving, behind permissive CORS.

pub mod handlers;
pub mod routes;

pub use handlers::AppState;
pub use routes::create_router;

use crate::config::ServiceSettings;
use crate::error::AppError;
use std::sync::Arc;

/// Binds the listener and serves the router until shutdown.
pub async fn serve(settings: &ServiceSettings, state: Arc<AppState>) -> Result<(), AppError> {
    let router = create_router(state, settings.static_dir.as_deref());

    let addr = format!("{}:{}", settings.host, settings.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    log::info!("listening on http://{}", addr);

    axum::serve(listener, router).await?;
    Ok(())
}
