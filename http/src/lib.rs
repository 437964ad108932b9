use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;

use pixfit_configuration::ServerConfig;

pub mod error;
pub mod handlers;
pub mod state;

pub use error::{error_mapper, HttpError};
pub use handlers::*;
pub use state::AppState;

pub fn create_app_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(transform_image))
        .route("/health", get(health))
        .with_state(state)
}

pub async fn create_app_routes(state: AppState, config: ServerConfig) -> anyhow::Result<()> {
    let router = create_app_router(state);
    let listener = TcpListener::bind((config.host.as_str(), config.port)).await?;
    tracing::info!(host = %config.host, port = config.port, "HTTP server listening");
    axum::serve(listener, router).await?;
    Ok(())
}
