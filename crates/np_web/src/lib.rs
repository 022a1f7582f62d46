use axum::{
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod error;
pub mod handlers;
pub mod logging;
pub mod state;

pub use state::AppState;

pub fn create_app(state: AppState) -> Router {
    let cors = CorsLayer::permissive();

    Router::new()
        .route("/news", get(handlers::news))
        .route("/generate-post", post(handlers::generate_post))
        .route("/auth/linkedin", get(handlers::linkedin_auth))
        .route("/auth/linkedin/callback", get(handlers::linkedin_callback))
        .route("/linkedin/post", post(handlers::publish_post))
        .route("/health", get(handlers::health))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(Arc::new(state))
}

/// Binds on all interfaces at the configured port and serves until the
/// process is stopped.
pub async fn serve(state: AppState) -> anyhow::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], state.config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("🚀 Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, create_app(state)).await?;
    Ok(())
}

pub mod prelude {
    pub use np_core::Config;
    pub use np_inference::ModelKind;
    pub use crate::{serve, AppState};
}
