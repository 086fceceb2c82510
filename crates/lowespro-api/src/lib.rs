//! # lowespro-api
//!
//! Axum HTTP server exposing the LowesPro storage layer as a JSON API
//! under `/api`. Resource routes follow one shape: collection GET/POST,
//! item GET/PATCH/PUT/DELETE. PATCH merges supplied fields; PUT replaces
//! the full record while preserving identity fields.

use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use lowespro_core::AppConfig;
use lowespro_storage::Store;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

pub mod error;
pub mod handlers;

pub use error::ApiError;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<Store>,
}

pub fn build_router(store: Arc<Store>) -> Router {
    let state = AppState { store };

    // The desktop client is served from a different origin, so CORS is
    // wide open.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(
            "/api/vendors",
            get(handlers::vendors::list).post(handlers::vendors::create),
        )
        .route(
            "/api/vendors/:id",
            get(handlers::vendors::get)
                .patch(handlers::vendors::patch)
                .put(handlers::vendors::replace)
                .delete(handlers::vendors::remove),
        )
        .route(
            "/api/representatives",
            get(handlers::representatives::list).post(handlers::representatives::create),
        )
        .route(
            "/api/representatives/:id",
            get(handlers::representatives::get)
                .patch(handlers::representatives::patch)
                .put(handlers::representatives::replace)
                .delete(handlers::representatives::remove),
        )
        .route(
            "/api/categories",
            get(handlers::categories::list).post(handlers::categories::create),
        )
        .route(
            "/api/categories/:id",
            get(handlers::categories::get)
                .patch(handlers::categories::patch)
                .put(handlers::categories::replace)
                .delete(handlers::categories::remove),
        )
        .route(
            "/api/services",
            get(handlers::services::list).post(handlers::services::create),
        )
        .route(
            "/api/services/:id",
            get(handlers::services::get)
                .patch(handlers::services::patch)
                .put(handlers::services::replace)
                .delete(handlers::services::remove),
        )
        .route(
            "/api/brands",
            get(handlers::brands::list).post(handlers::brands::create),
        )
        .route(
            "/api/brands/:id",
            get(handlers::brands::get)
                .patch(handlers::brands::patch)
                .put(handlers::brands::replace)
                .delete(handlers::brands::remove),
        )
        .route(
            "/api/pro-customers",
            get(handlers::pro_customers::list).post(handlers::pro_customers::create),
        )
        .route(
            "/api/pro-customers/:id",
            get(handlers::pro_customers::get)
                .patch(handlers::pro_customers::patch)
                .put(handlers::pro_customers::replace)
                .delete(handlers::pro_customers::remove),
        )
        .route(
            "/api/trades",
            get(handlers::trades::list).post(handlers::trades::create),
        )
        .route(
            "/api/trades/:id",
            get(handlers::trades::get).delete(handlers::trades::remove),
        )
        .route("/api/health", get(handlers::system::health))
        .route("/api/debug", get(handlers::system::debug))
        .layer(cors)
        .with_state(state)
}

/// Bind and serve until the process is stopped.
pub async fn start_server(config: &AppConfig, store: Arc<Store>) -> std::io::Result<()> {
    let addr = format!("{}:{}", config.effective_host(), config.effective_port());
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(%addr, "listening");
    axum::serve(listener, build_router(store)).await
}
