//! Route definitions and router construction.
//!
//! This module defines the HTTP routes and creates the main router.
//! Handlers delegate to the shared `AppCore` facade.

use axum::Router;
use axum::routing::{get, post};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::bootstrap::{AxumContext, CorsConfig};
use crate::handlers;
use crate::state::AppState;

/// Build CORS layer from configuration.
fn build_cors_layer(config: &CorsConfig) -> CorsLayer {
    match config {
        CorsConfig::AllowAll => CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
        CorsConfig::AllowOrigins(origins) => {
            use axum::http::HeaderValue;
            let allowed: Vec<HeaderValue> = origins.iter().filter_map(|o| o.parse().ok()).collect();
            CorsLayer::new()
                .allow_origin(allowed)
                .allow_methods(Any)
                .allow_headers(Any)
        }
    }
}

/// Catalog and purchase routes.
///
/// Returned WITHOUT `.with_state()` applied; the caller supplies the state.
pub(crate) fn api_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/models",
            get(handlers::models::list).post(handlers::models::create),
        )
        .route(
            "/models/{id}",
            get(handlers::models::get)
                .put(handlers::models::update)
                .delete(handlers::models::remove),
        )
        .route(
            "/models/{id}/purchase",
            post(handlers::purchases::purchase),
        )
        .route("/purchases", get(handlers::purchases::list))
}

/// Create the main Axum router.
///
/// # Path Parameter Syntax
/// Axum 0.8 uses brace syntax for path parameters: `{id}`
pub fn create_router(ctx: AxumContext, cors_config: &CorsConfig) -> Router {
    let state: AppState = Arc::new(ctx);
    let cors = build_cors_layer(cors_config);

    Router::new()
        .route("/", get(handlers::health::root))
        .route("/hello", get(handlers::health::hello))
        .merge(api_routes().with_state(state))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
