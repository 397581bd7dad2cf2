//! Router configuration for the HTTP API.
//!
//! This module sets up all routes, middleware (CORS, compression, tracing),
//! and creates the axum router ready for serving.

use axum::{routing::get, Router};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use super::state::AppState;

/// Create the main application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    // Permissive CORS: the API is read-only and unauthenticated.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_v1 = Router::new()
        .route("/precipitation", get(handlers::precipitation))
        .route("/prcp_by_date/{query_date}", get(handlers::prcp_by_date))
        .route("/stations", get(handlers::stations))
        .route(
            "/tobs_mostactivestation",
            get(handlers::tobs_most_active_station),
        )
        .route("/tobs_start_date/{start_date}", get(handlers::tobs_start_date))
        .route(
            "/tobs_date_range/{start_date}/{end_date}",
            get(handlers::tobs_date_range),
        );

    Router::new()
        .route("/", get(handlers::index))
        .route("/health", get(handlers::health_check))
        .nest("/api/v1.0", api_v1)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
