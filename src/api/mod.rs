//! Fixture server routes
//!
//! Stands in for backend endpoints that do not exist yet by serving static
//! collections.

pub mod fixtures;
pub mod health;

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

/// Create the fixture router with all routes
pub fn router() -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let mock = Router::new()
        .route("/", get(fixtures::list_collections))
        .route("/:collection", get(fixtures::get_collection));

    Router::new()
        .route("/health", get(health::health_check))
        .nest("/api/mock", mock)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
