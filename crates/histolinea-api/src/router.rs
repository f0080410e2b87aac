//! Axum router construction for the record service API.
//!
//! Assembles all routes into a single [`Router`] with CORS middleware
//! enabled for cross-origin access from the web client.

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router for the record service.
///
/// The router includes:
/// - `GET /` -- minimal HTML status page
/// - `GET|POST /api/events` -- list / create records
/// - `GET|PUT|DELETE /api/events/{id}` -- single-record operations
/// - `GET /api/eras` -- era metadata
///
/// CORS is configured to allow any origin for development. In
/// production this should be restricted to the client's origin.
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Status page
        .route("/", get(handlers::index))
        // REST API
        .route(
            "/api/events",
            get(handlers::list_events).post(handlers::create_event),
        )
        .route(
            "/api/events/{id}",
            get(handlers::get_event)
                .put(handlers::update_event)
                .delete(handlers::delete_event),
        )
        .route("/api/eras", get(handlers::list_eras))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
