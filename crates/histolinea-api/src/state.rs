//! Shared application state for the HTTP API server.
//!
//! [`AppState`] holds the `PostgreSQL` pool the handlers read and write
//! through. Wrapped in [`Arc`](std::sync::Arc) and injected via Axum's
//! `State` extractor.

use histolinea_db::PostgresPool;

/// Shared state for the Axum application.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Connection pool to the record store.
    pub db: PostgresPool,
}

impl AppState {
    /// Create application state over a connected (or lazy) pool.
    pub const fn new(db: PostgresPool) -> Self {
        Self { db }
    }
}
