//! HTTP API server for the Histolinea record service.
//!
//! This crate provides an Axum HTTP server that exposes:
//!
//! - **REST endpoints** for the record CRUD operations (list with
//!   era/date-range filters, get, create, update, delete)
//! - **Era metadata endpoint** (`GET /api/eras`) serving the four eras'
//!   keys, labels, accents, and year bounds
//! - **Minimal HTML index** (`GET /`) listing the endpoints
//!
//! # Architecture
//!
//! Handlers read and write through the `PostgreSQL` pool held in
//! [`AppState`]. Era classification and range filtering run over the
//! fetched rows in the handler -- derived presentation metadata never
//! reaches SQL or storage.

pub mod error;
pub mod handlers;
pub mod router;
pub mod server;
pub mod state;

// Re-export primary types for convenience.
pub use router::build_router;
pub use server::{ServerConfig, ServerError, start_server};
pub use state::AppState;
