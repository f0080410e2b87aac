//! Error types for the data layer.
//!
//! All errors are propagated via [`DbError`], which wraps the underlying
//! [`sqlx`] errors and carries the one domain-level failure the store can
//! produce on its own: a lookup for an identifier with no matching row.

use histolinea_types::EventId;

/// Errors that can occur in the data layer.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    /// A `PostgreSQL` operation failed.
    #[error("PostgreSQL error: {0}")]
    Postgres(#[from] sqlx::Error),

    /// A `PostgreSQL` migration failed.
    #[error("PostgreSQL migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// No record exists for the given identifier.
    ///
    /// Distinct from an empty list result: a list with no rows is a
    /// successful answer, a get/update/delete against a missing id is
    /// this error.
    #[error("no record with id {0}")]
    NotFound(EventId),

    /// A configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}
