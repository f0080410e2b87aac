//! Domain logic for the Histolinea record service.
//!
//! The record keeper's one genuinely interesting component lives here:
//! the era classifier and date-range overlap predicate that drive
//! grouping and filtering over already-fetched records. The crate also
//! carries the boundary validation applied to drafts before they reach
//! the store, and configuration loading for the server binary.
//!
//! # Modules
//!
//! - [`era`] -- Year/date -> era classification and range overlap
//! - [`validate`] -- Draft validation (presence, widths, URL shape, range)
//! - [`config`] -- YAML configuration with environment overrides

pub mod config;
pub mod era;
pub mod validate;

// Re-export primary items for convenience.
pub use config::{ConfigError, DatabaseConfig, HttpConfig, LoggingConfig, ServiceConfig};
pub use era::{classify_date, classify_year, overlaps, year_bounds};
pub use validate::{ValidationError, validate_draft};
