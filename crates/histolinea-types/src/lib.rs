//! Shared type definitions for the Histolinea record service.
//!
//! This crate is the single source of truth for the types that cross the
//! service's boundaries. Types defined here flow downstream to
//! `TypeScript` via `ts-rs` for the web client.
//!
//! # Modules
//!
//! - [`ids`] -- Type-safe UUID wrapper for the event record identifier
//! - [`event`] -- The stored record and its insert/update payload
//! - [`era`] -- Derived era labels and their presentation metadata

pub mod era;
pub mod event;
pub mod ids;

// Re-export all public types at crate root for convenience.
pub use era::Era;
pub use event::{
    DESCRIPTION_MAX_LEN, EventDraft, HistoricalEvent, TITLE_MAX_LEN, URL_MAX_LEN,
};
pub use ids::EventId;

#[cfg(test)]
mod tests {
    //! Binding-generation test for the `TypeScript` exports.

    #[test]
    fn export_bindings() {
        // ts-rs generates TypeScript bindings when types with
        // #[ts(export)] are used. Importing them here triggers generation.
        // The actual files are written to the `bindings/` directory
        // relative to the crate root.
        use ts_rs::TS;

        let _ = crate::ids::EventId::export_all();
        let _ = crate::era::Era::export_all();
        let _ = crate::event::HistoricalEvent::export_all();
        let _ = crate::event::EventDraft::export_all();
    }
}
