//! Historical event record and its input payload.
//!
//! [`HistoricalEvent`] is the persisted entity; [`EventDraft`] is the set
//! of caller-supplied fields accepted by insert and update. The wire
//! format is camelCase JSON (`startDate`, `imageUrl`, `createdAtUtc`) --
//! the contract the web client already speaks.
//!
//! Column width limits ([`TITLE_MAX_LEN`] and friends) live here next to
//! the types so the validation layer and the database schema agree on a
//! single set of numbers.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::ids::EventId;

/// Maximum length of a record title, in characters.
pub const TITLE_MAX_LEN: usize = 200;

/// Maximum length of a record description, in characters.
pub const DESCRIPTION_MAX_LEN: usize = 4000;

/// Maximum length of an image or source URL, in characters.
pub const URL_MAX_LEN: usize = 500;

// ---------------------------------------------------------------------------
// HistoricalEvent
// ---------------------------------------------------------------------------

/// A stored historical event record.
///
/// `id` and `created_at_utc` are assigned once at insert and never change;
/// every other field is replaceable via update. Dates are calendar dates
/// with no time-of-day component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct HistoricalEvent {
    /// Unique identifier, assigned at insert.
    pub id: EventId,
    /// Non-empty display title.
    pub title: String,
    /// Optional free-form description.
    pub description: Option<String>,
    /// First day of the event.
    pub start_date: NaiveDate,
    /// Last day of the event; `None` means a single-day event.
    pub end_date: Option<NaiveDate>,
    /// Optional absolute URL to an illustrative image.
    pub image_url: Option<String>,
    /// Optional absolute URL to a source or citation.
    pub source_url: Option<String>,
    /// When the record was created. Never mutated by update.
    pub created_at_utc: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// EventDraft
// ---------------------------------------------------------------------------

/// Caller-supplied fields for inserting or updating a record.
///
/// A draft carries everything except `id` and `created_at_utc`, which the
/// store assigns. Run [`EventDraft::normalized`] before validating or
/// persisting so that surrounding whitespace and empty-string optionals
/// do not leak into storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct EventDraft {
    /// Display title; must be non-empty after trimming.
    pub title: String,
    /// Optional free-form description.
    #[serde(default)]
    pub description: Option<String>,
    /// First day of the event.
    pub start_date: NaiveDate,
    /// Last day of the event, if it spans more than one day.
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    /// Optional absolute URL to an illustrative image.
    #[serde(default)]
    pub image_url: Option<String>,
    /// Optional absolute URL to a source or citation.
    #[serde(default)]
    pub source_url: Option<String>,
}

impl EventDraft {
    /// Return a copy with the title trimmed and empty-string optionals
    /// collapsed to `None`.
    ///
    /// Web form submissions routinely send `""` for untouched optional
    /// fields; storing those as `NULL` keeps "absent" representable as a
    /// single value.
    #[must_use]
    pub fn normalized(&self) -> Self {
        Self {
            title: self.title.trim().to_owned(),
            description: normalize_opt(self.description.as_deref()),
            start_date: self.start_date,
            end_date: self.end_date,
            image_url: normalize_opt(self.image_url.as_deref()),
            source_url: normalize_opt(self.source_url.as_deref()),
        }
    }
}

/// Collapse an optional string to `None` when it is empty after trimming.
fn normalize_opt(value: Option<&str>) -> Option<String> {
    match value.map(str::trim) {
        None | Some("") => None,
        Some(s) => Some(s.to_owned()),
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn event_serializes_camel_case() {
        let event = HistoricalEvent {
            id: EventId::new(),
            title: String::from("Fall of Constantinople"),
            description: None,
            start_date: date(1453, 5, 29),
            end_date: None,
            image_url: None,
            source_url: Some(String::from("https://example.org/fall")),
            created_at_utc: Utc::now(),
        };

        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["startDate"], "1453-05-29");
        assert_eq!(json["sourceUrl"], "https://example.org/fall");
        assert!(json["createdAtUtc"].is_string());
        assert!(json.get("start_date").is_none());
    }

    #[test]
    fn event_roundtrip_serde() {
        let event = HistoricalEvent {
            id: EventId::new(),
            title: String::from("Coronation of Charlemagne"),
            description: Some(String::from("Crowned emperor in Rome.")),
            start_date: date(800, 12, 25),
            end_date: None,
            image_url: None,
            source_url: None,
            created_at_utc: Utc::now(),
        };

        let json = serde_json::to_string(&event).unwrap();
        let restored: HistoricalEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, event);
    }

    #[test]
    fn draft_optional_fields_default_to_none() {
        let draft: EventDraft = serde_json::from_str(
            r#"{"title": "Battle of Hastings", "startDate": "1066-10-14"}"#,
        )
        .unwrap();
        assert_eq!(draft.title, "Battle of Hastings");
        assert_eq!(draft.start_date, date(1066, 10, 14));
        assert!(draft.description.is_none());
        assert!(draft.end_date.is_none());
    }

    #[test]
    fn normalized_trims_title_and_collapses_empty_optionals() {
        let draft = EventDraft {
            title: String::from("  Magna Carta  "),
            description: Some(String::from("   ")),
            start_date: date(1215, 6, 15),
            end_date: None,
            image_url: Some(String::new()),
            source_url: Some(String::from("https://example.org/carta")),
        };

        let normalized = draft.normalized();
        assert_eq!(normalized.title, "Magna Carta");
        assert!(normalized.description.is_none());
        assert!(normalized.image_url.is_none());
        assert_eq!(
            normalized.source_url.as_deref(),
            Some("https://example.org/carta")
        );
    }
}
