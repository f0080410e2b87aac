//! REST API endpoint handlers for the record service.
//!
//! All handlers go through the [`EventStore`] bound to the shared pool in
//! [`AppState`]. Era annotation and date-range filtering are applied to
//! the fetched rows, never pushed into SQL -- the era of a record is
//! presentation metadata, recomputed on every read.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET` | `/` | Minimal HTML status page |
//! | `GET` | `/api/events` | List records (optional `from`/`to`/`era` filters) |
//! | `POST` | `/api/events` | Create a record |
//! | `GET` | `/api/events/{id}` | Get a single record |
//! | `PUT` | `/api/events/{id}` | Update a record |
//! | `DELETE` | `/api/events/{id}` | Delete a record |
//! | `GET` | `/api/eras` | Era metadata (key, label, accent, bounds) |

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse};
use chrono::NaiveDate;
use histolinea_core::{classify_date, overlaps, validate_draft, year_bounds};
use histolinea_db::EventStore;
use histolinea_types::{Era, EventDraft, EventId, HistoricalEvent};
use uuid::Uuid;

use crate::error::ApiError;
use crate::state::AppState;

/// A record annotated with its computed era key for list responses.
#[derive(Debug, serde::Serialize)]
struct AnnotatedEvent {
    /// The stored record, flattened into the same JSON object.
    #[serde(flatten)]
    event: HistoricalEvent,
    /// Era derived from the record's start date.
    era: Era,
}

// ---------------------------------------------------------------------------
// Query parameter structs
// ---------------------------------------------------------------------------

/// Query parameters for the `GET /api/events` endpoint.
///
/// Dates arrive as ISO `YYYY-MM-DD` strings and the era as its stable
/// key; both are parsed explicitly so a malformed value is a clean 400
/// rather than an extractor rejection.
#[derive(Debug, serde::Deserialize)]
pub struct EventsQuery {
    /// Inclusive lower bound on the event span (ISO date).
    pub from: Option<String>,
    /// Inclusive upper bound on the event span (ISO date).
    pub to: Option<String>,
    /// Era key to filter by (`ancient`, `medieval`, `modern`,
    /// `contemporary`).
    pub era: Option<String>,
}

// ---------------------------------------------------------------------------
// GET / -- minimal HTML status page
// ---------------------------------------------------------------------------

/// Serve a minimal HTML page listing the API endpoints.
pub async fn index() -> impl IntoResponse {
    Html(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <title>Histolinea API</title>
    <style>
        body {
            background: #0d1117;
            color: #c9d1d9;
            font-family: 'Cascadia Code', 'Fira Code', 'Consolas', monospace;
            padding: 2rem;
            max-width: 800px;
            margin: 0 auto;
        }
        h1 { color: #58a6ff; margin-bottom: 0.25rem; }
        .subtitle { color: #8b949e; margin-top: 0; }
        a { color: #58a6ff; text-decoration: none; }
        a:hover { text-decoration: underline; }
        ul { list-style: none; padding: 0; }
        li { padding: 0.3rem 0; }
        .verb { color: #7ee787; font-weight: bold; }
        .status { color: #3fb950; font-weight: bold; }
        hr { border: none; border-top: 1px solid #30363d; margin: 1.5rem 0; }
    </style>
</head>
<body>
    <h1>Histolinea</h1>
    <p class="subtitle">Historical event record service</p>

    <p>Status: <span class="status">RUNNING</span></p>

    <hr>

    <h2>API Endpoints</h2>
    <ul>
        <li><span class="verb">GET</span> <a href="/api/events">/api/events</a> -- List records (?from=&amp;to=&amp;era=)</li>
        <li><span class="verb">POST</span> /api/events -- Create a record</li>
        <li><span class="verb">GET</span> /api/events/{id} -- Single record</li>
        <li><span class="verb">PUT</span> /api/events/{id} -- Update a record</li>
        <li><span class="verb">DELETE</span> /api/events/{id} -- Delete a record</li>
        <li><span class="verb">GET</span> <a href="/api/eras">/api/eras</a> -- Era metadata</li>
    </ul>
</body>
</html>"#,
    )
}

// ---------------------------------------------------------------------------
// GET /api/events -- list records
// ---------------------------------------------------------------------------

/// List records ordered ascending by start date.
///
/// # Query Parameters
///
/// - `from` / `to`: inclusive ISO-date bounds; a record is kept when its
///   span `[start, end or start]` intersects the query range.
/// - `era`: keep only records whose start date classifies into this era.
///
/// Each record in the response is annotated with its computed era key.
pub async fn list_events(
    State(state): State<Arc<AppState>>,
    Query(params): Query<EventsQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let from = parse_date_param("from", params.from.as_deref())?;
    let to = parse_date_param("to", params.to.as_deref())?;
    let era_filter = params
        .era
        .as_deref()
        .map(|key| {
            Era::from_key(key).ok_or_else(|| ApiError::InvalidQuery(format!("unknown era: {key}")))
        })
        .transpose()?;

    let store = EventStore::new(state.db.pool());
    let events: Vec<AnnotatedEvent> = store
        .list_all()
        .await?
        .into_iter()
        .filter(|event| overlaps(event.start_date, event.end_date, from, to))
        .map(|event| AnnotatedEvent {
            era: classify_date(event.start_date),
            event,
        })
        .filter(|annotated| era_filter.is_none_or(|wanted| annotated.era == wanted))
        .collect();

    Ok(Json(serde_json::json!({
        "count": events.len(),
        "events": events,
    })))
}

// ---------------------------------------------------------------------------
// GET /api/events/{id} -- single record
// ---------------------------------------------------------------------------

/// Return a single record by id.
pub async fn get_event(
    State(state): State<Arc<AppState>>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id = parse_event_id(&id_str)?;
    let store = EventStore::new(state.db.pool());
    let event = store.get(id).await?;
    Ok(Json(event))
}

// ---------------------------------------------------------------------------
// POST /api/events -- create a record
// ---------------------------------------------------------------------------

/// Validate and insert a new record.
///
/// Returns `201 Created` with the stored record, including its assigned
/// id and creation timestamp.
pub async fn create_event(
    State(state): State<Arc<AppState>>,
    Json(draft): Json<EventDraft>,
) -> Result<impl IntoResponse, ApiError> {
    let draft = draft.normalized();
    validate_draft(&draft)?;

    let store = EventStore::new(state.db.pool());
    let event = store.insert(&draft).await?;
    tracing::info!(id = %event.id, title = event.title, "Record created");

    Ok((StatusCode::CREATED, Json(event)))
}

// ---------------------------------------------------------------------------
// PUT /api/events/{id} -- update a record
// ---------------------------------------------------------------------------

/// Validate a draft and replace an existing record's fields.
pub async fn update_event(
    State(state): State<Arc<AppState>>,
    Path(id_str): Path<String>,
    Json(draft): Json<EventDraft>,
) -> Result<impl IntoResponse, ApiError> {
    let id = parse_event_id(&id_str)?;
    let draft = draft.normalized();
    validate_draft(&draft)?;

    let store = EventStore::new(state.db.pool());
    let event = store.update(id, &draft).await?;
    tracing::info!(%id, "Record updated");

    Ok(Json(event))
}

// ---------------------------------------------------------------------------
// DELETE /api/events/{id} -- delete a record
// ---------------------------------------------------------------------------

/// Delete a record by id. Returns `204 No Content` on success.
pub async fn delete_event(
    State(state): State<Arc<AppState>>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id = parse_event_id(&id_str)?;
    let store = EventStore::new(state.db.pool());
    store.delete(id).await?;
    tracing::info!(%id, "Record deleted");

    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// GET /api/eras -- era metadata
// ---------------------------------------------------------------------------

/// Return the four eras with their presentation metadata and year bounds.
///
/// The client uses this to populate its filter options and color the
/// timeline groups without hard-coding the boundaries.
pub async fn list_eras() -> impl IntoResponse {
    let eras: Vec<serde_json::Value> = Era::ALL
        .into_iter()
        .map(|era| {
            let (from_year, until_year) = year_bounds(era);
            serde_json::json!({
                "key": era.key(),
                "label": era.label(),
                "accent": era.accent(),
                "fromYear": from_year,
                "untilYear": until_year,
            })
        })
        .collect();

    Json(serde_json::json!({
        "count": eras.len(),
        "eras": eras,
    }))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Parse a record id from a path segment, returning an [`ApiError`] on
/// failure.
fn parse_event_id(s: &str) -> Result<EventId, ApiError> {
    s.parse::<Uuid>()
        .map(EventId::from)
        .map_err(|e| ApiError::InvalidUuid(format!("{s}: {e}")))
}

/// Parse an optional ISO `YYYY-MM-DD` query parameter.
fn parse_date_param(
    name: &'static str,
    value: Option<&str>,
) -> Result<Option<NaiveDate>, ApiError> {
    value
        .map(|raw| {
            raw.parse::<NaiveDate>()
                .map_err(|e| ApiError::InvalidQuery(format!("{name}={raw}: {e}")))
        })
        .transpose()
}
