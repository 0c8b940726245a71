//! # Snippet Listing Service
//!
//! Backend logic for the `GET /api/snippets.json` endpoint, the JSON feed of
//! every snippet the current environment may expose.
//!
//! ## Workflow
//!
//! 1.  **HTTP Request**: `process` receives a GET request without parameters and
//!     reads the environment mode from `AppState` once.
//!
//! 2.  **Collection Query**: `list_snippets` loads the `snippets` collection
//!     through the injected `ContentProvider`.
//!
//! 3.  **Visibility**: every record is passed to the injected `Visibility`
//!     predicate together with the mode; only records it accepts go on.
//!
//! 4.  **Projection and Ordering**: visible records become `SnippetSummary`
//!     values and are sorted newest first by their parsed dates. Equal dates
//!     keep the provider's order.
//!
//! 5.  **HTTP Response**: the summaries are serialized as one JSON array and
//!     returned with a public caching directive. Any failure along the way is
//!     logged and answered with a fixed `500` error object instead, never with
//!     partial data.

use crate::config::EnvironmentMode;
use crate::content::date::parse_date;
use crate::content::visibility::Visibility;
use crate::content::{ContentError, ContentProvider, SNIPPETS_COLLECTION};
use crate::services::{json_error, CACHE_POLICY};
use crate::state::AppState;
use actix_web::http::header::{ContentType, CACHE_CONTROL};
use actix_web::{web, HttpResponse};
use common::model::snippet::SnippetSummary;
use log::{debug, error};

/// Body message of every failed listing.
const FETCH_ERROR: &str = "Failed to fetch snippets";

/// Actix web handler for the `GET /api/snippets.json` endpoint.
///
/// # Returns
/// - `200 OK` with the JSON array of visible snippet summaries, newest first.
///   The array is empty when nothing is visible.
/// - `500 Internal Server Error` with `{"error": "Failed to fetch snippets"}`
///   if the collection cannot be loaded or shaped.
pub async fn process(state: web::Data<AppState>) -> HttpResponse {
    let mode = state.mode;
    let listing = list_snippets(state.provider.as_ref(), state.visibility.as_ref(), mode).await;

    let body = listing
        .map_err(|e| e.to_string())
        .and_then(|summaries| {
            debug!("Listing {} snippets ({:?})", summaries.len(), mode);
            serde_json::to_string(&summaries).map_err(|e| e.to_string())
        });

    match body {
        Ok(body) => HttpResponse::Ok()
            .content_type(ContentType::json())
            .insert_header((CACHE_CONTROL, CACHE_POLICY))
            .body(body),
        Err(e) => {
            error!("Error listing snippets: {}", e);
            json_error(FETCH_ERROR)
        }
    }
}

/// Loads the `snippets` collection and shapes it into the listing payload.
///
/// # Returns
/// - `Ok(Vec<SnippetSummary>)` holding one summary per visible record, sorted
///   by date descending.
/// - `Err(ContentError)` if the provider fails or a visible record carries a
///   date that is not a valid time value.
pub async fn list_snippets(
    provider: &dyn ContentProvider,
    visibility: &dyn Visibility,
    mode: EnvironmentMode,
) -> Result<Vec<SnippetSummary>, ContentError> {
    let records = provider.get_collection(SNIPPETS_COLLECTION).await?;

    let mut dated = records
        .into_iter()
        .filter(|record| visibility.is_visible(record, mode))
        .map(|record| -> Result<_, ContentError> {
            let published =
                parse_date(&record.data.date).ok_or_else(|| ContentError::InvalidDate {
                    id: record.id.clone(),
                    date: record.data.date.clone(),
                })?;
            Ok((published, SnippetSummary::from(record)))
        })
        .collect::<Result<Vec<_>, _>>()?;

    dated.sort_by(|(a, _), (b, _)| b.cmp(a));

    Ok(dated.into_iter().map(|(_, summary)| summary).collect())
}
