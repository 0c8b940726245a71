//! # HTTP Services
//!
//! Every JSON endpoint of the site lives under the `/api` scope:
//!
//! - `snippets`: `GET /api/snippets.json`, the listing of visible snippets.
//! - `friends`: `GET /api/friends.json`, the friend-link registry.
//!
//! Both feeds are cacheable by any intermediary for an hour and may be served
//! stale for a day while they revalidate.

pub mod friends;
pub mod snippets;

use actix_web::web::{get, scope};
use actix_web::{HttpResponse, Scope};
use serde::Serialize;

/// The base path for all JSON endpoints.
const API_PATH: &str = "/api";

/// `Cache-Control` value attached to successful feed responses.
pub const CACHE_POLICY: &str = "public, max-age=3600, stale-while-revalidate=86400";

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
}

/// A `500` response whose JSON body is `{"error": message}`.
pub(crate) fn json_error(message: &str) -> HttpResponse {
    HttpResponse::InternalServerError().json(ErrorBody { error: message })
}

/// Configures and returns the Actix `Scope` for the JSON feeds.
///
/// # Registered Routes:
///
/// *   **`GET /snippets.json`**: `snippets::list::process`
/// *   **`GET /friends.json`**: `friends::list::process`
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("/snippets.json", get().to(snippets::list::process))
        .route("/friends.json", get().to(friends::list::process))
}
