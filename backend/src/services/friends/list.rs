use crate::services::CACHE_POLICY;
use actix_web::http::header::CACHE_CONTROL;
use actix_web::{HttpResponse, Responder};
use common::data::friends::friend_links;

/// Actix web handler for the `GET /api/friends.json` endpoint.
///
/// Returns the friend-link registry as a JSON array, in declaration order.
pub async fn process() -> impl Responder {
    HttpResponse::Ok()
        .insert_header((CACHE_CONTROL, CACHE_POLICY))
        .json(friend_links())
}
