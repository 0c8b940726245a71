//! Shared, read-only application state.
//!
//! `AppState` is built once in `main.rs` and handed to every worker as
//! `web::Data`. Nothing in it is mutated after startup, so concurrent requests
//! never coordinate with each other.

use crate::config::EnvironmentMode;
use crate::content::ContentProvider;
use crate::content::visibility::Visibility;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    /// Source of content collections.
    pub provider: Arc<dyn ContentProvider>,
    /// Predicate applied to every record before it is listed.
    pub visibility: Arc<dyn Visibility>,
    /// Read once per request and passed to every `visibility` call.
    pub mode: EnvironmentMode,
}

impl AppState {
    pub fn new(
        provider: Arc<dyn ContentProvider>,
        visibility: Arc<dyn Visibility>,
        mode: EnvironmentMode,
    ) -> Self {
        Self {
            provider,
            visibility,
            mode,
        }
    }
}
