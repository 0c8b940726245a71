//! # Content Collections
//!
//! Access to the site's content collections and the rules deciding which of
//! their records may be exposed.
//!
//! - `ContentProvider`: loads every record of a named collection. The service
//!   only depends on this trait, so handlers can be exercised against
//!   in-memory collections.
//! - `directory::DirectoryProvider`: the production provider, reading Markdown
//!   files with YAML front matter from `<content_dir>/<collection>/`.
//! - `visibility`: the `Visibility` predicate and the default draft rule.
//! - `date`: parsing of authored dates into comparable time values.

pub mod date;
pub mod directory;
pub mod error;
pub mod visibility;

use async_trait::async_trait;
use common::model::snippet::Snippet;

pub use error::ContentError;

/// Name of the collection backing the snippet listing.
pub const SNIPPETS_COLLECTION: &str = "snippets";

#[async_trait]
pub trait ContentProvider: Send + Sync {
    /// Loads all records of the collection `name`.
    async fn get_collection(&self, name: &str) -> Result<Vec<Snippet>, ContentError>;
}
