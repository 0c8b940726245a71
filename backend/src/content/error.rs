use std::path::PathBuf;
use thiserror::Error;

/// Failures while loading a content collection or shaping its records.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("collection not found: {name}")]
    CollectionNotFound { name: String },

    #[error("failed to read collection {name}: {source}")]
    Io {
        name: String,
        #[source]
        source: std::io::Error,
    },

    #[error("missing front matter in {}", .path.display())]
    MissingFrontMatter { path: PathBuf },

    #[error("invalid front matter in {}: {source}", .path.display())]
    FrontMatter {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("invalid date {date:?} on record {id}")]
    InvalidDate { id: String, date: String },
}
