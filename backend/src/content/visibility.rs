use crate::config::EnvironmentMode;
use common::model::snippet::Snippet;

/// Decides whether a record may be exposed under the given environment mode.
pub trait Visibility: Send + Sync {
    fn is_visible(&self, snippet: &Snippet, mode: EnvironmentMode) -> bool;
}

/// Shows everything while developing; hides drafts in production.
#[derive(Debug, Default, Clone, Copy)]
pub struct DraftVisibility;

impl Visibility for DraftVisibility {
    fn is_visible(&self, snippet: &Snippet, mode: EnvironmentMode) -> bool {
        match mode {
            EnvironmentMode::Development => true,
            EnvironmentMode::Production => !snippet.data.draft,
        }
    }
}
