use serde::{Deserialize, Serialize};

/// Path prefix of the page that renders a single snippet.
pub const SNIPPET_URL_PREFIX: &str = "/snippets/";

/// A record of the `snippets` content collection.
///
/// Snippets are produced by the content loader before any request is handled
/// and are read-only afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Snippet {
    /// Unique identifier of the record within its collection.
    pub id: String,
    pub data: SnippetData,
}

/// Front-matter metadata of a snippet.
///
/// Keys not listed here are ignored when the record is loaded.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SnippetData {
    pub title: String,
    pub description: String,
    /// Publication date exactly as authored, e.g. `2024-03-01` or an RFC 3339
    /// timestamp.
    pub date: String,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    #[serde(default)]
    pub language: Option<String>,
    /// Drafts are only shown in development mode.
    #[serde(default)]
    pub draft: bool,
}

/// Discriminator written into every listing entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryType {
    Snippet,
}

/// The listing form of a visible snippet, as served by `GET /api/snippets.json`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SnippetSummary {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Always `/snippets/{id}`.
    pub url: String,
    #[serde(rename = "type")]
    pub entry_type: EntryType,
    pub date: String,
    /// Empty when the snippet has no tags.
    pub tags: Vec<String>,
    /// Serialized as `null` when the snippet declares no language.
    pub language: Option<String>,
}

impl From<Snippet> for SnippetSummary {
    fn from(snippet: Snippet) -> Self {
        let Snippet { id, data } = snippet;
        SnippetSummary {
            url: format!("{SNIPPET_URL_PREFIX}{id}"),
            id,
            title: data.title,
            description: data.description,
            entry_type: EntryType::Snippet,
            date: data.date,
            tags: data.tags.unwrap_or_default(),
            language: data.language,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snippet(id: &str, tags: Option<Vec<String>>, language: Option<&str>) -> Snippet {
        Snippet {
            id: id.to_string(),
            data: SnippetData {
                title: format!("Title {id}"),
                description: format!("About {id}"),
                date: "2024-01-01".to_string(),
                tags,
                language: language.map(str::to_string),
                draft: false,
            },
        }
    }

    #[test]
    fn summary_fills_defaults_for_missing_tags_and_language() {
        let summary = SnippetSummary::from(snippet("a", None, None));

        assert_eq!(summary.url, "/snippets/a");
        assert_eq!(summary.entry_type, EntryType::Snippet);
        assert!(summary.tags.is_empty());
        assert_eq!(summary.language, None);

        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": "a",
                "title": "Title a",
                "description": "About a",
                "url": "/snippets/a",
                "type": "snippet",
                "date": "2024-01-01",
                "tags": [],
                "language": null,
            })
        );
    }

    #[test]
    fn summary_copies_tags_and_language() {
        let tags = vec!["rust".to_string(), "cli".to_string()];
        let summary = SnippetSummary::from(snippet("b", Some(tags.clone()), Some("rust")));

        assert_eq!(summary.tags, tags);
        assert_eq!(summary.language.as_deref(), Some("rust"));
        assert_eq!(summary.date, "2024-01-01");
    }

    #[test]
    fn snippet_data_ignores_unknown_keys_and_defaults_draft() {
        let data: SnippetData = serde_json::from_value(serde_json::json!({
            "title": "t",
            "description": "d",
            "date": "2024-02-01",
            "heroImage": "/x.png",
        }))
        .unwrap();

        assert!(!data.draft);
        assert_eq!(data.tags, None);
        assert_eq!(data.language, None);
    }
}
