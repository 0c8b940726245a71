//! # Directory Content Provider
//!
//! Loads a collection from `<root>/<collection>/`, one record per Markdown
//! file (`.md` or `.mdx`). Each file must open with a YAML front-matter block
//! delimited by `---` lines; the block is deserialized into `SnippetData`.
//! Subdirectories are walked as well: the record id is the file's path relative
//! to the collection directory, `/`-separated and without its extension, so
//! `snippets/rust/iter.md` becomes `rust/iter`. The body after the block is not
//! read into the record since listings never need it.
//!
//! Records are returned sorted by id so that repeated loads of an unchanged
//! directory yield the same sequence regardless of directory iteration order.

use super::{ContentError, ContentProvider};
use async_trait::async_trait;
use common::model::snippet::{Snippet, SnippetData};
use log::debug;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;

const MARKDOWN_EXTENSIONS: [&str; 2] = ["md", "mdx"];

pub struct DirectoryProvider {
    root: PathBuf,
}

impl DirectoryProvider {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

#[async_trait]
impl ContentProvider for DirectoryProvider {
    async fn get_collection(&self, name: &str) -> Result<Vec<Snippet>, ContentError> {
        let dir = self.root.join(name);
        let io_error = |source: std::io::Error| ContentError::Io {
            name: name.to_string(),
            source,
        };

        let mut pending = vec![(dir.clone(), String::new())];
        let mut records = Vec::new();
        while let Some((current, prefix)) = pending.pop() {
            let mut entries = match fs::read_dir(&current).await {
                Ok(entries) => entries,
                Err(e) if e.kind() == ErrorKind::NotFound && current == dir => {
                    return Err(ContentError::CollectionNotFound {
                        name: name.to_string(),
                    });
                }
                Err(e) => return Err(io_error(e)),
            };

            while let Some(entry) = entries.next_entry().await.map_err(io_error)? {
                let path = entry.path();
                if entry.file_type().await.map_err(io_error)?.is_dir() {
                    if let Some(dir_name) = path.file_name().and_then(|n| n.to_str()) {
                        pending.push((path.clone(), format!("{prefix}{dir_name}/")));
                    }
                    continue;
                }
                if !is_markdown(&path) {
                    continue;
                }
                let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) else {
                    continue;
                };

                let raw = fs::read_to_string(&path).await.map_err(io_error)?;
                let data = parse_front_matter(&path, &raw)?;
                records.push(Snippet {
                    id: format!("{prefix}{stem}"),
                    data,
                });
            }
        }

        records.sort_by(|a, b| a.id.cmp(&b.id));
        debug!(
            "Loaded {} records from collection '{}' at {}",
            records.len(),
            name,
            dir.display()
        );
        Ok(records)
    }
}

fn is_markdown(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| MARKDOWN_EXTENSIONS.contains(&ext))
}

fn parse_front_matter(path: &Path, raw: &str) -> Result<SnippetData, ContentError> {
    let block = split_front_matter(raw).ok_or_else(|| ContentError::MissingFrontMatter {
        path: path.to_path_buf(),
    })?;
    serde_yaml::from_str(block).map_err(|source| ContentError::FrontMatter {
        path: path.to_path_buf(),
        source,
    })
}

/// Returns the text between the opening and closing `---` lines.
fn split_front_matter(raw: &str) -> Option<&str> {
    let raw = raw.strip_prefix('\u{feff}').unwrap_or(raw);
    let rest = raw.strip_prefix("---")?;
    let rest = rest
        .strip_prefix("\r\n")
        .or_else(|| rest.strip_prefix('\n'))?;

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end() == "---" {
            return Some(&rest[..offset]);
        }
        offset += line.len();
    }
    None
}
