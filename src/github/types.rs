// Repository data model and GitHub contents API types

use serde::{Deserialize, Serialize};

/// Kind of a fetched repository entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    File,
    Dir,
}

/// A fetched file. Immutable once produced by the fetcher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoFile {
    pub path: String,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(rename = "type")]
    pub kind: FileKind,
}

impl RepoFile {
    pub fn file(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: Some(content.into()),
            kind: FileKind::File,
        }
    }

    /// Content if present and non-empty
    pub fn text(&self) -> Option<&str> {
        self.content.as_deref().filter(|c| !c.is_empty())
    }
}

/// In-memory snapshot of one repository's fetched files.
///
/// Travels to the client after a load and comes back with every question,
/// so it is validated strictly when deserialized: `owner`, `repo` and
/// `files` must all be present with the right types.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoContext {
    pub owner: String,
    pub repo: String,
    pub files: Vec<RepoFile>,
}

impl RepoContext {
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner, self.repo)
    }
}

/// Entry type reported by the contents API
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    File,
    Dir,
    Symlink,
    Submodule,
    #[serde(other)]
    Other,
}

/// One entry of a contents API directory listing
#[derive(Debug, Clone, Deserialize)]
pub struct ContentItem {
    pub name: String,
    pub path: String,
    #[serde(rename = "type")]
    pub item_type: ContentType,
    #[serde(default)]
    pub size: u64,
    #[serde(default)]
    pub download_url: Option<String>,
}
