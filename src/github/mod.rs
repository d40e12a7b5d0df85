// GitHub module
// Fetches a bounded, filtered snapshot of a repository through the contents API

mod client;
mod fetcher;
pub mod policy;
pub mod types;
mod url;

pub use client::GitHubClient;
pub use fetcher::RepoFetcher;
pub use types::{ContentItem, ContentType, FileKind, RepoContext, RepoFile};
pub use url::RepoRef;
