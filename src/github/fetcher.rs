// Repository fetcher
//
// Walks a repository depth-first through the contents API, in the order the
// API lists entries, and downloads the files the policy accepts. The walk
// uses an explicit stack of pending listings instead of recursion, and one
// accumulator for the whole walk.

use anyhow::Result;

use super::client::GitHubClient;
use super::policy;
use super::types::{ContentItem, ContentType, RepoContext, RepoFile};
use super::url::RepoRef;
use crate::config::Limits;
use crate::errors::AppError;

#[derive(Clone)]
pub struct RepoFetcher {
    client: GitHubClient,
    limits: Limits,
}

impl RepoFetcher {
    pub fn new(client: GitHubClient, limits: Limits) -> Self {
        Self { client, limits }
    }

    /// Parse `repo_url`, walk the repository and return its context.
    ///
    /// A malformed URL fails before any request is made. A failed directory
    /// listing aborts the whole walk.
    pub async fn load(&self, repo_url: &str) -> Result<RepoContext, AppError> {
        let repo = RepoRef::parse(repo_url)?;
        tracing::info!("Fetching repository {}", repo);

        let files = self
            .fetch_files(&repo)
            .await
            .map_err(|e| AppError::upstream("Failed to fetch repository", e))?;

        tracing::info!("Fetched {} files from {}", files.len(), repo);
        Ok(RepoContext {
            owner: repo.owner,
            repo: repo.repo,
            files,
        })
    }

    /// Collect eligible files, depth-first.
    ///
    /// Descent into a subdirectory happens only while fewer than
    /// `limits.max_files` files have been collected; files in directories
    /// already being listed are still collected after the cap is reached.
    pub async fn fetch_files(&self, repo: &RepoRef) -> Result<Vec<RepoFile>> {
        let mut files = Vec::new();
        let root = self.client.list_dir(&repo.owner, &repo.repo, "").await?;
        let mut pending: Vec<std::vec::IntoIter<ContentItem>> = vec![root.into_iter()];

        while let Some(listing) = pending.last_mut() {
            let Some(item) = listing.next() else {
                pending.pop();
                continue;
            };

            match item.item_type {
                ContentType::File => {
                    if let Some(file) = self.download_file(&item).await {
                        files.push(file);
                    }
                }
                ContentType::Dir => {
                    if policy::is_denied_dir(&item.name) {
                        tracing::debug!("Skipping denied directory {}", item.path);
                        continue;
                    }
                    if files.len() >= self.limits.max_files {
                        tracing::debug!(
                            "File cap {} reached, not descending into {}",
                            self.limits.max_files,
                            item.path
                        );
                        continue;
                    }
                    let children = self
                        .client
                        .list_dir(&repo.owner, &repo.repo, &item.path)
                        .await?;
                    pending.push(children.into_iter());
                }
                ContentType::Symlink | ContentType::Submodule | ContentType::Other => {
                    tracing::debug!("Skipping {:?} entry {}", item.item_type, item.path);
                }
            }
        }

        Ok(files)
    }

    /// Download one file if the policy accepts it. Failures are logged and skipped.
    async fn download_file(&self, item: &ContentItem) -> Option<RepoFile> {
        if !policy::should_download(item, self.limits.max_file_size) {
            return None;
        }

        let Some(url) = item.download_url.as_deref() else {
            tracing::warn!("No download URL for {}, skipping", item.path);
            return None;
        };

        match self.client.download(url).await {
            Ok(content) => Some(RepoFile::file(&item.path, content)),
            Err(e) => {
                tracing::warn!("Error fetching file {}: {:#}", item.path, e);
                None
            }
        }
    }
}
