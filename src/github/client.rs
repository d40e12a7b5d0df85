// HTTP client for the GitHub contents API

use anyhow::{Context, Result};
use reqwest::header::{ACCEPT, AUTHORIZATION, USER_AGENT};
use reqwest::Client;
use std::time::Duration;

use super::types::ContentItem;
use crate::config::constants::{GITHUB_ACCEPT, USER_AGENT as REPOCHAT_USER_AGENT};
use crate::config::Config;

#[derive(Clone)]
pub struct GitHubClient {
    client: Client,
    api_url: String,
    token: Option<String>,
}

impl GitHubClient {
    pub fn new(api_url: impl Into<String>, token: Option<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            api_url: api_url.into().trim_end_matches('/').to_string(),
            token,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(
            config.github_api_url.clone(),
            config.github_token.clone(),
            Duration::from_secs(config.request_timeout_secs),
        )
    }

    /// List one directory. `path` is relative to the repository root; empty means the root.
    pub async fn list_dir(&self, owner: &str, repo: &str, path: &str) -> Result<Vec<ContentItem>> {
        let url = format!("{}/repos/{}/{}/contents/{}", self.api_url, owner, repo, path);
        tracing::debug!("Listing {}", url);

        let mut request = self
            .client
            .get(&url)
            .header(ACCEPT, GITHUB_ACCEPT)
            .header(USER_AGENT, REPOCHAT_USER_AGENT);
        if let Some(token) = &self.token {
            request = request.header(AUTHORIZATION, format!("Bearer {}", token));
        }

        let response = request
            .send()
            .await
            .with_context(|| format!("Failed to send contents request for '{}'", path))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("GitHub API error\n\nStatus: {}\nBody: {}", status, body);
        }

        response
            .json()
            .await
            .with_context(|| format!("Failed to parse contents listing for '{}'", path))
    }

    /// Download a file body from its direct-download URL
    pub async fn download(&self, download_url: &str) -> Result<String> {
        tracing::debug!("Downloading {}", download_url);

        let response = self
            .client
            .get(download_url)
            .header(USER_AGENT, REPOCHAT_USER_AGENT)
            .send()
            .await
            .context("Failed to send download request")?;

        let status = response.status();
        if !status.is_success() {
            anyhow::bail!("Download failed with status {}", status);
        }

        response.text().await.context("Failed to read file body")
    }
}
