// Session backends
//
// The session never talks to GitHub or Claude directly; it goes through the
// HTTP service, the same way a browser front end would.

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use crate::github::RepoContext;
use crate::server::{ChatRequest, ChatResponse, ErrorResponse, FetchRepoRequest};

/// Operations a session needs from the service
#[async_trait]
pub trait RepoBackend: Send + Sync {
    /// Fetch the repository named by `repo_url`
    async fn load_repo(&self, repo_url: &str) -> Result<RepoContext>;

    /// Answer `message` against `context`
    async fn ask(&self, message: &str, context: &RepoContext) -> Result<String>;
}

/// Backend that calls a running repochat server
pub struct HttpBackend {
    client: Client,
    base_url: String,
}

impl HttpBackend {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    async fn post<B, R>(&self, path: &str, body: &B) -> Result<R>
    where
        B: serde::Serialize + Sync,
        R: serde::de::DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .with_context(|| format!("Failed to reach {}", url))?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<ErrorResponse>()
                .await
                .map(|e| e.error)
                .unwrap_or_else(|_| status.to_string());
            anyhow::bail!("{} ({})", message, status);
        }

        response
            .json()
            .await
            .with_context(|| format!("Failed to parse response from {}", url))
    }
}

#[async_trait]
impl RepoBackend for HttpBackend {
    async fn load_repo(&self, repo_url: &str) -> Result<RepoContext> {
        let request = FetchRepoRequest {
            repo_url: repo_url.to_string(),
        };
        self.post("/api/fetch-repo", &request).await
    }

    async fn ask(&self, message: &str, context: &RepoContext) -> Result<String> {
        let request = ChatRequest {
            message: message.to_string(),
            repo_context: context.clone(),
        };
        let reply: ChatResponse = self.post("/api/chat", &request).await?;
        Ok(reply.response)
    }
}
