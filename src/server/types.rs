// Wire types for the HTTP API
//
// Field names follow the browser client's camelCase JSON.

use serde::{Deserialize, Serialize};

use crate::github::RepoContext;

/// Body of `POST /api/fetch-repo`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FetchRepoRequest {
    pub repo_url: String,
}

/// Body of `POST /api/chat`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    pub message: String,
    pub repo_context: RepoContext,
}

/// Successful reply of `POST /api/chat`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
}

/// Error body shared by every endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
