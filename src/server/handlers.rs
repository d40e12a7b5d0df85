// HTTP handlers and router

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};

use super::types::{ChatRequest, ChatResponse, FetchRepoRequest};
use super::AppState;
use crate::errors::AppError;
use crate::github::RepoContext;
use crate::prompt::build_prompt;

/// Build the application router
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/api/fetch-repo", post(handle_fetch_repo))
        .route("/api/chat", post(handle_chat))
        .with_state(state)
}

pub async fn health_check() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// `POST /api/fetch-repo`: walk the repository and return its context
pub async fn handle_fetch_repo(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<FetchRepoRequest>, JsonRejection>,
) -> Result<Json<RepoContext>, AppError> {
    let Json(request) = payload.map_err(|e| AppError::invalid_input(e.body_text()))?;

    let context = state.fetcher().load(&request.repo_url).await?;
    Ok(Json(context))
}

/// `POST /api/chat`: answer one question against a repository context
pub async fn handle_chat(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, AppError> {
    let Json(request) = payload.map_err(|e| AppError::invalid_input(e.body_text()))?;

    let context = &request.repo_context;
    if context.owner.trim().is_empty() || context.repo.trim().is_empty() {
        return Err(AppError::invalid_input(
            "repoContext.owner and repoContext.repo must not be empty",
        ));
    }

    tracing::info!(
        "Question about {} ({} files)",
        context.full_name(),
        context.files.len()
    );

    let prompt = build_prompt(context, &request.message, &state.config().limits);
    let response = state.relay().ask(&prompt).await?;

    Ok(Json(ChatResponse { response }))
}
