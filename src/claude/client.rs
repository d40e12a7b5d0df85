// HTTP client for Claude API

use anyhow::{Context, Result};
use reqwest::Client;
use std::time::Duration;

use super::types::{MessageRequest, MessageResponse};
use crate::config::constants::ANTHROPIC_VERSION;

#[derive(Clone)]
pub struct ClaudeClient {
    client: Client,
    api_url: String,
    api_key: String,
}

impl ClaudeClient {
    pub fn new(api_key: String, api_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            api_url: api_url.into(),
            api_key,
        })
    }

    /// Send a single message request (no retry)
    pub async fn send_message(&self, request: &MessageRequest) -> Result<MessageResponse> {
        tracing::debug!(
            "Sending request to Claude API: model={} max_tokens={}",
            request.model,
            request.max_tokens
        );

        let response = self
            .client
            .post(&self.api_url)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .header("content-type", "application/json")
            .json(request)
            .send()
            .await
            .context("Failed to send request to Claude API")?;

        let status = response.status();

        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            anyhow::bail!(
                "Claude API request failed\n\nStatus: {}\nBody: {}",
                status,
                error_body
            );
        }

        let message_response: MessageResponse = response
            .json()
            .await
            .context("Failed to parse Claude API response")?;

        tracing::debug!(
            "Received response {} ({} blocks, stop_reason={:?})",
            message_response.id,
            message_response.content.len(),
            message_response.stop_reason
        );

        Ok(message_response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = ClaudeClient::new(
            "test-key".to_string(),
            "http://localhost/v1/messages",
            Duration::from_secs(5),
        );
        assert!(client.is_ok());
    }

    #[tokio::test]
    async fn test_send_message_headers_and_error_status() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/v1/messages")
            .match_header("x-api-key", "test-key")
            .match_header("anthropic-version", ANTHROPIC_VERSION)
            .with_status(529)
            .with_body(r#"{"type":"error","error":{"type":"overloaded_error"}}"#)
            .create_async()
            .await;

        let client = ClaudeClient::new(
            "test-key".to_string(),
            format!("{}/v1/messages", server.url()),
            Duration::from_secs(5),
        )
        .unwrap();
        let request = MessageRequest::single_turn("m", 10, "hi");
        let err = client.send_message(&request).await.unwrap_err();

        mock.assert_async().await;
        assert!(err.to_string().contains("529"));
    }
}
