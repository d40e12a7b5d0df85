// Chat relay
//
// Forwards an assembled prompt to Claude as a single user turn and returns
// the first text block of the reply.

use std::time::Duration;

use anyhow::Result;

use super::client::ClaudeClient;
use super::types::MessageRequest;
use crate::config::Config;
use crate::errors::AppError;

#[derive(Clone)]
pub struct ChatRelay {
    /// None when no API key is configured
    client: Option<ClaudeClient>,
    model: String,
    max_tokens: u32,
}

impl ChatRelay {
    pub fn new(client: Option<ClaudeClient>, model: impl Into<String>, max_tokens: u32) -> Self {
        Self {
            client,
            model: model.into(),
            max_tokens,
        }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        let client = match &config.anthropic_api_key {
            Some(key) => Some(ClaudeClient::new(
                key.clone(),
                config.anthropic_api_url.clone(),
                Duration::from_secs(config.request_timeout_secs),
            )?),
            None => None,
        };
        Ok(Self::new(client, config.model.clone(), config.max_tokens))
    }

    pub fn is_configured(&self) -> bool {
        self.client.is_some()
    }

    /// Ask Claude. Fails with `Config` before any request when no key is set.
    pub async fn ask(&self, prompt: &str) -> Result<String, AppError> {
        let client = self
            .client
            .as_ref()
            .ok_or_else(|| AppError::config("ANTHROPIC_API_KEY not configured"))?;

        let request = MessageRequest::single_turn(&self.model, self.max_tokens, prompt);
        let response = client
            .send_message(&request)
            .await
            .map_err(|e| AppError::upstream("Failed to get response from Claude", e))?;

        Ok(response.first_text())
    }
}
