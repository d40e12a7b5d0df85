// Configuration structs

use serde::{Deserialize, Serialize};

use super::constants::*;

/// Bounds applied while fetching a repository and assembling prompts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Limits {
    /// Stop descending into subdirectories once this many files are collected
    pub max_files: usize,
    /// Reported size (bytes) at or above which a file is skipped
    pub max_file_size: u64,
    /// Files embedded in one prompt
    pub prompt_max_files: usize,
    /// Characters kept from each embedded file
    pub prompt_max_chars: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_files: MAX_FILES,
            max_file_size: MAX_FILE_SIZE,
            prompt_max_files: PROMPT_MAX_FILES,
            prompt_max_chars: PROMPT_MAX_CHARS,
        }
    }
}

#[derive(Clone)]
pub struct Config {
    /// Bind address for the HTTP service (e.g., "127.0.0.1:3000")
    pub bind_address: String,

    /// GitHub REST API base URL (overridable for tests and GitHub Enterprise)
    pub github_api_url: String,

    /// Claude Messages API endpoint
    pub anthropic_api_url: String,

    /// Model identifier sent with every question
    pub model: String,

    /// Output token ceiling sent with every question
    pub max_tokens: u32,

    /// Timeout applied to each outbound HTTP call
    pub request_timeout_secs: u64,

    /// Optional GitHub token (raises rate limits)
    pub github_token: Option<String>,

    /// Claude API key. Missing is not a startup error; each question fails instead.
    pub anthropic_api_key: Option<String>,

    pub limits: Limits,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_address: DEFAULT_HTTP_ADDR.to_string(),
            github_api_url: GITHUB_API_URL.to_string(),
            anthropic_api_url: CLAUDE_API_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            github_token: None,
            anthropic_api_key: None,
            limits: Limits::default(),
        }
    }
}

// Credentials stay out of logs.
impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("bind_address", &self.bind_address)
            .field("github_api_url", &self.github_api_url)
            .field("anthropic_api_url", &self.anthropic_api_url)
            .field("model", &self.model)
            .field("max_tokens", &self.max_tokens)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("github_token", &self.github_token.as_ref().map(|_| "<set>"))
            .field(
                "anthropic_api_key",
                &self.anthropic_api_key.as_ref().map(|_| "<set>"),
            )
            .field("limits", &self.limits)
            .finish()
    }
}

impl Limits {
    /// Inbound request body ceiling.
    ///
    /// A chat request carries a whole fetched context back to the server.
    /// The walk can overshoot `max_files` (the cap is only checked before
    /// entering a directory) and JSON escaping can double a file's size, so
    /// both are budgeted at twice their nominal bound.
    pub fn request_body_limit(&self) -> usize {
        let max_file_size = usize::try_from(self.max_file_size).unwrap_or(usize::MAX);
        self.max_files
            .saturating_mul(2)
            .saturating_mul(max_file_size)
            .saturating_mul(2)
    }
}

impl Config {
    /// Validate configuration and return helpful errors
    pub fn validate(&self) -> anyhow::Result<()> {
        if !self.bind_address.contains(':') {
            anyhow::bail!(
                "Invalid bind address: '{}'\n\
                 Bind address should be in format 'IP:PORT', e.g. 127.0.0.1:3000",
                self.bind_address
            );
        }

        for (name, url) in [
            ("github_api_url", &self.github_api_url),
            ("anthropic_api_url", &self.anthropic_api_url),
        ] {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                anyhow::bail!("{} must be an http(s) URL, got '{}'", name, url);
            }
        }

        if self.model.trim().is_empty() {
            anyhow::bail!("model must not be empty");
        }

        if self.max_tokens == 0 {
            anyhow::bail!("max_tokens must be greater than 0");
        }

        if self.request_timeout_secs == 0 {
            anyhow::bail!("request_timeout_secs must be greater than 0");
        }

        let limits = &self.limits;
        if limits.max_files == 0
            || limits.max_file_size == 0
            || limits.prompt_max_files == 0
            || limits.prompt_max_chars == 0
        {
            anyhow::bail!("limits must all be greater than 0: {:?}", limits);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.limits.max_files, 50);
        assert_eq!(config.limits.max_file_size, 100_000);
        assert_eq!(config.limits.prompt_max_files, 20);
        assert_eq!(config.limits.prompt_max_chars, 3000);
        assert_eq!(config.max_tokens, 4096);
    }

    #[test]
    fn test_request_body_limit_fits_full_context() {
        let limits = Limits::default();
        // 50 files just under the size cap, fully escaped
        let worst_case = limits.max_files * (limits.max_file_size as usize - 1) * 2;
        assert!(limits.request_body_limit() >= worst_case);
        assert_eq!(limits.request_body_limit(), 20_000_000);

        let small = Limits {
            max_files: 5,
            max_file_size: 1_000,
            ..Limits::default()
        };
        assert_eq!(small.request_body_limit(), 20_000);
    }

    #[test]
    fn test_zero_limit_rejected() {
        let mut config = Config::default();
        config.limits.prompt_max_chars = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_bad_bind_address_rejected() {
        let config = Config {
            bind_address: "localhost".to_string(),
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_debug_redacts_credentials() {
        let config = Config {
            anthropic_api_key: Some("sk-ant-secret".to_string()),
            github_token: Some("ghp_secret".to_string()),
            ..Config::default()
        };
        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("sk-ant-secret"));
        assert!(!rendered.contains("ghp_secret"));
        assert!(rendered.contains("<set>"));
    }
}
