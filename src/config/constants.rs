// Project-wide constants
//
// Centralised here so endpoints, limits and other magic values have one
// source of truth. Import via `use crate::config::constants::*;`.

/// Default bind address for the HTTP service (localhost only).
pub const DEFAULT_HTTP_ADDR: &str = "127.0.0.1:3000";

/// Default server URL the terminal client talks to.
pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:3000";

/// GitHub REST API base URL.
pub const GITHUB_API_URL: &str = "https://api.github.com";

/// Media type requested from the contents API.
pub const GITHUB_ACCEPT: &str = "application/vnd.github.v3+json";

/// Claude Messages API endpoint.
pub const CLAUDE_API_URL: &str = "https://api.anthropic.com/v1/messages";

pub const ANTHROPIC_VERSION: &str = "2023-06-01";

/// Model used for every question.
pub const DEFAULT_MODEL: &str = "claude-opus-4-5-20251101";

/// Output token ceiling for every question.
pub const DEFAULT_MAX_TOKENS: u32 = 4096;

/// Per-request timeout for outbound HTTP calls.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 120;

/// Stop descending into subdirectories once this many files are collected.
pub const MAX_FILES: usize = 50;

/// Files whose reported size is at or above this are never downloaded.
pub const MAX_FILE_SIZE: u64 = 100_000;

/// Files embedded in a single prompt.
pub const PROMPT_MAX_FILES: usize = 20;

/// Characters kept from each embedded file.
pub const PROMPT_MAX_CHARS: usize = 3000;

/// Environment variable holding the optional GitHub token.
pub const GITHUB_TOKEN_ENV: &str = "GITHUB_TOKEN";

/// Environment variable holding the Claude API key.
pub const ANTHROPIC_API_KEY_ENV: &str = "ANTHROPIC_API_KEY";

/// Environment variable overriding the bind address.
pub const BIND_ENV: &str = "REPOCHAT_BIND";

pub const USER_AGENT: &str = concat!("repochat/", env!("CARGO_PKG_VERSION"));
