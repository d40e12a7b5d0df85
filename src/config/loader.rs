// Configuration loader
// Loads settings from ~/.repochat/config.toml, then applies environment overrides

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

use super::constants::{ANTHROPIC_API_KEY_ENV, BIND_ENV, GITHUB_TOKEN_ENV};
use super::settings::{Config, Limits};

/// On-disk format. Every key is optional; absent keys keep their defaults.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlConfig {
    bind_address: Option<String>,
    github_api_url: Option<String>,
    anthropic_api_url: Option<String>,
    model: Option<String>,
    max_tokens: Option<u32>,
    request_timeout_secs: Option<u64>,
    limits: Option<Limits>,
}

/// Load configuration from the repochat config file (if any) and the environment
pub fn load_config() -> Result<Config> {
    let home = dirs::home_dir().context("Could not determine home directory")?;
    load_config_from_path(&home.join(".repochat").join("config.toml"))
}

/// Load configuration from `path` (a missing file means defaults) plus the environment
pub fn load_config_from_path(path: &Path) -> Result<Config> {
    let mut config = if path.exists() {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        parse_toml(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?
    } else {
        Config::default()
    };

    apply_env(&mut config, |key| std::env::var(key).ok());

    config
        .validate()
        .context("Configuration validation failed")?;

    tracing::debug!("Loaded configuration: {:?}", config);
    Ok(config)
}

fn parse_toml(contents: &str) -> Result<Config> {
    let file: TomlConfig = toml::from_str(contents)?;
    let mut config = Config::default();

    if let Some(bind) = file.bind_address {
        config.bind_address = bind;
    }
    if let Some(url) = file.github_api_url {
        config.github_api_url = url.trim_end_matches('/').to_string();
    }
    if let Some(url) = file.anthropic_api_url {
        config.anthropic_api_url = url;
    }
    if let Some(model) = file.model {
        config.model = model;
    }
    if let Some(max_tokens) = file.max_tokens {
        config.max_tokens = max_tokens;
    }
    if let Some(timeout) = file.request_timeout_secs {
        config.request_timeout_secs = timeout;
    }
    if let Some(limits) = file.limits {
        config.limits = limits;
    }

    Ok(config)
}

/// Empty values count as unset.
fn apply_env(config: &mut Config, lookup: impl Fn(&str) -> Option<String>) {
    let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

    if let Some(token) = non_empty(GITHUB_TOKEN_ENV) {
        config.github_token = Some(token);
    }
    if let Some(key) = non_empty(ANTHROPIC_API_KEY_ENV) {
        config.anthropic_api_key = Some(key);
    }
    if let Some(bind) = non_empty(BIND_ENV) {
        config.bind_address = bind;
    }
}
