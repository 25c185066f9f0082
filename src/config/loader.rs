//! Configuration file loading with precedence handling.

use crate::state::DEFAULT_PAGE_SIZE;
use serde::Deserialize;
use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Catalog endpoint used when nothing else is configured.
pub const DEFAULT_ENDPOINT: &str = "https://api.pokemontcg.io/v2/cards";

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "CARDEX_CONFIG";

/// Environment variable overriding the catalog endpoint.
pub const ENDPOINT_ENV_VAR: &str = "CARDEX_ENDPOINT";

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read config file (permission issues, not a file, ...).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax or unknown keys.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },

    /// A value parsed but is out of range.
    #[error("Invalid value for `{key}`: {reason}")]
    InvalidValue {
        /// Config key holding the bad value.
        key: &'static str,
        /// Why it was rejected.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/cardex/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Catalog endpoint URL.
    #[serde(default)]
    pub endpoint: Option<String>,

    /// Results per page. Zero is rejected during merge.
    #[serde(default)]
    pub page_size: Option<usize>,

    /// Timeout for the catalog request, in seconds.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub endpoint: String,
    pub page_size: NonZeroUsize,
    /// `None` waits for the server indefinitely.
    pub request_timeout: Option<Duration>,
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            request_timeout: None,
            log_file_path: default_log_path(),
        }
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/cardex/cardex.log` on Linux, the platform
/// equivalent elsewhere, or `cardex.log` in the current directory when no
/// state directory exists (macOS, Windows).
pub fn default_log_path() -> PathBuf {
    match dirs::state_dir() {
        Some(state_dir) => state_dir.join("cardex").join("cardex.log"),
        None => PathBuf::from("cardex.log"),
    }
}

/// Resolve default config file path.
///
/// Returns `None` if the config directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("cardex").join("config.toml"))
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
///
/// # Errors
///
/// Returns error if file exists but has read or parse errors.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `CARDEX_CONFIG` environment variable
/// 3. Default path `~/.config/cardex/config.toml`
///
/// Missing config files are NOT errors - defaults are used.
///
/// # Errors
///
/// Returns error only if a config file exists but cannot be read or parsed.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var(CONFIG_ENV_VAR) {
        return load_config_file(PathBuf::from(env_path));
    }

    match default_config_path() {
        Some(default_path) => load_config_file(default_path),
        None => Ok(None),
    }
}

/// Merge config file into defaults to create resolved config.
///
/// For each field in `ConfigFile`, if `Some(value)`, use it; otherwise use default.
///
/// # Errors
///
/// Returns `ConfigError::InvalidValue` for `page_size = 0`.
pub fn merge_config(config_file: Option<ConfigFile>) -> Result<ResolvedConfig, ConfigError> {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return Ok(defaults);
    };

    let page_size = match config.page_size {
        Some(size) => NonZeroUsize::new(size).ok_or(ConfigError::InvalidValue {
            key: "page_size",
            reason: "must be at least 1".to_string(),
        })?,
        None => defaults.page_size,
    };

    Ok(ResolvedConfig {
        endpoint: config.endpoint.unwrap_or(defaults.endpoint),
        page_size,
        request_timeout: config
            .request_timeout_secs
            .map(Duration::from_secs)
            .or(defaults.request_timeout),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
    })
}

/// Apply environment variable overrides to resolved config.
///
/// Checks `CARDEX_ENDPOINT`. An empty value is ignored.
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Ok(endpoint) = std::env::var(ENDPOINT_ENV_VAR) {
        if !endpoint.trim().is_empty() {
            config.endpoint = endpoint;
        }
    }

    config
}

/// Apply CLI argument overrides to resolved config.
///
/// CLI args have the highest precedence and override all other sources.
/// Only flags the user actually passed are applied.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    endpoint_override: Option<String>,
    page_size_override: Option<NonZeroUsize>,
) -> ResolvedConfig {
    if let Some(endpoint) = endpoint_override {
        config.endpoint = endpoint;
    }

    if let Some(page_size) = page_size_override {
        config.page_size = page_size;
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
