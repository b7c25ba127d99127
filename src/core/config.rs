//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.askpage/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::core::state::{DEFAULT_FOOTER, DEFAULT_TITLE};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct AskpageConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub page: PageConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ApiConfig {
    pub base_url: Option<String>,
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct PageConfig {
    pub title: Option<String>,
    pub footer: Option<String>,
}

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000";

pub const ENV_API_URL: &str = "ASKPAGE_API_URL";
pub const ENV_TIMEOUT_SECS: &str = "ASKPAGE_TIMEOUT_SECS";

// ============================================================================
// Resolved Config (concrete values)
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub api_base_url: String,
    /// Per-request timeout inside the HTTP client. `None` waits forever.
    pub timeout: Option<Duration>,
    pub title: String,
    pub footer: String,
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.askpage/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".askpage").join("config.toml"))
}

/// Load config from `~/.askpage/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `AskpageConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<AskpageConfig, ConfigError> {
    match config_path() {
        Some(path) => load_config_from(&path),
        None => {
            warn!("Could not determine home directory, using default config");
            Ok(AskpageConfig::default())
        }
    }
}

pub fn load_config_from(path: &Path) -> Result<AskpageConfig, ConfigError> {
    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(path);
        return Ok(AskpageConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: AskpageConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

fn generate_default_config(path: &Path) {
    let default_content = r#"# askpage configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [api]
# base_url = "http://localhost:5000"   # Or set ASKPAGE_API_URL
# timeout_secs = 30                    # Or set ASKPAGE_TIMEOUT_SECS; 0 or unset waits forever

# [page]
# title = "askpage"
# footer = "Answers come from a remote service and may be wrong."
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config against the process environment.
///
/// `cli_api_url` is from the `--api-url` flag (None = not specified).
pub fn resolve(config: &AskpageConfig, cli_api_url: Option<&str>) -> ResolvedConfig {
    resolve_with_env(config, cli_api_url, |key| std::env::var(key).ok())
}

/// Same as [`resolve`] with the environment lookup injected.
pub fn resolve_with_env(
    config: &AskpageConfig,
    cli_api_url: Option<&str>,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    // Base URL: CLI → env → config → default
    let api_base_url = cli_api_url
        .map(|s| s.to_string())
        .or_else(|| env(ENV_API_URL))
        .or_else(|| config.api.base_url.clone())
        .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());

    // Timeout: env → config; zero disables it
    let timeout_secs = env(ENV_TIMEOUT_SECS)
        .and_then(|raw| match raw.trim().parse::<u64>() {
            Ok(secs) => Some(secs),
            Err(e) => {
                warn!("Ignoring {}={:?}: {}", ENV_TIMEOUT_SECS, raw, e);
                None
            }
        })
        .or(config.api.timeout_secs);
    let timeout = timeout_secs
        .filter(|secs| *secs > 0)
        .map(Duration::from_secs);

    ResolvedConfig {
        api_base_url,
        timeout,
        title: config
            .page
            .title
            .clone()
            .unwrap_or_else(|| DEFAULT_TITLE.to_string()),
        footer: config
            .page
            .footer
            .clone()
            .unwrap_or_else(|| DEFAULT_FOOTER.to_string()),
    }
}
