//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.taskdeck/config.toml`. A missing file is not an
//! error; the defaults plus env/CLI values are used instead.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::fs;
use std::path::PathBuf;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct TaskdeckConfig {
    #[serde(default)]
    pub api: ApiConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ApiConfig {
    pub token: Option<String>,
    pub base_url: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_BASE_URL: &str = "https://api.todoist.com/rest/v2";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub token: String,
    pub base_url: String,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    MissingToken,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
            ConfigError::MissingToken => write!(
                f,
                "no API token: set --token, TASKDECK_TOKEN, or api.token in ~/.taskdeck/config.toml"
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.taskdeck/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".taskdeck").join("config.toml"))
}

/// Load config from `~/.taskdeck/config.toml`, or the defaults when the
/// file does not exist. A malformed file is a `ConfigError::Parse`.
pub fn load_config() -> Result<TaskdeckConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(TaskdeckConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file at {}, using defaults", path.display());
        return Ok(TaskdeckConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config: TaskdeckConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Apply the override hierarchy on top of the file config.
///
/// CLI flags win over env vars, which win over the config file, which
/// wins over the built-in defaults. The token has no default and is
/// required.
pub fn resolve(
    file: TaskdeckConfig,
    cli_token: Option<String>,
    cli_base_url: Option<String>,
) -> Result<ResolvedConfig, ConfigError> {
    let token = cli_token
        .or_else(|| env::var("TASKDECK_TOKEN").ok())
        .or(file.api.token)
        .ok_or(ConfigError::MissingToken)?;

    let base_url = cli_base_url
        .or_else(|| env::var("TASKDECK_BASE_URL").ok())
        .or(file.api.base_url)
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

    Ok(ResolvedConfig { token, base_url })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file_config(token: Option<&str>, base_url: Option<&str>) -> TaskdeckConfig {
        TaskdeckConfig {
            api: ApiConfig {
                token: token.map(str::to_string),
                base_url: base_url.map(str::to_string),
            },
        }
    }

    #[test]
    fn test_cli_token_wins_over_file() {
        let resolved = resolve(
            file_config(Some("file-token"), None),
            Some("cli-token".to_string()),
            None,
        )
        .unwrap();
        assert_eq!(resolved.token, "cli-token");
    }

    #[test]
    fn test_file_token_used_without_cli() {
        let resolved = resolve(file_config(Some("file-token"), None), None, None).unwrap();
        assert_eq!(resolved.token, "file-token");
    }

    #[test]
    fn test_missing_token_is_an_error() {
        let err = resolve(file_config(None, None), None, None).unwrap_err();
        assert!(matches!(err, ConfigError::MissingToken));
    }

    #[test]
    fn test_base_url_falls_back_to_default() {
        let resolved = resolve(file_config(Some("t"), None), None, None).unwrap();
        assert_eq!(resolved.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_sparse_toml_parses() {
        let config: TaskdeckConfig = toml::from_str("[api]\ntoken = \"abc\"\n").unwrap();
        assert_eq!(config.api.token.as_deref(), Some("abc"));
        assert!(config.api.base_url.is_none());
    }
}
