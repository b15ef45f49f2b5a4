//! Configuration I/O - Loading and saving configuration
//!
//! Handles reading configuration from files and environment variables.

use std::path::Path;

use super::types::Config;
use crate::error::{Error, Result};

/// A snapshot of the configuration file
#[derive(Debug, Clone)]
pub struct ConfigSnapshot {
    /// Path to the config file
    pub path: std::path::PathBuf,
    /// Whether the file exists
    pub exists: bool,
    /// Parsed configuration
    pub config: Option<Config>,
    /// Read/parse issues
    pub issues: Vec<String>,
}

/// Load configuration with layered precedence:
/// 1. Config file at `config_path` if it exists, otherwise defaults
/// 2. Environment variable overrides (includes .env)
pub fn load_config_at(config_path: &Path) -> Result<Config> {
    let mut config = if config_path.exists() {
        load_config_from_path(config_path)?
    } else {
        Config::default()
    };

    apply_env_overrides(&mut config);

    Ok(config)
}

/// Configuration for display: never fails on a broken config file.
///
/// Parse errors land in the snapshot's `issues` and the config falls back to
/// defaults plus environment overrides.
pub fn effective_config(config_path: &Path) -> (Config, ConfigSnapshot) {
    dotenvy::dotenv().ok();
    effective_config_from(config_path, |key| std::env::var(key).ok())
}

/// [`effective_config`] with an explicit environment-like source
pub fn effective_config_from(
    config_path: &Path,
    lookup: impl Fn(&str) -> Option<String>,
) -> (Config, ConfigSnapshot) {
    let snapshot = read_config_snapshot(config_path);
    let mut config = snapshot.config.clone().unwrap_or_default();
    apply_overrides_from(&mut config, lookup);
    (config, snapshot)
}

/// Load configuration from a specific path
pub fn load_config_from_path(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        Error::Config(format!("Failed to read config file {}: {}", path.display(), e))
    })?;

    // Detect format by extension
    let config: Config = if path.extension().is_some_and(|ext| ext == "json") {
        json5::from_str(&content).map_err(|e| Error::Config(format!("Invalid JSON config: {}", e)))?
    } else if path.extension().is_some_and(|ext| ext == "toml") {
        toml::from_str(&content).map_err(|e| Error::Config(format!("Invalid TOML config: {}", e)))?
    } else {
        // Try TOML first, then JSON5
        toml::from_str(&content)
            .map_err(|e| Error::Config(e.to_string()))
            .or_else(|_| json5::from_str(&content).map_err(|e| Error::Config(e.to_string())))
            .map_err(|e| Error::Config(format!("Failed to parse config: {}", e)))?
    };

    Ok(config)
}

/// Apply environment variable overrides to an existing config.
///
/// Loads `.env` first, then overlays any set variables. Env vars have the
/// highest precedence: defaults < file < env.
pub fn apply_env_overrides(config: &mut Config) {
    dotenvy::dotenv().ok();
    apply_overrides_from(config, |key| std::env::var(key).ok());
}

/// Overlay values from `lookup` (an environment-like source) onto `config`.
/// Unparseable numbers are ignored.
pub fn apply_overrides_from(config: &mut Config, lookup: impl Fn(&str) -> Option<String>) {
    // Model selection; the first variable set wins
    if let Some(model) = lookup("EQUIPDESK_MODEL").or_else(|| lookup("OLLAMA_MODEL")) {
        config.ollama.model = model;
    }
    if let Some(url) = lookup("OLLAMA_API_BASE_URL") {
        config.ollama.base_url = url;
    }

    // Agent overrides
    if let Some(v) = lookup("EQUIPDESK_TEMPERATURE").and_then(|v| v.parse().ok()) {
        config.agent.temperature = v;
    }
    if let Some(v) = lookup("EQUIPDESK_MAX_TURNS").and_then(|v| v.parse().ok()) {
        config.agent.max_turns = v;
    }

    // Server overrides
    if let Some(bind) = lookup("EQUIPDESK_BIND") {
        config.server.bind = bind;
    }
    if let Some(port) = lookup("EQUIPDESK_PORT").and_then(|v| v.parse().ok()) {
        config.server.port = port;
    }

    // Logging overrides
    if let Some(level) = lookup("RUST_LOG") {
        config.log.level = level;
    }
    if let Some(format) = lookup("LOG_FORMAT").and_then(|v| v.parse().ok()) {
        config.log.format = format;
    }
}

/// Save configuration to a file
pub fn save_config(config: &Config, path: &Path) -> Result<()> {
    let content = if path.extension().is_some_and(|ext| ext == "json") {
        serde_json::to_string_pretty(config)?
    } else {
        toml::to_string_pretty(config)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?
    };

    // Ensure parent directory exists
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    std::fs::write(path, content)?;
    Ok(())
}

/// Read a configuration file into a snapshot
pub fn read_config_snapshot(path: &Path) -> ConfigSnapshot {
    if !path.exists() {
        return ConfigSnapshot {
            path: path.to_path_buf(),
            exists: false,
            config: None,
            issues: vec!["Configuration file does not exist".to_string()],
        };
    }

    match load_config_from_path(path) {
        Ok(config) => ConfigSnapshot {
            path: path.to_path_buf(),
            exists: true,
            config: Some(config),
            issues: Vec::new(),
        },
        Err(e) => ConfigSnapshot {
            path: path.to_path_buf(),
            exists: true,
            config: None,
            issues: vec![e.to_string()],
        },
    }
}
