//! Shared config utilities for loading/saving JSON config files, plus the
//! engine's own settings.

use crate::error::ConfigError;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::net::{SocketAddr, ToSocketAddrs};
use std::path::Path;

pub const DEFAULT_CONFIG_FILE: &str = "emotion_engine.json";
/// Log tag for the engine config file.
pub const CONFIG_LABEL: &str = "Config";

/// How a config value was obtained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    Loaded,
    Missing,
    /// The file exists but did not parse; holds the parser message.
    Invalid(String),
}

impl ConfigSource {
    /// Report the outcome through `tracing`. Invalid files warn.
    pub fn log(&self, label: &str, path: &Path) {
        match self {
            ConfigSource::Loaded => {
                tracing::info!("[{}] Loaded config from {}", label, path.display());
            }
            ConfigSource::Missing => {
                tracing::info!(
                    "[{}] No config file at {}, using defaults",
                    label,
                    path.display()
                );
            }
            ConfigSource::Invalid(e) => {
                tracing::warn!(
                    "[{}] Failed to parse config {}: {}, using defaults",
                    label,
                    path.display(),
                    e
                );
            }
        }
    }
}

/// Load without logging, returning the fallback reason alongside the value.
/// Falls back to `T::default()` if the file is missing or unparsable.
pub fn read_json_config<T: DeserializeOwned + Default>(path: &Path) -> (T, ConfigSource) {
    match std::fs::read_to_string(path) {
        Ok(content) => match serde_json::from_str::<T>(&content) {
            Ok(config) => (config, ConfigSource::Loaded),
            Err(e) => (T::default(), ConfigSource::Invalid(e.to_string())),
        },
        Err(_) => (T::default(), ConfigSource::Missing),
    }
}

/// Generic load for any Serde config type with a `Default` implementation.
/// Falls back to `T::default()` if the file is missing or unparsable.
pub fn load_json_config<T: DeserializeOwned + Default>(path: &Path, label: &str) -> T {
    let (config, source) = read_json_config(path);
    source.log(label, path);
    config
}

/// Generic save for any Serde config type.
pub fn save_json_config<T: Serialize>(
    path: &Path,
    config: &T,
    label: &str,
) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let json =
        serde_json::to_string_pretty(config).map_err(|e| ConfigError::Serialize(e.to_string()))?;
    std::fs::write(path, json)?;
    tracing::info!("[{}] Saved config to {}", label, path.display());
    Ok(())
}

// ── Engine config ──────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Interface the HTTP server binds to.
    pub host: String,
    /// HTTP port.
    pub port: u16,
    /// `tracing` filter directive, e.g. "info" or "emotion_engine_lib=debug".
    /// `RUST_LOG` takes precedence when set.
    pub log_filter: Option<String>,
    /// Print the console greeting before the first prompt.
    pub show_banner: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5000,
            log_filter: None,
            show_banner: true,
        }
    }
}

impl EngineConfig {
    /// Resolve `host:port` to the first matching socket address.
    /// Hostnames such as "localhost" are looked up.
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let invalid = |reason: String| {
            ConfigError::Parse(format!(
                "invalid bind address {}:{}: {}",
                self.host, self.port, reason
            ))
        };
        (self.host.as_str(), self.port)
            .to_socket_addrs()
            .map_err(|e| invalid(e.to_string()))?
            .next()
            .ok_or_else(|| invalid("no addresses resolved".to_string()))
    }
}

pub fn load_config(path: &Path) -> EngineConfig {
    load_json_config(path, CONFIG_LABEL)
}

/// Like `load_config`, but leaves reporting to the caller. Used at startup,
/// before the log subscriber exists.
pub fn read_config(path: &Path) -> (EngineConfig, ConfigSource) {
    read_json_config(path)
}

pub fn save_config(path: &Path, config: &EngineConfig) -> Result<(), ConfigError> {
    save_json_config(path, config, CONFIG_LABEL)
}
