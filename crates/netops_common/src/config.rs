//! NetOps configuration
//!
//! Optional TOML file. Every field has a default, so a missing file, a
//! missing section or a missing key all mean "use the built-in value".
//!
//! Lookup order:
//! 1. Explicit path (`--config`)
//! 2. `$NETOPS_CONFIG`
//! 3. `<config dir>/netops/config.toml` (e.g. ~/.config/netops/config.toml)
//! 4. Defaults

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::error::{read_text, NetopsError};
use crate::suggest::Topology;

/// Environment variable naming an explicit config file
pub const CONFIG_ENV: &str = "NETOPS_CONFIG";

/// Bounds for the status-update cadence, in minutes
pub const MIN_UPDATE_MINUTES: u32 = 5;
pub const MAX_UPDATE_MINUTES: u32 = 240;

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogConfig {
    /// Default filter when neither NETOPS_LOG nor -v is given
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

/// Offline triage settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriageSettings {
    /// Promised interval in the drafted status update
    #[serde(default = "default_next_update_minutes")]
    pub next_update_minutes: u32,
}

fn default_next_update_minutes() -> u32 {
    30
}

impl Default for TriageSettings {
    fn default() -> Self {
        Self {
            next_update_minutes: default_next_update_minutes(),
        }
    }
}

impl TriageSettings {
    /// Configured cadence clamped to a sane range
    pub fn effective_minutes(&self) -> u32 {
        self.next_update_minutes
            .clamp(MIN_UPDATE_MINUTES, MAX_UPDATE_MINUTES)
    }
}

/// Redaction defaults for text that leaves the machine
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedactSettings {
    /// Redact pasted evidence in prompts and analysis unless overridden
    #[serde(default)]
    pub evidence: bool,
}

/// Main configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetopsConfig {
    #[serde(default)]
    pub log: LogConfig,

    /// Platform legend printed in suggestions
    #[serde(default)]
    pub topology: Topology,

    #[serde(default)]
    pub triage: TriageSettings,

    #[serde(default)]
    pub redact: RedactSettings,
}

impl NetopsConfig {
    /// Default per-user config path, if the platform has a config dir
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("netops").join("config.toml"))
    }

    /// Resolve which file to read. An explicit path wins, then the env var,
    /// then the per-user default.
    pub fn config_path(explicit: Option<&Path>) -> Option<PathBuf> {
        if let Some(path) = explicit {
            return Some(path.to_path_buf());
        }
        if let Some(path) = std::env::var_os(CONFIG_ENV).filter(|v| !v.is_empty()) {
            return Some(PathBuf::from(path));
        }
        Self::default_path()
    }

    /// Parse TOML text
    pub fn from_toml(contents: &str, origin: &Path) -> Result<Self, NetopsError> {
        toml::from_str(contents).map_err(|source| NetopsError::ConfigParse {
            path: origin.to_path_buf(),
            source,
        })
    }

    /// Load a specific file. Errors if it is missing or malformed.
    pub fn load_from(path: &Path) -> Result<Self, NetopsError> {
        let contents = read_text(path)?;
        let config = Self::from_toml(&contents, path)?;
        debug!(path = %path.display(), "config loaded");
        Ok(config)
    }

    /// Load following the lookup order.
    ///
    /// An explicitly named file must exist and parse. The implicit per-user
    /// file is optional; a broken one is reported and defaults are used.
    pub fn load(explicit: Option<&Path>) -> Result<Self, NetopsError> {
        let named =
            explicit.is_some() || std::env::var_os(CONFIG_ENV).is_some_and(|v| !v.is_empty());

        let Some(path) = Self::config_path(explicit) else {
            return Ok(Self::default());
        };

        if named {
            return Self::load_from(&path);
        }

        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        match Self::load_from(&path) {
            Ok(config) => Ok(config),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "ignoring unreadable config");
                Ok(Self::default())
            }
        }
    }

    pub fn to_toml(&self) -> Result<String, NetopsError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Write this config, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<(), NetopsError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, self.to_toml()?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = NetopsConfig::default();
        assert_eq!(config.log.level, "warn");
        assert_eq!(config.triage.next_update_minutes, 30);
        assert!(!config.redact.evidence);
        assert_eq!(config.topology, Topology::default());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let config =
            NetopsConfig::from_toml("[triage]\nnext_update_minutes = 15\n", Path::new("x.toml"))
                .unwrap();
        assert_eq!(config.triage.next_update_minutes, 15);
        assert_eq!(config.log.level, "warn");
        assert_eq!(config.topology.core, "Nexus 9000 (NX-OS)");
    }

    #[test]
    fn test_effective_minutes_clamped() {
        let mut settings = TriageSettings::default();
        assert_eq!(settings.effective_minutes(), 30);
        settings.next_update_minutes = 0;
        assert_eq!(settings.effective_minutes(), MIN_UPDATE_MINUTES);
        settings.next_update_minutes = 10_000;
        assert_eq!(settings.effective_minutes(), MAX_UPDATE_MINUTES);
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = NetopsConfig::default();
        config.topology.access = "Catalyst 9200 (IOS-XE)".to_string();
        config.redact.evidence = true;
        config.save_to(&path).unwrap();

        let loaded = NetopsConfig::load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_explicit_missing_file_is_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("absent.toml");
        let err = NetopsConfig::load(Some(path.as_path())).unwrap_err();
        assert_eq!(err.code(), "read");
    }

    #[test]
    fn test_malformed_file_reports_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.toml");
        fs::write(&path, "[triage\nnext_update_minutes = ").unwrap();
        let err = NetopsConfig::load_from(&path).unwrap_err();
        assert_eq!(err.code(), "config_parse");
        assert!(err.to_string().contains("bad.toml"));
    }
}
