//! Configuration loading and management.
//!
//! Lookup order for the config file:
//! 1. `SHORTCUT_SHARE_CONFIG_PATH`
//! 2. `./shortcut-share.yaml`
//! 3. `<user config dir>/shortcut-share/config.yaml`
//!
//! Environment variables are applied on top of whatever was loaded:
//! - `SHORTCUT_SHARE_ALLOW_CONDITIONS`
//! - `SHORTCUT_SHARE_ALLOW_HOTKEYS`
//! - `SHORTCUT_SHARE_ALLOW_SENSITIVE_EXPORT`

use crate::codec::ExportMode;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub const ENV_CONFIG_PATH: &str = "SHORTCUT_SHARE_CONFIG_PATH";
pub const ENV_ALLOW_CONDITIONS: &str = "SHORTCUT_SHARE_ALLOW_CONDITIONS";
pub const ENV_ALLOW_HOTKEYS: &str = "SHORTCUT_SHARE_ALLOW_HOTKEYS";
pub const ENV_ALLOW_SENSITIVE_EXPORT: &str = "SHORTCUT_SHARE_ALLOW_SENSITIVE_EXPORT";

const PROJECT_CONFIG_FILE: &str = "shortcut-share.yaml";

/// Caller-controlled switches for sensitive data.
///
/// All default to `false`: imports strip conditions and hotkeys, and condition
/// sets that identify the player are not exported.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SharePolicy {
    /// Keep the condition set reference of imported bars.
    pub allow_import_conditions: bool,
    /// Keep hotkeys (and pie hotkeys) of imported bars and shortcuts.
    pub allow_import_hotkeys: bool,
    /// Allow exporting condition sets with player-identifying conditions.
    pub allow_export_sensitive_condition_sets: bool,
}

impl SharePolicy {
    /// Everything allowed. Useful for backups restored on the same machine.
    pub fn permissive() -> Self {
        Self {
            allow_import_conditions: true,
            allow_import_hotkeys: true,
            allow_export_sensitive_condition_sets: true,
        }
    }
}

/// Export defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    pub mode: ExportMode,
}

/// Tool configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub sharing: SharePolicy,

    #[serde(default)]
    pub export: ExportConfig,
}

impl Config {
    /// Load configuration from file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Config = serde_yaml::from_str(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        Ok(config)
    }

    /// First existing config file in lookup order.
    pub fn discover_path() -> Option<PathBuf> {
        if let Ok(path) = std::env::var(ENV_CONFIG_PATH) {
            return Some(PathBuf::from(path));
        }

        let project = PathBuf::from(PROJECT_CONFIG_FILE);
        if project.exists() {
            return Some(project);
        }

        dirs::config_dir()
            .map(|dir| dir.join("shortcut-share").join("config.yaml"))
            .filter(|path| path.exists())
    }

    /// Load from `explicit` or the discovered path, falling back to defaults,
    /// then apply environment overrides.
    pub fn load_or_default(explicit: Option<&Path>) -> Result<Self> {
        let mut config = match explicit {
            // An explicitly requested file must load.
            Some(path) => Self::load(path)?,
            None => match Self::discover_path() {
                Some(path) => match Self::load(&path) {
                    Ok(config) => {
                        debug!(path = %path.display(), "Loaded config");
                        config
                    }
                    Err(e) => {
                        warn!(path = %path.display(), error = %e, "Ignoring unreadable config");
                        Self::default()
                    }
                },
                None => Self::default(),
            },
        };

        config.apply_overrides_from(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Apply overrides from a variable lookup (the process environment in
    /// production).
    pub fn apply_overrides_from<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let flags = [
            (ENV_ALLOW_CONDITIONS, &mut self.sharing.allow_import_conditions),
            (ENV_ALLOW_HOTKEYS, &mut self.sharing.allow_import_hotkeys),
            (
                ENV_ALLOW_SENSITIVE_EXPORT,
                &mut self.sharing.allow_export_sensitive_condition_sets,
            ),
        ];

        for (key, flag) in flags {
            let Some(raw) = lookup(key) else {
                continue;
            };
            match parse_flag(&raw) {
                Some(value) => *flag = value,
                None => warn!(key, value = %raw, "Ignoring non-boolean override"),
            }
        }
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults_are_restrictive() {
        let config = Config::default();
        assert!(!config.sharing.allow_import_conditions);
        assert!(!config.sharing.allow_import_hotkeys);
        assert!(!config.sharing.allow_export_sensitive_condition_sets);
        assert_eq!(config.export.mode, ExportMode::Compact);
    }

    #[test]
    fn test_partial_yaml() {
        let config: Config = serde_yaml::from_str("sharing:\n  allow_import_hotkeys: true\n").unwrap();
        assert!(config.sharing.allow_import_hotkeys);
        assert!(!config.sharing.allow_import_conditions);
        assert_eq!(config.export.mode, ExportMode::Compact);

        let config: Config = serde_yaml::from_str("export:\n  mode: full\n").unwrap();
        assert_eq!(config.export.mode, ExportMode::Full);
    }

    #[test]
    fn test_overrides() {
        let env: HashMap<&str, &str> = HashMap::from([
            (ENV_ALLOW_CONDITIONS, "yes"),
            (ENV_ALLOW_HOTKEYS, "maybe"),
            (ENV_ALLOW_SENSITIVE_EXPORT, "1"),
        ]);
        let mut config = Config::default();
        config.apply_overrides_from(|key| env.get(key).map(|v| v.to_string()));

        assert!(config.sharing.allow_import_conditions);
        // Unparseable values leave the setting alone.
        assert!(!config.sharing.allow_import_hotkeys);
        assert!(config.sharing.allow_export_sensitive_condition_sets);
    }

    #[test]
    fn test_parse_flag() {
        assert_eq!(parse_flag(" TRUE "), Some(true));
        assert_eq!(parse_flag("off"), Some(false));
        assert_eq!(parse_flag(""), None);
    }

    #[test]
    fn test_permissive_policy() {
        let policy = SharePolicy::permissive();
        assert!(policy.allow_import_conditions);
        assert!(policy.allow_import_hotkeys);
        assert!(policy.allow_export_sensitive_condition_sets);
    }
}
