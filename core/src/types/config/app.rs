use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::types::app_id::NO_SHORTCUT;

/// User-facing settings, persisted as settings.toml.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    #[serde(default)]
    pub shortcuts: ShortcutsConfig,
    #[serde(default)]
    pub update: UpdateConfig,
}

impl AppConfig {
    /// Returns the config file path within the given data directory.
    pub fn path(data_dir: &Path) -> std::path::PathBuf {
        data_dir.join("settings.toml")
    }

    /// Loads config from a TOML file. Returns default config if file doesn't exist.
    pub fn load(path: &Path) -> Result<Self, AppConfigError> {
        if !path.exists() {
            tracing::debug!("no settings at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Saves config to a TOML file.
    pub fn save(&self, path: &Path) -> Result<(), AppConfigError> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validates config values and returns list of validation errors.
    /// Returns empty vec if config is valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.shortcuts.no_shortcut_label.trim().is_empty() {
            errors.push("no_shortcut_label must not be empty".to_string());
        }

        if self.update.channel_id.trim().is_empty() {
            errors.push("channel_id must not be empty".to_string());
        }

        if self.update.action_label.trim().is_empty() {
            errors.push("action_label must not be empty".to_string());
        }

        errors
    }

    /// Returns a validated config, replacing invalid values with defaults.
    pub fn with_defaults_for_invalid(&self) -> Self {
        let defaults = Self::default();
        let or_default = |value: &String, default: String| {
            if value.trim().is_empty() {
                default
            } else {
                value.clone()
            }
        };

        Self {
            shortcuts: ShortcutsConfig {
                no_shortcut_label: or_default(
                    &self.shortcuts.no_shortcut_label,
                    defaults.shortcuts.no_shortcut_label,
                ),
            },
            update: UpdateConfig {
                channel_id: or_default(&self.update.channel_id, defaults.update.channel_id),
                action_label: or_default(&self.update.action_label, defaults.update.action_label),
                ..self.update.clone()
            },
        }
    }
}

/// Shortcut selection screen settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ShortcutsConfig {
    #[serde(default = "default_no_shortcut_label")]
    pub no_shortcut_label: String,
}

impl Default for ShortcutsConfig {
    fn default() -> Self {
        Self {
            no_shortcut_label: default_no_shortcut_label(),
        }
    }
}

fn default_no_shortcut_label() -> String {
    NO_SHORTCUT.to_string()
}

/// Update notification settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UpdateConfig {
    #[serde(default = "default_channel_id")]
    pub channel_id: String,
    #[serde(default = "default_channel_description")]
    pub channel_description: String,
    #[serde(default = "default_notification_id")]
    pub notification_id: u32,
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_text")]
    pub text: String,
    #[serde(default = "default_action_label")]
    pub action_label: String,
    #[serde(default = "default_corrupted_message")]
    pub corrupted_message: String,
}

impl Default for UpdateConfig {
    fn default() -> Self {
        Self {
            channel_id: default_channel_id(),
            channel_description: default_channel_description(),
            notification_id: default_notification_id(),
            title: default_title(),
            text: default_text(),
            action_label: default_action_label(),
            corrupted_message: default_corrupted_message(),
        }
    }
}

fn default_channel_id() -> String {
    "UpdateNotification".to_string()
}

fn default_channel_description() -> String {
    "Update Notification channel.".to_string()
}

fn default_notification_id() -> u32 {
    0x201920
}

fn default_title() -> String {
    "Settings Update".to_string()
}

fn default_text() -> String {
    "Start Update".to_string()
}

fn default_action_label() -> String {
    "Update".to_string()
}

fn default_corrupted_message() -> String {
    "The package file seems to be corrupted!!\nPlease select another package file ...".to_string()
}

/// Errors that can occur when loading or saving config.
#[derive(Debug, Error)]
pub enum AppConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
}
