// SPDX-License-Identifier: MPL-2.0
//! User settings stored in `settings.toml`.
//!
//! ```toml
//! [general]         # language, theme
//! [notifications]   # display_secs
//! [contact]         # min_message_length, send_delay_ms
//! [resume]          # download_dir
//! ```
//!
//! Every key is optional. The application only ever writes `theme` back;
//! saving serializes the whole struct so hand-edited values survive.
//!
//! The file lives in the directory picked by
//! [`paths::get_app_config_dir_with_override`](crate::app::paths); tests pass
//! an explicit directory to [`load_with_override`] and [`save_with_override`].

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Name of the settings file inside the config directory.
pub const CONFIG_FILE: &str = "settings.toml";

/// Fluent key shown when an existing settings file cannot be read.
const LOAD_ERROR_KEY: &str = "notification-config-load-error";

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Persisted theme flag.
    #[serde(default, deserialize_with = "deserialize_theme")]
    pub theme: ThemeMode,
}

/// Notification presenter settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NotificationConfig {
    /// How long a notification stays visible (seconds).
    #[serde(
        default = "default_display_secs",
        skip_serializing_if = "Option::is_none"
    )]
    pub display_secs: Option<u64>,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            display_secs: default_display_secs(),
        }
    }
}

/// Contact form settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContactConfig {
    /// Minimum trimmed message length; `0` disables the rule.
    #[serde(
        default = "default_min_message_length",
        skip_serializing_if = "Option::is_none"
    )]
    pub min_message_length: Option<usize>,

    /// Simulated submission latency (milliseconds).
    #[serde(
        default = "default_send_delay_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub send_delay_ms: Option<u64>,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            min_message_length: default_min_message_length(),
            send_delay_ms: default_send_delay_ms(),
        }
    }
}

/// Résumé download settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ResumeConfig {
    /// Directory the résumé is written into.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub download_dir: Option<PathBuf>,
}

/// The whole settings file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    /// General application settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Notification presenter settings.
    #[serde(default)]
    pub notifications: NotificationConfig,

    /// Contact form settings.
    #[serde(default)]
    pub contact: ContactConfig,

    /// Résumé download settings.
    #[serde(default)]
    pub resume: ResumeConfig,
}

impl Config {
    /// Notification display duration, clamped to the supported range.
    #[must_use]
    pub fn notification_display(&self) -> Duration {
        let secs = self
            .notifications
            .display_secs
            .unwrap_or(DEFAULT_NOTIFICATION_DISPLAY_SECS)
            .clamp(MIN_NOTIFICATION_DISPLAY_SECS, MAX_NOTIFICATION_DISPLAY_SECS);
        Duration::from_secs(secs)
    }

    /// Simulated contact submission latency, clamped to the supported range.
    #[must_use]
    pub fn send_delay(&self) -> Duration {
        let ms = self
            .contact
            .send_delay_ms
            .unwrap_or(DEFAULT_SEND_DELAY_MS)
            .clamp(MIN_SEND_DELAY_MS, MAX_SEND_DELAY_MS);
        Duration::from_millis(ms)
    }

    /// Minimum message length, or `None` when the rule is disabled.
    #[must_use]
    pub fn min_message_length(&self) -> Option<usize> {
        match self
            .contact
            .min_message_length
            .unwrap_or(DEFAULT_MIN_MESSAGE_LENGTH)
        {
            0 => None,
            n => Some(n),
        }
    }
}

fn default_display_secs() -> Option<u64> {
    Some(DEFAULT_NOTIFICATION_DISPLAY_SECS)
}

fn default_min_message_length() -> Option<usize> {
    Some(DEFAULT_MIN_MESSAGE_LENGTH)
}

fn default_send_delay_ms() -> Option<u64> {
    Some(DEFAULT_SEND_DELAY_MS)
}

/// Accepts `light`/`dark` in any case.
fn deserialize_theme<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    if raw.eq_ignore_ascii_case(ThemeMode::Light.as_str()) {
        Ok(ThemeMode::Light)
    } else if raw.eq_ignore_ascii_case(ThemeMode::Dark.as_str()) {
        Ok(ThemeMode::Dark)
    } else {
        Err(serde::de::Error::custom(format!(
            "theme must be \"light\" or \"dark\", got \"{raw}\""
        )))
    }
}

fn settings_path(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|dir| dir.join(CONFIG_FILE))
}

/// Reads the settings, falling back to defaults.
///
/// A missing file is normal on first launch and yields no warning. A file
/// that exists but cannot be read or parsed yields defaults plus the Fluent
/// key of an error notification.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    let Some(path) = settings_path(base_dir).filter(|path| path.exists()) else {
        return (Config::default(), None);
    };

    match load_from_path(&path) {
        Ok(config) => {
            tracing::debug!(path = %path.display(), "settings loaded");
            (config, None)
        }
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "ignoring unreadable settings");
            (Config::default(), Some(LOAD_ERROR_KEY.to_string()))
        }
    }
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let text = fs::read_to_string(path)?;
    Ok(toml::from_str(&text)?)
}

/// Writes the settings, creating the config directory if needed.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    let path = settings_path(base_dir)
        .ok_or_else(|| Error::Config("no config directory available".to_string()))?;
    save_to_path(config, &path)
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    fs::write(path, toml::to_string_pretty(config)?)?;
    tracing::debug!(path = %path.display(), "settings saved");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn default_theme_is_light() {
        assert_eq!(Config::default().general.theme, ThemeMode::Light);
    }

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            general: GeneralConfig {
                language: Some("fr".to_string()),
                theme: ThemeMode::Dark,
            },
            notifications: NotificationConfig {
                display_secs: Some(8),
            },
            contact: ContactConfig {
                min_message_length: Some(0),
                send_delay_ms: Some(1500),
            },
            resume: ResumeConfig {
                download_dir: Some(PathBuf::from("/tmp/resumes")),
            },
        };
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("nested").join(CONFIG_FILE);

        save_to_path(&config, &path).expect("save");
        let loaded = load_from_path(&path).expect("load");

        assert_eq!(loaded, config);
    }

    #[test]
    fn theme_is_written_as_lowercase_string() {
        let dir = tempdir().expect("temp dir");
        let mut config = Config::default();
        config.general.theme = ThemeMode::Dark;

        save_with_override(&config, Some(dir.path().to_path_buf())).expect("save");
        let text = fs::read_to_string(dir.path().join(CONFIG_FILE)).expect("read back");

        assert!(text.contains("theme = \"dark\""));
    }

    #[test]
    fn theme_parsing_is_case_insensitive() {
        let config: Config = toml::from_str("[general]\ntheme = \"DARK\"\n").expect("valid toml");
        assert_eq!(config.general.theme, ThemeMode::Dark);
    }

    #[test]
    fn unknown_theme_is_rejected() {
        let result = toml::from_str::<Config>("[general]\ntheme = \"sepia\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn missing_sections_use_defaults() {
        let config: Config = toml::from_str("").expect("empty toml is valid");
        assert_eq!(config, Config::default());
        assert_eq!(config.min_message_length(), Some(DEFAULT_MIN_MESSAGE_LENGTH));
    }

    #[test]
    fn malformed_file_is_a_config_error() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "theme = = dark").expect("write");

        assert!(matches!(load_from_path(&path), Err(Error::Config(_))));
    }

    #[test]
    fn corrupt_file_falls_back_with_warning() {
        let dir = tempdir().expect("temp dir");
        fs::write(dir.path().join(CONFIG_FILE), "[general\n").expect("write");

        let (config, warning) = load_with_override(Some(dir.path().to_path_buf()));

        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some(LOAD_ERROR_KEY));
    }

    #[test]
    fn first_launch_is_silent() {
        let dir = tempdir().expect("temp dir");
        let (config, warning) = load_with_override(Some(dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn durations_are_clamped() {
        let mut config = Config::default();
        config.notifications.display_secs = Some(0);
        config.contact.send_delay_ms = Some(10_000);

        assert_eq!(
            config.notification_display(),
            Duration::from_secs(MIN_NOTIFICATION_DISPLAY_SECS)
        );
        assert_eq!(
            config.send_delay(),
            Duration::from_millis(MAX_SEND_DELAY_MS)
        );
    }

    #[test]
    fn zero_min_message_length_disables_rule() {
        let mut config = Config::default();
        config.contact.min_message_length = Some(0);
        assert_eq!(config.min_message_length(), None);
    }
}
