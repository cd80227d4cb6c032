// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, read once at startup
//! from a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and initial theme mode
//! - `[window]` - Initial window size
//!
//! The file is never written back: toggling the theme at runtime only lasts
//! for the current session.
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()` with an explicit path
//! 2. `--config-dir` on the command line
//! 3. Set `PORTFOLIO_CONFIG_DIR` environment variable
//! 4. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use portfolio::app::config;
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (config, warning) = config::load();
//! if let Some(message) = warning {
//!     eprintln!("{message}");
//! }
//! println!("theme: {}", config.general.theme_mode);
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Theme at startup (light, dark, or system).
    #[serde(default, deserialize_with = "deserialize_theme_mode")]
    pub theme_mode: ThemeMode,
}

/// Initial window geometry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WindowConfig {
    #[serde(default = "default_window_width")]
    pub width: u32,

    #[serde(default = "default_window_height")]
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WINDOW_WIDTH,
            height: DEFAULT_WINDOW_HEIGHT,
        }
    }
}

impl WindowConfig {
    /// Size clamped to what the layout supports.
    #[must_use]
    pub fn clamped_size(&self) -> (u32, u32) {
        (
            self.width.clamp(MIN_WINDOW_WIDTH, MAX_WINDOW_DIMENSION),
            self.height.clamp(MIN_WINDOW_HEIGHT, MAX_WINDOW_DIMENSION),
        )
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub window: WindowConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_window_width() -> u32 {
    DEFAULT_WINDOW_WIDTH
}

fn default_window_height() -> u32 {
    DEFAULT_WINDOW_HEIGHT
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    raw.parse().map_err(D::Error::custom)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config file path with an optional override.
fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). A missing file is not an
/// error. If the file exists but cannot be read, returns the default config
/// with a warning explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    let Some(path) = get_config_path_with_override(base_dir) else {
        return (Config::default(), None);
    };
    if !path.exists() {
        tracing::debug!("No config file at {}, using defaults", path.display());
        return (Config::default(), None);
    }

    match load_from_path(&path) {
        Ok(config) => {
            tracing::info!("Loaded config from {}", path.display());
            (config, None)
        }
        Err(err) => (
            Config::default(),
            Some(format!("Ignoring {}: {}", path.display(), err)),
        ),
    }
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;

    if let Some(lang) = &config.general.language {
        if lang.trim().is_empty() {
            return Err(Error::Config("general.language must not be empty".into()));
        }
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn write_config(dir: &Path, content: &str) {
        fs::write(dir.join(CONFIG_FILE), content).expect("write config");
    }

    #[test]
    fn default_config_uses_system_theme() {
        let config = Config::default();
        assert_eq!(config.general.theme_mode, ThemeMode::System);
        assert_eq!(config.general.language, None);
        assert_eq!(config.window.width, DEFAULT_WINDOW_WIDTH);
    }

    #[test]
    fn load_from_path_reads_sections() {
        let dir = tempdir().expect("temp dir");
        write_config(
            dir.path(),
            r#"
[general]
language = "fr"
theme_mode = "Dark"

[window]
width = 500
"#,
        );

        let config = load_from_path(&dir.path().join(CONFIG_FILE)).expect("valid config");
        assert_eq!(config.general.language.as_deref(), Some("fr"));
        assert_eq!(config.general.theme_mode, ThemeMode::Dark);
        assert_eq!(config.window.width, 500);
        assert_eq!(config.window.height, DEFAULT_WINDOW_HEIGHT);
    }

    #[test]
    fn empty_file_yields_defaults() {
        let dir = tempdir().expect("temp dir");
        write_config(dir.path(), "");
        let config = load_from_path(&dir.path().join(CONFIG_FILE)).expect("empty is valid");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn invalid_theme_mode_is_rejected() {
        let dir = tempdir().expect("temp dir");
        write_config(dir.path(), "[general]\ntheme_mode = \"sepia\"\n");
        let err = load_from_path(&dir.path().join(CONFIG_FILE)).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn blank_language_is_rejected() {
        let dir = tempdir().expect("temp dir");
        write_config(dir.path(), "[general]\nlanguage = \"  \"\n");
        let err = load_from_path(&dir.path().join(CONFIG_FILE)).unwrap_err();
        assert!(err.to_string().contains("language"));
    }

    #[test]
    fn load_with_override_missing_file_is_silent() {
        let dir = tempdir().expect("temp dir");
        let (config, warning) = load_with_override(Some(dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn load_with_override_invalid_file_warns_and_falls_back() {
        let dir = tempdir().expect("temp dir");
        write_config(dir.path(), "[general\n");
        let (config, warning) = load_with_override(Some(dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.expect("warning").contains(CONFIG_FILE));
    }

    #[test]
    fn window_size_is_clamped() {
        let window = WindowConfig {
            width: 10,
            height: 100_000,
        };
        assert_eq!(
            window.clamped_size(),
            (MIN_WINDOW_WIDTH, MAX_WINDOW_DIMENSION)
        );
    }
}
