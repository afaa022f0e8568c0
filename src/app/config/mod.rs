// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, loading user
//! preferences from a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[search]` - Endpoint, category shortcuts, response ordering, stale results
//! - `[display]` - Thumbnail size and cache bounds, diagnostics capacity
//!
//! The API access key is never read from this file; see
//! [`crate::infrastructure::unsplash::credential_from_env`].
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with an explicit path
//! 2. Pass `--config-dir` on the command line
//! 3. Falls back to the platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_image_search::config;
//!
//! let (config, warning) = config::load();
//! if warning.is_none() {
//!     println!("{} categories", config.search.categories.len());
//! }
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
pub use crate::application::session::{ResponseOrdering, StaleResults};
use crate::application::session::SessionConfig;
use crate::diagnostics::BufferCapacity;
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

    /// Application theme mode (light, dark, or system).
    #[serde(default, deserialize_with = "deserialize_theme_mode")]
    pub theme_mode: ThemeMode,
}

/// Search behaviour.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchConfig {
    /// Labels of the category shortcut buttons, in display order.
    #[serde(default = "default_categories")]
    pub categories: Vec<String>,

    /// Search endpoint.
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Policy for overlapping in-flight requests.
    #[serde(default)]
    pub response_ordering: ResponseOrdering,

    /// Policy for results displayed before a new fetch completes.
    #[serde(default)]
    pub stale_results: StaleResults,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            categories: default_categories(),
            api_url: default_api_url(),
            response_ordering: ResponseOrdering::default(),
            stale_results: StaleResults::default(),
        }
    }
}

impl SearchConfig {
    /// Category labels with blanks and duplicates removed.
    #[must_use]
    pub fn category_labels(&self) -> Vec<String> {
        let mut labels: Vec<String> = Vec::with_capacity(self.categories.len());
        for label in &self.categories {
            let label = label.trim();
            if !label.is_empty() && !labels.iter().any(|l| l == label) {
                labels.push(label.to_string());
            }
        }
        labels
    }
}

/// Display settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DisplayConfig {
    /// Edge length of a grid tile in logical pixels.
    #[serde(
        default = "default_thumbnail_size",
        skip_serializing_if = "Option::is_none"
    )]
    pub thumbnail_size: Option<u32>,

    /// Number of decoded thumbnails kept in memory.
    #[serde(
        default = "default_thumbnail_cache_entries",
        skip_serializing_if = "Option::is_none"
    )]
    pub thumbnail_cache_entries: Option<usize>,

    /// Number of diagnostic events retained.
    #[serde(
        default = "default_diagnostics_capacity",
        skip_serializing_if = "Option::is_none"
    )]
    pub diagnostics_capacity: Option<usize>,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            thumbnail_size: default_thumbnail_size(),
            thumbnail_cache_entries: default_thumbnail_cache_entries(),
            diagnostics_capacity: default_diagnostics_capacity(),
        }
    }
}

impl DisplayConfig {
    /// Tile size clamped to the supported range.
    #[must_use]
    pub fn thumbnail_size(&self) -> u32 {
        self.thumbnail_size
            .unwrap_or(DEFAULT_THUMBNAIL_SIZE)
            .clamp(MIN_THUMBNAIL_SIZE, MAX_THUMBNAIL_SIZE)
    }

    /// Cache entries clamped to the supported range.
    #[must_use]
    pub fn thumbnail_cache_entries(&self) -> usize {
        self.thumbnail_cache_entries
            .unwrap_or(DEFAULT_THUMBNAIL_CACHE_ENTRIES)
            .clamp(MIN_THUMBNAIL_CACHE_ENTRIES, MAX_THUMBNAIL_CACHE_ENTRIES)
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
    pub search: SearchConfig,

    #[serde(default)]
    pub display: DisplayConfig,
}

impl Config {
    /// Session behaviour derived from the `[search]` and `[display]` sections.
    #[must_use]
    pub fn session_config(&self) -> SessionConfig {
        SessionConfig {
            response_ordering: self.search.response_ordering,
            stale_results: self.search.stale_results,
            diagnostics_capacity: BufferCapacity::new(
                self.display
                    .diagnostics_capacity
                    .unwrap_or(DEFAULT_DIAGNOSTICS_CAPACITY),
            ),
        }
    }
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_categories() -> Vec<String> {
    DEFAULT_CATEGORIES.iter().map(|c| (*c).to_string()).collect()
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_thumbnail_size() -> Option<u32> {
    Some(DEFAULT_THUMBNAIL_SIZE)
}

fn default_thumbnail_cache_entries() -> Option<usize> {
    Some(DEFAULT_THUMBNAIL_CACHE_ENTRIES)
}

fn default_diagnostics_capacity() -> Option<usize> {
    Some(DEFAULT_DIAGNOSTICS_CAPACITY)
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    match raw.to_lowercase().as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        other => Err(D::Error::custom(format!("invalid theme_mode: {other}"))),
    }
}

// =============================================================================
// Config Path Resolution
// =============================================================================

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
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// the default config with the i18n key of a warning to show the user.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    log::warn!("Ignoring unreadable config {}: {err}", path.display());
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves configuration to a specific path, creating parent directories.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            general: GeneralConfig {
                language: Some("fr".to_string()),
                theme_mode: ThemeMode::Light,
            },
            search: SearchConfig {
                categories: vec!["dogs".into(), "boats".into()],
                api_url: "http://localhost:9000/search".into(),
                response_ordering: ResponseOrdering::LastWriterWins,
                stale_results: StaleResults::Clear,
            },
            display: DisplayConfig {
                thumbnail_size: Some(150),
                thumbnail_cache_entries: Some(60),
                diagnostics_capacity: Some(300),
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn empty_file_yields_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "").expect("failed to write config");

        let loaded = load_from_path(&config_path).expect("empty config should load");

        assert_eq!(loaded, Config::default());
        assert_eq!(
            loaded.search.categories,
            vec!["nature", "birds", "cats", "shoes"]
        );
        assert_eq!(loaded.search.response_ordering, ResponseOrdering::LatestOnly);
        assert_eq!(loaded.search.stale_results, StaleResults::Keep);
    }

    #[test]
    fn partial_search_section_keeps_other_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(
            &config_path,
            "[search]\nresponse_ordering = \"last-writer-wins\"\n",
        )
        .expect("failed to write config");

        let loaded = load_from_path(&config_path).expect("config should load");

        assert_eq!(
            loaded.search.response_ordering,
            ResponseOrdering::LastWriterWins
        );
        assert_eq!(loaded.search.api_url, DEFAULT_API_URL);
        assert_eq!(loaded.search.categories.len(), 4);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write config");

        let result = load_from_path(&config_path);
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn load_with_override_warns_on_invalid_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[search\n").expect("write config");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));

        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
    }

    #[test]
    fn load_with_override_missing_file_is_silent() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn invalid_theme_mode_is_rejected() {
        let result: std::result::Result<Config, _> =
            toml::from_str("[general]\ntheme_mode = \"sepia\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn category_labels_skip_blanks_and_duplicates() {
        let search = SearchConfig {
            categories: vec![" cats ".into(), "".into(), "cats".into(), "dogs".into()],
            ..SearchConfig::default()
        };
        assert_eq!(search.category_labels(), vec!["cats", "dogs"]);
    }

    #[test]
    fn display_values_are_clamped() {
        let display = DisplayConfig {
            thumbnail_size: Some(10_000),
            thumbnail_cache_entries: Some(1),
            diagnostics_capacity: None,
        };
        assert_eq!(display.thumbnail_size(), MAX_THUMBNAIL_SIZE);
        assert_eq!(display.thumbnail_cache_entries(), MIN_THUMBNAIL_CACHE_ENTRIES);
    }

    #[test]
    fn session_config_follows_sections() {
        let mut config = Config::default();
        config.search.stale_results = StaleResults::Clear;
        config.display.diagnostics_capacity = Some(3);

        let session = config.session_config();
        assert_eq!(session.stale_results, StaleResults::Clear);
        assert_eq!(session.response_ordering, ResponseOrdering::LatestOnly);
        assert_eq!(session.diagnostics_capacity.value(), 16);
    }
}
