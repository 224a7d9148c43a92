// SPDX-License-Identifier: MPL-2.0
//! User preferences read from `settings.toml`.
//!
//! ```toml
//! [general]
//! language = "fr"
//! theme_mode = "dark"
//!
//! [slideshow]
//! interval_secs = 8
//! show_navigation = true
//! sort_order = "modified-date"
//! ```
//!
//! The file lives in the directory returned by
//! [`crate::app::paths::get_app_config_dir`]. A missing file means defaults;
//! an unreadable one means defaults plus a warning shown as a toast.
//! The only setting written back at runtime is `[slideshow] interval_secs`,
//! after the interval is changed from the slideshow.
//!
//! ```no_run
//! use iced_gallery::config;
//!
//! let (config, warning) = config::load();
//! if warning.is_none() {
//!     println!("{:?}", config.slideshow.interval_secs);
//! }
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::Result;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// i18n key of the toast shown when the settings file cannot be used.
pub const LOAD_WARNING_KEY: &str = "notification-config-load-error";

/// Order of the images of a scanned folder.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SortOrder {
    #[default]
    Alphabetical,
    ModifiedDate,
    CreatedDate,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// BCP-47 code, e.g. `en-US`; the OS locale is used when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    #[serde(default, deserialize_with = "theme_mode_any_case")]
    pub theme_mode: ThemeMode,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SlideshowConfig {
    /// Seconds between two automatic photo changes.
    #[serde(default = "some_interval", skip_serializing_if = "Option::is_none")]
    pub interval_secs: Option<u32>,

    /// Previous/next buttons and filmstrip.
    #[serde(default = "some_navigation", skip_serializing_if = "Option::is_none")]
    pub show_navigation: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<SortOrder>,
}

impl Default for SlideshowConfig {
    fn default() -> Self {
        Self {
            interval_secs: some_interval(),
            show_navigation: some_navigation(),
            sort_order: Some(SortOrder::default()),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub slideshow: SlideshowConfig,
}

fn some_interval() -> Option<u32> {
    Some(DEFAULT_SLIDE_INTERVAL_SECS)
}

fn some_navigation() -> Option<bool> {
    Some(DEFAULT_SHOW_NAVIGATION)
}

fn theme_mode_any_case<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    match raw.to_ascii_lowercase().as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        other => Err(serde::de::Error::custom(format!(
            "unknown theme_mode `{other}`"
        ))),
    }
}

/// Loads `settings.toml` from the resolved config directory.
///
/// Never fails: problems are logged and reported as an i18n warning key.
pub fn load() -> (Config, Option<String>) {
    load_from_dir(paths::get_app_config_dir())
}

/// Same as [`load`] with an explicit directory.
pub fn load_from_dir(dir: Option<PathBuf>) -> (Config, Option<String>) {
    let Some(path) = dir.map(|dir| dir.join(CONFIG_FILE)) else {
        return (Config::default(), None);
    };
    if !path.exists() {
        log::debug!("no settings at {}, using defaults", path.display());
        return (Config::default(), None);
    }

    match load_from_path(&path) {
        Ok(config) => (config, None),
        Err(err) => {
            log::warn!("ignoring {}: {err}", path.display());
            (Config::default(), Some(LOAD_WARNING_KEY.to_string()))
        }
    }
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

/// Writes `config` as `settings.toml` inside `dir`.
pub fn save_to_dir(config: &Config, dir: &Path) -> Result<()> {
    save_to_path(config, &dir.join(CONFIG_FILE))
}

/// Writes `config` to `path`, creating missing parent directories.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, toml::to_string_pretty(config)?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use tempfile::tempdir;

    #[test]
    fn round_trip_keeps_every_field() {
        let config = Config {
            general: GeneralConfig {
                language: Some("fr".to_string()),
                theme_mode: ThemeMode::Light,
            },
            slideshow: SlideshowConfig {
                interval_secs: Some(8),
                show_navigation: Some(false),
                sort_order: Some(SortOrder::ModifiedDate),
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("nested").join(CONFIG_FILE);

        save_to_path(&config, &path).expect("failed to save config");
        assert_eq!(load_from_path(&path).expect("failed to load config"), config);
    }

    #[test]
    fn save_to_dir_is_read_back_by_load_from_dir() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let mut config = Config::default();
        config.slideshow.interval_secs = Some(12);

        save_to_dir(&config, temp_dir.path()).expect("failed to save config");
        let (loaded, warning) = load_from_dir(Some(temp_dir.path().to_path_buf()));

        assert!(warning.is_none());
        assert_eq!(loaded.slideshow.interval_secs, Some(12));
    }

    #[test]
    fn invalid_toml_is_a_config_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join(CONFIG_FILE);
        fs::write(&path, "not = valid = toml").expect("failed to write");

        assert!(matches!(load_from_path(&path), Err(Error::Config(_))));
    }

    #[test]
    fn unusable_file_falls_back_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(
            temp_dir.path().join(CONFIG_FILE),
            "[slideshow]\ninterval_secs = \"x\"",
        )
        .expect("failed to write");

        let (config, warning) = load_from_dir(Some(temp_dir.path().to_path_buf()));

        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some(LOAD_WARNING_KEY));
    }

    #[test]
    fn missing_file_is_silent() {
        let temp_dir = tempdir().expect("failed to create temp dir");

        let (config, warning) = load_from_dir(Some(temp_dir.path().to_path_buf()));

        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn missing_section_keeps_its_defaults() {
        let loaded: Config = toml::from_str("[general]\nlanguage = \"fr\"\n").expect("valid toml");

        assert_eq!(loaded.general.language.as_deref(), Some("fr"));
        assert_eq!(loaded.slideshow.interval_secs, Some(DEFAULT_SLIDE_INTERVAL_SECS));
        assert_eq!(loaded.slideshow.show_navigation, Some(DEFAULT_SHOW_NAVIGATION));
        assert_eq!(loaded.general.theme_mode, ThemeMode::System);
    }

    #[test]
    fn theme_mode_ignores_case() {
        let loaded: Config = toml::from_str("[general]\ntheme_mode = \"DARK\"\n").expect("valid toml");
        assert_eq!(loaded.general.theme_mode, ThemeMode::Dark);

        assert!(toml::from_str::<Config>("[general]\ntheme_mode = \"sepia\"\n").is_err());
    }

    #[test]
    fn sort_order_uses_kebab_case() {
        let loaded: Config =
            toml::from_str("[slideshow]\nsort_order = \"created-date\"\n").expect("valid toml");
        assert_eq!(loaded.slideshow.sort_order, Some(SortOrder::CreatedDate));
    }
}
