// SPDX-License-Identifier: MPL-2.0
//! Where `settings.toml` lives.
//!
//! First match wins:
//! 1. `--config-dir`, registered once with [`init_cli_overrides`]
//! 2. the `ICED_GALLERY_CONFIG_DIR` environment variable, when not empty
//! 3. `<platform config dir>/IcedGallery`

use std::path::PathBuf;
use std::sync::OnceLock;

const APP_NAME: &str = "IcedGallery";

pub const ENV_CONFIG_DIR: &str = "ICED_GALLERY_CONFIG_DIR";

static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Records the `--config-dir` flag. Only the first call has an effect.
pub fn init_cli_overrides(config_dir: Option<String>) {
    if CLI_CONFIG_DIR.set(config_dir.map(PathBuf::from)).is_err() {
        log::warn!("config dir override was already set, ignoring");
    }
}

/// `None` only when the platform has no config directory at all.
pub fn get_app_config_dir() -> Option<PathBuf> {
    CLI_CONFIG_DIR
        .get()
        .cloned()
        .flatten()
        .or_else(env_config_dir)
        .or_else(|| dirs::config_dir().map(|dir| dir.join(APP_NAME)))
}

fn env_config_dir() -> Option<PathBuf> {
    std::env::var_os(ENV_CONFIG_DIR)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Tests below share the process environment.
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    #[test]
    fn env_var_wins_over_platform_dir() {
        let _lock = ENV_MUTEX.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        std::env::set_var(ENV_CONFIG_DIR, "/test/config/dir");

        assert_eq!(get_app_config_dir(), Some(PathBuf::from("/test/config/dir")));

        std::env::remove_var(ENV_CONFIG_DIR);
    }

    #[test]
    fn empty_env_var_is_ignored() {
        let _lock = ENV_MUTEX.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        std::env::set_var(ENV_CONFIG_DIR, "");

        assert_eq!(env_config_dir(), None);
        if let Some(path) = get_app_config_dir() {
            assert!(path.ends_with(APP_NAME));
        }

        std::env::remove_var(ENV_CONFIG_DIR);
    }
}
