// SPDX-License-Identifier: MPL-2.0
//! Where the gallery keeps its files.
//!
//! Two roots exist: the data directory (stored snapshot, library copies) and
//! the config directory (`settings.toml`). Each is resolved by priority:
//!
//! 1. **Explicit override** passed to a `*_with_override()` function (tests)
//! 2. **CLI argument** (`--data-dir`, `--config-dir`), see [`init_cli_overrides`]
//! 3. **Environment variable** (`ICED_GALLERY_DATA_DIR`, `ICED_GALLERY_CONFIG_DIR`)
//! 4. **Platform default** from `dirs`, with the application name appended

use std::path::PathBuf;
use std::sync::OnceLock;

/// Application name used for directory naming.
pub const APP_NAME: &str = "IcedGallery";

/// Environment variable to override the data directory.
pub const ENV_DATA_DIR: &str = "ICED_GALLERY_DATA_DIR";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "ICED_GALLERY_CONFIG_DIR";

static CLI_DATA_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();
static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Records the `--data-dir` / `--config-dir` arguments.
///
/// Only the first call has an effect; later calls are logged and ignored.
pub fn init_cli_overrides(data_dir: Option<String>, config_dir: Option<String>) {
    let data_set = CLI_DATA_DIR.set(data_dir.map(PathBuf::from)).is_ok();
    let config_set = CLI_CONFIG_DIR.set(config_dir.map(PathBuf::from)).is_ok();
    if !(data_set && config_set) {
        tracing::warn!("CLI directory overrides were already initialized");
    }
}

#[derive(Debug, Clone, Copy)]
enum Root {
    Data,
    Config,
}

impl Root {
    fn cli_override(self) -> Option<PathBuf> {
        let cell = match self {
            Root::Data => &CLI_DATA_DIR,
            Root::Config => &CLI_CONFIG_DIR,
        };
        cell.get().and_then(Clone::clone)
    }

    fn env_var(self) -> &'static str {
        match self {
            Root::Data => ENV_DATA_DIR,
            Root::Config => ENV_CONFIG_DIR,
        }
    }

    fn platform_dir(self) -> Option<PathBuf> {
        match self {
            Root::Data => dirs::data_dir(),
            Root::Config => dirs::config_dir(),
        }
    }

    fn resolve(self, override_path: Option<PathBuf>) -> Option<PathBuf> {
        if let Some(path) = override_path {
            return Some(path);
        }
        if let Some(path) = self.cli_override() {
            return Some(path);
        }
        match std::env::var(self.env_var()) {
            Ok(value) if !value.is_empty() => return Some(PathBuf::from(value)),
            _ => {}
        }
        self.platform_dir().map(|mut path| {
            path.push(APP_NAME);
            path
        })
    }
}

/// Returns the data directory, or `None` if no platform default exists.
///
/// - Linux: `~/.local/share/IcedGallery/`
/// - macOS: `~/Library/Application Support/IcedGallery/`
/// - Windows: `C:\Users\<User>\AppData\Roaming\IcedGallery\`
pub fn get_app_data_dir() -> Option<PathBuf> {
    get_app_data_dir_with_override(None)
}

pub fn get_app_data_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    Root::Data.resolve(override_path)
}

/// Returns the config directory holding `settings.toml`.
pub fn get_app_config_dir() -> Option<PathBuf> {
    get_app_config_dir_with_override(None)
}

pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    Root::Config.resolve(override_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Env vars are process-global; serialize the tests that touch them.
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    #[test]
    fn platform_data_dir_ends_with_app_name() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::remove_var(ENV_DATA_DIR);

        if let Some(path) = get_app_data_dir() {
            assert!(path.ends_with(APP_NAME));
            assert!(path.is_absolute());
        }
    }

    #[test]
    fn platform_config_dir_ends_with_app_name() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::remove_var(ENV_CONFIG_DIR);

        if let Some(path) = get_app_config_dir() {
            assert!(path.ends_with(APP_NAME));
        }
    }

    #[test]
    fn env_var_overrides_platform_default() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::set_var(ENV_DATA_DIR, "/tmp/gallery-data");
        std::env::set_var(ENV_CONFIG_DIR, "/tmp/gallery-config");

        assert_eq!(get_app_data_dir(), Some(PathBuf::from("/tmp/gallery-data")));
        assert_eq!(
            get_app_config_dir(),
            Some(PathBuf::from("/tmp/gallery-config"))
        );

        std::env::remove_var(ENV_DATA_DIR);
        std::env::remove_var(ENV_CONFIG_DIR);
    }

    #[test]
    fn empty_env_var_is_ignored() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::set_var(ENV_DATA_DIR, "");

        if let Some(path) = get_app_data_dir() {
            assert!(path.ends_with(APP_NAME));
        }

        std::env::remove_var(ENV_DATA_DIR);
    }

    #[test]
    fn explicit_override_beats_env_var() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::set_var(ENV_CONFIG_DIR, "/tmp/from-env");

        let explicit = PathBuf::from("/tmp/explicit");
        assert_eq!(
            get_app_config_dir_with_override(Some(explicit.clone())),
            Some(explicit)
        );

        std::env::remove_var(ENV_CONFIG_DIR);
    }
}
