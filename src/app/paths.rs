// SPDX-License-Identifier: MPL-2.0
//! Centralized path management for application directories.
//!
//! # Path Resolution Order
//!
//! 1. **Explicit override** - parameter to `_with_override()` functions (for tests)
//! 2. **CLI argument** (`--config-dir`) - set via [`init_cli_overrides`]
//! 3. **Environment variable** (`PORTFOLIO_CONFIG_DIR`)
//! 4. **Platform default** - via `dirs` crate
//!
//! # Usage
//!
//! CLI overrides should be initialized once at startup:
//! ```ignore
//! paths::init_cli_overrides(flags.config_dir.clone());
//! ```

use std::path::PathBuf;
use std::sync::OnceLock;

/// Application name used for directory naming.
const APP_NAME: &str = "Portfolio";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "PORTFOLIO_CONFIG_DIR";

/// Global CLI override for config directory (set once at startup).
static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Records the `--config-dir` argument.
///
/// Later calls are ignored; the first value wins for the process lifetime.
pub fn init_cli_overrides(config_dir: Option<String>) {
    if CLI_CONFIG_DIR.set(config_dir.map(PathBuf::from)).is_err() {
        tracing::debug!("CLI config dir override already initialized");
    }
}

fn get_cli_config_dir() -> Option<PathBuf> {
    CLI_CONFIG_DIR.get().and_then(Clone::clone)
}

/// Returns the application config directory with an optional override.
///
/// - Linux: `~/.config/Portfolio/`
/// - macOS: `~/Library/Application Support/Portfolio/`
/// - Windows: `C:\Users\<User>\AppData\Roaming\Portfolio\`
pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    resolve_config_dir(
        override_path,
        get_cli_config_dir(),
        std::env::var(ENV_CONFIG_DIR).ok(),
        dirs::config_dir(),
    )
}

/// Applies the resolution order to already-gathered candidates.
fn resolve_config_dir(
    override_path: Option<PathBuf>,
    cli_path: Option<PathBuf>,
    env_path: Option<String>,
    platform_dir: Option<PathBuf>,
) -> Option<PathBuf> {
    override_path
        .or(cli_path)
        .or_else(|| env_path.filter(|p| !p.is_empty()).map(PathBuf::from))
        .or_else(|| {
            platform_dir.map(|mut path| {
                path.push(APP_NAME);
                path
            })
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_override_wins() {
        let dir = resolve_config_dir(
            Some(PathBuf::from("/explicit")),
            Some(PathBuf::from("/cli")),
            Some("/env".into()),
            Some(PathBuf::from("/platform")),
        );
        assert_eq!(dir, Some(PathBuf::from("/explicit")));
    }

    #[test]
    fn cli_beats_environment() {
        let dir = resolve_config_dir(
            None,
            Some(PathBuf::from("/cli")),
            Some("/env".into()),
            Some(PathBuf::from("/platform")),
        );
        assert_eq!(dir, Some(PathBuf::from("/cli")));
    }

    #[test]
    fn empty_environment_value_is_ignored() {
        let dir = resolve_config_dir(None, None, Some(String::new()), Some(PathBuf::from("/p")));
        assert_eq!(dir, Some(PathBuf::from("/p").join(APP_NAME)));
    }

    #[test]
    fn environment_beats_platform_default() {
        let dir = resolve_config_dir(None, None, Some("/env".into()), Some(PathBuf::from("/p")));
        assert_eq!(dir, Some(PathBuf::from("/env")));
    }

    #[test]
    fn nothing_available_yields_none() {
        assert_eq!(resolve_config_dir(None, None, None, None), None);
    }
}
