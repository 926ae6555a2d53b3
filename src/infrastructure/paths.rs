//! Platform path resolution.
//!
//! This module resolves the per-user locations YapPad reads and writes: the
//! default vault, the configuration file and the data directory that holds
//! trace output. Locations come from the `dirs` crate so they follow each
//! platform's conventions.

use crate::domain::error::{Result, YapError};
use std::path::PathBuf;

/// Directory name of the default vault under the home directory.
const DEFAULT_VAULT_NAME: &str = ".YapPad";

/// Application directory name under the config and data roots.
const APP_DIR_NAME: &str = "yappad";

/// Environment variable overriding the configuration file location.
pub const CONFIG_ENV_VAR: &str = "YAPPAD_CONFIG";

/// Returns the default vault location, `~/.YapPad`.
///
/// # Errors
///
/// Returns [`YapError::HomeDir`] if the home directory cannot be determined.
pub fn default_vault_dir() -> Result<PathBuf> {
    dirs::home_dir()
        .map(|home| home.join(DEFAULT_VAULT_NAME))
        .ok_or(YapError::HomeDir)
}

/// Returns the data directory for trace files.
///
/// Resolves to `$XDG_DATA_HOME/yappad` on Linux, falling back to
/// `~/.local/share/yappad` and finally to a relative `yappad` directory when
/// no home is known.
#[must_use]
pub fn get_data_dir() -> PathBuf {
    dirs::data_dir()
        .or_else(|| dirs::home_dir().map(|home| home.join(".local").join("share")))
        .unwrap_or_default()
        .join(APP_DIR_NAME)
}

/// Returns the configuration file path.
///
/// `YAPPAD_CONFIG` wins when set; otherwise the file is
/// `<config dir>/yappad/config.toml`.
#[must_use]
pub fn config_file() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os(CONFIG_ENV_VAR).filter(|p| !p.is_empty()) {
        return Some(PathBuf::from(path));
    }
    dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME).join("config.toml"))
}

/// Expands a leading `~` to the user's home directory.
///
/// Paths without a tilde, and tildes when no home directory is known, are
/// returned unchanged.
///
/// # Examples
///
/// ```
/// use yappad::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("/absolute/path").to_str(), Some("/absolute/path"));
/// assert_eq!(expand_tilde("notes").to_str(), Some("notes"));
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> PathBuf {
    let home = dirs::home_dir();
    match (path, home) {
        ("~", Some(home)) => home,
        (p, Some(home)) if p.starts_with("~/") => home.join(&p[2..]),
        (p, _) => PathBuf::from(p),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tilde_expands_against_home() {
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_tilde("~"), home);
            assert_eq!(expand_tilde("~/notes/work"), home.join("notes/work"));
        }
        assert_eq!(expand_tilde("~user/x"), PathBuf::from("~user/x"));
    }

    #[test]
    fn data_dir_is_app_scoped() {
        assert!(get_data_dir().ends_with(APP_DIR_NAME));
    }
}
