//! User configuration loaded from a TOML file.
//!
//! Every field is optional. A missing file means "all defaults"; a file that
//! exists but does not parse is a startup error.
//!
//! ```toml
//! # ~/.config/yappad/config.toml
//! vault_dir = "~/notes"
//! mode = "daily"
//! editor = "hx"
//! image_converter = "chafa"
//! theme = "catppuccin-latte"
//! # theme_file = "~/.config/yappad/my-theme.toml"
//! trace_level = "debug"
//! show_preview = true
//! ```

use crate::domain::error::{Result, YapError};
use crate::domain::JournalMode;
use crate::infrastructure::{config_file, expand_tilde};
use crate::ui::Theme;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Program used to turn images into terminal graphics when none is configured.
pub const DEFAULT_IMAGE_CONVERTER: &str = "chafa";

/// Settings read from `config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Vault root. A leading `~` is expanded.
    pub vault_dir: Option<String>,

    /// Journal mode used when `--mode` is not given.
    ///
    /// Accepts the same names and digits as the command line.
    pub mode: Option<String>,

    /// Editor command, consulted when `$EDITOR` is unset.
    pub editor: Option<String>,

    /// Image-to-graphics converter. Default: `chafa`
    pub image_converter: Option<String>,

    /// Built-in theme name: `catppuccin-mocha` or `catppuccin-latte`.
    ///
    /// Ignored if `theme_file` is set.
    pub theme: Option<String>,

    /// Path to a custom TOML theme file.
    pub theme_file: Option<String>,

    /// Tracing level for exported spans. Default: `"info"`
    pub trace_level: Option<String>,

    /// Whether the preview pane starts visible. Default: `true`
    pub show_preview: Option<bool>,
}

impl Config {
    /// Loads the configuration from `YAPPAD_CONFIG` or the platform config
    /// directory.
    ///
    /// # Errors
    ///
    /// Returns [`YapError::Config`] if the file exists but cannot be read or
    /// parsed.
    pub fn load() -> Result<Self> {
        match config_file() {
            Some(path) => Self::from_path(&path),
            None => {
                tracing::debug!("no config directory, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Loads the configuration at `path`, falling back to defaults when the
    /// file does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`YapError::Config`] if the file cannot be read or parsed.
    pub fn from_path(path: &Path) -> Result<Self> {
        let _span = tracing::debug_span!("load_config", path = %path.display()).entered();

        let raw = match std::fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("config file absent, using defaults");
                return Ok(Self::default());
            }
            Err(e) => {
                return Err(YapError::Config(format!("{}: {e}", path.display())));
            }
        };

        Self::from_toml_str(&raw).map_err(|e| match e {
            YapError::Config(msg) => YapError::Config(format!("{}: {msg}", path.display())),
            other => other,
        })
    }

    /// Parses configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`YapError::Config`] if the text is not valid TOML or a field
    /// has the wrong type.
    ///
    /// # Examples
    ///
    /// ```
    /// use yappad::config::Config;
    ///
    /// let config = Config::from_toml_str("mode = \"weekly\"\nshow_preview = false").unwrap();
    /// assert_eq!(config.mode.as_deref(), Some("weekly"));
    /// assert!(!config.show_preview());
    /// ```
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        toml::from_str(raw).map_err(|e| YapError::Config(e.message().to_string()))
    }

    /// Journal mode named by the `mode` field, if any.
    ///
    /// # Errors
    ///
    /// Returns [`YapError::InvalidMode`] if the field names no mode.
    pub fn journal_mode(&self) -> Result<Option<JournalMode>> {
        self.mode.as_deref().map(str::parse::<JournalMode>).transpose()
    }

    /// Vault root with `~` expanded.
    #[must_use]
    pub fn vault_dir(&self) -> Option<PathBuf> {
        self.vault_dir.as_deref().map(expand_tilde)
    }

    #[must_use]
    pub fn image_converter(&self) -> &str {
        self.image_converter
            .as_deref()
            .filter(|program| !program.trim().is_empty())
            .unwrap_or(DEFAULT_IMAGE_CONVERTER)
    }

    #[must_use]
    pub fn show_preview(&self) -> bool {
        self.show_preview.unwrap_or(true)
    }

    /// Resolves the theme: `theme_file`, then `theme`, then the default.
    ///
    /// A theme that fails to load is logged and replaced by the default.
    #[must_use]
    pub fn theme(&self) -> Theme {
        if let Some(theme_file) = &self.theme_file {
            return Theme::from_file(expand_tilde(theme_file)).unwrap_or_else(|e| {
                tracing::debug!(theme_file = %theme_file, error = %e, "failed to load theme from file, using default");
                Theme::default()
            });
        }

        self.theme.as_ref().map_or_else(Theme::default, |name| {
            Theme::from_name(name).unwrap_or_else(|| {
                tracing::debug!(theme_name = %name, "unknown theme, using default");
                Theme::default()
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn missing_file_yields_defaults() {
        let tmp = TempDir::new().unwrap();
        let config = Config::from_path(&tmp.path().join("config.toml")).unwrap();

        assert_eq!(config, Config::default());
        assert!(config.show_preview());
        assert_eq!(config.image_converter(), "chafa");
        assert_eq!(config.journal_mode().unwrap(), None);
    }

    #[test]
    fn malformed_file_is_a_config_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        fs::write(&path, "mode = [unterminated").unwrap();

        let err = Config::from_path(&path).unwrap_err();
        assert!(matches!(err, YapError::Config(ref msg) if msg.contains("config.toml")));
    }

    #[test]
    fn wrong_field_type_is_rejected() {
        assert!(matches!(
            Config::from_toml_str("show_preview = \"yes\""),
            Err(YapError::Config(_))
        ));
    }

    #[test]
    fn reads_every_field() {
        let config = Config::from_toml_str(
            r#"
            vault_dir = "/srv/notes"
            mode = "Monthly"
            editor = "hx"
            image_converter = "/opt/bin/chafa"
            theme = "catppuccin-latte"
            trace_level = "debug"
            show_preview = false
            "#,
        )
        .unwrap();

        assert_eq!(config.vault_dir(), Some(PathBuf::from("/srv/notes")));
        assert_eq!(config.journal_mode().unwrap(), Some(JournalMode::Monthly));
        assert_eq!(config.editor.as_deref(), Some("hx"));
        assert_eq!(config.image_converter(), "/opt/bin/chafa");
        assert_eq!(config.theme().name, "catppuccin-latte");
        assert_eq!(config.trace_level.as_deref(), Some("debug"));
        assert!(!config.show_preview());
    }

    #[test]
    fn invalid_mode_is_reported() {
        let config = Config::from_toml_str("mode = \"hourly\"").unwrap();
        assert!(matches!(config.journal_mode(), Err(YapError::InvalidMode(_))));
    }

    #[test]
    fn unknown_theme_falls_back_to_default() {
        let config = Config::from_toml_str("theme = \"solarized\"").unwrap();
        assert_eq!(config.theme(), Theme::default());
    }

    #[test]
    fn theme_file_wins_over_name() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("custom.toml");
        let latte = Theme::from_name("catppuccin-latte").unwrap();
        let mut custom = toml::to_string(&latte).unwrap();
        custom = custom.replace("catppuccin-latte", "custom");
        fs::write(&path, custom).unwrap();

        let config = Config {
            theme: Some("catppuccin-mocha".to_string()),
            theme_file: Some(path.to_string_lossy().into_owned()),
            ..Config::default()
        };

        assert_eq!(config.theme().name, "custom");
    }
}
