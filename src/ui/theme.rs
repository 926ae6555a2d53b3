//! Color palettes for the journal UI.
//!
//! Two palettes ship in the binary, `catppuccin-mocha` (the default) and
//! `catppuccin-latte`. Anything else comes from a TOML file named by
//! `theme_file` in the config.
//!
//! # File layout
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! title_fg = "#1e1e2e"
//! title_bg = "#cba6f7"
//! status_fg = "#a6adc8"
//! item_title_fg = "#cdd6f4"
//! item_desc_fg = "#7f849c"
//! selection_fg = "#f5c2e7"
//! selection_desc_fg = "#cba6f7"
//! match_highlight_fg = "#1e1e2e"
//! match_highlight_bg = "#f9e2af"
//! filter_prompt_fg = "#a6e3a1"
//! placeholder_fg = "#6c7086"
//! prompt_fg = "#cba6f7"
//! help_key_fg = "#a6adc8"
//! help_desc_fg = "#6c7086"
//! help_sep_fg = "#45475a"
//! empty_state_fg = "#6c7086"
//! warning_fg = "#f38ba8"
//! ```
//!
//! ```
//! use yappad::ui::theme::Theme;
//!
//! let theme = Theme::default();
//! let styled = format!("{}{}YapPad{}", Theme::bold(), Theme::fg(&theme.colors.prompt_fg), Theme::reset());
//! assert!(styled.ends_with("\x1b[0m"));
//! ```

use crate::domain::error::{Result, YapError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// A named palette.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Theme {
    /// Palette name as written in its file.
    pub name: String,
    pub colors: ThemeColors,
}

/// Hex colors (`#rrggbb`) keyed by the element they paint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeColors {
    /// Header badge text.
    pub title_fg: String,
    /// Header badge background.
    pub title_bg: String,
    /// Mode and sort labels, list item counts.
    pub status_fg: String,

    /// Note title in the list.
    pub item_title_fg: String,
    /// Note description in the list.
    pub item_desc_fg: String,

    /// Selected note title and its gutter bar.
    pub selection_fg: String,
    /// Selected note description.
    pub selection_desc_fg: String,

    /// Filter match characters.
    pub match_highlight_fg: String,
    pub match_highlight_bg: String,

    /// List filter prompt.
    pub filter_prompt_fg: String,
    /// Name prompt placeholder text.
    pub placeholder_fg: String,
    /// Name prompt marker.
    pub prompt_fg: String,

    /// Help line keys.
    pub help_key_fg: String,
    /// Help line descriptions.
    pub help_desc_fg: String,
    /// Help line separators.
    pub help_sep_fg: String,

    /// Empty list message.
    pub empty_state_fg: String,

    /// Delete confirmation prompt.
    pub warning_fg: String,
}

impl Theme {
    /// Looks up a palette compiled into the binary.
    ///
    /// ```
    /// use yappad::ui::theme::Theme;
    ///
    /// let theme = Theme::from_name("catppuccin-latte").unwrap();
    /// assert_eq!(theme.name, "catppuccin-latte");
    /// assert!(Theme::from_name("solarized").is_none());
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let bundled = match name {
            "catppuccin-mocha" => include_str!("../../themes/catppuccin-mocha.toml"),
            "catppuccin-latte" => include_str!("../../themes/catppuccin-latte.toml"),
            _ => return None,
        };

        toml::from_str(bundled).ok()
    }

    /// Reads a palette from disk.
    ///
    /// # Errors
    ///
    /// Returns [`YapError::Theme`] if the file cannot be read or parsed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| {
            YapError::Theme(format!("failed to read theme file {}: {e}", path.display()))
        })?;

        toml::from_str(&contents)
            .map_err(|e| YapError::Theme(format!("failed to parse theme TOML: {e}")))
    }

    /// Anything that is not six hex digits becomes white.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim_start_matches('#').trim();

        if hex.len() != 6 || !hex.is_ascii() {
            return (255, 255, 255);
        }

        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(255);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(255);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(255);

        (r, g, b)
    }

    /// Truecolor foreground escape.
    ///
    /// ```
    /// use yappad::ui::theme::Theme;
    ///
    /// assert_eq!(Theme::fg("#cdd6f4"), "\x1b[38;2;205;214;244m");
    /// ```
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// Truecolor background escape.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    /// Clears every attribute.
    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }

    /// Wraps `text` in a foreground color and a reset.
    #[must_use]
    pub fn paint(hex: &str, text: &str) -> String {
        format!("{}{text}{}", Self::fg(hex), Self::reset())
    }
}

impl Default for Theme {
    /// `catppuccin-mocha`.
    ///
    /// # Panics
    ///
    /// If the bundled mocha palette is malformed.
    fn default() -> Self {
        Self::from_name("catppuccin-mocha")
            .expect("bundled mocha palette parses")
    }
}
