//! Markdown syntax highlighting to 24-bit ANSI text.

use crate::domain::error::{Result, YapError};
use std::sync::OnceLock;
use syntect::easy::HighlightLines;
use syntect::highlighting::{Theme, ThemeSet};
use syntect::parsing::SyntaxSet;
use syntect::util::{as_24_bit_terminal_escaped, LinesWithEndings};

const HIGHLIGHT_THEME: &str = "base16-mocha.dark";

fn syntax_set() -> &'static SyntaxSet {
    static SYNTAXES: OnceLock<SyntaxSet> = OnceLock::new();
    SYNTAXES.get_or_init(SyntaxSet::load_defaults_newlines)
}

fn theme_set() -> &'static ThemeSet {
    static THEMES: OnceLock<ThemeSet> = OnceLock::new();
    THEMES.get_or_init(ThemeSet::load_defaults)
}

fn theme() -> Result<&'static Theme> {
    theme_set()
        .themes
        .get(HIGHLIGHT_THEME)
        .ok_or_else(|| YapError::Theme(format!("highlight theme {HIGHLIGHT_THEME} is not bundled")))
}

/// Highlights `text` as Markdown.
///
/// The result ends with an SGR reset so colors never leak past the preview.
///
/// # Errors
///
/// Returns [`YapError::Highlight`] if the highlighter rejects a line, or
/// [`YapError::Theme`] if the bundled theme is missing.
pub fn highlight_markdown(text: &str) -> Result<String> {
    let syntaxes = syntax_set();
    let syntax = syntaxes
        .find_syntax_by_extension("md")
        .unwrap_or_else(|| syntaxes.find_syntax_plain_text());

    let mut highlighter = HighlightLines::new(syntax, theme()?);
    let mut out = String::with_capacity(text.len() * 2);

    for line in LinesWithEndings::from(text) {
        let ranges = highlighter
            .highlight_line(line, syntaxes)
            .map_err(|e| YapError::Highlight(e.to_string()))?;
        out.push_str(&as_24_bit_terminal_escaped(&ranges, false));
    }
    out.push_str("\x1b[0m");

    Ok(out)
}
