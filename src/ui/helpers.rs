//! Shared rendering utilities and helpers.
//!
//! This module provides low-level text utilities used across multiple UI
//! components: display-width measurement that ignores ANSI escapes, clipping
//! and padding of pre-styled lines, and fuzzy match highlighting.
//!
//! # Features
//!
//! - **ANSI Aware**: escape sequences never count towards width and are never
//!   cut in half
//! - **Wide Characters**: widths come from `unicode-width`, so CJK text and
//!   emoji occupy their real number of columns
//! - **UTF-8 Safe**: highlight ranges are character indices, not byte indices
//!
//! # Example
//!
//! ```
//! use yappad::ui::helpers::{display_width, pad_to_width};
//!
//! let styled = "\x1b[1mbold\x1b[0m";
//! assert_eq!(display_width(styled), 4);
//! assert_eq!(display_width(&pad_to_width(styled, 10)), 10);
//! ```

use crate::ui::theme::Theme;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const ELLIPSIS: char = '…';

/// Columns `text` occupies once escape sequences are removed.
#[must_use]
pub fn display_width(text: &str) -> usize {
    strip_ansi_escapes::strip_str(text).width()
}

/// Shortens unstyled `text` to at most `width` columns, marking the cut with
/// an ellipsis.
///
/// ```
/// use yappad::ui::helpers::truncate_plain;
///
/// assert_eq!(truncate_plain("2024-03-15.md", 8), "2024-03…");
/// assert_eq!(truncate_plain("short", 8), "short");
/// ```
#[must_use]
pub fn truncate_plain(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > width - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push(ELLIPSIS);
    out
}

/// Clips a pre-styled line to `width` columns, keeping escape sequences
/// intact.
///
/// A reset is appended when anything was cut so styles do not bleed into the
/// next pane.
#[must_use]
pub fn truncate_ansi(text: &str, width: usize) -> String {
    if display_width(text) <= width {
        return text.to_string();
    }

    let mut out = String::with_capacity(text.len());
    let mut used = 0;
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '\u{1b}' {
            out.push(c);
            if chars.peek() == Some(&'[') {
                for next in chars.by_ref() {
                    out.push(next);
                    if next != '[' && ('\u{40}'..='\u{7e}').contains(&next) {
                        break;
                    }
                }
            }
            continue;
        }

        let w = c.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        out.push(c);
        used += w;
    }

    out.push_str(Theme::reset());
    out
}

/// Clips or space-pads a pre-styled line to exactly `width` columns.
#[must_use]
pub fn pad_to_width(text: &str, width: usize) -> String {
    let clipped = truncate_ansi(text, width);
    let fill = width.saturating_sub(display_width(&clipped));
    format!("{clipped}{}", " ".repeat(fill))
}

/// Styles `text` in `base_fg`, with the character `ranges` in the match
/// highlight colors.
///
/// Ranges are `(start, end)` character indices with exclusive ends; ranges
/// running past the end of the text are clipped.
///
/// ```
/// use yappad::ui::helpers::{display_width, render_highlighted_text};
/// use yappad::ui::Theme;
///
/// let theme = Theme::default();
/// let out = render_highlighted_text("plan.md", &[(0, 2)], &theme, &theme.colors.item_title_fg);
/// assert_eq!(display_width(&out), 7);
/// ```
#[must_use]
pub fn render_highlighted_text(
    text: &str,
    ranges: &[(usize, usize)],
    theme: &Theme,
    base_fg: &str,
) -> String {
    let base = Theme::fg(base_fg);
    if ranges.is_empty() {
        return format!("{base}{text}{}", Theme::reset());
    }

    let chars: Vec<char> = text.chars().collect();
    let mut out = base.clone();
    let mut current_pos = 0;

    for &(start, end) in ranges {
        let start = start.clamp(current_pos, chars.len());
        let end = end.clamp(start, chars.len());

        out.extend(&chars[current_pos..start]);

        out.push_str(&Theme::fg(&theme.colors.match_highlight_fg));
        out.push_str(&Theme::bg(&theme.colors.match_highlight_bg));
        out.extend(&chars[start..end]);
        out.push_str(Theme::reset());
        out.push_str(&base);

        current_pos = end;
    }

    out.extend(&chars[current_pos..]);
    out.push_str(Theme::reset());
    out
}
