//! Footer component renderer.
//!
//! This module renders the help line of key bindings below the panes.

use crate::ui::helpers::truncate_ansi;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FooterInfo;

/// Separator between bindings.
const SEPARATOR: &str = " • ";

/// Renders the help line, clipped to `cols`.
///
/// # Layout
///
/// ```text
///   ctrl+n new • 0-4 yap mode • ctrl+r rename • ctrl+d delete • ctrl+c quit
/// ```
///
/// Keys, descriptions and separators each get their own theme color. On
/// narrow terminals the line is cut rather than wrapped.
#[must_use]
pub fn render_footer(footer: &FooterInfo, theme: &Theme, cols: usize) -> String {
    let separator = Theme::paint(&theme.colors.help_sep_fg, SEPARATOR);

    let help = footer
        .bindings
        .iter()
        .map(|(key, desc)| {
            format!(
                "{} {}",
                Theme::paint(&theme.colors.help_key_fg, key),
                Theme::paint(&theme.colors.help_desc_fg, desc)
            )
        })
        .collect::<Vec<_>>()
        .join(&separator);

    truncate_ansi(&format!("  {help}"), cols)
}
