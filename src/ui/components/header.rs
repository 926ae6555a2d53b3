//! Header component renderer.
//!
//! This module renders the status line shown on every layout: the application
//! badge followed by the active journal and sort modes.

use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

/// Renders the header line.
///
/// # Layout
///
/// ```text
///  [ YapPad ]  Mode: Daily  Sort: Modified (Newest)
/// ```
///
/// The badge is bold on the title background; the mode labels use the status
/// color.
///
/// # Example
///
/// ```
/// use yappad::ui::components::render_header;
/// use yappad::ui::viewmodel::HeaderInfo;
/// use yappad::ui::Theme;
///
/// let header = HeaderInfo {
///     title: "YapPad".to_string(),
///     mode: "Daily".to_string(),
///     sort: "Modified (Newest)".to_string(),
/// };
/// let line = render_header(&header, &Theme::default());
/// assert!(strip_ansi_escapes::strip_str(&line).contains("Mode: Daily"));
/// ```
#[must_use]
pub fn render_header(header: &HeaderInfo, theme: &Theme) -> String {
    let badge = format!(
        "{}{}{} {} {}",
        Theme::bold(),
        Theme::fg(&theme.colors.title_fg),
        Theme::bg(&theme.colors.title_bg),
        header.title,
        Theme::reset()
    );

    format!(
        " {badge}  {}  {}",
        Theme::paint(&theme.colors.status_fg, &format!("Mode: {}", header.mode)),
        Theme::paint(&theme.colors.status_fg, &format!("Sort: {}", header.sort)),
    )
}
