//! Composable UI component renderers.
//!
//! Each component turns one part of the view model into styled lines. The
//! layout functions below stack them into the rows of a frame; none of them
//! write to the terminal.
//!
//! # Components
//!
//! - [`header`]: Application badge with journal and sort modes
//! - [`list`]: Note list pane (title, count, items)
//! - [`preview`]: Preview viewport pane
//! - [`prompt`]: Name prompt and delete confirmation
//! - [`footer`]: Key binding help line
//!
//! # Layout Modes
//!
//! - [`render_confirm_mode`]: Header + question
//! - [`render_compose_mode`]: Header + prompt + list
//! - [`render_two_pane_mode`]: Header + list | preview + help
//! - [`render_single_pane_mode`]: Header + list + help

pub mod footer;
pub mod header;
pub mod list;
pub mod preview;
pub mod prompt;

pub use footer::render_footer;
pub use header::render_header;
pub use list::render_list;
pub use preview::render_preview;
pub use prompt::{render_confirm, render_input};

use crate::ui::theme::Theme;
use crate::ui::viewmodel::{ConfirmInfo, FooterInfo, HeaderInfo, InputInfo, ListInfo, PreviewInfo};

/// Columns between the list pane and the preview pane.
const PANE_GAP: &str = "  ";

/// Opening rows shared by every layout: blank, header, blank.
fn chrome(header: &HeaderInfo, theme: &Theme) -> Vec<String> {
    vec![String::new(), render_header(header, theme), String::new()]
}

/// Renders the delete confirmation layout.
///
/// ```text
/// [blank line]
/// [Header]
/// [blank line]
/// [Question]
/// ```
#[must_use]
pub fn render_confirm_mode(header: &HeaderInfo, confirm: &ConfirmInfo, theme: &Theme) -> Vec<String> {
    let mut lines = chrome(header, theme);
    lines.push(render_confirm(confirm, theme));
    lines
}

/// Renders the name prompt layout.
///
/// ```text
/// [blank line]
/// [Header]
/// [blank line]
/// [Prompt]
/// [blank line]
/// [List pane]
/// ```
#[must_use]
pub fn render_compose_mode(
    header: &HeaderInfo,
    input: &InputInfo,
    list: &ListInfo,
    theme: &Theme,
) -> Vec<String> {
    let mut lines = chrome(header, theme);
    lines.push(render_input(input, theme));
    lines.push(String::new());
    lines.extend(render_list(list, theme));
    lines
}

/// Renders list and preview side by side.
///
/// ```text
/// [blank line]
/// [Header]
/// [blank line]
/// [List pane] [gap] [Preview pane]
/// [blank line]
/// [Help line]
/// ```
#[must_use]
pub fn render_two_pane_mode(
    header: &HeaderInfo,
    list: &ListInfo,
    preview: &PreviewInfo,
    footer: &FooterInfo,
    theme: &Theme,
    cols: usize,
) -> Vec<String> {
    let mut lines = chrome(header, theme);

    let list_lines = render_list(list, theme);
    let preview_lines = render_preview(preview);
    let blank_list = " ".repeat(list.width);

    let rows = list_lines.len().max(preview_lines.len());
    for row in 0..rows {
        let left = list_lines.get(row).unwrap_or(&blank_list);
        let right = preview_lines.get(row).map_or("", String::as_str);
        lines.push(format!("{left}{PANE_GAP}{right}"));
    }

    lines.push(String::new());
    lines.push(render_footer(footer, theme, cols));
    lines
}

/// Renders the list alone.
///
/// ```text
/// [blank line]
/// [Header]
/// [blank line]
/// [List pane]
/// [blank line]
/// [Help line]
/// ```
#[must_use]
pub fn render_single_pane_mode(
    header: &HeaderInfo,
    list: &ListInfo,
    footer: &FooterInfo,
    theme: &Theme,
    cols: usize,
) -> Vec<String> {
    let mut lines = chrome(header, theme);
    lines.extend(render_list(list, theme));
    lines.push(String::new());
    lines.push(render_footer(footer, theme, cols));
    lines
}
