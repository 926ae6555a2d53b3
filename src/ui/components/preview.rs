//! Preview pane renderer.

use crate::ui::helpers::pad_to_width;
use crate::ui::viewmodel::PreviewInfo;

/// Renders the visible viewport lines as a `height` x `width` block.
///
/// Lines are already styled by the highlighter; they are only clipped and
/// padded here. An image overlay, when present, is drawn on top of this block
/// by the graphics sink, so blank lines are what it covers.
#[must_use]
pub fn render_preview(preview: &PreviewInfo) -> Vec<String> {
    let mut lines: Vec<String> = preview
        .lines
        .iter()
        .take(preview.height)
        .map(|line| pad_to_width(line, preview.width))
        .collect();
    lines.resize(preview.height, " ".repeat(preview.width));
    lines
}
