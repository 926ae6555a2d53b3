//! Name prompt and delete confirmation renderers.

use crate::ui::theme::Theme;
use crate::ui::viewmodel::{ConfirmInfo, InputInfo};

/// Renders the name prompt with a block cursor.
///
/// # Layout
///
/// ```text
///   > projects/pla█
///   > daily/2024-03-15.md (default)     ← placeholder, dimmed
/// ```
#[must_use]
pub fn render_input(input: &InputInfo, theme: &Theme) -> String {
    let prompt = Theme::paint(&theme.colors.prompt_fg, &input.prompt);

    if input.is_placeholder {
        return format!(
            "  {prompt}{}{}{}",
            Theme::dim(),
            Theme::paint(&theme.colors.placeholder_fg, &input.text),
            Theme::reset()
        );
    }

    let before: String = input.text.chars().take(input.cursor).collect();
    let mut rest = input.text.chars().skip(input.cursor);
    let under = rest.next().unwrap_or(' ');
    let after: String = rest.collect();

    format!(
        "  {prompt}{before}\u{1b}[7m{under}{}{after}",
        Theme::reset()
    )
}

/// Renders the delete confirmation question.
#[must_use]
pub fn render_confirm(confirm: &ConfirmInfo, theme: &Theme) -> String {
    format!(
        "  {}{}",
        Theme::bold(),
        Theme::paint(&theme.colors.warning_fg, &confirm.prompt)
    )
}
