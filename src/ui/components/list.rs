//! Note list pane renderer.
//!
//! The pane is a fixed block of `height` lines, each exactly `width` columns,
//! so it can sit next to the preview pane line by line.

use crate::ui::helpers::{pad_to_width, render_highlighted_text};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{DisplayItem, ListInfo, TitleBar};

/// Gutter marking the selected item.
const SELECTED_GUTTER: &str = "│ ";
const PLAIN_GUTTER: &str = "  ";

/// Renders the list pane.
///
/// # Layout
///
/// ```text
/// Notes                        ← title, or the filter prompt
/// 12 notes                     ← count
///
/// │ 2024-03-15.md              ← selected item title
/// │ 2 hours ago                ← its description
///
///   2024-03-14.md
///   1 day ago
/// ```
#[must_use]
pub fn render_list(list: &ListInfo, theme: &Theme) -> Vec<String> {
    let mut lines = Vec::with_capacity(list.height);

    lines.push(render_title_bar(&list.title_bar, theme));
    lines.push(Theme::paint(&theme.colors.status_fg, &list.status));
    lines.push(String::new());

    if let Some(empty) = &list.empty_state {
        lines.push(Theme::paint(&theme.colors.empty_state_fg, &empty.message));
    } else {
        for item in &list.items {
            lines.extend(render_item(item, theme));
        }
    }

    lines.resize(list.height, String::new());
    lines
        .iter()
        .map(|line| pad_to_width(line, list.width))
        .collect()
}

fn render_title_bar(title_bar: &TitleBar, theme: &Theme) -> String {
    match title_bar {
        TitleBar::Title(title) => format!(
            "{}{}{}",
            Theme::bold(),
            Theme::paint(&theme.colors.item_title_fg, title),
            Theme::reset()
        ),
        TitleBar::Filter { query, editing } => {
            let cursor = if *editing { "█" } else { "" };
            format!(
                "{}{}{cursor}",
                Theme::paint(&theme.colors.filter_prompt_fg, "Filter: "),
                Theme::paint(&theme.colors.item_title_fg, query),
            )
        }
    }
}

fn render_item(item: &DisplayItem, theme: &Theme) -> [String; 3] {
    let colors = &theme.colors;

    let (gutter, title_fg, desc_fg) = if item.is_selected {
        (
            Theme::paint(&colors.selection_fg, SELECTED_GUTTER),
            &colors.selection_fg,
            &colors.selection_desc_fg,
        )
    } else {
        (PLAIN_GUTTER.to_string(), &colors.item_title_fg, &colors.item_desc_fg)
    };

    [
        format!(
            "{gutter}{}",
            render_highlighted_text(&item.title, &item.highlight_ranges, theme, title_fg)
        ),
        format!("{gutter}{}", Theme::paint(desc_fg, &item.description)),
        String::new(),
    ]
}
