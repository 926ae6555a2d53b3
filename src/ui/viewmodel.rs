//! View model types representing renderable UI state.
//!
//! View models are computed from [`AppState`](crate::app::AppState) by
//! `compute_viewmodel` and consumed by the renderer. They hold display-ready
//! data only: truncation, highlight ranges and selection flags are already
//! worked out, so rendering is a straight walk over these values.
//!
//! # Layouts
//!
//! [`Body`] has one variant per screen layout, and exactly one is active:
//!
//! - [`Body::ConfirmDelete`]: the delete prompt alone
//! - [`Body::Compose`]: the name prompt above the live-filtered list
//! - [`Body::TwoPane`]: list, divider and preview, then the help line
//! - [`Body::SinglePane`]: list and help line

/// Complete UI view model for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UIViewModel {
    /// Status header shown on every layout.
    pub header: HeaderInfo,

    /// Layout-specific content below the header.
    pub body: Body,
}

/// Application title with the active journal and sort modes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    pub title: String,
    pub mode: String,
    pub sort: String,
}

/// Layout-specific part of the frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Body {
    ConfirmDelete(ConfirmInfo),
    Compose {
        input: InputInfo,
        list: ListInfo,
    },
    TwoPane {
        list: ListInfo,
        preview: PreviewInfo,
        footer: FooterInfo,
    },
    SinglePane {
        list: ListInfo,
        footer: FooterInfo,
    },
}

/// Delete confirmation prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmInfo {
    pub prompt: String,
}

/// The note list pane.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListInfo {
    /// Pane width in columns.
    pub width: usize,

    /// Pane height in rows.
    pub height: usize,

    /// First line: the list title or the filter prompt.
    pub title_bar: TitleBar,

    /// Item count line.
    pub status: String,

    /// Items in the visible window.
    pub items: Vec<DisplayItem>,

    /// Shown instead of items when nothing is listed.
    pub empty_state: Option<EmptyState>,
}

/// First line of the list pane.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TitleBar {
    Title(String),

    /// Filter prompt with its query; `editing` while the query is typed.
    Filter { query: String, editing: bool },
}

/// Display information for one note in the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayItem {
    pub title: String,
    pub description: String,
    pub is_selected: bool,

    /// Character ranges of `title` matched by the filter.
    ///
    /// Each tuple is `(start_index, end_index)` in character indices.
    pub highlight_ranges: Vec<(usize, usize)>,
}

/// Message shown when the list has nothing to show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    pub message: String,
}

/// The name prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputInfo {
    pub prompt: String,
    pub text: String,
    /// Cursor column within `text`.
    pub cursor: usize,
    pub is_placeholder: bool,
}

/// The preview pane.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewInfo {
    pub width: usize,
    pub height: usize,
    /// Pre-styled lines in view.
    pub lines: Vec<String>,
}

/// Help line of key bindings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    /// `(key, description)` pairs in display order.
    pub bindings: Vec<(String, String)>,
}
