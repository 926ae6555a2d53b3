//! Application state management and view model computation.
//!
//! This module defines [`AppState`], the single mutable aggregate of the
//! application, along with pane geometry, catalog refreshes, preview command
//! construction and view model generation. It is the single source of truth
//! for everything on screen.
//!
//! # State Components
//!
//! - **Catalog**: the [`NoteList`] holding the current listing and filter
//! - **Modal state**: [`Mode`], one of browsing, composing a name, or
//!   confirming a delete
//! - **Preview**: the [`Viewport`] text, the image overlay currently drawn, and
//!   the `selected_file` identity whose change triggers a reload
//! - **Scopes**: the active [`JournalMode`] and [`SortMode`]
//! - **Geometry**: terminal size and the preview visibility toggle, from which
//!   [`PaneLayout`] is derived
//!
//! # Example
//!
//! ```no_run
//! use yappad::app::AppState;
//! use yappad::domain::{Clock, JournalMode};
//! use yappad::ui::Theme;
//! use yappad::vault::Vault;
//!
//! let state = AppState::new(Vault::new("/tmp/vault"), JournalMode::Daily, Clock::System, Theme::default());
//! let viewmodel = state.compute_viewmodel();
//! ```

use super::actions::Command;
use super::input::TextInput;
use super::list::{FilterState, NoteList};
use super::modes::{InputKind, Mode};
use super::viewport::Viewport;
use crate::app::keys::Binding;
use crate::domain::{Clock, JournalMode, NoteItem, SortMode};
use crate::preview::{self, CellPos, ImageGeometry, PreviewKind};
use crate::ui::helpers::truncate_plain;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    Body, ConfirmInfo, DisplayItem, EmptyState, FooterInfo, HeaderInfo, InputInfo, ListInfo,
    PreviewInfo, TitleBar, UIViewModel,
};
use crate::vault::Vault;
use std::path::PathBuf;

/// Title shown in the header badge.
pub const APP_TITLE: &str = "YapPad";

/// Title of the list pane.
pub const LIST_TITLE: &str = "Notes";

/// Question shown while confirming a delete.
pub const DELETE_PROMPT: &str = "Are you sure you want to delete this file? (y/n)";

/// Rows taken by the header block and the help line.
const CHROME_ROWS: usize = 6;

/// Screen row (1-indexed) where the panes start.
pub const PANE_TOP_ROW: usize = 4;

/// Width of the pane gutter and margins around the preview.
const PREVIEW_GUTTER: usize = 4;

/// Column distance from the end of the list pane to the preview pane.
const PREVIEW_COLUMN_OFFSET: usize = 3;

/// Pane sizes derived from the terminal size and preview visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaneLayout {
    pub list_width: usize,
    pub list_height: usize,
    pub viewport_width: usize,
    pub viewport_height: usize,
}

impl PaneLayout {
    /// Splits a `width` x `height` terminal into list and preview panes.
    ///
    /// With the preview shown the list takes a third of the width; otherwise
    /// it takes nearly all of it and the viewport has no width.
    ///
    /// ```
    /// use yappad::app::PaneLayout;
    ///
    /// let two = PaneLayout::derive(120, 40, true);
    /// assert_eq!((two.list_width, two.viewport_width, two.list_height), (40, 76, 34));
    ///
    /// let one = PaneLayout::derive(120, 40, false);
    /// assert_eq!((one.list_width, one.viewport_width), (118, 0));
    /// ```
    #[must_use]
    pub const fn derive(width: usize, height: usize, show_preview: bool) -> Self {
        let pane_height = height.saturating_sub(CHROME_ROWS);
        if show_preview {
            let list_width = width / 3;
            Self {
                list_width,
                list_height: pane_height,
                viewport_width: width.saturating_sub(list_width + PREVIEW_GUTTER),
                viewport_height: pane_height,
            }
        } else {
            Self {
                list_width: width.saturating_sub(2),
                list_height: pane_height,
                viewport_width: 0,
                viewport_height: pane_height,
            }
        }
    }
}

/// Central application state container.
///
/// Mutated only by [`handle_event`](super::handle_event) on the event loop
/// thread; background work reaches it exclusively through completion events.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Vault the catalog is read from and notes are written to.
    pub vault: Vault,

    /// Source of "today" for default note names.
    pub clock: Clock,

    /// Color scheme for rendering.
    pub theme: Theme,

    /// Current listing, cursor and filter.
    pub list: NoteList,

    /// Name prompt buffer; meaningful in [`Mode::Input`].
    pub input: TextInput,

    /// Preview pane text.
    pub viewport: Viewport,

    /// Active modal state.
    pub mode: Mode,

    /// Active sort order.
    pub sort: SortMode,

    /// Active journal scope.
    pub journal: JournalMode,

    /// Title of the note whose preview was last requested.
    ///
    /// A mismatch with the highlighted item is what triggers a preview load.
    pub selected_file: Option<String>,

    /// Whether the preview pane is shown.
    pub show_preview: bool,

    /// Image currently drawn over the preview pane, if any.
    pub overlay: Option<PathBuf>,

    /// Terminal width in columns.
    pub width: usize,

    /// Terminal height in rows.
    pub height: usize,

    /// Set by the first resize, once geometry is known.
    pub ready: bool,

    /// Set when the quit command has completed.
    pub should_quit: bool,
}

impl AppState {
    /// Creates the state and loads the initial catalog for `journal`.
    #[must_use]
    pub fn new(vault: Vault, journal: JournalMode, clock: Clock, theme: Theme) -> Self {
        let sort = SortMode::default();
        let list = NoteList::new(vault.list_files(sort, journal));
        let input = TextInput::new(journal.placeholder(clock.today()));

        tracing::debug!(notes = list.total_len(), %journal, "initial catalog loaded");

        Self {
            vault,
            clock,
            theme,
            list,
            input,
            viewport: Viewport::default(),
            mode: Mode::Browsing,
            sort,
            journal,
            selected_file: None,
            show_preview: true,
            overlay: None,
            width: 0,
            height: 0,
            ready: false,
            should_quit: false,
        }
    }

    #[must_use]
    pub const fn layout(&self) -> PaneLayout {
        PaneLayout::derive(self.width, self.height, self.show_preview)
    }

    /// Records the terminal size and re-derives pane sizes.
    pub fn resize(&mut self, width: usize, height: usize) {
        self.width = width;
        self.height = height;

        let layout = self.layout();
        self.list.set_size(layout.list_width, layout.list_height);
        self.viewport
            .set_size(layout.viewport_width, layout.viewport_height);
    }

    /// Where an image for the preview pane is drawn, and at what size.
    #[must_use]
    pub const fn image_geometry(&self) -> ImageGeometry {
        ImageGeometry {
            cols: self.viewport.width(),
            rows: self.viewport.height(),
            origin: CellPos {
                col: self.width / 3 + PREVIEW_COLUMN_OFFSET,
                row: PANE_TOP_ROW,
            },
        }
    }

    /// Reloads the listing for the active journal and sort modes.
    pub fn refresh_catalog(&mut self) {
        self.list
            .set_items(self.vault.list_files(self.sort, self.journal));
    }

    /// Lists notes for the name prompt.
    ///
    /// A non-empty value shows every note in the vault whose title contains
    /// it, case-insensitively; an empty value restores the normal listing.
    pub fn apply_live_filter(&mut self) {
        let value = self.input.value();
        if value.is_empty() {
            self.refresh_catalog();
            return;
        }

        let needle = value.to_lowercase();
        let matches: Vec<NoteItem> = self
            .vault
            .list_files(self.sort, JournalMode::All)
            .into_iter()
            .filter(|item| item.title.to_lowercase().contains(&needle))
            .collect();

        tracing::trace!(query = %value, matches = matches.len(), "live filter applied");
        self.list.set_items(matches);
    }

    /// Points the name prompt's placeholder at the active journal's default.
    pub fn update_placeholder(&mut self) {
        self.input
            .set_placeholder(self.journal.placeholder(self.clock.today()));
    }

    #[must_use]
    pub fn selected_title(&self) -> Option<String> {
        self.list.selected().map(|item| item.title.clone())
    }

    /// Resolves a list title against the active journal mode.
    #[must_use]
    pub fn resolve(&self, title: &str) -> PathBuf {
        self.vault.resolve(title, self.journal)
    }

    /// Vault-relative path of a list title, for the rename prompt.
    #[must_use]
    pub fn vault_relative(&self, title: &str) -> String {
        match self.journal {
            JournalMode::All => title.to_string(),
            mode => format!("{}/{title}", mode.subdir()),
        }
    }

    /// Forgets which note the preview shows so the next sync reloads it.
    pub fn forget_preview(&mut self) {
        self.selected_file = None;
    }

    /// Builds the clear-then-load sequence previewing `path`.
    ///
    /// Images: clear graphics, blank the viewport, render. Text: clear
    /// graphics, load.
    #[must_use]
    pub fn preview_command(&self, path: PathBuf) -> Command {
        match preview::classify(&path) {
            PreviewKind::Image => Command::sequence(vec![
                Command::ClearGraphics,
                Command::BlankViewport,
                Command::RenderImage {
                    path,
                    geometry: self.image_geometry(),
                },
            ]),
            PreviewKind::Text => {
                Command::sequence(vec![Command::ClearGraphics, Command::LoadText { path }])
            }
        }
    }

    /// Computes a renderable view model from the current state.
    #[must_use]
    pub fn compute_viewmodel(&self) -> UIViewModel {
        let header = self.compute_header();

        let body = match &self.mode {
            Mode::ConfirmDelete { .. } => Body::ConfirmDelete(ConfirmInfo {
                prompt: DELETE_PROMPT.to_string(),
            }),
            Mode::Input(_) => Body::Compose {
                input: self.compute_input(),
                list: self.compute_list(),
            },
            Mode::Browsing if self.show_preview => Body::TwoPane {
                list: self.compute_list(),
                preview: self.compute_preview(),
                footer: Self::compute_footer(),
            },
            Mode::Browsing => Body::SinglePane {
                list: self.compute_list(),
                footer: Self::compute_footer(),
            },
        };

        UIViewModel { header, body }
    }

    fn compute_header(&self) -> HeaderInfo {
        HeaderInfo {
            title: APP_TITLE.to_string(),
            mode: self.journal.to_string(),
            sort: self.sort.to_string(),
        }
    }

    fn compute_input(&self) -> InputInfo {
        let view = self.input.view();
        let prompt = match &self.mode {
            Mode::Input(InputKind::Rename { .. }) => "Rename: ",
            _ => "> ",
        };
        InputInfo {
            prompt: prompt.to_string(),
            text: view.text,
            cursor: view.cursor,
            is_placeholder: view.is_placeholder,
        }
    }

    /// Computes the list pane: title or filter bar, count, and the item window.
    fn compute_list(&self) -> ListInfo {
        let width = self.list.width();
        let text_width = width.saturating_sub(2);

        let title_bar = match self.list.filter_state() {
            FilterState::Unfiltered => TitleBar::Title(LIST_TITLE.to_string()),
            state => TitleBar::Filter {
                query: self.list.filter_query().to_string(),
                editing: state == FilterState::Filtering,
            },
        };

        let items: Vec<DisplayItem> = self
            .list
            .window()
            .filter_map(|position| {
                let item = self.list.visible_item(position)?;
                let title = truncate_plain(&item.title, text_width);
                let highlight_ranges = self.list.highlight_ranges(&title);
                Some(DisplayItem {
                    title,
                    description: truncate_plain(&item.description, text_width),
                    is_selected: position == self.list.cursor(),
                    highlight_ranges,
                })
            })
            .collect();

        let empty_state = self.list.is_empty().then(|| EmptyState {
            message: if self.list.total_len() == 0 {
                "No notes.".to_string()
            } else {
                "Nothing matched.".to_string()
            },
        });

        ListInfo {
            width,
            height: self.list.height(),
            title_bar,
            status: self.compute_status(),
            items,
            empty_state,
        }
    }

    fn compute_status(&self) -> String {
        let noun = |n: usize| if n == 1 { "note" } else { "notes" };
        let shown = self.list.len();
        let total = self.list.total_len();
        if self.list.filter_state() == FilterState::Unfiltered {
            format!("{total} {}", noun(total))
        } else {
            format!("{shown} of {total} {}", noun(total))
        }
    }

    fn compute_preview(&self) -> PreviewInfo {
        PreviewInfo {
            width: self.viewport.width(),
            height: self.viewport.height(),
            lines: self.viewport.visible_lines().to_vec(),
        }
    }

    fn compute_footer() -> FooterInfo {
        FooterInfo {
            bindings: Binding::SHORT_HELP
                .iter()
                .map(|binding| {
                    let (key, desc) = binding.help();
                    (key.to_string(), desc.to_string())
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::fs;
    use tempfile::TempDir;

    fn state_with(files: &[&str]) -> (TempDir, AppState) {
        let tmp = TempDir::new().unwrap();
        let vault = Vault::new(tmp.path());
        vault.bootstrap().unwrap();
        for file in files {
            fs::write(tmp.path().join(file), "x").unwrap();
        }
        let clock = Clock::Fixed(NaiveDate::from_ymd_opt(2024, 3, 15).unwrap());
        let state = AppState::new(vault, JournalMode::Daily, clock, Theme::default());
        (tmp, state)
    }

    #[test]
    fn layout_round_trips_through_toggle() {
        for (w, h) in [(80, 24), (121, 40), (10, 5)] {
            let on = PaneLayout::derive(w, h, true);
            let off = PaneLayout::derive(w, h, false);
            assert_ne!(on, off);
            assert_eq!(on, PaneLayout::derive(w, h, true));
        }
    }

    #[test]
    fn image_geometry_matches_viewport() {
        let (_tmp, mut state) = state_with(&[]);
        state.resize(90, 30);

        let geometry = state.image_geometry();
        assert_eq!((geometry.cols, geometry.rows), (56, 24));
        assert_eq!(geometry.origin, CellPos { col: 33, row: 4 });
    }

    #[test]
    fn preview_command_by_kind() {
        let (tmp, state) = state_with(&[]);

        let image = state.preview_command(tmp.path().join("daily/pic.png"));
        let names: Vec<&str> = image.leaves().iter().map(|c| c.name()).collect();
        assert_eq!(names, vec!["clear_graphics", "blank_viewport", "render_image"]);

        let text = state.preview_command(tmp.path().join("daily/a.md"));
        let names: Vec<&str> = text.leaves().iter().map(|c| c.name()).collect();
        assert_eq!(names, vec!["clear_graphics", "load_text"]);
    }

    #[test]
    fn live_filter_spans_the_vault() {
        let (_tmp, mut state) = state_with(&["daily/plan.md", "weekly/Plan-B.md", "daily/other.md"]);

        state.input.set_value("plan");
        state.apply_live_filter();
        let mut titles: Vec<String> = (0..state.list.len())
            .filter_map(|i| state.list.visible_item(i))
            .map(|n| n.title.clone())
            .collect();
        titles.sort();
        assert_eq!(titles, vec!["daily/plan.md", "weekly/Plan-B.md"]);

        state.input.reset();
        state.apply_live_filter();
        assert_eq!(state.list.total_len(), 2);
    }

    #[test]
    fn vault_relative_titles() {
        let (_tmp, mut state) = state_with(&[]);
        assert_eq!(state.vault_relative("a.md"), "daily/a.md");
        state.journal = JournalMode::All;
        assert_eq!(state.vault_relative("daily/a.md"), "daily/a.md");
    }

    #[test]
    fn viewmodel_layout_follows_mode() {
        let (_tmp, mut state) = state_with(&["daily/a.md"]);
        state.resize(80, 24);

        assert!(matches!(state.compute_viewmodel().body, Body::TwoPane { .. }));
        state.show_preview = false;
        assert!(matches!(state.compute_viewmodel().body, Body::SinglePane { .. }));
        state.mode = Mode::Input(InputKind::Create);
        assert!(matches!(state.compute_viewmodel().body, Body::Compose { .. }));
        state.mode = Mode::ConfirmDelete {
            target: "a.md".to_string(),
        };
        assert!(matches!(state.compute_viewmodel().body, Body::ConfirmDelete(_)));
    }

    #[test]
    fn header_reports_modes() {
        let (_tmp, state) = state_with(&[]);
        let header = state.compute_viewmodel().header;
        assert_eq!(header.title, "YapPad");
        assert_eq!(header.mode, "Daily");
        assert_eq!(header.sort, "Modified (Newest)");
    }
}
