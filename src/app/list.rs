//! Note list widget: cursor, paging and the `/` filter.
//!
//! The list owns the catalog snapshot currently on screen and the subset of it
//! that passes the filter. Filtering is fuzzy and multi-token (every
//! whitespace-separated token must match the title), keeps catalog order, and
//! reports matched character ranges for highlighting.
//!
//! # Filter States
//!
//! ```text
//! Unfiltered ──/──► Filtering ──enter──► FilterApplied
//!      ▲               │ esc                  │ esc
//!      └───────────────┴──────────────────────┘
//! ```
//!
//! While `Filtering`, typed characters edit the query instead of acting as
//! commands.

use super::keys::{KeyCode, KeyPress};
use crate::domain::NoteItem;
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use std::ops::Range;

/// Lines above the first item: title or filter prompt, status, spacer.
pub const LIST_CHROME_LINES: usize = 3;

/// Lines per item: title, description, spacer.
pub const ITEM_LINES: usize = 3;

/// Filter lifecycle of the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterState {
    #[default]
    Unfiltered,
    /// Typing the query.
    Filtering,
    /// Query committed; navigating the filtered items.
    FilterApplied,
}

/// Scrollable, filterable list of notes.
#[derive(Debug, Clone, Default)]
pub struct NoteList {
    items: Vec<NoteItem>,
    /// Indices into `items` that pass the filter, in catalog order.
    visible: Vec<usize>,
    /// Position within `visible`.
    cursor: usize,
    filter_state: FilterState,
    filter_query: String,
    width: usize,
    height: usize,
}

impl NoteList {
    #[must_use]
    pub fn new(items: Vec<NoteItem>) -> Self {
        let mut list = Self::default();
        list.set_items(items);
        list
    }

    /// Replaces the items, re-applying the current filter.
    ///
    /// The cursor keeps its position, clamped to the new length.
    pub fn set_items(&mut self, items: Vec<NoteItem>) {
        self.items = items;
        self.apply_filter();
    }

    pub fn set_size(&mut self, width: usize, height: usize) {
        self.width = width;
        self.height = height;
    }

    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Number of items passing the filter.
    #[must_use]
    pub fn len(&self) -> usize {
        self.visible.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }

    /// Number of items before filtering.
    #[must_use]
    pub fn total_len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    #[must_use]
    pub fn selected(&self) -> Option<&NoteItem> {
        self.visible
            .get(self.cursor)
            .and_then(|&index| self.items.get(index))
    }

    /// Visible item at `position` in the filtered order.
    #[must_use]
    pub fn visible_item(&self, position: usize) -> Option<&NoteItem> {
        self.visible
            .get(position)
            .and_then(|&index| self.items.get(index))
    }

    #[must_use]
    pub const fn filter_state(&self) -> FilterState {
        self.filter_state
    }

    #[must_use]
    pub fn filter_query(&self) -> &str {
        &self.filter_query
    }

    #[must_use]
    pub fn is_filtering(&self) -> bool {
        self.filter_state == FilterState::Filtering
    }

    /// Items that fit on one page.
    #[must_use]
    pub fn per_page(&self) -> usize {
        (self.height.saturating_sub(LIST_CHROME_LINES) / ITEM_LINES).max(1)
    }

    pub fn cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn cursor_down(&mut self) {
        if self.cursor + 1 < self.visible.len() {
            self.cursor += 1;
        }
    }

    pub fn page_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(self.per_page());
    }

    pub fn page_down(&mut self) {
        self.cursor = (self.cursor + self.per_page()).min(self.last_index());
    }

    pub fn go_to_start(&mut self) {
        self.cursor = 0;
    }

    pub fn go_to_end(&mut self) {
        self.cursor = self.last_index();
    }

    /// Drops the query and shows every item again.
    pub fn reset_filter(&mut self) {
        self.filter_state = FilterState::Unfiltered;
        self.filter_query.clear();
        self.apply_filter();
    }

    /// Applies a key to the list: navigation, or query editing while filtering.
    pub fn handle_key(&mut self, key: &KeyPress) {
        if self.filter_state == FilterState::Filtering {
            self.handle_filter_key(key);
            return;
        }

        match (key.code, key.ctrl) {
            (KeyCode::Char('/'), false) => {
                self.filter_state = FilterState::Filtering;
                self.filter_query.clear();
                self.apply_filter();
            }
            (KeyCode::Esc, _) if self.filter_state == FilterState::FilterApplied => {
                self.reset_filter();
            }
            (KeyCode::Up | KeyCode::Char('k'), false) => self.cursor_up(),
            (KeyCode::Down | KeyCode::Char('j'), false) => self.cursor_down(),
            (KeyCode::PageUp | KeyCode::Left | KeyCode::Char('h'), false) => self.page_up(),
            (KeyCode::PageDown | KeyCode::Right | KeyCode::Char('l'), false) => self.page_down(),
            (KeyCode::Home | KeyCode::Char('g'), false) => self.go_to_start(),
            (KeyCode::End | KeyCode::Char('G'), false) => self.go_to_end(),
            _ => {}
        }
    }

    fn handle_filter_key(&mut self, key: &KeyPress) {
        match key.code {
            KeyCode::Esc => self.reset_filter(),
            KeyCode::Enter => {
                if self.filter_query.is_empty() {
                    self.reset_filter();
                } else {
                    self.filter_state = FilterState::FilterApplied;
                }
            }
            KeyCode::Backspace => {
                self.filter_query.pop();
                self.apply_filter();
            }
            KeyCode::Up => self.cursor_up(),
            KeyCode::Down => self.cursor_down(),
            KeyCode::Char(c) if !key.ctrl => {
                self.filter_query.push(c);
                tracing::trace!(query = %self.filter_query, "filter query updated");
                self.apply_filter();
            }
            _ => {}
        }
    }

    /// Recomputes the visible subset from the query and clamps the cursor.
    fn apply_filter(&mut self) {
        let _span = tracing::debug_span!(
            "apply_filter",
            total_items = self.items.len(),
            query_len = self.filter_query.len()
        )
        .entered();

        let tokens = self.tokens();
        self.visible = if tokens.is_empty() {
            (0..self.items.len()).collect()
        } else {
            let matcher = SkimMatcherV2::default().ignore_case();
            self.items
                .iter()
                .enumerate()
                .filter(|(_, item)| {
                    tokens
                        .iter()
                        .all(|token| matcher.fuzzy_match(item.filter_value(), token).is_some())
                })
                .map(|(index, _)| index)
                .collect()
        };

        self.cursor = self.cursor.min(self.last_index());

        tracing::debug!(filtered_count = self.visible.len(), "list filter applied");
    }

    fn tokens(&self) -> Vec<String> {
        if self.filter_state == FilterState::Unfiltered {
            return Vec::new();
        }
        self.filter_query
            .split_whitespace()
            .map(str::to_string)
            .collect()
    }

    fn last_index(&self) -> usize {
        self.visible.len().saturating_sub(1)
    }

    /// Positions of the visible items shown on screen.
    ///
    /// The window is centered on the cursor and shifted back when the cursor
    /// is near the end so the page stays full.
    #[must_use]
    pub fn window(&self) -> Range<usize> {
        let per_page = self.per_page();
        let len = self.visible.len();

        let mut start = self.cursor.saturating_sub(per_page / 2);
        let end = (start + per_page).min(len);
        if end - start < per_page && len >= per_page {
            start = end.saturating_sub(per_page);
        }

        start..end
    }

    /// Character ranges of `text` matched by the active query.
    ///
    /// Indices of every token's match are merged into contiguous
    /// `(start, end)` ranges with exclusive ends.
    #[must_use]
    pub fn highlight_ranges(&self, text: &str) -> Vec<(usize, usize)> {
        let tokens = self.tokens();
        if tokens.is_empty() {
            return Vec::new();
        }

        let matcher = SkimMatcherV2::default().ignore_case();
        let mut indices: Vec<usize> = tokens
            .iter()
            .filter_map(|token| matcher.fuzzy_indices(text, token))
            .flat_map(|(_score, indices)| indices)
            .collect();
        indices.sort_unstable();
        indices.dedup();

        let mut ranges = Vec::new();
        let mut start = None;
        let mut prev = None;

        for &idx in &indices {
            match (start, prev) {
                (None, _) => {
                    start = Some(idx);
                    prev = Some(idx);
                }
                (Some(_), Some(p)) if idx == p + 1 => {
                    prev = Some(idx);
                }
                (Some(s), Some(p)) => {
                    ranges.push((s, p + 1));
                    start = Some(idx);
                    prev = Some(idx);
                }
                _ => {}
            }
        }

        if let (Some(s), Some(p)) = (start, prev) {
            ranges.push((s, p + 1));
        }

        ranges
    }
}
