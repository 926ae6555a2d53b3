//! Sort modes for the note list.

use super::note::NoteItem;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Ordering applied to the note list.
///
/// Cycling with [`SortMode::next`] visits all four modes and returns to the
/// start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SortMode {
    #[default]
    ModifiedDesc,
    ModifiedAsc,
    CreatedDesc,
    CreatedAsc,
}

impl SortMode {
    /// Returns the next mode in the cycle.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::ModifiedDesc => Self::ModifiedAsc,
            Self::ModifiedAsc => Self::CreatedDesc,
            Self::CreatedDesc => Self::CreatedAsc,
            Self::CreatedAsc => Self::ModifiedDesc,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::ModifiedDesc => "Modified (Newest)",
            Self::ModifiedAsc => "Modified (Oldest)",
            Self::CreatedDesc => "Created (Newest)",
            Self::CreatedAsc => "Created (Oldest)",
        }
    }

    /// Compares two notes under this mode.
    #[must_use]
    pub fn compare(self, a: &NoteItem, b: &NoteItem) -> Ordering {
        match self {
            Self::ModifiedDesc => b.modified.cmp(&a.modified),
            Self::ModifiedAsc => a.modified.cmp(&b.modified),
            Self::CreatedDesc => b.created.cmp(&a.created),
            Self::CreatedAsc => a.created.cmp(&b.created),
        }
    }

    /// Sorts notes in place.
    ///
    /// The sort is stable: notes with equal timestamps keep the order in which
    /// the catalog enumerated them.
    pub fn apply(self, items: &mut [NoteItem]) {
        items.sort_by(|a, b| self.compare(a, b));
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Local, TimeZone};

    fn note(title: &str, modified: i64, created: i64) -> NoteItem {
        NoteItem::new(
            title.to_string(),
            Local.timestamp_opt(modified, 0).unwrap(),
            Local.timestamp_opt(created, 0).unwrap(),
        )
    }

    fn titles(items: &[NoteItem]) -> Vec<&str> {
        items.iter().map(|i| i.title.as_str()).collect()
    }

    #[test]
    fn cycling_four_times_returns_to_start() {
        for start in [
            SortMode::ModifiedDesc,
            SortMode::ModifiedAsc,
            SortMode::CreatedDesc,
            SortMode::CreatedAsc,
        ] {
            assert_eq!(start.next().next().next().next(), start);
            assert_ne!(start.next(), start);
        }
    }

    #[test]
    fn sorts_by_key_and_direction() {
        let mut items = vec![note("b", 200, 10), note("a", 100, 30), note("c", 300, 20)];

        SortMode::ModifiedDesc.apply(&mut items);
        assert_eq!(titles(&items), vec!["c", "b", "a"]);

        SortMode::ModifiedAsc.apply(&mut items);
        assert_eq!(titles(&items), vec!["a", "b", "c"]);

        SortMode::CreatedDesc.apply(&mut items);
        assert_eq!(titles(&items), vec!["a", "c", "b"]);

        SortMode::CreatedAsc.apply(&mut items);
        assert_eq!(titles(&items), vec!["b", "c", "a"]);
    }

    #[test]
    fn ties_keep_enumeration_order() {
        let mut items = vec![note("first", 100, 1), note("second", 100, 1), note("third", 50, 1)];

        SortMode::ModifiedDesc.apply(&mut items);
        assert_eq!(titles(&items), vec!["first", "second", "third"]);

        let mut items = vec![note("first", 100, 1), note("second", 100, 1), note("third", 50, 1)];
        SortMode::ModifiedAsc.apply(&mut items);
        assert_eq!(titles(&items), vec!["third", "first", "second"]);
    }

    #[test]
    fn labels_match_header_text() {
        assert_eq!(SortMode::default().to_string(), "Modified (Newest)");
        assert_eq!(SortMode::CreatedAsc.to_string(), "Created (Oldest)");
    }
}
