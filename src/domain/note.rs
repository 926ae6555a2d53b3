//! Note item model.
//!
//! A [`NoteItem`] is a snapshot of one file in the vault as the catalog saw it.
//! Items are rebuilt wholesale on every catalog refresh and never patched in
//! place.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// `time.RFC822`-style layout used in item descriptions: `15 Mar 24 09:30 +0100`.
const DESCRIPTION_TIME_FORMAT: &str = "%d %b %y %H:%M %z";

/// A note listed by the catalog.
///
/// # Fields
///
/// - `title`: vault-relative path in mode `All`, bare filename otherwise; this
///   is also the note's identity for selection tracking
/// - `description`: `Modified: <time>` line shown under the title
/// - `modified`: last modification time
/// - `created`: best-effort creation time, falling back to `modified`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteItem {
    pub title: String,
    pub description: String,
    pub modified: DateTime<Local>,
    pub created: DateTime<Local>,
}

impl NoteItem {
    /// Creates an item, deriving the description from `modified`.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::{Local, TimeZone};
    /// use yappad::domain::NoteItem;
    ///
    /// let at = Local.with_ymd_and_hms(2024, 3, 15, 9, 30, 0).unwrap();
    /// let note = NoteItem::new("2024-03-15.md".to_string(), at, at);
    /// assert!(note.description.starts_with("Modified: 15 Mar 24 09:30"));
    /// ```
    #[must_use]
    pub fn new(title: String, modified: DateTime<Local>, created: DateTime<Local>) -> Self {
        let description = format!("Modified: {}", modified.format(DESCRIPTION_TIME_FORMAT));
        Self {
            title,
            description,
            modified,
            created,
        }
    }

    /// Text matched by the list filter.
    #[must_use]
    pub fn filter_value(&self) -> &str {
        &self.title
    }
}
