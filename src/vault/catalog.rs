//! Note catalog: enumerates the files visible under a journal mode.
//!
//! The catalog is read-only. A directory that is missing or unreadable yields
//! an empty list, and unreadable entries are skipped, so callers never have to
//! handle a failure here.

use super::Vault;
use crate::domain::{JournalMode, NoteItem, SortMode};
use chrono::{DateTime, Local};
use std::fs::Metadata;
use std::path::Path;
use std::time::SystemTime;
use walkdir::{DirEntry, WalkDir};

impl Vault {
    /// Lists notes for `mode`, ordered by `sort`.
    ///
    /// Walks the mode's subdirectory (the whole vault for `All`), skipping
    /// hidden entries below the walk root and listing files only. Titles are
    /// vault-relative paths in `All` and bare filenames otherwise.
    #[must_use]
    pub fn list_files(&self, sort: SortMode, mode: JournalMode) -> Vec<NoteItem> {
        let dir = self.mode_dir(mode);
        let _span = tracing::debug_span!("list_files", dir = %dir.display(), ?sort, ?mode).entered();

        let walker = WalkDir::new(&dir)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| entry.depth() == 0 || !is_hidden(entry));

        let mut items: Vec<NoteItem> = walker
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(e) => {
                    tracing::debug!(error = %e, "skipping unreadable entry");
                    None
                }
            })
            .filter(|entry| entry.file_type().is_file())
            .filter_map(|entry| self.note_from_entry(&entry, mode))
            .collect();

        sort.apply(&mut items);

        tracing::debug!(count = items.len(), "catalog listed");
        items
    }

    fn note_from_entry(&self, entry: &DirEntry, mode: JournalMode) -> Option<NoteItem> {
        let metadata = entry.metadata().ok()?;
        let title = match mode {
            JournalMode::All => relative_title(self.root(), entry.path())?,
            _ => entry.file_name().to_string_lossy().into_owned(),
        };

        let modified = metadata.modified().unwrap_or(SystemTime::UNIX_EPOCH);
        let created = creation_time(&metadata).unwrap_or(modified);

        Some(NoteItem::new(
            title,
            DateTime::<Local>::from(modified),
            DateTime::<Local>::from(created),
        ))
    }
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry.file_name().to_string_lossy().starts_with('.')
}

fn relative_title(root: &Path, path: &Path) -> Option<String> {
    let relative = path.strip_prefix(root).ok()?;
    Some(relative.to_string_lossy().into_owned())
}

/// Best-effort creation time: the inode change time on Unix, the platform
/// birth time elsewhere.
#[cfg(unix)]
fn creation_time(metadata: &Metadata) -> Option<SystemTime> {
    use std::os::unix::fs::MetadataExt;
    use std::time::Duration;

    let secs = u64::try_from(metadata.ctime()).ok()?;
    let nanos = u32::try_from(metadata.ctime_nsec()).unwrap_or(0);
    SystemTime::UNIX_EPOCH.checked_add(Duration::new(secs, nanos))
}

#[cfg(not(unix))]
fn creation_time(metadata: &Metadata) -> Option<SystemTime> {
    metadata.created().ok()
}
