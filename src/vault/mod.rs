//! Vault layout, catalog and note file operations.
//!
//! The vault is a plain directory of Markdown files. Each journal mode owns a
//! subdirectory (`daily/`, `weekly/`, `monthly/`, `yearly/`) and per-mode
//! templates live in `.templates/`. The mode `All` spans the whole tree.
//!
//! ```text
//! ~/.YapPad/
//! ├── daily/2024-03-15.md
//! ├── weekly/2024-W11.md
//! ├── monthly/2024-03.md
//! ├── yearly/2024.md
//! ├── .templates/daily.md      ← seeds empty-named dailies
//! └── ideas/side-project.md    ← visible in `All` only
//! ```
//!
//! # Modules
//!
//! - [`catalog`]: read-only listing of notes for a journal mode
//! - [`notes`]: create, rename and delete note files

pub mod catalog;
pub mod notes;

use crate::domain::error::Result;
use crate::domain::JournalMode;
use std::fs;
use std::path::{Path, PathBuf};

/// Subdirectories created next to the vault root on first run.
pub const VAULT_SUBDIRS: [&str; 5] = ["daily", "weekly", "monthly", "yearly", ".templates"];

/// Directory holding per-mode note templates.
pub const TEMPLATES_DIR: &str = ".templates";

/// Handle to a vault root directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vault {
    root: PathBuf,
}

impl Vault {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Creates the vault root and its mode subdirectories if absent.
    ///
    /// The root is created owner-only (`0o700`) on Unix. Existing directories
    /// are left as they are.
    ///
    /// # Errors
    ///
    /// Returns an error if the root or any subdirectory cannot be created.
    pub fn bootstrap(&self) -> Result<()> {
        let _span = tracing::debug_span!("vault_bootstrap", root = %self.root.display()).entered();

        create_private_dir(&self.root)?;
        for sub in VAULT_SUBDIRS {
            fs::create_dir_all(self.root.join(sub))?;
        }

        tracing::debug!("vault ready");
        Ok(())
    }

    /// Directory scanned for `mode`; the root itself for `All`.
    #[must_use]
    pub fn mode_dir(&self, mode: JournalMode) -> PathBuf {
        match mode {
            JournalMode::All => self.root.clone(),
            other => self.root.join(other.subdir()),
        }
    }

    /// Resolves a list title to its file path under `mode`.
    ///
    /// Titles are vault-relative in `All` and relative to the mode's
    /// subdirectory otherwise.
    #[must_use]
    pub fn resolve(&self, title: &str, mode: JournalMode) -> PathBuf {
        self.mode_dir(mode).join(title)
    }

    /// Template consulted for an empty-named note created under `mode`.
    #[must_use]
    pub fn template_path(&self, mode: JournalMode) -> PathBuf {
        self.root
            .join(TEMPLATES_DIR)
            .join(format!("{}.md", mode.default_note_dir()))
    }

    /// Joins a user-typed, vault-relative name onto the root.
    ///
    /// Leading separators are dropped so a typed `/notes/x.md` stays inside
    /// the vault instead of replacing the root.
    pub(crate) fn join_relative(&self, name: &str) -> PathBuf {
        self.root.join(name.trim_start_matches(['/', '\\']))
    }
}

#[cfg(unix)]
fn create_private_dir(path: &Path) -> std::io::Result<()> {
    use std::os::unix::fs::DirBuilderExt;

    fs::DirBuilder::new().recursive(true).mode(0o700).create(path)
}

#[cfg(not(unix))]
fn create_private_dir(path: &Path) -> std::io::Result<()> {
    fs::create_dir_all(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn bootstrap_creates_root_and_mode_dirs() {
        let tmp = TempDir::new().unwrap();
        let vault = Vault::new(tmp.path().join("vault"));

        vault.bootstrap().unwrap();
        vault.bootstrap().unwrap();

        for sub in VAULT_SUBDIRS {
            assert!(vault.root().join(sub).is_dir(), "{sub} missing");
        }
    }

    #[cfg(unix)]
    #[test]
    fn bootstrap_root_is_owner_only() {
        use std::os::unix::fs::PermissionsExt;

        let tmp = TempDir::new().unwrap();
        let vault = Vault::new(tmp.path().join("private"));
        vault.bootstrap().unwrap();

        let mode = fs::metadata(vault.root()).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o700);
    }

    #[test]
    fn resolve_scopes_titles_by_mode() {
        let vault = Vault::new("/v");
        assert_eq!(vault.resolve("daily/a.md", JournalMode::All), PathBuf::from("/v/daily/a.md"));
        assert_eq!(vault.resolve("a.md", JournalMode::Weekly), PathBuf::from("/v/weekly/a.md"));
        assert_eq!(vault.template_path(JournalMode::All), PathBuf::from("/v/.templates/daily.md"));
        assert_eq!(vault.join_relative("/x/y.md"), PathBuf::from("/v/x/y.md"));
    }
}
