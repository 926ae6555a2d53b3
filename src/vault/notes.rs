//! Note file operations: create, rename, delete.

use super::Vault;
use crate::domain::error::{Result, YapError};
use crate::domain::JournalMode;
use chrono::NaiveDate;
use std::fs;
use std::path::{Path, PathBuf};

impl Vault {
    /// Resolves and, if needed, creates the note named `name`.
    ///
    /// An empty name picks the default note for `mode` on `today`
    /// (`daily/2024-03-15.md`, `weekly/2024-W11.md`, ...). Other names are
    /// vault-root relative and get `.md` appended when missing. Parent
    /// directories are created. A new default-named note is seeded from the
    /// mode's template when one exists; every other new note starts empty.
    /// Existing files are never overwritten.
    ///
    /// # Errors
    ///
    /// Returns an error if a parent directory or the file cannot be created.
    pub fn create_note(&self, name: &str, mode: JournalMode, today: NaiveDate) -> Result<PathBuf> {
        let use_default = name.is_empty();
        let path = if use_default {
            self.root()
                .join(mode.default_note_dir())
                .join(mode.default_filename(today))
        } else if name.ends_with(".md") {
            self.join_relative(name)
        } else {
            self.join_relative(&format!("{name}.md"))
        };

        ensure_parent(&path)?;

        if !path.exists() {
            let content = if use_default {
                self.read_template(mode)
            } else {
                Vec::new()
            };
            fs::write(&path, content)?;
            tracing::debug!(path = %path.display(), seeded = use_default, "note created");
        }

        Ok(path)
    }

    /// Moves the note at `from` to the vault-relative `new_name`.
    ///
    /// Parent directories of the target are created. An empty name or an
    /// already existing target is refused and nothing is touched.
    ///
    /// # Errors
    ///
    /// Returns [`YapError::Vault`] for refused renames and an I/O error if the
    /// move itself fails.
    pub fn rename_note(&self, from: &Path, new_name: &str) -> Result<PathBuf> {
        if new_name.trim().is_empty() {
            return Err(YapError::Vault("rename target is empty".to_string()));
        }

        let to = self.join_relative(new_name);
        if to.symlink_metadata().is_ok() {
            return Err(YapError::Vault(format!("{} already exists", to.display())));
        }

        ensure_parent(&to)?;
        fs::rename(from, &to)?;

        tracing::debug!(from = %from.display(), to = %to.display(), "note renamed");
        Ok(to)
    }

    /// Deletes the note at `path`.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be removed.
    pub fn delete_note(&self, path: &Path) -> Result<()> {
        fs::remove_file(path)?;
        tracing::debug!(path = %path.display(), "note deleted");
        Ok(())
    }

    fn read_template(&self, mode: JournalMode) -> Vec<u8> {
        let template = self.template_path(mode);
        fs::read(&template).unwrap_or_else(|e| {
            tracing::debug!(template = %template.display(), error = %e, "no template, starting empty");
            Vec::new()
        })
    }
}

fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn setup() -> (TempDir, Vault, NaiveDate) {
        let tmp = TempDir::new().unwrap();
        let vault = Vault::new(tmp.path());
        vault.bootstrap().unwrap();
        (tmp, vault, NaiveDate::from_ymd_opt(2024, 3, 15).unwrap())
    }

    #[test]
    fn empty_name_creates_default_note_from_template() {
        let (_tmp, vault, today) = setup();
        fs::write(vault.template_path(JournalMode::Monthly), "# Month\n").unwrap();

        let path = vault.create_note("", JournalMode::Monthly, today).unwrap();

        assert_eq!(path, vault.root().join("monthly/2024-03.md"));
        assert_eq!(fs::read_to_string(path).unwrap(), "# Month\n");
    }

    #[test]
    fn named_note_is_root_relative_and_empty() {
        let (_tmp, vault, today) = setup();
        fs::write(vault.template_path(JournalMode::Daily), "template").unwrap();

        let path = vault.create_note("projects/plan", JournalMode::Daily, today).unwrap();

        assert_eq!(path, vault.root().join("projects/plan.md"));
        assert_eq!(fs::read_to_string(path).unwrap(), "");
    }

    #[test]
    fn existing_note_is_not_overwritten() {
        let (_tmp, vault, today) = setup();
        let existing = vault.root().join("daily/2024-03-15.md");
        fs::write(&existing, "keep me").unwrap();
        fs::write(vault.template_path(JournalMode::Daily), "template").unwrap();

        let path = vault.create_note("", JournalMode::All, today).unwrap();

        assert_eq!(path, existing);
        assert_eq!(fs::read_to_string(existing).unwrap(), "keep me");
    }

    #[test]
    fn rename_into_new_directory() {
        let (_tmp, vault, _) = setup();
        let from = vault.root().join("daily/a.md");
        fs::write(&from, "a").unwrap();

        let to = vault.rename_note(&from, "archive/2024/a.md").unwrap();

        assert!(!from.exists());
        assert_eq!(fs::read_to_string(to).unwrap(), "a");
    }

    #[test]
    fn rename_onto_existing_file_is_refused() {
        let (_tmp, vault, _) = setup();
        let from = vault.root().join("daily/a.md");
        let taken = vault.root().join("daily/b.md");
        fs::write(&from, "a").unwrap();
        fs::write(&taken, "b").unwrap();

        let err = vault.rename_note(&from, "daily/b.md").unwrap_err();

        assert!(matches!(err, YapError::Vault(_)));
        assert_eq!(fs::read_to_string(from).unwrap(), "a");
        assert_eq!(fs::read_to_string(taken).unwrap(), "b");
    }

    #[test]
    fn rename_to_empty_name_is_refused() {
        let (_tmp, vault, _) = setup();
        let from = vault.root().join("daily/a.md");
        fs::write(&from, "a").unwrap();

        assert!(vault.rename_note(&from, "  ").is_err());
        assert!(from.exists());
    }

    #[test]
    fn delete_removes_file() {
        let (_tmp, vault, _) = setup();
        let path = vault.root().join("daily/a.md");
        fs::write(&path, "a").unwrap();

        vault.delete_note(&path).unwrap();

        assert!(!path.exists());
        assert!(vault.delete_note(&path).is_err());
    }
}
