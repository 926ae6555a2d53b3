//! Journal modes and their naming rules.
//!
//! A journal mode scopes the note list to one subdirectory of the vault and
//! decides the filename of a note created without an explicit name. Naming is
//! a pure function of the date handed in, so callers pass the date from a
//! [`Clock`](super::Clock) instead of reading the wall clock here.

use super::error::{Result, YapError};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Time bucket used to scope the note list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JournalMode {
    /// Every note in the vault, titled by vault-relative path.
    #[default]
    All,
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl JournalMode {
    /// All modes in digit order (`0` through `4`).
    pub const ALL: [Self; 5] = [
        Self::All,
        Self::Daily,
        Self::Weekly,
        Self::Monthly,
        Self::Yearly,
    ];

    /// Returns the vault subdirectory scanned by this mode.
    ///
    /// `All` has no subdirectory and spans the whole vault.
    #[must_use]
    pub const fn subdir(self) -> &'static str {
        match self {
            Self::All => "",
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
        }
    }

    /// Returns the subdirectory that receives default-named notes.
    ///
    /// `All` has no directory of its own and files new notes as dailies.
    #[must_use]
    pub const fn default_note_dir(self) -> &'static str {
        match self {
            Self::All => "daily",
            other => other.subdir(),
        }
    }

    /// Returns the default filename for a note created on `date`.
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use yappad::domain::JournalMode;
    ///
    /// let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
    /// assert_eq!(JournalMode::Daily.default_filename(date), "2024-03-15.md");
    /// assert_eq!(JournalMode::Weekly.default_filename(date), "2024-W11.md");
    /// assert_eq!(JournalMode::Monthly.default_filename(date), "2024-03.md");
    /// assert_eq!(JournalMode::Yearly.default_filename(date), "2024.md");
    /// ```
    #[must_use]
    pub fn default_filename(self, date: NaiveDate) -> String {
        match self {
            Self::All | Self::Daily => date.format("%Y-%m-%d.md").to_string(),
            Self::Weekly => {
                let week = date.iso_week();
                format!("{}-W{:02}.md", week.year(), week.week())
            }
            Self::Monthly => date.format("%Y-%m.md").to_string(),
            Self::Yearly => date.format("%Y.md").to_string(),
        }
    }

    /// Placeholder shown in the name prompt, e.g. `daily/2024-03-15.md (default)`.
    #[must_use]
    pub fn placeholder(self, date: NaiveDate) -> String {
        format!(
            "{}/{} (default)",
            self.default_note_dir(),
            self.default_filename(date)
        )
    }

    /// Next mode when cycling with tab while composing a name.
    ///
    /// `All` and `Daily` both advance to `Weekly`; `Yearly` wraps to `Daily`.
    #[must_use]
    pub const fn next_compose(self) -> Self {
        match self {
            Self::All | Self::Daily => Self::Weekly,
            Self::Weekly => Self::Monthly,
            Self::Monthly => Self::Yearly,
            Self::Yearly => Self::Daily,
        }
    }

    /// Maps the digit keys `0`-`4` to a mode.
    #[must_use]
    pub fn from_digit(c: char) -> Option<Self> {
        let index = c.to_digit(10)? as usize;
        Self::ALL.get(index).copied()
    }

    /// Display label used in the header.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Daily => "Daily",
            Self::Weekly => "Weekly",
            Self::Monthly => "Monthly",
            Self::Yearly => "Yearly",
        }
    }
}

impl fmt::Display for JournalMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for JournalMode {
    type Err = YapError;

    /// Parses a mode name case-insensitively, or its digit alias.
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "all" | "0" => Ok(Self::All),
            "daily" | "1" => Ok(Self::Daily),
            "weekly" | "2" => Ok(Self::Weekly),
            "monthly" | "3" => Ok(Self::Monthly),
            "yearly" | "4" => Ok(Self::Yearly),
            _ => Err(YapError::InvalidMode(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn weekly_name_uses_iso_year_at_year_boundary() {
        // 2024-12-30 falls in ISO week 1 of 2025.
        assert_eq!(JournalMode::Weekly.default_filename(date(2024, 12, 30)), "2025-W01.md");
        // 2021-01-03 still belongs to 2020-W53.
        assert_eq!(JournalMode::Weekly.default_filename(date(2021, 1, 3)), "2020-W53.md");
    }

    #[test]
    fn all_files_new_notes_as_dailies() {
        let d = date(2024, 3, 15);
        assert_eq!(JournalMode::All.default_note_dir(), "daily");
        assert_eq!(JournalMode::All.default_filename(d), "2024-03-15.md");
        assert_eq!(JournalMode::All.placeholder(d), "daily/2024-03-15.md (default)");
    }

    #[test]
    fn compose_cycle_skips_all() {
        let mut mode = JournalMode::All;
        let mut seen = vec![];
        for _ in 0..5 {
            mode = mode.next_compose();
            seen.push(mode);
        }
        assert_eq!(
            seen,
            vec![
                JournalMode::Weekly,
                JournalMode::Monthly,
                JournalMode::Yearly,
                JournalMode::Daily,
                JournalMode::Weekly,
            ]
        );
    }

    #[test]
    fn parses_names_and_digits_case_insensitively() {
        assert_eq!("WEEKLY".parse::<JournalMode>().unwrap(), JournalMode::Weekly);
        assert_eq!("Daily".parse::<JournalMode>().unwrap(), JournalMode::Daily);
        assert_eq!("4".parse::<JournalMode>().unwrap(), JournalMode::Yearly);
        assert!(matches!(
            "hourly".parse::<JournalMode>(),
            Err(YapError::InvalidMode(raw)) if raw == "hourly"
        ));
        assert!("5".parse::<JournalMode>().is_err());
    }

    #[test]
    fn digits_map_to_modes() {
        assert_eq!(JournalMode::from_digit('0'), Some(JournalMode::All));
        assert_eq!(JournalMode::from_digit('3'), Some(JournalMode::Monthly));
        assert_eq!(JournalMode::from_digit('7'), None);
        assert_eq!(JournalMode::from_digit('x'), None);
    }
}
