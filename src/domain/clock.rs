//! Source of "today" for default note names.

use chrono::{Local, NaiveDate};

/// Supplies the current date.
///
/// The running application uses [`Clock::System`]; tests pin the date with
/// [`Clock::Fixed`] so default filenames are deterministic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Clock {
    #[default]
    System,
    Fixed(NaiveDate),
}

impl Clock {
    #[must_use]
    pub fn today(self) -> NaiveDate {
        match self {
            Self::System => Local::now().date_naive(),
            Self::Fixed(date) => date,
        }
    }
}
