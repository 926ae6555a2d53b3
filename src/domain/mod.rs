//! Domain layer for YapPad.
//!
//! This module contains the core domain types, independent of the terminal and
//! the filesystem walk that feeds them.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`note`]: Note item snapshot produced by the catalog
//! - [`journal`]: Journal modes, their subdirectories and default filenames
//! - [`sort`]: Sort modes and the stable ordering they impose
//! - [`clock`]: Injectable source of the current date
//!
//! # Examples
//!
//! ```
//! use chrono::NaiveDate;
//! use yappad::domain::{Clock, JournalMode, SortMode};
//!
//! let clock = Clock::Fixed(NaiveDate::from_ymd_opt(2024, 3, 15).unwrap());
//! assert_eq!(JournalMode::Weekly.default_filename(clock.today()), "2024-W11.md");
//! assert_eq!(SortMode::default().next(), SortMode::ModifiedAsc);
//! ```

pub mod clock;
pub mod error;
pub mod journal;
pub mod note;
pub mod sort;

pub use clock::Clock;
pub use error::{Result, YapError};
pub use journal::JournalMode;
pub use note::NoteItem;
pub use sort::SortMode;
