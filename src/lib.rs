//! YapPad: a terminal journal for a vault of Markdown notes.
//!
//! YapPad lists the notes in a vault directory, previews the highlighted one
//! beside the list, and hands notes to your editor. It provides:
//! - Daily, weekly, monthly and yearly journals with date-based default names
//! - Fuzzy filtering, four sort orders and live name search while composing
//! - Syntax-highlighted Markdown previews and image previews via `chafa`
//! - Create, rename and delete with confirmation, all inside the vault
//! - Per-mode templates for new journal entries

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  CLI entry point (main.rs)                          │  ← Arguments, config
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Terminal runtime (terminal/)                       │  ← Event loop
//! │  - Raw mode session                                 │  ← Editor handoff
//! │  - Input translation, frame writing                 │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling                                   │  ← Modes, widgets
//! │  - Command emission                                 │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Vault Layer   │   │ Worker Layer  │
//! │ (ui/)         │   │ (vault/)      │   │ (worker/)     │
//! │ - Rendering   │   │ - Catalog     │   │ - Dispatch    │
//! │ - Theming     │   │ - Note files  │   │ - Previews    │
//! │ - Components  │   │ - Templates   │   │ - Graphics    │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Preview, Infrastructure & Domain Layers            │
//! │  - Highlighting and image conversion (preview/)     │
//! │  - Platform paths, shared output (infrastructure/)  │
//! │  - Journal modes, sorting, errors (domain/)         │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │  ← File only
//! │  - OpenTelemetry tracing                            │
//! │  - File-based OTLP export                           │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Application state machine with event/command model
//! - [`config`]: TOML configuration file
//! - [`domain`]: Core domain types (notes, journal modes, errors)
//! - [`infrastructure`]: Platform paths and the shared terminal stream
//! - [`preview`]: Text and image preview loading
//! - [`terminal`]: Event loop and terminal session
//! - [`ui`]: Terminal rendering with theme support
//! - [`vault`]: Vault layout, catalog and note operations
//! - [`worker`]: Background command execution
//! - [`observability`]: OpenTelemetry tracing to a local file
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use yappad::config::Config;
//! use yappad::domain::{Clock, JournalMode};
//! use yappad::vault::Vault;
//! use yappad::{handle_event, initialize, Event};
//!
//! let clock = Clock::Fixed(NaiveDate::from_ymd_opt(2024, 3, 15).unwrap());
//! let mut state = initialize(&Config::default(), Vault::new("/nonexistent"), JournalMode::Daily, clock);
//!
//! let commands = handle_event(&mut state, &Event::Resize { width: 100, height: 30 });
//! assert!(commands.is_empty());
//! assert!(state.show_preview);
//! ```

pub mod app;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod preview;
pub mod terminal;
pub mod ui;
pub mod vault;
pub mod worker;

pub use app::{handle_event, AppState, Command, Event, Mode};
pub use config::Config;
pub use domain::{JournalMode, Result, SortMode, YapError};
pub use ui::Theme;

use domain::Clock;
use vault::Vault;

/// Builds the initial application state.
///
/// The theme and preview visibility come from `config`; the journal mode and
/// vault are resolved by the caller, since command line arguments override
/// the config file.
pub fn initialize(config: &Config, vault: Vault, journal: JournalMode, clock: Clock) -> AppState {
    tracing::debug!(vault = %vault.root().display(), %journal, "initializing yappad");

    let mut state = AppState::new(vault, journal, clock, config.theme());
    state.show_preview = config.show_preview();
    state
}
