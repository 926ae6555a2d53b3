//! Application layer coordinating state, events, and commands.
//!
//! This module defines the core application logic, sitting between the
//! terminal runtime and the vault, preview and worker layers. It implements the
//! event-driven architecture that powers the interactive UI.
//!
//! # Architecture
//!
//! The application layer follows a unidirectional data flow pattern:
//!
//! ```text
//! Terminal Input → Events → Event Handler → State Mutations → Commands → Dispatcher
//!                             ↑                                             ↓
//!                             └──────────── Completion Events ──────────────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing logic and state transition coordinator
//! - [`modes`]: Modal state machine types
//! - [`state`]: Central application state container and view model computation
//! - [`keys`]: Key presses and the key map
//! - [`list`], [`input`], [`viewport`]: Widget state for the panes
//!
//! # Example
//!
//! ```
//! use yappad::app::{handle_event, AppState, Event, KeyPress};
//! use yappad::domain::{Clock, JournalMode};
//! use yappad::ui::Theme;
//! use yappad::vault::Vault;
//!
//! let mut state = AppState::new(Vault::new("/nonexistent"), JournalMode::All, Clock::System, Theme::default());
//! let commands = handle_event(&mut state, &Event::Key(KeyPress::ctrl('n')));
//! assert!(!state.mode.is_browsing());
//! ```

pub mod actions;
pub mod handler;
pub mod input;
pub mod keys;
pub mod list;
pub mod modes;
pub mod state;
pub mod viewport;

pub use actions::Command;
pub use handler::{handle_event, Event, MouseInput, Wheel};
pub use keys::{Binding, KeyCode, KeyPress};
pub use modes::{InputKind, Mode};
pub use state::{AppState, PaneLayout};
