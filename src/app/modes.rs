//! Modal states of the application.
//!
//! Browsing, composing a name, and confirming a delete are mutually exclusive,
//! so they are one enum rather than a set of flags. Data that only makes sense
//! in one mode (the rename source, the delete target) lives in that variant.
//!
//! # State Machine
//!
//! ```text
//!            ctrl+n / ctrl+r                 ctrl+d
//! Input ◄──────────────────── Browsing ──────────────────► ConfirmDelete
//!   │     enter / esc            ▲          y / n / esc          │
//!   └────────────────────────────┴───────────────────────────────┘
//! ```

/// What the name prompt is collecting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputKind {
    /// Name for a new note; empty means the journal mode's default.
    Create,

    /// New vault-relative path for an existing note.
    Rename {
        /// Vault-relative path of the note being renamed, so cycling the
        /// journal mode while typing does not change which file moves.
        target: String,
    },
}

/// Current modal state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Mode {
    /// Navigating the list with the preview following the selection.
    #[default]
    Browsing,

    /// Typing a note name in the prompt.
    Input(InputKind),

    /// Waiting for `y` before deleting `target`.
    ConfirmDelete {
        /// List title of the note to delete.
        target: String,
    },
}

impl Mode {
    #[must_use]
    pub const fn is_browsing(&self) -> bool {
        matches!(self, Self::Browsing)
    }

    #[must_use]
    pub const fn is_renaming(&self) -> bool {
        matches!(self, Self::Input(InputKind::Rename { .. }))
    }
}
