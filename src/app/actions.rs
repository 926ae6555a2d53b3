//! Commands describing side effects for the dispatcher to run.
//!
//! The event handler never touches the terminal, spawns a process or reads a
//! preview itself. It returns [`Command`] values; the dispatcher runs them on
//! worker threads and feeds the completion of every leaf back into the event
//! queue as exactly one [`Event`](super::Event).
//!
//! # Combinators
//!
//! - [`Command::Sequence`]: children run strictly in order, each finishing
//!   before the next starts
//! - [`Command::Batch`]: children run independently, completions arrive in any
//!   order
//!
//! # Example
//!
//! ```
//! use std::path::PathBuf;
//! use yappad::app::Command;
//!
//! let preview = Command::sequence(vec![
//!     Command::ClearGraphics,
//!     Command::LoadText { path: PathBuf::from("/vault/daily/2024-03-15.md") },
//! ]);
//! assert_eq!(preview.leaves().len(), 2);
//! ```

use crate::preview::ImageGeometry;
use std::path::PathBuf;

/// A deferred side effect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Deletes every graphics overlay. Completes as `GraphicsCleared`.
    ClearGraphics,

    /// Fills the viewport with blank lines so old text does not show under an
    /// incoming image. Completes as `ViewportCleared`.
    BlankViewport,

    /// Reads, classifies and highlights a text preview. Completes as
    /// `TextLoaded`.
    LoadText {
        path: PathBuf,
    },

    /// Converts an image and draws it over the preview pane. Completes as
    /// `ImageRendered`.
    RenderImage {
        path: PathBuf,
        geometry: ImageGeometry,
    },

    /// Hands the terminal to the editor until it exits. Completes as
    /// `EditorClosed`.
    OpenEditor {
        path: PathBuf,
    },

    /// Ends the event loop. Completes as `Quit`.
    Quit,

    /// Runs children one after another.
    Sequence(Vec<Command>),

    /// Runs children independently.
    Batch(Vec<Command>),
}

impl Command {
    #[must_use]
    pub const fn sequence(commands: Vec<Self>) -> Self {
        Self::Sequence(commands)
    }

    #[must_use]
    pub const fn batch(commands: Vec<Self>) -> Self {
        Self::Batch(commands)
    }

    /// Short name for logs.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::ClearGraphics => "clear_graphics",
            Self::BlankViewport => "blank_viewport",
            Self::LoadText { .. } => "load_text",
            Self::RenderImage { .. } => "render_image",
            Self::OpenEditor { .. } => "open_editor",
            Self::Quit => "quit",
            Self::Sequence(_) => "sequence",
            Self::Batch(_) => "batch",
        }
    }

    /// Leaf commands in execution order, combinators flattened.
    #[must_use]
    pub fn leaves(&self) -> Vec<&Self> {
        match self {
            Self::Sequence(children) | Self::Batch(children) => {
                children.iter().flat_map(Self::leaves).collect()
            }
            leaf => vec![leaf],
        }
    }

    /// Splits out editor launches that must run on the terminal-owning thread.
    ///
    /// Editor commands at the top level or directly inside batches are
    /// removed and their paths returned; whatever remains is handed back for
    /// the worker threads. Sequences are left intact.
    #[must_use]
    pub fn take_foreground(self) -> (Vec<PathBuf>, Option<Self>) {
        match self {
            Self::OpenEditor { path } => (vec![path], None),
            Self::Batch(children) => {
                let mut editors = Vec::new();
                let mut rest = Vec::new();
                for child in children {
                    let (paths, remaining) = child.take_foreground();
                    editors.extend(paths);
                    rest.extend(remaining);
                }
                let rest = (!rest.is_empty()).then_some(Self::Batch(rest));
                (editors, rest)
            }
            other => (Vec::new(), Some(other)),
        }
    }
}
