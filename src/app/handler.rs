//! Event handling and state transition logic.
//!
//! This module implements the core event handler that processes key presses,
//! terminal events and command completions, translating them into state
//! changes and command lists. It is the only place [`AppState`] is mutated.
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow pattern:
//! 1. Events arrive from the terminal or from finished commands
//! 2. [`handle_event`] pattern-matches the event and the current [`Mode`]
//! 3. State mutations occur via `AppState` methods
//! 4. Selection sync compares the highlighted note with the previewed one
//! 5. Commands are collected and returned for the dispatcher
//!
//! # Event Types
//!
//! - **Input**: `Key`, `Mouse`, `Resize`
//! - **Completions**: `TextLoaded`, `ViewportCleared`, `ImageRendered`,
//!   `GraphicsCleared`, `EditorClosed`, `Quit`
//!
//! # Example
//!
//! ```
//! use yappad::app::{handle_event, AppState, Event, KeyPress};
//! use yappad::domain::{Clock, JournalMode};
//! use yappad::ui::Theme;
//! use yappad::vault::Vault;
//!
//! let mut state = AppState::new(Vault::new("/nonexistent"), JournalMode::Daily, Clock::System, Theme::default());
//! let commands = handle_event(&mut state, &Event::Key(KeyPress::ctrl('c')));
//! assert_eq!(commands.len(), 1);
//! ```

use super::actions::Command;
use super::keys::{Binding, KeyCode, KeyPress};
use super::modes::{InputKind, Mode};
use super::state::AppState;
use crate::domain::JournalMode;
use std::path::PathBuf;

/// Direction of a mouse wheel step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wheel {
    Up,
    Down,
}

/// A wheel step at a 0-indexed cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MouseInput {
    pub wheel: Wheel,
    pub column: usize,
    pub row: usize,
}

/// Inputs to the state machine.
///
/// Terminal input and the completion of every leaf [`Command`] arrive through
/// the same queue and are processed one at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A key press.
    Key(KeyPress),

    /// A mouse wheel step.
    Mouse(MouseInput),

    /// Terminal size in columns and rows. Sent once at startup as well.
    Resize { width: usize, height: usize },

    /// A text preview finished loading.
    TextLoaded {
        /// File the content was read from.
        path: PathBuf,
        /// Highlighted content or a placeholder such as `[Binary file: ...]`.
        content: String,
    },

    /// The viewport blanking step of an image preview ran.
    ViewportCleared,

    /// An image conversion finished.
    ImageRendered {
        path: PathBuf,
        /// Whether anything was drawn; false when the converter failed.
        drawn: bool,
    },

    /// Graphics overlays were cleared.
    GraphicsCleared,

    /// The editor exited.
    EditorClosed {
        path: PathBuf,
        /// Launch failure or non-zero exit, if any.
        error: Option<String>,
    },

    /// The quit command ran.
    Quit,
}

impl Event {
    /// Short name for spans.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Key(_) => "key",
            Self::Mouse(_) => "mouse",
            Self::Resize { .. } => "resize",
            Self::TextLoaded { .. } => "text_loaded",
            Self::ViewportCleared => "viewport_cleared",
            Self::ImageRendered { .. } => "image_rendered",
            Self::GraphicsCleared => "graphics_cleared",
            Self::EditorClosed { .. } => "editor_closed",
            Self::Quit => "quit",
        }
    }
}

/// Processes an event, mutates application state, and returns commands to run.
///
/// After the event itself is applied, the highlighted note is compared with
/// the one last previewed; a mismatch while browsing issues a preview load.
/// Filesystem failures during note operations are logged and leave the state
/// consistent; nothing here returns an error.
///
/// # Example
///
/// ```
/// use yappad::app::{handle_event, AppState, Command, Event};
/// use yappad::domain::{Clock, JournalMode};
/// use yappad::ui::Theme;
/// use yappad::vault::Vault;
///
/// let mut state = AppState::new(Vault::new("/nonexistent"), JournalMode::All, Clock::System, Theme::default());
/// let commands = handle_event(&mut state, &Event::Resize { width: 100, height: 30 });
/// assert!(state.ready);
/// assert!(commands.is_empty());
/// ```
pub fn handle_event(state: &mut AppState, event: &Event) -> Vec<Command> {
    let _span = tracing::debug_span!("handle_event", event_type = event.name()).entered();

    let mut commands = match event {
        Event::Key(key) => handle_key(state, key),
        Event::Mouse(mouse) => handle_mouse(state, *mouse),
        Event::Resize { width, height } => handle_resize(state, *width, *height),
        Event::TextLoaded { path, content } => {
            if state.selected_file.as_deref().map(|t| state.resolve(t)).as_ref() == Some(path) {
                state.viewport.set_content(content);
                state.viewport.goto_top();
            } else {
                tracing::debug!(path = %path.display(), "dropping stale text preview");
            }
            Vec::new()
        }
        Event::ViewportCleared => {
            state.viewport.blank();
            Vec::new()
        }
        Event::ImageRendered { path, drawn } => handle_image_rendered(state, path, *drawn),
        Event::GraphicsCleared => {
            state.overlay = None;
            Vec::new()
        }
        Event::EditorClosed { path, error } => {
            match error {
                Some(error) => tracing::warn!(path = %path.display(), %error, "editor failed"),
                None => tracing::debug!(path = %path.display(), "editor closed"),
            }
            state.refresh_catalog();
            state.overlay = None;
            state.forget_preview();
            Vec::new()
        }
        Event::Quit => {
            state.should_quit = true;
            Vec::new()
        }
    };

    if let Some(preview) = sync_selection(state) {
        // The preview sequence clears graphics itself; a separate clear in the
        // same batch could land after the image is drawn.
        commands.retain(|command| *command != Command::ClearGraphics);
        commands.push(preview);
    }

    commands
}

fn handle_key(state: &mut AppState, key: &KeyPress) -> Vec<Command> {
    if Binding::Quit.matches(key) {
        tracing::info!("quit requested");
        return vec![Command::sequence(vec![Command::ClearGraphics, Command::Quit])];
    }

    match state.mode.clone() {
        Mode::ConfirmDelete { target } => handle_confirm_key(state, key, &target),
        Mode::Input(kind) => handle_input_key(state, key, &kind),
        Mode::Browsing => handle_browse_key(state, key),
    }
}

fn handle_confirm_key(state: &mut AppState, key: &KeyPress, target: &str) -> Vec<Command> {
    match key.typed_char() {
        Some('y' | 'Y') => {
            let path = state.resolve(target);
            match state.vault.delete_note(&path) {
                Ok(()) => tracing::info!(path = %path.display(), "note deleted"),
                Err(e) => tracing::warn!(path = %path.display(), error = %e, "delete failed"),
            }
            state.mode = Mode::Browsing;
            state.refresh_catalog();
        }
        Some('n' | 'N') => state.mode = Mode::Browsing,
        _ if key.code == KeyCode::Esc => state.mode = Mode::Browsing,
        _ => {}
    }
    Vec::new()
}

fn handle_input_key(state: &mut AppState, key: &KeyPress, kind: &InputKind) -> Vec<Command> {
    match key.code {
        KeyCode::Enter => match kind {
            InputKind::Create => submit_create(state),
            InputKind::Rename { target } => {
                submit_rename(state, target);
                Vec::new()
            }
        },
        KeyCode::Tab if !key.ctrl => {
            state.journal = state.journal.next_compose();
            tracing::debug!(journal = %state.journal, "compose mode cycled");
            state.update_placeholder();
            state.apply_live_filter();
            Vec::new()
        }
        KeyCode::Esc => {
            leave_input(state);
            Vec::new()
        }
        _ => {
            state.input.handle_key(key);
            state.apply_live_filter();
            Vec::new()
        }
    }
}

fn submit_create(state: &mut AppState) -> Vec<Command> {
    let name = state.input.value();
    let today = state.clock.today();

    let created = state.vault.create_note(name.trim(), state.journal, today);
    leave_input(state);

    match created {
        Ok(path) => {
            tracing::info!(path = %path.display(), "opening new note");
            vec![Command::OpenEditor { path }]
        }
        Err(e) => {
            tracing::warn!(name = %name, error = %e, "could not create note");
            Vec::new()
        }
    }
}

fn submit_rename(state: &mut AppState, target: &str) {
    let name = state.input.value();
    let name = name.trim();
    if name.is_empty() {
        return;
    }

    let from = state.vault.resolve(target, JournalMode::All);
    match state.vault.rename_note(&from, name) {
        Ok(to) => {
            tracing::info!(from = %from.display(), to = %to.display(), "note renamed");
            leave_input(state);
        }
        Err(e) => tracing::warn!(from = %from.display(), to = %name, error = %e, "rename failed"),
    }
}

fn leave_input(state: &mut AppState) {
    state.mode = Mode::Browsing;
    state.input.reset();
    state.refresh_catalog();
}

fn handle_browse_key(state: &mut AppState, key: &KeyPress) -> Vec<Command> {
    if state.list.is_filtering() {
        state.list.handle_key(key);
        return Vec::new();
    }

    if Binding::New.matches(key) {
        state.input.reset();
        state.update_placeholder();
        state.list.reset_filter();
        state.mode = Mode::Input(InputKind::Create);
        return leave_browsing(state);
    }

    if Binding::Rename.matches(key) {
        let Some(title) = state.selected_title() else {
            return Vec::new();
        };
        let target = state.vault_relative(&title);
        state.input.set_value(&target);
        state.list.reset_filter();
        state.mode = Mode::Input(InputKind::Rename { target });
        return leave_browsing(state);
    }

    if Binding::Delete.matches(key) {
        let Some(target) = state.selected_title() else {
            return Vec::new();
        };
        state.list.reset_filter();
        state.mode = Mode::ConfirmDelete { target };
        return leave_browsing(state);
    }

    if Binding::CycleSort.matches(key) {
        state.sort = state.sort.next();
        tracing::debug!(sort = %state.sort, "sort mode cycled");
        state.refresh_catalog();
        return Vec::new();
    }

    if Binding::TogglePreview.matches(key) {
        state.show_preview = !state.show_preview;
        tracing::debug!(show_preview = state.show_preview, "preview toggled");
        let (width, height) = (state.width, state.height);
        return handle_resize(state, width, height);
    }

    if Binding::YapMode.matches(key) {
        if let Some(journal) = key.typed_char().and_then(JournalMode::from_digit) {
            state.journal = journal;
            tracing::debug!(%journal, "journal mode switched");
            state.list.reset_filter();
            state.refresh_catalog();
            state.list.go_to_start();
            state.forget_preview();
            state.update_placeholder();
        }
        return Vec::new();
    }

    if key.code == KeyCode::Enter && !key.ctrl {
        return state
            .selected_title()
            .map(|title| Command::OpenEditor {
                path: state.resolve(&title),
            })
            .into_iter()
            .collect();
    }

    state.list.handle_key(key);
    Vec::new()
}

/// Hides graphics and forgets the preview when a modal replaces the panes.
fn leave_browsing(state: &mut AppState) -> Vec<Command> {
    state.forget_preview();
    vec![Command::ClearGraphics]
}

fn handle_mouse(state: &mut AppState, mouse: MouseInput) -> Vec<Command> {
    if !state.mode.is_browsing() {
        return Vec::new();
    }

    let layout = state.layout();
    if mouse.column < layout.list_width {
        match mouse.wheel {
            Wheel::Up => state.list.cursor_up(),
            Wheel::Down => state.list.cursor_down(),
        }
    } else if state.show_preview && mouse.column > layout.list_width {
        match mouse.wheel {
            Wheel::Up => state.viewport.line_up(1),
            Wheel::Down => state.viewport.line_down(1),
        }
    }
    Vec::new()
}

fn handle_resize(state: &mut AppState, width: usize, height: usize) -> Vec<Command> {
    state.resize(width, height);

    if !state.ready {
        tracing::debug!(width, height, "initial geometry received");
        state.ready = true;
        return Vec::new();
    }

    state.forget_preview();
    vec![Command::ClearGraphics]
}

fn handle_image_rendered(state: &mut AppState, path: &PathBuf, drawn: bool) -> Vec<Command> {
    if !drawn {
        tracing::debug!(path = %path.display(), "no image produced");
        return Vec::new();
    }

    state.overlay = Some(path.clone());

    let current = state
        .selected_file
        .as_deref()
        .filter(|_| state.show_preview && state.mode.is_browsing())
        .map(|title| state.resolve(title));
    if current.as_ref() == Some(path) {
        return Vec::new();
    }

    tracing::debug!(path = %path.display(), "stale image drawn");
    if state.mode.is_browsing() && state.show_preview {
        state.forget_preview();
        Vec::new()
    } else {
        vec![Command::ClearGraphics]
    }
}

/// Issues a preview load when the highlighted note differs from the
/// previewed one.
fn sync_selection(state: &mut AppState) -> Option<Command> {
    if !state.ready || state.should_quit || !state.mode.is_browsing() {
        return None;
    }

    let Some(title) = state.selected_title() else {
        let stale = state.selected_file.take().is_some()
            || !state.viewport.is_empty()
            || state.overlay.is_some();
        if stale {
            state.viewport.clear();
            return Some(Command::ClearGraphics);
        }
        return None;
    };

    if state.selected_file.as_deref() == Some(title.as_str()) {
        return None;
    }

    tracing::debug!(title = %title, "selection changed");
    let path = state.resolve(&title);
    state.selected_file = Some(title);

    state.show_preview.then(|| state.preview_command(path))
}
