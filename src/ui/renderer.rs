//! Top-level rendering coordinator.
//!
//! This module provides the main rendering entry point, coordinating view model
//! computation and delegation to UI components. Rendering is a pure function:
//! the same state always yields the same [`Frame`], and nothing is written to
//! the terminal here.
//!
//! # Architecture
//!
//! The renderer follows a two-step process:
//!
//! 1. **View Model Computation**: Transform `AppState` into `UIViewModel`
//! 2. **Component Rendering**: Delegate to the layout for the active body
//!
//! # Example
//!
//! ```
//! use yappad::app::AppState;
//! use yappad::domain::{Clock, JournalMode};
//! use yappad::ui::{render, Theme};
//! use yappad::vault::Vault;
//!
//! let mut state = AppState::new(Vault::new("/nonexistent"), JournalMode::Daily, Clock::System, Theme::default());
//! state.resize(80, 24);
//! let frame = render(&state);
//! assert_eq!(frame, render(&state));
//! ```

use crate::app::AppState;
use crate::ui::components;
use crate::ui::helpers::truncate_ansi;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{Body, UIViewModel};

/// One screenful of styled lines, row 1 first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Frame {
    pub lines: Vec<String>,
}

impl Frame {
    /// The frame as plain text, escape sequences removed.
    #[must_use]
    pub fn plain_text(&self) -> String {
        self.lines
            .iter()
            .map(|line| strip_ansi_escapes::strip_str(line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Renders the current state into a frame.
#[must_use]
pub fn render(state: &AppState) -> Frame {
    let viewmodel = state.compute_viewmodel();
    render_viewmodel(&viewmodel, &state.theme, state.width, state.height)
}

/// Renders a view model with the layout its body selects.
///
/// The result never has more than `rows` lines or lines wider than `cols`.
#[must_use]
pub fn render_viewmodel(vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) -> Frame {
    let lines = match &vm.body {
        Body::ConfirmDelete(confirm) => components::render_confirm_mode(&vm.header, confirm, theme),
        Body::Compose { input, list } => {
            components::render_compose_mode(&vm.header, input, list, theme)
        }
        Body::TwoPane {
            list,
            preview,
            footer,
        } => components::render_two_pane_mode(&vm.header, list, preview, footer, theme, cols),
        Body::SinglePane { list, footer } => {
            components::render_single_pane_mode(&vm.header, list, footer, theme, cols)
        }
    };

    Frame {
        lines: lines
            .into_iter()
            .take(rows)
            .map(|line| truncate_ansi(&line, cols))
            .collect(),
    }
}
