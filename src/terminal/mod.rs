//! The interactive event loop.
//!
//! One thread owns the terminal: it reads input, feeds every event through
//! [`handle_event`], redraws, and runs the editor. Everything else a command
//! asks for happens on worker threads whose completions come back through a
//! single channel.
//!
//! ```text
//! crossterm input ─┐
//!                  ├─► handle_event ─► commands ─► Dispatcher ─► worker threads
//! completions ─────┘        │                                         │
//!      ▲                    ▼                                         │
//!      │               render ─► FrameWriter ─► SharedOutput ◄── graphics sink
//!      └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`session`]: raw mode, alternate screen and mouse capture
//! - [`input`]: crossterm events to application events
//! - [`editor`]: editor resolution and launch
//! - [`writer`]: line-diffing frame output

pub mod editor;
pub mod input;
pub mod session;
pub mod writer;

use crate::app::{handle_event, AppState, Command, Event};
use crate::config::Config;
use crate::domain::error::Result;
use crate::infrastructure::SharedOutput;
use crate::preview::graphics::CLEAR_ALL_IMAGES;
use crate::preview::{ChafaConverter, TerminalSink};
use crate::ui::render;
use crate::worker::{CommandRunner, Dispatcher};
use crossterm::event;
use session::TerminalSession;
use std::collections::VecDeque;
use std::io::Write;
use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver};
use std::sync::Arc;
use std::time::Duration;
use writer::FrameWriter;

/// How long to wait for terminal input before checking for completions.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Runs the UI until the user quits.
///
/// # Errors
///
/// Returns an error if the terminal cannot be set up or written to. Failures
/// inside commands are reported back as events and never end the loop.
pub fn run(state: AppState, config: &Config) -> Result<()> {
    let output = SharedOutput::stdout();
    let runner = CommandRunner::new(
        Arc::new(TerminalSink::new(output.clone())),
        Arc::new(ChafaConverter::new(config.image_converter())),
    );
    let (events, completions) = mpsc::channel();

    let mut runtime = Runtime {
        state,
        dispatcher: Dispatcher::new(runner, events),
        editor: editor::resolve_editor(std::env::var("EDITOR").ok(), config.editor.as_deref()),
        writer: FrameWriter::new(),
        session: TerminalSession::enter()?,
        output,
    };

    let result = runtime.event_loop(&completions);
    runtime.clear_graphics();
    result
}

struct Runtime {
    state: AppState,
    dispatcher: Dispatcher,
    editor: String,
    writer: FrameWriter,
    session: TerminalSession,
    output: SharedOutput,
}

impl Runtime {
    fn event_loop(&mut self, completions: &Receiver<Event>) -> Result<()> {
        let (width, height) = crossterm::terminal::size()?;
        self.process(Event::Resize {
            width: usize::from(width),
            height: usize::from(height),
        })?;

        while !self.state.should_quit {
            self.writer.write(&render(&self.state), &self.output)?;

            while let Ok(completion) = completions.try_recv() {
                self.process(completion)?;
                if self.state.should_quit {
                    return Ok(());
                }
            }

            if event::poll(POLL_INTERVAL)? {
                if let Some(input) = input::translate(&event::read()?) {
                    self.process(input)?;
                }
            }
        }

        tracing::debug!("event loop finished");
        Ok(())
    }

    /// Applies `event` and starts the commands it produces.
    ///
    /// Editor launches run here, in order, on the terminal-owning thread; the
    /// `EditorClosed` they produce is processed before returning.
    fn process(&mut self, event: Event) -> Result<()> {
        let mut pending = VecDeque::from([event]);

        while let Some(event) = pending.pop_front() {
            let commands = handle_event(&mut self.state, &event);
            if commands.is_empty() {
                continue;
            }

            let (editors, rest) = Command::batch(commands).take_foreground();
            if let Some(rest) = rest {
                if let Err(e) = self.dispatcher.dispatch(rest) {
                    tracing::error!(error = %e, "failed to dispatch command");
                }
            }

            for path in editors {
                pending.push_back(self.open_editor(path)?);
            }

            if !pending.is_empty() {
                let (width, height) = crossterm::terminal::size()?;
                let (width, height) = (usize::from(width), usize::from(height));
                if (width, height) != (self.state.width, self.state.height) {
                    pending.push_back(Event::Resize { width, height });
                }
            }
        }
        Ok(())
    }

    /// Suspends the UI, runs the editor on `path` and takes the terminal back.
    ///
    /// The output lock is held throughout, so a late image draw waits for the
    /// UI instead of landing on the editor's screen.
    fn open_editor(&mut self, path: PathBuf) -> Result<Event> {
        let span = tracing::debug_span!("open_editor", path = %path.display());
        let _enter = span.enter();

        let result = {
            let mut out = self.output.lock()?;
            out.write_all(CLEAR_ALL_IMAGES)?;
            out.flush()?;

            self.session.suspend()?;
            let result = editor::launch(&self.editor, &path);
            self.session.resume()?;
            result
        };
        self.writer.invalidate();

        Ok(Event::EditorClosed {
            path,
            error: result.err().map(|e| e.to_string()),
        })
    }

    fn clear_graphics(&self) {
        if let Err(e) = self.output.write_atomic(CLEAR_ALL_IMAGES) {
            tracing::debug!(error = %e, "failed to clear graphics on exit");
        }
    }
}
