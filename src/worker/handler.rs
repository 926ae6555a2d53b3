//! Execution of commands off the event loop thread.
//!
//! [`CommandRunner`] turns each leaf [`Command`] into exactly one completion
//! [`Event`]. Sequences run their children in order on the calling thread;
//! batches fan out to scoped threads. Failures are folded into the completion
//! event (an error label, `drawn: false`) rather than returned.

use super::messages::{Job, TraceContext};
use crate::app::{Command, Event};
use crate::preview::{self, GraphicsSink, ImageConverter, ImageGeometry};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::thread;

/// Runs commands against the graphics sink and image converter.
#[derive(Clone)]
pub struct CommandRunner {
    sink: Arc<dyn GraphicsSink>,
    converter: Arc<dyn ImageConverter>,
}

impl CommandRunner {
    #[must_use]
    pub fn new(sink: Arc<dyn GraphicsSink>, converter: Arc<dyn ImageConverter>) -> Self {
        Self { sink, converter }
    }

    /// Runs `job` to completion, passing every completion event to `emit`.
    ///
    /// Returns once every leaf has completed.
    pub fn run(&self, job: Job, emit: &(dyn Fn(Event) + Sync)) {
        let _context_guard = job.trace_context.as_ref().map(TraceContext::attach);

        let span = tracing::debug_span!("run_command", command = job.command.name());
        let _guard = span.entered();

        match &job.command {
            Command::Sequence(children) => {
                for child in children {
                    self.run(job.child(child.clone()), emit);
                }
            }
            Command::Batch(children) => {
                thread::scope(|scope| {
                    for child in children {
                        let child = job.child(child.clone());
                        scope.spawn(move || self.run(child, emit));
                    }
                });
            }
            leaf => {
                if let Some(event) = self.run_leaf(leaf) {
                    emit(event);
                }
            }
        }
    }

    fn run_leaf(&self, command: &Command) -> Option<Event> {
        let event = match command {
            Command::ClearGraphics => {
                if let Err(e) = self.sink.clear() {
                    tracing::warn!(error = %e, "failed to clear graphics");
                }
                Event::GraphicsCleared
            }
            Command::BlankViewport => Event::ViewportCleared,
            Command::LoadText { path } => Event::TextLoaded {
                path: path.clone(),
                content: preview::load_text(path),
            },
            Command::RenderImage { path, geometry } => Event::ImageRendered {
                path: path.clone(),
                drawn: self.render_image(path, *geometry),
            },
            Command::OpenEditor { path } => Self::editor_off_thread(path.clone()),
            Command::Quit => Event::Quit,
            Command::Sequence(_) | Command::Batch(_) => return None,
        };
        Some(event)
    }

    fn render_image(&self, path: &Path, geometry: ImageGeometry) -> bool {
        let Some(payload) = self.converter.convert(path, geometry.cols, geometry.rows) else {
            return false;
        };

        match self.sink.draw(geometry.origin, &payload) {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "failed to draw image");
                false
            }
        }
    }

    /// The editor needs the terminal; off the event loop it can only fail.
    fn editor_off_thread(path: PathBuf) -> Event {
        tracing::warn!(path = %path.display(), "editor launch reached a worker thread");
        Event::EditorClosed {
            path,
            error: Some("editor must run in the foreground".to_string()),
        }
    }
}

impl std::fmt::Debug for CommandRunner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandRunner").finish_non_exhaustive()
    }
}
