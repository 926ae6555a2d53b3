//! Hands commands to background threads and routes completions back.

use super::handler::CommandRunner;
use super::messages::Job;
use crate::app::{Command, Event};
use std::io;
use std::sync::mpsc::Sender;
use std::sync::Arc;
use std::thread;

/// Spawns a thread per independent command and feeds completion events into
/// the event loop's queue.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    runner: Arc<CommandRunner>,
    events: Sender<Event>,
}

impl Dispatcher {
    #[must_use]
    pub fn new(runner: CommandRunner, events: Sender<Event>) -> Self {
        Self {
            runner: Arc::new(runner),
            events,
        }
    }

    /// Starts `command` in the background.
    ///
    /// Children of a top-level batch get a thread each; any other command runs
    /// on one thread, sequences in order.
    ///
    /// # Errors
    ///
    /// Returns an error if a thread cannot be spawned.
    pub fn dispatch(&self, command: Command) -> io::Result<()> {
        match command {
            Command::Batch(children) => {
                for child in children {
                    self.spawn(Job::new(child))?;
                }
                Ok(())
            }
            command => self.spawn(Job::new(command)),
        }
    }

    fn spawn(&self, job: Job) -> io::Result<()> {
        let runner = Arc::clone(&self.runner);
        let events = self.events.clone();
        let name = format!("yap-{}", job.command.name());

        tracing::trace!(thread = %name, "dispatching command");

        thread::Builder::new().name(name).spawn(move || {
            runner.run(job, &|event| {
                if events.send(event).is_err() {
                    tracing::debug!("event loop gone, dropping completion");
                }
            });
        })?;
        Ok(())
    }
}
