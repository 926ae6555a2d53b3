//! Background execution of side-effect commands.
//!
//! Commands returned by the event handler run on worker threads so that
//! reading files, highlighting and image conversion never block input. Each
//! completion is sent back to the event loop as an [`Event`](crate::app::Event)
//! on a single channel, which keeps all state mutation on one thread.
//!
//! # Architecture
//!
//! - `messages`: Jobs with trace context propagation across threads
//! - `handler`: Command execution against the graphics sink and converter
//! - `dispatcher`: Thread spawning and completion routing

pub mod dispatcher;
pub mod handler;
pub mod messages;

pub use dispatcher::Dispatcher;
pub use handler::CommandRunner;
pub use messages::{Job, TraceContext};
