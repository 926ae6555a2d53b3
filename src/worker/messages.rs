//! Jobs handed to worker threads.
//!
//! A [`Job`] pairs a [`Command`] with the trace context of the event that
//! produced it, so spans opened while the command runs on another thread are
//! linked to the span of the event handler.

use crate::app::Command;
use opentelemetry::trace::{SpanContext, TraceContextExt};
use opentelemetry::{Context, ContextGuard};
use tracing_opentelemetry::OpenTelemetrySpanExt;

/// Span context of the event handler that issued a command.
///
/// Jobs never leave the process, so the OpenTelemetry context is carried as
/// is rather than encoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceContext {
    span_context: SpanContext,
}

impl TraceContext {
    /// Captures the current tracing span, if it is being exported.
    ///
    /// ```no_run
    /// use yappad::worker::TraceContext;
    ///
    /// let _span = tracing::info_span!("handle_event").entered();
    /// let context = TraceContext::from_current();
    /// ```
    #[must_use]
    pub fn from_current() -> Option<Self> {
        let span_context = tracing::Span::current()
            .context()
            .span()
            .span_context()
            .clone();

        span_context.is_valid().then(|| {
            tracing::trace!(trace_id = %span_context.trace_id(), "capturing trace context");
            Self { span_context }
        })
    }

    /// Makes this context the remote parent of spans opened on the calling
    /// thread until the guard drops.
    #[must_use]
    pub fn attach(&self) -> ContextGuard {
        Context::current()
            .with_remote_span_context(self.span_context.clone())
            .attach()
    }
}

/// A command on its way to a worker thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    pub command: Command,

    /// Trace context of the span that issued the command.
    pub trace_context: Option<TraceContext>,
}

impl Job {
    /// Wraps `command` with the current trace context.
    #[must_use]
    pub fn new(command: Command) -> Self {
        Self {
            command,
            trace_context: TraceContext::from_current(),
        }
    }

    /// Wraps a child of this job's command, inheriting its trace context.
    #[must_use]
    pub fn child(&self, command: Command) -> Self {
        Self {
            command,
            trace_context: self.trace_context.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use opentelemetry::trace::{SpanId, TraceFlags, TraceId, TraceState};

    fn sampled_context() -> TraceContext {
        TraceContext {
            span_context: SpanContext::new(
                TraceId::from_hex("0af7651916cd43dd8448eb211c80319c").unwrap(),
                SpanId::from_hex("b7ad6b7169203331").unwrap(),
                TraceFlags::SAMPLED,
                false,
                TraceState::default(),
            ),
        }
    }

    #[test]
    fn children_inherit_trace_context() {
        let job = Job {
            command: Command::Quit,
            trace_context: Some(sampled_context()),
        };

        let child = job.child(Command::ClearGraphics);
        assert_eq!(child.trace_context, job.trace_context);
        assert_eq!(child.command, Command::ClearGraphics);
    }

    #[test]
    fn attached_context_parents_the_thread() {
        let context = sampled_context();
        {
            let _guard = context.attach();
            let current = Context::current();
            assert_eq!(current.span().span_context().trace_id(), context.span_context.trace_id());
            assert!(current.span().span_context().is_remote());
        }
        assert!(!Context::current().span().span_context().is_valid());
    }

    #[test]
    fn no_context_outside_an_exported_span() {
        assert!(TraceContext::from_current().is_none());
    }
}
