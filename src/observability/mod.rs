//! OpenTelemetry-based observability with file-based trace export.
//!
//! The terminal belongs to the UI, so spans are never printed. They are
//! encoded as OTLP JSON and appended to a rotating file for offline analysis.
//!
//! # Architecture
//!
//! ```text
//! tracing → tracing-opentelemetry → OpenTelemetry SDK → FileExporter → JSON lines
//! ```
//!
//! Files rotate at 10 MB and the three newest backups are kept.
//!
//! The filter directive comes from `RUST_LOG` when set, then `trace_level`
//! in the config file, then `info`.
//!
//! # Usage
//!
//! ```no_run
//! use yappad::config::Config;
//! use yappad::observability::init_tracing;
//!
//! init_tracing(&Config::default());
//! tracing::debug!("vault opened");
//! ```
//!
//! # Modules
//!
//! - `init`: Subscriber setup and filter resolution
//! - `export`: Span exporter and tracer provider
//! - `otlp`: OTLP JSON encoding
//! - `rotation`: Size-rotated append-only file

mod export;
mod init;
mod otlp;
mod rotation;

pub use init::{init_tracing, TRACE_FILE_NAME};
