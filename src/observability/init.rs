//! Tracing initialization and subscriber setup.

use super::export::{file_tracer_provider, SERVICE_NAME};
use crate::config::Config;
use crate::infrastructure::paths;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry_sdk::resource::Resource;
use std::path::PathBuf;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Name of the trace file inside the data directory.
pub const TRACE_FILE_NAME: &str = "yappad-otlp.json";

/// Picks the filter directive: `RUST_LOG`, then `trace_level`, then `info`.
fn env_filter(config: &Config) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = config.trace_level.as_deref().unwrap_or("info");
        EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"))
    })
}

/// Installs the global subscriber exporting spans to the trace file.
///
/// Returns the trace file path, or `None` when the data directory cannot be
/// created. Telemetry is optional, so that case is silent. Only the first
/// call in a process takes effect.
pub fn init_tracing(config: &Config) -> Option<PathBuf> {
    let data_dir = paths::get_data_dir();
    std::fs::create_dir_all(&data_dir).ok()?;

    let trace_file = data_dir.join(TRACE_FILE_NAME);
    let resource = Resource::new(vec![opentelemetry::KeyValue::new(
        "service.name",
        SERVICE_NAME,
    )]);

    let provider = file_tracer_provider(trace_file.clone(), resource);
    opentelemetry::global::set_tracer_provider(provider.clone());
    let otel_layer = OpenTelemetryLayer::new(provider.tracer(SERVICE_NAME));

    let _ = tracing_subscriber::registry()
        .with(env_filter(config))
        .with(otel_layer)
        .try_init();

    tracing::debug!(trace_file = %trace_file.display(), "tracing initialized");
    Some(trace_file)
}
