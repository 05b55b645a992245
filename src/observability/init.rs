//! Tracing subscriber setup.

use super::exporter;
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use std::path::Path;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Name reported as `service.name` and used for the tracer.
const SERVICE_NAME: &str = "showcase";

/// File inside the data directory that receives exported spans.
pub const TRACE_FILE_NAME: &str = "showcase-traces.json";

/// Installs the global subscriber: an `EnvFilter` built from
/// `config.trace_level` (default `"info"`) and an OpenTelemetry layer
/// exporting to `<data_dir>/showcase-traces.json`.
///
/// Observability is optional: if `data_dir` cannot be created this returns
/// without installing anything. Only the first call in a process takes effect.
pub fn init_tracing(config: &Config, data_dir: &Path) {
    let level = config.trace_level.as_deref().unwrap_or("info");

    if std::fs::create_dir_all(data_dir).is_err() {
        return;
    }

    let provider = exporter::tracer_provider(data_dir.join(TRACE_FILE_NAME), SERVICE_NAME);
    let otel_layer = OpenTelemetryLayer::new(provider.tracer(SERVICE_NAME));

    let subscriber = tracing_subscriber::registry()
        .with(EnvFilter::new(level))
        .with(otel_layer);

    let _ = subscriber.try_init();
}
