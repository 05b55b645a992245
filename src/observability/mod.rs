//! OpenTelemetry-based observability with file-based trace export.
//!
//! ```text
//! tracing spans → tracing-opentelemetry → OpenTelemetry SDK → JSON lines file
//! ```
//!
//! Spans are written to `<data_dir>/showcase-traces.json`, one JSON object per
//! line, rotating at 5 MB. The filter level comes from `Config::trace_level`
//! and defaults to `"info"`.
//!
//! ```rust
//! use showcase::observability::init_tracing;
//! use showcase::Config;
//!
//! let dir = tempfile::tempdir()?;
//! init_tracing(&Config::default(), dir.path());
//! tracing::info!("tracing is now active");
//! # Ok::<(), std::io::Error>(())
//! ```

mod exporter;
mod init;

pub use exporter::{tracer_provider, MAX_BACKUPS, MAX_FILE_BYTES};
pub use init::{init_tracing, TRACE_FILE_NAME};
