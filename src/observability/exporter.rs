//! Span exporter writing one JSON object per span to a rotating file.
//!
//! Each finished span becomes a single line:
//!
//! ```json
//! {"traceId":"…","spanId":"…","parentSpanId":"…","name":"theme_update",
//!  "startTimeUnixNano":"…","durationMicros":42,
//!  "attributes":{"mode":"light"},"events":[…],"status":"unset"}
//! ```
//!
//! The file is rotated once it exceeds [`MAX_FILE_BYTES`]; the newest
//! [`MAX_BACKUPS`] rotated files are kept.

use futures_util::future::BoxFuture;
use opentelemetry::trace::{SpanId, Status, TraceError};
use opentelemetry::{KeyValue, Value};
use opentelemetry_sdk::export::trace::{ExportResult, SpanData, SpanExporter};
use opentelemetry_sdk::resource::Resource;
use opentelemetry_sdk::trace::TracerProvider;
use serde_json::{json, Map, Value as JsonValue};
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

/// Rotation threshold for the trace file (5 MB).
pub const MAX_FILE_BYTES: u64 = 5 * 1024 * 1024;

/// Rotated files kept next to the live one.
pub const MAX_BACKUPS: usize = 2;

/// Append-only line writer with size-based rotation.
#[derive(Debug)]
pub(crate) struct RotatingFile {
    path: PathBuf,
    max_bytes: u64,
    file: Option<File>,
}

impl RotatingFile {
    pub(crate) const fn new(path: PathBuf, max_bytes: u64) -> Self {
        Self {
            path,
            max_bytes,
            file: None,
        }
    }

    /// Appends `line` and a newline, rotating first if the file is full.
    pub(crate) fn write_line(&mut self, line: &str) -> io::Result<()> {
        if fs::metadata(&self.path).is_ok_and(|m| m.len() > self.max_bytes) {
            self.file = None;
            self.rotate()?;
        }

        if self.file.is_none() {
            let opened = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&self.path)?;
            self.file = Some(opened);
        }

        if let Some(file) = self.file.as_mut() {
            writeln!(file, "{line}")?;
            file.flush()?;
        }
        Ok(())
    }

    fn rotate(&self) -> io::Result<()> {
        let stamp = chrono::Utc::now().format("%Y%m%d%H%M%S%3f");
        fs::rename(&self.path, self.backup_path(&stamp.to_string()))?;

        let mut backups = self.backups()?;
        // Timestamps sort lexically, newest last.
        backups.sort();
        let excess = backups.len().saturating_sub(MAX_BACKUPS);
        for old in backups.into_iter().take(excess) {
            let _ = fs::remove_file(old);
        }
        Ok(())
    }

    fn backup_path(&self, suffix: &str) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".");
        name.push(suffix);
        self.path.with_file_name(name)
    }

    fn backups(&self) -> io::Result<Vec<PathBuf>> {
        let parent = self.path.parent().filter(|p| !p.as_os_str().is_empty()).unwrap_or(Path::new("."));
        let Some(prefix) = self.path.file_name().and_then(|n| n.to_str()).map(|n| format!("{n}.")) else {
            return Ok(Vec::new());
        };

        Ok(fs::read_dir(parent)?
            .filter_map(std::result::Result::ok)
            .map(|entry| entry.path())
            .filter(|path| {
                path.file_name()
                    .and_then(|n| n.to_str())
                    .is_some_and(|n| n.starts_with(&prefix))
            })
            .collect())
    }
}

/// OpenTelemetry exporter backed by a [`RotatingFile`].
#[derive(Debug)]
struct JsonLinesExporter {
    out: RotatingFile,
    service: String,
    is_shutdown: bool,
}

impl SpanExporter for JsonLinesExporter {
    fn export(&mut self, batch: Vec<SpanData>) -> BoxFuture<'static, ExportResult> {
        if self.is_shutdown {
            return Box::pin(std::future::ready(Err(TraceError::from("exporter is shut down"))));
        }

        let result = batch
            .iter()
            .map(|span| span_to_json(span, &self.service).to_string())
            .try_for_each(|line| self.out.write_line(&line))
            .map_err(|e| TraceError::from(e.to_string()));

        Box::pin(std::future::ready(result))
    }

    fn shutdown(&mut self) {
        self.is_shutdown = true;
    }

    fn set_resource(&mut self, resource: &Resource) {
        if let Some(name) = resource.get(opentelemetry::Key::from_static_str("service.name")) {
            self.service = name.to_string();
        }
    }
}

fn unix_nanos(time: SystemTime) -> u128 {
    time.duration_since(UNIX_EPOCH).unwrap_or_default().as_nanos()
}

fn attribute_value(value: &Value) -> JsonValue {
    match value {
        Value::Bool(b) => json!(b),
        Value::I64(i) => json!(i),
        Value::F64(f) => json!(f),
        other => json!(other.to_string()),
    }
}

fn attributes(kvs: &[KeyValue]) -> JsonValue {
    let map: Map<String, JsonValue> = kvs
        .iter()
        .map(|kv| (kv.key.to_string(), attribute_value(&kv.value)))
        .collect();
    JsonValue::Object(map)
}

fn span_to_json(span: &SpanData, service: &str) -> JsonValue {
    let parent = if span.parent_span_id == SpanId::INVALID {
        JsonValue::Null
    } else {
        json!(format!("{:016x}", span.parent_span_id))
    };

    let duration_micros = span
        .end_time
        .duration_since(span.start_time)
        .unwrap_or_default()
        .as_micros();

    let events: Vec<JsonValue> = span
        .events
        .iter()
        .map(|event| {
            json!({
                "name": event.name,
                "timeUnixNano": unix_nanos(event.timestamp).to_string(),
                "attributes": attributes(&event.attributes),
            })
        })
        .collect();

    let status = match &span.status {
        Status::Unset => json!("unset"),
        Status::Ok => json!("ok"),
        Status::Error { description } => json!({ "error": description.to_string() }),
    };

    json!({
        "service": service,
        "traceId": format!("{:032x}", span.span_context.trace_id()),
        "spanId": format!("{:016x}", span.span_context.span_id()),
        "parentSpanId": parent,
        "name": span.name,
        "startTimeUnixNano": unix_nanos(span.start_time).to_string(),
        "durationMicros": duration_micros,
        "attributes": attributes(&span.attributes),
        "events": events,
        "status": status,
    })
}

/// Builds a tracer provider exporting every span to `trace_file` as it ends.
pub fn tracer_provider(trace_file: PathBuf, service: &str) -> TracerProvider {
    let resource = Resource::new(vec![KeyValue::new("service.name", service.to_string())]);
    let exporter = JsonLinesExporter {
        out: RotatingFile::new(trace_file, MAX_FILE_BYTES),
        service: service.to_string(),
        is_shutdown: false,
    };

    TracerProvider::builder()
        .with_config(opentelemetry_sdk::trace::Config::default().with_resource(resource))
        .with_simple_exporter(exporter)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appends_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("traces.json");
        let mut out = RotatingFile::new(path.clone(), MAX_FILE_BYTES);

        out.write_line("{\"a\":1}").unwrap();
        out.write_line("{\"b\":2}").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "{\"a\":1}\n{\"b\":2}\n");
    }

    #[test]
    fn rotates_and_prunes_backups() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("traces.json");
        let mut out = RotatingFile::new(path.clone(), 8);

        for i in 0..6 {
            out.write_line(&format!("line number {i}")).unwrap();
            std::thread::sleep(std::time::Duration::from_millis(2));
        }

        assert_eq!(fs::read_to_string(&path).unwrap(), "line number 5\n");
        assert_eq!(out.backups().unwrap().len(), MAX_BACKUPS);
    }

    #[test]
    fn attribute_values_keep_json_types() {
        assert_eq!(attribute_value(&Value::Bool(true)), json!(true));
        assert_eq!(attribute_value(&Value::I64(3)), json!(3));
        assert_eq!(attribute_value(&Value::from("light")), json!("light"));
    }
}
