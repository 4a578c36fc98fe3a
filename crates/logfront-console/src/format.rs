//! Status line rendering.

use std::fmt::Write as _;
use std::thread;

use logfront_core::Record;
use time::OffsetDateTime;
use time::macros::format_description;

use crate::config::{StatusConfig, StatusFormat};

/// UTC timestamp with millisecond precision.
fn timestamp() -> Option<String> {
    let format = format_description!(
        "[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:3]Z"
    );
    OffsetDateTime::now_utc().format(format).ok()
}

/// `name:ThreadId(n)` of the calling thread.
fn thread_tag() -> String {
    let current = thread::current();
    format!("{}:{:?}", current.name().unwrap_or("unnamed"), current.id())
}

/// Render `record` as one or more newline-terminated lines.
///
/// An attached error follows the message, one line per link in its
/// `source()` chain. The result is written with a single call so the lines
/// of one record stay together.
#[must_use]
pub fn render(record: &Record<'_>, config: &StatusConfig) -> String {
    match config.format {
        StatusFormat::Plain => render_plain(record, config),
        StatusFormat::Json => render_json(record, config),
    }
}

fn render_plain(record: &Record<'_>, config: &StatusConfig) -> String {
    let mut out = String::new();
    if config.timestamps {
        if let Some(ts) = timestamp() {
            out.push_str(&ts);
            out.push(' ');
        }
    }
    let _ = writeln!(
        out,
        "{} [{}] {} - {}",
        record.level(),
        thread_tag(),
        record.target(),
        record.args()
    );
    if let Some(err) = record.error() {
        let _ = writeln!(out, "{err}");
        for cause in record.causes() {
            let _ = writeln!(out, "caused by: {cause}");
        }
    }
    out
}

fn render_json(record: &Record<'_>, config: &StatusConfig) -> String {
    let mut object = serde_json::json!({
        "level": record.level().as_str(),
        "thread": thread_tag(),
        "target": record.target(),
        "msg": record.args().to_string(),
    });
    if config.timestamps {
        if let Some(ts) = timestamp() {
            object["ts"] = serde_json::Value::String(ts);
        }
    }
    if let Some(err) = record.error() {
        let chain: Vec<String> = std::iter::once(err.to_string())
            .chain(record.causes().map(|c| c.to_string()))
            .collect();
        object["error"] = serde_json::json!(chain);
    }
    let mut out = object.to_string();
    out.push('\n');
    out
}
