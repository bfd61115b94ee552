//! Test helpers shared across the workspace.
//!
//! [`LogCapture`] records every tracing event emitted on the current thread as
//! `LEVEL target: message fields` lines, so tests can assert the order of log
//! lines within one call without scraping stdout.
use std::fmt::{self, Write as _};
use std::sync::{Arc, Mutex};

use regex::Regex;
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

#[derive(Debug, Clone, Default)]
pub struct LogCapture {
    lines: Arc<Mutex<Vec<String>>>,
}

impl LogCapture {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `f` with this capture installed as the thread's default subscriber.
    pub fn run<R>(&self, f: impl FnOnce() -> R) -> R {
        let subscriber = tracing_subscriber::registry().with(self.clone());
        tracing::subscriber::with_default(subscriber, f)
    }

    /// Snapshot of the lines recorded so far.
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().map(|l| l.clone()).unwrap_or_default()
    }

    pub fn clear(&self) {
        if let Ok(mut lines) = self.lines.lock() {
            lines.clear();
        }
    }
}

/// Capture everything `f` logs on this thread.
pub fn capture<R>(f: impl FnOnce() -> R) -> (R, Vec<String>) {
    let capture = LogCapture::new();
    let out = capture.run(f);
    (out, capture.lines())
}

impl<S: Subscriber> Layer<S> for LogCapture {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = LineVisitor::default();
        event.record(&mut visitor);
        let meta = event.metadata();
        let text = format!(
            "{} {}: {}{}",
            meta.level(),
            meta.target(),
            visitor.message,
            visitor.fields
        );
        if let Ok(mut lines) = self.lines.lock() {
            lines.extend(text.lines().map(str::to_owned));
        }
    }
}

#[derive(Default)]
struct LineVisitor {
    message: String,
    fields: String,
}

impl Visit for LineVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message = value.to_owned();
        } else {
            let _ = write!(self.fields, " {}={}", field.name(), value);
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{value:?}");
        } else {
            let _ = write!(self.fields, " {}={:?}", field.name(), value);
        }
    }
}

/// Check that `patterns` match lines of `lines` in order, other lines allowed
/// in between. Each pattern is a regex searched anywhere in a line.
pub fn contains_subsequence(lines: &[String], patterns: &[&str]) -> Result<(), String> {
    let mut remaining = lines.iter();
    for pattern in patterns {
        let re = Regex::new(pattern).map_err(|e| format!("bad pattern {pattern:?}: {e}"))?;
        if !remaining.by_ref().any(|line| re.is_match(line)) {
            return Err(format!(
                "no line matching {pattern:?} after the previous match; captured:\n{}",
                lines.join("\n")
            ));
        }
    }
    Ok(())
}

/// Panicking form of [`contains_subsequence`] for use in tests.
#[track_caller]
pub fn assert_subsequence(lines: &[String], patterns: &[&str]) {
    if let Err(msg) = contains_subsequence(lines, patterns) {
        panic!("{msg}");
    }
}
