// SPDX-License-Identifier: MIT OR Apache-2.0

//! The begin/end/exception facade and trace-line formatting.

use crate::global_logger::global_loggers;
use crate::holder::{ContextHolder, SharedSlotHolder, ThreadScopedHolder};
use crate::level::Level;
use crate::log_record::LogRecord;
use crate::span::TraceSpan;
use std::sync::Arc;
use std::time::Instant;

const START_MARKER: &str = "-->";
const COMPLETE_MARKER: &str = "<--";
const EX_MARKER: &str = "<X-";

/// The public face of the tracing facility.
///
/// A `Tracer` wraps one [`ContextHolder`] and turns its advance/retreat state machine
/// into formatted log lines:
///
/// ```text
/// [Hn2vPa8c]save order
/// [Hn2vPa8c]|-->insert row
/// [Hn2vPa8c]|  |-->check stock
/// [Hn2vPa8c]|  |<X-check stock time=0ms ex=out of stock
/// [Hn2vPa8c]|<--insert row time=3ms
/// [Hn2vPa8c]save order time=5ms
/// ```
///
/// Every line starts with the bracketed correlation id, then one `"|  "` segment per
/// enclosing level with the innermost segment replaced by `"|"` plus a marker: `-->` on
/// start, `<--` on normal completion, `<X-` on exceptional completion. A level-0 span
/// renders no prefix and no marker at all, so a single-level trace is just the bare
/// label.
///
/// `begin`, `end`, `exception`, and `fail` are synchronous and non-blocking apart from
/// the immediate sink write; none of them return errors or panic in release builds. The
/// business failure handed to `exception` is logged and nothing more - re-raising it is
/// the caller's job, and the tracer never converts, wraps, or suppresses it.
#[derive(Debug, Clone)]
pub struct Tracer {
    holder: Arc<dyn ContextHolder>,
}

impl Tracer {
    /// Creates a tracer over the given holder strategy.
    pub fn new(holder: Arc<dyn ContextHolder>) -> Self {
        Self { holder }
    }

    /// Convenience: a tracer over the naive process-wide slot.
    ///
    /// Correct only under one sequential flow; see
    /// [`SharedSlotHolder`] for the hazard this variant deliberately retains.
    pub fn shared_slot() -> Self {
        Self::new(Arc::new(SharedSlotHolder::new()))
    }

    /// Convenience: a tracer with per-thread context isolation.
    pub fn thread_scoped() -> Self {
        Self::new(Arc::new(ThreadScopedHolder::new()))
    }

    /// Starts one traced unit of work.
    ///
    /// Advances the holder (creating a fresh trace if none is in progress on this
    /// context), stamps the current instant, emits the start line, and returns the span
    /// to be handed to exactly one completion call. Always succeeds synchronously.
    pub fn begin(&self, label: &str) -> TraceSpan {
        let identity = self.holder.advance();
        let started = Instant::now();

        let mut record = LogRecord::new(Level::Info);
        record.log_owned(format!("[{}]", identity.correlation_id()));
        record.log_owned(nesting_prefix(START_MARKER, identity.level()));
        record.log(label);
        submit(record);

        TraceSpan::new(identity, started, label.to_string())
    }

    /// Completes a span normally, logging its elapsed time and retiring one level.
    pub fn end(&self, span: TraceSpan) {
        self.complete(span, None);
    }

    /// Completes a span exceptionally, logging the error's description.
    ///
    /// The error is observed, never handled: the caller re-raises it unchanged after
    /// this returns.
    pub fn exception(&self, span: TraceSpan, error: &dyn std::error::Error) {
        self.complete(span, Some(error.to_string()));
    }

    /// Completes a span exceptionally from a bare description, for callers that have a
    /// message rather than an error value.
    pub fn fail(&self, span: TraceSpan, description: &str) {
        self.complete(span, Some(description.to_string()));
    }

    fn complete(&self, span: TraceSpan, error: Option<String>) {
        let elapsed_ms = span.started().elapsed().as_millis();
        let identity = span.identity();
        let (marker, level) = match error {
            None => (COMPLETE_MARKER, Level::Info),
            Some(_) => (EX_MARKER, Level::Error),
        };

        let mut record = LogRecord::new(level);
        record.log_owned(format!("[{}]", identity.correlation_id()));
        record.log_owned(nesting_prefix(marker, identity.level()));
        record.log(span.label());
        record.log_owned(format!(" time={}ms", elapsed_ms));
        if let Some(description) = error {
            record.log_owned(format!(" ex={}", description));
        }
        submit(record);

        self.holder.retreat();
    }
}

fn submit(record: LogRecord) {
    for logger in global_loggers() {
        logger.finish_log_record(record.clone());
    }
}

/// Indentation prefix for a nesting level: `"|  "` per enclosing level, with the
/// innermost segment replaced by `"|"` plus the marker. Level 0 renders nothing.
fn nesting_prefix(marker: &str, level: u32) -> String {
    let mut prefix = String::new();
    for i in 0..level {
        if i + 1 == level {
            prefix.push('|');
            prefix.push_str(marker);
        } else {
            prefix.push_str("|  ");
        }
    }
    prefix
}
