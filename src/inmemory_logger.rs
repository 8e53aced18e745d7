// SPDX-License-Identifier: MIT OR Apache-2.0

//! # In-Memory Logger
//!
//! This module provides an in-memory sink for testing and debugging purposes. The
//! `InMemoryLogger` captures formatted trace lines in memory rather than writing them to
//! stderr, making it ideal for:
//!
//! - Unit testing code that is wrapped in tracewise spans
//! - Asserting on the exact shape of start/completion lines
//! - Capturing output in environments where stderr is redirected or unavailable
//!
//! The logger uses a `Mutex<Vec<String>>` internally so multiple threads may log
//! concurrently while tests see a consistent view of the accumulated lines.

use crate::log_record::LogRecord;
use crate::logger::Logger;
use std::sync::Mutex;

/// An in-memory sink that stores each log line in a `Vec<String>`.
///
/// Typically installed for the duration of a test with
/// [`set_global_loggers`](crate::set_global_loggers):
///
/// ```rust
/// use std::sync::Arc;
/// use tracewise::{InMemoryLogger, Tracer, set_global_loggers};
///
/// let logger = Arc::new(InMemoryLogger::new());
/// set_global_loggers(vec![logger.clone()]);
///
/// let tracer = Tracer::thread_scoped();
/// let span = tracer.begin("request");
/// tracer.end(span);
///
/// let lines = logger.lines();
/// assert_eq!(lines.len(), 2);
/// assert!(lines[0].ends_with("request"));
/// assert!(lines[1].contains("time="));
/// ```
#[derive(Debug)]
pub struct InMemoryLogger {
    logs: Mutex<Vec<String>>,
}

// Boilerplate notes: Default has the obvious zero-value (empty buffer).  Clone is NOT
// implemented - a captured log buffer is a unique resource, duplicating it mid-test is a
// recipe for asserting against the wrong copy.  PartialEq/Eq/Hash are unclear for a
// mutex-wrapped buffer, so they're out.  Send/Sync come for free from the Mutex.

impl Default for InMemoryLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryLogger {
    /// Creates a new `InMemoryLogger` with an empty buffer.
    pub fn new() -> Self {
        Self {
            logs: Mutex::new(Vec::new()),
        }
    }

    /// Returns a snapshot of the captured lines, in submission order.
    ///
    /// The buffer is left intact; call [`drain_logs`](Self::drain_logs) to clear it.
    pub fn lines(&self) -> Vec<String> {
        self.logs.lock().unwrap().clone()
    }

    /// Drains all lines into a single newline-joined string, clearing the buffer.
    ///
    /// Subsequent calls return an empty string unless new lines have been captured.
    pub fn drain_logs(&self) -> String {
        let mut logs = self.logs.lock().unwrap();
        let result = logs.join("\n");
        logs.clear();
        result
    }
}

impl Logger for InMemoryLogger {
    /// Converts the record to a string via its `Display` implementation and appends it to
    /// the internal buffer.
    fn finish_log_record(&self, record: LogRecord) {
        let log_string = record.to_string();
        let mut logs = self.logs.lock().unwrap();
        logs.push(log_string);
    }
}
