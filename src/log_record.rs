// SPDX-License-Identifier: MIT OR Apache-2.0

//! Log record type for the tracewise logging pipeline.
//!
//! This module defines [`LogRecord`], the data structure that accumulates the parts of one
//! formatted trace line before it is handed to the registered sinks. Records are built
//! incrementally with [`LogRecord::log`] and [`LogRecord::log_owned`], then submitted via
//! [`Logger::finish_log_record`](crate::Logger::finish_log_record).
//!
//! Storing parts separately rather than concatenating eagerly keeps allocation out of the
//! hot path: a sink that writes parts one by one (like the stderr sink) never needs the
//! joined string at all.

use crate::Level;
use std::fmt::{Debug, Display};

/**
One log line, accumulated as parts.

The tracer progressively writes the correlation id, the nesting prefix, the label, and the
timing suffix into a record, then submits the finished record to every registered sink.
*/
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LogRecord {
    pub(crate) parts: Vec<String>,
    level: Level,
}

impl LogRecord {
    pub fn new(level: Level) -> Self {
        Self {
            parts: Vec::new(),
            level,
        }
    }

    /**
    Append the message to the record.

    This is called in the case that a message is not already owned.
    */
    pub fn log(&mut self, message: &str) {
        self.parts.push(message.to_string());
    }

    /**
    Append the message to the record, taking ownership of the message.

    This is useful for messages that are already owned, such as those that are constructed
    in the process of formatting.
    */
    pub fn log_owned(&mut self, message: String) {
        self.parts.push(message);
    }

    pub fn level(&self) -> Level {
        self.level
    }
}

impl Default for LogRecord {
    fn default() -> Self {
        Self::new(Level::Info)
    }
}

impl Display for LogRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for part in &self.parts {
            write!(f, "{}", part)?;
        }
        Ok(())
    }
}

/*
Boilerplate notes for LogRecord:

IMPLEMENTED:
- Debug: Derived - essential for diagnostics
- Clone: Derived - a record is submitted to each registered sink by value
- PartialEq/Eq/Hash: Derived - enables comparison and deduplication in sinks
- Default: Implemented - sensible zero-value (Info level, empty parts)
- Display: Implemented - joins the parts for output

NOT IMPLEMENTED:
- Copy: Vec<String> contains heap-allocated data, not suitable for Copy
- Ord/PartialOrd: no meaningful ordering for log records
- From/Into, AsRef/AsMut, Deref: no obvious underlying type
*/
