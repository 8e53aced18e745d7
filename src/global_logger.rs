// SPDX-License-Identifier: MIT OR Apache-2.0

//! Global sink management for the tracewise logging pipeline.
//!
//! This module provides thread-safe management of the sinks that receive every trace line
//! the facility produces. Multiple sinks may be active simultaneously, so lines can go to
//! several destinations at once (stderr plus an in-memory capture, say).
//!
//! By default the registry initializes with a single [`StdErrorLogger`], so tracing works
//! out of the box without configuration.
//!
//! # Thread safety
//!
//! The registry is an `RwLock`-protected vector of `Arc<dyn Logger>`. Submitting a record
//! takes a read lock only long enough to clone the `Arc`s; reconfiguration takes the write
//! lock and is typically confined to initialization and test setup. Sinks removed by
//! [`set_global_loggers`] live on until in-flight submissions drop their references.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use tracewise::{InMemoryLogger, add_global_logger, global_loggers};
//!
//! // Get the current sinks (initializes with StdErrorLogger if needed)
//! let loggers = global_loggers();
//! assert!(!loggers.is_empty());
//!
//! // Add an in-memory capture alongside the existing sinks
//! let logger = Arc::new(InMemoryLogger::new());
//! add_global_logger(logger.clone());
//! ```

use crate::logger::Logger;
use crate::stderror_logger::StdErrorLogger;
use std::sync::{Arc, OnceLock, RwLock};

/// Static storage for the global sink collection.
static GLOBAL_LOGGERS: OnceLock<RwLock<Vec<Arc<dyn Logger>>>> = OnceLock::new();

fn get_or_init_loggers() -> &'static RwLock<Vec<Arc<dyn Logger>>> {
    GLOBAL_LOGGERS.get_or_init(|| {
        // Initialize the registry with a default StdErrorLogger.
        RwLock::new(vec![Arc::new(StdErrorLogger::new())])
    })
}

/// Retrieves the current set of global sinks.
///
/// Returns cloned `Arc` references so the sinks remain alive for the duration of a
/// submission even if the registry is reconfigured concurrently. If no sinks have been
/// configured, initializes with a default stderr sink, so the result is never empty
/// unless [`set_global_loggers`] was explicitly given an empty vector.
pub fn global_loggers() -> Vec<Arc<dyn Logger>> {
    get_or_init_loggers().read().unwrap().clone()
}

/// Adds a sink to the global collection, alongside whatever is already registered.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use tracewise::{InMemoryLogger, add_global_logger, global_loggers};
///
/// let initial_count = global_loggers().len();
/// add_global_logger(Arc::new(InMemoryLogger::new()));
/// assert_eq!(global_loggers().len(), initial_count + 1);
/// ```
pub fn add_global_logger(logger: Arc<dyn Logger>) {
    get_or_init_loggers().write().unwrap().push(logger);
}

/// Replaces all global sinks with a new set.
///
/// Previous sinks are dropped once no in-flight submission references them. Passing an
/// empty vector silently discards all future lines, which is generally only useful for
/// muting output in tests.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use tracewise::{InMemoryLogger, Tracer, set_global_loggers};
///
/// let logger = Arc::new(InMemoryLogger::new());
/// set_global_loggers(vec![logger.clone()]);
///
/// let tracer = Tracer::thread_scoped();
/// let span = tracer.begin("only captured in memory");
/// tracer.end(span);
/// assert_eq!(logger.lines().len(), 2);
/// ```
pub fn set_global_loggers(new_loggers: Vec<Arc<dyn Logger>>) {
    let loggers_clone = new_loggers.clone();
    let lock = GLOBAL_LOGGERS.get_or_init(|| RwLock::new(loggers_clone));
    *lock.write().unwrap() = new_loggers;
}

/// Serializes tests that reconfigure the global registry.
#[cfg(test)]
pub(crate) static TEST_LOGGER_GUARD: std::sync::Mutex<()> = std::sync::Mutex::new(());

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inmemory_logger::InMemoryLogger;

    #[test]
    fn test_add_logger() {
        let _guard = TEST_LOGGER_GUARD.lock().unwrap();
        set_global_loggers(vec![Arc::new(StdErrorLogger::new())]);
        let initial_count = global_loggers().len();

        // Add a new sink
        let logger = Arc::new(InMemoryLogger::new());
        add_global_logger(logger.clone());

        // Verify it was added
        let loggers = global_loggers();
        assert_eq!(
            loggers.len(),
            initial_count + 1,
            "Logger count should increase by 1"
        );
    }

    #[test]
    fn test_set_loggers() {
        let _guard = TEST_LOGGER_GUARD.lock().unwrap();
        let logger1 = Arc::new(InMemoryLogger::new());
        let logger2 = Arc::new(InMemoryLogger::new());

        set_global_loggers(vec![logger1.clone(), logger2.clone()]);

        let loggers = global_loggers();
        assert_eq!(loggers.len(), 2, "Should have exactly 2 loggers");
    }

    #[test]
    fn test_thread_safety() {
        use std::thread;

        let _guard = TEST_LOGGER_GUARD.lock().unwrap();
        set_global_loggers(vec![Arc::new(StdErrorLogger::new())]);

        let logger = Arc::new(InMemoryLogger::new());
        let logger_clone = logger.clone();

        // Spawn a thread that adds a sink
        let handle = thread::spawn(move || {
            add_global_logger(logger_clone);
        });

        // Meanwhile, read the registry from the main thread
        let _ = global_loggers();

        handle.join().expect("Thread should complete successfully");

        // Verify the sink was added despite concurrent access
        let loggers = global_loggers();
        assert!(
            loggers.len() >= 2,
            "Should have at least 2 loggers after thread operation"
        );
    }
}
