// SPDX-License-Identifier: MIT OR Apache-2.0

//! End-to-end scenarios for a single execution context: nested success, nested failure
//! with re-raise, and fresh correlation ids after a trace fully unwinds.

use std::sync::{Arc, Mutex};
use tracewise::{BusinessError, InMemoryLogger, Tracer, set_global_loggers};

/// Tests in this binary share the global sink registry; serialize the ones that use it.
static LOGGER_GUARD: Mutex<()> = Mutex::new(());

fn install_capture() -> Arc<InMemoryLogger> {
    let logger = Arc::new(InMemoryLogger::new());
    set_global_loggers(vec![logger.clone()]);
    logger
}

/// `[xxxxxxxx]rest` -> (id, rest)
fn split_line(line: &str) -> (&str, &str) {
    let close = line.find(']').expect("line starts with a bracketed id");
    (&line[1..close], &line[close + 1..])
}

/// Visual nesting depth of a line: number of `|` characters in its prefix.
fn depth(rest: &str) -> usize {
    rest.chars().take_while(|&c| c == '|' || c == ' ').filter(|&c| c == '|').count()
}

#[test]
fn test_nested_success_scenario() {
    let _guard = LOGGER_GUARD.lock().unwrap();
    let logger = install_capture();
    let tracer = Tracer::thread_scoped();

    let a = tracer.begin("A");
    assert_eq!(a.identity().level(), 0);
    let b = tracer.begin("B");
    assert_eq!(b.identity().level(), 1);
    assert_eq!(b.identity().correlation_id(), a.identity().correlation_id());
    tracer.end(b);
    tracer.end(a);

    let lines = logger.lines();
    assert_eq!(lines.len(), 4, "two start lines and two completion lines");

    // one id across the whole trace
    let (id, _) = split_line(&lines[0]);
    for line in &lines {
        assert_eq!(split_line(line).0, id);
    }

    // indentation depth 0, 1, 1, 0
    let depths: Vec<usize> = lines.iter().map(|l| depth(split_line(l).1)).collect();
    assert_eq!(depths, vec![0, 1, 1, 0]);

    assert_eq!(split_line(&lines[0]).1, "A");
    assert!(split_line(&lines[1]).1.starts_with("|-->B"));
    assert!(split_line(&lines[2]).1.starts_with("|<--B time="));
    assert!(split_line(&lines[3]).1.starts_with("A time="));
}

/// The inner unit of work fails; the tracer logs the exceptional completion and the
/// error travels up to the top-level caller unchanged.
fn outer_work(tracer: &Tracer) -> Result<(), BusinessError> {
    let span = tracer.begin("A");
    let result = inner_work(tracer);
    match result {
        Ok(()) => {
            tracer.end(span);
            Ok(())
        }
        Err(e) => {
            // the outer span itself completes normally; only the inner one failed
            tracer.end(span);
            Err(e)
        }
    }
}

fn inner_work(tracer: &Tracer) -> Result<(), BusinessError> {
    let span = tracer.begin("B");
    let result: Result<(), BusinessError> = Err(BusinessError::new("item out of stock"));
    match result {
        Ok(()) => {
            tracer.end(span);
            Ok(())
        }
        Err(e) => {
            tracer.exception(span, &e);
            Err(e)
        }
    }
}

#[test]
fn test_nested_failure_scenario() {
    let _guard = LOGGER_GUARD.lock().unwrap();
    let logger = install_capture();
    let tracer = Tracer::thread_scoped();

    let result = outer_work(&tracer);

    // re-raised unchanged past the tracing layer
    assert_eq!(result, Err(BusinessError::new("item out of stock")));

    let lines = logger.lines();
    assert_eq!(lines.len(), 4);

    let inner_completion = split_line(&lines[2]).1;
    assert!(inner_completion.starts_with("|<X-B time="));
    assert!(inner_completion.ends_with("ex=item out of stock"));

    let outer_completion = split_line(&lines[3]).1;
    assert!(outer_completion.starts_with("A time="));
    assert!(!outer_completion.contains("ex="));

    // the trace fully unwound
    let fresh = tracer.begin("fresh");
    assert_eq!(fresh.identity().level(), 0);
    tracer.end(fresh);
}

#[test]
fn test_new_trace_never_reuses_a_correlation_id() {
    let _guard = LOGGER_GUARD.lock().unwrap();
    let logger = install_capture();
    let tracer = Tracer::thread_scoped();

    for label in ["first", "second", "third"] {
        let outer = tracer.begin(label);
        let inner = tracer.begin("detail");
        tracer.end(inner);
        tracer.end(outer);
    }

    let lines = logger.lines();
    assert_eq!(lines.len(), 12);

    let ids: Vec<&str> = lines.iter().step_by(4).map(|l| split_line(l).0).collect();
    assert_eq!(ids.len(), 3);
    assert_ne!(ids[0], ids[1]);
    assert_ne!(ids[1], ids[2]);
    assert_ne!(ids[0], ids[2]);
}

#[test]
fn test_single_level_trace_renders_bare_label() {
    let _guard = LOGGER_GUARD.lock().unwrap();
    let logger = install_capture();
    let tracer = Tracer::thread_scoped();

    let span = tracer.begin("only");
    tracer.end(span);

    let lines = logger.lines();
    // no indentation marker at all for a top-level span
    assert_eq!(split_line(&lines[0]).1, "only");
    assert!(split_line(&lines[1]).1.starts_with("only time="));
}
