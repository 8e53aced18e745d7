// SPDX-License-Identifier: MIT OR Apache-2.0

//! The documented hazard of the shared-slot strategy, reproduced under a fixed
//! interleaving: two logical traces on different threads corrupt each other's id and
//! level, where the thread-scoped strategy keeps them apart under the exact same
//! choreography.

use std::sync::mpsc;
use std::thread;
use tracewise::{TraceIdentity, Tracer, set_global_loggers};

/// Fixed interleaving of two logical requests on two threads:
///
/// 1. thread A begins "first request"
/// 2. thread B begins "second request"  (while A's trace is still live)
/// 3. thread B ends
/// 4. thread A ends
///
/// Every step is sequenced over channels, so the schedule is deterministic. Returns the
/// begin-time identities observed by A and B.
fn interleave_two_requests(tracer: &Tracer) -> (TraceIdentity, TraceIdentity) {
    let (id_tx, id_rx) = mpsc::channel();
    let (go_a_tx, go_a_rx) = mpsc::channel::<()>();
    let (go_b_tx, go_b_rx) = mpsc::channel::<()>();

    let a = {
        let tracer = tracer.clone();
        let id_tx = id_tx.clone();
        thread::spawn(move || {
            let span = tracer.begin("first request");
            id_tx.send(("a", span.identity().clone())).expect("main is collecting");
            go_a_rx.recv().expect("main signals A's end");
            tracer.end(span);
        })
    };

    let b = {
        let tracer = tracer.clone();
        thread::spawn(move || {
            go_b_rx.recv().expect("main signals B's begin");
            let span = tracer.begin("second request");
            id_tx.send(("b", span.identity().clone())).expect("main is collecting");
            go_b_rx.recv().expect("main signals B's end");
            tracer.end(span);
        })
    };

    // step 1: A has begun
    let (tag, id_a) = id_rx.recv().expect("A began");
    assert_eq!(tag, "a");

    // step 2: only now may B begin
    go_b_tx.send(()).expect("B is waiting");
    let (tag, id_b) = id_rx.recv().expect("B began");
    assert_eq!(tag, "b");

    // steps 3 and 4: unwind in LIFO order
    go_b_tx.send(()).expect("B is waiting");
    b.join().expect("B completed");
    go_a_tx.send(()).expect("A is waiting");
    a.join().expect("A completed");

    (id_a, id_b)
}

#[test]
fn test_shared_slot_interleaving_corrupts_the_second_trace() {
    set_global_loggers(vec![]);

    let tracer = Tracer::shared_slot();
    let (id_a, id_b) = interleave_two_requests(&tracer);

    // the hazard, reproduced deterministically: B's logically-independent request
    // nested under A's trace instead of starting its own
    assert_eq!(id_a.level(), 0);
    assert_eq!(id_b.level(), 1, "second request adopted a nested level");
    assert_eq!(
        id_b.correlation_id(),
        id_a.correlation_id(),
        "second request adopted the first request's correlation id"
    );

    // the LIFO unwind above happened to realign the slot, so the next trace is clean
    let fresh = tracer.begin("after unwind");
    assert_eq!(fresh.identity().level(), 0);
    assert_ne!(fresh.identity().correlation_id(), id_a.correlation_id());
    tracer.end(fresh);
}

#[test]
fn test_thread_scoped_survives_the_same_interleaving() {
    set_global_loggers(vec![]);

    let tracer = Tracer::thread_scoped();
    let (id_a, id_b) = interleave_two_requests(&tracer);

    // identical choreography, isolated slots: both requests are roots of their own trace
    assert_eq!(id_a.level(), 0);
    assert_eq!(id_b.level(), 0);
    assert_ne!(id_b.correlation_id(), id_a.correlation_id());
}
