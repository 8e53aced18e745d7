// SPDX-License-Identifier: MIT OR Apache-2.0

//! One traced unit of work, from `begin` to `end`/`exception`.

use crate::identity::TraceIdentity;
use std::time::Instant;

/// The record returned by [`Tracer::begin`](crate::Tracer::begin) and consumed by
/// [`end`](crate::Tracer::end), [`exception`](crate::Tracer::exception), or
/// [`fail`](crate::Tracer::fail).
///
/// A span is produced exactly once per `begin` and must be handed, unchanged, to exactly
/// one completion call. The completion methods take the span by value, so the type system
/// enforces single consumption; spans are not retained by the tracer and carry no further
/// state.
#[derive(Debug)]
pub struct TraceSpan {
    identity: TraceIdentity,
    started: Instant,
    label: String,
}

// Boilerplate notes: Clone is deliberately NOT implemented.  A cloned span could be
// completed twice, which is exactly the caller-discipline violation move semantics are
// here to prevent.  Same reasoning rules out Copy.  PartialEq/Eq/Hash add nothing for a
// one-shot value.

impl TraceSpan {
    pub(crate) fn new(identity: TraceIdentity, started: Instant, label: String) -> Self {
        Self {
            identity,
            started,
            label,
        }
    }

    /// The identity stamped at begin-time.
    pub fn identity(&self) -> &TraceIdentity {
        &self.identity
    }

    /// The instant `begin` was called, used to compute elapsed time on completion.
    pub fn started(&self) -> Instant {
        self.started
    }

    /// The caller-supplied description of the traced work.
    pub fn label(&self) -> &str {
        &self.label
    }
}
