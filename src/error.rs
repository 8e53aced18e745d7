// SPDX-License-Identifier: MIT OR Apache-2.0

//! Business-failure carrier for traced work.

use thiserror::Error;

/// A business failure observed, but never handled, by the tracing layer.
///
/// The tracer only reads the `Display` of an error handed to
/// [`exception`](crate::Tracer::exception); it never constructs, converts, or swallows
/// one. `BusinessError` is the concrete carrier for wrapped work that fails with a bare
/// description rather than its own error type, and it is what the caller re-raises after
/// the exceptional completion is logged.
///
/// ```rust
/// use tracewise::{BusinessError, Tracer};
///
/// fn risky(tracer: &Tracer) -> Result<(), BusinessError> {
///     let span = tracer.begin("risky work");
///     let outcome = Err(BusinessError::new("item id must not be 'ex'"));
///     match outcome {
///         Ok(()) => {
///             tracer.end(span);
///             Ok(())
///         }
///         Err(e) => {
///             tracer.exception(span, &e);
///             Err(e) // re-raised unchanged
///         }
///     }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct BusinessError(String);

impl BusinessError {
    pub fn new(description: impl Into<String>) -> Self {
        Self(description.into())
    }

    pub fn description(&self) -> &str {
        &self.0
    }
}
