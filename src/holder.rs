// SPDX-License-Identifier: MIT OR Apache-2.0

//! Trace-context holders: who owns the current nesting state.
//!
//! A holder owns one slot per execution context (for some definition of "context"),
//! holding the current [`TraceIdentity`] or nothing. It decides whether a `begin` starts
//! a fresh trace or nests under an existing one, and it releases the slot exactly when
//! nesting returns to zero.
//!
//! # The two strategies
//!
//! - [`SharedSlotHolder`]: one slot shared by every thread that touches the holder. The
//!   naive baseline; correct only under a single sequential flow, and deliberately left
//!   that way (see its docs).
//! - [`ThreadScopedHolder`]: one private slot per thread, so concurrent flows never
//!   observe each other's level or correlation id.
//!
//! Both implement [`ContextHolder`], so the [`Tracer`](crate::Tracer) facade is identical
//! over either; pick one at construction time.
//!
//! # Caller discipline
//!
//! The slot's level strictly tracks the count of unmatched [`advance`](ContextHolder::advance)
//! calls within its context. That invariant holds only if callers pair every advance with
//! exactly one [`retreat`](ContextHolder::retreat), in LIFO order, on the same context.
//! The holders do not enforce this; an unpaired advance leaves the slot occupied
//! indefinitely, and an extra retreat is a no-op that debug builds assert on.

mod shared_slot;
mod thread_scoped;


pub use shared_slot::SharedSlotHolder;
pub use thread_scoped::ThreadScopedHolder;

use crate::identity::TraceIdentity;
use std::fmt::Debug;

/// The common contract over the two context-holder strategies.
///
/// All three operations act on whichever slot is in scope for the calling context, and
/// all are synchronous and non-blocking.
pub trait ContextHolder: Debug + Send + Sync {
    /// Read-only view of the slot in scope, or `None` when no trace is in progress.
    fn current(&self) -> Option<TraceIdentity>;

    /// Pushes one level and returns the resulting identity.
    ///
    /// An empty slot is filled with [`TraceIdentity::create`] (a brand-new trace at level
    /// 0); an occupied slot is replaced with its [`next`](TraceIdentity::next).
    fn advance(&self) -> TraceIdentity;

    /// Pops one level.
    ///
    /// At level 0 the slot is cleared entirely, so the context's next `advance` starts a
    /// brand-new correlation id. Above level 0 the slot is replaced with its
    /// [`previous`](TraceIdentity::previous). Retreating on an empty slot is a
    /// caller-discipline violation: debug builds assert, release builds ignore it.
    fn retreat(&self);
}
