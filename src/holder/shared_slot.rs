// SPDX-License-Identifier: MIT OR Apache-2.0

//! The naive baseline: one slot shared by every thread.

use super::ContextHolder;
use crate::identity::TraceIdentity;
use std::sync::Mutex;

/// A context holder with a single process-wide slot.
///
/// Every thread that touches this holder reads and writes the same slot. Under exactly
/// one sequential flow that is fine, and this is the simplest thing that works. Under
/// concurrent flows it is a known-unsafe design: two interleaved logical traces
/// read-modify-write the same slot, so the second trace nests under the first trace's
/// correlation id and level instead of starting its own.
///
/// The mutex below makes each individual read-modify-write atomic (anything less is not
/// expressible in safe Rust); it does nothing about the logical race between two flows,
/// which is the documented hazard of this variant. The hazard is a property being
/// modeled, not a defect to patch here - use [`ThreadScopedHolder`](super::ThreadScopedHolder)
/// when concurrent flows exist.
#[derive(Debug, Default)]
pub struct SharedSlotHolder {
    slot: Mutex<Option<TraceIdentity>>,
}

impl SharedSlotHolder {
    pub fn new() -> Self {
        Self {
            slot: Mutex::new(None),
        }
    }
}

impl ContextHolder for SharedSlotHolder {
    fn current(&self) -> Option<TraceIdentity> {
        self.slot.lock().unwrap().clone()
    }

    fn advance(&self) -> TraceIdentity {
        let mut slot = self.slot.lock().unwrap();
        let identity = match slot.take() {
            None => TraceIdentity::create(),
            Some(current) => current.next(),
        };
        *slot = Some(identity.clone());
        identity
    }

    fn retreat(&self) {
        let mut slot = self.slot.lock().unwrap();
        match slot.take() {
            None => {
                debug_assert!(false, "retreat with no trace in progress");
            }
            Some(current) if current.is_first_level() => {
                // outermost pair completed; the take above already cleared the slot
            }
            Some(current) => {
                *slot = Some(current.previous());
            }
        }
    }
}
