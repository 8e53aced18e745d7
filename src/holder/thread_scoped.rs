// SPDX-License-Identifier: MIT OR Apache-2.0

//! The context-isolated strategy: one private slot per thread.

use super::ContextHolder;
use crate::identity::TraceIdentity;
use std::collections::HashMap;
use std::sync::Mutex;
use std::thread::{self, ThreadId};

/// A context holder with one independent slot per thread.
///
/// The holder is an explicit mapping from thread identity to that thread's slot, rather
/// than a hidden `thread_local!`, so holders can be constructed per-tracer and exercised
/// in isolation in tests. Each thread only ever reads, inserts, or removes its own entry;
/// the mutex guards the map's structure, and the isolation between contexts is
/// structural, not a matter of mutual exclusion over shared level arithmetic.
///
/// On the final retreat of a trace the thread's entry is removed outright - not reset to
/// a default - so a reused worker thread later starts a brand-new correlation id rather
/// than resuming a stale one.
///
/// A span abandoned without its matching completion leaks only the owning thread's entry
/// (a documented caller-discipline requirement); other threads are unaffected.
#[derive(Debug, Default)]
pub struct ThreadScopedHolder {
    slots: Mutex<HashMap<ThreadId, TraceIdentity>>,
}

impl ThreadScopedHolder {
    pub fn new() -> Self {
        Self {
            slots: Mutex::new(HashMap::new()),
        }
    }

    /// Number of threads with a trace currently in progress. Test visibility.
    #[cfg(test)]
    pub(crate) fn live_contexts(&self) -> usize {
        self.slots.lock().unwrap().len()
    }
}

impl ContextHolder for ThreadScopedHolder {
    fn current(&self) -> Option<TraceIdentity> {
        self.slots
            .lock()
            .unwrap()
            .get(&thread::current().id())
            .cloned()
    }

    fn advance(&self) -> TraceIdentity {
        let key = thread::current().id();
        let mut slots = self.slots.lock().unwrap();
        let identity = match slots.remove(&key) {
            None => TraceIdentity::create(),
            Some(current) => current.next(),
        };
        slots.insert(key, identity.clone());
        identity
    }

    fn retreat(&self) {
        let key = thread::current().id();
        let mut slots = self.slots.lock().unwrap();
        match slots.remove(&key) {
            None => {
                debug_assert!(false, "retreat with no trace in progress on this thread");
            }
            Some(current) if current.is_first_level() => {
                // outermost pair completed; the remove above destroyed the entry
            }
            Some(current) => {
                slots.insert(key, current.previous());
            }
        }
    }
}
