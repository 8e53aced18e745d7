// SPDX-License-Identifier: MIT OR Apache-2.0

//! Trace identity: a correlation id paired with a nesting level.
//!
//! A [`TraceIdentity`] is an immutable value. Entering a nested call does not mutate the
//! current identity; it derives a new one with [`next`](TraceIdentity::next), and leaving
//! derives one with [`previous`](TraceIdentity::previous). The correlation id is constant
//! across every level of one logical trace; only the level changes between parent and
//! child.

use rand::Rng;
use rand::distr::Alphanumeric;
use std::fmt::Display;

/// Length of the generated correlation token.
///
/// Eight random alphanumeric characters are short enough to scan in a log and distinct
/// enough that a collision between two concurrent traces is practically negligible.
const CORRELATION_ID_LEN: usize = 8;

/// Opaque token shared by all spans in one logical trace.
///
/// Used to group log lines belonging to the same flow. The token is generated once, when
/// the outermost traced call begins, and never changes for the life of the trace.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CorrelationId(String);

impl CorrelationId {
    fn generate() -> Self {
        let token: String = rand::rng()
            .sample_iter(Alphanumeric)
            .take(CORRELATION_ID_LEN)
            .map(char::from)
            .collect();
        CorrelationId(token)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for CorrelationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The identity of one point in a trace: which trace (correlation id) and how deep
/// (level, 0 at the outermost call).
///
/// # Examples
///
/// ```rust
/// use tracewise::TraceIdentity;
///
/// let root = TraceIdentity::create();
/// assert_eq!(root.level(), 0);
/// assert!(root.is_first_level());
///
/// let child = root.next();
/// assert_eq!(child.level(), 1);
/// assert_eq!(child.correlation_id(), root.correlation_id());
///
/// assert_eq!(child.previous(), root);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TraceIdentity {
    correlation_id: CorrelationId,
    level: u32,
}

impl TraceIdentity {
    /// Creates a fresh identity: new correlation id, level 0.
    pub fn create() -> Self {
        Self {
            correlation_id: CorrelationId::generate(),
            level: 0,
        }
    }

    /// Derives the identity one level deeper: same id, level + 1.
    #[must_use]
    pub fn next(&self) -> Self {
        Self {
            correlation_id: self.correlation_id.clone(),
            level: self.level + 1,
        }
    }

    /// Derives the identity one level shallower: same id, level − 1.
    ///
    /// Caller contract: only valid when `level > 0`. The holders never call this at level
    /// 0 (they clear the slot instead); debug builds assert on the violation.
    #[must_use]
    pub fn previous(&self) -> Self {
        debug_assert!(self.level > 0, "previous() on a level-0 identity");
        Self {
            correlation_id: self.correlation_id.clone(),
            level: self.level.saturating_sub(1),
        }
    }

    pub fn correlation_id(&self) -> &CorrelationId {
        &self.correlation_id
    }

    /// Nesting depth, 0 at the outermost call.
    pub fn level(&self) -> u32 {
        self.level
    }

    /// True for the outermost identity of a trace.
    pub fn is_first_level(&self) -> bool {
        self.level == 0
    }
}

impl Display for TraceIdentity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] level {}", self.correlation_id, self.level)
    }
}

/*
Boilerplate notes for TraceIdentity / CorrelationId:

IMPLEMENTED:
- Debug/Clone: derived - identities are cheap to clone and cloned on every derivation
- PartialEq/Eq/Hash: derived - data equality is the meaningful notion here (the
  round-trip law next().previous() == self depends on it)
- Display: implemented - correlation token for CorrelationId, token + level for identity

NOT IMPLEMENTED:
- Copy: CorrelationId holds a String
- Ord/PartialOrd: levels order within one trace, but ordering identities across traces
  is meaningless, so no total order
- Default: a "default identity" would mint a correlation id as a side effect, which is
  too surprising for Default
*/
