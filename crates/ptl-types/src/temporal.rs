use std::fmt;

use serde::{Deserialize, Serialize};

/// Logical time supplied by the host environment.
///
/// The ledger never reads a wall clock. Every operation receives the
/// environment's current height, which the host guarantees to be
/// monotonic (non-decreasing) across calls. Records store the height at
/// which they were created.
#[derive(
    Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct LedgerHeight(u64);

impl LedgerHeight {
    /// Create a height with an explicit value.
    pub const fn new(height: u64) -> Self {
        Self(height)
    }

    /// The genesis height.
    pub const fn zero() -> Self {
        Self(0)
    }

    /// The raw height value.
    pub fn value(&self) -> u64 {
        self.0
    }

    /// The following height.
    pub fn next(&self) -> Self {
        Self(self.0.saturating_add(1))
    }

    /// Returns `true` if this height is after `other`.
    pub fn is_after(&self, other: &Self) -> bool {
        self > other
    }
}

impl fmt::Debug for LedgerHeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LedgerHeight({})", self.0)
    }
}

impl fmt::Display for LedgerHeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for LedgerHeight {
    fn from(height: u64) -> Self {
        Self(height)
    }
}
