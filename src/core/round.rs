//! Round generation ids.
//!
//! Delayed presentation callbacks (sequence playback pacing, the
//! mismatch re-hide) can outlive the round that scheduled them. Each
//! round gets a fresh [`RoundId`]; a callback captures the id when it is
//! scheduled, compares it against the game's current one when it fires,
//! and no-ops if the round has been superseded.

use serde::{Deserialize, Serialize};

/// Monotonically increasing round generation id.
///
/// `RoundId::default()` (zero) means "no round started yet"; every new
/// round advances via [`next`](Self::next).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RoundId(pub u64);

impl RoundId {
    /// Create a round id from a raw counter value.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw counter value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }

    /// The id of the round superseding this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl std::fmt::Display for RoundId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Round({})", self.0)
    }
}
