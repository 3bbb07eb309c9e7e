//! The two game engines and the round-lifecycle seam they share.
//!
//! Both games follow the same shape: created fresh per session, mutated
//! synchronously by presentation-driven calls, reporting every transition
//! as a structured outcome value the caller renders.
//!
//! Round lifecycles:
//!
//! - [`SequenceGame`]: Idle → Active → success or failure → Idle. The
//!   terminal states are transient: they are carried by the returned
//!   [`SubmitOutcome`], and observable state is back to Idle by the time
//!   the call returns.
//! - [`MatchingGame`]: Active → Complete, monotonic. Mismatches never end
//!   the round.

pub mod matching;
pub mod sequence;

pub use matching::{MatchingGame, SelectOutcome};
pub use sequence::{
    generate_sequence, RoundStart, SequenceGame, SequenceGameBuilder, SubmitOutcome,
    SymbolSequence,
};

use crate::core::RoundId;

/// Round lifecycle common to both games.
///
/// The presentation layer owns every timer (sequence playback pacing, the
/// mismatch re-hide delay). This is the seam it needs game-agnostically:
/// which round a timer belongs to, and whether input currently means
/// anything. A delayed callback captures [`generation`](Self::generation)
/// when scheduled and must no-op once the game has moved past it.
pub trait RoundLifecycle {
    /// Generation id of the current round.
    fn generation(&self) -> RoundId;

    /// True while the game accepts meaningful input.
    fn is_active(&self) -> bool;
}
