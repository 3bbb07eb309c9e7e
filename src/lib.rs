//! # recall-games
//!
//! Game logic for two small cognitive games used in a dementia-care demo:
//! a color-sequence memory game and a matching-pairs game.
//!
//! ## Design Principles
//!
//! 1. **Presentation-independent**: The engines hold no widget references,
//!    own no timers, and perform no I/O. Every user action maps to one
//!    synchronous call returning a structured outcome for the caller to
//!    render.
//!
//! 2. **Deterministic**: All randomness flows through a seedable
//!    [`GameRng`]. A fixed seed reproduces a session exactly, which is
//!    what makes the logic unit-testable.
//!
//! 3. **Error-tolerant by design**: Wrong answers and mismatches are
//!    ordinary outcomes, not errors; any failed round is recoverable by
//!    starting a new one. Only argument precondition violations surface
//!    as [`GameError`].
//!
//! ## Timers belong to the caller
//!
//! Sequence playback pacing and the mismatch re-hide delay are
//! presentation policy. Each round carries a [`RoundId`] generation id;
//! delayed callbacks capture it when scheduled and no-op once the round
//! has been superseded, so a restarted game never receives stale timer
//! effects.
//!
//! ## Modules
//!
//! - `core`: symbols and symbol sets, deterministic RNG, round ids, errors
//! - `games`: the two game engines and the shared lifecycle seam

pub mod core;
pub mod games;

// Re-export commonly used types
pub use crate::core::{GameError, GameRng, RoundId, Symbol, SymbolSet};

pub use crate::games::{
    generate_sequence, MatchingGame, RoundLifecycle, RoundStart, SelectOutcome, SequenceGame,
    SequenceGameBuilder, SubmitOutcome, SymbolSequence,
};
