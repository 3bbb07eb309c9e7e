//! Color-sequence memory game.
//!
//! A round shows the player a randomly generated symbol sequence, then
//! the player reproduces it one symbol at a time. Reproducing the whole
//! sequence succeeds the round and raises the difficulty level (capped);
//! any wrong symbol fails the round and discards progress.
//!
//! The sequence is non-empty exactly while a round is active: success and
//! failure both clear it before the call returns, so the observable state
//! machine is Idle → Active → Idle with the terminal result carried by
//! [`SubmitOutcome`].
//!
//! Playback pacing is presentation policy. [`SequenceGame::start_round`]
//! returns the sequence together with the new round's generation id; the
//! caller schedules its own show/hide timers keyed to that id and drops
//! any that fire after the round has been superseded.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::RoundLifecycle;
use crate::core::{GameError, GameRng, RoundId, Symbol, SymbolSet};

/// A generated symbol sequence.
///
/// Difficulty is capped at single digits, so sequences stay inline.
pub type SymbolSequence = SmallVec<[Symbol; 8]>;

/// Generate `length` symbols drawn independently and uniformly at random
/// from `symbols`, with replacement.
///
/// Pure given a fixed [`GameRng`]: the same seed produces the same
/// sequence. A zero-length request succeeds vacuously; a negative length
/// is rejected, and an empty set fails as soon as a draw is needed.
///
/// ## Example
///
/// ```
/// use recall_games::core::{GameRng, SymbolSet};
/// use recall_games::games::generate_sequence;
///
/// let set = SymbolSet::colors();
/// let mut rng = GameRng::new(42);
///
/// let seq = generate_sequence(5, &set, &mut rng).unwrap();
/// assert_eq!(seq.len(), 5);
/// assert!(seq.iter().all(|s| set.contains(*s)));
/// ```
pub fn generate_sequence(
    length: i32,
    symbols: &SymbolSet,
    rng: &mut GameRng,
) -> Result<SymbolSequence, GameError> {
    if length < 0 {
        return Err(GameError::NegativeLength(length));
    }

    let mut sequence = SymbolSequence::new();
    for _ in 0..length {
        let symbol = rng
            .choose(symbols.symbols())
            .copied()
            .ok_or(GameError::EmptySymbolSet)?;
        sequence.push(symbol);
    }
    Ok(sequence)
}

/// A freshly started round, ready for the playback phase.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundStart {
    /// Generation id of the new round. Playback timers key to this.
    pub generation: RoundId,
    /// The sequence the presentation layer plays back to the player.
    pub sequence: SymbolSequence,
}

/// Result of submitting one symbol.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubmitOutcome {
    /// No round is active. Informational, not an error.
    NoActiveRound,
    /// Correct symbol; the round continues. `position` counts the symbols
    /// reproduced so far out of `length`.
    Progress { position: usize, length: usize },
    /// The whole sequence was reproduced. `level` is the new difficulty,
    /// already raised (and capped) for the next round.
    Success { level: usize },
    /// Wrong symbol at `position`. The round is over and progress is
    /// discarded; `expected` and `submitted` support gentle feedback.
    Failure {
        expected: Symbol,
        submitted: Symbol,
        position: usize,
    },
}

/// Builder for [`SequenceGame`].
///
/// Defaults match the original demo: the four-color symbol set, starting
/// difficulty 3, capped at 8.
pub struct SequenceGameBuilder {
    symbols: SymbolSet,
    start_level: usize,
    max_level: usize,
}

impl Default for SequenceGameBuilder {
    fn default() -> Self {
        Self {
            symbols: SymbolSet::colors(),
            start_level: 3,
            max_level: 8,
        }
    }
}

impl SequenceGameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Symbols the game draws from.
    pub fn symbol_set(mut self, symbols: SymbolSet) -> Self {
        assert!(!symbols.is_empty(), "Symbol set must not be empty");
        self.symbols = symbols;
        self
    }

    /// Sequence length of the first round.
    pub fn start_level(mut self, level: usize) -> Self {
        assert!((1..=64).contains(&level), "Start level must be 1-64");
        self.start_level = level;
        self
    }

    /// Difficulty cap.
    pub fn max_level(mut self, level: usize) -> Self {
        assert!((1..=64).contains(&level), "Max level must be 1-64");
        self.max_level = level;
        self
    }

    /// Build the game with the given RNG seed.
    pub fn build(self, seed: u64) -> SequenceGame {
        assert!(
            self.start_level <= self.max_level,
            "Start level must not exceed the cap"
        );

        SequenceGame {
            symbols: self.symbols,
            level: self.start_level,
            max_level: self.max_level,
            sequence: SymbolSequence::new(),
            progress: 0,
            generation: RoundId::default(),
            rng: GameRng::new(seed),
        }
    }
}

/// Sequence-memory game state.
///
/// ## Example
///
/// ```
/// use recall_games::games::{SequenceGame, SubmitOutcome};
///
/// let mut game = SequenceGame::with_seed(7);
/// let round = game.start_round();
/// assert_eq!(round.sequence.len(), 3);
///
/// // Reproduce the whole sequence; the last submission succeeds the
/// // round and raises the difficulty.
/// let mut last = SubmitOutcome::NoActiveRound;
/// for symbol in round.sequence.clone() {
///     last = game.submit_symbol(symbol);
/// }
/// assert_eq!(last, SubmitOutcome::Success { level: 4 });
/// assert_eq!(game.level(), 4);
/// ```
#[derive(Clone, Debug)]
pub struct SequenceGame {
    symbols: SymbolSet,
    level: usize,
    max_level: usize,
    /// Non-empty exactly while a round is active.
    sequence: SymbolSequence,
    progress: usize,
    generation: RoundId,
    rng: GameRng,
}

impl SequenceGame {
    /// Build with the default configuration and the given seed.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        SequenceGameBuilder::new().build(seed)
    }

    /// Start a new round at the current difficulty level.
    ///
    /// Any previous round's in-flight state is discarded; delayed
    /// playback callbacks holding the old generation id must no-op.
    pub fn start_round(&mut self) -> RoundStart {
        self.generation = self.generation.next();
        self.progress = 0;
        self.sequence = generate_sequence(self.level as i32, &self.symbols, &mut self.rng)
            .expect("builder enforces a non-empty set and a positive level");

        log::debug!(
            "{} started: sequence of {}",
            self.generation,
            self.sequence.len()
        );

        RoundStart {
            generation: self.generation,
            sequence: self.sequence.clone(),
        }
    }

    /// Submit the player's next symbol.
    pub fn submit_symbol(&mut self, symbol: Symbol) -> SubmitOutcome {
        if self.sequence.is_empty() {
            return SubmitOutcome::NoActiveRound;
        }

        let expected = self.sequence[self.progress];
        if symbol != expected {
            let position = self.progress;
            self.sequence.clear();
            self.progress = 0;
            log::debug!("{} failed at position {}", self.generation, position);
            return SubmitOutcome::Failure {
                expected,
                submitted: symbol,
                position,
            };
        }

        self.progress += 1;
        if self.progress < self.sequence.len() {
            return SubmitOutcome::Progress {
                position: self.progress,
                length: self.sequence.len(),
            };
        }

        self.sequence.clear();
        self.progress = 0;
        self.level = (self.level + 1).min(self.max_level);
        log::debug!("{} succeeded, level now {}", self.generation, self.level);
        SubmitOutcome::Success { level: self.level }
    }

    /// Current difficulty level (sequence length of the next round).
    #[must_use]
    pub fn level(&self) -> usize {
        self.level
    }

    /// Symbols correctly reproduced so far in the active round.
    #[must_use]
    pub fn progress(&self) -> usize {
        self.progress
    }

    /// The active round's sequence; empty while idle.
    #[must_use]
    pub fn sequence(&self) -> &[Symbol] {
        &self.sequence
    }

    /// The symbols this game draws from.
    #[must_use]
    pub fn symbol_set(&self) -> &SymbolSet {
        &self.symbols
    }
}

impl RoundLifecycle for SequenceGame {
    fn generation(&self) -> RoundId {
        self.generation
    }

    fn is_active(&self) -> bool {
        !self.sequence.is_empty()
    }
}
