//! Matching-pairs game.
//!
//! A grid of face-down cells holds every symbol exactly twice. The player
//! flips cells one at a time; two flipped cells that match stay revealed
//! permanently, two that differ are shown briefly and hidden again. The
//! round completes when every cell is revealed. There is no failure state:
//! mismatches never end the round.
//!
//! The re-hide delay after a mismatch is presentation policy. The core
//! reports [`SelectOutcome::Mismatched`] with both indices and the round's
//! generation id; the caller shows both cells, waits, then hides whichever
//! of them is still unrevealed, dropping the callback entirely if the
//! generation no longer matches (the round was reset underneath it). Under
//! the single-pending design a mismatched cell cannot become matched while
//! the hide timer is in flight, but callers should keep the revealed check
//! so the contract survives variants with several simultaneous pending
//! selections.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::RoundLifecycle;
use crate::core::{GameError, GameRng, RoundId, Symbol};

/// Result of selecting a cell.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectOutcome {
    /// The cell is already matched. Informational, not an error.
    AlreadyRevealed { index: usize },
    /// The cell is the current pending selection; re-selecting it is a
    /// no-op, not a match.
    AlreadyPending { index: usize },
    /// First cell of a pair flipped; the caller shows `symbol`.
    Revealed { index: usize, symbol: Symbol },
    /// Both cells match and stay revealed. `complete` is true exactly
    /// when this selection revealed the last remaining pair.
    Matched {
        first: usize,
        second: usize,
        complete: bool,
    },
    /// The cells differ. The caller shows both briefly, then re-hides
    /// them, keyed to `generation`.
    Mismatched {
        first: usize,
        second: usize,
        generation: RoundId,
    },
}

/// Matching-pairs game state.
///
/// ## Example
///
/// ```
/// use recall_games::core::Symbol;
/// use recall_games::games::{MatchingGame, SelectOutcome};
///
/// let cells = vec![Symbol::new(1), Symbol::new(2), Symbol::new(1), Symbol::new(2)];
/// let mut game = MatchingGame::from_layout(2, 2, cells).unwrap();
///
/// game.select_cell(0).unwrap();
/// match game.select_cell(2).unwrap() {
///     SelectOutcome::Matched { complete, .. } => assert!(!complete),
///     other => panic!("expected a match, got {other:?}"),
/// }
/// ```
#[derive(Clone, Debug)]
pub struct MatchingGame {
    rows: usize,
    cols: usize,
    /// Every symbol appears in exactly two cells.
    cells: Vec<Symbol>,
    /// True once permanently matched.
    revealed: Vec<bool>,
    /// At most one currently-flipped, unmatched cell.
    pending: Option<usize>,
    generation: RoundId,
    rng: GameRng,
}

impl MatchingGame {
    /// Create a game with a freshly shuffled `rows` x `cols` grid.
    ///
    /// The grid must hold an even number of cells, at least one pair.
    pub fn new(rows: usize, cols: usize, seed: u64) -> Result<Self, GameError> {
        Self::validate_dimensions(rows, cols)?;

        let mut game = Self {
            rows,
            cols,
            cells: Vec::new(),
            revealed: Vec::new(),
            pending: None,
            generation: RoundId::default(),
            rng: GameRng::new(seed),
        };
        game.reset();
        Ok(game)
    }

    /// Create a game over an explicit post-shuffle layout.
    ///
    /// Validates the dimensions, the cell count, and that every symbol
    /// appears exactly twice. Serves scripted demos and tests that need a
    /// known grid; [`reset`](Self::reset) on such a game deals a fresh
    /// shuffle from a zero seed.
    pub fn from_layout(rows: usize, cols: usize, cells: Vec<Symbol>) -> Result<Self, GameError> {
        Self::validate_dimensions(rows, cols)?;
        if cells.len() != rows * cols {
            return Err(GameError::MalformedLayout);
        }

        let mut counts: FxHashMap<Symbol, usize> = FxHashMap::default();
        for &symbol in &cells {
            *counts.entry(symbol).or_default() += 1;
        }
        if counts.values().any(|&n| n != 2) {
            return Err(GameError::MalformedLayout);
        }

        Ok(Self {
            rows,
            cols,
            revealed: vec![false; cells.len()],
            cells,
            pending: None,
            generation: RoundId::new(1),
            rng: GameRng::new(0),
        })
    }

    fn validate_dimensions(rows: usize, cols: usize) -> Result<(), GameError> {
        let cell_count = rows * cols;
        // Pair values are u16, which bounds the grid far beyond any
        // screen-sized layout.
        if cell_count < 2 || cell_count % 2 != 0 || cell_count / 2 > u16::MAX as usize {
            return Err(GameError::InvalidGridDimensions { rows, cols });
        }
        Ok(())
    }

    /// Restart with the same dimensions: reshuffle and hide everything.
    ///
    /// Advances the generation id, so hide timers scheduled during the
    /// previous round no-op when they fire.
    pub fn reset(&mut self) {
        let pair_count = self.rows * self.cols / 2;
        let mut cells: Vec<Symbol> = (1..=pair_count)
            .flat_map(|value| {
                let symbol = Symbol::new(value as u16);
                [symbol, symbol]
            })
            .collect();
        self.rng.shuffle(&mut cells);

        self.cells = cells;
        self.revealed = vec![false; self.rows * self.cols];
        self.pending = None;
        self.generation = self.generation.next();

        log::debug!(
            "{}: dealt {}x{} grid with {} pairs",
            self.generation,
            self.rows,
            self.cols,
            pair_count
        );
    }

    /// Flip the cell at `index`.
    ///
    /// Out-of-range indices are errors; everything else is an ordinary
    /// [`SelectOutcome`].
    pub fn select_cell(&mut self, index: usize) -> Result<SelectOutcome, GameError> {
        if index >= self.cells.len() {
            return Err(GameError::CellOutOfRange {
                index,
                cell_count: self.cells.len(),
            });
        }
        if self.revealed[index] {
            return Ok(SelectOutcome::AlreadyRevealed { index });
        }

        let pending = match self.pending {
            None => {
                self.pending = Some(index);
                return Ok(SelectOutcome::Revealed {
                    index,
                    symbol: self.cells[index],
                });
            }
            Some(pending) if pending == index => {
                return Ok(SelectOutcome::AlreadyPending { index });
            }
            Some(pending) => pending,
        };

        self.pending = None;
        if self.cells[pending] == self.cells[index] {
            self.revealed[pending] = true;
            self.revealed[index] = true;

            let complete = self.revealed.iter().all(|&r| r);
            if complete {
                log::debug!("{} complete: all pairs found", self.generation);
            }
            Ok(SelectOutcome::Matched {
                first: pending,
                second: index,
                complete,
            })
        } else {
            Ok(SelectOutcome::Mismatched {
                first: pending,
                second: index,
                generation: self.generation,
            })
        }
    }

    /// Grid row count.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Grid column count.
    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Number of symbol pairs in the grid.
    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.cells.len() / 2
    }

    /// The grid's symbols, in cell order.
    #[must_use]
    pub fn cells(&self) -> &[Symbol] {
        &self.cells
    }

    /// Per-cell matched flags, in cell order.
    #[must_use]
    pub fn revealed(&self) -> &[bool] {
        &self.revealed
    }

    /// The currently-flipped, unmatched cell, if any.
    #[must_use]
    pub fn pending(&self) -> Option<usize> {
        self.pending
    }

    /// Symbol at `index`, or `None` when out of range.
    #[must_use]
    pub fn symbol_at(&self, index: usize) -> Option<Symbol> {
        self.cells.get(index).copied()
    }

    /// Row/column position of a cell index, or `None` when out of range.
    #[must_use]
    pub fn position(&self, index: usize) -> Option<(usize, usize)> {
        if index < self.cells.len() {
            Some((index / self.cols, index % self.cols))
        } else {
            None
        }
    }

    /// True when every pair has been found.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.revealed.iter().all(|&r| r)
    }
}

impl RoundLifecycle for MatchingGame {
    fn generation(&self) -> RoundId {
        self.generation
    }

    fn is_active(&self) -> bool {
        !self.is_complete()
    }
}
