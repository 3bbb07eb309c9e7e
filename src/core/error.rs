//! Error types for precondition violations.
//!
//! Only argument precondition violations are errors: negative sequence
//! lengths, out-of-range cell indices, unusable grid dimensions. Soft
//! statuses ("no active round", "already revealed") are outcome variants,
//! not errors, so the presentation layer can give gentle feedback without
//! touching an error path.

use thiserror::Error;

/// A precondition violation, reported synchronously to the caller.
///
/// None of these are fatal. The caller corrects the argument and retries;
/// the engines never terminate the process.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    /// Sequence length must be non-negative.
    #[error("sequence length must be non-negative, got {0}")]
    NegativeLength(i32),

    /// Sequence generation needs at least one symbol to draw from.
    #[error("symbol set is empty")]
    EmptySymbolSet,

    /// Cell index outside the grid.
    #[error("cell index {index} out of range for a grid of {cell_count} cells")]
    CellOutOfRange {
        /// The offending index.
        index: usize,
        /// Number of cells in the grid.
        cell_count: usize,
    },

    /// Grids must hold an even number of cells, at least one pair.
    #[error("grid dimensions {rows}x{cols} do not form a pairable grid")]
    InvalidGridDimensions {
        /// Requested row count.
        rows: usize,
        /// Requested column count.
        cols: usize,
    },

    /// Explicit layouts must contain every symbol exactly twice.
    #[error("layout does not contain every symbol exactly twice")]
    MalformedLayout,
}
