//! Core building blocks: symbols, RNG, round ids, errors.
//!
//! This module contains the pieces shared by both game engines. Nothing
//! here knows about a specific game's rules.

pub mod error;
pub mod rng;
pub mod round;
pub mod symbol;

pub use error::GameError;
pub use rng::GameRng;
pub use round::RoundId;
pub use symbol::{Symbol, SymbolSet};
