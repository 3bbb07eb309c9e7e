//! Symbols and symbol sets.
//!
//! A [`Symbol`] is the abstract token both games compare: an opaque id,
//! nothing more. Display names (the demo uses color names) belong to the
//! [`SymbolSet`], which holds the ordered set of symbols a game draws
//! from plus a name registry for rendering.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Opaque identifier for a game token.
///
/// Symbols are only ever compared for equality. What a symbol looks like
/// on screen is the presentation layer's business, resolved through
/// [`SymbolSet::name`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Symbol(pub u16);

impl Symbol {
    /// Create a new symbol id.
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    /// Get the raw id value.
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Symbol({})", self.0)
    }
}

/// Ordered set of distinct symbols with display names.
///
/// Symbols are auto-assigned ids in registration order, so the set's
/// order is stable and presentation can lay buttons out predictably.
///
/// ## Example
///
/// ```
/// use recall_games::core::SymbolSet;
///
/// let set = SymbolSet::new()
///     .with_symbol("circle")
///     .with_symbol("square");
///
/// assert_eq!(set.len(), 2);
/// let circle = set.symbols()[0];
/// assert_eq!(set.name(circle), Some("circle"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct SymbolSet {
    symbols: Vec<Symbol>,
    names: FxHashMap<Symbol, String>,
    next_id: u16,
}

impl SymbolSet {
    /// Create an empty symbol set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a symbol with an auto-assigned id and the given name.
    #[must_use]
    pub fn with_symbol(mut self, name: impl Into<String>) -> Self {
        let symbol = Symbol::new(self.next_id);
        self.next_id += 1;
        self.symbols.push(symbol);
        self.names.insert(symbol, name.into());
        self
    }

    /// The default demo set: red, green, blue, yellow.
    #[must_use]
    pub fn colors() -> Self {
        Self::new()
            .with_symbol("red")
            .with_symbol("green")
            .with_symbol("blue")
            .with_symbol("yellow")
    }

    /// Number of symbols in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Check if the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// The symbols, in registration order.
    #[must_use]
    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    /// Check membership.
    #[must_use]
    pub fn contains(&self, symbol: Symbol) -> bool {
        self.names.contains_key(&symbol)
    }

    /// Display name for a symbol, if it belongs to this set.
    #[must_use]
    pub fn name(&self, symbol: Symbol) -> Option<&str> {
        self.names.get(&symbol).map(String::as_str)
    }

    /// Iterate over the symbols in registration order.
    pub fn iter(&self) -> impl Iterator<Item = Symbol> + '_ {
        self.symbols.iter().copied()
    }
}
