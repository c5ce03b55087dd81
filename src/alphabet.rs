//! Symbol domain for automata and tries.
//!
//! Every structure in this crate is bound to one alphabet for its lifetime:
//! bytes (0..=255) or Unicode scalar values. Symbols from both alphabets are
//! widened into a common `Sym` representation so the trie and the automaton
//! can share one transition table type.

use serde::{Deserialize, Serialize};

/// The alphabet a structure was built over
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Alphabet {
    /// Raw bytes, 0..=255
    Bytes,
    /// Unicode scalar values
    Chars,
}

impl Alphabet {
    /// Convert to a string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Alphabet::Bytes => "BYTES",
            Alphabet::Chars => "CHARS",
        }
    }
}

impl std::fmt::Display for Alphabet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A symbol from either alphabet, widened to 32 bits.
///
/// Bytes occupy 0..=255; chars are their Unicode scalar value. The two ranges
/// overlap, which is why every structure also carries an [`Alphabet`] tag and
/// refuses input from the other domain.
pub type Sym = u32;

/// Widen a byte into a symbol
#[inline]
pub fn sym_of_byte(b: u8) -> Sym {
    b as Sym
}

/// Widen a char into a symbol
#[inline]
pub fn sym_of_char(c: char) -> Sym {
    c as Sym
}

/// An ordered map from symbol to node id.
///
/// Kept as a vector sorted by symbol: lookups and inserts binary-search, and
/// iteration is symbol-ascending. Deterministic iteration order is required
/// by the trie DFS and the sorting utilities, so a hash map is not an option
/// here even for large alphabets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transitions(Vec<(Sym, usize)>);

impl Transitions {
    /// Create an empty transition table
    pub fn new() -> Self {
        Transitions::default()
    }

    /// Number of outgoing transitions
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check whether there are no transitions
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Look up the target node for a symbol
    pub fn get(&self, sym: Sym) -> Option<usize> {
        match self.0.binary_search_by_key(&sym, |&(s, _)| s) {
            Ok(i) => Some(self.0[i].1),
            Err(_) => None,
        }
    }

    /// Insert or replace the target node for a symbol
    pub fn set(&mut self, sym: Sym, node: usize) {
        match self.0.binary_search_by_key(&sym, |&(s, _)| s) {
            Ok(i) => self.0[i] = (sym, node),
            Err(i) => self.0.insert(i, (sym, node)),
        }
    }

    /// Iterate over (symbol, target) pairs in ascending symbol order
    pub fn iter(&self) -> impl Iterator<Item = (Sym, usize)> + '_ {
        self.0.iter().copied()
    }
}
