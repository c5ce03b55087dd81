//! Error type shared by the trie, the automaton, and the query layers.

use crate::alphabet::Alphabet;

/// Errors surfaced by construction and query operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Input from one alphabet was fed into a structure built over the other
    AlphabetMismatch {
        /// The alphabet the structure was built over
        expected: Alphabet,
        /// The alphabet of the offending input
        found: Alphabet,
    },
    /// A node id that does not belong to the referenced structure
    InvalidNode(usize),
    /// A string length exceeded the representable range during construction
    ConstructionOverflow,
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::AlphabetMismatch { expected, found } => {
                write!(f, "Alphabet mismatch: expected {}, found {}", expected, found)
            }
            Error::InvalidNode(id) => write!(f, "Invalid node id: {}", id),
            Error::ConstructionOverflow => write!(f, "String length overflow during construction"),
        }
    }
}

impl std::error::Error for Error {}
