//! Token output of the greedy tokenizer.

use serde::{Deserialize, Serialize};

/// One segment of a tokenized input.
///
/// `node` is the trie node of the matched vocabulary entry, or `None` for a
/// run of symbols no entry covers. Callers that need the conventional signed
/// encoding map `None` to `-1` at their boundary. `len` counts symbols of the
/// tokenizer's alphabet: bytes for byte input, chars for string input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenSpan {
    /// Trie node of the matched entry, `None` for an unknown run
    pub node: Option<usize>,
    /// Length of the segment in symbols
    pub len: usize,
}

impl TokenSpan {
    /// A segment matching the vocabulary entry terminating at `node`
    pub fn known(node: usize, len: usize) -> Self {
        TokenSpan {
            node: Some(node),
            len,
        }
    }

    /// A run of unrecognized symbols
    pub fn unknown(len: usize) -> Self {
        TokenSpan { node: None, len }
    }

    /// Whether this segment matched no vocabulary entry
    pub fn is_unknown(&self) -> bool {
        self.node.is_none()
    }
}

impl std::fmt::Display for TokenSpan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.node {
            Some(node) => write!(f, "#{}/{}", node, self.len),
            None => write!(f, "?/{}", self.len),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_span_display() {
        assert_eq!(TokenSpan::known(3, 2).to_string(), "#3/2");
        assert_eq!(TokenSpan::unknown(4).to_string(), "?/4");
    }

    #[test]
    fn test_token_span_unknown() {
        assert!(TokenSpan::unknown(1).is_unknown());
        assert!(!TokenSpan::known(0, 1).is_unknown());
    }
}
