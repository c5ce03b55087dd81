//! # gsam-rs
//!
//! A fast generalized suffix automaton written in Rust.
//!
//! The automaton recognizes every substring of every sequence it was built
//! from (a single byte or char sequence, or a whole trie of them) and keeps
//! the suffix-link structure needed for streaming queries. On top of it sit a
//! greedy longest-match tokenizer and an incremental vocabulary prefix/infix
//! automaton.
//!
//! ## Quick Start
//!
//! ```rust
//! use gsam_rs::GeneralSam;
//!
//! let sam = GeneralSam::from_chars("abcbc").unwrap();
//!
//! let mut state = sam.root_state();
//! state.feed_chars("cbc").unwrap();
//! assert!(state.is_accepting());
//!
//! let mut state = sam.root_state();
//! state.feed_chars("bcb").unwrap();
//! assert!(!state.is_accepting());
//! ```
//!
//! ## Tokenizing Against a Vocabulary
//!
//! ```rust
//! use gsam_rs::{build_trie_from_chars, GeneralSam, GreedyTokenizer};
//!
//! let (trie, entries) = build_trie_from_chars(["ab", "cd", "abcd"]).unwrap();
//! let sam = GeneralSam::from_trie(&trie).unwrap();
//! let tokenizer = GreedyTokenizer::from_sam_and_trie(sam, trie).unwrap();
//!
//! let spans = tokenizer.tokenize_chars("abcdxab").unwrap();
//! assert_eq!(spans[0].node, Some(entries[2])); // "abcd", the longest match
//! assert_eq!(spans[0].len, 4);
//! assert!(spans[1].is_unknown());
//! ```

pub mod alphabet;
pub mod error;
pub mod sam;
pub mod token;
pub mod tokenizer;
pub mod trie;
pub mod trie_utils;
pub mod vocab_prefix;

// Re-export main types for convenience
pub use alphabet::{Alphabet, Sym, Transitions};
pub use error::Error;
pub use sam::{GeneralSam, SamNode, SamState};
pub use token::TokenSpan;
pub use tokenizer::GreedyTokenizer;
pub use trie::{Trie, TrieNode};
pub use trie_utils::{
    build_trie_from_bytes, build_trie_from_chars, sort_bytes, sort_chars, sort_seqs_via_trie,
    CountInfo, SortResult,
};
pub use vocab_prefix::VocabPrefixAutomaton;

/// Version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
