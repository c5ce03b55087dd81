//! Greedy longest-match tokenizer.
//!
//! Segments an input into the longest vocabulary entries known to a trie,
//! using the suffix automaton built from that trie to drive the matching.

use std::sync::Arc;

use crate::alphabet::{sym_of_byte, sym_of_char, Alphabet, Sym};
use crate::error::Error;
use crate::sam::GeneralSam;
use crate::token::TokenSpan;
use crate::trie::Trie;

/// Greedy tokenizer over a vocabulary trie and its suffix automaton
pub struct GreedyTokenizer {
    /// The automaton built from the trie (shared reference)
    sam: Arc<GeneralSam>,
    /// The vocabulary trie (shared reference)
    trie: Arc<Trie>,
    /// For each automaton node, the vocabulary entry whose string is the
    /// longest entry among the node and its suffix-link ancestors, as
    /// (trie node, entry length)
    best_match: Vec<Option<(usize, usize)>>,
}

impl GreedyTokenizer {
    /// Create a tokenizer from an automaton and the trie it was built from
    pub fn from_sam_and_trie(sam: GeneralSam, trie: Trie) -> Result<Self, Error> {
        Self::with_arcs(Arc::new(sam), Arc::new(trie))
    }

    /// Create a tokenizer sharing already-wrapped automaton and trie
    pub fn with_arcs(sam: Arc<GeneralSam>, trie: Arc<Trie>) -> Result<Self, Error> {
        sam.check_alphabet(trie.alphabet())?;
        let best_match = build_best_match(&sam, &trie);
        Ok(GreedyTokenizer {
            sam,
            trie,
            best_match,
        })
    }

    /// Get a reference to the automaton
    pub fn sam(&self) -> &GeneralSam {
        &self.sam
    }

    /// Get a reference to the trie
    pub fn trie(&self) -> &Trie {
        &self.trie
    }

    /// Get the Arc reference to the automaton (for sharing)
    pub fn sam_arc(&self) -> Arc<GeneralSam> {
        Arc::clone(&self.sam)
    }

    /// Get the Arc reference to the trie (for sharing)
    pub fn trie_arc(&self) -> Arc<Trie> {
        Arc::clone(&self.trie)
    }

    /// The alphabet this tokenizer consumes
    pub fn alphabet(&self) -> Alphabet {
        self.sam.alphabet()
    }

    /// Tokenize a byte sequence
    pub fn tokenize_bytes(&self, input: &[u8]) -> Result<Vec<TokenSpan>, Error> {
        self.sam.check_alphabet(Alphabet::Bytes)?;
        let syms: Vec<Sym> = input.iter().map(|&b| sym_of_byte(b)).collect();
        Ok(self.tokenize_syms(&syms))
    }

    /// Tokenize the chars of a string
    pub fn tokenize_chars(&self, input: &str) -> Result<Vec<TokenSpan>, Error> {
        self.sam.check_alphabet(Alphabet::Chars)?;
        let syms: Vec<Sym> = input.chars().map(sym_of_char).collect();
        Ok(self.tokenize_syms(&syms))
    }

    /// Longest-match segmentation over widened symbols.
    ///
    /// From each cursor position the automaton is walked from the root; a
    /// candidate is recorded whenever the best match at the reached node is
    /// exactly as long as the symbols fed, which holds precisely when the fed
    /// prefix is itself a vocabulary entry. The last candidate wins. Symbols
    /// no entry covers are folded into unknown runs.
    fn tokenize_syms(&self, syms: &[Sym]) -> Vec<TokenSpan> {
        let mut out: Vec<TokenSpan> = Vec::new();
        let mut state = self.sam.root_state();
        let mut pos = 0;

        while pos < syms.len() {
            state.reset();
            let mut best: Option<(usize, usize)> = None;
            let mut fed = 0;

            for &sym in &syms[pos..] {
                state.feed_sym(sym);
                if state.is_nil() {
                    break;
                }
                fed += 1;
                if let Some((node, len)) = self.best_match[state.node_id()] {
                    if len == fed {
                        best = Some((node, len));
                    }
                }
            }

            match best {
                Some((node, len)) => {
                    out.push(TokenSpan::known(node, len));
                    pos += len;
                }
                None => {
                    match out.last_mut() {
                        Some(last) if last.is_unknown() => last.len += 1,
                        _ => out.push(TokenSpan::unknown(1)),
                    }
                    pos += 1;
                }
            }
        }
        out
    }
}

/// Compute the nearest vocabulary entry over the suffix-link tree.
///
/// Nodes are visited in ascending `len` order, so a node's suffix parent is
/// always finished first. A node canonically reached by an accepting trie
/// path contributes that entry; every other node inherits from its parent.
fn build_best_match(sam: &GeneralSam, trie: &Trie) -> Vec<Option<(usize, usize)>> {
    let mut order: Vec<usize> = (0..sam.num_nodes()).collect();
    order.sort_by_key(|&i| sam.node_ref(i).len());

    let mut best: Vec<Option<(usize, usize)>> = vec![None; sam.num_nodes()];
    for i in order {
        let node = sam.node_ref(i);
        let own = node
            .trie_ref()
            .filter(|&u| trie.node_ref(u).is_accepting())
            .map(|u| (u, node.len()));
        let inherited = node.link().and_then(|l| best[l]);
        best[i] = own.or(inherited);
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_tokenizer(vocab: &[&str]) -> (GreedyTokenizer, Vec<i64>) {
        let mut trie = Trie::new_chars();
        let entry_nodes: Vec<usize> = vocab
            .iter()
            .map(|w| trie.insert_chars(w).unwrap())
            .collect();

        let mut node_to_token = vec![-1i64; trie.num_nodes()];
        for (i, &n) in entry_nodes.iter().enumerate() {
            node_to_token[n] = i as i64;
        }

        let sam = GeneralSam::from_trie(&trie).unwrap();
        let tokenizer = GreedyTokenizer::from_sam_and_trie(sam, trie).unwrap();
        (tokenizer, node_to_token)
    }

    fn token_ids(
        tokenizer: &GreedyTokenizer,
        node_to_token: &[i64],
        input: &str,
    ) -> Vec<(i64, usize)> {
        tokenizer
            .tokenize_chars(input)
            .unwrap()
            .iter()
            .map(|span| (span.node.map_or(-1, |n| node_to_token[n]), span.len))
            .collect()
    }

    #[test]
    fn test_greedy_longest_match() {
        let vocab = ["a", "ab", "b", "bc", "c", "d", "e", "f", "cd", "abcde"];
        let (tokenizer, map) = make_tokenizer(&vocab);

        assert_eq!(token_ids(&tokenizer, &map, "abcde"), vec![(9, 5)]);
        assert_eq!(
            token_ids(&tokenizer, &map, "abcdf"),
            vec![(1, 2), (8, 2), (7, 1)]
        );
        assert_eq!(
            token_ids(&tokenizer, &map, "abca"),
            vec![(1, 2), (4, 1), (0, 1)]
        );
    }

    #[test]
    fn test_unknown_runs_merge() {
        let (tokenizer, map) = make_tokenizer(&["bc"]);

        assert_eq!(
            token_ids(&tokenizer, &map, "xybcxyz"),
            vec![(-1, 2), (0, 2), (-1, 3)]
        );
    }

    #[test]
    fn test_empty_input() {
        let (tokenizer, _) = make_tokenizer(&["ab"]);
        assert!(tokenizer.tokenize_chars("").unwrap().is_empty());
    }

    #[test]
    fn test_partial_entry_is_unknown() {
        // "b" is a suffix of an entry but not an entry itself
        let (tokenizer, map) = make_tokenizer(&["ab", "cb"]);
        assert_eq!(token_ids(&tokenizer, &map, "b"), vec![(-1, 1)]);
    }

    #[test]
    fn test_alphabet_mismatch() {
        let (tokenizer, _) = make_tokenizer(&["ab"]);
        assert!(matches!(
            tokenizer.tokenize_bytes(b"ab"),
            Err(Error::AlphabetMismatch { .. })
        ));
    }

    #[test]
    fn test_mismatched_pair_rejected() {
        let mut trie = Trie::new_chars();
        trie.insert_chars("ab").unwrap();
        let sam = GeneralSam::from_bytes(b"ab").unwrap();
        assert!(matches!(
            GreedyTokenizer::from_sam_and_trie(sam, trie),
            Err(Error::AlphabetMismatch { .. })
        ));
    }

    #[test]
    fn test_arc_sharing() {
        let mut trie = Trie::new_chars();
        trie.insert_chars("ab").unwrap();
        let sam = GeneralSam::from_trie(&trie).unwrap();

        let first = GreedyTokenizer::from_sam_and_trie(sam, trie).unwrap();
        let second = GreedyTokenizer::with_arcs(first.sam_arc(), first.trie_arc()).unwrap();

        assert_eq!(
            first.tokenize_chars("abab").unwrap(),
            second.tokenize_chars("abab").unwrap()
        );
    }
}
