//! Batch trie building and canonical sequence sorting.
//!
//! The sort order is a pre-order walk of the trie with children taken in
//! ascending symbol order and entries at a node preceding its extensions, so
//! equal sequences keep their relative input order and every subtree owns a
//! contiguous rank range.

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::trie::Trie;

/// Build a byte trie from a batch of sequences.
///
/// Returns the trie together with the terminal node id of each input
/// sequence, in input order.
pub fn build_trie_from_bytes<I, S>(seqs: I) -> Result<(Trie, Vec<usize>), Error>
where
    I: IntoIterator<Item = S>,
    S: AsRef<[u8]>,
{
    let mut trie = Trie::new_bytes();
    let mut nodes = Vec::new();
    for seq in seqs {
        nodes.push(trie.insert_bytes(seq.as_ref())?);
    }
    Ok((trie, nodes))
}

/// Build a char trie from a batch of strings
pub fn build_trie_from_chars<I, S>(seqs: I) -> Result<(Trie, Vec<usize>), Error>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut trie = Trie::new_chars();
    let mut nodes = Vec::new();
    for seq in seqs {
        nodes.push(trie.insert_chars(seq.as_ref())?);
    }
    Ok((trie, nodes))
}

/// Per-trie-node sequence counts and rank range
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountInfo {
    /// Number of input sequences terminating exactly at this node
    pub here: usize,
    /// First rank of the node's subtree in sort order
    pub lower: usize,
    /// One past the last rank of the node's subtree
    pub upper: usize,
}

/// Result of sorting sequences along a trie
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortResult {
    /// Input indices in canonical order
    pub order: Vec<usize>,
    /// Rank of each input index: `rank[i]` is the position of input `i`
    pub rank: Vec<usize>,
    /// Counts and rank ranges per trie node
    pub counts: Vec<CountInfo>,
}

/// Sort inserted sequences by the canonical trie walk.
///
/// `seq_nodes` maps each input sequence to its terminal node, as returned by
/// [`build_trie_from_bytes`] / [`build_trie_from_chars`]. Duplicate sequences
/// share a node and keep their input order.
pub fn sort_seqs_via_trie(trie: &Trie, seq_nodes: &[usize]) -> Result<SortResult, Error> {
    let num_nodes = trie.num_nodes();
    let mut bucket: Vec<Vec<usize>> = vec![Vec::new(); num_nodes];
    for (i, &node) in seq_nodes.iter().enumerate() {
        if node >= num_nodes {
            return Err(Error::InvalidNode(node));
        }
        bucket[node].push(i);
    }

    let mut counts = vec![CountInfo::default(); num_nodes];
    let mut order = Vec::with_capacity(seq_nodes.len());

    // explicit stack; a node is pushed back once to close its range after
    // its children are done
    let mut stack = vec![(Trie::ROOT, false)];
    while let Some((u, closing)) = stack.pop() {
        if closing {
            counts[u].upper = order.len();
            continue;
        }
        counts[u].lower = order.len();
        counts[u].here = bucket[u].len();
        order.extend(bucket[u].iter().copied());

        stack.push((u, true));
        let children: Vec<usize> = trie.node_ref(u).children().map(|(_, c)| c).collect();
        for &child in children.iter().rev() {
            stack.push((child, false));
        }
    }

    let mut rank = vec![0; seq_nodes.len()];
    for (r, &i) in order.iter().enumerate() {
        rank[i] = r;
    }

    Ok(SortResult {
        order,
        rank,
        counts,
    })
}

/// Build a byte trie and sort the sequences along it
pub fn sort_bytes<S: AsRef<[u8]>>(seqs: &[S]) -> Result<SortResult, Error> {
    let (trie, nodes) = build_trie_from_bytes(seqs)?;
    sort_seqs_via_trie(&trie, &nodes)
}

/// Build a char trie and sort the strings along it
pub fn sort_chars<S: AsRef<str>>(seqs: &[S]) -> Result<SortResult, Error> {
    let (trie, nodes) = build_trie_from_chars(seqs)?;
    sort_seqs_via_trie(&trie, &nodes)
}
