//! Fixed-topology wavelet tree over the 6-symbol DNA alphabet.
//!
//! The tree has exactly five internal nodes, wired as a small metadata
//! table rather than heap-allocated nodes:
//!
//! ```text
//! node 0 ── 0 → node 1 ── 0 → N
//!        └─ 1 → node 2     └─ 1 → A
//!               ├─ 0 → node 3 ── 0 → C
//!               │             └─ 1 → G
//!               └─ 1 → node 4 ── 0 → T
//!                             └─ 1 → $
//! ```
//!
//! Every symbol's root-to-leaf path is given by
//! [`crate::alphabet::Symbol::wavelet_path`]; this module only needs the
//! inverse routing (node, bit) -> child, which [`ROUTE`] encodes.

use crate::alphabet::Symbol;
use crate::bitvector::{BitVector, RankDictionary};

const NODE_COUNT: usize = 5;

/// A wavelet-tree child: either another internal node or a leaf symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Child {
    Node(usize),
    Leaf(Symbol),
}

/// `ROUTE[node] = (left_child, right_child)`.
const ROUTE: [(Child, Child); NODE_COUNT] = [
    (Child::Node(1), Child::Node(2)),
    (Child::Leaf(Symbol::N), Child::Leaf(Symbol::A)),
    (Child::Node(3), Child::Node(4)),
    (Child::Leaf(Symbol::C), Child::Leaf(Symbol::G)),
    (Child::Leaf(Symbol::T), Child::Leaf(Symbol::Sentinel)),
];

fn route(node: usize, bit: bool) -> Child {
    let (left, right) = ROUTE[node];
    if bit {
        right
    } else {
        left
    }
}

/// A fixed five-internal-node wavelet tree over a BWT string.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WaveletTree {
    bits: [BitVector; NODE_COUNT],
    ranks: [RankDictionary; NODE_COUNT],
}

impl WaveletTree {
    /// Build the tree over `bwt`, partitioning symbols by the fixed
    /// topology and recording one routing bit per node per symbol that
    /// passes through it.
    pub fn build(bwt: &[Symbol]) -> Self {
        let mut bits: [BitVector; NODE_COUNT] = Default::default();
        build_node(0, bwt, &mut bits);
        let ranks = std::array::from_fn(|k| RankDictionary::build(&bits[k]));
        Self { bits, ranks }
    }

    /// Number of symbols encoded by the tree (the length of the BWT it was
    /// built from).
    pub fn len(&self) -> usize {
        self.bits[0].len()
    }

    /// Whether the tree encodes zero symbols.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The symbol at row `i`.
    ///
    /// # Panics
    /// Panics if `i >= len()`.
    pub fn access(&self, i: usize) -> Symbol {
        let mut node = 0usize;
        let mut idx = i;
        loop {
            let bit = self.bits[node].get(idx);
            let next_idx = self.rank_bit(node, bit, Some(idx)) - 1;
            match route(node, bit) {
                Child::Node(next) => {
                    node = next;
                    idx = next_idx;
                }
                Child::Leaf(symbol) => return symbol,
            }
        }
    }

    /// Number of occurrences of `c` in `bwt[0..=i]` (inclusive of row `i`).
    /// `i = None` models the `-1` edge case and always returns `0`.
    pub fn rank(&self, c: Symbol, i: Option<usize>) -> usize {
        let mut cur = i;
        let mut r = 0usize;
        for &(node, bit) in c.wavelet_path() {
            r = self.rank_bit(node, bit, cur);
            if r == 0 {
                return 0;
            }
            cur = Some(r - 1);
        }
        r
    }

    /// Inclusive rank of `bit` at `node`, up to and including row `idx`
    /// (`None` meaning "before row 0", which is always `0`).
    fn rank_bit(&self, node: usize, bit: bool, idx: Option<usize>) -> usize {
        let ones = self.ranks[node].rank1_inclusive(&self.bits[node], idx);
        if bit {
            ones
        } else {
            let upto = idx.map_or(0, |i| i + 1);
            upto - ones
        }
    }
}

fn build_node(node: usize, symbols: &[Symbol], bits: &mut [BitVector; NODE_COUNT]) {
    let mut left = Vec::new();
    let mut right = Vec::new();
    for &sym in symbols {
        let bit = bit_for_node(node, sym);
        bits[node].push(bit);
        if bit {
            right.push(sym);
        } else {
            left.push(sym);
        }
    }

    if let Child::Node(next) = route(node, false) {
        build_node(next, &left, bits);
    }
    if let Child::Node(next) = route(node, true) {
        build_node(next, &right, bits);
    }
}

fn bit_for_node(node: usize, sym: Symbol) -> bool {
    sym.wavelet_path()
        .iter()
        .find(|&&(n, _)| n == node)
        .map(|&(_, bit)| bit)
        .expect("every symbol's wavelet path visits every node on its root-to-leaf route")
}
