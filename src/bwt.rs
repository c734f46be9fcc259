//! Burrows-Wheeler transform and the cumulative C-table, derived from a
//! suffix array over the alphabet-encoded reference.

use crate::alphabet::{Symbol, ALPHABET_LEN};

/// `BWT[i] = reference[SA[i] - 1]`, with `reference[-1]` read as the
/// sentinel (`BWT[i] = '$'` when `SA[i] == 0`).
pub fn transform(reference: &[Symbol], sa: &[u32]) -> Vec<Symbol> {
    let n = reference.len();
    sa.iter()
        .map(|&p| {
            let p = p as usize;
            if p == 0 {
                Symbol::Sentinel
            } else {
                reference[p - 1]
            }
        })
        .collect()
}

/// Cumulative symbol counts over the reference in lexicographic order
/// `$ < A < C < G < N < T`. `c_table[k]` is the number of reference symbols
/// strictly less than `Symbol::ORDER[k]`; a trailing entry equal to `n`
/// marks one-past-the-last symbol, used as the upper sentinel in LF-step
/// sanity checks.
pub fn c_table(reference: &[Symbol]) -> [u32; ALPHABET_LEN + 1] {
    let mut counts = [0u32; ALPHABET_LEN];
    for &sym in reference {
        counts[sym.rank_in_alphabet()] += 1;
    }

    let mut table = [0u32; ALPHABET_LEN + 1];
    let mut acc = 0u32;
    for (k, &count) in counts.iter().enumerate() {
        table[k] = acc;
        acc += count;
    }
    table[ALPHABET_LEN] = acc;
    table
}
