//! Reference suffix-array construction: sort every suffix directly.
//!
//! `O(n^2 log n)` — used only for cross-validation against the DC3 and
//! Manber-Myers builders on small inputs.

/// Build the suffix array of `text` by sorting all suffixes lexicographically.
///
/// `text` is the integer-encoded reference (see
/// [`crate::alphabet::Symbol::rank_in_alphabet`]), sentinel included.
pub fn build(text: &[u8]) -> Vec<u32> {
    let n = text.len();
    let mut sa: Vec<u32> = (0..n as u32).collect();
    sa.sort_by(|&a, &b| text[a as usize..].cmp(&text[b as usize..]));
    sa
}
