//! The succinct FM-index: suffix array (optionally sampled), BWT, C-table,
//! and wavelet tree, tied together into one immutable, `Send + Sync` query
//! structure.

use tracing::{debug, debug_span};

use crate::alphabet::{Symbol, ALPHABET_LEN};
use crate::bitvector::{BitVector, RankDictionary};
use crate::bwt;
use crate::config::IndexOptions;
use crate::error::IndexError;
use crate::suffix_array;
use crate::wavelet_tree::WaveletTree;

/// A succinct full-text index over a DNA reference, supporting symbol
/// access, rank queries, suffix-array recovery, whole-text reconstruction,
/// and backward-search pattern matching.
///
/// Constructed once via [`FmIndex::build`] and read-only thereafter; any
/// number of threads may query it concurrently without synchronization.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FmIndex {
    /// Length of the reference including the appended sentinel.
    n: usize,
    sample_rate: u32,
    /// Sampled SA values, in SA order. Full SA when `sample_rate == 1`.
    sa: Vec<u32>,
    /// `Some` only when `sample_rate > 1`: bit `i` set iff `SA[i]` survived
    /// sampling.
    sa_bitmap: Option<BitVector>,
    sa_bucket: Option<RankDictionary>,
    c_table: [u32; ALPHABET_LEN + 1],
    wavelet: WaveletTree,
}

const fn _assert_send_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    let _ = assert_send_sync::<FmIndex>;
}

impl FmIndex {
    /// Build an index over `reference`, a byte string over
    /// `{A, C, G, N, T}` (lowercase accepted and normalized; `$` accepted as
    /// an explicit trailing sentinel, appended automatically if absent).
    pub fn build(reference: &[u8], options: IndexOptions) -> Result<Self, IndexError> {
        options.validate()?;
        if reference.is_empty() {
            return Err(IndexError::EmptyReference);
        }

        let span = debug_span!("fm_index_build", len = reference.len());
        let _enter = span.enter();

        let symbols = normalize(reference)?;
        let n = symbols.len();

        let codes: Vec<u32> = symbols.iter().map(|s| s.dc3_code()).collect();
        debug!(strategy = ?options.strategy, "building suffix array");
        let sa = suffix_array::build(options.strategy, &codes);
        debug_assert!(is_permutation(&sa, n));

        debug!("deriving BWT and C-table");
        let bwt = bwt::transform(&symbols, &sa);
        let c_table = bwt::c_table(&symbols);

        debug!("building wavelet tree and rank dictionaries");
        let wavelet = WaveletTree::build(&bwt);

        let (sa, sa_bitmap, sa_bucket) = if options.sample_rate == 1 {
            (sa, None, None)
        } else {
            debug!(rate = options.sample_rate, "sampling suffix array");
            let mut bitmap = BitVector::with_capacity(n);
            let mut sampled = Vec::new();
            for &value in &sa {
                let keep = value % options.sample_rate == 0;
                bitmap.push(keep);
                if keep {
                    sampled.push(value);
                }
            }
            let bucket = RankDictionary::build(&bitmap);
            (sampled, Some(bitmap), Some(bucket))
        };

        Ok(Self {
            n,
            sample_rate: options.sample_rate,
            sa,
            sa_bitmap,
            sa_bucket,
            c_table,
            wavelet,
        })
    }

    /// Length of the original reference, excluding the sentinel.
    pub fn len(&self) -> usize {
        self.n - 1
    }

    /// Whether the underlying reference was empty (never true for a
    /// successfully built index, since construction rejects empty input).
    pub fn is_empty(&self) -> bool {
        self.n <= 1
    }

    /// `BWT[i]`.
    ///
    /// # Errors
    /// Returns [`IndexError::QueryOutOfRange`] if `i >= len() + 1`.
    pub fn access(&self, i: usize) -> Result<Symbol, IndexError> {
        self.bounds_check(i)?;
        Ok(self.wavelet.access(i))
    }

    /// Number of occurrences of `c` in `BWT[0..=i]`.
    ///
    /// # Errors
    /// Returns [`IndexError::QueryOutOfRange`] if `i >= len() + 1`.
    pub fn rank(&self, c: Symbol, i: usize) -> Result<usize, IndexError> {
        self.bounds_check(i)?;
        Ok(self.wavelet.rank(c, Some(i)))
    }

    fn bounds_check(&self, i: usize) -> Result<(), IndexError> {
        if i >= self.n {
            return Err(IndexError::QueryOutOfRange { index: i, len: self.n });
        }
        Ok(())
    }

    /// `C[c]`: number of reference symbols strictly lexicographically less
    /// than `c`.
    fn c(&self, c: Symbol) -> u32 {
        self.c_table[c.rank_in_alphabet()]
    }

    /// One LF-mapping step: the row whose SA value is one less than row
    /// `i`'s.
    fn lf(&self, i: usize) -> usize {
        let c = self.wavelet.access(i);
        let r = self.wavelet.rank(c, Some(i));
        self.c(c) as usize + r - 1
    }

    /// `SA[i]`, recovered via an LF-mapping walk when the SA is sampled and
    /// row `i` was not retained.
    ///
    /// # Errors
    /// Returns [`IndexError::QueryOutOfRange`] if `i >= len() + 1`.
    pub fn get_sa(&self, i: usize) -> Result<u32, IndexError> {
        self.bounds_check(i)?;
        match (&self.sa_bitmap, &self.sa_bucket) {
            (None, None) => Ok(self.sa[i]),
            (Some(bitmap), Some(bucket)) => {
                let mut j = i;
                let mut steps = 0u32;
                while !bitmap.get(j) {
                    j = self.lf(j);
                    steps += 1;
                }
                let sampled_idx = bucket.rank1_inclusive(bitmap, Some(j)) - 1;
                Ok(self.sa[sampled_idx] + steps)
            }
            _ => unreachable!("sa_bitmap and sa_bucket are always both present or both absent"),
        }
    }

    /// Reconstruct the original reference, excluding the sentinel.
    ///
    /// The LF-walk from row 0 visits BWT symbols in reverse text order
    /// (`T[n-2], T[n-3], ..., T[0]`), so each visited symbol is written from
    /// the back of the output buffer forward.
    pub fn reconstruct(&self) -> Vec<u8> {
        let mut out = vec![0u8; self.n - 1];
        let mut row = 0usize;
        for slot in out.iter_mut().rev() {
            *slot = self.wavelet.access(row).to_ascii();
            row = self.lf(row);
        }
        out
    }

    /// Number of occurrences of `pattern` in the reference. Returns `0` for
    /// a pattern containing a byte outside the alphabet, rather than an
    /// error.
    pub fn count(&self, pattern: &[u8]) -> usize {
        let (lo, hi) = self.backward_search(pattern);
        hi.saturating_sub(lo)
    }

    /// Reference offsets where `pattern` occurs, in arbitrary order.
    /// Returns an empty vector for a pattern containing a byte outside the
    /// alphabet.
    pub fn locate(&self, pattern: &[u8]) -> Result<Vec<u32>, IndexError> {
        let (lo, hi) = self.backward_search(pattern);
        let mut out = Vec::with_capacity(hi.saturating_sub(lo));
        for row in lo..hi {
            out.push(self.get_sa(row)?);
        }
        Ok(out)
    }

    /// Backward search: narrow `[lo, hi)` one pattern symbol at a time,
    /// right to left. Returns `(lo, hi)` with `lo == hi` when the pattern
    /// does not occur or contains a non-alphabet byte.
    fn backward_search(&self, pattern: &[u8]) -> (usize, usize) {
        let mut lo = 0usize;
        let mut hi = self.n;

        for &byte in pattern.iter().rev() {
            let symbol = match Symbol::from_ascii(byte) {
                Some(s) if s != Symbol::Sentinel => s,
                _ => return (0, 0),
            };
            let c = self.c(symbol) as usize;
            let rank_lo = if lo == 0 { 0 } else { self.wavelet.rank(symbol, Some(lo - 1)) };
            let rank_hi = self.wavelet.rank(symbol, Some(hi - 1));
            lo = c + rank_lo;
            hi = c + rank_hi;
            if lo >= hi {
                return (0, 0);
            }
        }

        (lo, hi)
    }
}

fn normalize(reference: &[u8]) -> Result<Vec<Symbol>, IndexError> {
    let mut symbols = Vec::with_capacity(reference.len() + 1);
    let mut saw_sentinel = false;
    for (position, &byte) in reference.iter().enumerate() {
        let symbol = Symbol::from_ascii(byte).ok_or(IndexError::InvalidAlphabet { byte, position })?;
        if symbol == Symbol::Sentinel {
            saw_sentinel = true;
        }
        symbols.push(symbol);
    }
    if !saw_sentinel {
        symbols.push(Symbol::Sentinel);
    }
    Ok(symbols)
}

fn is_permutation(sa: &[u32], n: usize) -> bool {
    let mut seen = vec![false; n];
    for &v in sa {
        let v = v as usize;
        if v >= n || seen[v] {
            return false;
        }
        seen[v] = true;
    }
    true
}
