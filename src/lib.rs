//! # DNA FM-index
//!
//! A succinct full-text index over a DNA reference string, built from three
//! interlocking pieces: a suffix array (optionally sampled for space), the
//! Burrows-Wheeler transform of the reference, and a fixed-topology
//! wavelet tree over the BWT that answers character-rank queries in time
//! proportional to the log of the alphabet size.
//!
//! ## Core pipeline
//!
//! 1. **Alphabet normalization**: reject bytes outside `{A, C, G, N, T, $}`,
//!    append a sentinel if one wasn't supplied.
//! 2. **Suffix-array construction**: [`suffix_array::Strategy::Dc3`] (linear
//!    time), `ManberMyers` (`O(n log n)`), or `Simple` (`O(n^2 log n)`,
//!    cross-validation only).
//! 3. **BWT and C-table** ([`bwt`]).
//! 4. **Wavelet tree** ([`wavelet_tree`]) over the fixed 6-symbol alphabet.
//! 5. **Rank dictionaries** ([`bitvector`]) for every bit vector in the
//!    index.
//! 6. **Optional SA sampling**, recovered at query time via an LF-mapping
//!    walk.
//!
//! ## Usage
//!
//! ```
//! use dna_fm_index::{FmIndex, IndexOptions};
//!
//! let index = FmIndex::build(b"GATTACA", IndexOptions::new()).unwrap();
//! assert_eq!(index.locate(b"A").unwrap().len(), 3);
//! assert_eq!(index.reconstruct(), b"GATTACA");
//! ```

#![warn(missing_docs, missing_debug_implementations)]

pub mod alphabet;
pub mod bitvector;
pub mod bwt;
pub mod config;
pub mod error;
pub mod index;
pub mod suffix_array;
pub mod wavelet_tree;

pub use alphabet::Symbol;
pub use config::IndexOptions;
pub use error::IndexError;
pub use index::FmIndex;
pub use suffix_array::Strategy;
