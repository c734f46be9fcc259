//! Error types surfaced at construction time or at query entry.

use thiserror::Error;

/// Errors returned by [`crate::index::FmIndex`] construction and queries.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum IndexError {
    /// Construction was attempted on a zero-length input.
    #[error("reference sequence must be non-empty")]
    EmptyReference,

    /// The input contained a byte outside `{A, C, G, N, T, $}`.
    #[error("unsupported character {byte:?} at position {position}")]
    InvalidAlphabet {
        /// The offending byte.
        byte: u8,
        /// Offset within the input where it was found.
        position: usize,
    },

    /// An unrecognized suffix-array strategy name was requested.
    #[error("unknown suffix array strategy: {0}")]
    InvalidStrategy(String),

    /// `sa_sample_rate` was zero.
    #[error("sa_sample_rate must be >= 1")]
    InvalidSampleRate,

    /// `access`, `rank`, or `get_sa` was called with an index outside `[0, n)`.
    #[error("index {index} out of range for length {len}")]
    QueryOutOfRange {
        /// The index that was requested.
        index: usize,
        /// The valid length (exclusive upper bound).
        len: usize,
    },
}
