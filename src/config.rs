//! Library-level construction parameters for [`crate::index::FmIndex`].
//!
//! There is no CLI and no environment-driven configuration surface for this
//! crate; callers construct an [`IndexOptions`] value directly.

use crate::error::IndexError;
use crate::suffix_array::Strategy;

/// Parameters controlling how [`crate::index::FmIndex::build`] constructs
/// an index from a reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IndexOptions {
    /// Suffix-array construction strategy. All three produce the same SA;
    /// this only trades construction time for implementation simplicity.
    pub strategy: Strategy,
    /// Keep every SA entry whose value is a multiple of this rate; unsampled
    /// entries are recovered at query time via an LF-mapping walk. `1`
    /// disables sampling (the full SA is stored).
    pub sample_rate: u32,
}

impl Default for IndexOptions {
    fn default() -> Self {
        Self {
            strategy: Strategy::Dc3,
            sample_rate: 1,
        }
    }
}

impl IndexOptions {
    /// Options with the default strategy and no SA sampling.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `strategy` for suffix-array construction.
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Sample the SA at `rate`; must be `>= 1`.
    pub fn with_sample_rate(mut self, rate: u32) -> Self {
        self.sample_rate = rate;
        self
    }

    pub(crate) fn validate(&self) -> Result<(), IndexError> {
        if self.sample_rate < 1 {
            return Err(IndexError::InvalidSampleRate);
        }
        Ok(())
    }
}
