//! Suffix-array construction strategies.
//!
//! All three builders take the same integer-encoded input (sentinel
//! included) and return the same permutation of `[0, n)`; they differ only
//! in asymptotic cost. [`simple`] exists purely as a cross-validation
//! oracle for the other two in tests.

pub mod dc3;
pub mod manber_myers;
pub mod simple;

use crate::error::IndexError;

/// Which suffix-array algorithm to run during construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Strategy {
    /// Kärkkäinen-Sanders linear-time construction. The default.
    #[default]
    Dc3,
    /// `O(n log n)` prefix-doubling construction.
    ManberMyers,
    /// `O(n^2 log n)` direct suffix sort, for small inputs only.
    Simple,
}

impl Strategy {
    /// Parse a strategy by name, for config/serialization round-trips that
    /// carry the strategy as a string rather than the typed enum.
    pub fn from_name(name: &str) -> Result<Self, IndexError> {
        match name {
            "dc3" | "Dc3" | "DC3" => Ok(Strategy::Dc3),
            "manber_myers" | "ManberMyers" | "mm" | "MM" => Ok(Strategy::ManberMyers),
            "simple" | "Simple" => Ok(Strategy::Simple),
            other => Err(IndexError::InvalidStrategy(other.to_string())),
        }
    }
}

/// Build the suffix array of an alphabet-encoded reference (sentinel
/// included) using `strategy`. `codes` must use [`crate::alphabet::Symbol::dc3_code`]
/// encoding (sentinel = 1, positive integers, no zero).
pub fn build(strategy: Strategy, codes: &[u32]) -> Vec<u32> {
    match strategy {
        Strategy::Dc3 => dc3::build(codes),
        Strategy::ManberMyers => {
            let narrow: Vec<u8> = codes.iter().map(|&c| c as u8).collect();
            manber_myers::build(&narrow)
        }
        Strategy::Simple => {
            let narrow: Vec<u8> = codes.iter().map(|&c| c as u8).collect();
            simple::build(&narrow)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_name_accepts_known_spellings() {
        assert_eq!(Strategy::from_name("dc3"), Ok(Strategy::Dc3));
        assert_eq!(Strategy::from_name("MM"), Ok(Strategy::ManberMyers));
        assert_eq!(Strategy::from_name("Simple"), Ok(Strategy::Simple));
    }

    #[test]
    fn from_name_rejects_unknown() {
        assert!(Strategy::from_name("quantum").is_err());
    }

    #[test]
    fn all_strategies_agree_on_banana() {
        // $=1, a=2, b=3, n=4 -> dc3_code ordering for "banana$"
        let codes: Vec<u32> = vec![3, 2, 4, 2, 4, 2, 1];
        let dc3_sa = build(Strategy::Dc3, &codes);
        let mm_sa = build(Strategy::ManberMyers, &codes);
        let simple_sa = build(Strategy::Simple, &codes);
        assert_eq!(dc3_sa, mm_sa);
        assert_eq!(dc3_sa, simple_sa);
    }
}
