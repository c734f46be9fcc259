//! Property-based tests over randomly generated references: the suffix
//! array is a permutation in sorted suffix order, the three SA strategies
//! agree, rank matches a naive scan, and sampled SA recovery matches the
//! unsampled SA regardless of sample rate.

use proptest::prelude::*;

use dna_fm_index::alphabet::Symbol;
use dna_fm_index::suffix_array::Strategy;
use dna_fm_index::{FmIndex, IndexOptions};

fn reference_strategy(max_len: usize) -> impl Strategy<Value = Vec<u8>> {
    proptest::collection::vec(
        prop_oneof![Just(b'A'), Just(b'C'), Just(b'G'), Just(b'T'), Just(b'N')],
        1..max_len,
    )
}

proptest! {
    #[test]
    fn sa_is_a_permutation_and_sorted(reference in reference_strategy(200)) {
        let idx = FmIndex::build(&reference, IndexOptions::new()).unwrap();
        let n = idx.len() + 1;

        let mut seen = vec![false; n];
        let mut sa = Vec::with_capacity(n);
        for i in 0..n {
            let v = idx.get_sa(i).unwrap() as usize;
            prop_assert!(v < n);
            prop_assert!(!seen[v], "SA value {} repeated", v);
            seen[v] = true;
            sa.push(v);
        }

        // Reconstruct the (sentinel-terminated) text to compare suffixes.
        let mut text = idx.reconstruct();
        text.push(b'$');
        for window in sa.windows(2) {
            let (a, b) = (window[0], window[1]);
            prop_assert!(text[a..] <= text[b..], "SA not sorted at offsets {} {}", a, b);
        }
    }

    #[test]
    fn strategies_agree_on_sa(reference in reference_strategy(120)) {
        let dc3 = FmIndex::build(&reference, IndexOptions::new().with_strategy(Strategy::Dc3)).unwrap();
        let mm = FmIndex::build(&reference, IndexOptions::new().with_strategy(Strategy::ManberMyers)).unwrap();
        let simple = FmIndex::build(&reference, IndexOptions::new().with_strategy(Strategy::Simple)).unwrap();

        for i in 0..=dc3.len() {
            let a = dc3.get_sa(i).unwrap();
            prop_assert_eq!(a, mm.get_sa(i).unwrap());
            prop_assert_eq!(a, simple.get_sa(i).unwrap());
        }
    }

    #[test]
    fn reconstruct_round_trips(reference in reference_strategy(150)) {
        let idx = FmIndex::build(&reference, IndexOptions::new()).unwrap();
        prop_assert_eq!(idx.reconstruct(), reference);
    }

    #[test]
    fn rank_matches_naive_scan(reference in reference_strategy(100)) {
        let idx = FmIndex::build(&reference, IndexOptions::new()).unwrap();
        let n = idx.len() + 1;

        let bwt: Vec<Symbol> = (0..n).map(|i| idx.access(i).unwrap()).collect();
        for &symbol in &Symbol::ORDER {
            let mut running = 0usize;
            for (i, &b) in bwt.iter().enumerate() {
                if b == symbol {
                    running += 1;
                }
                prop_assert_eq!(idx.rank(symbol, i).unwrap(), running);
            }
        }
    }

    #[test]
    fn sampled_sa_matches_unsampled(
        reference in reference_strategy(100),
        rate in prop_oneof![Just(1u32), Just(2u32), Just(4u32), Just(8u32)],
    ) {
        let full = FmIndex::build(&reference, IndexOptions::new()).unwrap();
        let sampled = FmIndex::build(&reference, IndexOptions::new().with_sample_rate(rate)).unwrap();
        for i in 0..=full.len() {
            prop_assert_eq!(full.get_sa(i).unwrap(), sampled.get_sa(i).unwrap());
        }
    }

    #[test]
    fn locate_matches_naive_substring_search(
        reference in reference_strategy(80),
        pattern_len in 1usize..6,
    ) {
        let idx = FmIndex::build(&reference, IndexOptions::new()).unwrap();
        if pattern_len > reference.len() {
            return Ok(());
        }
        let pattern = &reference[0..pattern_len];

        let mut expected: Vec<u32> = Vec::new();
        for start in 0..=(reference.len() - pattern_len) {
            if &reference[start..start + pattern_len] == pattern {
                expected.push(start as u32);
            }
        }
        expected.sort_unstable();

        let mut got = idx.locate(pattern).unwrap();
        got.sort_unstable();
        prop_assert_eq!(got.clone(), expected.clone());
        prop_assert_eq!(idx.count(pattern), expected.len());
    }
}
