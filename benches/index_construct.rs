//! Construction-cost benchmarks across the three suffix-array strategies
//! and a representative range of reference lengths.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use dna_fm_index::alphabet::Symbol;
use dna_fm_index::suffix_array::Strategy;
use dna_fm_index::{FmIndex, IndexOptions};

fn synthetic_reference(len: usize) -> Vec<u8> {
    const BASES: [u8; 4] = [b'A', b'C', b'G', b'T'];
    (0..len)
        .map(|i| BASES[(i * 2654435761usize) % BASES.len()])
        .collect()
}

fn bench_strategies(c: &mut Criterion) {
    let mut group = c.benchmark_group("construct_by_strategy");
    for &len in &[256usize, 1024, 4096] {
        let reference = synthetic_reference(len);
        for strategy in [Strategy::Dc3, Strategy::ManberMyers, Strategy::Simple] {
            // The O(n^2 log n) reference builder is only comparable at
            // small sizes; skip it above 1k to keep the suite fast.
            if strategy == Strategy::Simple && len > 1024 {
                continue;
            }
            group.bench_with_input(
                BenchmarkId::new(format!("{strategy:?}"), len),
                &reference,
                |b, reference| {
                    b.iter(|| {
                        let opts = IndexOptions::new().with_strategy(strategy);
                        black_box(FmIndex::build(reference, opts).unwrap());
                    });
                },
            );
        }
    }
    group.finish();
}

fn bench_sampling(c: &mut Criterion) {
    let mut group = c.benchmark_group("construct_by_sample_rate");
    let reference = synthetic_reference(8192);
    for &rate in &[1u32, 4, 16, 64] {
        group.bench_with_input(BenchmarkId::from_parameter(rate), &rate, |b, &rate| {
            b.iter(|| {
                let opts = IndexOptions::new().with_sample_rate(rate);
                black_box(FmIndex::build(&reference, opts).unwrap());
            });
        });
    }
    group.finish();
}

/// Query latency (`rank`, `get_sa`, `locate`) across sample rates: sampling
/// trades SA memory for LF-walk steps on every unsampled `get_sa`/`locate`
/// call, so this is the benchmark that actually shows that cost.
fn bench_queries(c: &mut Criterion) {
    let reference = synthetic_reference(8192);
    let pattern = &reference[100..106];

    let mut rank_group = c.benchmark_group("rank_by_sample_rate");
    for &rate in &[1u32, 4, 16, 64] {
        let idx = FmIndex::build(&reference, IndexOptions::new().with_sample_rate(rate)).unwrap();
        rank_group.bench_with_input(BenchmarkId::from_parameter(rate), &idx, |b, idx| {
            b.iter(|| black_box(idx.rank(Symbol::A, idx.len()).unwrap()));
        });
    }
    rank_group.finish();

    let mut get_sa_group = c.benchmark_group("get_sa_by_sample_rate");
    for &rate in &[1u32, 4, 16, 64] {
        let idx = FmIndex::build(&reference, IndexOptions::new().with_sample_rate(rate)).unwrap();
        get_sa_group.bench_with_input(BenchmarkId::from_parameter(rate), &idx, |b, idx| {
            b.iter(|| {
                for row in (0..idx.len()).step_by(idx.len() / 32 + 1) {
                    black_box(idx.get_sa(row).unwrap());
                }
            });
        });
    }
    get_sa_group.finish();

    let mut locate_group = c.benchmark_group("locate_by_sample_rate");
    for &rate in &[1u32, 4, 16, 64] {
        let idx = FmIndex::build(&reference, IndexOptions::new().with_sample_rate(rate)).unwrap();
        locate_group.bench_with_input(BenchmarkId::from_parameter(rate), &idx, |b, idx| {
            b.iter(|| black_box(idx.locate(pattern).unwrap()));
        });
    }
    locate_group.finish();
}

criterion_group!(benches, bench_strategies, bench_sampling, bench_queries);
criterion_main!(benches);
