//! Kärkkäinen-Sanders (DC3 / skew) linear-time suffix-array construction.
//!
//! Splits positions into the two-thirds `S12 = { i : i mod 3 != 0 }`, radix
//! sorts `S12` by length-3 tuples (recursing on a compacted integer string
//! when names collide), derives `S0` from the recursive order, then merges
//! `S0` and `S12` with the standard `leq2`/`leq3` comparators.

/// Build the suffix array of `text` via DC3.
///
/// `text` holds positive integer codes (see
/// [`crate::alphabet::Symbol::dc3_code`]); `0` is reserved for the padding
/// this function appends internally and must not appear in `text`.
pub fn build(text: &[u32]) -> Vec<u32> {
    let k = text.iter().copied().max().unwrap_or(0);
    dc3(text, k)
}

fn leq2(a1: u32, a2: u32, b1: u32, b2: u32) -> bool {
    a1 < b1 || (a1 == b1 && a2 <= b2)
}

fn leq3(a1: u32, a2: u32, a3: u32, b1: u32, b2: u32, b3: u32) -> bool {
    a1 < b1 || (a1 == b1 && leq2(a2, a3, b2, b3))
}

/// Stable counting sort of index array `a` (indices into `r`) by key `r[a[i]]`,
/// with keys ranging over `0..=k`.
fn radix_pass(a: &[u32], r: &[u32], k: u32) -> Vec<u32> {
    let mut count = vec![0u32; k as usize + 1];
    for &ai in a {
        count[r[ai as usize] as usize] += 1;
    }
    let mut sum = 0u32;
    for c in count.iter_mut() {
        let t = *c;
        *c = sum;
        sum += t;
    }
    let mut out = vec![0u32; a.len()];
    for &ai in a {
        let key = r[ai as usize] as usize;
        out[count[key] as usize] = ai;
        count[key] += 1;
    }
    out
}

/// Recursive DC3 core. `s_in` holds `n` positive codes (no trailing padding);
/// this function appends the three zero sentinels DC3 requires before
/// indexing three symbols ahead of the last real position.
fn dc3(s_in: &[u32], k: u32) -> Vec<u32> {
    let n = s_in.len();
    if n == 0 {
        return Vec::new();
    }
    if n == 1 {
        return vec![0];
    }

    let mut s = Vec::with_capacity(n + 3);
    s.extend_from_slice(s_in);
    s.extend([0, 0, 0]);

    let n0 = (n + 2) / 3;
    let n1 = (n + 1) / 3;
    let n2 = n / 3;
    let n02 = n0 + n2;

    // S12 = positions i < n + n0 - n1 with i mod 3 != 0, in increasing order.
    let limit = n + n0 - n1;
    let mut s12_positions: Vec<u32> = Vec::with_capacity(n02);
    for i in 0..limit {
        if i % 3 != 0 {
            s12_positions.push(i as u32);
        }
    }
    debug_assert_eq!(s12_positions.len(), n02);

    // Three LSD radix passes over (s[i], s[i+1], s[i+2]): third symbol first.
    let pass1 = radix_pass(&s12_positions, &s[2..], k);
    let pass2 = radix_pass(&pass1, &s[1..], k);
    let sorted_by_triple = radix_pass(&pass2, &s, k);

    // Assign lexicographic names to the sorted triples; domain index for
    // position p (p mod 3 == 1) is p/3, for p mod 3 == 2 it is p/3 + n0.
    let mut domain_rank = vec![0u32; n02 + 3];
    let mut name = 0u32;
    let mut prev_triple: Option<(u32, u32, u32)> = None;
    for &p in &sorted_by_triple {
        let p = p as usize;
        let triple = (s[p], s.get(p + 1).copied().unwrap_or(0), s.get(p + 2).copied().unwrap_or(0));
        if prev_triple != Some(triple) {
            name += 1;
            prev_triple = Some(triple);
        }
        if p % 3 == 1 {
            domain_rank[p / 3] = name;
        } else {
            domain_rank[p / 3 + n0] = name;
        }
    }

    let domain_order: Vec<u32> = if (name as usize) < n02 {
        // Names collide: recurse on the compacted rank string.
        let recursive_order = dc3(&domain_rank[..n02], name);
        for (rank, &domain_idx) in recursive_order.iter().enumerate() {
            domain_rank[domain_idx as usize] = rank as u32 + 1;
        }
        recursive_order
    } else {
        // Names already unique: invert the rank assignment directly.
        let mut order = vec![0u32; n02];
        for (domain_idx, &rank) in domain_rank[..n02].iter().enumerate() {
            order[rank as usize - 1] = domain_idx as u32;
        }
        order
    };

    // S0 = positions i mod 3 == 0, sorted using the resolved S12 ranks.
    let mut s0_positions: Vec<u32> = Vec::with_capacity(n0);
    for &domain_idx in &domain_order {
        if (domain_idx as usize) < n0 {
            s0_positions.push(3 * domain_idx);
        }
    }
    let sorted_s0 = radix_pass(&s0_positions, &s, k);

    merge(
        &s,
        n,
        n0,
        n1,
        &domain_order,
        &domain_rank,
        &sorted_s0,
    )
}

#[allow(clippy::too_many_arguments)]
fn merge(
    s: &[u32],
    n: usize,
    n0: usize,
    n1: usize,
    domain_order: &[u32],
    domain_rank: &[u32],
    sorted_s0: &[u32],
) -> Vec<u32> {
    let n02 = domain_order.len();
    let mut sa = vec![0u32; n];

    let real_pos = |domain_idx: u32| -> usize {
        let domain_idx = domain_idx as usize;
        if domain_idx < n0 {
            domain_idx * 3 + 1
        } else {
            (domain_idx - n0) * 3 + 2
        }
    };

    // S12 reserves n0 domain slots for the i%3==1 group even though only n1
    // of them are real positions (n0 - n1 is 0 or 1); the reserved-but-unreal
    // slot holds an all-padding suffix that sorts first and must be skipped.
    let mut t = n0 - n1;
    let mut p = 0usize; // cursor into sorted_s0
    let mut k = 0usize; // cursor into sa

    while k < n {
        let i = real_pos(domain_order[t]);
        let j = sorted_s0[p] as usize;

        let take_s12 = if (domain_order[t] as usize) < n0 {
            leq2(
                s[i],
                domain_rank[domain_order[t] as usize + n0],
                s[j],
                domain_rank[j / 3],
            )
        } else {
            leq3(
                s[i],
                s[i + 1],
                domain_rank[domain_order[t] as usize - n0 + 1],
                s[j],
                s[j + 1],
                domain_rank[j / 3 + n0],
            )
        };

        if take_s12 {
            sa[k] = i as u32;
            t += 1;
            if t == n02 {
                k += 1;
                while p < n0 {
                    sa[k] = sorted_s0[p];
                    p += 1;
                    k += 1;
                }
                break;
            }
        } else {
            sa[k] = j as u32;
            p += 1;
            if p == n0 {
                k += 1;
                while t < n02 {
                    sa[k] = real_pos(domain_order[t]) as u32;
                    t += 1;
                    k += 1;
                }
                break;
            }
        }
        k += 1;
    }

    sa
}
