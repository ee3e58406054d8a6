//! Bucketed near-duplicate pair search over fingerprint sequences.
//!
//! Fingerprints are grouped by the top `keybits` bits of their rotated
//! value; only members of the same bucket are compared, and distances are
//! taken on the original, unrotated values. Buckets partition the index
//! space, so one call can never report the same pair twice.

use rayon::prelude::*;

use crate::config::SearchConfig;
use crate::distance::hamming_distance;
use crate::error::SearchError;

/// Widest key for which bucket partition uses a counting sort; wider keys
/// would need a counter table larger than 2^16 entries and fall back to
/// sorting.
const COUNTING_KEYBITS_MAX: u8 = 16;

/// Indices grouped into buckets as contiguous runs over one arena.
///
/// `indices[run]` holds the original positions of one bucket's members in
/// input order. Runs with fewer than two members are dropped at build time
/// since they cannot produce a pair.
struct BucketArena {
    indices: Vec<u32>,
    runs: Vec<std::ops::Range<usize>>,
}

/// Find all index pairs in `hashes` whose Hamming distance is at most
/// `cfg.max_bit_difference`.
///
/// Pairs are reported as `(i, j)` with `i < j`, each at most once per
/// call. With `cfg.keybits == 0` the result is exact; with a wider key the
/// result is a subset of the exact pair set (bucketing never invents a
/// pair, it can only miss one). An empty or single-element input yields an
/// empty result.
pub fn find_similar_pairs(
    hashes: &[u64],
    cfg: &SearchConfig,
) -> Result<Vec<(usize, usize)>, SearchError> {
    cfg.validate()?;
    if hashes.len() < 2 {
        return Ok(Vec::new());
    }

    let arena = partition(hashes, cfg);
    tracing::debug!(
        fingerprints = hashes.len(),
        buckets = arena.runs.len(),
        largest_bucket = arena.runs.iter().map(|r| r.len()).max().unwrap_or(0),
        keybits = cfg.keybits,
        rotate = cfg.rotate,
        "bucketed fingerprint sequence"
    );

    let threshold = u32::from(cfg.max_bit_difference);
    let pairs: Vec<(usize, usize)> = if cfg.use_parallel {
        // Buckets are disjoint, so each worker scans its own run into a
        // local vector; the per-bucket vectors are merged afterwards in
        // run order to keep the output identical to the serial path.
        arena
            .runs
            .par_iter()
            .map(|run| scan_bucket(hashes, &arena.indices[run.clone()], threshold))
            .collect::<Vec<_>>()
            .concat()
    } else {
        arena
            .runs
            .iter()
            .flat_map(|run| scan_bucket(hashes, &arena.indices[run.clone()], threshold))
            .collect()
    };

    Ok(pairs)
}

/// Bucket key for one fingerprint: the top `keybits` bits after rotation.
///
/// `rotate_left` is modular, so `rotate == 64` is the identity, matching
/// the accepted parameter range.
#[inline]
fn bucket_key(value: u64, keybits: u8, rotate: u8) -> u64 {
    debug_assert!(keybits >= 1);
    value.rotate_left(u32::from(rotate)) >> (64 - u32::from(keybits))
}

fn partition(hashes: &[u64], cfg: &SearchConfig) -> BucketArena {
    if cfg.keybits == 0 {
        // Single universal bucket: exhaustive comparison.
        return BucketArena {
            indices: (0..hashes.len() as u32).collect(),
            runs: vec![0..hashes.len()],
        };
    }
    if cfg.keybits <= COUNTING_KEYBITS_MAX {
        partition_counting(hashes, cfg)
    } else {
        partition_sorted(hashes, cfg)
    }
}

/// Counting-sort partition: one pass to count keys, a prefix sum to place
/// each run, one pass to scatter indices. No per-element heap allocation
/// and no comparison sort; relative input order survives within each run.
fn partition_counting(hashes: &[u64], cfg: &SearchConfig) -> BucketArena {
    let key_space = 1usize << cfg.keybits;
    let keys: Vec<usize> = hashes
        .iter()
        .map(|&h| bucket_key(h, cfg.keybits, cfg.rotate) as usize)
        .collect();

    let mut starts = vec![0u32; key_space + 1];
    for &key in &keys {
        starts[key + 1] += 1;
    }
    for slot in 1..starts.len() {
        starts[slot] += starts[slot - 1];
    }

    let mut cursor = starts.clone();
    let mut indices = vec![0u32; hashes.len()];
    for (position, &key) in keys.iter().enumerate() {
        indices[cursor[key] as usize] = position as u32;
        cursor[key] += 1;
    }

    let runs = (0..key_space)
        .filter_map(|key| {
            let run = starts[key] as usize..starts[key + 1] as usize;
            (run.len() >= 2).then_some(run)
        })
        .collect();

    BucketArena { indices, runs }
}

/// Sort-based partition for keys wider than the counting table: sort
/// `(key, index)` pairs and cut the sorted arena into equal-key runs.
/// Sorting by `(key, index)` keeps each run in input order.
fn partition_sorted(hashes: &[u64], cfg: &SearchConfig) -> BucketArena {
    let mut keyed: Vec<(u64, u32)> = hashes
        .iter()
        .enumerate()
        .map(|(position, &h)| (bucket_key(h, cfg.keybits, cfg.rotate), position as u32))
        .collect();
    keyed.sort_unstable();

    let indices: Vec<u32> = keyed.iter().map(|&(_, position)| position).collect();
    let mut runs = Vec::new();
    let mut start = 0usize;
    for position in 1..=keyed.len() {
        if position == keyed.len() || keyed[position].0 != keyed[start].0 {
            if position - start >= 2 {
                runs.push(start..position);
            }
            start = position;
        }
    }

    BucketArena { indices, runs }
}

/// Compare every unordered pair within one bucket on the original values.
fn scan_bucket(hashes: &[u64], members: &[u32], threshold: u32) -> Vec<(usize, usize)> {
    let mut pairs = Vec::new();
    for (offset, &i) in members.iter().enumerate() {
        let left = hashes[i as usize];
        for &j in &members[offset + 1..] {
            if hamming_distance(left, hashes[j as usize]) <= threshold {
                // Members are in ascending input order, so i < j holds.
                pairs.push((i as usize, j as usize));
            }
        }
    }
    pairs
}
