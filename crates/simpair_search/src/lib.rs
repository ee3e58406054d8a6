//! # Simpair Search (`simpair_search`)
//!
//! ## Purpose
//!
//! `simpair_search` sits downstream of `simpair_fingerprint`. Given an
//! ordered sequence of 64-bit fingerprints, it reports every index pair
//! whose Hamming distance is within a configured threshold, using
//! bit-prefix bucketing to stay far below the brute-force O(n²) comparison
//! count on realistic collections.
//!
//! ## Core Types
//!
//! - [`hamming_distance`]: XOR + popcount distance between two
//!   fingerprints.
//! - [`SearchConfig`]: per-search tuning knobs — `keybits`,
//!   `max_bit_difference`, `rotate`, and the runtime `use_parallel` switch.
//! - [`find_similar_pairs`]: the bucketed pair scan itself.
//!
//! ## Recall
//!
//! Bucketing is a locality-sensitive heuristic. Two fingerprints that
//! differ only outside the key window share a bucket and are compared; a
//! difference inside the window can split a true pair across buckets, so
//! any `keybits > 0` search may miss pairs. Only `keybits == 0`
//! (exhaustive comparison) is complete. Callers that sweep `rotate` across
//! repeated searches to recover recall own the cross-call deduplication of
//! the pairs they collect.

pub mod config;
pub mod distance;
pub mod error;
pub mod pairs;

pub use config::SearchConfig;
pub use distance::hamming_distance;
pub use error::SearchError;
pub use pairs::find_similar_pairs;
