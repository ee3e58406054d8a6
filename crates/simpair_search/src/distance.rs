//! Hamming distance between 64-bit fingerprints.

/// Number of bit positions at which `a` and `b` differ.
///
/// XOR plus hardware popcount; always in `[0, 64]`. This is the innermost
/// operation of the pair scan and must stay branch-free.
#[inline]
pub fn hamming_distance(a: u64, b: u64) -> u32 {
    (a ^ b).count_ones()
}
