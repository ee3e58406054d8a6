//! Weighted majority-bit fingerprints over hashed features.
//!
//! Every feature hash votes on all 64 bit positions: `+weight` where the
//! hash has a 1, `-weight` where it has a 0. An output bit is set only when
//! its accumulated score is strictly positive, so an exact tie collapses to
//! 0 and an empty input yields the zero fingerprint.

use crate::error::FingerprintError;
use crate::feature::{FeatureToken, WeightedFeature};
use crate::fnv::fnv1a;

const HASH_BITS: usize = 64;

/// Incremental fingerprint accumulator.
///
/// Votes commute, so the order in which features are added never changes
/// the result, and adding a feature with weight `w` is identical to adding
/// it `w` times with weight 1. The builder holds no heap state and can be
/// reused by value; [`finish`](FingerprintBuilder::finish) does not consume
/// it.
#[derive(Debug, Clone)]
pub struct FingerprintBuilder {
    sums: [i64; HASH_BITS],
    features_seen: usize,
}

impl FingerprintBuilder {
    /// Start an empty accumulation.
    pub fn new() -> Self {
        Self {
            sums: [0; HASH_BITS],
            features_seen: 0,
        }
    }

    /// Add one feature hash with weight 1.
    pub fn add_hash(&mut self, hash: u64) {
        self.vote(hash, 1);
    }

    /// Add one feature hash with an explicit positive weight.
    pub fn add_weighted_hash(&mut self, hash: u64, weight: u32) -> Result<(), FingerprintError> {
        if weight == 0 {
            return Err(FingerprintError::ZeroWeight {
                index: self.features_seen,
            });
        }
        self.vote(hash, i64::from(weight));
        Ok(())
    }

    /// Hash and add a token with weight 1.
    pub fn add_token(&mut self, token: &FeatureToken) {
        self.vote(token.hash_value(), 1);
    }

    /// Add a weighted feature, hashing raw tokens as needed.
    pub fn add_feature(&mut self, feature: &WeightedFeature) -> Result<(), FingerprintError> {
        if feature.weight == 0 {
            return Err(FingerprintError::ZeroWeight {
                index: self.features_seen,
            });
        }
        self.vote(feature.token.hash_value(), i64::from(feature.weight));
        Ok(())
    }

    /// Number of features accumulated so far.
    pub fn len(&self) -> usize {
        self.features_seen
    }

    /// True when no feature has been added yet.
    pub fn is_empty(&self) -> bool {
        self.features_seen == 0
    }

    fn vote(&mut self, hash: u64, weight: i64) {
        for (bit, sum) in self.sums.iter_mut().enumerate() {
            if (hash >> bit) & 1 == 1 {
                *sum += weight;
            } else {
                *sum -= weight;
            }
        }
        self.features_seen += 1;
    }

    /// Collapse the per-bit scores into the 64-bit fingerprint.
    ///
    /// Bit `b` is set iff its score is strictly positive. A tied score
    /// (equal weight behind 1 and 0) produces a 0 bit; this tie-break is
    /// part of the interoperability contract and must not drift.
    pub fn finish(&self) -> u64 {
        let mut out = 0u64;
        for (bit, &sum) in self.sums.iter().enumerate() {
            if sum > 0 {
                out |= 1 << bit;
            }
        }
        out
    }
}

impl Default for FingerprintBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Fingerprint a sequence of feature hashes, one vote each.
pub fn fingerprint(hashes: impl IntoIterator<Item = u64>) -> u64 {
    let mut builder = FingerprintBuilder::new();
    for hash in hashes {
        builder.add_hash(hash);
    }
    builder.finish()
}

/// Fingerprint a sequence of `(hash, weight)` pairs.
///
/// Rejects the first zero weight it sees; nothing is returned from a
/// partially accumulated input.
pub fn weighted_fingerprint(
    pairs: impl IntoIterator<Item = (u64, u32)>,
) -> Result<u64, FingerprintError> {
    let mut builder = FingerprintBuilder::new();
    for (hash, weight) in pairs {
        builder.add_weighted_hash(hash, weight)?;
    }
    Ok(builder.finish())
}

/// Fingerprint a slice of weighted features.
pub fn fingerprint_features(features: &[WeightedFeature]) -> Result<u64, FingerprintError> {
    let mut builder = FingerprintBuilder::new();
    for feature in features {
        builder.add_feature(feature)?;
    }
    Ok(builder.finish())
}

/// Fingerprint raw tokens, FNV-1a-hashed, weight 1 per occurrence.
pub fn fingerprint_tokens<T: AsRef<[u8]>>(tokens: &[T]) -> u64 {
    fingerprint(tokens.iter().map(|token| fnv1a(token.as_ref())))
}
