//! # Simpair Fingerprinting
//!
//! This crate turns weighted feature multisets into 64-bit simhash
//! fingerprints (Charikar, 2002). Similar feature sets tend to produce
//! fingerprints with a small Hamming distance, which is what makes the
//! downstream pair search (`simpair_search`) cheap.
//!
//! ## Core Responsibilities
//!
//! - **Feature Hashing**: Maps opaque token bytes to 64-bit integers with
//!   FNV-1a ([`fnv1a`]). Callers that already hash features upstream can
//!   supply the hash directly instead.
//! - **Fingerprinting**: Accumulates a signed per-bit score across all
//!   feature hashes — each hash votes `+weight` on its set bits and
//!   `-weight` on its clear bits — and collapses the scores into a single
//!   64-bit value ([`FingerprintBuilder`]).
//!
//! ## Key Concepts
//!
//! Features are modeled by [`FeatureToken`], a tagged value that is either
//! raw token bytes or a precomputed 64-bit hash, optionally paired with a
//! positive weight as a [`WeightedFeature`]. A weight of `w` is exactly
//! equivalent to repeating the feature `w` times, and feature order never
//! affects the result.
//!
//! The per-bit vote is collapsed with a strict rule: an output bit is 1 only
//! when its score is strictly positive, so an exact tie yields 0. This
//! tie-break is part of the public contract — fingerprints computed here are
//! bit-for-bit comparable with any other implementation of the same rule.
//!
//! ## Example Usage
//!
//! ```
//! use simpair_fingerprint::{fingerprint_tokens, fnv1a};
//!
//! let tokens = ["the", "quick", "brown", "fox"];
//! let fp = fingerprint_tokens(&tokens);
//! assert_eq!(fp, fingerprint_tokens(&["fox", "brown", "quick", "the"]));
//! assert_eq!(fnv1a(b""), simpair_fingerprint::FNV_OFFSET_BASIS);
//! ```

pub mod error;
pub mod feature;
pub mod fingerprint;
pub mod fnv;

pub use error::FingerprintError;
pub use feature::{FeatureToken, WeightedFeature};
pub use fingerprint::{
    fingerprint, fingerprint_features, fingerprint_tokens, weighted_fingerprint,
    FingerprintBuilder,
};
pub use fnv::{fnv1a, FNV_OFFSET_BASIS, FNV_PRIME};
