//! Feature tokens accepted by the fingerprinting stage.

use serde::{Deserialize, Serialize};

use crate::fnv::fnv1a;

/// A single feature: raw token bytes hashed on demand, or a 64-bit hash
/// precomputed by the caller.
///
/// Upstream feature extraction is free to hand either form to the builder;
/// both contribute one 64-bit vote per unit of weight.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FeatureToken {
    /// Opaque token bytes, hashed with FNV-1a when fingerprinted.
    Raw(Vec<u8>),
    /// A feature hash computed upstream (any 64-bit hash the caller trusts).
    Precomputed(u64),
}

impl FeatureToken {
    /// The 64-bit hash this token contributes to the fingerprint vote.
    pub fn hash_value(&self) -> u64 {
        match self {
            FeatureToken::Raw(bytes) => fnv1a(bytes),
            FeatureToken::Precomputed(hash) => *hash,
        }
    }

    /// Pair this token with an explicit positive weight.
    pub fn with_weight(self, weight: u32) -> WeightedFeature {
        WeightedFeature {
            token: self,
            weight,
        }
    }
}

impl From<&str> for FeatureToken {
    fn from(value: &str) -> Self {
        FeatureToken::Raw(value.as_bytes().to_vec())
    }
}

impl From<String> for FeatureToken {
    fn from(value: String) -> Self {
        FeatureToken::Raw(value.into_bytes())
    }
}

impl From<&[u8]> for FeatureToken {
    fn from(value: &[u8]) -> Self {
        FeatureToken::Raw(value.to_vec())
    }
}

impl From<Vec<u8>> for FeatureToken {
    fn from(value: Vec<u8>) -> Self {
        FeatureToken::Raw(value)
    }
}

impl From<u64> for FeatureToken {
    fn from(value: u64) -> Self {
        FeatureToken::Precomputed(value)
    }
}

/// A feature together with its voting weight.
///
/// Weight `w` is exactly equivalent to repeating the same feature `w`
/// times. Unweighted call paths use weight 1 per occurrence.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WeightedFeature {
    /// The feature token.
    pub token: FeatureToken,
    /// Positive vote weight; 0 is rejected at fingerprint time.
    pub weight: u32,
}

impl WeightedFeature {
    /// Wrap a token with the implicit unweighted weight of 1.
    pub fn unweighted(token: impl Into<FeatureToken>) -> Self {
        WeightedFeature {
            token: token.into(),
            weight: 1,
        }
    }
}

impl<T: Into<FeatureToken>> From<(T, u32)> for WeightedFeature {
    fn from(value: (T, u32)) -> Self {
        WeightedFeature {
            token: value.0.into(),
            weight: value.1,
        }
    }
}
