use thiserror::Error;

/// Errors produced while building a fingerprint.
///
/// Tokens themselves cannot fail: every [`crate::FeatureToken`] is either a
/// byte sequence or an already-computed hash, so the only invalid input is a
/// weight that carries no vote.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FingerprintError {
    #[error("feature weight must be positive (feature {index} has weight 0)")]
    ZeroWeight { index: usize },
}
