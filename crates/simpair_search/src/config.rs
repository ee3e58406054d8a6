//! Search configuration.

use serde::{Deserialize, Serialize};

use crate::error::SearchError;

/// Configuration for a single near-duplicate pair search.
///
/// `SearchConfig` is cheap to copy and serde-friendly so it can be embedded
/// in higher-level configs or loaded from a config file.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchConfig {
    /// Number of leading bits of the rotated fingerprint used as the bucket
    /// key. 0 places every fingerprint in a single bucket: exhaustive,
    /// exact, and quadratic.
    #[serde(default = "SearchConfig::default_keybits")]
    pub keybits: u8,
    /// Inclusive Hamming-distance threshold for a pair to be reported.
    #[serde(default = "SearchConfig::default_max_bit_difference")]
    pub max_bit_difference: u8,
    /// Circular left shift applied to each fingerprint before its bucket
    /// key is taken. Distances are always computed on the unrotated
    /// values, so sweeping `rotate` across repeated searches varies which
    /// bits form the key without changing which pairs qualify.
    #[serde(default)]
    pub rotate: u8,
    /// Scan buckets on rayon workers. Output is identical either way.
    #[serde(default)]
    pub use_parallel: bool,
}

impl SearchConfig {
    pub(crate) fn default_keybits() -> u8 {
        16
    }

    pub(crate) fn default_max_bit_difference() -> u8 {
        3
    }

    /// Exhaustive configuration: no bucketing, every pair compared.
    pub fn exhaustive(max_bit_difference: u8) -> Self {
        Self {
            keybits: 0,
            max_bit_difference,
            rotate: 0,
            use_parallel: false,
        }
    }

    /// Validate parameter ranges.
    ///
    /// `keybits` is additionally capped at `64 / max_bit_difference`: with
    /// a wider key, a single differing bit is too likely to land inside
    /// the key window and split a true pair across buckets. The cap is a
    /// sizing heuristic inherited from the reference implementation, not a
    /// completeness bound — every `keybits > 0` search remains
    /// recall-limited regardless of this check.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.max_bit_difference > 64 {
            return Err(SearchError::MaxBitDifferenceOutOfRange {
                max_bit_difference: self.max_bit_difference,
            });
        }
        if self.rotate > 64 {
            return Err(SearchError::RotateOutOfRange {
                rotate: self.rotate,
            });
        }
        if self.keybits > 64 {
            return Err(SearchError::KeybitsOutOfRange {
                keybits: self.keybits,
            });
        }
        if self.max_bit_difference > 0
            && u32::from(self.keybits) > 64 / u32::from(self.max_bit_difference)
        {
            return Err(SearchError::KeybitsTooLargeForThreshold {
                keybits: self.keybits,
                max_bit_difference: self.max_bit_difference,
            });
        }
        Ok(())
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            keybits: Self::default_keybits(),
            max_bit_difference: Self::default_max_bit_difference(),
            rotate: 0,
            use_parallel: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let cfg = SearchConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.keybits, 16);
        assert_eq!(cfg.max_bit_difference, 3);
        assert_eq!(cfg.rotate, 0);
        assert!(!cfg.use_parallel);
    }

    #[test]
    fn exhaustive_config_is_valid_at_any_threshold() {
        for threshold in [0, 1, 3, 64] {
            assert!(SearchConfig::exhaustive(threshold).validate().is_ok());
        }
    }

    #[test]
    fn threshold_above_64_rejected() {
        let cfg = SearchConfig {
            max_bit_difference: 65,
            ..SearchConfig::default()
        };
        assert_eq!(
            cfg.validate(),
            Err(SearchError::MaxBitDifferenceOutOfRange {
                max_bit_difference: 65
            })
        );
    }

    #[test]
    fn rotate_above_64_rejected() {
        let cfg = SearchConfig {
            rotate: 65,
            ..SearchConfig::default()
        };
        assert_eq!(cfg.validate(), Err(SearchError::RotateOutOfRange { rotate: 65 }));
    }

    #[test]
    fn keybits_above_64_rejected() {
        let cfg = SearchConfig {
            keybits: 65,
            max_bit_difference: 0,
            ..SearchConfig::default()
        };
        assert_eq!(
            cfg.validate(),
            Err(SearchError::KeybitsOutOfRange { keybits: 65 })
        );
    }

    #[test]
    fn keybits_capped_by_threshold() {
        // 64 / 3 = 21, so 21 passes and 22 fails.
        let ok = SearchConfig {
            keybits: 21,
            ..SearchConfig::default()
        };
        assert!(ok.validate().is_ok());

        let too_wide = SearchConfig {
            keybits: 22,
            ..SearchConfig::default()
        };
        assert_eq!(
            too_wide.validate(),
            Err(SearchError::KeybitsTooLargeForThreshold {
                keybits: 22,
                max_bit_difference: 3
            })
        );
    }

    #[test]
    fn zero_threshold_lifts_the_cap() {
        // Exact-match grouping may use the full key width.
        let cfg = SearchConfig {
            keybits: 64,
            max_bit_difference: 0,
            ..SearchConfig::default()
        };
        assert!(cfg.validate().is_ok());
    }

}
