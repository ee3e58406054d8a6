use thiserror::Error;

/// Parameter validation failures for the pair search.
///
/// Validation happens before any computation; a failed search never leaves
/// partial results behind.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error("max_bit_difference must be <= 64 (got {max_bit_difference})")]
    MaxBitDifferenceOutOfRange { max_bit_difference: u8 },

    #[error("rotate must be <= 64 (got {rotate})")]
    RotateOutOfRange { rotate: u8 },

    #[error("keybits must be <= 64 (got {keybits})")]
    KeybitsOutOfRange { keybits: u8 },

    #[error(
        "keybits {keybits} exceeds 64 / max_bit_difference ({max_bit_difference}); \
         keys this wide lose too much recall"
    )]
    KeybitsTooLargeForThreshold { keybits: u8, max_bit_difference: u8 },
}
