use thiserror::Error;

pub type Result<T> = std::result::Result<T, BigVecError>;

/// Errors surfaced by the vector generators and the radix converter.
///
/// Every variant describes a caller mistake; nothing here is transient, so no operation retries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BigVecError {
    #[error("invalid radix {radix} (expected 2..=36)")]
    InvalidRadix { radix: u32 },

    #[error("stream mask list is empty")]
    EmptyMasks,

    #[error("sequence never reaches its bound: lo={lo} hi={hi} step={step}")]
    NonAdvancingSequence { lo: i128, hi: i128, step: i128 },

    #[error("empty digit string")]
    EmptyDigits,

    #[error("invalid digit {ch:?} at index {index} for radix {radix}")]
    InvalidDigit { ch: char, index: usize, radix: u32 },

    #[error("oracle mismatch in radix {radix}: expected {expected}, got {actual}")]
    OracleMismatch {
        radix: u32,
        expected: String,
        actual: String,
    },
}
