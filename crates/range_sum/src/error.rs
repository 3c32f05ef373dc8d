use thiserror::Error;

/// Precondition violations reported by both range-sum structures.
///
/// None of these are retryable: the structure is left exactly as it was
/// before the rejected call.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
pub enum RangeSumError {
    #[error("size must be nonzero and allocatable")]
    InvalidSize,
    #[error("expected {expected} values, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
    #[error("range [{left}, {right}] is out of bounds for length {len}")]
    IndexOutOfRange {
        left: usize,
        right: usize,
        len: usize,
    },
}
