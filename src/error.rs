use thiserror::Error;

/// Errors reported by the checked maximum-subarray entry points.
///
/// The unchecked scan is total over a well-formed sequence and never produces
/// these; they only surface from [`try_max_subarray`](crate::try_max_subarray)
/// and [`MaxSubarrayFinder::find_checked`](crate::MaxSubarrayFinder::find_checked).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KadaneError {
    /// The sequence reported `len` elements but had nothing at `index`.
    #[error("sequence reported length {len} but has no element at index {index}")]
    SequenceTooShort { index: usize, len: usize },

    /// `identity + element` is not equal to the element itself.
    #[error("additive identity does not preserve the element at index {index}")]
    IdentityViolation { index: usize },

    /// A value could not be ordered against the value it is compared with.
    #[error("value at index {index} is not comparable (unordered sum)")]
    Incomparable { index: usize },
}

pub type Result<T> = std::result::Result<T, KadaneError>;
