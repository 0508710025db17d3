//! Kadane's algorithm for the maximum subarray sum problem.
//!
//! The scan works over any [`Sequence`] of elements and accumulates in any
//! [`KadaneSum`] type, reporting both the best sum and the half-open range
//! `[start, end)` that produces it.
//!
//! Ties are resolved deterministically. By default a running range keeps
//! growing when extending it is no worse than restarting, and the first
//! maximal range found wins over later ranges with the same sum. See
//! [`KadaneConfig`] for the alternatives.

mod config;
mod finder;
mod sequence;
mod subarray;
mod sum;


pub use config::{GlobalTie, KadaneConfig, LocalTie};
pub use finder::{find, max_subarray, max_subarray_sum, try_max_subarray, MaxSubarrayFinder};
pub use sequence::Sequence;
pub use subarray::Subarray;
pub use sum::KadaneSum;

/// Kadane's algorithm to find the maximum subarray sum in a slice of `i32`.
///
/// If the input slice is empty, returns `None`. Otherwise, returns `Some(<max sum>)`.
/// The sum is accumulated in `i32`, so callers with large inputs should prefer
/// [`max_subarray_sum`] with a wider sum type.
///
/// # Examples
///
/// ```
/// use kadane_mss::cs::dynamic::kadane;
///
/// let arr = [1, -2, 3, 5, -1];
/// let result = kadane(&arr);
/// assert_eq!(result, Some(8)); // The subarray [3, 5] has sum 8
/// ```
pub fn kadane(arr: &[i32]) -> Option<i32> {
    max_subarray::<i32, _>(arr).map(|best| best.sum)
}
