pub mod kadane;

// Re-export dynamic programming algorithms with descriptive names
pub use kadane::{
    find as find_max_subarray, kadane, max_subarray, max_subarray_sum, try_max_subarray,
    MaxSubarrayFinder, Subarray,
};
