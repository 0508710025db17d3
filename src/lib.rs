pub mod cs;
pub mod error;

pub use cs::dynamic;
pub use cs::dynamic::kadane::{
    find, kadane, max_subarray, max_subarray_sum, try_max_subarray, GlobalTie, KadaneConfig,
    KadaneSum, LocalTie, MaxSubarrayFinder, Sequence, Subarray,
};
pub use error::{KadaneError, Result};
