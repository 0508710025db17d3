use std::cmp::Ordering;

use log::{debug, trace};

use super::{GlobalTie, KadaneConfig, KadaneSum, LocalTie, Sequence, Subarray};
use crate::error::{KadaneError, Result};

/// Linear-time maximum subarray search with configurable tie-breaking.
///
/// The finder holds no state besides its [`KadaneConfig`]; each call is an
/// independent pure scan, so one finder can be shared freely across threads.
///
/// # Examples
///
/// ```
/// use kadane_mss::{GlobalTie, KadaneConfig, MaxSubarrayFinder};
///
/// let data = [1, -1, 1];
///
/// let first = MaxSubarrayFinder::new();
/// let (sum, best) = first.find::<i32, _>(&data);
/// assert_eq!(sum, 1);
/// assert_eq!(best.unwrap().range(), 0..1);
///
/// let latest = MaxSubarrayFinder::with_config(
///     KadaneConfig::new().global_tie(GlobalTie::TakeLatest),
/// );
/// let best = latest.max_subarray::<i32, _>(&data).unwrap();
/// assert_eq!(best.range(), 0..3);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MaxSubarrayFinder {
    config: KadaneConfig,
}

impl MaxSubarrayFinder {
    /// A finder with the default tie-breaking policy.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: KadaneConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> KadaneConfig {
        self.config
    }

    /// Returns the maximum subarray sum and, for non-empty input, the range
    /// achieving it.
    ///
    /// An empty sequence yields `(S::zero(), None)`.
    ///
    /// # Panics
    ///
    /// Panics if `seq` has no element at some index below its reported length.
    pub fn find<S, Q>(&self, seq: &Q) -> (S, Option<Subarray<S>>)
    where
        Q: Sequence + ?Sized,
        S: KadaneSum<Q::Element>,
    {
        match self.max_subarray::<S, Q>(seq) {
            Some(best) => (best.sum.clone(), Some(best)),
            None => (S::zero(), None),
        }
    }

    /// Returns the maximal range, or `None` for an empty sequence.
    ///
    /// # Panics
    ///
    /// Panics if `seq` has no element at some index below its reported length.
    pub fn max_subarray<S, Q>(&self, seq: &Q) -> Option<Subarray<S>>
    where
        Q: Sequence + ?Sized,
        S: KadaneSum<Q::Element>,
    {
        let len = seq.len();
        if len == 0 {
            return None;
        }

        let mut scan = Scan::new(self.config, S::from_element(element_at(seq, 0, len)));
        for i in 1..len {
            scan.step(i, element_at(seq, i, len));
        }

        Some(scan.finish(len))
    }

    /// Like [`max_subarray`](Self::max_subarray), but validates the input as
    /// it scans instead of trusting it.
    ///
    /// # Errors
    ///
    /// - [`KadaneError::SequenceTooShort`] if an index below `len()` is missing.
    /// - [`KadaneError::IdentityViolation`] if `zero + x` differs from `x` for
    ///   some element `x`.
    /// - [`KadaneError::Incomparable`] if two sums that must be compared are
    ///   unordered, as happens with floating-point NaN.
    pub fn find_checked<S, Q>(&self, seq: &Q) -> Result<Option<Subarray<S>>>
    where
        Q: Sequence + ?Sized,
        S: KadaneSum<Q::Element>,
    {
        let len = seq.len();
        if len == 0 {
            return Ok(None);
        }

        let first = checked_element(seq, 0, len)?;
        let mut scan = Scan::new(self.config, checked_alone::<S, _>(first, 0)?);
        for i in 1..len {
            let element = checked_element(seq, i, len)?;
            checked_alone::<S, _>(element, i)?;
            if !scan.step(i, element) {
                return Err(KadaneError::Incomparable { index: i });
            }
        }

        Ok(Some(scan.finish(len)))
    }
}

/// Running state of one scan: the best range ending at the current index and
/// the best range seen so far.
struct Scan<S> {
    config: KadaneConfig,
    local: Subarray<S>,
    global: Subarray<S>,
}

impl<S: Clone + PartialOrd + num_traits::Zero> Scan<S> {
    fn new(config: KadaneConfig, first: S) -> Self {
        let local = Subarray::single(0, first);
        Self {
            config,
            global: local.clone(),
            local,
        }
    }

    /// Advances the scan over the element at `index`.
    ///
    /// Returns `false` if either comparison was between unordered values; the
    /// state is still updated as though the comparison came out "not less".
    fn step<E>(&mut self, index: usize, element: &E) -> bool
    where
        S: KadaneSum<E>,
    {
        let extended = std::mem::replace(&mut self.local.sum, S::zero()).add_element(element);
        let alone = S::from_element(element);

        let local_order = extended.partial_cmp(&alone);
        let restart = match self.config.local_tie {
            LocalTie::Extend => local_order == Some(Ordering::Less),
            LocalTie::Restart => local_order != Some(Ordering::Greater),
        };
        if restart {
            trace!("kadane: restarting range at index {index}");
            self.local = Subarray::single(index, alone);
        } else {
            self.local.end = index + 1;
            self.local.sum = extended;
        }

        let global_order = self.global.sum.partial_cmp(&self.local.sum);
        let replace = match self.config.global_tie {
            GlobalTie::KeepFirst => global_order == Some(Ordering::Less),
            GlobalTie::TakeLatest => {
                matches!(global_order, Some(Ordering::Less | Ordering::Equal))
            }
        };
        if replace {
            trace!(
                "kadane: new best range {}..{}",
                self.local.start,
                self.local.end
            );
            self.global = self.local.clone();
        }

        local_order.is_some() && global_order.is_some()
    }

    fn finish(self, len: usize) -> Subarray<S> {
        debug!(
            "kadane: scanned {len} elements, best range {}..{}",
            self.global.start, self.global.end
        );
        self.global
    }
}

fn element_at<Q: Sequence + ?Sized>(seq: &Q, index: usize, len: usize) -> &Q::Element {
    match seq.get(index) {
        Some(element) => element,
        None => panic!("sequence reported length {len} but has no element at index {index}"),
    }
}

fn checked_element<Q: Sequence + ?Sized>(
    seq: &Q,
    index: usize,
    len: usize,
) -> Result<&Q::Element> {
    seq.get(index)
        .ok_or(KadaneError::SequenceTooShort { index, len })
}

/// `zero + element`, verified to compare equal to `zero + (zero + element)`.
fn checked_alone<S: KadaneSum<E>, E>(element: &E, index: usize) -> Result<S> {
    let alone = S::from_element(element);
    match (S::zero() + alone.clone()).partial_cmp(&alone) {
        Some(Ordering::Equal) => Ok(alone),
        Some(_) => Err(KadaneError::IdentityViolation { index }),
        None => Err(KadaneError::Incomparable { index }),
    }
}

/// Returns the maximum subarray sum and the range achieving it, using the
/// default tie-breaking policy.
///
/// An empty sequence yields `(S::zero(), None)`.
///
/// # Panics
///
/// Panics if `seq` has no element at some index below its reported length.
///
/// # Examples
///
/// ```
/// use kadane_mss::find;
///
/// let (sum, best) = find::<i64, _>(&[2, -2, 3]);
/// assert_eq!(sum, 3);
/// assert_eq!(best.map(|b| b.range()), Some(0..3));
///
/// let (sum, best) = find::<i64, _>(&Vec::<i32>::new());
/// assert_eq!(sum, 0);
/// assert!(best.is_none());
/// ```
pub fn find<S, Q>(seq: &Q) -> (S, Option<Subarray<S>>)
where
    Q: Sequence + ?Sized,
    S: KadaneSum<Q::Element>,
{
    MaxSubarrayFinder::new().find(seq)
}

/// Returns the maximal contiguous range of `seq`, or `None` if it is empty.
///
/// # Panics
///
/// Panics if `seq` has no element at some index below its reported length.
///
/// # Examples
///
/// ```
/// use kadane_mss::max_subarray;
///
/// let best = max_subarray::<i32, _>(&[-3, -1, -7, -2]).unwrap();
/// assert_eq!((best.start, best.end, best.sum), (1, 2, -1));
/// ```
pub fn max_subarray<S, Q>(seq: &Q) -> Option<Subarray<S>>
where
    Q: Sequence + ?Sized,
    S: KadaneSum<Q::Element>,
{
    MaxSubarrayFinder::new().max_subarray(seq)
}

/// Returns only the maximum subarray sum; `S::zero()` for an empty sequence.
///
/// # Panics
///
/// Panics if `seq` has no element at some index below its reported length.
///
/// # Examples
///
/// ```
/// use kadane_mss::max_subarray_sum;
///
/// let total: i64 = max_subarray_sum(&[i32::MAX, i32::MAX]);
/// assert_eq!(total, 2 * i32::MAX as i64);
/// ```
pub fn max_subarray_sum<S, Q>(seq: &Q) -> S
where
    Q: Sequence + ?Sized,
    S: KadaneSum<Q::Element>,
{
    find(seq).0
}

/// Checked form of [`max_subarray`], see [`MaxSubarrayFinder::find_checked`].
///
/// # Examples
///
/// ```
/// use kadane_mss::{try_max_subarray, KadaneError};
///
/// let ok = try_max_subarray::<f64, _>(&[1.0, -0.5, 2.0]).unwrap();
/// assert_eq!(ok.unwrap().sum, 2.5);
///
/// let err = try_max_subarray::<f64, _>(&[1.0, f64::NAN]).unwrap_err();
/// assert_eq!(err, KadaneError::Incomparable { index: 1 });
/// ```
pub fn try_max_subarray<S, Q>(seq: &Q) -> Result<Option<Subarray<S>>>
where
    Q: Sequence + ?Sized,
    S: KadaneSum<Q::Element>,
{
    MaxSubarrayFinder::new().find_checked(seq)
}
