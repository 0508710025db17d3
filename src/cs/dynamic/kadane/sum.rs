use num_traits::Zero;

/// Accumulator type for a maximum subarray scan over elements of type `E`.
///
/// A sum type must provide:
/// - an additive identity ([`Zero::zero`]) such that `zero + a` is neither
///   less nor greater than `a`,
/// - addition with another sum (from [`Zero`]'s `Add` bound),
/// - addition with an element, through `From<E>`,
/// - an order where equality means neither value is `<` the other.
///
/// Every `S: Clone + PartialOrd + Zero + From<E>` is a `KadaneSum<E>`, so an
/// `i32` sequence can be summed in `i32`, `i64` or `f64`, and an `i64`
/// sequence in `num_bigint::BigInt`.
pub trait KadaneSum<E>: Clone + PartialOrd + Zero {
    /// `self + element`.
    fn add_element(self, element: &E) -> Self;

    /// `identity + element`, the sum of a range holding `element` alone.
    fn from_element(element: &E) -> Self {
        Self::zero().add_element(element)
    }
}

impl<E, S> KadaneSum<E> for S
where
    E: Clone,
    S: Clone + PartialOrd + Zero + From<E>,
{
    #[inline]
    fn add_element(self, element: &E) -> Self {
        self + S::from(element.clone())
    }
}
