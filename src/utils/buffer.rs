use crate::float::Float;

pub fn new_real_buffer<T: Float>(size: usize) -> Vec<T> {
    vec![T::zero(); size]
}

/// Compute the sum of the square of each element of `arr`.
pub fn square_sum<T>(arr: &[T]) -> T
where
    T: Float,
{
    arr.iter().map(|&s| s * s).sum::<T>()
}

/// Root mean square of `arr`. An empty slice has no energy.
pub fn rms<T>(arr: &[T]) -> T
where
    T: Float,
{
    if arr.is_empty() {
        return T::zero();
    }
    let len = T::from_usize(arr.len()).unwrap_or_else(T::one);
    (square_sum(arr) / len).sqrt()
}

/// Arithmetic mean taken relative to the first value, so that a run of identical
/// values yields exactly that value.
pub fn consensus_mean<I>(values: I) -> Option<f64>
where
    I: IntoIterator<Item = f64>,
{
    let mut iter = values.into_iter();
    let first = iter.next()?;
    let (count, offset) = iter.fold((1usize, 0.0), |(n, acc), v| (n + 1, acc + (v - first)));
    Some(first + offset / count as f64)
}

/// Index of the first NaN or infinite value in `arr`, if any.
pub fn first_non_finite<T: Float>(arr: &[T]) -> Option<usize> {
    arr.iter().position(|s| !s.is_finite())
}
