use ndarray::{Array1, ArrayView1};
use num_traits::Float;

use crate::error::{Result, WaveError};

/// Builds `n` evenly spaced points from `lower` to `upper`, both included.
///
/// `lower > upper` yields a descending domain and `lower == upper` a constant
/// one. The last point is pinned to `upper` so the endpoint survives rounding.
pub fn domain<A: Float>(n: usize, lower: A, upper: A) -> Result<Array1<A>> {
    if n == 0 {
        return Err(WaveError::EmptyDomain(n));
    }
    let mut xs = Array1::linspace(lower, upper, n);
    if n > 1 {
        xs[n - 1] = upper;
    }
    Ok(xs)
}

/// Samples a scalar function over `domain(n, lower, upper)`.
///
/// Values the function cannot represent (poles, logarithms of non-positive
/// numbers) come back as NaN or infinities.
pub fn sample<A, F>(f: F, n: usize, lower: A, upper: A) -> Result<Array1<A>>
where
    A: Float,
    F: FnMut(A) -> A,
{
    Ok(domain(n, lower, upper)?.mapv_into(f))
}

/// Samples an array transform over `domain(n, lower, upper)`.
///
/// The transform sees the whole domain at once and must return one value per
/// point; stochastic functions use this to draw a single noise vector.
pub fn sample_with<A, F>(transform: F, n: usize, lower: A, upper: A) -> Result<Array1<A>>
where
    A: Float,
    F: FnOnce(ArrayView1<A>) -> Array1<A>,
{
    let xs = domain(n, lower, upper)?;
    let ys = transform(xs.view());
    debug_assert_eq!(ys.len(), xs.len());
    Ok(ys)
}
