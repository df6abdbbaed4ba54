use std::ops::Sub;

use ndarray::{Array1, ArrayView1};

/// First difference with the first value prepended, so the output keeps the
/// input length.
///
/// `out[0] = v[0] - v[0]` (zero for finite input, NaN otherwise) and
/// `out[i] = v[i] - v[i - 1]`.
pub fn diffs<A>(values: &ArrayView1<A>) -> Array1<A>
where
    A: Copy + Sub<Output = A>,
{
    Array1::from_shape_fn(values.len(), |i| {
        let prev = if i == 0 { values[0] } else { values[i - 1] };
        values[i] - prev
    })
}
