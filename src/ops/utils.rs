use ndarray::ArrayView1;

/// Tolerance used when comparing sampled values against closed forms.
pub const EPS: f64 = 1e-9;

/// Smallest and largest finite value of `values`, skipping NaN and infinities.
/// Returns `None` when nothing finite is left.
pub fn finite_range(values: &ArrayView1<f64>) -> Option<(f64, f64)> {
    values
        .iter()
        .copied()
        .filter(|v| v.is_finite())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}

/// Number of NaN or infinite entries.
pub fn count_non_finite(values: &ArrayView1<f64>) -> usize {
    values.iter().filter(|v| !v.is_finite()).count()
}
