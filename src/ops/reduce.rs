//! Shape helpers for axis-wise operations
//!
//! Every axis-wise kernel views its input as `[outer, dim_size, inner]`: one
//! lane per (outer, inner) pair, `dim_size` elements apart by `inner`.

/// Split `shape` around `dim` into `(outer, dim_size, inner)`
///
/// ```
/// use seekr::ops::compute_reduce_strides;
/// assert_eq!(compute_reduce_strides(&[2, 3, 4], 1), (2, 3, 4));
/// assert_eq!(compute_reduce_strides(&[5], 0), (1, 5, 1));
/// ```
#[inline]
pub fn compute_reduce_strides(shape: &[usize], dim: usize) -> (usize, usize, usize) {
    let outer: usize = shape[..dim].iter().product();
    let inner: usize = shape[dim + 1..].iter().product();
    (outer, shape[dim], inner)
}

/// Output shape after collapsing `dim`
///
/// With `keepdim` the axis stays with size 1, otherwise it is removed.
pub fn reduce_dim_output_shape(shape: &[usize], dim: usize, keepdim: bool) -> Vec<usize> {
    if keepdim {
        shape
            .iter()
            .enumerate()
            .map(|(i, &s)| if i == dim { 1 } else { s })
            .collect()
    } else {
        shape
            .iter()
            .enumerate()
            .filter(|&(i, _)| i != dim)
            .map(|(_, &s)| s)
            .collect()
    }
}

/// Output shape after replacing the size of `dim` with `k`
pub fn replace_dim_shape(shape: &[usize], dim: usize, k: usize) -> Vec<usize> {
    let mut out = shape.to_vec();
    out[dim] = k;
    out
}
