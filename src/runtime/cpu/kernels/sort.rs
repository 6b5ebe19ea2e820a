//! Ordering kernels

use crate::dtype::Element;
use std::cmp::Ordering;

/// Total order used by every ordering kernel
///
/// NaN compares greater than every other value and equal to another NaN.
#[inline]
pub fn total_cmp<T: Element>(a: &T, b: &T) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => a.partial_cmp(b).unwrap_or(Ordering::Equal),
    }
}

/// [`total_cmp`], reversed when `descending`
#[inline]
pub fn directed_cmp<T: Element>(a: &T, b: &T, descending: bool) -> Ordering {
    let ord = total_cmp(a, b);
    if descending { ord.reverse() } else { ord }
}

/// Collect one lane as `(value, position)` pairs
///
/// # Safety
/// `src.add(base + i * stride)` must be readable for every `i < len`.
#[inline]
pub unsafe fn gather_lane<T: Element>(
    src: *const T,
    base: usize,
    len: usize,
    stride: usize,
) -> Vec<(T, i64)> {
    (0..len)
        .map(|i| (*src.add(base + i * stride), i as i64))
        .collect()
}

/// Sort one lane, writing sorted values and/or source positions.
///
/// # Arguments
/// * `src` - Input data pointer
/// * `out_values` - Output values, or null to skip
/// * `out_indices` - Output I64 positions, or null to skip
/// * `base` - Offset of the lane's first element (same in input and outputs)
/// * `len` - Number of elements along the sort axis
/// * `stride` - Distance between consecutive lane elements
///
/// `stable` keeps equal elements in source order (merge sort); otherwise a
/// pattern-defeating quicksort is used, which is deterministic for a given
/// input.
///
/// # Safety
/// - `src` must be readable at `base + i * stride` for `i < len`
/// - non-null outputs must be writable at the same offsets
/// - no other thread may write the same offsets concurrently
#[allow(clippy::too_many_arguments)]
pub unsafe fn sort_lane<T: Element>(
    src: *const T,
    out_values: *mut T,
    out_indices: *mut i64,
    base: usize,
    len: usize,
    stride: usize,
    descending: bool,
    stable: bool,
) {
    let mut pairs = gather_lane(src, base, len, stride);

    let cmp = |a: &(T, i64), b: &(T, i64)| directed_cmp(&a.0, &b.0, descending);
    if stable {
        pairs.sort_by(cmp);
    } else {
        pairs.sort_unstable_by(cmp);
    }

    for (i, (val, orig)) in pairs.into_iter().enumerate() {
        let off = base + i * stride;
        if !out_values.is_null() {
            *out_values.add(off) = val;
        }
        if !out_indices.is_null() {
            *out_indices.add(off) = orig;
        }
    }
}
