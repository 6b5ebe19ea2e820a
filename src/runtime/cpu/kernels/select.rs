//! Selection kernels: arg-extremum, top-k, k-th value and mode

use super::sort::{directed_cmp, gather_lane, total_cmp};
use crate::dtype::Element;
use std::cmp::Ordering;

/// Position of the extremum of one lane
///
/// The first occurrence wins. A NaN counts as the extremum in both directions,
/// so the first NaN is returned as soon as it is seen. `len` must be non-zero.
///
/// # Safety
/// `src` must be readable at `base + i * stride` for `i < len`.
pub unsafe fn argextreme_lane<T: Element>(
    src: *const T,
    base: usize,
    len: usize,
    stride: usize,
    largest: bool,
) -> usize {
    let mut best = *src.add(base);
    if best.is_nan() {
        return 0;
    }
    let mut best_idx = 0;

    for i in 1..len {
        let v = *src.add(base + i * stride);
        if v.is_nan() {
            return i;
        }
        let better = if largest { v > best } else { v < best };
        if better {
            best = v;
            best_idx = i;
        }
    }

    best_idx
}

/// Select the `k` largest (or smallest) elements of one lane.
///
/// Candidates are ordered by value, then by ascending position, so ties at the
/// selection boundary go to the lowest positions. With `sorted` the output is
/// in that order; otherwise it is in ascending position order.
///
/// # Arguments
/// * `in_base` / `out_base` - Lane offsets in the input and the `[.., k, ..]` outputs
/// * `stride` - Distance between consecutive lane elements (same for both)
/// * `k` - Elements to keep, `1..=len`
///
/// # Safety
/// - `src` must be readable at `in_base + i * stride` for `i < len`
/// - both outputs must be writable at `out_base + j * stride` for `j < k`
#[allow(clippy::too_many_arguments)]
pub unsafe fn topk_lane<T: Element>(
    src: *const T,
    out_values: *mut T,
    out_indices: *mut i64,
    in_base: usize,
    out_base: usize,
    len: usize,
    stride: usize,
    k: usize,
    largest: bool,
    sorted: bool,
) {
    let mut pairs = gather_lane(src, in_base, len, stride);
    let order = |a: &(T, i64), b: &(T, i64)| {
        directed_cmp(&a.0, &b.0, largest).then_with(|| a.1.cmp(&b.1))
    };

    if k < len {
        pairs.select_nth_unstable_by(k - 1, order);
        pairs.truncate(k);
    }
    if sorted {
        pairs.sort_unstable_by(order);
    } else {
        pairs.sort_unstable_by_key(|p| p.1);
    }

    for (j, (val, orig)) in pairs.into_iter().enumerate() {
        let off = out_base + j * stride;
        *out_values.add(off) = val;
        *out_indices.add(off) = orig;
    }
}

/// The `k`-th smallest element of one lane (1-indexed) and its position.
///
/// Introselect over `(value, position)` pairs; among equal values the lowest
/// position is reported. `k` must be in `1..=len`.
///
/// # Safety
/// `src` must be readable at `base + i * stride` for `i < len`.
pub unsafe fn kthvalue_lane<T: Element>(
    src: *const T,
    base: usize,
    len: usize,
    stride: usize,
    k: usize,
) -> (T, i64) {
    let mut pairs = gather_lane(src, base, len, stride);
    let (_, kth, _) = pairs.select_nth_unstable_by(k - 1, |a, b| {
        total_cmp(&a.0, &b.0).then_with(|| a.1.cmp(&b.1))
    });
    *kth
}

/// Most frequent value of one lane and the position of its last occurrence.
///
/// Pairs are stably sorted by value, so each run of equal values lists its
/// positions in ascending order. Runs are scanned from the smallest value up
/// and a run replaces the current best when its count is at least as large,
/// which makes the largest value win ties. `len` must be non-zero.
///
/// # Safety
/// `src` must be readable at `base + i * stride` for `i < len`.
pub unsafe fn mode_lane<T: Element>(
    src: *const T,
    base: usize,
    len: usize,
    stride: usize,
) -> (T, i64) {
    let mut pairs = gather_lane(src, base, len, stride);
    pairs.sort_by(|a, b| total_cmp(&a.0, &b.0));

    let mut best = pairs[0];
    let mut best_count = 0;
    let mut start = 0;
    while start < len {
        let mut end = start + 1;
        while end < len && total_cmp(&pairs[end].0, &pairs[start].0) == Ordering::Equal {
            end += 1;
        }
        let count = end - start;
        if count >= best_count {
            best_count = count;
            best = pairs[end - 1];
        }
        start = end;
    }

    best
}
