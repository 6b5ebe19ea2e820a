//! Binary search kernels

use super::sort::total_cmp;
use crate::dtype::Element;
use std::cmp::Ordering;

/// True when no element of the row is NaN or infinite
///
/// # Safety
/// `seq` must hold `len` elements.
#[inline]
pub unsafe fn row_is_finite<T: Element>(seq: *const T, len: usize) -> bool {
    if len == 0 {
        return true;
    }
    std::slice::from_raw_parts(seq, len)
        .iter()
        .all(|v| v.is_finite())
}

/// Insertion point of `value` into the ascending row `seq[..len]`.
///
/// Left side: first `i` with `seq[i] >= value`. Right side: first `i` with
/// `seq[i] > value`. A row holding a non-finite element (`row_finite ==
/// false`) and a NaN query both report `len`.
///
/// # Safety
/// `seq` must hold `len` elements.
#[inline]
pub unsafe fn search_row<T: Element>(
    seq: *const T,
    len: usize,
    row_finite: bool,
    value: T,
    right: bool,
) -> usize {
    if len == 0 || !row_finite || value.is_nan() {
        return len;
    }

    let row = std::slice::from_raw_parts(seq, len);
    if right {
        row.partition_point(|s| total_cmp(s, &value) != Ordering::Greater)
    } else {
        row.partition_point(|s| total_cmp(s, &value) == Ordering::Less)
    }
}
