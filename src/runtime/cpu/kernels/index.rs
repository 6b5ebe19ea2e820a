//! Index and mask kernels (index_select, index_sample, masked_select, nonzero)

use crate::dtype::Element;

/// Copy the selected slices of one outer row.
///
/// `out[o, j, :] = a[o, indices[j], :]` for the outer row `o`, where each
/// slice is `inner` contiguous elements.
///
/// # Safety
/// - `a` must hold `(o + 1) * dim_size * inner` elements
/// - `out` must hold `(o + 1) * indices.len() * inner` elements
/// - every index must be in `[0, dim_size)`
#[inline]
pub unsafe fn index_select_row<T: Element>(
    a: *const T,
    out: *mut T,
    indices: &[i64],
    o: usize,
    dim_size: usize,
    inner: usize,
) {
    let src_row = a.add(o * dim_size * inner);
    let dst_row = out.add(o * indices.len() * inner);

    for (j, &idx) in indices.iter().enumerate() {
        std::ptr::copy_nonoverlapping(
            src_row.add(idx as usize * inner),
            dst_row.add(j * inner),
            inner,
        );
    }
}

/// Gather one row: `out[b, m] = a[b, indices[b, m]]`.
///
/// # Safety
/// - `a` must hold `(b + 1) * n` elements and `out` `(b + 1) * m` elements
/// - `indices` must hold `(b + 1) * m` values, each in `[0, n)`
#[inline]
pub unsafe fn index_sample_row<T: Element>(
    a: *const T,
    out: *mut T,
    indices: &[i64],
    b: usize,
    n: usize,
    m: usize,
) {
    let row = &indices[b * m..(b + 1) * m];
    for (j, &idx) in row.iter().enumerate() {
        *out.add(b * m + j) = *a.add(b * n + idx as usize);
    }
}

/// Count elements where mask is true.
///
/// # Safety
/// - `mask` must be valid pointer to `numel` u8 elements
#[inline]
pub unsafe fn masked_count_kernel(mask: *const u8, numel: usize) -> usize {
    if numel == 0 {
        return 0;
    }
    std::slice::from_raw_parts(mask, numel)
        .iter()
        .filter(|&&m| m != 0)
        .count()
}

/// Select elements where mask is true, in order, into `out`.
///
/// # Safety
/// - `a` and `mask` must hold `numel` elements
/// - `out` must have room for every selected element
#[inline]
pub unsafe fn masked_select_kernel<T: Element>(
    a: *const T,
    mask: *const u8,
    out: *mut T,
    numel: usize,
) {
    let a_slice = std::slice::from_raw_parts(a, numel);
    let mask_slice = std::slice::from_raw_parts(mask, numel);

    let selected = a_slice
        .iter()
        .zip(mask_slice)
        .filter(|&(_, &m)| m != 0)
        .map(|(&v, _)| v);
    for (i, v) in selected.enumerate() {
        *out.add(i) = v;
    }
}

/// Flat positions of nonzero elements, in ascending order.
///
/// # Safety
/// - `a` must hold `numel` elements
pub unsafe fn nonzero_flat_kernel<T: Element>(a: *const T, numel: usize) -> Vec<i64> {
    if numel == 0 {
        return Vec::new();
    }
    std::slice::from_raw_parts(a, numel)
        .iter()
        .enumerate()
        .filter(|&(_, v)| v.is_nonzero())
        .map(|(i, _)| i as i64)
        .collect()
}

/// Write the coordinates of flat position `flat` into `out[..shape.len()]`.
///
/// # Safety
/// - `out` must be writable for `shape.len()` elements
#[inline]
pub unsafe fn unravel_index(flat: i64, shape: &[usize], out: *mut i64) {
    let mut rem = flat as usize;
    for d in (0..shape.len()).rev() {
        let size = shape[d].max(1);
        *out.add(d) = (rem % size) as i64;
        rem /= size;
    }
}
