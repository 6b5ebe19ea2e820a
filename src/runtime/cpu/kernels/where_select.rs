//! Conditional select kernels

use crate::dtype::Element;

/// Where (conditional select) over contiguous operands of equal shape
///
/// `out[i] = cond[i] ? x[i] : y[i]`. `out` may be the same buffer as `x`.
///
/// # Safety
/// - `cond`, `x`, `y` and `out` must hold `len` elements
#[inline]
pub unsafe fn where_kernel<T: Element>(
    cond: *const u8,
    x: *const T,
    y: *const T,
    out: *mut T,
    len: usize,
) {
    for i in 0..len {
        *out.add(i) = if *cond.add(i) != 0 {
            *x.add(i)
        } else {
            *y.add(i)
        };
    }
}

/// Where (conditional select) over broadcast operands
///
/// Walks `out_shape` in row-major order with an odometer, advancing each
/// operand by its own strides (0 along broadcast dimensions).
///
/// # Arguments
/// * `cond` - Pointer to condition tensor data (Bool as u8)
/// * `x` - Pointer to "true" values tensor data
/// * `y` - Pointer to "false" values tensor data
/// * `out` - Pointer to contiguous output tensor data
/// * `out_shape` - Shape of output tensor
/// * `cond_strides`, `x_strides`, `y_strides` - Element strides per operand
/// * `cond_offset`, `x_offset`, `y_offset` - Starting offsets for each operand
///
/// # Safety
/// - All pointers must be valid for the specified shapes and strides
/// - `out` may alias `x` only if `x` is contiguous with offset 0
#[allow(clippy::too_many_arguments)]
pub unsafe fn where_strided_kernel<T: Element>(
    cond: *const u8,
    x: *const T,
    y: *const T,
    out: *mut T,
    out_shape: &[usize],
    cond_strides: &[isize],
    x_strides: &[isize],
    y_strides: &[isize],
    cond_offset: usize,
    x_offset: usize,
    y_offset: usize,
) {
    let ndim = out_shape.len();
    let total: usize = out_shape.iter().product();
    if total == 0 {
        return;
    }

    let mut coords = vec![0usize; ndim];
    let mut c_off = cond_offset as isize;
    let mut x_off = x_offset as isize;
    let mut y_off = y_offset as isize;

    for i in 0..total {
        *out.add(i) = if *cond.offset(c_off) != 0 {
            *x.offset(x_off)
        } else {
            *y.offset(y_off)
        };

        for d in (0..ndim).rev() {
            coords[d] += 1;
            c_off += cond_strides[d];
            x_off += x_strides[d];
            y_off += y_strides[d];
            if coords[d] < out_shape[d] {
                break;
            }
            let span = out_shape[d] as isize;
            c_off -= cond_strides[d] * span;
            x_off -= x_strides[d] * span;
            y_off -= y_strides[d] * span;
            coords[d] = 0;
        }
    }
}
