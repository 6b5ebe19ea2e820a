//! Shape broadcasting
//!
//! Shapes are right-aligned; a dimension of size 1 (or a missing leading
//! dimension) stretches to match the other operand. Any other mismatch is an
//! error.

use crate::error::{Error, Result};

/// Broadcast shape of two operands, or `None` if incompatible
///
/// ```
/// use seekr::ops::broadcast_shape;
/// assert_eq!(broadcast_shape(&[3, 1], &[4]), Some(vec![3, 4]));
/// assert_eq!(broadcast_shape(&[3], &[4]), None);
/// ```
pub fn broadcast_shape(a: &[usize], b: &[usize]) -> Option<Vec<usize>> {
    let ndim = a.len().max(b.len());
    let mut out = vec![0; ndim];

    for (i, slot) in out.iter_mut().rev().enumerate() {
        let da = if i < a.len() { a[a.len() - 1 - i] } else { 1 };
        let db = if i < b.len() { b[b.len() - 1 - i] } else { 1 };
        *slot = match (da, db) {
            (x, y) if x == y => x,
            (1, y) => y,
            (x, 1) => x,
            _ => return None,
        };
    }

    Some(out)
}

/// Broadcast shape of any number of operands
///
/// Fails with `BroadcastError` naming the accumulated shape and the first
/// operand that does not fit.
pub fn broadcast_shapes(shapes: &[&[usize]]) -> Result<Vec<usize>> {
    let mut acc: Vec<usize> = Vec::new();
    for &shape in shapes {
        acc = broadcast_shape(&acc, shape).ok_or_else(|| Error::broadcast(&acc, shape))?;
    }
    Ok(acc)
}

/// True if every shape is identical, so no stride-0 views are needed
#[inline]
pub fn shapes_equal(shapes: &[&[usize]]) -> bool {
    shapes.windows(2).all(|w| w[0] == w[1])
}
