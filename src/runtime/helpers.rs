//! Shared helper functions for runtime backends

use crate::error::{Error, Result};
use crate::runtime::Runtime;
use crate::tensor::Tensor;

/// Normalize a possibly negative axis into `0..ndim`
///
/// Returns `InvalidDimension` when `dim` is outside `[-ndim, ndim)`.
#[inline]
pub fn normalize_dim(dim: isize, ndim: usize) -> Result<usize> {
    let idx = if dim < 0 { dim + ndim as isize } else { dim };
    if idx >= 0 && (idx as usize) < ndim {
        Ok(idx as usize)
    } else {
        Err(Error::InvalidDimension { dim, ndim })
    }
}

/// Ensure a tensor is contiguous in memory.
///
/// Already-contiguous tensors are returned as a zero-copy clone (Arc refcount
/// bump); strided views are materialized into fresh storage. Kernels index
/// raw pointers row-major and require this.
#[inline]
pub fn ensure_contiguous<R: Runtime>(tensor: &Tensor<R>) -> Result<Tensor<R>> {
    if tensor.is_contiguous() {
        Ok(tensor.clone())
    } else {
        tensor.contiguous()
    }
}
