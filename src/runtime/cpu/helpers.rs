//! Helper functions shared by the CPU operation drivers

use super::{CpuClient, CpuRuntime};
use crate::dtype::{DType, check_index_dtype};
use crate::error::{Error, Result};
use crate::ops::compute_reduce_strides;
use crate::runtime::ensure_contiguous;
use crate::tensor::Tensor;

// ============================================================================
// DType Dispatch Macro
// ============================================================================

/// Macro for dtype dispatch to typed kernel calls
///
/// Matches on dtype and executes the block with `T` bound to the element type.
/// Usage: `dispatch_dtype!(dtype, T => { code using T }, "op_name")`
///
/// F16 and BF16 are available with the "f16" feature. Bool has no element
/// type of its own; callers that accept masks dispatch on `DType::U8` instead.
macro_rules! dispatch_dtype {
    ($dtype:expr, $T:ident => $body:block, $error_op:expr) => {
        match $dtype {
            DType::F64 => {
                type $T = f64;
                $body
            }
            DType::F32 => {
                type $T = f32;
                $body
            }
            DType::F16 => {
                #[cfg(feature = "f16")]
                {
                    type $T = half::f16;
                    $body
                }
                #[cfg(not(feature = "f16"))]
                {
                    return Err(Error::UnsupportedDType {
                        dtype: $dtype,
                        op: $error_op,
                    });
                }
            }
            DType::BF16 => {
                #[cfg(feature = "f16")]
                {
                    type $T = half::bf16;
                    $body
                }
                #[cfg(not(feature = "f16"))]
                {
                    return Err(Error::UnsupportedDType {
                        dtype: $dtype,
                        op: $error_op,
                    });
                }
            }
            DType::I64 => {
                type $T = i64;
                $body
            }
            DType::I32 => {
                type $T = i32;
                $body
            }
            DType::I16 => {
                type $T = i16;
                $body
            }
            DType::I8 => {
                type $T = i8;
                $body
            }
            DType::U8 => {
                type $T = u8;
                $body
            }
            DType::Complex64 => {
                type $T = $crate::dtype::Complex64;
                $body
            }
            DType::Complex128 => {
                type $T = $crate::dtype::Complex128;
                $body
            }
            DType::Bool => {
                return Err(Error::UnsupportedDType {
                    dtype: $dtype,
                    op: $error_op,
                });
            }
        }
    };
}

pub(crate) use dispatch_dtype;

// ============================================================================
// Lane Decomposition
// ============================================================================

/// `[outer, len, inner]` view of a tensor around one axis
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct Lanes {
    pub outer: usize,
    pub len: usize,
    pub inner: usize,
}

impl Lanes {
    pub fn new(shape: &[usize], dim: usize) -> Self {
        let (outer, len, inner) = compute_reduce_strides(shape, dim);
        Self { outer, len, inner }
    }

    /// Number of independent lanes
    #[inline]
    pub fn count(&self) -> usize {
        self.outer * self.inner
    }

    /// Offset of the first element of `lane` in a buffer whose axis has `len` entries
    ///
    /// Consecutive elements of the lane are `inner` apart.
    #[inline]
    pub fn base(&self, lane: usize, len: usize) -> usize {
        (lane / self.inner) * len * self.inner + lane % self.inner
    }
}

/// Run `f` for every lane in `0..lanes`
///
/// With the `rayon` feature, lanes are spread over the client's pool in
/// chunks of at least `rayon_min_len()`. `f` must only write to the region
/// owned by its lane.
pub(crate) fn for_each_lane<F>(client: &CpuClient, lanes: usize, f: F)
where
    F: Fn(usize) + Send + Sync,
{
    #[cfg(feature = "rayon")]
    {
        use rayon::prelude::*;

        if lanes > 1 {
            let min_len = client.rayon_min_len();
            tracing::trace!(lanes, min_len, parallel = true, "lane dispatch");
            client.install_parallelism(|| {
                (0..lanes)
                    .into_par_iter()
                    .with_min_len(min_len)
                    .for_each(&f);
            });
            return;
        }
    }

    #[cfg(not(feature = "rayon"))]
    let _ = client;

    tracing::trace!(lanes, parallel = false, "lane dispatch");
    (0..lanes).for_each(f);
}

// ============================================================================
// Index Tensors
// ============================================================================

/// Copy an I32/I64 tensor to host as i64
pub(crate) fn read_indices(index: &Tensor<CpuRuntime>, op: &'static str) -> Result<Vec<i64>> {
    check_index_dtype(index.dtype(), op)?;
    let index = ensure_contiguous(index)?;
    match index.dtype() {
        DType::I64 => index.try_to_vec::<i64>(),
        DType::I32 => Ok(index
            .try_to_vec::<i32>()?
            .into_iter()
            .map(i64::from)
            .collect()),
        dtype => Err(Error::InvalidIndexDType { dtype, op }),
    }
}

/// Fail with `IndexOutOfBounds` unless every index is in `[0, size)`
pub(crate) fn check_bounds(indices: &[i64], size: usize) -> Result<()> {
    match indices.iter().find(|&&i| i < 0 || i as usize >= size) {
        Some(&index) => Err(Error::IndexOutOfBounds { index, size }),
        None => Ok(()),
    }
}

/// Fail with `IndexOverflow` when `max_index` does not fit an I32 output
pub(crate) fn check_index_capacity(
    max_index: usize,
    dtype: DType,
    op: &'static str,
) -> Result<()> {
    if dtype == DType::I32 && max_index > i32::MAX as usize {
        return Err(Error::IndexOverflow {
            max_index,
            dtype,
            op,
        });
    }
    Ok(())
}
