//! Selection operations for CPU runtime (argmax/argmin, topk, kthvalue, mode)

use super::helpers::{Lanes, check_index_capacity, dispatch_dtype, for_each_lane, read_indices};
use super::{CpuClient, CpuRuntime, kernels};
use crate::dtype::{DType, DTypeSet};
use crate::error::{Error, Result};
use crate::ops::{TopK, reduce_dim_output_shape, replace_dim_shape};
use crate::runtime::{ensure_contiguous, normalize_dim};
use crate::tensor::Tensor;

/// Axis of a 0-d tensor: only `0` and `-1` are accepted
fn check_scalar_dim(dim: isize) -> Result<()> {
    normalize_dim(dim, 1).map(|_| ())
}

/// argmax (`largest`) or argmin
pub fn argreduce_impl(
    client: &CpuClient,
    a: &Tensor<CpuRuntime>,
    dim: Option<isize>,
    keepdim: bool,
    out_dtype: Option<DType>,
    largest: bool,
    op: &'static str,
) -> Result<Tensor<CpuRuntime>> {
    let out_dtype =
        out_dtype.ok_or_else(|| Error::invalid_argument("dtype", "index dtype must not be None"))?;
    if !out_dtype.is_index() {
        return Err(Error::unsupported_dtype(out_dtype, op));
    }

    let dtype = a.dtype();
    DTypeSet::ARG_REDUCE.check(dtype, op)?;

    let shape = a.shape();
    tracing::debug!(op, shape = ?shape, %dtype, ?dim, keepdim, %out_dtype, "arg reduce");

    let ndim = shape.len();
    let (lanes, out_shape) = match dim {
        None => {
            let out_shape = if keepdim { vec![1; ndim] } else { Vec::new() };
            let lanes = Lanes {
                outer: 1,
                len: a.numel(),
                inner: 1,
            };
            (lanes, out_shape)
        }
        Some(d) if ndim == 0 => {
            check_scalar_dim(d)?;
            let lanes = Lanes {
                outer: 1,
                len: 1,
                inner: 1,
            };
            (lanes, Vec::new())
        }
        Some(d) => {
            let dim_idx = normalize_dim(d, ndim)?;
            (
                Lanes::new(shape, dim_idx),
                reduce_dim_output_shape(shape, dim_idx, keepdim),
            )
        }
    };

    if lanes.len == 0 {
        return Err(Error::EmptyReduction { op });
    }
    check_index_capacity(lanes.len - 1, out_dtype, op)?;

    let a_contig = ensure_contiguous(a)?;
    let out = Tensor::<CpuRuntime>::try_empty(&out_shape, out_dtype, &client.device)?;
    if lanes.count() == 0 {
        return Ok(out);
    }

    let a_ptr = a_contig.storage().ptr() as usize;
    let out_ptr = out.storage().ptr() as usize;
    let wide = out_dtype == DType::I64;

    dispatch_dtype!(dtype, T => {
        for_each_lane(client, lanes.count(), |lane| unsafe {
            let base = lanes.base(lane, lanes.len);
            let idx = kernels::argextreme_lane::<T>(
                a_ptr as *const T,
                base,
                lanes.len,
                lanes.inner,
                largest,
            );
            if wide {
                *(out_ptr as *mut i64).add(lane) = idx as i64;
            } else {
                *(out_ptr as *mut i32).add(lane) = idx as i32;
            }
        });
    }, op);

    Ok(out)
}

/// Resolve a static or tensor-carried k
fn resolve_k(k: TopK<CpuRuntime>, size: usize) -> Result<usize> {
    match k {
        TopK::Static(k) => Ok(k),
        TopK::Dynamic(t) => {
            if t.numel() != 1 {
                return Err(Error::shape_mismatch(&[1], t.shape()));
            }
            let value = read_indices(&t, "topk")?
                .first()
                .copied()
                .ok_or_else(|| Error::Internal("empty k tensor".into()))?;
            usize::try_from(value).map_err(|_| Error::KOutOfRange {
                k: value,
                size,
                op: "topk",
            })
        }
    }
}

/// Top-k along a dimension
pub fn topk_impl(
    client: &CpuClient,
    a: &Tensor<CpuRuntime>,
    k: TopK<CpuRuntime>,
    dim: isize,
    largest: bool,
    sorted: bool,
) -> Result<(Tensor<CpuRuntime>, Tensor<CpuRuntime>)> {
    let dtype = a.dtype();
    DTypeSet::TOPK.check(dtype, "topk")?;

    let shape = a.shape();
    let ndim = shape.len();

    if ndim == 0 {
        check_scalar_dim(dim)?;
        let k = resolve_k(k, 1)?;
        if k > 1 {
            return Err(Error::KOutOfRange {
                k: k as i64,
                size: 1,
                op: "topk",
            });
        }
        let indices = Tensor::try_zeros(&[], DType::I64, &client.device)?;
        return Ok((a.clone(), indices));
    }

    let dim_idx = normalize_dim(dim, ndim)?;
    let lanes = Lanes::new(shape, dim_idx);
    let k = resolve_k(k, lanes.len)?;
    if k > lanes.len {
        return Err(Error::KOutOfRange {
            k: k as i64,
            size: lanes.len,
            op: "topk",
        });
    }

    tracing::debug!(shape = ?shape, %dtype, k, dim, largest, sorted, "topk");

    let out_shape = replace_dim_shape(shape, dim_idx, k);
    let (out_values, out_indices) = alloc_pairs(client, &out_shape, dtype)?;
    if k == 0 || lanes.count() == 0 {
        return Ok((out_values, out_indices));
    }

    let a_contig = ensure_contiguous(a)?;
    let a_ptr = a_contig.storage().ptr() as usize;
    let values_ptr = out_values.storage().ptr() as usize;
    let indices_ptr = out_indices.storage().ptr() as usize;

    dispatch_dtype!(dtype, T => {
        for_each_lane(client, lanes.count(), |lane| unsafe {
            kernels::topk_lane::<T>(
                a_ptr as *const T,
                values_ptr as *mut T,
                indices_ptr as *mut i64,
                lanes.base(lane, lanes.len),
                lanes.base(lane, k),
                lanes.len,
                lanes.inner,
                k,
                largest,
                sorted,
            );
        });
    }, "topk");

    Ok((out_values, out_indices))
}

/// Value and I64 index outputs of a per-lane selection
fn alloc_pairs(
    client: &CpuClient,
    out_shape: &[usize],
    dtype: DType,
) -> Result<(Tensor<CpuRuntime>, Tensor<CpuRuntime>)> {
    Ok((
        Tensor::<CpuRuntime>::try_empty(out_shape, dtype, &client.device)?,
        Tensor::<CpuRuntime>::try_empty(out_shape, DType::I64, &client.device)?,
    ))
}

/// k-th smallest value along a dimension (1-indexed)
pub fn kthvalue_impl(
    client: &CpuClient,
    a: &Tensor<CpuRuntime>,
    k: usize,
    dim: isize,
    keepdim: bool,
) -> Result<(Tensor<CpuRuntime>, Tensor<CpuRuntime>)> {
    let dtype = a.dtype();
    DTypeSet::KTHVALUE.check(dtype, "kthvalue")?;

    let shape = a.shape();
    let ndim = shape.len();
    tracing::debug!(shape = ?shape, %dtype, k, dim, keepdim, "kthvalue");

    if ndim == 0 {
        check_scalar_dim(dim)?;
        if k != 1 {
            return Err(Error::KOutOfRange {
                k: k as i64,
                size: 1,
                op: "kthvalue",
            });
        }
        let indices = Tensor::try_zeros(&[], DType::I64, &client.device)?;
        return Ok((a.clone(), indices));
    }

    let dim_idx = normalize_dim(dim, ndim)?;
    let lanes = Lanes::new(shape, dim_idx);
    if k == 0 || k > lanes.len {
        return Err(Error::KOutOfRange {
            k: k as i64,
            size: lanes.len,
            op: "kthvalue",
        });
    }

    let out_shape = reduce_dim_output_shape(shape, dim_idx, keepdim);
    let (out_values, out_indices) = alloc_pairs(client, &out_shape, dtype)?;
    if lanes.count() == 0 {
        return Ok((out_values, out_indices));
    }

    let a_contig = ensure_contiguous(a)?;
    let a_ptr = a_contig.storage().ptr() as usize;
    let values_ptr = out_values.storage().ptr() as usize;
    let indices_ptr = out_indices.storage().ptr() as usize;

    dispatch_dtype!(dtype, T => {
        for_each_lane(client, lanes.count(), |lane| unsafe {
            let (v, i) = kernels::kthvalue_lane::<T>(
                a_ptr as *const T,
                lanes.base(lane, lanes.len),
                lanes.len,
                lanes.inner,
                k,
            );
            *(values_ptr as *mut T).add(lane) = v;
            *(indices_ptr as *mut i64).add(lane) = i;
        });
    }, "kthvalue");

    Ok((out_values, out_indices))
}

/// Most frequent value along a dimension
pub fn mode_impl(
    client: &CpuClient,
    a: &Tensor<CpuRuntime>,
    dim: isize,
    keepdim: bool,
) -> Result<(Tensor<CpuRuntime>, Tensor<CpuRuntime>)> {
    let dtype = a.dtype();
    DTypeSet::TOPK.check(dtype, "mode")?;

    let shape = a.shape();
    let ndim = shape.len();
    tracing::debug!(shape = ?shape, %dtype, dim, keepdim, "mode");

    if ndim == 0 {
        check_scalar_dim(dim)?;
        let indices = Tensor::try_zeros(&[], DType::I64, &client.device)?;
        return Ok((a.clone(), indices));
    }

    let dim_idx = normalize_dim(dim, ndim)?;
    let lanes = Lanes::new(shape, dim_idx);
    if lanes.len == 0 {
        return Err(Error::EmptyReduction { op: "mode" });
    }

    let out_shape = reduce_dim_output_shape(shape, dim_idx, keepdim);
    let (out_values, out_indices) = alloc_pairs(client, &out_shape, dtype)?;
    if lanes.count() == 0 {
        return Ok((out_values, out_indices));
    }

    let a_contig = ensure_contiguous(a)?;
    let a_ptr = a_contig.storage().ptr() as usize;
    let values_ptr = out_values.storage().ptr() as usize;
    let indices_ptr = out_indices.storage().ptr() as usize;

    dispatch_dtype!(dtype, T => {
        for_each_lane(client, lanes.count(), |lane| unsafe {
            let (v, i) = kernels::mode_lane::<T>(
                a_ptr as *const T,
                lanes.base(lane, lanes.len),
                lanes.len,
                lanes.inner,
            );
            *(values_ptr as *mut T).add(lane) = v;
            *(indices_ptr as *mut i64).add(lane) = i;
        });
    }, "mode");

    Ok((out_values, out_indices))
}
