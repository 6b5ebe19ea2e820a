//! Ordering operations for CPU runtime

use super::helpers::{Lanes, dispatch_dtype, for_each_lane};
use super::{CpuClient, CpuRuntime, kernels};
use crate::dtype::{DType, DTypeSet};
use crate::error::{Error, Result};
use crate::runtime::{ensure_contiguous, normalize_dim};
use crate::tensor::Tensor;

/// Which outputs a sort produces
#[derive(Copy, Clone)]
struct SortOutputs {
    values: bool,
    indices: bool,
}

/// Shared driver for sort, sort_with_indices and argsort
fn sort_driver(
    client: &CpuClient,
    a: &Tensor<CpuRuntime>,
    dim: isize,
    descending: bool,
    stable: bool,
    outputs: SortOutputs,
    op: &'static str,
) -> Result<(Option<Tensor<CpuRuntime>>, Option<Tensor<CpuRuntime>>)> {
    let dtype = a.dtype();
    DTypeSet::SORT.check(dtype, op)?;

    let shape = a.shape();
    tracing::debug!(op, shape = ?shape, %dtype, dim, descending, stable, "sort");

    let ndim = shape.len();
    if ndim == 0 {
        normalize_dim(dim, 1)?;
        let values = outputs.values.then(|| a.clone());
        let indices = if outputs.indices {
            Some(Tensor::try_zeros(shape, DType::I64, &client.device)?)
        } else {
            None
        };
        return Ok((values, indices));
    }

    let dim_idx = normalize_dim(dim, ndim)?;
    let lanes = Lanes::new(shape, dim_idx);
    let a_contig = ensure_contiguous(a)?;

    let values = if outputs.values {
        Some(Tensor::<CpuRuntime>::try_empty(shape, dtype, &client.device)?)
    } else {
        None
    };
    let indices = if outputs.indices {
        Some(Tensor::<CpuRuntime>::try_empty(shape, DType::I64, &client.device)?)
    } else {
        None
    };

    if lanes.len == 0 || lanes.count() == 0 {
        return Ok((values, indices));
    }

    let a_ptr = a_contig.storage().ptr() as usize;
    let values_ptr = values.as_ref().map_or(0, |t| t.storage().ptr() as usize);
    let indices_ptr = indices.as_ref().map_or(0, |t| t.storage().ptr() as usize);

    dispatch_dtype!(dtype, T => {
        for_each_lane(client, lanes.count(), |lane| {
            let base = lanes.base(lane, lanes.len);
            unsafe {
                kernels::sort_lane::<T>(
                    a_ptr as *const T,
                    values_ptr as *mut T,
                    indices_ptr as *mut i64,
                    base,
                    lanes.len,
                    lanes.inner,
                    descending,
                    stable,
                );
            }
        });
    }, op);

    Ok((values, indices))
}

/// Sort tensor along a dimension (values only)
pub fn sort_impl(
    client: &CpuClient,
    a: &Tensor<CpuRuntime>,
    dim: isize,
    descending: bool,
    stable: bool,
) -> Result<Tensor<CpuRuntime>> {
    let outputs = SortOutputs {
        values: true,
        indices: false,
    };
    sort_driver(client, a, dim, descending, stable, outputs, "sort")?
        .0
        .ok_or_else(|| Error::Internal("sort produced no values".into()))
}

/// Sort tensor along a dimension, returning both values and indices
pub fn sort_with_indices_impl(
    client: &CpuClient,
    a: &Tensor<CpuRuntime>,
    dim: isize,
    descending: bool,
    stable: bool,
) -> Result<(Tensor<CpuRuntime>, Tensor<CpuRuntime>)> {
    let outputs = SortOutputs {
        values: true,
        indices: true,
    };
    match sort_driver(client, a, dim, descending, stable, outputs, "sort_with_indices")? {
        (Some(values), Some(indices)) => Ok((values, indices)),
        _ => Err(Error::Internal("sort_with_indices produced no output".into())),
    }
}

/// Return indices that would sort the tensor
pub fn argsort_impl(
    client: &CpuClient,
    a: &Tensor<CpuRuntime>,
    dim: isize,
    descending: bool,
    stable: bool,
) -> Result<Tensor<CpuRuntime>> {
    let outputs = SortOutputs {
        values: false,
        indices: true,
    };
    sort_driver(client, a, dim, descending, stable, outputs, "argsort")?
        .1
        .ok_or_else(|| Error::Internal("argsort produced no indices".into()))
}
