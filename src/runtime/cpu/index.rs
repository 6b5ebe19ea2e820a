//! Index and mask operations for CPU runtime

use super::helpers::{check_bounds, dispatch_dtype, for_each_lane, read_indices};
use super::{CpuClient, CpuRuntime, kernels};
use crate::dtype::{DType, DTypeSet};
use crate::error::{Error, Result};
use crate::ops::{broadcast_shapes, replace_dim_shape};
use crate::runtime::{ensure_contiguous, normalize_dim};
use crate::tensor::Tensor;

/// Select entries along a dimension with a 1-D index tensor
pub fn index_select_impl(
    client: &CpuClient,
    a: &Tensor<CpuRuntime>,
    dim: isize,
    index: &Tensor<CpuRuntime>,
) -> Result<Tensor<CpuRuntime>> {
    let dtype = a.dtype();
    DTypeSet::GATHER.check(dtype, "index_select")?;
    if index.ndim() != 1 {
        return Err(Error::RankMismatch {
            arg: "index",
            expected: 1,
            got: index.ndim(),
        });
    }

    let shape = a.shape();
    tracing::debug!(shape = ?shape, %dtype, dim, index_len = index.numel(), "index_select");

    // A 0-d source behaves as a single-element vector
    let src_shape: Vec<usize> = if shape.is_empty() { vec![1] } else { shape.to_vec() };
    let dim_idx = normalize_dim(dim, src_shape.len())?;
    let indices = read_indices(index, "index_select")?;
    check_bounds(&indices, src_shape[dim_idx])?;

    let outer: usize = src_shape[..dim_idx].iter().product();
    let dim_size = src_shape[dim_idx];
    let inner: usize = src_shape[dim_idx + 1..].iter().product();

    let out_shape = replace_dim_shape(&src_shape, dim_idx, indices.len());
    let out = Tensor::<CpuRuntime>::try_empty(&out_shape, dtype, &client.device)?;
    if out.numel() == 0 {
        return Ok(out);
    }

    let a_contig = ensure_contiguous(a)?;
    let a_ptr = a_contig.storage().ptr() as usize;
    let out_ptr = out.storage().ptr() as usize;
    let indices = indices.as_slice();

    dispatch_dtype!(dtype, T => {
        for_each_lane(client, outer, |o| unsafe {
            kernels::index_select_row::<T>(
                a_ptr as *const T,
                out_ptr as *mut T,
                indices,
                o,
                dim_size,
                inner,
            );
        });
    }, "index_select");

    Ok(out)
}

/// Per-row gather for `[B, N]` data and `[B, M]` indices
pub fn index_sample_impl(
    client: &CpuClient,
    a: &Tensor<CpuRuntime>,
    index: &Tensor<CpuRuntime>,
) -> Result<Tensor<CpuRuntime>> {
    let dtype = a.dtype();
    DTypeSet::GATHER.check(dtype, "index_sample")?;
    if a.ndim() != 2 {
        return Err(Error::RankMismatch {
            arg: "x",
            expected: 2,
            got: a.ndim(),
        });
    }
    if index.ndim() != 2 {
        return Err(Error::RankMismatch {
            arg: "index",
            expected: 2,
            got: index.ndim(),
        });
    }

    let (b, n) = (a.shape()[0], a.shape()[1]);
    let m = index.shape()[1];
    if index.shape()[0] != b {
        return Err(Error::shape_mismatch(&[b, m], index.shape()));
    }

    tracing::debug!(shape = ?a.shape(), %dtype, m, "index_sample");

    let indices = read_indices(index, "index_sample")?;
    check_bounds(&indices, n)?;

    let out = Tensor::<CpuRuntime>::try_empty(&[b, m], dtype, &client.device)?;
    if out.numel() == 0 {
        return Ok(out);
    }

    let a_contig = ensure_contiguous(a)?;
    let a_ptr = a_contig.storage().ptr() as usize;
    let out_ptr = out.storage().ptr() as usize;
    let indices = indices.as_slice();

    dispatch_dtype!(dtype, T => {
        for_each_lane(client, b, |row| unsafe {
            kernels::index_sample_row::<T>(
                a_ptr as *const T,
                out_ptr as *mut T,
                indices,
                row,
                n,
                m,
            );
        });
    }, "index_sample");

    Ok(out)
}

/// Elements selected by a Bool mask, broadcast against the data
pub fn masked_select_impl(
    client: &CpuClient,
    a: &Tensor<CpuRuntime>,
    mask: &Tensor<CpuRuntime>,
) -> Result<Tensor<CpuRuntime>> {
    let dtype = a.dtype();
    DTypeSet::SELECT.check(dtype, "masked_select")?;
    if mask.dtype() != DType::Bool {
        return Err(Error::unsupported_dtype(mask.dtype(), "masked_select"));
    }

    let out_shape = broadcast_shapes(&[a.shape(), mask.shape()])?;
    tracing::debug!(shape = ?a.shape(), mask = ?mask.shape(), %dtype, "masked_select");

    let a_full = ensure_contiguous(&a.broadcast_to(&out_shape)?)?;
    let mask_full = ensure_contiguous(&mask.broadcast_to(&out_shape)?)?;
    let numel = a_full.numel();

    let mask_ptr = mask_full.storage().ptr() as *const u8;
    let count = unsafe { kernels::masked_count_kernel(mask_ptr, numel) };

    let out = Tensor::<CpuRuntime>::try_empty(&[count], dtype, &client.device)?;
    if count == 0 {
        return Ok(out);
    }

    let a_ptr = a_full.storage().ptr();
    let out_ptr = out.storage().ptr();

    dispatch_dtype!(dtype, T => {
        unsafe {
            kernels::masked_select_kernel::<T>(
                a_ptr as *const T,
                mask_ptr,
                out_ptr as *mut T,
                numel,
            );
        }
    }, "masked_select");

    Ok(out)
}

/// Flat positions of nonzero elements and the shape they index
fn nonzero_positions(a: &Tensor<CpuRuntime>) -> Result<(Vec<i64>, Vec<usize>)> {
    let dtype = a.dtype();
    DTypeSet::NONZERO.check(dtype, "nonzero")?;

    let shape: Vec<usize> = if a.ndim() == 0 {
        vec![1]
    } else {
        a.shape().to_vec()
    };
    tracing::debug!(shape = ?shape, %dtype, "nonzero");

    let a_contig = ensure_contiguous(a)?;
    let a_ptr = a_contig.storage().ptr();
    let numel = a_contig.numel();

    // Bool is stored as one byte per element
    let kernel_dtype = if dtype == DType::Bool { DType::U8 } else { dtype };
    let flat = dispatch_dtype!(kernel_dtype, T => {
        unsafe { kernels::nonzero_flat_kernel::<T>(a_ptr as *const T, numel) }
    }, "nonzero");

    Ok((flat, shape))
}

/// Coordinates of nonzero elements as `[Z, rank]`
pub fn nonzero_impl(client: &CpuClient, a: &Tensor<CpuRuntime>) -> Result<Tensor<CpuRuntime>> {
    let (flat, shape) = nonzero_positions(a)?;
    let rank = shape.len();
    let out = Tensor::<CpuRuntime>::try_empty(&[flat.len(), rank], DType::I64, &client.device)?;
    if flat.is_empty() {
        return Ok(out);
    }

    let out_ptr = out.storage().ptr() as usize;
    let (flat, shape) = (flat.as_slice(), shape.as_slice());
    for_each_lane(client, flat.len(), |z| unsafe {
        kernels::unravel_index(flat[z], shape, (out_ptr as *mut i64).add(z * rank));
    });

    Ok(out)
}

/// Coordinates of nonzero elements, one `[Z, 1]` tensor per dimension
pub fn nonzero_tuple_impl(
    client: &CpuClient,
    a: &Tensor<CpuRuntime>,
) -> Result<Vec<Tensor<CpuRuntime>>> {
    let (flat, shape) = nonzero_positions(a)?;
    let z = flat.len();

    if shape.len() == 1 {
        return Ok(vec![Tensor::try_from_slice(&flat, &[z, 1], &client.device)?]);
    }

    let mut columns = vec![vec![0i64; z]; shape.len()];
    let mut coords = vec![0i64; shape.len()];
    for (row, &pos) in flat.iter().enumerate() {
        unsafe { kernels::unravel_index(pos, &shape, coords.as_mut_ptr()) };
        for (column, &c) in columns.iter_mut().zip(&coords) {
            column[row] = c;
        }
    }

    columns
        .iter()
        .map(|column| Tensor::try_from_slice(column, &[z, 1], &client.device))
        .collect()
}
