//! Binary search operations for CPU runtime

use super::helpers::{check_index_capacity, dispatch_dtype, for_each_lane, read_indices};
use super::{CpuClient, CpuRuntime, kernels};
use crate::dtype::{DType, DTypeSet, Element};
use crate::error::{Error, Result};
use crate::runtime::ensure_contiguous;
use crate::tensor::Tensor;

/// Insertion points of `values` into sorted rows of `sorted_sequence`
pub fn searchsorted_impl(
    client: &CpuClient,
    sorted_sequence: &Tensor<CpuRuntime>,
    values: &Tensor<CpuRuntime>,
    out_int32: bool,
    right: bool,
) -> Result<Tensor<CpuRuntime>> {
    DTypeSet::SEARCH.check(sorted_sequence.dtype(), "searchsorted")?;
    DTypeSet::SEARCH.check(values.dtype(), "searchsorted")?;
    let dtype = common_search_dtype(sorted_sequence.dtype(), values.dtype());

    let seq_shape = sorted_sequence.shape();
    let val_shape = values.shape();
    if seq_shape.is_empty() {
        return Err(Error::RankMismatch {
            arg: "sorted_sequence",
            expected: 1,
            got: 0,
        });
    }

    let seq_len = seq_shape[seq_shape.len() - 1];
    let batched = seq_shape.len() > 1;
    if batched
        && (val_shape.len() != seq_shape.len()
            || val_shape[..val_shape.len() - 1] != seq_shape[..seq_shape.len() - 1])
    {
        return Err(Error::shape_mismatch(
            &seq_shape[..seq_shape.len() - 1],
            val_shape,
        ));
    }

    let out_dtype = if out_int32 { DType::I32 } else { DType::I64 };
    check_index_capacity(seq_len, out_dtype, "searchsorted")?;
    tracing::debug!(
        seq = ?seq_shape,
        values = ?val_shape,
        seq_dtype = %sorted_sequence.dtype(),
        values_dtype = %values.dtype(),
        compare = %dtype,
        right,
        %out_dtype,
        "searchsorted"
    );

    let out = Tensor::<CpuRuntime>::try_empty(val_shape, out_dtype, &client.device)?;
    let total = values.numel();
    if total == 0 {
        return Ok(out);
    }

    // Queries per sequence row
    let per_row = if batched {
        val_shape[val_shape.len() - 1]
    } else {
        total
    };
    let rows = if batched { total / per_row.max(1) } else { 1 };

    let seq = promote(client, sorted_sequence, dtype)?;
    let values = promote(client, values, dtype)?;
    let seq_ptr = seq.storage().ptr() as usize;
    let val_ptr = values.storage().ptr() as usize;
    let out_ptr = out.storage().ptr() as usize;

    dispatch_dtype!(dtype, T => {
        let finite: Vec<bool> = (0..rows)
            .map(|r| unsafe { kernels::row_is_finite((seq_ptr as *const T).add(r * seq_len), seq_len) })
            .collect();
        let finite = finite.as_slice();

        for_each_lane(client, total, |q| unsafe {
            let r = q / per_row;
            let pos = kernels::search_row::<T>(
                (seq_ptr as *const T).add(r * seq_len),
                seq_len,
                finite[r],
                *(val_ptr as *const T).add(q),
                right,
            );
            if out_int32 {
                *(out_ptr as *mut i32).add(q) = pos as i32;
            } else {
                *(out_ptr as *mut i64).add(q) = pos as i64;
            }
        });
    }, "searchsorted");

    Ok(out)
}

/// Dtype both sides are compared in: shared when equal, else i64 for two
/// index types and f64 otherwise
fn common_search_dtype(seq: DType, values: DType) -> DType {
    if seq == values {
        seq
    } else if seq.is_index() && values.is_index() {
        DType::I64
    } else {
        DType::F64
    }
}

/// Contiguous copy of `t` in `dtype`, reusing `t` when it already matches
fn promote(
    client: &CpuClient,
    t: &Tensor<CpuRuntime>,
    dtype: DType,
) -> Result<Tensor<CpuRuntime>> {
    if t.dtype() == dtype {
        return ensure_contiguous(t);
    }

    match dtype {
        DType::I64 => {
            let wide = read_indices(t, "searchsorted")?;
            Tensor::try_from_slice(&wide, t.shape(), &client.device)
        }
        DType::F64 => {
            let t = ensure_contiguous(t)?;
            let numel = t.numel();
            let ptr = t.storage().ptr();
            let wide: Vec<f64> = dispatch_dtype!(t.dtype(), T => {
                if numel == 0 {
                    Vec::new()
                } else {
                    unsafe { std::slice::from_raw_parts(ptr as *const T, numel) }
                        .iter()
                        .map(|v| v.to_f64())
                        .collect()
                }
            }, "searchsorted");
            Tensor::try_from_slice(&wide, t.shape(), &client.device)
        }
        other => Err(Error::unsupported_dtype(other, "searchsorted")),
    }
}

/// Bucket index of every element of `x` given 1-D boundaries
pub fn bucketize_impl(
    client: &CpuClient,
    x: &Tensor<CpuRuntime>,
    sorted_sequence: &Tensor<CpuRuntime>,
    out_int32: bool,
    right: bool,
) -> Result<Tensor<CpuRuntime>> {
    if sorted_sequence.ndim() != 1 {
        return Err(Error::RankMismatch {
            arg: "sorted_sequence",
            expected: 1,
            got: sorted_sequence.ndim(),
        });
    }
    searchsorted_impl(client, sorted_sequence, x, out_int32, right)
}
