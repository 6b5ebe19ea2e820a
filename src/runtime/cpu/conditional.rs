//! Conditional select (`where`, `where_`) for CPU runtime

use super::helpers::{dispatch_dtype, for_each_lane};
use super::index::nonzero_tuple_impl;
use super::{CpuClient, CpuRuntime, kernels};
use crate::dtype::{DType, DTypeSet};
use crate::error::{Error, Result};
use crate::ops::{WhereOperand, WhereOutput, broadcast_shapes, shapes_equal};
use crate::runtime::{RuntimeClient, ensure_contiguous};
use crate::tensor::Tensor;

/// Elements per lane of the contiguous select
const WHERE_CHUNK: usize = 4096;

const OPERAND_PAIRING: &str = "either both or neither of x and y should be given";

fn check_cond(cond: &Tensor<CpuRuntime>, op: &'static str) -> Result<()> {
    if cond.dtype() == DType::Bool {
        Ok(())
    } else {
        Err(Error::unsupported_dtype(cond.dtype(), op))
    }
}

/// Turn the two value operands into tensors of one shared dtype
fn resolve_operands(
    client: &CpuClient,
    x: WhereOperand<CpuRuntime>,
    y: WhereOperand<CpuRuntime>,
) -> Result<(Tensor<CpuRuntime>, Tensor<CpuRuntime>)> {
    let scalar = |v: f64, dtype: DType| Tensor::try_full_scalar(&[1], dtype, v, &client.device);

    let (x, y) = match (x, y) {
        (WhereOperand::Tensor(x), WhereOperand::Tensor(y)) => (x, y),
        (WhereOperand::Scalar(v), WhereOperand::Tensor(y)) => (scalar(v, y.dtype())?, y),
        (WhereOperand::Tensor(x), WhereOperand::Scalar(v)) => {
            let y = scalar(v, x.dtype())?;
            (x, y)
        }
        (WhereOperand::Scalar(a), WhereOperand::Scalar(b)) => {
            (scalar(a, DType::F64)?, scalar(b, DType::F64)?)
        }
        _ => return Err(Error::invalid_argument("x", OPERAND_PAIRING)),
    };

    if x.dtype() != y.dtype() {
        return Err(Error::DTypeMismatch {
            lhs: x.dtype(),
            rhs: y.dtype(),
        });
    }
    DTypeSet::SELECT.check(x.dtype(), "where")?;

    Ok((x, y))
}

/// Write `cond ? x : y` over `out_shape` into the contiguous buffer at `out_ptr`
///
/// `out_ptr` may be `x`'s own buffer when `x` is contiguous and already has
/// shape `out_shape`.
fn select_into(
    client: &CpuClient,
    cond: &Tensor<CpuRuntime>,
    x: &Tensor<CpuRuntime>,
    y: &Tensor<CpuRuntime>,
    out_shape: &[usize],
    out_ptr: usize,
) -> Result<()> {
    let dtype = x.dtype();
    let numel: usize = out_shape.iter().product();
    if numel == 0 {
        return Ok(());
    }

    if shapes_equal(&[cond.shape(), x.shape(), y.shape()]) {
        let cond = ensure_contiguous(cond)?;
        let x = ensure_contiguous(x)?;
        let y = ensure_contiguous(y)?;
        let cond_ptr = cond.storage().ptr() as usize;
        let x_ptr = x.storage().ptr() as usize;
        let y_ptr = y.storage().ptr() as usize;
        let chunks = numel.div_ceil(WHERE_CHUNK);

        dispatch_dtype!(dtype, T => {
            for_each_lane(client, chunks, |chunk| unsafe {
                let start = chunk * WHERE_CHUNK;
                let len = WHERE_CHUNK.min(numel - start);
                kernels::where_kernel::<T>(
                    (cond_ptr as *const u8).add(start),
                    (x_ptr as *const T).add(start),
                    (y_ptr as *const T).add(start),
                    (out_ptr as *mut T).add(start),
                    len,
                );
            });
        }, "where");
        return Ok(());
    }

    let cond_b = cond.broadcast_to(out_shape)?;
    let x_b = x.broadcast_to(out_shape)?;
    let y_b = y.broadcast_to(out_shape)?;
    tracing::trace!(shape = ?out_shape, "strided where");

    let cond_ptr = cond_b.storage().ptr();
    let x_ptr = x_b.storage().ptr();
    let y_ptr = y_b.storage().ptr();

    dispatch_dtype!(dtype, T => {
        unsafe {
            kernels::where_strided_kernel::<T>(
                cond_ptr as *const u8,
                x_ptr as *const T,
                y_ptr as *const T,
                out_ptr as *mut T,
                out_shape,
                cond_b.strides(),
                x_b.strides(),
                y_b.strides(),
                cond_b.layout().offset(),
                x_b.layout().offset(),
                y_b.layout().offset(),
            );
        }
    }, "where");

    Ok(())
}

/// `where(cond, x, y)`, or the nonzero coordinates of `cond` with no operands
pub fn where_cond_impl(
    client: &CpuClient,
    cond: &Tensor<CpuRuntime>,
    x: WhereOperand<CpuRuntime>,
    y: WhereOperand<CpuRuntime>,
) -> Result<WhereOutput<CpuRuntime>> {
    if !x.is_given() && !y.is_given() {
        tracing::debug!(shape = ?cond.shape(), "where without operands");
        return nonzero_tuple_impl(client, cond).map(WhereOutput::Indices);
    }

    check_cond(cond, "where")?;
    let (x, y) = resolve_operands(client, x, y)?;
    let out_shape = broadcast_shapes(&[cond.shape(), x.shape(), y.shape()])?;
    tracing::debug!(
        cond = ?cond.shape(),
        x = ?x.shape(),
        y = ?y.shape(),
        dtype = %x.dtype(),
        "where"
    );

    let out = Tensor::<CpuRuntime>::try_empty(&out_shape, x.dtype(), &client.device)?;
    select_into(client, cond, &x, &y, &out_shape, out.storage().ptr() as usize)?;

    Ok(WhereOutput::Selected(out))
}

/// In-place `where` into `x`
pub fn where_inplace_impl(
    client: &CpuClient,
    cond: &Tensor<CpuRuntime>,
    x: &mut Tensor<CpuRuntime>,
    y: WhereOperand<CpuRuntime>,
) -> Result<()> {
    if !client.supports_aliasing() {
        return Err(Error::AliasingUnsupported { op: "where_" });
    }
    let y = match y {
        WhereOperand::Tensor(y) => y,
        _ => return Err(Error::invalid_argument("y", OPERAND_PAIRING)),
    };

    check_cond(cond, "where_")?;
    if x.dtype() != y.dtype() {
        return Err(Error::DTypeMismatch {
            lhs: x.dtype(),
            rhs: y.dtype(),
        });
    }
    DTypeSet::SELECT.check(x.dtype(), "where_")?;

    let out_shape = broadcast_shapes(&[cond.shape(), x.shape(), y.shape()])?;
    if out_shape != x.shape() {
        return Err(Error::shape_mismatch(x.shape(), &out_shape));
    }

    let in_place = x.is_contiguous() && x.storage().is_unique();
    tracing::debug!(shape = ?x.shape(), dtype = %x.dtype(), in_place, "where_");

    if in_place {
        let out_ptr = x.storage().ptr() as usize;
        return select_into(client, cond, x, &y, &out_shape, out_ptr);
    }

    // Shared or strided storage: write into a private buffer, then swap it in
    let out = Tensor::<CpuRuntime>::try_empty(&out_shape, x.dtype(), &client.device)?;
    select_into(client, cond, x, &y, &out_shape, out.storage().ptr() as usize)?;
    x.replace_parts(out.storage().clone(), out.layout().clone());

    Ok(())
}
