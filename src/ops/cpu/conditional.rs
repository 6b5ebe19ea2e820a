//! CPU implementation of conditional operations.

use crate::error::Result;
use crate::ops::{ConditionalOps, WhereOperand, WhereOutput};
use crate::runtime::cpu::{CpuClient, CpuRuntime};
use crate::tensor::Tensor;

/// ConditionalOps implementation for CPU runtime.
impl ConditionalOps<CpuRuntime> for CpuClient {
    fn where_cond<X, Y>(
        &self,
        cond: &Tensor<CpuRuntime>,
        x: X,
        y: Y,
    ) -> Result<WhereOutput<CpuRuntime>>
    where
        X: Into<WhereOperand<CpuRuntime>>,
        Y: Into<WhereOperand<CpuRuntime>>,
    {
        crate::runtime::cpu::conditional::where_cond_impl(self, cond, x.into(), y.into())
    }

    fn where_<Y>(
        &self,
        cond: &Tensor<CpuRuntime>,
        x: &mut Tensor<CpuRuntime>,
        y: Y,
    ) -> Result<()>
    where
        Y: Into<WhereOperand<CpuRuntime>>,
    {
        crate::runtime::cpu::conditional::where_inplace_impl(self, cond, x, y.into())
    }
}
