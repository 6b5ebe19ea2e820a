//! CPU implementation of selection operations.

use crate::dtype::DType;
use crate::error::Result;
use crate::ops::{SelectionOps, TopK};
use crate::runtime::cpu::{CpuClient, CpuRuntime};
use crate::tensor::Tensor;

/// SelectionOps implementation for CPU runtime.
impl SelectionOps<CpuRuntime> for CpuClient {
    fn argmax(
        &self,
        a: &Tensor<CpuRuntime>,
        dim: Option<isize>,
        keepdim: bool,
        dtype: Option<DType>,
    ) -> Result<Tensor<CpuRuntime>> {
        crate::runtime::cpu::select::argreduce_impl(self, a, dim, keepdim, dtype, true, "argmax")
    }

    fn argmin(
        &self,
        a: &Tensor<CpuRuntime>,
        dim: Option<isize>,
        keepdim: bool,
        dtype: Option<DType>,
    ) -> Result<Tensor<CpuRuntime>> {
        crate::runtime::cpu::select::argreduce_impl(self, a, dim, keepdim, dtype, false, "argmin")
    }

    fn topk<K: Into<TopK<CpuRuntime>>>(
        &self,
        a: &Tensor<CpuRuntime>,
        k: K,
        dim: isize,
        largest: bool,
        sorted: bool,
    ) -> Result<(Tensor<CpuRuntime>, Tensor<CpuRuntime>)> {
        crate::runtime::cpu::select::topk_impl(self, a, k.into(), dim, largest, sorted)
    }

    fn kthvalue(
        &self,
        a: &Tensor<CpuRuntime>,
        k: usize,
        dim: isize,
        keepdim: bool,
    ) -> Result<(Tensor<CpuRuntime>, Tensor<CpuRuntime>)> {
        crate::runtime::cpu::select::kthvalue_impl(self, a, k, dim, keepdim)
    }

    fn mode(
        &self,
        a: &Tensor<CpuRuntime>,
        dim: isize,
        keepdim: bool,
    ) -> Result<(Tensor<CpuRuntime>, Tensor<CpuRuntime>)> {
        crate::runtime::cpu::select::mode_impl(self, a, dim, keepdim)
    }
}
