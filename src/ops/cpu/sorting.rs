//! CPU implementation of ordering operations.

use crate::error::Result;
use crate::ops::SortingOps;
use crate::runtime::cpu::{CpuClient, CpuRuntime};
use crate::tensor::Tensor;

/// SortingOps implementation for CPU runtime.
impl SortingOps<CpuRuntime> for CpuClient {
    fn sort(
        &self,
        a: &Tensor<CpuRuntime>,
        dim: isize,
        descending: bool,
        stable: bool,
    ) -> Result<Tensor<CpuRuntime>> {
        crate::runtime::cpu::sort::sort_impl(self, a, dim, descending, stable)
    }

    fn sort_with_indices(
        &self,
        a: &Tensor<CpuRuntime>,
        dim: isize,
        descending: bool,
        stable: bool,
    ) -> Result<(Tensor<CpuRuntime>, Tensor<CpuRuntime>)> {
        crate::runtime::cpu::sort::sort_with_indices_impl(self, a, dim, descending, stable)
    }

    fn argsort(
        &self,
        a: &Tensor<CpuRuntime>,
        dim: isize,
        descending: bool,
        stable: bool,
    ) -> Result<Tensor<CpuRuntime>> {
        crate::runtime::cpu::sort::argsort_impl(self, a, dim, descending, stable)
    }
}
