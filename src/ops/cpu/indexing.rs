//! CPU implementation of indexing operations.

use crate::error::Result;
use crate::ops::IndexingOps;
use crate::runtime::cpu::{CpuClient, CpuRuntime};
use crate::tensor::Tensor;

/// IndexingOps implementation for CPU runtime.
impl IndexingOps<CpuRuntime> for CpuClient {
    fn index_select(
        &self,
        a: &Tensor<CpuRuntime>,
        dim: isize,
        index: &Tensor<CpuRuntime>,
    ) -> Result<Tensor<CpuRuntime>> {
        crate::runtime::cpu::index::index_select_impl(self, a, dim, index)
    }

    fn index_sample(
        &self,
        a: &Tensor<CpuRuntime>,
        index: &Tensor<CpuRuntime>,
    ) -> Result<Tensor<CpuRuntime>> {
        crate::runtime::cpu::index::index_sample_impl(self, a, index)
    }

    fn masked_select(
        &self,
        a: &Tensor<CpuRuntime>,
        mask: &Tensor<CpuRuntime>,
    ) -> Result<Tensor<CpuRuntime>> {
        crate::runtime::cpu::index::masked_select_impl(self, a, mask)
    }

    fn nonzero(&self, a: &Tensor<CpuRuntime>) -> Result<Tensor<CpuRuntime>> {
        crate::runtime::cpu::index::nonzero_impl(self, a)
    }

    fn nonzero_tuple(&self, a: &Tensor<CpuRuntime>) -> Result<Vec<Tensor<CpuRuntime>>> {
        crate::runtime::cpu::index::nonzero_tuple_impl(self, a)
    }
}
