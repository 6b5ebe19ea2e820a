//! CPU implementation of binary search operations.

use crate::error::Result;
use crate::ops::SearchOps;
use crate::runtime::cpu::{CpuClient, CpuRuntime};
use crate::tensor::Tensor;

/// SearchOps implementation for CPU runtime.
impl SearchOps<CpuRuntime> for CpuClient {
    fn searchsorted(
        &self,
        sorted_sequence: &Tensor<CpuRuntime>,
        values: &Tensor<CpuRuntime>,
        out_int32: bool,
        right: bool,
    ) -> Result<Tensor<CpuRuntime>> {
        crate::runtime::cpu::search::searchsorted_impl(
            self,
            sorted_sequence,
            values,
            out_int32,
            right,
        )
    }

    fn bucketize(
        &self,
        x: &Tensor<CpuRuntime>,
        sorted_sequence: &Tensor<CpuRuntime>,
        out_int32: bool,
        right: bool,
    ) -> Result<Tensor<CpuRuntime>> {
        crate::runtime::cpu::search::bucketize_impl(self, x, sorted_sequence, out_int32, right)
    }
}
