//! CPU runtime implementation
//!
//! The CPU runtime uses standard heap allocation and runs every operation
//! synchronously on the calling thread, fanning independent lanes out to
//! rayon when the `rayon` feature is enabled.
//!
//! # Lanes
//!
//! Axis-wise operations view the input as `[outer, dim_size, inner]`. Each of
//! the `outer * inner` lanes is a strided 1-D slice processed independently
//! and written to a disjoint region of the output.
//!
//! # Non-contiguous Tensors
//!
//! Inputs are materialized with `ensure_contiguous` before kernels run, except
//! for `where`, which walks broadcast (stride-0) views directly.

mod client;
pub(crate) mod conditional;
mod device;
pub(crate) mod helpers;
pub(crate) mod index;
pub(crate) mod kernels;
mod runtime;
pub(crate) mod search;
pub(crate) mod select;
pub(crate) mod sort;

pub use crate::tensor::Tensor;
pub use client::{CpuClient, CpuClientConfig, ExecutionMode, ParallelismConfig};
pub use device::CpuDevice;
pub use runtime::CpuRuntime;
