//! # seekr
//!
//! **Selection and ordering kernels for n-dimensional tensors.**
//!
//! seekr covers the search side of a tensor library: sorting, arg-extrema,
//! top-k, k-th value, mode, gathers driven by index tensors or Bool masks,
//! `where`, and batched binary search. Kernels run on the CPU and spread
//! independent lanes over a rayon pool.
//!
//! ## Quick Start
//!
//! ```
//! use seekr::prelude::*;
//!
//! let device = CpuDevice::new();
//! let client = CpuRuntime::default_client(&device);
//!
//! let x = Tensor::<CpuRuntime>::from_slice(&[3.0f32, 1.0, 4.0, 1.0, 5.0], &[5], &device);
//! let (values, indices) = client.topk(&x, 2usize, -1, true, true)?;
//! assert_eq!(values.to_vec::<f32>(), [5.0, 4.0]);
//! assert_eq!(indices.to_vec::<i64>(), [4, 2]);
//!
//! let seq = Tensor::<CpuRuntime>::from_slice(&[1.0f32, 2.0, 3.0], &[3], &device);
//! let pos = client.searchsorted(&seq, &x, false, false)?;
//! assert_eq!(pos.to_vec::<i64>(), [2, 0, 3, 0, 3]);
//! # Ok::<(), seekr::error::Error>(())
//! ```
//!
//! ## Errors
//!
//! Every operation validates its arguments before running a kernel and
//! reports failures through [`error::Error`]; [`error::Error::kind`] sorts
//! them into Type, Shape, Value and Range errors.
//!
//! ## Feature Flags
//!
//! - `rayon` (default): Multi-threaded lane processing
//! - `f16` (default): Half-precision floats (F16, BF16)

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod dtype;
pub mod error;
pub mod ops;
pub mod runtime;
pub mod tensor;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::dtype::DType;
    pub use crate::error::{Error, ErrorKind, Result};
    pub use crate::ops::{
        ConditionalOps, IndexingOps, SearchOps, SelectionOps, SortingOps, TopK, WhereOperand,
        WhereOutput,
    };
    pub use crate::runtime::cpu::{
        CpuClient, CpuClientConfig, CpuDevice, CpuRuntime, ExecutionMode, ParallelismConfig,
    };
    pub use crate::runtime::{Device, Runtime, RuntimeClient};
    pub use crate::tensor::{Layout, Tensor};
}

/// Default runtime
pub type DefaultRuntime = runtime::cpu::CpuRuntime;
