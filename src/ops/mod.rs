//! Search and selection operations
//!
//! Operations are defined as traits implemented by a runtime's client. This
//! gives each operation access to the client's device and execution
//! configuration when it allocates outputs and schedules kernels.
//!
//! ```text
//! CpuClient
//!   ├── SortingOps      sort, sort_with_indices, argsort
//!   ├── SelectionOps    argmax, argmin, topk, kthvalue, mode
//!   ├── IndexingOps     index_select, index_sample, masked_select, nonzero
//!   ├── ConditionalOps  where_cond, where_
//!   └── SearchOps       searchsorted, bucketize
//! ```
//!
//! Shape helpers ([`broadcast_shape`], [`broadcast_shapes`],
//! [`compute_reduce_strides`]) are shared by every backend.

mod broadcast;
mod cpu;
mod reduce;
pub(crate) mod traits;

pub use broadcast::{broadcast_shape, broadcast_shapes, shapes_equal};
pub use reduce::{compute_reduce_strides, reduce_dim_output_shape, replace_dim_shape};
pub use traits::*;
