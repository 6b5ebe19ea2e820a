//! CPU kernel implementations
//!
//! Low-level kernels generic over `T: Element`. Axis-wise kernels process a
//! single lane so the drivers can schedule lanes independently.

#![allow(unsafe_op_in_unsafe_fn)] // Kernels are already marked unsafe, inner unsafe is redundant

pub mod index;
pub mod search;
pub mod select;
pub mod sort;
pub mod where_select;

pub use index::{
    index_sample_row, index_select_row, masked_count_kernel, masked_select_kernel,
    nonzero_flat_kernel, unravel_index,
};
pub use search::{row_is_finite, search_row};
pub use select::{argextreme_lane, kthvalue_lane, mode_lane, topk_lane};
pub use sort::sort_lane;
pub use where_select::{where_kernel, where_strided_kernel};
