//! Tensor types
//!
//! This module provides the `Tensor` type, an n-dimensional array view over
//! reference-counted device storage.

mod core;
mod layout;
mod storage;

pub use core::Tensor;
pub use layout::{Layout, Shape, Strides};
pub use storage::Storage;
