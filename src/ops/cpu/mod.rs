//! CPU implementation of the operation traits.
//!
//! Each trait has its own module; the bodies delegate to
//! `runtime::cpu::*_impl` functions.

pub mod conditional;
pub mod indexing;
pub mod search;
pub mod selection;
pub mod sorting;
