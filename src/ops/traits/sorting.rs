//! Ordering operations trait.

use crate::error::{Error, Result};
use crate::runtime::Runtime;
use crate::tensor::Tensor;

/// Ordering operations
///
/// Elements are ordered by a total order in which NaN compares greater than
/// every other value and equal to itself. Descending order reverses that
/// comparator, so NaNs lead a descending sort and trail an ascending one.
pub trait SortingOps<R: Runtime> {
    /// Sort values along `dim`.
    ///
    /// # Arguments
    ///
    /// * `a` - Input tensor
    /// * `dim` - Dimension along which to sort (supports negative indexing)
    /// * `descending` - Reverse the comparator
    /// * `stable` - Keep equal elements in their original relative order
    ///
    /// # Example
    ///
    /// ```
    /// # use seekr::prelude::*;
    /// # let device = CpuDevice::new();
    /// # let client = CpuRuntime::default_client(&device);
    /// let a = Tensor::<CpuRuntime>::from_slice(&[3.0f32, 1.0, 4.0, 1.0, 5.0], &[5], &device);
    /// let sorted = client.sort(&a, 0, false, true)?;
    /// assert_eq!(sorted.to_vec::<f32>(), [1.0, 1.0, 3.0, 4.0, 5.0]);
    /// # Ok::<(), seekr::error::Error>(())
    /// ```
    fn sort(&self, a: &Tensor<R>, dim: isize, descending: bool, stable: bool) -> Result<Tensor<R>> {
        let _ = (a, dim, descending, stable);
        Err(Error::NotImplemented {
            feature: "SortingOps::sort",
        })
    }

    /// Sort values along `dim`, also returning the I64 source positions.
    ///
    /// # Returns
    ///
    /// `(values, indices)`, both shaped like `a`.
    fn sort_with_indices(
        &self,
        a: &Tensor<R>,
        dim: isize,
        descending: bool,
        stable: bool,
    ) -> Result<(Tensor<R>, Tensor<R>)> {
        let _ = (a, dim, descending, stable);
        Err(Error::NotImplemented {
            feature: "SortingOps::sort_with_indices",
        })
    }

    /// Positions that would sort `a` along `dim`.
    ///
    /// Gathering `a` with the result along `dim` reproduces [`Self::sort`].
    ///
    /// ```
    /// # use seekr::prelude::*;
    /// # let device = CpuDevice::new();
    /// # let client = CpuRuntime::default_client(&device);
    /// let a = Tensor::<CpuRuntime>::from_slice(&[1i64, 0, 1, 0], &[4], &device);
    /// let idx = client.argsort(&a, -1, false, true)?;
    /// assert_eq!(idx.to_vec::<i64>(), [1, 3, 0, 2]);
    /// # Ok::<(), seekr::error::Error>(())
    /// ```
    fn argsort(
        &self,
        a: &Tensor<R>,
        dim: isize,
        descending: bool,
        stable: bool,
    ) -> Result<Tensor<R>> {
        let _ = (a, dim, descending, stable);
        Err(Error::NotImplemented {
            feature: "SortingOps::argsort",
        })
    }
}
