//! Indexing operations trait.

use crate::error::{Error, Result};
use crate::runtime::Runtime;
use crate::tensor::Tensor;

/// Gather, mask and nonzero operations
pub trait IndexingOps<R: Runtime> {
    /// Select entries along `dim` using a 1-D I32/I64 index tensor.
    ///
    /// The output has the shape of `a` with `dim` replaced by the index length.
    /// Every index must lie in `[0, a.shape()[dim])`.
    ///
    /// ```
    /// # use seekr::prelude::*;
    /// # let device = CpuDevice::new();
    /// # let client = CpuRuntime::default_client(&device);
    /// let a = Tensor::<CpuRuntime>::from_slice(&[1.0f32, 2.0, 3.0, 4.0, 5.0, 6.0], &[3, 2], &device);
    /// let idx = Tensor::<CpuRuntime>::from_slice(&[2i64, 0], &[2], &device);
    /// let out = client.index_select(&a, 0, &idx)?;
    /// assert_eq!(out.to_vec::<f32>(), [5.0, 6.0, 1.0, 2.0]);
    /// # Ok::<(), seekr::error::Error>(())
    /// ```
    fn index_select(&self, a: &Tensor<R>, dim: isize, index: &Tensor<R>) -> Result<Tensor<R>> {
        let _ = (a, dim, index);
        Err(Error::NotImplemented {
            feature: "IndexingOps::index_select",
        })
    }

    /// Per-row gather: `out[b, m] = a[b, index[b, m]]`.
    ///
    /// `a` is `[B, N]`, `index` is `[B, M]` with the same `B`.
    fn index_sample(&self, a: &Tensor<R>, index: &Tensor<R>) -> Result<Tensor<R>> {
        let _ = (a, index);
        Err(Error::NotImplemented {
            feature: "IndexingOps::index_sample",
        })
    }

    /// Elements of `a` where the Bool `mask` is true, as a 1-D tensor.
    ///
    /// `a` and `mask` are broadcast against each other; elements come out in
    /// row-major order of the broadcast shape.
    fn masked_select(&self, a: &Tensor<R>, mask: &Tensor<R>) -> Result<Tensor<R>> {
        let _ = (a, mask);
        Err(Error::NotImplemented {
            feature: "IndexingOps::masked_select",
        })
    }

    /// Coordinates of nonzero elements as an I64 `[Z, rank]` tensor.
    ///
    /// Rows follow row-major scan order. A 0-d input is treated as shape `[1]`.
    ///
    /// ```
    /// # use seekr::prelude::*;
    /// # let device = CpuDevice::new();
    /// # let client = CpuRuntime::default_client(&device);
    /// let a = Tensor::<CpuRuntime>::from_slice(&[0i32, 7, 0, 9], &[2, 2], &device);
    /// let nz = client.nonzero(&a)?;
    /// assert_eq!(nz.shape(), &[2, 2]);
    /// assert_eq!(nz.to_vec::<i64>(), [0, 1, 1, 1]);
    /// # Ok::<(), seekr::error::Error>(())
    /// ```
    fn nonzero(&self, a: &Tensor<R>) -> Result<Tensor<R>> {
        let _ = a;
        Err(Error::NotImplemented {
            feature: "IndexingOps::nonzero",
        })
    }

    /// Coordinates of nonzero elements, one `[Z, 1]` tensor per dimension.
    ///
    /// A rank-1 input yields the single `[Z, 1]` coordinate tensor directly.
    fn nonzero_tuple(&self, a: &Tensor<R>) -> Result<Vec<Tensor<R>>> {
        let _ = a;
        Err(Error::NotImplemented {
            feature: "IndexingOps::nonzero_tuple",
        })
    }
}
