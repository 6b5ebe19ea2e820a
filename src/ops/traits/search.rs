//! Binary search operations trait.

use crate::error::{Error, Result};
use crate::runtime::Runtime;
use crate::tensor::Tensor;

/// Binary search over sorted sequences
pub trait SearchOps<R: Runtime> {
    /// Insertion points of `values` into `sorted_sequence`.
    ///
    /// A 1-D sequence serves every value. An N-D sequence must share all but
    /// its innermost dimension with `values`; each innermost row of the
    /// sequence serves the matching row of `values`.
    ///
    /// With `right == false` the result is the first position `i` with
    /// `seq[i] >= v`, otherwise the first with `seq[i] > v`. A row that holds
    /// NaN or an infinity reports its length for every query, as does a NaN
    /// query.
    ///
    /// `out_int32` selects I32 output, otherwise I64.
    ///
    /// ```
    /// # use seekr::prelude::*;
    /// # let device = CpuDevice::new();
    /// # let client = CpuRuntime::default_client(&device);
    /// let seq = Tensor::<CpuRuntime>::from_slice(&[1i64, 3, 5, 7, 9, 11], &[6], &device);
    /// let v = Tensor::<CpuRuntime>::from_slice(&[3i64, 6, 9, 10], &[4], &device);
    /// let left = client.searchsorted(&seq, &v, false, false)?;
    /// assert_eq!(left.to_vec::<i64>(), [1, 3, 4, 5]);
    /// # Ok::<(), seekr::error::Error>(())
    /// ```
    fn searchsorted(
        &self,
        sorted_sequence: &Tensor<R>,
        values: &Tensor<R>,
        out_int32: bool,
        right: bool,
    ) -> Result<Tensor<R>> {
        let _ = (sorted_sequence, values, out_int32, right);
        Err(Error::NotImplemented {
            feature: "SearchOps::searchsorted",
        })
    }

    /// Bucket index of every element of `x` given 1-D bucket boundaries.
    ///
    /// Same rules as [`Self::searchsorted`], but the sequence must be 1-D.
    fn bucketize(
        &self,
        x: &Tensor<R>,
        sorted_sequence: &Tensor<R>,
        out_int32: bool,
        right: bool,
    ) -> Result<Tensor<R>> {
        let _ = (x, sorted_sequence, out_int32, right);
        Err(Error::NotImplemented {
            feature: "SearchOps::bucketize",
        })
    }
}
