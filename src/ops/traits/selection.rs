//! Selection operations trait.

use crate::dtype::DType;
use crate::error::{Error, Result};
use crate::runtime::Runtime;
use crate::tensor::Tensor;

/// How many elements `topk` keeps
///
/// `k` is either known up front or carried by a one-element integer tensor
/// that is read when the operation runs.
#[derive(Clone, Debug)]
pub enum TopK<R: Runtime> {
    /// Fixed k
    Static(usize),
    /// k read from a one-element I32/I64 tensor
    Dynamic(Tensor<R>),
}

impl<R: Runtime> From<usize> for TopK<R> {
    fn from(k: usize) -> Self {
        Self::Static(k)
    }
}

impl<R: Runtime> From<Tensor<R>> for TopK<R> {
    fn from(k: Tensor<R>) -> Self {
        Self::Dynamic(k)
    }
}

impl<R: Runtime> From<&Tensor<R>> for TopK<R> {
    fn from(k: &Tensor<R>) -> Self {
        Self::Dynamic(k.clone())
    }
}

/// Selection operations
///
/// All index outputs are I64 unless an explicit index dtype is requested.
pub trait SelectionOps<R: Runtime> {
    /// Index of the maximum.
    ///
    /// # Arguments
    ///
    /// * `a` - Input tensor
    /// * `dim` - Axis to reduce; `None` flattens `a` and returns one linear index
    /// * `keepdim` - Keep the reduced axis (or every axis when flattening) with size 1
    /// * `dtype` - Output index type, `I32` or `I64`. `None` is rejected.
    ///
    /// The first occurrence of the maximum wins. A NaN counts as the maximum,
    /// so the first NaN in a lane is reported.
    ///
    /// ```
    /// # use seekr::prelude::*;
    /// # let device = CpuDevice::new();
    /// # let client = CpuRuntime::default_client(&device);
    /// let a = Tensor::<CpuRuntime>::from_slice(&[5.0f32, 5.0, 3.0], &[3], &device);
    /// let idx = client.argmax(&a, None, false, Some(DType::I64))?;
    /// assert_eq!(idx.item::<i64>()?, 0);
    /// # Ok::<(), seekr::error::Error>(())
    /// ```
    fn argmax(
        &self,
        a: &Tensor<R>,
        dim: Option<isize>,
        keepdim: bool,
        dtype: Option<DType>,
    ) -> Result<Tensor<R>> {
        let _ = (a, dim, keepdim, dtype);
        Err(Error::NotImplemented {
            feature: "SelectionOps::argmax",
        })
    }

    /// Index of the minimum.
    ///
    /// Same contract as [`Self::argmax`]; a NaN also counts as the extremum
    /// here, so NaNs propagate to the result.
    fn argmin(
        &self,
        a: &Tensor<R>,
        dim: Option<isize>,
        keepdim: bool,
        dtype: Option<DType>,
    ) -> Result<Tensor<R>> {
        let _ = (a, dim, keepdim, dtype);
        Err(Error::NotImplemented {
            feature: "SelectionOps::argmin",
        })
    }

    /// The `k` largest (or smallest) elements along `dim`.
    ///
    /// # Arguments
    ///
    /// * `k` - A `usize` or a one-element integer tensor (see [`TopK`])
    /// * `largest` - Select the largest elements, otherwise the smallest
    /// * `sorted` - Order the result by value; otherwise the selected
    ///   elements appear in ascending source-position order
    ///
    /// Among equal values the lower source position is selected first.
    ///
    /// # Errors
    ///
    /// `k` larger than the axis is a Range error.
    ///
    /// ```
    /// # use seekr::prelude::*;
    /// # let device = CpuDevice::new();
    /// # let client = CpuRuntime::default_client(&device);
    /// let a = Tensor::<CpuRuntime>::from_slice(&[1.0f64, 3.0, 4.0, 5.0, 7.0], &[5], &device);
    /// let (values, indices) = client.topk(&a, 1usize, -1, true, true)?;
    /// assert_eq!(values.to_vec::<f64>(), [7.0]);
    /// assert_eq!(indices.to_vec::<i64>(), [4]);
    /// # Ok::<(), seekr::error::Error>(())
    /// ```
    fn topk<K: Into<TopK<R>>>(
        &self,
        a: &Tensor<R>,
        k: K,
        dim: isize,
        largest: bool,
        sorted: bool,
    ) -> Result<(Tensor<R>, Tensor<R>)> {
        let _ = (a, k.into(), dim, largest, sorted);
        Err(Error::NotImplemented {
            feature: "SelectionOps::topk",
        })
    }

    /// The k-th smallest element along `dim` (1-indexed) and its position.
    ///
    /// Ties resolve to the lowest source position among equal values.
    fn kthvalue(
        &self,
        a: &Tensor<R>,
        k: usize,
        dim: isize,
        keepdim: bool,
    ) -> Result<(Tensor<R>, Tensor<R>)> {
        let _ = (a, k, dim, keepdim);
        Err(Error::NotImplemented {
            feature: "SelectionOps::kthvalue",
        })
    }

    /// Most frequent value along `dim` and the position of its last occurrence.
    ///
    /// Among equally frequent values the largest one wins.
    fn mode(&self, a: &Tensor<R>, dim: isize, keepdim: bool) -> Result<(Tensor<R>, Tensor<R>)> {
        let _ = (a, dim, keepdim);
        Err(Error::NotImplemented {
            feature: "SelectionOps::mode",
        })
    }
}
